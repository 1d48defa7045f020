/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use entity::{lock, pr};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::consts::{DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, DEFAULT_PR_STATUS};
use super::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
}

impl Pagination {
    /// 1-indexed. Non-positive values fall back to the defaults.
    pub fn normalize(page: i64, limit: i64) -> Self {
        Self {
            page: u64::try_from(page)
                .ok()
                .filter(|p| *p > 0)
                .unwrap_or(DEFAULT_PAGE),
            limit: u64::try_from(limit)
                .ok()
                .filter(|l| *l > 0)
                .unwrap_or(DEFAULT_PAGE_LIMIT),
        }
    }

    /// Rows to skip. `None` when the page starts past any offset the store
    /// can bind, which is `i64::MAX`.
    pub fn offset(&self) -> Option<u64> {
        (self.page - 1)
            .checked_mul(self.limit)
            .filter(|offset| i64::try_from(*offset).is_ok())
    }
}

/// A port together with whatever relations were loaded for it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PortView {
    #[serde(flatten)]
    pub port: MPort,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock: Option<MLock>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prs: Vec<MPr>,
}

impl From<(MPort, Option<MLock>)> for PortView {
    fn from((port, lock): (MPort, Option<MLock>)) -> Self {
        Self {
            port,
            lock,
            prs: Vec::new(),
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct PortPage {
    pub ports: Vec<PortView>,
    pub total: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewPr {
    pub port_id: i32,
    #[serde(default)]
    pub pr_number: i32,
    #[serde(default)]
    pub pr_url: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PortRegistry {
    db: Arc<DatabaseConnection>,
}

impl PortRegistry {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Every port with its lock, ordered by id.
    pub async fn list_ports(&self) -> Result<Vec<PortView>, DbErr> {
        let ports = EPort::find()
            .find_also_related(lock::Entity)
            .order_by_asc(CPort::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(ports.into_iter().map(PortView::from).collect())
    }

    pub async fn list_ports_paginated(&self, page: i64, limit: i64) -> Result<PortPage, DbErr> {
        let pagination = Pagination::normalize(page, limit);

        let total = EPort::find().count(self.db.as_ref()).await?;

        let Some(offset) = pagination.offset().filter(|offset| *offset < total) else {
            return Ok(PortPage {
                ports: Vec::new(),
                total,
            });
        };

        let ports = EPort::find()
            .find_also_related(lock::Entity)
            .order_by_asc(CPort::Id)
            .offset(offset)
            .limit(pagination.limit)
            .all(self.db.as_ref())
            .await?;

        Ok(PortPage {
            ports: ports.into_iter().map(PortView::from).collect(),
            total,
        })
    }

    /// The port with its lock and pull requests, `None` if the id is unknown.
    pub async fn get_port_status(&self, port_id: i32) -> Result<Option<PortView>, DbErr> {
        let Some(port) = EPort::find_by_id(port_id).one(self.db.as_ref()).await? else {
            return Ok(None);
        };

        let lock = port.find_related(lock::Entity).one(self.db.as_ref()).await?;
        let prs = port
            .find_related(pr::Entity)
            .order_by_asc(CPr::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(Some(PortView { port, lock, prs }))
    }

    /// Stores the pull request as given. The port reference is only checked
    /// by the foreign key.
    pub async fn register_pr(&self, pr: NewPr) -> Result<MPr, DbErr> {
        let now = Utc::now();
        let apr = APr {
            id: NotSet,
            port_id: Set(pr.port_id),
            pr_number: Set(pr.pr_number),
            pr_url: Set(pr.pr_url),
            status: Set(pr
                .status
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_PR_STATUS.to_string())),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let pr = apr.insert(self.db.as_ref()).await?;

        tracing::info!(
            pr_id = pr.id,
            port_id = pr.port_id,
            pr_number = pr.pr_number,
            "Registered pull request"
        );

        Ok(pr)
    }
}
