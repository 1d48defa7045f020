/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Exclusive claim of one developer on one port. `port_id` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "lock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub port_id: i32,
    pub developer_id: String,
    pub developer_name: String,
    pub locked_at: DateTimeUtc,
    pub expires_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl Model {
    /// Expiry is informational; nothing releases a lock on its own.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::port::Entity",
        from = "Column::PortId",
        to = "super::port::Column::Id",
        on_delete = "Cascade"
    )]
    Port,
}

impl Related<super::port::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Port.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
