/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// No endpoint reads or writes builds yet; they are reachable through a PR only.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "build")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pr_id: i32,
    pub build_id: String,
    pub status: String,
    pub log_url: String,
    pub started_at: Option<DateTimeUtc>,
    pub completed_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pr::Entity",
        from = "Column::PrId",
        to = "super::pr::Column::Id",
        on_delete = "Cascade"
    )]
    Pr,
}

impl Related<super::pr::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pr.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
