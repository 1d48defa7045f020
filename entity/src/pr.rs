/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "pr")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub port_id: i32,
    pub pr_number: i32,
    pub pr_url: String,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
    #[sea_orm(has_many = "super::build::Entity")]
    Build,
}

impl Related<super::port::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Port.def()
    }
}

impl Related<super::build::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Build.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
