/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "port")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub category: String,
    pub status: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::lock::Entity")]
    Lock,
    #[sea_orm(has_many = "super::pr::Entity")]
    Pr,
}

impl Related<super::lock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lock.def()
    }
}

impl Related<super::pr::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pr.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
