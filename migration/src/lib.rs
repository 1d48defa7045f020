/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_table_user;
mod m20250801_000002_create_table_port;
mod m20250801_000003_create_table_lock;
mod m20250801_000004_create_table_pr;
mod m20250801_000005_create_table_build;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_table_user::Migration),
            Box::new(m20250801_000002_create_table_port::Migration),
            Box::new(m20250801_000003_create_table_lock::Migration),
            Box::new(m20250801_000004_create_table_pr::Migration),
            Box::new(m20250801_000005_create_table_build::Migration),
        ]
    }
}
