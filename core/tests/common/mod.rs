/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use dporter_core::database::open_db;
use dporter_core::types::*;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use tempfile::TempDir;

/// Migrated and seeded SQLite store in a fresh temporary directory. The
/// directory must outlive the connection.
pub async fn test_db() -> (TempDir, Arc<DatabaseConnection>) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("dporter.db").display()
    );

    let db = open_db(&url, 4, false)
        .await
        .expect("failed to open test database");

    (dir, Arc::new(db))
}

#[allow(dead_code)]
pub async fn port_id(db: &DatabaseConnection, name: &str) -> i32 {
    EPort::find()
        .filter(CPort::Name.eq(name))
        .one(db)
        .await
        .expect("port query failed")
        .unwrap_or_else(|| panic!("port {name} not seeded"))
        .id
}
