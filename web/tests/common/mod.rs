/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum_test::TestServer;
use dporter_core::database::open_db;
use dporter_core::types::*;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;

pub fn create_test_cli(database_url: String, validation: DeveloperValidation) -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 8080,
        database_url,
        database_url_file: None,
        database_max_connections: 4,
        developer_validation: validation,
        reclaim_expired_locks: false,
        cors_origin: None,
    }
}

/// Router over a freshly migrated and seeded SQLite store. Keep the returned
/// directory alive for as long as the server is used.
pub async fn create_test_server(validation: DeveloperValidation) -> (TempDir, TestServer) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("dporter.db").display()
    );

    let db = open_db(&url, 4, false)
        .await
        .expect("failed to open test database");
    let state = Arc::new(ServerState::new(db, create_test_cli(url, validation)));

    let server = TestServer::new(web::create_router(state)).expect("failed to build test server");
    (dir, server)
}

#[allow(dead_code)]
pub async fn port_id(server: &TestServer, name: &str) -> i64 {
    let ports: Vec<Value> = server.get("/api/v1/ports").await.json();
    ports
        .iter()
        .find(|p| p["name"] == name)
        .and_then(|p| p["id"].as_i64())
        .unwrap_or_else(|| panic!("port {name} not seeded"))
}
