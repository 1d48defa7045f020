/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::{HeaderValue, Method, StatusCode, header};
use dporter_core::types::DeveloperValidation;
use serde_json::Value;

#[tokio::test]
async fn test_health() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    let response = server.get("/api/v1/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "200 ALIVE");
}

#[tokio::test]
async fn test_unknown_route() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    for path in ["/api/v1/nope", "/elsewhere"] {
        let response = server.get(path).await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["error"], "Not Found");
    }
}

#[tokio::test]
async fn test_cors_preflight() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    let response = server
        .method(Method::OPTIONS, "/api/v1/ports")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("http://localhost:3000"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("GET"),
        )
        .await;
    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}
