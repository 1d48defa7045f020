/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::body::Bytes;
use axum::http::StatusCode;
use dporter_core::types::DeveloperValidation;
use serde_json::{Value, json};

#[tokio::test]
async fn test_list_seeded_users() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    let response = server.get("/api/v1/users").await;
    response.assert_status_ok();

    let users: Vec<Value> = response.json();
    assert_eq!(users.len(), 8);

    let names: Vec<&str> = users.iter().map(|u| u["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[tokio::test]
async fn test_create_user_is_always_active() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "username": "newdev", "name": "New Dev", "active": false }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let user: Value = response.json();
    assert_eq!(user["username"], "newdev");
    assert_eq!(user["name"], "New Dev");
    assert_eq!(user["active"], true);

    let id = common::port_id(&server, "devel/git").await;
    server
        .post(&format!("/api/v1/ports/{id}/lock"))
        .form(&[("developer_id", "newdev")])
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_create_user_conflict_and_validation() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "username": "tuxillo", "name": "Impostor" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let body: Value = response.json();
    assert_eq!(body["error"], "User already exists");

    let response = server
        .post("/api/v1/users")
        .json(&json!({ "username": "", "name": "Nobody" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/v1/users")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"[1, 2"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    let response = server
        .put("/api/v1/users/dillonb")
        .json(&json!({
            "name": "Dillon B",
            "email": "dillon@example.org",
            "active": true,
        }))
        .await;
    response.assert_status_ok();

    let user: Value = response.json();
    assert_eq!(user["username"], "dillonb");
    assert_eq!(user["name"], "Dillon B");
    assert_eq!(user["email"], "dillon@example.org");
    assert_eq!(user["avatar_url"], "");
    assert_eq!(user["active"], true);

    let response = server
        .put("/api/v1/users/ghost")
        .json(&json!({ "name": "Ghost" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");

    server
        .put("/api/v1/users/dillonb")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{"))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    let response = server
        .put("/api/v1/users/ghost")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_deactivate_user() {
    let (_dir, server) = common::create_test_server(DeveloperValidation::Roster).await;

    let response = server.delete("/api/v1/users/sephe").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "User deactivated successfully");

    let users: Vec<Value> = server.get("/api/v1/users").await.json();
    assert_eq!(users.len(), 7);
    assert!(users.iter().all(|u| u["username"] != "sephe"));

    let id = common::port_id(&server, "devel/git").await;
    server
        .post(&format!("/api/v1/ports/{id}/lock"))
        .form(&[("developer_id", "sephe")])
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .delete("/api/v1/users/ghost")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
