/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::{TimeZone, Utc};
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Sqlite)
        .append_query_results([vec![user::Model {
            username: "dillonb".to_owned(),
            name: "Dillon".to_owned(),
            email: String::new(),
            avatar_url: String::new(),
            active: true,
            created_at: now,
            updated_at: now,
        }]])
        .into_connection();

    let result = user::Entity::find_by_id("dillonb".to_owned()).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.name, "Dillon");
    assert!(user.active);

    Ok(())
}

#[test]
fn test_user_deserialization() {
    let user: user::Model = serde_json::from_str(
        r#"{
            "username": "sephe",
            "name": "Sepherosa Ziehau",
            "email": "sephe@example.org",
            "avatar_url": "",
            "active": false,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    assert_eq!(user.username, "sephe");
    assert!(!user.active);
}
