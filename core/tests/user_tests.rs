/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for the user directory

mod common;

use dporter_core::consts::SEED_USERS;
use dporter_core::users::*;

fn new_user(username: &str, active: bool) -> NewUser {
    NewUser {
        username: username.to_string(),
        name: "New Dev".to_string(),
        email: "newdev@example.org".to_string(),
        avatar_url: String::new(),
        active,
    }
}

#[tokio::test]
async fn test_list_is_active_users_by_name() {
    let (_dir, db) = common::test_db().await;
    let users = UserDirectory::new(db);

    let listed = users.list().await.unwrap();
    assert_eq!(listed.len(), SEED_USERS.len());
    assert!(listed.iter().all(|u| u.active));

    let names: Vec<_> = listed.iter().map(|u| u.name.clone()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names[0], "Antonio Huete Jimenez");
}

#[tokio::test]
async fn test_create_forces_active() {
    let (_dir, db) = common::test_db().await;
    let users = UserDirectory::new(db);

    let created = users.create(new_user("newdev", false)).await.unwrap();
    assert_eq!(created.username, "newdev");
    assert_eq!(created.name, "New Dev");
    assert!(created.active);

    let found = users.find("newdev").await.unwrap().unwrap();
    assert!(found.active);
}

#[tokio::test]
async fn test_create_rejects_duplicates_and_empty_usernames() {
    let (_dir, db) = common::test_db().await;
    let users = UserDirectory::new(db);

    let err = users.create(new_user("tuxillo", true)).await.unwrap_err();
    assert!(matches!(err, DirectoryError::AlreadyExists(ref u) if u == "tuxillo"));

    let err = users.create(new_user("", true)).await.unwrap_err();
    assert!(matches!(err, DirectoryError::InvalidInput(_)));
}

#[tokio::test]
async fn test_update_replaces_fields() {
    let (_dir, db) = common::test_db().await;
    let users = UserDirectory::new(db);

    let updated = users
        .update(
            "dillonb",
            UserPatch {
                name: "Matthew Dillon".to_string(),
                email: "dillon@example.org".to_string(),
                avatar_url: "https://example.org/dillon.png".to_string(),
                active: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Matthew Dillon");
    assert_eq!(updated.email, "dillon@example.org");
    assert!(updated.active);

    // Full replace: an omitted active flag deactivates.
    let replaced = users
        .update(
            "dillonb",
            UserPatch {
                name: "Matthew Dillon".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(replaced.email, "");
    assert_eq!(replaced.avatar_url, "");
    assert!(!replaced.active);
}

#[tokio::test]
async fn test_update_unknown_user() {
    let (_dir, db) = common::test_db().await;
    let users = UserDirectory::new(db);

    let err = users
        .update("nobody", UserPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound(ref u) if u == "nobody"));
}

#[tokio::test]
async fn test_deactivate_keeps_row() {
    let (_dir, db) = common::test_db().await;
    let users = UserDirectory::new(db);

    let deactivated = users.deactivate("swildner").await.unwrap();
    assert!(!deactivated.active);

    let listed = users.list().await.unwrap();
    assert!(listed.iter().all(|u| u.username != "swildner"));
    assert_eq!(listed.len(), SEED_USERS.len() - 1);

    let found = users.find("swildner").await.unwrap().unwrap();
    assert_eq!(found.name, "Sascha Wildner");
    assert!(!found.active);

    let err = users.deactivate("nobody").await.unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound(_)));
}
