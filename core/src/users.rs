/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Roster of developers allowed to lock ports.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::input::validate_username;
use super::types::*;

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("user '{0}' not found")]
    NotFound(String),
    #[error("user '{0}' already exists")]
    AlreadyExists(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Store(#[from] DbErr),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewUser {
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    /// Accepted for compatibility and ignored: new users are always active.
    #[serde(default)]
    pub active: bool,
}

/// Replaces all editable fields of a user. Omitted fields are reset to their
/// empty value, including `active`.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UserPatch {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct UserDirectory {
    db: Arc<DatabaseConnection>,
}

impl UserDirectory {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Active users ordered by display name.
    pub async fn list(&self) -> Result<Vec<MUser>, DbErr> {
        EUser::find()
            .filter(CUser::Active.eq(true))
            .order_by_asc(CUser::Name)
            .all(self.db.as_ref())
            .await
    }

    /// Looks a user up regardless of its active flag.
    pub async fn find(&self, username: &str) -> Result<Option<MUser>, DbErr> {
        EUser::find_by_id(username).one(self.db.as_ref()).await
    }

    pub async fn create(&self, user: NewUser) -> Result<MUser, DirectoryError> {
        validate_username(&user.username).map_err(DirectoryError::InvalidInput)?;

        if self.find(&user.username).await?.is_some() {
            return Err(DirectoryError::AlreadyExists(user.username));
        }

        let now = Utc::now();
        let auser = AUser {
            username: Set(user.username.clone()),
            name: Set(user.name),
            email: Set(user.email),
            avatar_url: Set(user.avatar_url),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = auser.insert(self.db.as_ref()).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                DirectoryError::AlreadyExists(user.username.clone())
            }
            _ => DirectoryError::Store(e),
        })?;

        tracing::info!(username = %created.username, name = %created.name, "Created user");

        Ok(created)
    }

    pub async fn update(&self, username: &str, patch: UserPatch) -> Result<MUser, DirectoryError> {
        let user = self
            .find(username)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(username.to_string()))?;

        let mut auser: AUser = user.into();
        auser.name = Set(patch.name);
        auser.email = Set(patch.email);
        auser.avatar_url = Set(patch.avatar_url);
        auser.active = Set(patch.active);
        auser.updated_at = Set(Utc::now());

        let updated = auser.update(self.db.as_ref()).await?;

        tracing::info!(username, active = updated.active, "Updated user");

        Ok(updated)
    }

    /// Soft delete: the row stays, `active` becomes false.
    pub async fn deactivate(&self, username: &str) -> Result<MUser, DirectoryError> {
        let user = self
            .find(username)
            .await?
            .ok_or_else(|| DirectoryError::NotFound(username.to_string()))?;

        let mut auser: AUser = user.into();
        auser.active = Set(false);
        auser.updated_at = Set(Utc::now());

        let deactivated = auser.update(self.db.as_ref()).await?;

        tracing::info!(username, "Deactivated user");

        Ok(deactivated)
    }
}
