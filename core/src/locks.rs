/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Exclusive per-port locks.
//!
//! A port has at most one lock. The store enforces this through the unique
//! index on `lock.port_id`, so acquisition is a single conditional insert:
//! whichever concurrent caller inserts first wins and every other caller
//! observes the winner as the current holder.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use super::consts::LOCK_DURATION_HOURS;
use super::types::*;

const INSERT_ATTEMPTS: usize = 3;

/// Identity submitted by the caller of a lock request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeveloperClaim {
    pub id: String,
    pub name: Option<String>,
}

impl DeveloperClaim {
    pub fn new(id: impl Into<String>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }
}

/// Identity recorded on a lock once a claim has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Developer {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockHolder {
    pub developer_id: String,
    pub developer_name: String,
    pub locked_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl From<MLock> for LockHolder {
    fn from(lock: MLock) -> Self {
        Self {
            developer_id: lock.developer_id,
            developer_name: lock.developer_name,
            locked_at: lock.locked_at,
            expires_at: lock.expires_at,
        }
    }
}

impl fmt::Display for LockHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) until {}",
            self.developer_name, self.developer_id, self.expires_at
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("developer '{0}' is not in the authorized users list")]
    UnknownDeveloper(String),
    #[error("port {0} not found")]
    PortNotFound(i32),
    #[error("port {port_id} already locked by {holder}")]
    AlreadyLocked { port_id: i32, holder: LockHolder },
    #[error(transparent)]
    Store(#[from] DbErr),
}

/// Resolves the identity a lock is recorded under.
#[async_trait]
pub trait DeveloperValidator: fmt::Debug + Send + Sync {
    async fn validate(&self, claim: &DeveloperClaim) -> Result<Developer, LockError>;
}

/// Accepts the submitted id and name verbatim. Nothing stops a caller from
/// locking under someone else's name.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrustCaller;

#[async_trait]
impl DeveloperValidator for TrustCaller {
    async fn validate(&self, claim: &DeveloperClaim) -> Result<Developer, LockError> {
        Ok(Developer {
            id: claim.id.clone(),
            name: claim.name.clone().unwrap_or_default(),
        })
    }
}

/// Requires the claimed id to be the username of an active user. The stored
/// name is taken from the roster, the submitted one is ignored.
#[derive(Debug, Clone)]
pub struct ActiveRoster {
    db: Arc<DatabaseConnection>,
}

impl ActiveRoster {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DeveloperValidator for ActiveRoster {
    async fn validate(&self, claim: &DeveloperClaim) -> Result<Developer, LockError> {
        let user = EUser::find()
            .filter(CUser::Username.eq(claim.id.as_str()))
            .filter(CUser::Active.eq(true))
            .one(self.db.as_ref())
            .await?;

        match user {
            Some(user) => Ok(Developer {
                id: user.username,
                name: user.name,
            }),
            None => Err(LockError::UnknownDeveloper(claim.id.clone())),
        }
    }
}

enum Attempt {
    Inserted(MLock),
    Collision(MLock),
    // The conflicting lock was released before it could be read back.
    Vanished(DbErr),
}

#[derive(Debug, Clone)]
pub struct LockManager {
    db: Arc<DatabaseConnection>,
    validator: Arc<dyn DeveloperValidator>,
    lock_duration: Duration,
    reclaim_expired: bool,
}

impl LockManager {
    pub fn new(db: Arc<DatabaseConnection>, validator: Arc<dyn DeveloperValidator>) -> Self {
        Self {
            db,
            validator,
            lock_duration: Duration::hours(LOCK_DURATION_HOURS),
            reclaim_expired: false,
        }
    }

    /// When enabled, a lock past its `expires_at` no longer blocks `acquire`.
    /// Disabled by default: expiry is informational only.
    pub fn reclaim_expired(mut self, enabled: bool) -> Self {
        self.reclaim_expired = enabled;
        self
    }

    pub async fn acquire(&self, port_id: i32, claim: &DeveloperClaim) -> Result<MLock, LockError> {
        let developer = self.validator.validate(claim).await?;

        if EPort::find_by_id(port_id).one(self.db.as_ref()).await?.is_none() {
            return Err(LockError::PortNotFound(port_id));
        }

        let mut reclaimed = false;
        let mut last_err = None;

        for _ in 0..INSERT_ATTEMPTS {
            match self.try_insert(port_id, &developer).await? {
                Attempt::Inserted(lock) => {
                    tracing::info!(
                        port_id,
                        developer = %lock.developer_id,
                        expires_at = %lock.expires_at,
                        "Port locked"
                    );
                    return Ok(lock);
                }
                Attempt::Collision(existing) => {
                    if self.reclaim_expired && !reclaimed && existing.is_expired(Utc::now()) {
                        reclaimed = true;
                        let removed = self.remove_expired(port_id).await?;
                        tracing::info!(
                            port_id,
                            previous_holder = %existing.developer_id,
                            removed,
                            "Reclaiming expired lock"
                        );
                        continue;
                    }

                    tracing::debug!(
                        port_id,
                        developer = %developer.id,
                        holder = %existing.developer_id,
                        "Port already locked"
                    );
                    return Err(LockError::AlreadyLocked {
                        port_id,
                        holder: existing.into(),
                    });
                }
                Attempt::Vanished(err) => last_err = Some(err),
            }
        }

        Err(LockError::Store(last_err.unwrap_or_else(|| {
            DbErr::Custom(format!("failed to lock port {port_id}"))
        })))
    }

    /// Deletes whatever lock the port has. Neither the caller's identity nor
    /// the lock's expiry is checked. Returns the number of locks removed.
    pub async fn release(&self, port_id: i32) -> Result<u64, DbErr> {
        let res = ELock::delete_many()
            .filter(CLock::PortId.eq(port_id))
            .exec(self.db.as_ref())
            .await?;

        if res.rows_affected > 0 {
            tracing::info!(port_id, "Port unlocked");
        } else {
            tracing::debug!(port_id, "Unlock requested for port without lock");
        }

        Ok(res.rows_affected)
    }

    pub async fn holder(&self, port_id: i32) -> Result<Option<MLock>, DbErr> {
        ELock::find()
            .filter(CLock::PortId.eq(port_id))
            .one(self.db.as_ref())
            .await
    }

    async fn try_insert(&self, port_id: i32, developer: &Developer) -> Result<Attempt, LockError> {
        let now = Utc::now();
        let alock = ALock {
            id: NotSet,
            port_id: Set(port_id),
            developer_id: Set(developer.id.clone()),
            developer_name: Set(developer.name.clone()),
            locked_at: Set(now),
            expires_at: Set(now + self.lock_duration),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let err = match alock.insert(self.db.as_ref()).await {
            Ok(lock) => return Ok(Attempt::Inserted(lock)),
            Err(err) => err,
        };

        let unique_violation = matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)));

        match self.holder(port_id).await? {
            Some(existing) => Ok(Attempt::Collision(existing)),
            None if unique_violation => Ok(Attempt::Vanished(err)),
            None => Err(err.into()),
        }
    }

    async fn remove_expired(&self, port_id: i32) -> Result<u64, DbErr> {
        let res = ELock::delete_many()
            .filter(CLock::PortId.eq(port_id))
            .filter(CLock::ExpiresAt.lt(Utc::now()))
            .exec(self.db.as_ref())
            .await?;

        Ok(res.rows_affected)
    }
}
