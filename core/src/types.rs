/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use super::locks::{ActiveRoster, DeveloperValidator, LockManager, TrustCaller};
use super::registry::PortRegistry;
use super::users::UserDirectory;
use clap::{Parser, ValueEnum};
use entity::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeveloperValidation {
    /// Only active users of the roster may lock ports.
    Roster,
    /// Take the developer id and name submitted by the caller as-is.
    Trust,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "dporter", display_name = "DPorter", bin_name = "dporter-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "DPORTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "DPORTER_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "DPORTER_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "DPORTER_PORT", value_parser = port_in_range, default_value_t = 8080)]
    pub port: u16,
    #[arg(
        long,
        env = "DPORTER_DATABASE_URL",
        default_value = "sqlite://dporter.db?mode=rwc"
    )]
    pub database_url: String,
    #[arg(long, env = "DPORTER_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "DPORTER_DATABASE_MAX_CONNECTIONS", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub database_max_connections: u32,
    #[arg(
        long,
        env = "DPORTER_DEVELOPER_VALIDATION",
        value_enum,
        default_value_t = DeveloperValidation::Roster
    )]
    pub developer_validation: DeveloperValidation,
    #[arg(long, env = "DPORTER_RECLAIM_EXPIRED_LOCKS", default_value = "false")]
    pub reclaim_expired_locks: bool,
    #[arg(long, env = "DPORTER_CORS_ORIGIN")]
    pub cors_origin: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: Arc<DatabaseConnection>,
    pub cli: Cli,
    pub locks: LockManager,
    pub users: UserDirectory,
    pub registry: PortRegistry,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, cli: Cli) -> Self {
        let db = Arc::new(db);
        let validator: Arc<dyn DeveloperValidator> = match cli.developer_validation {
            DeveloperValidation::Roster => Arc::new(ActiveRoster::new(Arc::clone(&db))),
            DeveloperValidation::Trust => Arc::new(TrustCaller),
        };

        let locks =
            LockManager::new(Arc::clone(&db), validator).reclaim_expired(cli.reclaim_expired_locks);

        Self {
            locks,
            users: UserDirectory::new(Arc::clone(&db)),
            registry: PortRegistry::new(Arc::clone(&db)),
            db,
            cli,
        }
    }
}

pub type EBuild = build::Entity;
pub type ELock = lock::Entity;
pub type EPort = port::Entity;
pub type EPr = pr::Entity;
pub type EUser = user::Entity;

pub type MBuild = build::Model;
pub type MLock = lock::Model;
pub type MPort = port::Model;
pub type MPr = pr::Model;
pub type MUser = user::Model;

pub type ABuild = build::ActiveModel;
pub type ALock = lock::ActiveModel;
pub type APort = port::ActiveModel;
pub type APr = pr::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CBuild = build::Column;
pub type CLock = lock::Column;
pub type CPort = port::Column;
pub type CPr = pr::Column;
pub type CUser = user::Column;
