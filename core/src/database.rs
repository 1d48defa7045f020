/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::Migrator;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait,
};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;

use super::consts::{SEED_PORT_STATUS, SEED_PORTS, SEED_USERS};
use super::input::load_secret;
use super::types::*;

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        load_secret(file).context("Failed to read database url from file")?
    } else {
        cli.database_url.clone()
    };

    // Only enable SQL logging at debug level
    let sql_logging = matches!(cli.log_level.as_str(), "debug" | "trace");

    open_db(&db_url, cli.database_max_connections, sql_logging).await
}

/// Connects, migrates and seeds the store behind `db_url`.
pub async fn open_db(
    db_url: &str,
    max_connections: u32,
    sql_logging: bool,
) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url.to_owned());

    if sql_logging {
        opt.sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    seed_db(&db).await.context("Failed to seed database")?;
    Ok(db)
}

pub async fn seed_db(db: &DatabaseConnection) -> Result<(), DbErr> {
    seed_ports(db).await?;
    seed_users(db).await
}

async fn seed_ports(db: &DatabaseConnection) -> Result<(), DbErr> {
    if EPort::find().count(db).await? > 0 {
        return Ok(());
    }

    let now = Utc::now();
    let ports = SEED_PORTS.iter().map(|(name, category, description)| APort {
        id: NotSet,
        name: Set(name.to_string()),
        category: Set(category.to_string()),
        status: Set(SEED_PORT_STATUS.to_string()),
        description: Set(description.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    });

    EPort::insert_many(ports).exec(db).await?;

    tracing::info!(count = SEED_PORTS.len(), "Seeded initial ports");

    Ok(())
}

async fn seed_users(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (username, name) in SEED_USERS {
        if EUser::find_by_id(username).one(db).await?.is_some() {
            continue;
        }

        let now = Utc::now();
        let auser = AUser {
            username: Set(username.to_string()),
            name: Set(name.to_string()),
            email: Set(String::new()),
            avatar_url: Set(String::new()),
            active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        auser.insert(db).await?;

        tracing::info!(username, name, "Created user");
    }

    Ok(())
}
