/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod input;
pub mod locks;
pub mod registry;
pub mod types;
pub mod users;

use anyhow::Result;
use database::connect_db;
use std::sync::Arc;
use types::*;

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!(ip = %cli.ip, port = cli.port, "Starting DPorter server");

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState::new(db, cli)))
}
