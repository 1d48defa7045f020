/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod builds;
pub mod locks;
pub mod ports;
pub mod prs;
pub mod users;

use crate::error::{WebError, WebResult};
use crate::requests::MessageResponse;
use axum::extract::rejection::PathRejection;
use axum::extract::{Json, Path, State};
use dporter_core::types::ServerState;
use std::sync::Arc;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health(state: State<Arc<ServerState>>) -> WebResult<Json<MessageResponse>> {
    state.db.ping().await?;
    Ok(Json(MessageResponse::new("200 ALIVE")))
}

/// A port id that does not parse cannot name any port.
pub(crate) fn port_id(path: Result<Path<i32>, PathRejection>) -> WebResult<i32> {
    path.map(|Path(id)| id)
        .map_err(|_| WebError::not_found("Port"))
}
