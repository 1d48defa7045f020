/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::port_id;
use crate::error::{WebError, WebResult};
use crate::requests::{LockRequest, MessageResponse};
use axum::extract::rejection::{FormRejection, PathRejection};
use axum::extract::{Form, Json, Path, State};
use dporter_core::locks::DeveloperClaim;
use dporter_core::types::{MLock, ServerState};
use std::sync::Arc;

pub async fn post(
    state: State<Arc<ServerState>>,
    path: Result<Path<i32>, PathRejection>,
    form: Result<Form<LockRequest>, FormRejection>,
) -> WebResult<Json<MLock>> {
    let port_id = port_id(path)?;
    let Form(body) = form?;

    let claim = DeveloperClaim::new(body.developer_id, body.developer_name);
    let lock = state.locks.acquire(port_id, &claim).await?;

    Ok(Json(lock))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<MessageResponse>> {
    let port_id = port_id(path)?;

    state
        .locks
        .release(port_id)
        .await
        .map_err(|e| WebError::store_failure("Failed to unlock port", e))?;

    Ok(Json(MessageResponse::new("Port unlocked successfully")))
}
