/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use dporter_core::registry::NewPr;
use dporter_core::types::{MPr, ServerState};
use std::sync::Arc;

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<NewPr>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MPr>)> {
    let Json(body) = body?;

    let pr = state
        .registry
        .register_pr(body)
        .await
        .map_err(|e| WebError::store_failure("Failed to register PR", e))?;

    Ok((StatusCode::CREATED, Json(pr)))
}
