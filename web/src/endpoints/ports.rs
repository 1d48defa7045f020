/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::port_id;
use crate::error::{WebError, WebResult};
use crate::requests::PaginationQuery;
use axum::extract::rejection::PathRejection;
use axum::extract::{Json, Path, Query, State};
use dporter_core::input::parse_query_number;
use dporter_core::registry::{PortPage, PortView};
use dporter_core::types::ServerState;
use std::sync::Arc;

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<PortView>>> {
    let ports = state
        .registry
        .list_ports()
        .await
        .map_err(|e| WebError::store_failure("Failed to fetch ports", e))?;

    Ok(Json(ports))
}

pub async fn get_paginated(
    state: State<Arc<ServerState>>,
    Query(query): Query<PaginationQuery>,
) -> WebResult<Json<PortPage>> {
    let page = parse_query_number(query.page.as_deref());
    let limit = parse_query_number(query.limit.as_deref());

    let ports = state
        .registry
        .list_ports_paginated(page, limit)
        .await
        .map_err(|e| WebError::store_failure("Failed to fetch ports", e))?;

    Ok(Json(ports))
}

pub async fn get_status(
    state: State<Arc<ServerState>>,
    path: Result<Path<i32>, PathRejection>,
) -> WebResult<Json<PortView>> {
    let port_id = port_id(path)?;

    let view = state
        .registry
        .get_port_status(port_id)
        .await
        .map_err(|e| WebError::store_failure("Failed to fetch port status", e))?
        .ok_or_else(|| WebError::not_found("Port"))?;

    Ok(Json(view))
}
