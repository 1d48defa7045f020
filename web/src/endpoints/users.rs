/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use crate::requests::MessageResponse;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use dporter_core::types::{MUser, ServerState};
use dporter_core::users::{DirectoryError, NewUser, UserPatch};
use std::sync::Arc;

fn directory_error(err: DirectoryError, failure: &str) -> WebError {
    match err {
        DirectoryError::Store(e) => WebError::store_failure(failure, e),
        other => other.into(),
    }
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MUser>>> {
    let users = state
        .users
        .list()
        .await
        .map_err(|e| WebError::store_failure("Failed to fetch users", e))?;

    Ok(Json(users))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MUser>)> {
    let Json(body) = body?;

    let user = state
        .users
        .create(body)
        .await
        .map_err(|e| directory_error(e, "Failed to create user"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    Path(username): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> WebResult<Json<MUser>> {
    // An unknown user is reported as such even when the body is malformed.
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            let known = state
                .users
                .find(&username)
                .await
                .map_err(|e| WebError::store_failure("Failed to update user", e))?;

            return Err(match known {
                Some(_) => rejection.into(),
                None => WebError::not_found("User"),
            });
        }
    };

    let user = state
        .users
        .update(&username, body)
        .await
        .map_err(|e| directory_error(e, "Failed to update user"))?;

    Ok(Json(user))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    Path(username): Path<String>,
) -> WebResult<Json<MessageResponse>> {
    state
        .users
        .deactivate(&username)
        .await
        .map_err(|e| directory_error(e, "Failed to deactivate user"))?;

    Ok(Json(MessageResponse::new("User deactivated successfully")))
}
