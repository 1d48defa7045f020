/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dporter_core::locks::{LockError, LockHolder};
use dporter_core::users::DirectoryError;
use sea_orm::DbErr;
use std::fmt;

use crate::requests::ErrorResponse;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    UnknownDeveloper(String),
    PortLocked(LockHolder),
    InternalServerError(String),
    Database(DbErr),
    JsonParsing(JsonRejection),
    FormParsing(FormRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::UnknownDeveloper(id) => write!(f, "Unknown developer: {}", id),
            WebError::PortLocked(holder) => write!(f, "Port locked by {}", holder),
            WebError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::FormParsing(err) => write!(f, "Form parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::FormParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<FormRejection> for WebError {
    fn from(err: FormRejection) -> Self {
        WebError::FormParsing(err)
    }
}

impl From<LockError> for WebError {
    fn from(err: LockError) -> Self {
        match err {
            LockError::UnknownDeveloper(id) => WebError::UnknownDeveloper(id),
            LockError::PortNotFound(_) => WebError::not_found("Port"),
            LockError::AlreadyLocked { holder, .. } => WebError::PortLocked(holder),
            LockError::Store(err) => WebError::store_failure("Failed to lock port", err),
        }
    }
}

impl From<DirectoryError> for WebError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::NotFound(_) => WebError::not_found("User"),
            DirectoryError::AlreadyExists(_) => WebError::already_exists("User"),
            DirectoryError::InvalidInput(msg) => WebError::BadRequest(msg),
            DirectoryError::Store(err) => WebError::Database(err),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
            WebError::Conflict(msg) => (StatusCode::CONFLICT, ErrorResponse::new(msg)),
            WebError::UnknownDeveloper(id) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    details: Some(format!(
                        "Developer '{}' is not in the authorized users list.",
                        id
                    )),
                    ..ErrorResponse::new("Unknown developer ID. Contact admin to add user.")
                },
            ),
            WebError::PortLocked(holder) => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    locked_by: Some(holder.developer_name),
                    locked_by_id: Some(holder.developer_id),
                    locked_at: Some(holder.locked_at),
                    expires_at: Some(holder.expires_at),
                    ..ErrorResponse::new("Port already locked")
                },
            ),
            WebError::InternalServerError(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::new(msg))
            }
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("Database error"),
                )
            }
            WebError::JsonParsing(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(format!("Invalid JSON: {}", err.body_text())),
            ),
            WebError::FormParsing(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(format!("Invalid form: {}", err.body_text())),
            ),
        };

        (status, Json(body)).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

// Helper functions for common error scenarios
impl WebError {
    pub fn already_exists(resource: &str) -> Self {
        WebError::Conflict(format!("{} already exists", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    /// Logs the store failure and hides its detail from the client.
    pub fn store_failure(message: &str, err: DbErr) -> Self {
        tracing::error!(error = %err, "{}", message);
        WebError::InternalServerError(message.to_string())
    }
}
