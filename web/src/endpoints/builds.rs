/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use crate::requests::MessageResponse;
use axum::extract::Json;
use bytes::Bytes;

/// Acknowledges a build notification. The payload is not interpreted yet.
pub async fn post_webhook(body: Bytes) -> WebResult<Json<MessageResponse>> {
    tracing::debug!(bytes = body.len(), "Build webhook received, processing not implemented");
    Ok(Json(MessageResponse::new("Webhook received")))
}
