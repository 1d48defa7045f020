/*
 * SPDX-FileCopyrightText: 2025 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;
pub mod requests;

use axum::Router;
use axum::routing::{get, post, put};
use dporter_core::types::{Cli, ServerState};
use http::{HeaderValue, Method, header};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

fn cors_layer(cli: &Cli) -> CorsLayer {
    let allow_origin = match cli.cors_origin.as_deref() {
        None => AllowOrigin::any(),
        Some(origin) => match HeaderValue::from_str(origin) {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(e) => {
                tracing::error!(%origin, error = %e, "Invalid CORS origin, rejecting cross-origin requests");
                AllowOrigin::list(Vec::<HeaderValue>::new())
            }
        },
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    let api = Router::new()
        .route("/ports", get(endpoints::ports::get))
        .route("/ports_paginated", get(endpoints::ports::get_paginated))
        .route(
            "/ports/{id}/lock",
            post(endpoints::locks::post).delete(endpoints::locks::delete),
        )
        .route("/ports/{id}/status", get(endpoints::ports::get_status))
        .route("/prs", post(endpoints::prs::post))
        .route("/builds/webhook", post(endpoints::builds::post_webhook))
        .route(
            "/users",
            get(endpoints::users::get).post(endpoints::users::post),
        )
        .route(
            "/users/{username}",
            put(endpoints::users::put).delete(endpoints::users::delete),
        )
        .route("/health", get(endpoints::get_health));

    Router::new()
        .nest("/api/v1", api)
        .fallback(endpoints::handle_404)
        .layer(cors_layer(&state.cli))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!(address = %server_url, "Listening");

    axum::serve(listener, app).await
}
