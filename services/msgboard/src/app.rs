//! HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and
//! testable; integration tests build the same router over a fresh store.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::auth;
use crate::auth::credentials::Authenticator;
use crate::auth::token::TokenService;
use crate::store::MessageStore;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub api_version: String,
    pub store: Arc<dyn MessageStore + Send + Sync>,
    pub authenticator: Arc<Authenticator>,
    pub tokens: TokenService,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            )
        });

    Router::new()
        .route(
            "/hellobypath/:name",
            axum::routing::get(api::greetings::hello_by_path),
        )
        .route(
            "/hellobyparam",
            axum::routing::get(api::greetings::hello_by_param),
        )
        .route(
            "/messages",
            axum::routing::get(api::messages::list_messages).post(api::messages::create_message),
        )
        .route(
            "/messages/:id",
            axum::routing::get(api::messages::get_message)
                .put(api::messages::update_message)
                .delete(api::messages::delete_message),
        )
        .route("/token", axum::routing::get(auth::issue::issue_token))
        .route("/system/info", axum::routing::get(api::system::system_info))
        .route(
            "/system/health",
            axum::routing::get(api::system::system_health),
        )
        .merge(utoipa_swagger_ui::SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(trace_layer)
        .with_state(state)
}
