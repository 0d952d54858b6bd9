//! Token issuance endpoint handler.
//!
//! # Purpose
//! Validates query-string credentials against the credential table and mints
//! an access token for the authenticated identity.
use crate::api::error::{ApiError, api_forbidden, api_internal_message, api_validation_error};
use crate::app::AppState;
use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct TokenResponse {
    pub access_token: String,
}

#[utoipa::path(
    get,
    path = "/token",
    tag = "auth",
    params(
        ("username" = String, Query, description = "The name of the user"),
        ("password" = String, Query, description = "The password of the user")
    ),
    responses(
        (status = 200, description = "Signed access token", body = TokenResponse),
        (status = 400, description = "Input validation failed", body = crate::api::types::ErrorResponse),
        (status = 403, description = "Access denied", body = crate::api::types::ErrorResponse)
    )
)]
/// Authenticate a user by credentials and return a token.
///
/// Parsing is strict: both parameters are required and no other parameter is
/// accepted. Bad credentials always produce the same forbidden response,
/// whether the user is unknown or the password is wrong.
pub(crate) async fn issue_token(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<TokenResponse>, ApiError> {
    let mut username = None;
    let mut password = None;
    for (key, value) in &params {
        match key.as_str() {
            "username" => username = Some(value.as_str()),
            "password" => password = Some(value.as_str()),
            other => {
                return Err(api_validation_error(&format!(
                    "unknown parameter: {other}"
                )));
            }
        }
    }
    let username =
        username.ok_or_else(|| api_validation_error("missing required parameter: username"))?;
    let password =
        password.ok_or_else(|| api_validation_error("missing required parameter: password"))?;

    let user = state
        .authenticator
        .authenticate(username, password)
        .map_err(|_| api_forbidden("Access denied"))?;

    let access_token = state.tokens.issue(&user.username).map_err(|err| {
        tracing::error!(error = ?err, "failed to issue access token");
        api_internal_message("failed to issue token")
    })?;
    metrics::counter!("msgboard_tokens_issued_total").increment(1);

    Ok(Json(TokenResponse { access_token }))
}
