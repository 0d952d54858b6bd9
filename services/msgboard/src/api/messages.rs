//! Message API handlers.
//!
//! # Purpose
//! Implements message CRUD with consistent error mapping for missing records.
//! Deletion is the one destructive operation and requires a verified bearer
//! token; every other operation is open, matching the demo's scope.
use crate::api::error::{ApiError, api_internal, api_not_found, api_unauthorized};
use crate::app::AppState;
use crate::auth::extract_bearer;
use crate::model::{Message, MessageDraft, MessagePatch};
use crate::store::StoreError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;

fn missing_message(id: u64) -> ApiError {
    api_not_found(&format!("Message {id} doesn't exist."))
}

#[utoipa::path(
    get,
    path = "/messages",
    tag = "messages",
    responses(
        (status = 200, description = "All messages in insertion order", body = [Message])
    )
)]
pub(crate) async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let items = state
        .store
        .list_messages()
        .await
        .map_err(|err| api_internal("failed to list messages", &err))?;
    Ok(Json(items))
}

#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = MessageDraft,
    responses(
        (status = 201, description = "Message created", body = Message)
    )
)]
pub(crate) async fn create_message(
    State(state): State<AppState>,
    Json(body): Json<MessageDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let message = state
        .store
        .create_message(body)
        .await
        .map_err(|err| api_internal("failed to create message", &err))?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = u64, Path, description = "The message identifier")
    ),
    responses(
        (status = 200, description = "Fetch message", body = Message),
        (status = 404, description = "Message not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn get_message(
    Path(id): Path<u64>,
    State(state): State<AppState>,
) -> Result<Json<Message>, ApiError> {
    match state.store.get_message(id).await {
        Ok(message) => Ok(Json(message)),
        Err(StoreError::NotFound(_)) => Err(missing_message(id)),
        Err(err) => Err(api_internal("failed to fetch message", &err)),
    }
}

#[utoipa::path(
    put,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = u64, Path, description = "The message identifier")
    ),
    request_body = MessagePatch,
    responses(
        (status = 200, description = "Message updated", body = Message),
        (status = 404, description = "Message not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn update_message(
    Path(id): Path<u64>,
    State(state): State<AppState>,
    Json(body): Json<MessagePatch>,
) -> Result<Json<Message>, ApiError> {
    match state.store.update_message(id, body).await {
        Ok(updated) => Ok(Json(updated)),
        Err(StoreError::NotFound(_)) => Err(missing_message(id)),
        Err(err) => Err(api_internal("failed to update message", &err)),
    }
}

#[utoipa::path(
    delete,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = u64, Path, description = "The message identifier"),
        ("Authorization" = String, Header, description = "Enter 'Bearer <token>'")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = crate::api::types::ErrorResponse),
        (status = 404, description = "Message not found", body = crate::api::types::ErrorResponse)
    )
)]
pub(crate) async fn delete_message(
    Path(id): Path<u64>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    // The token gate runs before any store access; a denied request leaves
    // state untouched.
    let bearer = extract_bearer(&headers).ok_or_else(|| api_unauthorized("missing bearer token"))?;
    state
        .tokens
        .verify(bearer)
        .map_err(|_| api_unauthorized("invalid token"))?;

    match state.store.delete_message(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound(_)) => Err(missing_message(id)),
        Err(err) => Err(api_internal("failed to delete message", &err)),
    }
}
