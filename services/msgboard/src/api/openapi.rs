//! OpenAPI schema aggregation for the message-board API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document for
//! the Swagger UI and client generation.
use crate::api::{
    greetings, messages, system,
    types::{ErrorResponse, HealthStatus, SystemInfo},
};
use crate::auth::issue::{self, TokenResponse};
use crate::model::{Message, MessageDraft, MessagePatch};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "msgboard",
        version = "v1",
        description = "Demo message-board REST API"
    ),
    paths(
        greetings::hello_by_path,
        greetings::hello_by_param,
        messages::list_messages,
        messages::create_message,
        messages::get_message,
        messages::update_message,
        messages::delete_message,
        issue::issue_token,
        system::system_info,
        system::system_health
    ),
    components(schemas(
        ErrorResponse,
        Message,
        MessageDraft,
        MessagePatch,
        TokenResponse,
        SystemInfo,
        HealthStatus
    )),
    tags(
        (name = "greetings", description = "Path and query parameter examples"),
        (name = "messages", description = "Message CRUD"),
        (name = "auth", description = "Token authentication"),
        (name = "system", description = "Service metadata and health")
    )
)]
pub struct ApiDoc;
