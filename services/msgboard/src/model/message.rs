//! Message record definitions.
//!
//! # Purpose
//! Defines the stored message record plus the create and partial-update
//! payloads accepted by the HTTP API.
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored message. `id` is assigned by the store on creation and is never
/// reused, even after the record is deleted.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub name: String,
    pub message: String,
}

/// Payload for creating a message. Both fields are required; the id is
/// store-assigned.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MessageDraft {
    pub name: String,
    pub message: String,
}

/// Partial update payload. Fields left as `None` keep their current value.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Default)]
pub struct MessagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
