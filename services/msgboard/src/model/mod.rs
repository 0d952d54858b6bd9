//! Message-board data model module.
//!
//! # Purpose
//! Re-exports the message record and its create/update payloads used by the
//! API and store layers.
mod message;

pub use message::{Message, MessageDraft, MessagePatch};
