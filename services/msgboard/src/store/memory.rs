//! In-memory implementation of the message store.
//!
//! # Purpose
//! This store implements the `MessageStore` trait entirely in memory. It exists
//! for:
//! - local development and tests (no external dependencies)
//! - the demo deployment, where durability is explicitly out of scope
//!
//! # Durability and consistency
//! - **Not durable**: all state is lost on process restart.
//! - **Single-process consistency**: the identifier counter and the record
//!   collection live behind one `tokio::sync::RwLock`, so a `create` can never
//!   observe a half-applied `delete` and two concurrent `create` calls can
//!   never be assigned the same id.
//!
//! # Identity
//! Ids start at 1 and increase monotonically for the lifetime of the store.
//! Deleting a record does not free its id for reuse.
//!
//! # Performance characteristics
//! Records are kept in insertion order in a `Vec` and looked up by linear
//! scan. That is the right trade-off for a demo-sized collection; a durable
//! backend would index by id instead.
use super::{MessageStore, StoreError, StoreResult};
use crate::model::{Message, MessageDraft, MessagePatch};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Counter plus ordered records, guarded as a unit.
///
/// Keeping both fields under the same lock is what makes id assignment and
/// collection membership atomic with respect to each other.
#[derive(Debug, Default)]
struct MessageBook {
    next_id: u64,
    messages: Vec<Message>,
}

impl MessageBook {
    fn position(&self, id: u64) -> Option<usize> {
        self.messages.iter().position(|m| m.id == id)
    }
}

/// In-memory message store.
pub struct InMemoryStore {
    book: RwLock<MessageBook>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            book: RwLock::new(MessageBook::default()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: u64) -> StoreError {
    StoreError::NotFound(format!("message {id}"))
}

#[async_trait]
impl MessageStore for InMemoryStore {
    async fn list_messages(&self) -> StoreResult<Vec<Message>> {
        // Insertion order is the contract; the Vec already preserves it.
        Ok(self.book.read().await.messages.clone())
    }

    async fn get_message(&self, id: u64) -> StoreResult<Message> {
        let book = self.book.read().await;
        book.position(id)
            .map(|idx| book.messages[idx].clone())
            .ok_or_else(|| not_found(id))
    }

    async fn create_message(&self, draft: MessageDraft) -> StoreResult<Message> {
        let mut book = self.book.write().await;
        // Id assignment and append happen under the same write lock, so ids
        // are unique and strictly increasing across all creates.
        book.next_id += 1;
        let message = Message {
            id: book.next_id,
            name: draft.name,
            message: draft.message,
        };
        book.messages.push(message.clone());
        metrics::counter!("msgboard_messages_created_total").increment(1);
        Ok(message)
    }

    async fn update_message(&self, id: u64, patch: MessagePatch) -> StoreResult<Message> {
        let mut book = self.book.write().await;
        let idx = book.position(id).ok_or_else(|| not_found(id))?;
        let record = &mut book.messages[idx];
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(message) = patch.message {
            record.message = message;
        }
        // Hand back a copy; the stored record is never aliased outside the
        // lock.
        Ok(record.clone())
    }

    async fn delete_message(&self, id: u64) -> StoreResult<()> {
        let mut book = self.book.write().await;
        let idx = book.position(id).ok_or_else(|| not_found(id))?;
        book.messages.remove(idx);
        metrics::counter!("msgboard_messages_deleted_total").increment(1);
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        // Nothing external to probe; taking the read lock is the check.
        let _ = self.book.read().await;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
