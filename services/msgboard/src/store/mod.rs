use crate::model::{Message, MessageDraft, MessagePatch};
use async_trait::async_trait;
use thiserror::Error;

pub mod memory;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage seam for message records.
///
/// The HTTP handlers only see this trait; the concrete backend is chosen at
/// startup and injected through `AppState`.
#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn list_messages(&self) -> StoreResult<Vec<Message>>;
    async fn get_message(&self, id: u64) -> StoreResult<Message>;
    async fn create_message(&self, draft: MessageDraft) -> StoreResult<Message>;
    async fn update_message(&self, id: u64, patch: MessagePatch) -> StoreResult<Message>;
    async fn delete_message(&self, id: u64) -> StoreResult<()>;

    async fn health_check(&self) -> StoreResult<()>;
    fn backend_name(&self) -> &'static str;
}
