use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::SendOptions,
    Result,
};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the shape is small enough that
/// other transports can fit behind the same interface. Callers treat both
/// operations as fire-and-forget: a failed send or delete never rolls
/// back a store mutation.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_html(&self, chat_id: ChatId, html: &str, opts: SendOptions)
        -> Result<MessageRef>;

    async fn delete_message(&self, msg: MessageRef) -> Result<()>;
}
