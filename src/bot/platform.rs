use async_trait::async_trait;

use crate::errors::Result;
use crate::i18n::ChatKind;

/// The parts of the chat platform the handlers need
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Send an HTML-formatted message
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()>;

    /// Whether the user is an administrator or the owner of the chat
    async fn is_chat_admin(&self, chat_id: i64, user_id: u64) -> Result<bool>;
}

/// Transport-neutral view of an inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub chat_id: i64,
    pub chat_kind: ChatKind,
    pub sender_id: Option<u64>,
    pub text: String,
}

impl IncomingMessage {
    pub fn new(
        chat_id: i64,
        chat_kind: ChatKind,
        sender_id: Option<u64>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            chat_id,
            chat_kind,
            sender_id,
            text: text.into(),
        }
    }
}
