use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    bot::{
        platform::{ChatPlatform, IncomingMessage},
        replies,
    },
    errors::Result,
    i18n::{LanguageCode, LanguageStore},
};

/// Handler for plain text messages (the language choice reply)
pub struct TextMessageHandler {
    store: Arc<LanguageStore>,
}

impl TextMessageHandler {
    pub fn new(store: Arc<LanguageStore>) -> Self {
        Self { store }
    }

    /// Answer "1"/"2" while the chat is choosing a language, ignore anything else
    pub async fn handle(&self, platform: &dyn ChatPlatform, msg: &IncomingMessage) -> Result<()> {
        if !self.store.is_awaiting_choice(msg.chat_id, msg.chat_kind).await {
            debug!("Ignoring text in chat {}", msg.chat_id);
            return Ok(());
        }

        let reply = match msg.text.trim() {
            "1" => {
                self.store.set(msg.chat_id, msg.chat_kind, LanguageCode::En).await?;
                replies::LANGUAGE_SET_EN
            }
            "2" => {
                self.store.set(msg.chat_id, msg.chat_kind, LanguageCode::Ru).await?;
                replies::LANGUAGE_SET_RU
            }
            other => {
                info!("Invalid language choice {:?} in chat {}", other, msg.chat_id);
                replies::INVALID_CHOICE
            }
        };

        platform.send_text(msg.chat_id, reply).await
    }
}
