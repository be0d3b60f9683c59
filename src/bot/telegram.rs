use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{
    prelude::*,
    types::{ParseMode, UserId},
    utils::command::BotCommands,
};
use tracing::{error, info, warn};

use crate::{
    api::MarketDataSource,
    errors::Result,
    i18n::{CatalogLoader, ChatKind, LanguageStore},
    utils::Config,
};

use super::{
    commands::Command,
    handlers::{CommandHandler, TextMessageHandler},
    platform::{ChatPlatform, IncomingMessage},
};

/// `ChatPlatform` backed by the Telegram Bot API
#[derive(Clone)]
pub struct TelegramPlatform {
    bot: Bot,
}

impl TelegramPlatform {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ChatPlatform for TelegramPlatform {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat_id), text)
            .parse_mode(ParseMode::Html)
            .await?;
        Ok(())
    }

    async fn is_chat_admin(&self, chat_id: i64, user_id: u64) -> Result<bool> {
        let member = self
            .bot
            .get_chat_member(ChatId(chat_id), UserId(user_id))
            .await?;
        Ok(member.is_privileged())
    }
}

fn chat_kind(msg: &Message) -> ChatKind {
    if msg.chat.is_private() {
        ChatKind::Private
    } else if msg.chat.is_group() {
        ChatKind::Group
    } else if msg.chat.is_supergroup() {
        ChatKind::Supergroup
    } else {
        ChatKind::Channel
    }
}

fn incoming_message(msg: &Message) -> IncomingMessage {
    IncomingMessage::new(
        msg.chat.id.0,
        chat_kind(msg),
        msg.from.as_ref().map(|user| user.id.0),
        msg.text().unwrap_or_default(),
    )
}

/// Main Telegram bot struct
pub struct TelegramBot {
    config: Arc<Config>,
    commands: Arc<CommandHandler>,
    text: Arc<TextMessageHandler>,
}

impl TelegramBot {
    pub fn new(
        config: Arc<Config>,
        store: Arc<LanguageStore>,
        market: Arc<dyn MarketDataSource>,
    ) -> Self {
        let catalogs = CatalogLoader::new(config.locales_dir.clone());

        Self {
            commands: Arc::new(CommandHandler::new(store.clone(), catalogs, market)),
            text: Arc::new(TextMessageHandler::new(store)),
            config,
        }
    }

    /// Run the bot dispatcher
    pub async fn run(&self) -> Result<()> {
        let bot = Bot::new(&self.config.telegram_bot_token);

        info!("🤖 Starting Telegram bot...");

        if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
            warn!("Failed to register bot commands: {}", e);
        }

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(Self::handle_command),
            )
            .branch(Update::filter_message().endpoint(Self::handle_text));

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![self.commands.clone(), self.text.clone()])
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }

    async fn handle_command(
        bot: Bot,
        msg: Message,
        cmd: Command,
        commands: Arc<CommandHandler>,
    ) -> ResponseResult<()> {
        let platform = TelegramPlatform::new(bot);

        if let Err(e) = commands.handle(&platform, &incoming_message(&msg), cmd).await {
            error!("Command failed in chat {}: {}", msg.chat.id, e);
        }

        Ok(())
    }

    async fn handle_text(
        bot: Bot,
        msg: Message,
        text: Arc<TextMessageHandler>,
    ) -> ResponseResult<()> {
        if msg.text().is_none() {
            return Ok(());
        }

        let platform = TelegramPlatform::new(bot);

        if let Err(e) = text.handle(&platform, &incoming_message(&msg)).await {
            error!("Text handling failed in chat {}: {}", msg.chat.id, e);
        }

        Ok(())
    }
}
