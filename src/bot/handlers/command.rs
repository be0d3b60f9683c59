use std::sync::Arc;
use tracing::{error, info, warn};

use crate::{
    api::{MarketDataSource, TradingPairSnapshot},
    bot::{
        commands::Command,
        platform::{ChatPlatform, IncomingMessage},
        replies,
    },
    errors::{BotError, Result},
    i18n::{Catalog, CatalogLoader, LanguageCode, LanguageSetting, LanguageStore},
    utils::{format_change, format_magnitude},
};

/// Command handler for bot commands
pub struct CommandHandler {
    store: Arc<LanguageStore>,
    catalogs: CatalogLoader,
    market: Arc<dyn MarketDataSource>,
}

impl CommandHandler {
    pub fn new(
        store: Arc<LanguageStore>,
        catalogs: CatalogLoader,
        market: Arc<dyn MarketDataSource>,
    ) -> Self {
        Self {
            store,
            catalogs,
            market,
        }
    }

    /// Route a parsed command to its handler
    pub async fn handle(
        &self,
        platform: &dyn ChatPlatform,
        msg: &IncomingMessage,
        cmd: Command,
    ) -> Result<()> {
        info!("Processing command {:?} in chat {}", cmd, msg.chat_id);

        let result = match cmd {
            Command::SetGroupLang(arg) => self.handle_set_group_lang(platform, msg, &arg).await,
            Command::Language => self.handle_language(platform, msg).await,
            Command::Price => self.handle_price(platform, msg).await,
            content => match content.content_key() {
                Some(key) => self.handle_content(platform, msg, key).await,
                None => Ok(()),
            },
        };

        match result {
            Err(BotError::MissingTranslationKey(key)) => {
                error!("Missing translation key '{}' for chat {}", key, msg.chat_id);
                platform
                    .send_text(msg.chat_id, replies::LOCALIZATION_UNAVAILABLE)
                    .await
            }
            Err(BotError::CatalogUnavailable(reason)) => {
                error!("Cannot load catalog for chat {}: {}", msg.chat_id, reason);
                platform
                    .send_text(msg.chat_id, replies::LOCALIZATION_UNAVAILABLE)
                    .await
            }
            other => other,
        }
    }

    async fn catalog_for(&self, msg: &IncomingMessage) -> Result<Catalog> {
        let code = self.store.get(msg.chat_id, msg.chat_kind).await;
        self.catalogs.load(code).await
    }

    /// Handle /start, /info, /donate, /contacts, /contract and /buy
    async fn handle_content(
        &self,
        platform: &dyn ChatPlatform,
        msg: &IncomingMessage,
        key: &str,
    ) -> Result<()> {
        let catalog = self.catalog_for(msg).await?;
        let text = catalog.render(key)?;
        platform.send_text(msg.chat_id, &text).await
    }

    /// Handle /price
    async fn handle_price(&self, platform: &dyn ChatPlatform, msg: &IncomingMessage) -> Result<()> {
        let catalog = self.catalog_for(msg).await?;

        let text = match self.market.fetch_snapshot().await {
            Ok(snapshot) => render_token_info(&catalog, &snapshot)?,
            Err(BotError::EmptyMarketData(source)) => {
                error!("No pairs found in the API response from {}", source);
                catalog.render("token_info.unavailable_data")?
            }
            Err(e) => {
                error!("Failed to fetch data from API: {}", e);
                catalog.render("token_info.fetch_error")?
            }
        };

        platform.send_text(msg.chat_id, &text).await
    }

    /// Handle /language: private chats only, waits for a "1"/"2" reply
    async fn handle_language(
        &self,
        platform: &dyn ChatPlatform,
        msg: &IncomingMessage,
    ) -> Result<()> {
        if !msg.chat_kind.is_private() {
            return platform.send_text(msg.chat_id, replies::PRIVATE_ONLY).await;
        }

        self.store
            .set(msg.chat_id, msg.chat_kind, LanguageSetting::Choose)
            .await?;
        platform.send_text(msg.chat_id, replies::CHOOSE_LANGUAGE).await
    }

    /// Handle /setgrouplang: group admins only
    async fn handle_set_group_lang(
        &self,
        platform: &dyn ChatPlatform,
        msg: &IncomingMessage,
        arg: &str,
    ) -> Result<()> {
        if !msg.chat_kind.is_group() {
            return platform.send_text(msg.chat_id, replies::GROUP_ONLY).await;
        }

        let is_admin = match msg.sender_id {
            Some(user_id) => match platform.is_chat_admin(msg.chat_id, user_id).await {
                Ok(is_admin) => is_admin,
                Err(e) => {
                    error!("Admin check for {} in chat {} failed: {}", user_id, msg.chat_id, e);
                    false
                }
            },
            None => false,
        };
        if !is_admin {
            warn!(
                "Non-admin {:?} tried to set language of chat {}",
                msg.sender_id, msg.chat_id
            );
            return platform.send_text(msg.chat_id, replies::ADMIN_ONLY).await;
        }

        let reply = match parse_group_language(arg) {
            Some(code) => {
                self.store.set(msg.chat_id, msg.chat_kind, code).await?;
                info!("Group {} language set to {}", msg.chat_id, code);
                match code {
                    LanguageCode::En => replies::GROUP_LANGUAGE_SET_EN,
                    LanguageCode::Ru => replies::GROUP_LANGUAGE_SET_RU,
                }
            }
            None => replies::INVALID_GROUP_LANGUAGE,
        };

        platform.send_text(msg.chat_id, reply).await
    }
}

/// First argument token, case-insensitive
pub fn parse_group_language(arg: &str) -> Option<LanguageCode> {
    arg.split_whitespace()
        .next()
        .and_then(|token| token.to_lowercase().parse().ok())
}

/// Lay out the /price reply from the catalog templates
pub fn render_token_info(catalog: &Catalog, snapshot: &TradingPairSnapshot) -> Result<String> {
    let price_change_hour = format_change(&snapshot.price_change_h1);
    let price_change_day = format_change(&snapshot.price_change_h24);
    let volume = format_magnitude(&snapshot.volume_h24);
    let liquidity_usd = format_magnitude(&snapshot.liquidity_usd);

    let lines = [
        catalog.render("token_info.title")?,
        String::new(),
        catalog.render_with("token_info.price", &[("price", snapshot.price_usd.as_str())])?,
        String::new(),
        catalog.render("token_info.price_changes.title")?,
        catalog.render_with(
            "token_info.price_changes.hour",
            &[("price_change_hour", price_change_hour.as_str())],
        )?,
        catalog.render_with(
            "token_info.price_changes.day",
            &[("price_change_day", price_change_day.as_str())],
        )?,
        String::new(),
        catalog.render_with("token_info.volume", &[("volume", volume.as_str())])?,
        catalog.render_with(
            "token_info.liquidity",
            &[("liquidity_usd", liquidity_usd.as_str())],
        )?,
    ];

    Ok(lines.join("\n"))
}
