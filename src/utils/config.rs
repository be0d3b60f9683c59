use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_GROUP_LANG_FILE, DEFAULT_LOCALES_DIR, DEFAULT_LOG_LEVEL, DEFAULT_USER_LANG_FILE,
    DEXSCREENER_API_BASE, PRTN_CONTRACT,
};
use crate::errors::BotError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // API Keys
    pub telegram_bot_token: String,

    // Storage
    pub locales_dir: PathBuf,
    pub user_lang_file: PathBuf,
    pub group_lang_file: PathBuf,

    // Market data
    pub token_contract: String,
    pub dexscreener_api_base: String,

    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .map_err(|_| BotError::config("TELEGRAM_BOT_TOKEN not set"))?,

            locales_dir: env::var("LOCALES_DIR")
                .unwrap_or_else(|_| DEFAULT_LOCALES_DIR.to_string())
                .into(),
            user_lang_file: env::var("USER_LANG_FILE")
                .unwrap_or_else(|_| DEFAULT_USER_LANG_FILE.to_string())
                .into(),
            group_lang_file: env::var("GROUP_LANG_FILE")
                .unwrap_or_else(|_| DEFAULT_GROUP_LANG_FILE.to_string())
                .into(),

            token_contract: env::var("TOKEN_CONTRACT")
                .unwrap_or_else(|_| PRTN_CONTRACT.to_string()),
            dexscreener_api_base: env::var("DEXSCREENER_API_BASE")
                .unwrap_or_else(|_| DEXSCREENER_API_BASE.to_string()),

            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Full token endpoint, e.g. `.../latest/dex/tokens/<contract>`
    pub fn market_data_url(&self) -> String {
        format!(
            "{}/{}",
            self.dexscreener_api_base.trim_end_matches('/'),
            self.token_contract
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.telegram_bot_token.is_empty() {
            return Err(BotError::config("Telegram bot token is required").into());
        }

        if self.token_contract.trim().is_empty() {
            return Err(BotError::config("Token contract address is required").into());
        }

        if self.user_lang_file == self.group_lang_file {
            return Err(BotError::config(
                "USER_LANG_FILE and GROUP_LANG_FILE must point to different files",
            )
            .into());
        }

        Ok(())
    }
}
