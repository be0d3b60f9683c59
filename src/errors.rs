use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing translation key: {0}")]
    MissingTranslationKey(String),

    #[error("Locale catalog unreadable: {0}")]
    CatalogUnavailable(String),

    #[error("Market data fetch failed: {0}")]
    UpstreamFetch(String),

    #[error("No trading pairs returned for {0}")]
    EmptyMarketData(String),

    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BotError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingTranslationKey(key.into())
    }

    pub fn catalog_unavailable(msg: impl Into<String>) -> Self {
        Self::CatalogUnavailable(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::UpstreamFetch(msg.into())
    }

    pub fn empty_market_data(token: impl Into<String>) -> Self {
        Self::EmptyMarketData(token.into())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
