#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use prtn_info_bot::{
    api::{MarketDataSource, TradingPairSnapshot},
    bot::{ChatPlatform, CommandHandler, IncomingMessage, TextMessageHandler},
    errors::{BotError, Result},
    i18n::{CatalogLoader, ChatKind, LanguageStore},
};

pub const PRIVATE_CHAT: i64 = 1001;
pub const GROUP_CHAT: i64 = -100_200;
pub const ADMIN_ID: u64 = 77;
pub const MEMBER_ID: u64 = 88;

/// Records every reply instead of talking to Telegram
#[derive(Default)]
pub struct FakePlatform {
    sent: Mutex<Vec<(i64, String)>>,
    admins: Vec<u64>,
    admin_lookup_fails: bool,
}

impl FakePlatform {
    pub fn with_admins(admins: &[u64]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            admins: admins.to_vec(),
            admin_lookup_fails: false,
        }
    }

    /// Every `is_chat_admin` call errors, as when `getChatMember` times out
    pub fn with_failing_admin_lookup() -> Self {
        Self {
            admin_lookup_fails: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> String {
        self.sent
            .lock()
            .unwrap()
            .last()
            .map(|(_, text)| text.clone())
            .expect("no message sent")
    }
}

#[async_trait]
impl ChatPlatform for FakePlatform {
    async fn send_text(&self, chat_id: i64, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }

    async fn is_chat_admin(&self, chat_id: i64, user_id: u64) -> Result<bool> {
        if self.admin_lookup_fails {
            let reason = format!("getChatMember({}, {}) timed out", chat_id, user_id);
            return Err(BotError::upstream(reason));
        }
        Ok(self.admins.contains(&user_id))
    }
}

/// Canned market-data outcomes
#[derive(Clone)]
pub enum FakeMarket {
    Snapshot(TradingPairSnapshot),
    Empty,
    HttpError,
}

#[async_trait]
impl MarketDataSource for FakeMarket {
    async fn fetch_snapshot(&self) -> Result<TradingPairSnapshot> {
        match self {
            Self::Snapshot(snapshot) => Ok(snapshot.clone()),
            Self::Empty => Err(BotError::empty_market_data("fake")),
            Self::HttpError => Err(BotError::upstream("fake returned 500 Internal Server Error")),
        }
    }
}

pub fn sample_snapshot() -> TradingPairSnapshot {
    TradingPairSnapshot {
        price_usd: "1.23".to_string(),
        price_change_h1: "2.5".to_string(),
        price_change_h24: "-1.0".to_string(),
        volume_h24: "1000000".to_string(),
        liquidity_usd: "50000".to_string(),
    }
}

pub fn locales_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("locales")
}

pub struct Harness {
    pub store: Arc<LanguageStore>,
    pub commands: CommandHandler,
    pub text: TextMessageHandler,
}

impl Harness {
    pub async fn new(market: impl MarketDataSource + 'static) -> Self {
        Self::with_locales(market, locales_dir()).await
    }

    pub async fn with_locales(market: impl MarketDataSource + 'static, dir: PathBuf) -> Self {
        let store = Arc::new(LanguageStore::in_memory().await);
        Self {
            commands: CommandHandler::new(store.clone(), CatalogLoader::new(dir), Arc::new(market)),
            text: TextMessageHandler::new(store.clone()),
            store,
        }
    }
}

pub fn private_msg(text: &str) -> IncomingMessage {
    IncomingMessage::new(PRIVATE_CHAT, ChatKind::Private, Some(PRIVATE_CHAT as u64), text)
}

pub fn group_msg(sender: u64, text: &str) -> IncomingMessage {
    IncomingMessage::new(GROUP_CHAT, ChatKind::Supergroup, Some(sender), text)
}

pub fn catalog_text(code: &str, key: &str) -> String {
    let raw = std::fs::read_to_string(locales_dir().join(format!("{}.json", code))).unwrap();
    let root: serde_json::Value = serde_json::from_str(&raw).unwrap();
    prtn_info_bot::i18n::Catalog::from_value(root).render(key).unwrap()
}
