use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::constants::NOT_AVAILABLE;
use crate::errors::{BotError, Result};
use crate::utils::Config;

/// First trading pair of a token, every field as display text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingPairSnapshot {
    pub price_usd: String,
    pub price_change_h1: String,
    pub price_change_h24: String,
    pub volume_h24: String,
    pub liquidity_usd: String,
}

impl TradingPairSnapshot {
    /// Build from one entry of the `pairs` array, `"N/A"` for anything missing
    pub fn from_pair(pair: &Value) -> Self {
        Self {
            price_usd: field_text(pair, &["priceUsd"]),
            price_change_h1: field_text(pair, &["priceChange", "h1"]),
            price_change_h24: field_text(pair, &["priceChange", "h24"]),
            volume_h24: field_text(pair, &["volume", "h24"]),
            liquidity_usd: field_text(pair, &["liquidity", "usd"]),
        }
    }
}

fn field_text(pair: &Value, path: &[&str]) -> String {
    match path.iter().try_fold(pair, |node, key| node.get(*key)) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct DexScreenerResponse {
    #[serde(default)]
    pairs: Option<Vec<Value>>,
}

/// Source of live market data for the configured token
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn fetch_snapshot(&self) -> Result<TradingPairSnapshot>;
}

/// DexScreener token endpoint client
#[derive(Clone)]
pub struct DexScreenerClient {
    client: Client,
    url: String,
}

impl DexScreenerClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.market_data_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MarketDataSource for DexScreenerClient {
    async fn fetch_snapshot(&self) -> Result<TradingPairSnapshot> {
        debug!("Fetching market data from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| BotError::upstream(format!("request to {} failed: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::upstream(format!("{} returned {}", self.url, status)));
        }

        let body: DexScreenerResponse = response
            .json()
            .await
            .map_err(|e| BotError::upstream(format!("invalid response body: {}", e)))?;

        let pairs = body.pairs.unwrap_or_default();
        info!("API response pairs: {:?}", pairs);

        pairs
            .first()
            .map(TradingPairSnapshot::from_pair)
            .ok_or_else(|| BotError::empty_market_data(self.url.as_str()))
    }
}
