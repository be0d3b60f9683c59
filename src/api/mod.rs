pub mod dexscreener;

pub use dexscreener::{DexScreenerClient, MarketDataSource, TradingPairSnapshot};
