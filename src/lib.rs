//! PRTN token info bot
//!
//! Telegram bot that serves localized info blocks about the PRTN token and
//! live price data from DexScreener, with per-chat language selection.

pub mod api;
pub mod bot;
pub mod constants;
pub mod errors;
pub mod i18n;
pub mod observability;
pub mod utils;

pub use errors::{BotError, Result};
