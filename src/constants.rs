/// PRTN token contract address on TON
pub const PRTN_CONTRACT: &str = "EQBCHMY4xNfQn9tU70qlibOcl8YbSrXb4-J_rAVqeTsAWlJu";

pub const DEXSCREENER_API_BASE: &str = "https://api.dexscreener.com/latest/dex/tokens";

pub const DEFAULT_LOCALES_DIR: &str = "locales";
pub const DEFAULT_USER_LANG_FILE: &str = "user_languages.json";
pub const DEFAULT_GROUP_LANG_FILE: &str = "group_languages.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Placeholder for any field missing from the market-data response
pub const NOT_AVAILABLE: &str = "N/A";

pub const INVALID_DATA: &str = "Invalid Data";
