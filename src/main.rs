use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use prtn_info_bot::{
    api::DexScreenerClient,
    bot::TelegramBot,
    i18n::LanguageStore,
    observability::{init_tracing, LogFormat},
    utils::Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config.log_level, LogFormat::from_env());
    config.validate()?;

    info!("Bot is running...");

    let store =
        Arc::new(LanguageStore::open(&config.user_lang_file, &config.group_lang_file).await?);
    let market = Arc::new(DexScreenerClient::from_config(&config));
    info!("Market data endpoint: {}", market.url());

    let bot = TelegramBot::new(Arc::new(config), store, market);
    bot.run().await?;

    Ok(())
}
