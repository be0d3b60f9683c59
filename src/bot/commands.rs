use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Set the group language: /setgrouplang <en|ru>")]
    SetGroupLang(String),

    #[command(description = "Choose your language")]
    Language,

    #[command(description = "Start the bot")]
    Start,

    #[command(description = "About PRTN")]
    Info,

    #[command(description = "Support the project")]
    Donate,

    #[command(description = "Contacts")]
    Contacts,

    #[command(description = "Token contract address")]
    Contract,

    #[command(description = "Where to buy PRTN")]
    Buy,

    #[command(description = "Live PRTN price")]
    Price,
}

impl Command {
    /// Catalog key for commands that just send a fixed text block
    pub fn content_key(&self) -> Option<&'static str> {
        match self {
            Self::Start => Some("start"),
            Self::Info => Some("info"),
            Self::Donate => Some("donate"),
            Self::Contacts => Some("contacts"),
            Self::Contract => Some("contract"),
            Self::Buy => Some("buy"),
            Self::SetGroupLang(_) | Self::Language | Self::Price => None,
        }
    }
}
