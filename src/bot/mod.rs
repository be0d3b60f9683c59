mod telegram;
pub mod commands;
pub mod handlers;
pub mod platform;
pub mod replies;

pub use commands::Command;
pub use handlers::{CommandHandler, TextMessageHandler};
pub use platform::{ChatPlatform, IncomingMessage};
pub use telegram::{TelegramBot, TelegramPlatform};
