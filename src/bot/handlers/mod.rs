pub mod command;
pub mod text;

pub use command::{parse_group_language, render_token_info, CommandHandler};
pub use text::TextMessageHandler;
