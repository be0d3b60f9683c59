mod config;
pub mod formatting;

pub use config::Config;
pub use formatting::{format_change, format_magnitude, ChangeDirection};
