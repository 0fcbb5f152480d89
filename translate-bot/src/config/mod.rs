//! Bot configuration: Telegram connectivity + translation flow + translation provider.

mod bot_config;


pub use bot_config::{BotConfig, DEFAULT_LOG_FILE};
