//! # Translate bot
//!
//! Wires the Telegram adapter, the handler chain and the translation flow. Loads config from env
//! and runs the REPL; also hosts the `detect` and `translate` CLI helpers.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{load_config, run_detect, run_translate, Cli, Commands};
pub use components::{
    build_bot_components, build_handler_chain, build_translation_service, BotComponents,
};
pub use config::{BotConfig, DEFAULT_LOG_FILE};
pub use runner::{run_bot, TranslateBot};
