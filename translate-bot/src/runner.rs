use std::sync::Arc;

use anyhow::Result;
use dbot_core::{init_tracing, Bot as CoreBot, Message as CoreMessage, ToCoreMessage};
use dbot_telegram::{run_repl, TelegramMessageWrapper};
use handler_chain::HandlerChain;
use handlers::Command;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};

use super::components::{build_bot_components, build_handler_chain, BotComponents};
use super::config::BotConfig;

/// TranslateBot: config, components, and handler chain.
pub struct TranslateBot {
    pub config: BotConfig,
    pub components: BotComponents,
    pub handler_chain: HandlerChain,
}

impl TranslateBot {
    pub fn new(config: BotConfig) -> Result<Self> {
        Self::build(config, None)
    }

    /// Replies go to `bot` instead of Telegram (for tests).
    pub fn with_bot(config: BotConfig, bot: Arc<dyn CoreBot>) -> Result<Self> {
        Self::build(config, Some(bot))
    }

    fn build(config: BotConfig, handler_bot: Option<Arc<dyn CoreBot>>) -> Result<Self> {
        let components = build_bot_components(&config, handler_bot)?;
        let handler_chain = build_handler_chain(&components);
        Ok(Self {
            config,
            components,
            handler_chain,
        })
    }

    /// Handles one Telegram message; non-text messages are skipped.
    pub async fn handle_message(&self, msg: &teloxide::types::Message) -> Result<()> {
        if msg.text().is_some() {
            let core_msg = TelegramMessageWrapper(msg).to_core();
            self.handle_core_message(&core_msg).await?;
        }
        Ok(())
    }

    /// Drive handler chain with core Message. Chain errors are logged, never returned.
    pub async fn handle_core_message(&self, message: &CoreMessage) -> Result<()> {
        if let Err(e) = self.handler_chain.handle(message).await {
            error!(error = %e, chat_id = message.chat.id, "Handler chain failed");
        }
        Ok(())
    }

    /// Publishes the command list shown in Telegram's command menu.
    pub async fn register_commands(&self) {
        match self
            .components
            .teloxide_bot
            .set_my_commands(Command::bot_commands())
            .await
        {
            Ok(_) => info!("Bot commands registered"),
            Err(e) => warn!(error = %e, "Failed to register bot commands"),
        }
    }
}

/// Main entry: validate config, init logging, build components, register commands, run REPL.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        log_file = %config.log_file(),
        telegram_api_url = ?config.telegram_api_url(),
        detector = config.translator.detector.as_str(),
        "Initializing bot"
    );

    let bot = TranslateBot::new(config)?;
    bot.register_commands().await;

    info!("Bot started successfully");

    run_repl(
        bot.components.teloxide_bot.clone(),
        bot.handler_chain.clone(),
        bot.components.bot_username.clone(),
    )
    .await
}
