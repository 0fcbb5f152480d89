//! Bot commands: `/start`, `/help`, `/setlang`, `/lang`.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, ReplyFormat, Result};
use teloxide::utils::command::{BotCommands, ParseError};
use tracing::{debug, error, info, instrument, warn};
use translator::format::{
    format_configure_error, format_configured, format_language_list, help_text,
};
use translator::TranslationService;

/// Commands registered with Telegram and parsed from inbound text.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show usage")]
    Start,
    #[command(description = "show usage")]
    Help,
    #[command(description = "set this chat's target languages, e.g. /setlang en ru es")]
    Setlang(String),
    #[command(description = "list supported languages")]
    Lang,
}

/// Answers commands and stops the chain for every `/`-prefixed text, known or not.
#[derive(Clone)]
pub struct CommandHandler {
    service: Arc<TranslationService>,
    bot: Arc<dyn CoreBot>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        service: Arc<TranslationService>,
        bot: Arc<dyn CoreBot>,
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    ) -> Self {
        Self {
            service,
            bot,
            bot_username,
        }
    }

    /// Parses `text` as a command addressed to this bot (`/cmd` or `/cmd@<bot>`).
    pub async fn parse(&self, text: &str) -> std::result::Result<Command, ParseError> {
        let bot_name = self.bot_username.read().await.clone().unwrap_or_default();
        Command::parse(text, &bot_name)
    }

    /// Reply text for a parsed command.
    pub async fn execute(&self, message: &Message, command: Command) -> String {
        match command {
            Command::Start | Command::Help => help_text(),
            Command::Lang => {
                let current = match self.service.chat_targets(message.chat.id).await {
                    Ok(current) => current,
                    Err(e) => {
                        warn!(chat_id = message.chat.id, error = %e, "Could not read chat targets");
                        None
                    }
                };
                format_language_list(
                    current.as_deref(),
                    &self.service.config().default_targets,
                )
            }
            Command::Setlang(args) => {
                let codes: Vec<&str> = args.split_whitespace().collect();
                match self.service.configure_chat(message.chat.id, &codes).await {
                    Ok(outcome) => format_configured(&outcome),
                    Err(e) => {
                        info!(chat_id = message.chat.id, error = %e, "setlang rejected");
                        format_configure_error(&e)
                    }
                }
            }
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.text();
        if !text.starts_with('/') {
            return Ok(HandlerResponse::Continue);
        }

        let command = match self.parse(text).await {
            Ok(command) => command,
            // Only /setlang takes arguments; a bare /setlang gets the usage reply.
            Err(ParseError::TooFewArguments { .. }) => Command::Setlang(String::new()),
            Err(ParseError::UnknownCommand(_)) | Err(ParseError::WrongBotName(_)) => {
                debug!(chat_id = message.chat.id, "Not a command of this bot, ignoring");
                return Ok(HandlerResponse::Stop);
            }
            Err(e) => {
                debug!(chat_id = message.chat.id, error = %e, "Malformed command, ignoring");
                return Ok(HandlerResponse::Stop);
            }
        };
        info!(chat_id = message.chat.id, command = ?command, "step: command");

        let reply = self.execute(message, command).await;
        if let Err(e) = self.bot.reply_to(message, &reply, ReplyFormat::Html).await {
            error!(chat_id = message.chat.id, error = %e, "Failed to send command reply");
            return Ok(HandlerResponse::Stop);
        }
        Ok(HandlerResponse::Reply(reply))
    }
}
