//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{parse_message_id, Bot as CoreBot, Chat, DbotError, Message, ReplyFormat, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ParseMode, ReplyParameters},
};
use tracing::{error, warn};

use crate::config::TelegramConfig;

/// Builds a teloxide Bot from config, pointing it at `telegram_api_url` when set.
pub fn build_teloxide_bot(config: &TelegramConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url.as_deref() {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str, format: ReplyFormat) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), text.to_string());
        if format == ReplyFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str, format: ReplyFormat) -> Result<()> {
        let mut request = self
            .bot
            .send_message(ChatId(message.chat.id), text.to_string());
        if format == ReplyFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        match parse_message_id(&message.id) {
            Ok(id) => request = request.reply_parameters(ReplyParameters::new(MessageId(id))),
            Err(e) => warn!(error = %e, "Replying without quote"),
        }
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
