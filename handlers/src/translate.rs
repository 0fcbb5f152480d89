//! Translation of plain text messages.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, ReplyFormat, Result};
use tracing::{error, instrument};
use translator::format::{format_auto, format_single, FAILURE_MESSAGE};
use translator::{TranslationOutcome, TranslationService};

/// Translates every non-empty, non-command text and replies once.
#[derive(Clone)]
pub struct TranslateHandler {
    service: Arc<TranslationService>,
    bot: Arc<dyn CoreBot>,
}

impl TranslateHandler {
    pub fn new(service: Arc<TranslationService>, bot: Arc<dyn CoreBot>) -> Self {
        Self { service, bot }
    }
}

#[async_trait]
impl Handler for TranslateHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = message.text();
        if text.is_empty() || text.starts_with('/') {
            return Ok(HandlerResponse::Ignore);
        }

        let reply = match self.service.handle_text(message.chat.id, text).await {
            TranslationOutcome::Single(single) => format_single(&single),
            TranslationOutcome::Auto(auto) => format_auto(&auto),
            TranslationOutcome::Failed { .. } => FAILURE_MESSAGE.to_string(),
        };

        if let Err(e) = self.bot.reply_to(message, &reply, ReplyFormat::Html).await {
            error!(chat_id = message.chat.id, error = %e, "Failed to send translation reply");
            if reply == FAILURE_MESSAGE {
                return Ok(HandlerResponse::Stop);
            }
            // Telegram refused the reply itself (e.g. too long); tell the user instead of going silent.
            if let Err(e) = self.bot.reply_to(message, FAILURE_MESSAGE, ReplyFormat::Plain).await {
                error!(chat_id = message.chat.id, error = %e, "Failed to send failure notice");
                return Ok(HandlerResponse::Stop);
            }
            return Ok(HandlerResponse::Reply(FAILURE_MESSAGE.to_string()));
        }
        Ok(HandlerResponse::Reply(reply))
    }
}
