//! Per-message logging.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            text_len = message.content.chars().count(),
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(_) => "replied",
            HandlerResponse::Stop => "stopped",
            HandlerResponse::Ignore => "ignored",
            HandlerResponse::Continue => "unhandled",
        };
        debug!(message_id = %message.id, outcome, "Processed message");
        Ok(())
    }
}
