//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide.

use crate::error::{DbotError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// How the transport should interpret reply text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplyFormat {
    /// Sent verbatim.
    #[default]
    Plain,
    /// Telegram HTML subset (`<b>`, `<i>`, `<code>`); callers escape user text.
    Html,
}

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str, format: ReplyFormat) -> Result<()>;

    /// Sends a reply to the given message (same chat). Default: plain send to the chat.
    async fn reply_to(&self, message: &Message, text: &str, format: ReplyFormat) -> Result<()> {
        self.send_message(&message.chat, text, format).await
    }
}

/// Parses a message id string into an i32 (Telegram message ids).
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}
