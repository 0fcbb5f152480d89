//! # Handler chain
//!
//! Runs a sequence of handlers for each message. Any handler's `before` can stop the chain; the first
//! handler that returns Stop or Reply ends the handle phase; `after` callbacks run in reverse order.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Ordered list of handlers sharing one before → handle → after pass per message.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs every `before`, then `handle` until Stop/Reply, then every `after` in reverse.
    /// Returns the response that ended the handle phase, or Continue if none did.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, message_id = %message.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(user_id = message.user.id, "step: handler_chain started");

        for handler in &self.handlers {
            let name = handler.name();
            if !handler.before(message).await? {
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let name = handler.name();
            let response = match handler.handle(message).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(handler = %name, error = %e, "step: handler failed");
                    return Err(e);
                }
            };
            debug!(handler = %name, response = ?response, "step: handler done");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => continue,
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        debug!(
            user_id = message.user.id,
            response = ?final_response,
            "step: handler_chain finished"
        );
        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
