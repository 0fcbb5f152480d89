//! # dbot-core
//!
//! Core types and traits for the translation bot: [`Bot`], [`Handler`], message, chat and user types,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain and handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot, ReplyFormat};
pub use error::{DbotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
