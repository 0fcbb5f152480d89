//! # Translator
//!
//! The message-level translation flow:
//!
//! 1. [`parse_request`] decides between a single-target request (`text /code`) and automatic mode.
//! 2. [`TranslationService`] detects the source, resolves the chat's targets, fans out one
//!    [`translate_client::TranslationClient`] call per target and collects the successes.
//! 3. [`format`] renders outcomes as Telegram HTML.
//!
//! Chat configuration (`/setlang`) also goes through [`TranslationService::configure_chat`] so the
//! catalog check happens on every write.

mod config;
pub mod format;
mod request;
mod service;

pub use config::TranslatorConfig;
pub use request::{parse_request, Request};
pub use service::{
    AutoTranslation, ConfigureError, ConfigureOutcome, FlowError, SingleTranslation,
    TranslatedSection, TranslationOutcome, TranslationService,
};
