//! # Translation client
//!
//! Defines the [`TranslationClient`] trait and a Google Translate implementation. One call translates
//! one text into one target language; there is no retry and no caching, and every provider failure
//! comes back as a [`TranslateError`] so the caller decides whether to skip or abort.

use async_trait::async_trait;
use language::Language;

mod config;
mod error;
mod google;

pub use config::{EnvTranslateConfig, TranslateConfig};
pub use error::TranslateError;
pub use google::{GoogleTranslateClient, DEFAULT_GOOGLE_ENDPOINT, MAX_TEXT_CHARS};

/// Translation provider interface.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Translates `text` into `target`. `source` of `None` lets the provider detect it ("auto").
    async fn translate(
        &self,
        text: &str,
        source: Option<Language>,
        target: Language,
    ) -> Result<String, TranslateError>;
}

/// Source code sent to the provider: the language code, or `auto`.
pub fn source_code(source: Option<Language>) -> &'static str {
    source.map(Language::provider_code).unwrap_or("auto")
}
