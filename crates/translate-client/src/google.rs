//! Google Translate web endpoint (`translate_a/single`, client `gtx`).
//!
//! Response shape: `[[["<translated>", "<original>", ...], ...], null, "<detected source>", ...]`;
//! the translation is the concatenation of every segment's first element.

use async_trait::async_trait;
use language::Language;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::TranslateConfig;
use crate::{source_code, TranslateError, TranslationClient};

pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Provider limit on input length.
pub const MAX_TEXT_CHARS: usize = 5000;

/// [`TranslationClient`] for the Google Translate web endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslateClient {
    client: Client,
    endpoint: String,
}

impl GoogleTranslateClient {
    /// Client against the public endpoint with reqwest defaults.
    pub fn new() -> Self {
        Self::with_client(Client::new(), DEFAULT_GOOGLE_ENDPOINT.to_string())
    }

    pub fn with_client(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }

    /// Builds the HTTP client with the configured timeout.
    pub fn from_config(config: &dyn TranslateConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;
        Ok(Self::with_client(client, config.endpoint().to_string()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Source code the provider detected (third element of the response), if present.
    fn detected_source(body: &Value) -> Option<&str> {
        body.get(2).and_then(Value::as_str)
    }

    fn parse_translation(body: &Value) -> Result<String, TranslateError> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| TranslateError::InvalidResponse("missing segment list".to_string()))?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.trim().is_empty() {
            return Err(TranslateError::EmptyTranslation);
        }
        Ok(translated)
    }
}

impl Default for GoogleTranslateClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationClient for GoogleTranslateClient {
    #[instrument(
        skip(self, text, source, target),
        fields(text_len = text.len(), source = source_code(source), target_lang = target.code())
    )]
    async fn translate(
        &self,
        text: &str,
        source: Option<Language>,
        target: Language,
    ) -> Result<String, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TranslateError::EmptyText);
        }
        let len = text.chars().count();
        if len > MAX_TEXT_CHARS {
            return Err(TranslateError::TextTooLong {
                len,
                max: MAX_TEXT_CHARS,
            });
        }

        let response = self
            .client
            .get(&self.endpoint)
            .header("User-Agent", "Mozilla/5.0")
            .query(&[
                ("client", "gtx"),
                ("sl", source_code(source)),
                ("tl", target.provider_code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Translate request rejected");
            return Err(TranslateError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::InvalidResponse(e.to_string()))?;
        let translated = Self::parse_translation(&body)?;

        let detected = Self::detected_source(&body).unwrap_or("-");
        debug!(
            detected,
            translated_len = translated.len(),
            "Translation received"
        );
        Ok(translated)
    }
}
