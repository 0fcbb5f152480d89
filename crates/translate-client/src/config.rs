//! Translation provider configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::google::DEFAULT_GOOGLE_ENDPOINT;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Provider settings consumed by [`crate::GoogleTranslateClient::from_config`].
pub trait TranslateConfig: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
}

/// Provider settings loaded from TRANSLATE_API_URL and TRANSLATE_TIMEOUT_SECS.
#[derive(Debug, Clone)]
pub struct EnvTranslateConfig {
    pub translate_api_url: String,
    pub translate_timeout_secs: u64,
}

impl Default for EnvTranslateConfig {
    fn default() -> Self {
        Self {
            translate_api_url: DEFAULT_GOOGLE_ENDPOINT.to_string(),
            translate_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl TranslateConfig for EnvTranslateConfig {
    fn endpoint(&self) -> &str {
        &self.translate_api_url
    }
    fn timeout(&self) -> Duration {
        Duration::from_secs(self.translate_timeout_secs)
    }
}

impl EnvTranslateConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let translate_api_url = env::var("TRANSLATE_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GOOGLE_ENDPOINT.to_string());
        let translate_timeout_secs = match env::var("TRANSLATE_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("TRANSLATE_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        Ok(Self {
            translate_api_url,
            translate_timeout_secs,
        })
    }

    /// Fails on an unparsable endpoint or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        reqwest::Url::parse(&self.translate_api_url).with_context(|| {
            format!("TRANSLATE_API_URL is not a valid URL: {}", self.translate_api_url)
        })?;
        if self.translate_timeout_secs == 0 {
            anyhow::bail!("TRANSLATE_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}
