//! BotConfig: TelegramConfig + TranslatorConfig + EnvTranslateConfig. Use load() for env-based loading.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use translate_client::EnvTranslateConfig;
use translator::TranslatorConfig;

pub const DEFAULT_LOG_FILE: &str = "logs/translate-bot.log";

/// Full bot config. Each part lives in the crate that consumes it.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub translator: TranslatorConfig,
    pub translate: EnvTranslateConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env(token)?,
            translator: TranslatorConfig::from_env()?,
            translate: EnvTranslateConfig::from_env()?,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.translator.validate()?;
        self.translate.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
    pub fn log_file(&self) -> &str {
        self.telegram.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }
}
