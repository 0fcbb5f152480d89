//! CLI parser, config loading and the offline helper commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use language::{DetectorKind, Language};
use translate_client::{EnvTranslateConfig, GoogleTranslateClient, TranslationClient};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "translate-bot")]
#[command(about = "Telegram translation bot with language auto-detection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the language detected for a text.
    Detect {
        /// heuristic or statistical; defaults to DETECTOR or statistical.
        #[arg(short, long)]
        detector: Option<DetectorKind>,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Translate a text once using TRANSLATE_API_URL / TRANSLATE_TIMEOUT_SECS.
    Translate {
        #[arg(short, long)]
        to: Language,
        /// Source language; the provider detects it when omitted.
        #[arg(short, long)]
        from: Option<Language>,
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// `<code>\t<name>` for the detected language, or the detector's error.
pub fn run_detect(detector: Option<DetectorKind>, text: &str) -> Result<String> {
    let kind = match detector {
        Some(kind) => kind,
        None => translator::TranslatorConfig::from_env()?.detector,
    };
    let language = kind.build().try_detect(text)?;
    Ok(format!(
        "{}\t{} {}",
        language.code(),
        language.emoji(),
        language.name()
    ))
}

/// Translates `text` once through the configured provider.
pub async fn run_translate(to: Language, from: Option<Language>, text: &str) -> Result<String> {
    let config = EnvTranslateConfig::from_env()?;
    config.validate()?;
    let client = GoogleTranslateClient::from_config(&config)?;
    Ok(client.translate(text, from, to).await?)
}
