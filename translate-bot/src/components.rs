//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use chat_settings::InMemoryChatSettingsStore;
use dbot_core::Bot as CoreBot;
use dbot_telegram::{build_teloxide_bot, TelegramBotAdapter};
use handler_chain::HandlerChain;
use handlers::{CommandHandler, LoggingHandler, TranslateHandler};
use tracing::{info, instrument};
use translate_client::{EnvTranslateConfig, GoogleTranslateClient};
use translator::{TranslationService, TranslatorConfig};

use super::config::BotConfig;

/// Everything the runner needs; produced by the component factory.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Bot used by handlers to reply; the Telegram adapter unless overridden (tests).
    pub handler_bot: Arc<dyn CoreBot>,
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    pub service: Arc<TranslationService>,
}

/// Detector, Google client and in-memory chat store behind one [`TranslationService`].
#[instrument(skip(translator, translate))]
pub fn build_translation_service(
    translator: &TranslatorConfig,
    translate: &EnvTranslateConfig,
) -> Result<Arc<TranslationService>> {
    let detector = translator.detector.build();
    let client = GoogleTranslateClient::from_config(translate)?;
    info!(
        detector = detector.name(),
        endpoint = %client.endpoint(),
        timeout_secs = translate.translate_timeout_secs,
        max_targets = translator.max_targets,
        "Translation service ready"
    );
    Ok(Arc::new(TranslationService::new(
        detector,
        Arc::new(client),
        Arc::new(InMemoryChatSettingsStore::new()),
        translator.clone(),
    )))
}

/// Builds BotComponents. `handler_bot_override` replaces the Telegram adapter for replies.
#[instrument(skip(config, handler_bot_override))]
pub fn build_bot_components(
    config: &BotConfig,
    handler_bot_override: Option<Arc<dyn CoreBot>>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(&config.telegram);
    let handler_bot = handler_bot_override
        .unwrap_or_else(|| Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())));
    let service = build_translation_service(&config.translator, &config.translate)?;

    Ok(BotComponents {
        teloxide_bot,
        handler_bot,
        bot_username: Arc::new(tokio::sync::RwLock::new(None)),
        service,
    })
}

/// Logging → commands → translation.
pub fn build_handler_chain(components: &BotComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            components.service.clone(),
            components.handler_bot.clone(),
            components.bot_username.clone(),
        )))
        .add_handler(Arc::new(TranslateHandler::new(
            components.service.clone(),
            components.handler_bot.clone(),
        )))
}
