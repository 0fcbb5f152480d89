//! The translation flow: detect, resolve targets, fan out, collect.

use std::sync::Arc;

use chat_settings::{ChatSettings, ChatSettingsStore};
use futures::future::join_all;
use language::{Language, LanguageDetector};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use translate_client::{TranslateError, TranslationClient};

use crate::config::TranslatorConfig;
use crate::request::{parse_request, Request};

/// One translated block of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedSection {
    pub language: Language,
    pub text: String,
}

/// Result of a `text /code` request. `source` is `None` when the provider detected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleTranslation {
    pub source: Option<Language>,
    pub original: String,
    pub translation: TranslatedSection,
}

/// Result of automatic mode: successful sections in target order plus the targets that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoTranslation {
    pub source: Language,
    pub original: String,
    pub sections: Vec<TranslatedSection>,
    pub failed: Vec<Language>,
}

impl AutoTranslation {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// What to tell the chat about one inbound text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Single(SingleTranslation),
    Auto(AutoTranslation),
    /// Nothing could be translated; reply with the generic failure message.
    Failed { reason: String },
}

/// Errors that abort a whole request.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Translation failed: {0}")]
    Translate(#[from] TranslateError),

    #[error("Chat settings unavailable: {0}")]
    Store(anyhow::Error),

    #[error("No target language could be translated")]
    AllTargetsFailed,
}

/// Result of applying `/setlang` arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOutcome {
    /// Stored targets, deduplicated, in argument order.
    pub applied: Vec<Language>,
    /// Arguments that are not catalog codes, as given.
    pub rejected: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigureError {
    #[error("No languages given")]
    NoArguments,

    #[error("No supported languages among: {}", rejected.join(", "))]
    NoValidLanguages { rejected: Vec<String> },

    #[error("Failed to store chat settings: {0}")]
    Store(anyhow::Error),
}

/// Ties detector, client and settings store together.
#[derive(Clone)]
pub struct TranslationService {
    detector: Arc<dyn LanguageDetector>,
    client: Arc<dyn TranslationClient>,
    store: Arc<dyn ChatSettingsStore>,
    config: TranslatorConfig,
}

impl TranslationService {
    pub fn new(
        detector: Arc<dyn LanguageDetector>,
        client: Arc<dyn TranslationClient>,
        store: Arc<dyn ChatSettingsStore>,
        config: TranslatorConfig,
    ) -> Self {
        Self {
            detector,
            client,
            store,
            config,
        }
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn detector(&self) -> &Arc<dyn LanguageDetector> {
        &self.detector
    }

    /// Entry point for a non-command text message.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn handle_text(&self, chat_id: i64, text: &str) -> TranslationOutcome {
        let result = match parse_request(text) {
            Request::Single { content, target } => self
                .translate_single(&content, target)
                .await
                .map(TranslationOutcome::Single),
            Request::Auto { text } => {
                self.translate_auto(chat_id, &text).await.and_then(|auto| {
                    if auto.is_empty() {
                        Err(FlowError::AllTargetsFailed)
                    } else {
                        Ok(TranslationOutcome::Auto(auto))
                    }
                })
            }
        };

        result.unwrap_or_else(|e| {
            warn!(chat_id, error = %e, "Translation request failed");
            TranslationOutcome::Failed {
                reason: e.to_string(),
            }
        })
    }

    /// Translates `content` into one target. The source is left to the provider unless
    /// single-source detection is enabled.
    #[instrument(skip(self, content, target), fields(target_lang = target.code()))]
    pub async fn translate_single(
        &self,
        content: &str,
        target: Language,
    ) -> Result<SingleTranslation, FlowError> {
        let source = if self.config.detect_single_source {
            Some(self.detector.detect(content))
        } else {
            None
        };
        debug!(source = ?source.map(Language::code), "step: single-target translation");

        let text = self.client.translate(content, source, target).await?;
        Ok(SingleTranslation {
            source,
            original: content.to_string(),
            translation: TranslatedSection {
                language: target,
                text,
            },
        })
    }

    /// Detects the source, resolves the chat's targets and translates into each concurrently.
    /// Failed targets are recorded and skipped; sections keep target order.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn translate_auto(
        &self,
        chat_id: i64,
        text: &str,
    ) -> Result<AutoTranslation, FlowError> {
        let source = self.detector.detect(text);
        let configured = self.store.get(chat_id).await.map_err(FlowError::Store)?;
        let targets = self.resolve_targets(
            configured.as_ref().map(|s| s.target_languages.as_slice()),
            source,
        );
        info!(
            chat_id,
            source = source.code(),
            targets = ?targets.iter().map(|l| l.code()).collect::<Vec<_>>(),
            "step: fan-out translation"
        );

        let results = join_all(
            targets
                .iter()
                .map(|&target| async move { (target, self.client.translate(text, None, target).await) }),
        )
        .await;

        let mut sections = Vec::with_capacity(results.len());
        let mut failed = Vec::new();
        for (target, result) in results {
            match result {
                Ok(translated) => sections.push(TranslatedSection {
                    language: target,
                    text: translated,
                }),
                Err(e) => {
                    warn!(chat_id, target_lang = target.code(), error = %e, "Target translation failed, skipping");
                    failed.push(target);
                }
            }
        }

        Ok(AutoTranslation {
            source,
            original: text.to_string(),
            sections,
            failed,
        })
    }

    /// Target list for automatic mode: configured (or default) targets without the source, capped.
    /// When nothing is left the fallback list is used, minus the source if that still leaves one.
    pub fn resolve_targets(&self, configured: Option<&[Language]>, source: Language) -> Vec<Language> {
        let base = configured.unwrap_or(&self.config.default_targets);
        let targets: Vec<Language> = base
            .iter()
            .copied()
            .filter(|&lang| lang != source)
            .take(self.config.max_targets)
            .collect();
        if !targets.is_empty() {
            return targets;
        }

        let fallback: Vec<Language> = self
            .config
            .fallback_targets
            .iter()
            .copied()
            .filter(|&lang| lang != source)
            .collect();
        if fallback.is_empty() {
            self.config.fallback_targets.clone()
        } else {
            fallback
        }
    }

    /// Applies `/setlang` arguments. Unknown codes are reported and skipped; the chat's settings are
    /// replaced only when at least one argument is a catalog code.
    #[instrument(skip(self, args))]
    pub async fn configure_chat(
        &self,
        chat_id: i64,
        args: &[&str],
    ) -> Result<ConfigureOutcome, ConfigureError> {
        if args.is_empty() {
            return Err(ConfigureError::NoArguments);
        }

        let mut applied = Vec::new();
        let mut rejected = Vec::new();
        for &arg in args {
            match Language::from_code(arg) {
                Some(lang) if !applied.contains(&lang) => applied.push(lang),
                Some(_) => {}
                None => rejected.push(arg.to_string()),
            }
        }

        if applied.is_empty() {
            return Err(ConfigureError::NoValidLanguages { rejected });
        }

        self.store
            .set(chat_id, ChatSettings::new(applied.clone()))
            .await
            .map_err(ConfigureError::Store)?;
        info!(
            chat_id,
            languages = ?applied.iter().map(|l| l.code()).collect::<Vec<_>>(),
            rejected = rejected.len(),
            "Chat target languages updated"
        );

        Ok(ConfigureOutcome { applied, rejected })
    }

    /// The chat's configured targets, if any.
    pub async fn chat_targets(&self, chat_id: i64) -> anyhow::Result<Option<Vec<Language>>> {
        Ok(self
            .store
            .get(chat_id)
            .await?
            .map(|settings| settings.target_languages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chat_settings::InMemoryChatSettingsStore;
    use language::{DetectorKind, HeuristicDetector};
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Echoes `<code>:<text>` and fails for the configured targets.
    #[derive(Default)]
    struct MockClient {
        failing: HashSet<Language>,
        calls: Mutex<Vec<(Option<Language>, Language)>>,
    }

    impl MockClient {
        fn failing(targets: &[Language]) -> Self {
            Self {
                failing: targets.iter().copied().collect(),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<(Option<Language>, Language)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TranslationClient for MockClient {
        async fn translate(
            &self,
            text: &str,
            source: Option<Language>,
            target: Language,
        ) -> Result<String, TranslateError> {
            self.calls.lock().unwrap().push((source, target));
            if self.failing.contains(&target) {
                return Err(TranslateError::Status(503));
            }
            Ok(format!("{}:{}", target.code(), text))
        }
    }

    fn service_with(client: Arc<MockClient>, config: TranslatorConfig) -> TranslationService {
        TranslationService::new(
            Arc::new(HeuristicDetector),
            client,
            Arc::new(InMemoryChatSettingsStore::new()),
            config,
        )
    }

    fn service(client: Arc<MockClient>) -> TranslationService {
        service_with(
            client,
            TranslatorConfig {
                detector: DetectorKind::Heuristic,
                ..TranslatorConfig::default()
            },
        )
    }

    /// **Test: English text in an unconfigured chat goes to the first three non-English defaults**
    #[tokio::test]
    async fn test_auto_defaults_exclude_source_and_cap() {
        let client = Arc::new(MockClient::default());
        let svc = service(client.clone());

        let auto = svc.translate_auto(1, "Hello everyone").await.unwrap();

        assert_eq!(auto.source, Language::English);
        let langs: Vec<Language> = auto.sections.iter().map(|s| s.language).collect();
        assert_eq!(langs, vec![Language::Russian, Language::Spanish, Language::French]);
        assert!(auto.failed.is_empty());
        assert_eq!(auto.sections[0].text, "ru:Hello everyone");
        assert!(client.calls().iter().all(|(source, _)| source.is_none()));
    }

    /// **Test: Failed targets are omitted, the rest keep their order**
    #[tokio::test]
    async fn test_auto_skips_failed_targets() {
        let client = Arc::new(MockClient::failing(&[Language::Spanish]));
        let svc = service(client);

        let auto = svc.translate_auto(1, "Hello everyone").await.unwrap();

        let langs: Vec<Language> = auto.sections.iter().map(|s| s.language).collect();
        assert_eq!(langs, vec![Language::Russian, Language::French]);
        assert_eq!(auto.failed, vec![Language::Spanish]);
    }

    /// **Test: Every target failing yields exactly one Failed outcome**
    #[tokio::test]
    async fn test_handle_text_all_targets_fail() {
        let client = Arc::new(MockClient::failing(&Language::ALL[..]));
        let svc = service(client);

        let outcome = svc.handle_text(1, "Hello everyone").await;
        assert!(matches!(outcome, TranslationOutcome::Failed { .. }));
    }

    /// **Test: A configured chat uses its own order; the source language is dropped**
    #[tokio::test]
    async fn test_auto_uses_chat_settings() {
        let client = Arc::new(MockClient::default());
        let svc = service(client);
        svc.configure_chat(7, &["ja", "ru", "de"]).await.unwrap();

        let auto = svc.translate_auto(7, "Привет всем").await.unwrap();

        assert_eq!(auto.source, Language::Russian);
        let langs: Vec<Language> = auto.sections.iter().map(|s| s.language).collect();
        assert_eq!(langs, vec![Language::Japanese, Language::German]);
    }

    /// **Test: When every configured target equals the source, the fallback pair is used**
    #[tokio::test]
    async fn test_resolve_targets_fallback() {
        let svc = service(Arc::new(MockClient::default()));

        assert_eq!(
            svc.resolve_targets(Some(&[Language::Italian][..]), Language::Italian),
            vec![Language::English, Language::Russian]
        );
        // The fallback drops the source when that still leaves a target.
        assert_eq!(
            svc.resolve_targets(Some(&[Language::English][..]), Language::English),
            vec![Language::Russian]
        );
    }

    #[test]
    fn test_resolve_targets_single_language_fallback_equal_to_source() {
        let config = TranslatorConfig {
            fallback_targets: vec![Language::German],
            ..TranslatorConfig::default()
        };
        let svc = service_with(Arc::new(MockClient::default()), config);
        assert_eq!(
            svc.resolve_targets(Some(&[Language::German][..]), Language::German),
            vec![Language::German]
        );
    }

    #[test]
    fn test_resolve_targets_respects_cap() {
        let config = TranslatorConfig {
            max_targets: 2,
            ..TranslatorConfig::default()
        };
        let svc = service_with(Arc::new(MockClient::default()), config);
        let targets = svc.resolve_targets(Some(&Language::ALL[..]), Language::Korean);
        assert_eq!(targets, vec![Language::English, Language::Russian]);
    }

    /// **Test: `text /code` translates once, with source left to the provider**
    #[tokio::test]
    async fn test_handle_text_single_target() {
        let client = Arc::new(MockClient::default());
        let svc = service(client.clone());

        let outcome = svc.handle_text(1, "Bonjour /de").await;

        match outcome {
            TranslationOutcome::Single(single) => {
                assert_eq!(single.source, None);
                assert_eq!(single.original, "Bonjour");
                assert_eq!(single.translation.language, Language::German);
                assert_eq!(single.translation.text, "de:Bonjour");
            }
            other => panic!("expected single translation, got {:?}", other),
        }
        assert_eq!(client.calls(), vec![(None, Language::German)]);
    }

    #[tokio::test]
    async fn test_single_target_with_source_detection() {
        let client = Arc::new(MockClient::default());
        let config = TranslatorConfig {
            detect_single_source: true,
            ..TranslatorConfig::default()
        };
        let svc = service_with(client.clone(), config);

        let single = svc.translate_single("Привет", Language::English).await.unwrap();

        assert_eq!(single.source, Some(Language::Russian));
        assert_eq!(client.calls(), vec![(Some(Language::Russian), Language::English)]);
    }

    #[tokio::test]
    async fn test_single_target_failure_is_failed_outcome() {
        let client = Arc::new(MockClient::failing(&[Language::German]));
        let svc = service(client);
        let outcome = svc.handle_text(1, "Bonjour /de").await;
        assert!(matches!(outcome, TranslationOutcome::Failed { .. }));
    }

    /// **Test: setlang keeps valid codes in order, dedupes, and reports unknown ones**
    #[tokio::test]
    async fn test_configure_chat_mixed_arguments() {
        let svc = service(Arc::new(MockClient::default()));

        let outcome = svc
            .configure_chat(3, &["es", "xx", "EN", "es", "zh-cn"])
            .await
            .unwrap();

        assert_eq!(
            outcome.applied,
            vec![Language::Spanish, Language::English, Language::ChineseSimplified]
        );
        assert_eq!(outcome.rejected, vec!["xx".to_string()]);
        assert_eq!(svc.chat_targets(3).await.unwrap(), Some(outcome.applied));
    }

    /// **Test: setlang with only unknown codes leaves existing settings untouched**
    #[tokio::test]
    async fn test_configure_chat_rejects_all_invalid() {
        let svc = service(Arc::new(MockClient::default()));
        svc.configure_chat(3, &["fr"]).await.unwrap();

        let err = svc.configure_chat(3, &["xx", "yy"]).await.unwrap_err();
        match err {
            ConfigureError::NoValidLanguages { rejected } => {
                assert_eq!(rejected, vec!["xx".to_string(), "yy".to_string()]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(svc.chat_targets(3).await.unwrap(), Some(vec![Language::French]));

        assert!(matches!(
            svc.configure_chat(3, &[]).await,
            Err(ConfigureError::NoArguments)
        ));
    }

    /// **Test: A later setlang replaces the whole list**
    #[tokio::test]
    async fn test_configure_chat_last_write_wins() {
        let svc = service(Arc::new(MockClient::default()));
        svc.configure_chat(9, &["fr", "de"]).await.unwrap();
        svc.configure_chat(9, &["ko"]).await.unwrap();
        assert_eq!(svc.chat_targets(9).await.unwrap(), Some(vec![Language::Korean]));
        assert_eq!(svc.chat_targets(10).await.unwrap(), None);
    }
}
