//! Shared fixtures: a recording bot, a scripted translation client, and message builders.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chat_settings::InMemoryChatSettingsStore;
use chrono::Utc;
use dbot_core::{Bot, Chat, DbotError, Message, ReplyFormat, Result, User};
use language::{DetectorKind, HeuristicDetector, Language};
use translate_client::{TranslateError, TranslationClient};
use translator::{TranslationService, TranslatorConfig};

/// One recorded reply.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub chat_id: i64,
    pub text: String,
    pub format: ReplyFormat,
}

/// Bot that records every send instead of calling Telegram.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    /// Sends still to be refused before recording starts.
    refuse: AtomicUsize,
}

impl MockBot {
    /// Refuses the first `n` sends the way Telegram refuses an oversized message.
    pub fn refusing_first(n: usize) -> Self {
        Self {
            refuse: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str, format: ReplyFormat) -> Result<()> {
        let refused = self
            .refuse
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if refused {
            return Err(DbotError::Bot("Bad Request: message is too long".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat.id,
            text: text.to_string(),
            format,
        });
        Ok(())
    }
}

/// Client returning `[<code>] <text>`, failing for the listed targets.
#[derive(Default)]
pub struct ScriptedClient {
    failing: HashSet<Language>,
    calls: Mutex<usize>,
}

impl ScriptedClient {
    pub fn failing(targets: &[Language]) -> Self {
        Self {
            failing: targets.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TranslationClient for ScriptedClient {
    async fn translate(
        &self,
        text: &str,
        _source: Option<Language>,
        target: Language,
    ) -> std::result::Result<String, TranslateError> {
        *self.calls.lock().unwrap() += 1;
        if self.failing.contains(&target) {
            return Err(TranslateError::Network("connection reset".to_string()));
        }
        Ok(format!("[{}] {}", target.code(), text))
    }
}

pub fn service(client: Arc<ScriptedClient>) -> Arc<TranslationService> {
    Arc::new(TranslationService::new(
        Arc::new(HeuristicDetector),
        client,
        Arc::new(InMemoryChatSettingsStore::new()),
        TranslatorConfig {
            detector: DetectorKind::Heuristic,
            ..TranslatorConfig::default()
        },
    ))
}

pub fn bot_username(name: &str) -> Arc<tokio::sync::RwLock<Option<String>>> {
    Arc::new(tokio::sync::RwLock::new(Some(name.to_string())))
}

pub fn sample_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 42,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "supergroup".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
