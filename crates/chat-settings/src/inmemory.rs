//! In-memory settings store. Data is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::store::ChatSettingsStore;
use crate::types::ChatSettings;

/// `HashMap` behind an async `RwLock`; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChatSettingsStore {
    entries: Arc<RwLock<HashMap<i64, ChatSettings>>>,
}

impl InMemoryChatSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chats with settings.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ChatSettingsStore for InMemoryChatSettingsStore {
    async fn get(&self, chat_id: i64) -> Result<Option<ChatSettings>, anyhow::Error> {
        Ok(self.entries.read().await.get(&chat_id).cloned())
    }

    async fn set(&self, chat_id: i64, settings: ChatSettings) -> Result<(), anyhow::Error> {
        let codes: Vec<&str> = settings.target_languages.iter().map(|l| l.code()).collect();
        info!(chat_id, languages = ?codes, "Storing chat target languages");
        self.entries.write().await.insert(chat_id, settings);
        Ok(())
    }

    async fn remove(&self, chat_id: i64) -> Result<bool, anyhow::Error> {
        Ok(self.entries.write().await.remove(&chat_id).is_some())
    }
}
