//! Storage interface for per-chat settings.

use async_trait::async_trait;

use crate::types::ChatSettings;

/// Get/set of [`ChatSettings`] by chat id. Writes replace the whole entry; last write wins.
#[async_trait]
pub trait ChatSettingsStore: Send + Sync {
    /// Settings for `chat_id`, or `None` if the chat never configured any.
    async fn get(&self, chat_id: i64) -> Result<Option<ChatSettings>, anyhow::Error>;

    /// Replaces the settings for `chat_id`.
    async fn set(&self, chat_id: i64, settings: ChatSettings) -> Result<(), anyhow::Error>;

    /// Drops the settings for `chat_id`; returns whether there were any.
    async fn remove(&self, chat_id: i64) -> Result<bool, anyhow::Error>;
}
