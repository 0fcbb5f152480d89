//! # Chat settings
//!
//! Per-chat target-language configuration behind the [`ChatSettingsStore`] trait, so the translation
//! flow never touches a concrete map. [`InMemoryChatSettingsStore`] keeps settings for the process
//! lifetime only; a persistent backend can implement the same trait without touching call sites.

mod inmemory;
mod store;
mod types;

pub use inmemory::InMemoryChatSettingsStore;
pub use store::ChatSettingsStore;
pub use types::ChatSettings;
