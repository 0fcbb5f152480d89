use chrono::{DateTime, Utc};
use language::Language;
use serde::{Deserialize, Serialize};

/// Target languages configured for one chat, in the order the user gave them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub target_languages: Vec<Language>,
    pub updated_at: DateTime<Utc>,
}

impl ChatSettings {
    pub fn new(target_languages: Vec<Language>) -> Self {
        Self {
            target_languages,
            updated_at: Utc::now(),
        }
    }
}
