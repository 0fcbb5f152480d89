use thiserror::Error;

/// Failure of a single translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("nothing to translate")]
    EmptyText,

    #[error("text is {len} characters, provider limit is {max}")]
    TextTooLong { len: usize, max: usize },

    #[error("network error: {0}")]
    Network(String),

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("provider returned an empty translation")]
    EmptyTranslation,
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            TranslateError::Status(status.as_u16())
        } else if e.is_decode() {
            TranslateError::InvalidResponse(e.to_string())
        } else {
            TranslateError::Network(e.to_string())
        }
    }
}
