//! Language detection strategies.
//!
//! [`LanguageDetector::try_detect`] returns an explicit result; [`LanguageDetector::detect`] is the
//! infallible entry point used by the translation flow and degrades to English on error.

mod heuristic;
mod statistical;

use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

use crate::catalog::Language;

pub use heuristic::HeuristicDetector;
pub use statistical::{LanguageModel, LinguaModel, RankedLanguage, StatisticalDetector};

/// Why a detector could not settle on a catalog language.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("text is empty")]
    EmptyText,

    #[error("language model failed: {0}")]
    Model(String),
}

/// Maps text to a catalog language.
pub trait LanguageDetector: Send + Sync {
    /// Best guess for `text`, or why there is none.
    fn try_detect(&self, text: &str) -> Result<Language, DetectError>;

    /// Best guess for `text`; any error becomes English.
    fn detect(&self, text: &str) -> Language {
        match self.try_detect(text) {
            Ok(lang) => lang,
            Err(e) => {
                warn!(error = %e, detector = self.name(), "Detection failed, defaulting to english");
                Language::English
            }
        }
    }

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Which detector strategy to run (config `DETECTOR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetectorKind {
    Heuristic,
    #[default]
    Statistical,
}

impl DetectorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DetectorKind::Heuristic => "heuristic",
            DetectorKind::Statistical => "statistical",
        }
    }

    /// Builds the detector. The statistical one loads lingua models lazily on first use.
    pub fn build(self) -> Arc<dyn LanguageDetector> {
        match self {
            DetectorKind::Heuristic => Arc::new(HeuristicDetector),
            DetectorKind::Statistical => Arc::new(StatisticalDetector::new(Arc::new(LinguaModel::new()))),
        }
    }
}

impl FromStr for DetectorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" => Ok(DetectorKind::Heuristic),
            "statistical" | "lingua" => Ok(DetectorKind::Statistical),
            other => Err(format!(
                "unknown detector '{}', expected 'heuristic' or 'statistical'",
                other
            )),
        }
    }
}
