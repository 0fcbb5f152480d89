//! # Language
//!
//! The fixed catalog of supported languages ([`Language`]) and the [`LanguageDetector`] strategies
//! that map raw text onto it:
//!
//! - [`HeuristicDetector`]: character-range rules, never fails.
//! - [`StatisticalDetector`]: ranked output of a [`LanguageModel`] (lingua by default), falling back
//!   to the heuristic for short text, model errors, or rankings with no catalog member.

mod catalog;
pub mod detector;

pub use catalog::{Language, UnknownLanguage, UNKNOWN_EMOJI};
pub use detector::{
    DetectError, DetectorKind, HeuristicDetector, LanguageDetector, LanguageModel, LinguaModel,
    RankedLanguage, StatisticalDetector,
};
