//! Statistical detection over a ranked language model, with the heuristic as fallback.

use std::sync::Arc;

use lingua::{LanguageDetector as LinguaDetector, LanguageDetectorBuilder};
use tracing::{debug, warn};

use super::{DetectError, HeuristicDetector, LanguageDetector};
use crate::catalog::Language;

/// Texts shorter than this (in chars, after trimming) go straight to the heuristic.
pub const MIN_STATISTICAL_CHARS: usize = 3;

/// One entry of a model's ranking. `code` uses catalog spelling where one exists.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedLanguage {
    pub code: String,
    pub confidence: f64,
}

impl RankedLanguage {
    pub fn new(code: impl Into<String>, confidence: f64) -> Self {
        Self {
            code: code.into(),
            confidence,
        }
    }
}

/// A language-probability model producing candidates ranked by confidence.
pub trait LanguageModel: Send + Sync {
    fn rank(&self, text: &str) -> Result<Vec<RankedLanguage>, DetectError>;
}

/// Lingua languages the model knows, with the code reported for each. The neighbours outside the
/// catalog (be, bg, pl, nl) let close relatives be recognised and skipped instead of mislabelled.
const MODEL_LANGUAGES: [(lingua::Language, &str); 18] = [
    (lingua::Language::English, "en"),
    (lingua::Language::Russian, "ru"),
    (lingua::Language::Spanish, "es"),
    (lingua::Language::French, "fr"),
    (lingua::Language::German, "de"),
    (lingua::Language::Italian, "it"),
    (lingua::Language::Portuguese, "pt"),
    (lingua::Language::Chinese, "zh-cn"),
    (lingua::Language::Japanese, "ja"),
    (lingua::Language::Korean, "ko"),
    (lingua::Language::Arabic, "ar"),
    (lingua::Language::Turkish, "tr"),
    (lingua::Language::Hindi, "hi"),
    (lingua::Language::Ukrainian, "uk"),
    (lingua::Language::Belarusian, "be"),
    (lingua::Language::Bulgarian, "bg"),
    (lingua::Language::Polish, "pl"),
    (lingua::Language::Dutch, "nl"),
];

/// [`LanguageModel`] backed by lingua's n-gram models.
pub struct LinguaModel {
    detector: LinguaDetector,
}

impl LinguaModel {
    pub fn new() -> Self {
        let languages: Vec<lingua::Language> = MODEL_LANGUAGES.iter().map(|(l, _)| *l).collect();
        Self {
            detector: LanguageDetectorBuilder::from_languages(&languages).build(),
        }
    }

    fn code_for(language: lingua::Language) -> &'static str {
        MODEL_LANGUAGES
            .iter()
            .find(|(l, _)| *l == language)
            .map(|(_, code)| *code)
            .unwrap_or("und")
    }
}

impl Default for LinguaModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageModel for LinguaModel {
    fn rank(&self, text: &str) -> Result<Vec<RankedLanguage>, DetectError> {
        let values = self.detector.compute_language_confidence_values(text);
        if values.is_empty() {
            return Err(DetectError::Model("lingua returned no confidence values".to_string()));
        }
        Ok(values
            .into_iter()
            .map(|(lang, confidence)| RankedLanguage::new(Self::code_for(lang), confidence))
            .collect())
    }
}

/// Picks the highest-confidence catalog language from a [`LanguageModel`].
pub struct StatisticalDetector {
    model: Arc<dyn LanguageModel>,
    fallback: HeuristicDetector,
}

impl StatisticalDetector {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            fallback: HeuristicDetector,
        }
    }

    fn best_supported(mut ranked: Vec<RankedLanguage>) -> Option<Language> {
        ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        ranked
            .iter()
            .filter(|r| r.confidence > 0.0)
            .find_map(|r| Language::from_code(&r.code))
    }
}

impl LanguageDetector for StatisticalDetector {
    fn try_detect(&self, text: &str) -> Result<Language, DetectError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DetectError::EmptyText);
        }
        if trimmed.chars().count() < MIN_STATISTICAL_CHARS {
            debug!(len = trimmed.chars().count(), "Text too short for model, using heuristic");
            return self.fallback.try_detect(trimmed);
        }

        match self.model.rank(trimmed) {
            Ok(ranked) => match Self::best_supported(ranked) {
                Some(lang) => Ok(lang),
                None => {
                    debug!("No supported language in model ranking, using heuristic");
                    self.fallback.try_detect(trimmed)
                }
            },
            Err(e) => {
                warn!(error = %e, "Language model failed, using heuristic");
                self.fallback.try_detect(trimmed)
            }
        }
    }

    fn name(&self) -> &'static str {
        "statistical"
    }
}
