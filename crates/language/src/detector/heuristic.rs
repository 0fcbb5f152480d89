//! Character-range heuristic. First matching rule wins; Cyrillic is checked before Latin.

use super::{DetectError, LanguageDetector};
use crate::catalog::Language;

const CYRILLIC: std::ops::RangeInclusive<char> = '\u{0400}'..='\u{04FF}';
/// `A` through `z`, including the few ASCII symbols between the two letter blocks.
const BASIC_LATIN: std::ops::RangeInclusive<char> = '\u{0041}'..='\u{007A}';

/// Detector that never fails and needs no model.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicDetector;

impl HeuristicDetector {
    pub fn classify(text: &str) -> Language {
        if text.chars().any(|c| CYRILLIC.contains(&c)) {
            return Language::Russian;
        }
        if text.chars().any(|c| BASIC_LATIN.contains(&c)) {
            return Language::English;
        }

        let lower = text.to_lowercase();
        if lower.contains('ñ') || text.contains('¡') || text.contains('¿') {
            Language::Spanish
        } else if text.contains(&['é', 'è', 'ê'][..]) {
            Language::French
        } else if text.contains(&['ä', 'ö', 'ü', 'ß'][..]) {
            Language::German
        } else {
            Language::English
        }
    }
}

impl LanguageDetector for HeuristicDetector {
    fn try_detect(&self, text: &str) -> Result<Language, DetectError> {
        Ok(Self::classify(text))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}
