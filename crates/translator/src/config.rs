//! Translation flow configuration loaded from env.

use anyhow::{Context, Result};
use language::{DetectorKind, Language};
use std::env;

const DEFAULT_MAX_TARGETS: usize = 3;
/// Upper bound for MAX_TARGET_LANGUAGES; more sections do not fit a readable reply.
pub const MAX_TARGETS_LIMIT: usize = 4;
const DEFAULT_TARGETS: [Language; 5] = [
    Language::English,
    Language::Russian,
    Language::Spanish,
    Language::French,
    Language::German,
];
const DEFAULT_FALLBACK: [Language; 2] = [Language::English, Language::Russian];

/// Knobs of the translation flow.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorConfig {
    /// DETECTOR: `heuristic` or `statistical`.
    pub detector: DetectorKind,
    /// MAX_TARGET_LANGUAGES: cap on translations per automatic reply.
    pub max_targets: usize,
    /// DEFAULT_TARGET_LANGUAGES: used by chats without settings.
    pub default_targets: Vec<Language>,
    /// FALLBACK_TARGET_LANGUAGES: used when every target equals the source.
    pub fallback_targets: Vec<Language>,
    /// SINGLE_TARGET_DETECT_SOURCE: detect the source for `text /code` instead of sending "auto".
    pub detect_single_source: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            detector: DetectorKind::default(),
            max_targets: DEFAULT_MAX_TARGETS,
            default_targets: DEFAULT_TARGETS.to_vec(),
            fallback_targets: DEFAULT_FALLBACK.to_vec(),
            detect_single_source: false,
        }
    }
}

impl TranslatorConfig {
    /// Load from environment variables; unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let detector = match non_empty_var("DETECTOR") {
            Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e))?,
            None => defaults.detector,
        };
        let max_targets = match non_empty_var("MAX_TARGET_LANGUAGES") {
            Some(s) => s
                .trim()
                .parse()
                .with_context(|| format!("MAX_TARGET_LANGUAGES is not a number: {}", s))?,
            None => defaults.max_targets,
        };
        let default_targets = match non_empty_var("DEFAULT_TARGET_LANGUAGES") {
            Some(s) => language_list("DEFAULT_TARGET_LANGUAGES", &s)?,
            None => defaults.default_targets,
        };
        let fallback_targets = match non_empty_var("FALLBACK_TARGET_LANGUAGES") {
            Some(s) => language_list("FALLBACK_TARGET_LANGUAGES", &s)?,
            None => defaults.fallback_targets,
        };
        let detect_single_source = non_empty_var("SINGLE_TARGET_DETECT_SOURCE")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.detect_single_source);

        Ok(Self {
            detector,
            max_targets,
            default_targets,
            fallback_targets,
            detect_single_source,
        })
    }

    /// Fails on a cap outside `1..=MAX_TARGETS_LIMIT` or empty language lists.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_TARGETS_LIMIT).contains(&self.max_targets) {
            anyhow::bail!(
                "MAX_TARGET_LANGUAGES must be between 1 and {}, got {}",
                MAX_TARGETS_LIMIT,
                self.max_targets
            );
        }
        if self.default_targets.is_empty() {
            anyhow::bail!("DEFAULT_TARGET_LANGUAGES must name at least one language");
        }
        if self.fallback_targets.is_empty() {
            anyhow::bail!("FALLBACK_TARGET_LANGUAGES must name at least one language");
        }
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Parses a code list and drops repeats, keeping first occurrences.
fn language_list(key: &str, value: &str) -> Result<Vec<Language>> {
    let parsed = Language::parse_list(value).with_context(|| format!("invalid {}", key))?;
    let mut out = Vec::with_capacity(parsed.len());
    for lang in parsed {
        if !out.contains(&lang) {
            out.push(lang);
        }
    }
    Ok(out)
}
