//! Supported-language catalog: code, display name and emoji per language.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Glyph shown when the source language was left to the provider ("auto").
pub const UNKNOWN_EMOJI: &str = "🌐";

/// A language the bot can translate into. Every value is a catalog member by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    English,
    Russian,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    ChineseSimplified,
    Japanese,
    Korean,
    Arabic,
    Turkish,
    Hindi,
    Ukrainian,
}

/// Returned when a code is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Whole catalog in presentation order.
    pub const ALL: [Language; 14] = [
        Language::English,
        Language::Russian,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::ChineseSimplified,
        Language::Japanese,
        Language::Korean,
        Language::Arabic,
        Language::Turkish,
        Language::Hindi,
        Language::Ukrainian,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::ChineseSimplified => "zh-cn",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Arabic => "ar",
            Language::Turkish => "tr",
            Language::Hindi => "hi",
            Language::Ukrainian => "uk",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Russian => "russian",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
            Language::Italian => "italian",
            Language::Portuguese => "portuguese",
            Language::ChineseSimplified => "chinese (simplified)",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Arabic => "arabic",
            Language::Turkish => "turkish",
            Language::Hindi => "hindi",
            Language::Ukrainian => "ukrainian",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Language::English => "🇺🇸",
            Language::Russian => "🇷🇺",
            Language::Spanish => "🇪🇸",
            Language::French => "🇫🇷",
            Language::German => "🇩🇪",
            Language::Italian => "🇮🇹",
            Language::Portuguese => "🇵🇹",
            Language::ChineseSimplified => "🇨🇳",
            Language::Japanese => "🇯🇵",
            Language::Korean => "🇰🇷",
            Language::Arabic => "🇸🇦",
            Language::Turkish => "🇹🇷",
            Language::Hindi => "🇮🇳",
            Language::Ukrainian => "🇺🇦",
        }
    }

    /// Code as the Google translate endpoint spells it (region subtags upper-case).
    pub fn provider_code(self) -> &'static str {
        match self {
            Language::ChineseSimplified => "zh-CN",
            other => other.code(),
        }
    }

    /// Looks up a catalog code; case-insensitive, surrounding whitespace ignored.
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// Parses a comma- or whitespace-separated list of codes, failing on the first unknown one.
    pub fn parse_list(list: &str) -> Result<Vec<Language>, UnknownLanguage> {
        list.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| UnknownLanguage(s.trim().to_string()))
    }
}

impl TryFrom<String> for Language {
    type Error = UnknownLanguage;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
