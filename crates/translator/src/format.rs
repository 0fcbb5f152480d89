//! Telegram HTML rendering of flow outcomes.
//!
//! User text and provider output always go through [`escape`]; only the fixed markup here is raw.

use language::{Language, UNKNOWN_EMOJI};
use teloxide::utils::html::{code_inline, escape};

use crate::service::{AutoTranslation, ConfigureError, ConfigureOutcome, SingleTranslation};

/// Telegram's per-message text limit.
pub const MESSAGE_LIMIT: usize = 4096;

pub const FAILURE_MESSAGE: &str = "❌ Translation failed. Please try again later.";

/// Cuts `text` to at most `max` chars at a char boundary, ending with `…` when anything was cut.
pub fn truncate_message(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}

/// Reply length as Telegram counts it (UTF-16 units), over-estimated by counting markup too.
fn reply_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Renders with a shrinking per-piece cap until the reply fits [`MESSAGE_LIMIT`]. The cap can go
/// down to zero, leaving only markup, so any number of sections ends up within the limit.
fn fit_to_limit(longest_piece: usize, render: impl Fn(usize) -> String) -> String {
    let mut cap = longest_piece;
    loop {
        let rendered = render(cap);
        if reply_len(&rendered) <= MESSAGE_LIMIT || cap == 0 {
            return rendered;
        }
        cap = cap * 3 / 4;
    }
}

fn piece(text: &str, cap: usize) -> String {
    escape(&truncate_message(text, cap))
}

pub fn format_single(single: &SingleTranslation) -> String {
    let source_emoji = single.source.map(Language::emoji).unwrap_or(UNKNOWN_EMOJI);
    let target = single.translation.language;
    let longest = single
        .original
        .chars()
        .count()
        .max(single.translation.text.chars().count());

    fit_to_limit(longest, |cap| {
        format!(
            "{} <b>Original text</b>:\n{}\n\n{} <b>Translation ({})</b>:\n{}",
            source_emoji,
            piece(&single.original, cap),
            target.emoji(),
            target.name(),
            piece(&single.translation.text, cap),
        )
    })
}

pub fn format_auto(auto: &AutoTranslation) -> String {
    let longest = auto
        .sections
        .iter()
        .map(|s| s.text.chars().count())
        .chain(std::iter::once(auto.original.chars().count()))
        .max()
        .unwrap_or(0);

    fit_to_limit(longest, |cap| {
        let mut out = format!(
            "{} <b>Original text</b> ({}):\n{}\n\n<b>Translations:</b>",
            auto.source.emoji(),
            auto.source.name(),
            piece(&auto.original, cap),
        );
        for section in &auto.sections {
            out.push_str(&format!(
                "\n\n{} <b>{}</b>:\n{}",
                section.language.emoji(),
                section.language.name(),
                piece(&section.text, cap),
            ));
        }
        out
    })
}

/// Every catalog language, in catalog order. `current` adds the chat's own targets, `defaults`
/// the targets used when it has none.
pub fn format_language_list(current: Option<&[Language]>, defaults: &[Language]) -> String {
    let mut out = String::from("🌍 <b>Supported languages:</b>\n");
    for lang in Language::ALL {
        out.push_str(&format!(
            "\n{} {} - {}",
            lang.emoji(),
            code_inline(lang.code()),
            lang.name()
        ));
    }

    let (label, targets) = match current {
        Some(targets) => ("This chat translates into", targets),
        None => ("Default targets", defaults),
    };
    out.push_str(&format!("\n\n<b>{}:</b> {}", label, name_list(targets)));
    out.push_str(&format!(
        "\n\nChange them with {}",
        code_inline("/setlang en ru es")
    ));

    truncate_message(&out, MESSAGE_LIMIT)
}

pub fn format_configured(outcome: &ConfigureOutcome) -> String {
    let mut out = String::from("✅ <b>Target languages set:</b>");
    for lang in &outcome.applied {
        out.push_str(&format!("\n{} {}", lang.emoji(), lang.name()));
    }
    if !outcome.rejected.is_empty() {
        out.push_str(&format!(
            "\n\n⚠️ Not supported: {}",
            rejected_list(&outcome.rejected)
        ));
    }
    out
}

pub fn format_configure_error(err: &ConfigureError) -> String {
    match err {
        ConfigureError::NoArguments => format!(
            "❌ Specify languages: {}\n\nSee {} for the list.",
            code_inline("/setlang en ru es"),
            code_inline("/lang")
        ),
        ConfigureError::NoValidLanguages { rejected } => format!(
            "❌ No supported languages given: {}\n\nSee {} for the list.",
            rejected_list(rejected),
            code_inline("/lang")
        ),
        ConfigureError::Store(_) => "❌ Could not save the settings. Please try again later.".to_string(),
    }
}

pub fn help_text() -> String {
    format!(
        "🤖 <b>Translator bot with language auto-detection</b>\n\n\
         Write a message in the chat and it will be translated into several languages.\n\n\
         <b>You can also:</b>\n\
         • {} - translate into one language\n\
         • {} - choose this chat's target languages\n\
         • {} - list supported languages\n\n\
         <b>Example:</b>\n\
         {} → translated into english",
        code_inline("text /code"),
        code_inline("/setlang en ru es"),
        code_inline("/lang"),
        code_inline("Привет всем /en"),
    )
}

/// Targets by emoji and name; codes appear only once, in the catalog listing above.
fn name_list(langs: &[Language]) -> String {
    langs
        .iter()
        .map(|l| format!("{} {}", l.emoji(), l.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn rejected_list(rejected: &[String]) -> String {
    rejected
        .iter()
        .map(|s| code_inline(s))
        .collect::<Vec<_>>()
        .join(", ")
}
