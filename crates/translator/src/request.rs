//! Parsing of inbound text into a translation request.

use language::Language;

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// `<content> /<code>` with a catalog code.
    Single { content: String, target: Language },
    /// Translate the whole text into the chat's target languages.
    Auto { text: String },
}

/// Splits `text` on `" /"`; exactly two parts with non-empty content and a catalog code make a
/// single-target request. Everything else, including `"see a /b"` with an unknown code, is `Auto`.
pub fn parse_request(text: &str) -> Request {
    let text = text.trim();
    let parts: Vec<&str> = text.split(" /").collect();
    if let [content, code] = parts.as_slice() {
        let content = content.trim();
        let code = code.trim().to_lowercase();
        if !content.is_empty() {
            if let Some(target) = Language::from_code(&code) {
                return Request::Single {
                    content: content.to_string(),
                    target,
                };
            }
        }
    }
    Request::Auto {
        text: text.to_string(),
    }
}
