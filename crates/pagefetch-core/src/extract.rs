//! HTML text normalization and record composition.

use scraper::{Html, Node};
use thiserror::Error;

/// Appended when normalized text is cut at the cap.
pub const TRUNCATION_MARKER: &str = "...";

/// Default cap on normalized text, in characters.
pub const DEFAULT_CONTENT_CAP: usize = 3000;

/// Elements whose text is never visible page content.
const STRIPPED_ELEMENTS: &[&str] = &[
    "head", "script", "style", "noscript", "nav", "header", "footer", "iframe", "svg", "template",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("document is not valid UTF-8 (at byte {0})")]
    Encoding(usize),
}

/// Decode, strip non-content markup, collapse whitespace and cap the result
/// at `cap` characters (plus [`TRUNCATION_MARKER`] when cut).
pub fn normalize_document(body: &[u8], cap: usize) -> Result<String, ExtractError> {
    let html = std::str::from_utf8(body).map_err(|e| ExtractError::Encoding(e.valid_up_to()))?;
    let text = visible_text(html);
    Ok(truncate_chars(&collapse_whitespace(&text), cap))
}

/// Text of every text node not nested inside a stripped element.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<&str> = Vec::new();
    for node in document.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| STRIPPED_ELEMENTS.contains(&e.name()))
        });
        if !hidden {
            parts.push(text);
        }
    }
    parts.join(" ")
}

/// Collapse every whitespace run to one space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `cap` characters, appending the marker when anything was cut.
pub fn truncate_chars(text: &str, cap: usize) -> String {
    match text.char_indices().nth(cap) {
        None => text.to_string(),
        Some((byte_idx, _)) => format!("{}{}", text[..byte_idx].trim_end(), TRUNCATION_MARKER),
    }
}

/// Labeled record handed to downstream consumers.
pub fn compose_record(label: &str, id: &str, text: &str) -> String {
    format!("SOURCE: {}\nURL: {}\n\n{}", label, id, text)
}
