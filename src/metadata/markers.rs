//! Marker paragraph lookup.
//!
//! A marker paragraph is any `<p>` whose text contains the label. When
//! several paragraphs match, their text is joined in document order before
//! the value is split out, so only the first colon of the combined text
//! matters.

use dom_query::Document;

use crate::dom;
use crate::patterns::META_VALUE;

/// Combined text of every `<p>` containing `label`, or `None` if none does.
#[must_use]
pub fn marker_text(doc: &Document, label: &str) -> Option<String> {
    let paragraphs = dom::find_by_text_containing(doc, "p", label);
    if paragraphs.is_empty() {
        return None;
    }

    let text: String = paragraphs
        .iter()
        .map(|p| dom::text_content(p).to_string())
        .collect();

    (!text.is_empty()).then_some(text)
}

/// Trimmed value after the first colon of the marker text.
///
/// Returns `None` when the label is absent, when there is no colon followed
/// by content, or when that content is only whitespace.
#[must_use]
pub fn marker_value(doc: &Document, label: &str) -> Option<String> {
    let text = marker_text(doc, label)?;
    let value = META_VALUE.captures(&text)?.get(1)?.as_str().trim();

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
