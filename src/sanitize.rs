//! HTML Sanitizer
//!
//! Turns a validated Drive export into publish-ready HTML. Must only run
//! after every validator has seen the document, since it deletes the marker
//! paragraphs and attributes the rules inspect.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::META_LABELS;

/// Clean the document in place.
///
/// Steps, in order:
/// 1. drop marker paragraphs ("Meta Title", "Meta Description")
/// 2. drop paragraphs with no text and no image
/// 3. drop every inline `style` attribute
///
/// Running it again on its own output changes nothing.
pub fn sanitize(doc: &Document) {
    let markers = remove_marker_paragraphs(doc);
    let empty = remove_empty_paragraphs(doc);
    strip_inline_styles(doc);

    tracing::debug!(markers, empty, "sanitized article HTML");
}

/// Remove every `<p>` whose text contains a meta-data label.
///
/// Returns the number of paragraphs removed.
pub fn remove_marker_paragraphs(doc: &Document) -> usize {
    let mut removed = 0;
    for label in META_LABELS {
        for paragraph in dom::find_by_text_containing(doc, "p", label) {
            dom::remove(&paragraph);
            removed += 1;
        }
    }
    removed
}

/// Remove every `<p>` that has only whitespace text and holds no `<img>`.
///
/// Returns the number of paragraphs removed.
pub fn remove_empty_paragraphs(doc: &Document) -> usize {
    // Process in reverse document order (children before parents)
    let paragraphs = dom::find_by_tag(doc, "p").nodes().to_vec();

    let mut removed = 0;
    for node in paragraphs.into_iter().rev() {
        let paragraph = Selection::from(node);
        if is_empty_paragraph(&paragraph) {
            dom::remove(&paragraph);
            removed += 1;
        }
    }
    removed
}

fn is_empty_paragraph(paragraph: &Selection) -> bool {
    dom::text_content(paragraph).trim().is_empty() && !dom::contains_tag(paragraph, "img")
}

/// Remove the `style` attribute from every element.
pub fn strip_inline_styles(doc: &Document) {
    dom::remove_attribute(&doc.select("[style]"), "style");
}
