//! DOM Operations Adapter
//!
//! Thin query/mutation layer over the `dom_query` crate. `dom_query` keeps
//! every node of a parsed document in one arena addressed by node ids, so a
//! `Selection` is just a list of indices into that arena and stays valid for
//! the document's lifetime.
//!
//! The validators and the sanitizer only ever need a handful of operations:
//! find elements by tag, find elements by contained text, read text and
//! attributes, drop attributes, and detach elements.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

// === Parsing ===

/// Parse an HTML string into a document.
///
/// html5ever is lenient: any input, including the empty string, produces a
/// tree with an `<html>`, `<head>` and `<body>` scaffold.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// All elements with the given tag name, in document order.
#[inline]
#[must_use]
pub fn find_by_tag<'a>(doc: &'a Document, tag: &str) -> Selection<'a> {
    doc.select(tag)
}

/// Elements with the given tag whose text content contains `needle`.
///
/// Matching is case-sensitive substring containment, the same rule as the
/// jQuery-style `:contains()` pseudo-class.
#[must_use]
pub fn find_by_text_containing<'a>(
    doc: &'a Document,
    tag: &str,
    needle: &str,
) -> Vec<Selection<'a>> {
    doc.select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .filter(|sel| sel.text().contains(needle))
        .collect()
}

/// Whether `sel` has at least one descendant with the given tag.
#[inline]
#[must_use]
pub fn contains_tag(sel: &Selection, tag: &str) -> bool {
    sel.select(tag).exists()
}

// === Text Content ===

/// Get all text content of the selection and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content.
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

/// Get tag name (lowercase) of the first node in the selection.
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Attributes ===

/// Get an attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, or the empty string when it is absent.
#[inline]
#[must_use]
pub fn attribute_or_empty(sel: &Selection, name: &str) -> String {
    get_attribute(sel, name).unwrap_or_default()
}

/// Remove an attribute from every node in the selection.
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

// === Tree Manipulation ===

/// Detach the selected elements (and their subtrees) from the document.
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}
