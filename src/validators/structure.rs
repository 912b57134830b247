//! Heading structure rule.

use dom_query::Document;

use crate::dom;
use crate::report::Issue;

/// An article needs at least one `<h2>` section heading.
#[must_use]
pub fn validate_structure(doc: &Document) -> Vec<Issue> {
    if dom::find_by_tag(doc, "h2").is_empty() {
        vec![Issue::error("Article has no h2 tags")]
    } else {
        Vec::new()
    }
}
