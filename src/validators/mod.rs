//! Structural validation rules.
//!
//! Each rule is a pure function over the parsed document (or over an element
//! snapshot taken from it) and returns the issues it found. Rules never
//! mutate the tree.

pub mod images;
pub mod links;
pub mod structure;

use dom_query::{Document, Selection};

use crate::dom;
use crate::report::Issue;

pub use images::{is_trusted_source, validate_image_attributes, validate_image_count};
pub use links::{validate_product_links, ProductLinkCheck};
pub use structure::validate_structure;

/// Elements several rules look at, selected once before any rule runs.
pub struct ElementSnapshot<'a> {
    pub images: Selection<'a>,
    pub links: Selection<'a>,
}

impl<'a> ElementSnapshot<'a> {
    /// Select every `<img>` and `<a>` in the document.
    #[must_use]
    pub fn take(doc: &'a Document) -> Self {
        Self {
            images: dom::find_by_tag(doc, "img"),
            links: dom::find_by_tag(doc, "a"),
        }
    }
}

/// Combined result of the rule battery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Issues in rule order: count, attributes, product links, structure.
    pub issues: Vec<Issue>,

    /// `<img>` elements before cleanup.
    pub image_count: usize,

    /// `<a>` elements before cleanup, with or without href.
    pub link_count: usize,

    /// Product hrefs in document order.
    pub product_links: Vec<String>,
}

/// Run all rules in their fixed order and concatenate their issues.
#[must_use]
pub fn run_rules(doc: &Document, snapshot: &ElementSnapshot<'_>) -> RuleOutcome {
    let mut issues = validate_image_count(&snapshot.images);
    issues.extend(validate_image_attributes(&snapshot.images));

    let ProductLinkCheck {
        issues: link_issues,
        product_links,
    } = validate_product_links(&snapshot.links);
    issues.extend(link_issues);

    issues.extend(validate_structure(doc));

    RuleOutcome {
        issues,
        image_count: snapshot.images.length(),
        link_count: snapshot.links.length(),
        product_links,
    }
}
