//! Meta-data extraction module.
//!
//! Articles drafted in Google Docs carry their SEO title and description as
//! ordinary paragraphs ("Meta Title: ...", "Meta Description: ...") because
//! the editor has no field for them. This module reads those paragraphs back
//! out of the exported document. It never mutates the tree; removing the
//! marker paragraphs is the sanitizer's job.

pub mod markers;

use dom_query::Document;

use crate::patterns::{META_DESCRIPTION_LABEL, META_TITLE_LABEL};
use crate::report::MetaInfo;

pub use markers::{marker_text, marker_value};

/// Extract the marker meta-data from a document.
///
/// Each field is `None` when no paragraph carries its label, or when the
/// paragraph has nothing after the colon.
#[must_use]
pub fn extract_meta_info(doc: &Document) -> MetaInfo {
    MetaInfo {
        title: marker_value(doc, META_TITLE_LABEL),
        description: marker_value(doc, META_DESCRIPTION_LABEL),
    }
}
