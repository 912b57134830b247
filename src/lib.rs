//! # drive-article-validator
//!
//! Structural validation for articles drafted in Google Docs and exported
//! from Drive as HTML.
//!
//! The exported document is parsed once, checked against a fixed battery of
//! publishing rules, and then cleaned into HTML ready to paste into a CMS.
//!
//! ## Quick Start
//!
//! ```rust
//! use drive_article_validator::validate_article;
//!
//! let html = r#"<html><body>
//! <p>Meta Title: Spring picks</p>
//! <h1>Our favourite spring gear</h1>
//! <h2>Jackets</h2>
//! <p><a href="https://shop.example.com/jacket">Jacket</a></p>
//! </body></html>"#;
//!
//! let report = validate_article(html)?;
//! assert_eq!(report.meta.title.as_deref(), Some("Spring picks"));
//! assert_eq!(report.article.title, "Our favourite spring gear");
//! assert_eq!(report.stats.product_link_count, 1);
//! assert!(!report.article.html.contains("Meta Title"));
//! # Ok::<(), drive_article_validator::Error>(())
//! ```
//!
//! ## Rules
//!
//! - **Image count**: at least 3 and at most 10 images
//! - **Image attributes**: every image hosted on Google Drive and carrying alt text
//! - **Product links**: at least one link to a shop or product page
//! - **Structure**: at least one `<h2>`
//!
//! ## Cleanup
//!
//! After the rules run, "Meta Title"/"Meta Description" paragraphs, empty
//! paragraphs, and inline `style` attributes are removed from the body.

mod error;
mod patterns;
mod report;
mod validate;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Marker paragraph meta-data extraction.
pub mod metadata;

/// Structural validation rules.
pub mod validators;

/// Publish-ready HTML cleanup.
pub mod sanitize;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Service configuration.
pub mod config;

/// Article sources (Google Drive export).
pub mod source;

/// HTTP routes.
pub mod server;

// Public API - re-exports
pub use config::ServiceConfig;
pub use error::{Error, Result};
pub use report::{
    ArticleBody, ArticleReport, ArticleStats, Issue, IssueKind, IssueSummary, MetaInfo,
};
pub use source::{ArticleSource, DriveExportSource};
pub use validate::{article_title, validate_article};

/// Validates an article given as raw bytes, detecting its character encoding.
///
/// The encoding is taken from a byte-order mark or a `<meta>` charset
/// declaration, defaulting to UTF-8. Invalid byte sequences are replaced
/// with � rather than causing errors.
///
/// # Example
///
/// ```rust
/// use drive_article_validator::validate_article_bytes;
///
/// let html = b"<meta charset=\"windows-1252\"><h1>Caf\xE9 picks</h1>";
/// let report = validate_article_bytes(html)?;
/// assert_eq!(report.article.title, "Café picks");
/// # Ok::<(), drive_article_validator::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn validate_article_bytes(html: &[u8]) -> Result<ArticleReport> {
    let html_str = encoding::decode_html(html, None);
    validate_article(&html_str)
}
