//! Validation orchestrator.
//!
//! Parses one article, reads its meta-data, runs the rule battery against
//! the untouched tree, then sanitizes and serializes the body. The parsed
//! document lives only inside [`validate_article`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use dom_query::Document;

use crate::dom;
use crate::error::{Error, Result};
use crate::metadata;
use crate::report::{ArticleBody, ArticleReport, ArticleStats, IssueSummary};
use crate::sanitize;
use crate::validators::{self, ElementSnapshot};

/// Validate raw article HTML and return the full report.
///
/// # Errors
///
/// Returns [`Error::ParseError`] if the input yields no document tree, and
/// [`Error::ValidationInternal`] if a rule fails unexpectedly. No partial
/// report is produced in either case.
pub fn validate_article(raw_html: &str) -> Result<ArticleReport> {
    tracing::debug!(html_len = raw_html.len(), "validating article");

    let doc = dom::parse(raw_html);
    if !doc.select("html").exists() {
        return Err(Error::ParseError("input produced no document tree".to_string()));
    }

    let meta = metadata::extract_meta_info(&doc);
    let title = article_title(&doc);

    // Rules must see the tree before the sanitizer touches it
    let snapshot = ElementSnapshot::take(&doc);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| validators::run_rules(&doc, &snapshot)))
        .map_err(|payload| Error::ValidationInternal(panic_message(payload.as_ref())))?;

    tracing::debug!(
        images = outcome.image_count,
        links = outcome.link_count,
        product_links = outcome.product_links.len(),
        issues = outcome.issues.len(),
        "rules finished"
    );

    sanitize::sanitize(&doc);
    // Framesets parse without a <body>; their article body is empty
    let body = doc.select("body");
    let html = if body.exists() {
        dom::inner_html(&body).to_string()
    } else {
        String::new()
    };

    Ok(ArticleReport {
        meta,
        article: ArticleBody { title, html },
        stats: ArticleStats {
            image_count: outcome.image_count,
            link_count: outcome.link_count,
            product_link_count: outcome.product_links.len(),
        },
        issues: IssueSummary::from(outcome.issues),
    })
}

/// Text of the first `<h1>`, else of the first `<p>`, else empty.
#[must_use]
pub fn article_title(doc: &Document) -> String {
    let heading = dom::text_content(&doc.select("h1").first());
    if !heading.is_empty() {
        return heading.to_string();
    }
    dom::text_content(&doc.select("p").first()).to_string()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "rule panicked".to_string()
    }
}
