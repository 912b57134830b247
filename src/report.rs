//! Report types for validation output.
//!
//! This module defines the structured output of a validation run: the
//! marker meta-data, the cleaned article, the issue list, and element
//! statistics. Everything serializes to camelCase JSON.

use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
///
/// Every rule currently reports errors; the enum leaves room for softer
/// findings without changing the wire shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueKind {
    /// A rule the article must satisfy before publishing.
    Error,
}

/// A single finding produced by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    /// Creates an error-level issue.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: IssueKind::Error,
            message: message.into(),
        }
    }
}

/// SEO meta-data taken from the "Meta Title" / "Meta Description" paragraphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaInfo {
    /// Value of the "Meta Title" paragraph, if present and non-empty.
    pub title: Option<String>,

    /// Value of the "Meta Description" paragraph, if present and non-empty.
    pub description: Option<String>,
}

/// The article body after cleanup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleBody {
    /// First `<h1>` text, falling back to the first `<p>` text.
    pub title: String,

    /// Inner HTML of the cleaned `<body>`, empty when there is none.
    pub html: String,
}

/// Issues found in the article, in validator execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueSummary {
    /// Always equal to `issues.len()`.
    pub total_count: usize,
    pub issues: Vec<Issue>,
}

impl From<Vec<Issue>> for IssueSummary {
    fn from(issues: Vec<Issue>) -> Self {
        Self {
            total_count: issues.len(),
            issues,
        }
    }
}

/// Element counts taken before cleanup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStats {
    /// Number of `<img>` elements.
    pub image_count: usize,

    /// Number of `<a>` elements.
    pub link_count: usize,

    /// Number of anchors whose href looks like a product link (duplicates count).
    pub product_link_count: usize,
}

/// Complete result of validating one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleReport {
    pub meta: MetaInfo,
    pub article: ArticleBody,
    pub issues: IssueSummary,
    pub stats: ArticleStats,
}

impl ArticleReport {
    /// Whether the article passed every rule.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.total_count == 0
    }
}
