//! Compiled regex patterns and fixed rule constants.
//!
//! All patterns are compiled once at first use using `LazyLock`.
//! Thresholds are deliberately constants, not options.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Meta-data markers
// =============================================================================

/// Label of the paragraph carrying the SEO title.
pub const META_TITLE_LABEL: &str = "Meta Title";

/// Label of the paragraph carrying the SEO description.
pub const META_DESCRIPTION_LABEL: &str = "Meta Description";

/// Every recognized marker label, in extraction order.
pub const META_LABELS: [&str; 2] = [META_TITLE_LABEL, META_DESCRIPTION_LABEL];

/// Value of a marker paragraph: everything after the first colon that is
/// followed by at least one character, up to the end of that line.
pub static META_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(.+)").expect("META_VALUE regex"));

// =============================================================================
// Image rules
// =============================================================================

/// Fewer images than this is an error.
pub const MIN_IMAGE_COUNT: usize = 3;

/// More images than this is an error.
pub const MAX_IMAGE_COUNT: usize = 10;

/// Substrings identifying images hosted on Google Drive.
pub const TRUSTED_IMAGE_HOSTS: [&str; 2] = ["googleusercontent.com", "drive.google.com"];

// =============================================================================
// Link rules
// =============================================================================

/// Matches hrefs that point at a product or shop page.
pub static PRODUCT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)shop|product|amazon|item|checkout").expect("PRODUCT_LINK regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_link_pattern_is_case_insensitive() {
        assert!(PRODUCT_LINK.is_match("https://www.AMAZON.com/dp/B000"));
        assert!(PRODUCT_LINK.is_match("/Checkout?cart=1"));
        assert!(PRODUCT_LINK.is_match("https://example.com/items/42"));
        assert!(!PRODUCT_LINK.is_match("https://example.com/blog/post"));
        assert!(!PRODUCT_LINK.is_match(""));
    }

    #[test]
    fn test_meta_value_takes_text_after_first_colon() {
        let caps = META_VALUE.captures("Meta Title: Hello: World");
        assert_eq!(caps.and_then(|c| c.get(1)).map(|m| m.as_str()), Some(" Hello: World"));
    }

    #[test]
    fn test_meta_value_needs_a_remainder() {
        assert!(META_VALUE.captures("Meta Title:").is_none());
        assert!(META_VALUE.captures("Meta Title without colon").is_none());
    }
}
