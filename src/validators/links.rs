//! Product link rule.

use dom_query::Selection;

use crate::dom;
use crate::patterns::PRODUCT_LINK;
use crate::report::Issue;

/// Outcome of the product link check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductLinkCheck {
    /// Empty unless the article has no product link.
    pub issues: Vec<Issue>,

    /// Matching hrefs in document order, duplicates kept.
    pub product_links: Vec<String>,
}

/// Collect anchors whose href looks like a product page.
///
/// An article must link to at least one product; there is no upper bound.
#[must_use]
pub fn validate_product_links(links: &Selection) -> ProductLinkCheck {
    let product_links: Vec<String> = links
        .nodes()
        .iter()
        .map(|node| dom::attribute_or_empty(&Selection::from(*node), "href"))
        .filter(|href| PRODUCT_LINK.is_match(href))
        .collect();

    let mut issues = Vec::new();
    if product_links.is_empty() {
        issues.push(Issue::error("Article has no product links"));
    }

    ProductLinkCheck {
        issues,
        product_links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_product_links_single_issue() {
        let doc = dom::parse(
            r#"<a href="https://example.com/blog">blog</a><a>no href</a><a href="/about">about</a>"#,
        );
        let check = validate_product_links(&dom::find_by_tag(&doc, "a"));

        assert!(check.product_links.is_empty());
        assert_eq!(check.issues, vec![Issue::error("Article has no product links")]);
    }

    #[test]
    fn test_duplicates_are_counted() {
        let doc = dom::parse(
            r#"
            <a href="https://amazon.com/dp/1">one</a>
            <a href="https://amazon.com/dp/1">again</a>
            <a href="https://store.example.com/SHOP/bag">bag</a>
            <a href="https://example.com/news">news</a>
        "#,
        );
        let check = validate_product_links(&dom::find_by_tag(&doc, "a"));

        assert!(check.issues.is_empty());
        assert_eq!(
            check.product_links,
            vec![
                "https://amazon.com/dp/1",
                "https://amazon.com/dp/1",
                "https://store.example.com/SHOP/bag",
            ]
        );
    }

    #[test]
    fn test_no_anchors() {
        let doc = dom::parse("<p>plain</p>");
        let check = validate_product_links(&dom::find_by_tag(&doc, "a"));
        assert_eq!(check.issues.len(), 1);
        assert!(check.product_links.is_empty());
    }
}
