//! Edge case integration tests
//!
//! Tests for unusual inputs, boundary conditions, and error handling.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use drive_article_validator::validate_article;

#[test]
fn test_validate_fragment_without_html_scaffold() {
    let report = validate_article("<h2>Only a heading</h2>").expect("expected Ok(_)");

    assert_eq!(report.article.html, "<h2>Only a heading</h2>");
    assert_eq!(report.issues.total_count, 2);
}

#[test]
fn test_validate_malformed_html() {
    let html = "<p>Unclosed paragraph<div>Nested<p>Badly<img src=x></body>";

    // Should not panic; the lenient parser recovers a tree
    let report = validate_article(html).expect("expected Ok(_)");
    assert_eq!(report.stats.image_count, 1);
    assert_eq!(report.issues.total_count, report.issues.issues.len());
}

#[test]
fn test_validate_plain_text() {
    let report = validate_article("just some words, no markup").expect("expected Ok(_)");

    assert_eq!(report.article.title, "");
    assert_eq!(report.article.html, "just some words, no markup");
    assert_eq!(report.issues.total_count, 3);
}

#[test]
fn test_validate_deeply_nested_html() {
    let mut html = String::new();
    for _ in 0..200 {
        html.push_str("<div>");
    }
    html.push_str(r#"<h2>Deep</h2><img src="https://lh3.googleusercontent.com/x" alt="x">"#);
    for _ in 0..200 {
        html.push_str("</div>");
    }

    let report = validate_article(&html).expect("expected Ok(_)");
    assert_eq!(report.stats.image_count, 1);
    assert!(report
        .issues
        .issues
        .iter()
        .all(|i| i.message != "Article has no h2 tags"));
}

#[test]
fn test_validate_unicode_content() {
    let html = "<p>Meta Title: 東京のおすすめ 🍜</p><h1>Ramen in Tōkyō</h1><h2>Shōyu</h2>";
    let report = validate_article(html).expect("expected Ok(_)");

    assert_eq!(report.meta.title.as_deref(), Some("東京のおすすめ 🍜"));
    assert_eq!(report.article.title, "Ramen in Tōkyō");
}

#[test]
fn test_images_outside_paragraphs_are_counted() {
    let html = r#"<h2>S</h2><figure><img src="https://lh3.googleusercontent.com/1" alt="1"></figure><div><img src="https://lh3.googleusercontent.com/2" alt="2"></div><img src="https://lh3.googleusercontent.com/3" alt="3">"#;
    let report = validate_article(html).expect("expected Ok(_)");

    assert_eq!(report.stats.image_count, 3);
    assert_eq!(report.issues.total_count, 1);
    assert_eq!(report.issues.issues[0].message, "Article has no product links");
}

#[test]
fn test_anchor_without_href_counts_as_link_only() {
    let html = r#"<h2>S</h2><a name="top">anchor</a><a href="">empty</a>"#;
    let report = validate_article(html).expect("expected Ok(_)");

    assert_eq!(report.stats.link_count, 2);
    assert_eq!(report.stats.product_link_count, 0);
}

#[test]
fn test_large_image_count_reports_each_image() {
    let html: String = (0..12).map(|_| r#"<img src="http://example.com/a.png">"#).collect();
    let report = validate_article(&html).expect("expected Ok(_)");

    // 1 count issue + 12 * 2 attribute issues + product links + structure
    assert_eq!(report.issues.total_count, 27);
    assert_eq!(report.issues.issues[0].message, "Article has more than 10 images");
    assert_eq!(report.issues.issues[24].message, "Image 12 has no alt text");
}

#[test]
fn test_validate_frameset_without_body() {
    let html = r#"<html><head></head><frameset><frame src="a.html"></frameset></html>"#;
    let report = validate_article(html).expect("expected Ok(_)");

    assert_eq!(report.article.html, "");
    assert_eq!(report.article.title, "");
    assert_eq!(report.stats.image_count, 0);
    assert_eq!(report.issues.total_count, 3);
    let messages: Vec<&str> = report.issues.issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        [
            "Article has less than 3 images",
            "Article has no product links",
            "Article has no h2 tags",
        ]
    );
}
