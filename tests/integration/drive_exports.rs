//! Integration tests against realistic Google Docs HTML exports
//!
//! Exports carry a `<style>` block, class-heavy spans, inline sizing on
//! every image, and empty paragraphs wherever the author pressed enter twice.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use drive_article_validator::{dom, validate_article, validate_article_bytes};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_ready_export_passes_every_rule() {
    let html = fixture("drive_export_ready.html");

    match validate_article(&html) {
        Ok(report) => {
            assert!(
                report.is_clean(),
                "Ready article should have no issues: {:?}",
                report.issues.issues
            );
            assert_eq!(report.issues.total_count, 0);

            assert_eq!(
                report.meta.title.as_deref(),
                Some("The Best Rain Jackets of 2026")
            );
            assert_eq!(
                report.meta.description.as_deref(),
                Some("We tested twelve shells in real storms so you don\u{2019}t have to.")
            );
            assert_eq!(report.article.title, "The Best Rain Jackets of 2026");

            assert_eq!(report.stats.image_count, 3);
            assert_eq!(report.stats.link_count, 4);
            assert_eq!(report.stats.product_link_count, 3);
        }
        Err(err) => panic!("Validation failed: {err:?}"),
    }
}

#[test]
fn test_ready_export_is_cleaned_for_publishing() {
    let html = fixture("drive_export_ready.html");
    let report = validate_article(&html).expect("expected Ok(_)");
    let cleaned = &report.article.html;

    assert!(!cleaned.contains("Meta Title"), "Marker paragraphs should be removed");
    assert!(!cleaned.contains("Meta Description"), "Marker paragraphs should be removed");
    assert!(!cleaned.contains("style="), "Inline styles should be removed");
    assert!(!cleaned.contains("<style"), "Head styles are not part of the body");

    // Classes, ids and links survive
    assert!(cleaned.contains(r#"id="h.overall""#));
    assert!(cleaned.contains(r#"href="https://www.amazon.com/dp/B0EXAMPLE1""#));

    let doc = dom::parse(cleaned);
    assert_eq!(doc.select("img").length(), 3, "Image paragraphs must survive");
    assert_eq!(doc.select("p").length(), 8, "Empty paragraphs should be removed");
    assert_eq!(doc.select("h2").length(), 3);
}

#[test]
fn test_draft_export_lists_every_problem() {
    let html = fixture("drive_export_draft.html");
    let report = validate_article(&html).expect("expected Ok(_)");

    let messages: Vec<&str> = report.issues.issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Article has less than 3 images",
            "Image 1 is not from Google Drive",
            "Image 1 has no alt text",
            "Article has no product links",
            "Article has no h2 tags",
        ]
    );

    // The title marker has nothing after its colon
    assert!(report.meta.title.is_none());
    assert!(report.meta.description.is_none());
    // No <h1>: the first paragraph is the marker itself
    assert_eq!(report.article.title, "Meta Title:");

    assert_eq!(report.stats.image_count, 1);
    assert_eq!(report.stats.link_count, 1);
    assert_eq!(report.stats.product_link_count, 0);
}

#[test]
fn test_draft_export_cleanup() {
    let html = fixture("drive_export_draft.html");
    let report = validate_article(&html).expect("expected Ok(_)");

    let doc = dom::parse(&report.article.html);
    assert_eq!(doc.select("p").length(), 4);
    assert!(doc.select("p img").exists());
    assert!(report.article.html.starts_with(r#"<p class="c2"><span class="c0">Draft: notes"#));
}

#[test]
fn test_byte_and_string_entry_points_agree() {
    let html = fixture("drive_export_ready.html");

    let from_str = validate_article(&html).expect("expected Ok(_)");
    let from_bytes = validate_article_bytes(html.as_bytes()).expect("expected Ok(_)");

    assert_eq!(from_str, from_bytes);
}
