//! Image rules: how many images an article carries, and whether each one is
//! hosted on Drive and described by alt text.

use dom_query::Selection;

use crate::dom;
use crate::patterns::{MAX_IMAGE_COUNT, MIN_IMAGE_COUNT, TRUSTED_IMAGE_HOSTS};
use crate::report::Issue;

/// Check the number of `<img>` elements against the fixed bounds.
///
/// The lower and upper bound are checked independently.
#[must_use]
pub fn validate_image_count(images: &Selection) -> Vec<Issue> {
    let count = images.length();
    let mut issues = Vec::new();

    if count < MIN_IMAGE_COUNT {
        issues.push(Issue::error(format!(
            "Article has less than {MIN_IMAGE_COUNT} images"
        )));
    }
    if count > MAX_IMAGE_COUNT {
        issues.push(Issue::error(format!(
            "Article has more than {MAX_IMAGE_COUNT} images"
        )));
    }

    issues
}

/// Check the `src` and `alt` of every image.
///
/// Images are numbered from 1 in document order. Each image can contribute
/// a hosting issue followed by an alt-text issue.
#[must_use]
pub fn validate_image_attributes(images: &Selection) -> Vec<Issue> {
    let mut issues = Vec::new();

    for (index, node) in images.nodes().iter().enumerate() {
        let image = Selection::from(*node);
        let number = index + 1;

        let src = dom::attribute_or_empty(&image, "src");
        if !is_trusted_source(&src) {
            issues.push(Issue::error(format!(
                "Image {number} is not from Google Drive"
            )));
        }

        let has_alt = dom::get_attribute(&image, "alt").is_some_and(|alt| !alt.trim().is_empty());
        if !has_alt {
            issues.push(Issue::error(format!("Image {number} has no alt text")));
        }
    }

    issues
}

/// Whether an image source points at Drive-hosted content.
#[must_use]
pub fn is_trusted_source(src: &str) -> bool {
    TRUSTED_IMAGE_HOSTS.iter().any(|host| src.contains(host))
}
