//! Listing widget tests
//!
//! Covers the tag filter driven the way the browser widget drives it, the
//! pagination strip, and the share link building — the pieces a listing
//! page composes together.

#![cfg(not(target_arch = "wasm32"))]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use postnav::filter::{TagFilter, ALL_TAG};
use postnav::pagination::{PageItem, Pagination};
use postnav::share;
use postnav::types::PostMeta;
use postnav::FilterWidget;

fn listing() -> FilterWidget {
    FilterWidget::from_entries(vec![
        vec!["rust".to_string(), "wasm".to_string()],
        vec!["rust".to_string()],
        vec!["life".to_string()],
        vec![],
    ])
}

// =============================================================================
// TAG FILTER
// =============================================================================

#[test]
fn test_filter_defaults_to_all_posts() {
    let mut widget = listing();
    assert_eq!(widget.active_tag(), ALL_TAG);
    assert_eq!(widget.visible_indices(), [0, 1, 2, 3]);
}

#[test]
fn test_filter_narrows_and_restores() {
    let mut widget = listing();

    widget.set_active_tag("rust");
    assert_eq!(widget.visible_indices(), [0, 1]);

    widget.set_active_tag("wasm");
    assert_eq!(widget.visible_indices(), [0]);

    widget.set_active_tag(ALL_TAG);
    assert_eq!(widget.visible_indices(), [0, 1, 2, 3]);
}

#[test]
fn test_filter_empty_result_shows_nothing() {
    let mut widget = listing();
    widget.set_active_tag("databases");
    assert!(widget.visible_indices().is_empty());
}

#[test]
fn test_filter_reports_tag_changes_only() {
    let mut widget = listing();
    assert!(!widget.set_active_tag(ALL_TAG));
    assert!(widget.set_active_tag("rust"));
    assert!(!widget.set_active_tag("rust"));
}

#[test]
fn test_tag_counts_from_front_matter() {
    let posts: Vec<PostMeta> = serde_json::from_str(
        r#"[
            {"title": "A", "description": "", "publishedDate": "2025-01-10", "tags": ["rust", "wasm"]},
            {"title": "B", "description": "", "publishedDate": "2025-02-01", "tags": ["rust"]},
            {"title": "C", "description": "", "publishedDate": "2025-03-05"}
        ]"#,
    )
    .unwrap();

    let counts = TagFilter::from_posts(&posts).tag_counts();
    let summary: Vec<(&str, usize)> = counts
        .iter()
        .map(|entry| (entry.name.as_str(), entry.count))
        .collect();
    assert_eq!(summary, [("rust", 2), ("wasm", 1)]);
}

// =============================================================================
// PAGINATION
// =============================================================================

#[test]
fn test_pagination_strip_composes_with_hrefs() {
    let pagination = Pagination::new(6, 20, "/blog/page");
    let model = pagination.model();

    assert_eq!(
        model.pages,
        [
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Page(7),
            PageItem::Ellipsis,
            PageItem::Page(20),
        ]
    );
    assert_eq!(model.prev.as_deref(), Some("/blog/page/5"));
    assert_eq!(model.next.as_deref(), Some("/blog/page/7"));
}

#[test]
fn test_pagination_single_page_has_no_navigation() {
    let model = Pagination::new(1, 1, "/blog").model();
    assert_eq!(model.pages, [PageItem::Page(1)]);
    assert_eq!(model.prev, None);
    assert_eq!(model.next, None);
}

// =============================================================================
// SHARE LINKS
// =============================================================================

#[test]
fn test_share_link_for_a_post_page() {
    let url = share::tweet_intent_url(
        "https://example.com/blog/shipping-a-static-blog",
        "Shipping a static blog",
    )
    .unwrap();
    assert!(url.starts_with("https://twitter.com/intent/tweet?"));
    assert!(url.contains("url=https%3A%2F%2Fexample.com%2Fblog%2Fshipping-a-static-blog"));
    assert!(url.contains("text=Shipping+a+static+blog"));
}
