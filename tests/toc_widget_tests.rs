//! Table-of-contents widget tests
//!
//! Drives the headless widget through the same scan → observe → progress
//! path the browser build uses, with intersection batches synthesized
//! through the viewport band.

#![cfg(not(target_arch = "wasm32"))]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use postnav::outline::RawHeading;
use postnav::tracker::{IntersectionRecord, ViewportBand};
use postnav::types::TocConfig;
use postnav::TocWidget;

const VIEWPORT_HEIGHT: f64 = 800.0;

fn heading(level: u8, text: &str) -> RawHeading {
    RawHeading::new(level, None, text)
}

fn article_headings() -> Vec<RawHeading> {
    vec![
        heading(1, "Intro"),
        heading(2, "Background"),
        heading(3, "Methods"),
        heading(4, "Deep Detail"),
    ]
}

/// Synthesize one observer batch from heading positions in viewport
/// coordinates, using the real trigger band to decide intersection.
fn batch(positions: &[(&str, f64)]) -> Vec<IntersectionRecord> {
    let band = ViewportBand::default();
    positions
        .iter()
        .map(|(id, top)| IntersectionRecord::new(id, *top, band.contains(VIEWPORT_HEIGHT, *top)))
        .collect()
}

// =============================================================================
// SCAN / MOUNT
// =============================================================================

#[test]
fn test_mount_excludes_headings_beyond_max_level() {
    let widget = TocWidget::from_headings(&article_headings(), TocConfig::default());

    let texts: Vec<&str> = widget.items().iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, ["Intro", "Background", "Methods"]);

    let ids: Vec<&str> = widget.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["intro", "background", "methods"]);
}

#[test]
fn test_mount_with_no_headings() {
    let widget = TocWidget::from_headings(&[], TocConfig::default());
    assert!(widget.items().is_empty());
    assert_eq!(widget.progress(), 0);
    assert_eq!(widget.active_id(), "");
}

#[test]
fn test_mount_honors_max_level_override() {
    let config = TocConfig {
        max_level: 1,
        ..TocConfig::default()
    };
    let widget = TocWidget::from_headings(&article_headings(), config);
    assert_eq!(widget.items().len(), 1);
    assert_eq!(widget.items()[0].id, "intro");
}

// =============================================================================
// ACTIVE SECTION TRACKING
// =============================================================================

#[test]
fn test_heading_entering_band_becomes_active() {
    let mut widget = TocWidget::from_headings(&article_headings(), TocConfig::default());

    // 800px viewport: the band spans 160..=520.
    assert!(widget.record_intersections(&batch(&[("background", 300.0)])));
    assert_eq!(widget.active_id(), "background");
    assert_eq!(widget.progress(), 67);
}

#[test]
fn test_heading_leaving_band_keeps_previous_active() {
    let mut widget = TocWidget::from_headings(&article_headings(), TocConfig::default());
    widget.record_intersections(&batch(&[("intro", 200.0)]));

    // Intro scrolls out above the band, nothing new enters: the pointer
    // stays where it was.
    assert!(!widget.record_intersections(&batch(&[("intro", 40.0)])));
    assert_eq!(widget.active_id(), "intro");
}

#[test]
fn test_simultaneous_entries_activate_topmost() {
    // Deliberate redesign of the source's delivery-order tie-break: when
    // several headings intersect in one batch, the topmost wins no matter
    // the order they were delivered in.
    let mut widget = TocWidget::from_headings(&article_headings(), TocConfig::default());

    widget.record_intersections(&batch(&[("methods", 480.0), ("background", 200.0)]));
    assert_eq!(widget.active_id(), "background");

    let mut reordered = TocWidget::from_headings(&article_headings(), TocConfig::default());
    reordered.record_intersections(&batch(&[("background", 200.0), ("methods", 480.0)]));
    assert_eq!(reordered.active_id(), "background");
}

#[test]
fn test_observed_id_outside_outline_zeroes_progress() {
    // A deep heading with a pre-existing anchor is observed even though it
    // is not in the outline; activating it reads as 0% progress.
    let headings = vec![
        heading(2, "Background"),
        RawHeading::new(4, Some("appendix"), "Appendix"),
    ];
    let mut widget = TocWidget::from_headings(&headings, TocConfig::default());

    widget.record_intersections(&batch(&[("background", 200.0)]));
    assert_eq!(widget.progress(), 100);

    widget.record_intersections(&batch(&[("appendix", 300.0)]));
    assert_eq!(widget.active_id(), "appendix");
    assert_eq!(widget.progress(), 0);
}

#[test]
fn test_duplicate_heading_texts_share_one_anchor() {
    // Known limitation carried over from the source: duplicate texts derive
    // colliding ids, so activating the shared id always resolves to the
    // first occurrence.
    let headings = vec![
        heading(2, "Summary"),
        heading(2, "Details"),
        heading(2, "Summary"),
    ];
    let mut widget = TocWidget::from_headings(&headings, TocConfig::default());
    assert_eq!(widget.items()[0].id, widget.items()[2].id);

    widget.record_intersections(&batch(&[("summary", 200.0)]));
    assert_eq!(widget.progress(), 33, "resolves to the first occurrence");
}

// =============================================================================
// PROGRESS UNDER CONTINUOUS SCROLL
// =============================================================================

#[test]
fn test_progress_monotonic_during_downward_scroll() {
    let headings: Vec<RawHeading> = (1..=5)
        .map(|n| heading(2, &format!("Part {n}")))
        .collect();
    let mut widget = TocWidget::from_headings(&headings, TocConfig::default());

    // Headings sit every 600 document pixels; scroll the page down in
    // 50px steps and feed the widget what the observer would see.
    let document_tops: Vec<(String, f64)> = widget
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| (item.id.clone(), 200.0 + 600.0 * i as f64))
        .collect();

    let mut last_progress = 0;
    let mut scroll = 0.0;
    while scroll <= 3000.0 {
        let positions: Vec<(&str, f64)> = document_tops
            .iter()
            .map(|(id, top)| (id.as_str(), top - scroll))
            .collect();
        widget.record_intersections(&batch(&positions));

        let progress = widget.progress();
        assert!(
            progress >= last_progress,
            "progress regressed from {last_progress} to {progress} at scroll {scroll}"
        );
        last_progress = progress;
        scroll += 50.0;
    }
    assert_eq!(last_progress, 100);
}

// =============================================================================
// STICKY + TEARDOWN
// =============================================================================

#[test]
fn test_sticky_follows_nav_top() {
    let mut widget = TocWidget::from_headings(&article_headings(), TocConfig::default());
    assert!(!widget.sticky());

    assert!(widget.record_nav_top(12.0));
    assert!(widget.sticky());

    assert!(widget.record_nav_top(64.0));
    assert!(!widget.sticky());
}

#[test]
fn test_unmount_while_scrolling_stops_all_mutation() {
    let mut widget = TocWidget::from_headings(&article_headings(), TocConfig::default());
    widget.record_intersections(&batch(&[("intro", 200.0)]));
    widget.record_nav_top(10.0);
    assert!(widget.sticky());

    widget.unmount();

    // Synthetic events after teardown must be observable no-ops.
    assert!(!widget.record_nav_top(500.0));
    assert!(widget.sticky(), "sticky frozen at its pre-unmount value");
    assert!(!widget.record_intersections(&batch(&[("methods", 300.0)])));
    assert_eq!(widget.active_id(), "intro");
    assert!(!widget.toggle_collapsed());
}

#[test]
fn test_unmount_is_idempotent() {
    let mut widget = TocWidget::from_headings(&article_headings(), TocConfig::default());
    widget.unmount();
    widget.unmount();
    assert_eq!(widget.active_id(), "");
}

// =============================================================================
// COLLAPSE
// =============================================================================

#[test]
fn test_collapse_toggle_round_trip() {
    let mut widget = TocWidget::from_headings(&article_headings(), TocConfig::default());
    assert!(!widget.collapsed());
    assert!(widget.toggle_collapsed());
    assert!(widget.collapsed());
    assert!(!widget.toggle_collapsed());
    assert!(!widget.collapsed());
}
