//! Widget state for the table of contents.
//!
//! One [`TocState`] exists per mounted widget. The outline is written once
//! by the scan; after that, each field has exactly one writer — the
//! intersection callback sets `active_id`, the scroll callback sets
//! `sticky`, the collapse toggle flips `collapsed` — and the render layer
//! only reads. `detach()` closes every entry point so callbacks that fire
//! after teardown cannot mutate anything.

use crate::types::TocItem;

/// The widget counts as stuck once its top edge is within this many pixels
/// of the viewport top (or above it).
pub const STICKY_TOP_PX: f64 = 20.0;

/// Reactive state of one mounted TOC widget.
#[derive(Debug, Clone)]
pub struct TocState {
    items: Vec<TocItem>,
    active_id: String,
    collapsed: bool,
    sticky: bool,
    detached: bool,
}

impl TocState {
    /// Create state for a freshly scanned outline.
    pub fn new(items: Vec<TocItem>) -> Self {
        Self {
            items,
            active_id: String::new(),
            collapsed: false,
            sticky: false,
            detached: false,
        }
    }

    pub fn items(&self) -> &[TocItem] {
        &self.items
    }

    /// Id of the heading currently considered in view; empty until the
    /// first intersection batch arrives.
    pub fn active_id(&self) -> &str {
        &self.active_id
    }

    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn sticky(&self) -> bool {
        self.sticky
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Record the heading chosen from an intersection batch. Returns true
    /// when the active id actually changed.
    ///
    /// The id is taken as observed — it may name a heading that is not in
    /// the outline (a deep heading with a pre-existing anchor), in which
    /// case progress reads as 0.
    pub fn record_active(&mut self, id: &str) -> bool {
        if self.detached || self.active_id == id {
            return false;
        }
        self.active_id = id.to_string();
        true
    }

    /// Record the widget's current top offset relative to the viewport.
    /// Returns true when the sticky flag flipped.
    pub fn record_nav_top(&mut self, top: f64) -> bool {
        if self.detached {
            return false;
        }
        let sticky = top <= STICKY_TOP_PX;
        if sticky == self.sticky {
            return false;
        }
        self.sticky = sticky;
        true
    }

    /// Flip the collapsed flag. Returns the new value.
    pub fn toggle_collapsed(&mut self) -> bool {
        if !self.detached {
            self.collapsed = !self.collapsed;
        }
        self.collapsed
    }

    /// Close all entry points. Idempotent; called from widget teardown.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Zero-based position of the active heading within the outline.
    pub fn active_index(&self) -> Option<usize> {
        if self.active_id.is_empty() {
            return None;
        }
        self.items.iter().position(|item| item.id == self.active_id)
    }

    /// Reading progress as a whole percentage.
    ///
    /// `round(((index + 1) / total) * 100)`, where a missing active id
    /// contributes index -1 and therefore 0%. An empty outline also reads
    /// 0% — the render layer never shows the widget in that case, but the
    /// guard keeps the derivation total.
    pub fn progress_percent(&self) -> u32 {
        let total = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        if total == 0 {
            return 0;
        }
        let position = match self.active_index() {
            Some(index) => u32::try_from(index + 1).unwrap_or(u32::MAX),
            None => 0,
        };
        // Integer round-half-up of (position / total) * 100
        let percent = (u64::from(position) * 200 + u64::from(total)) / (u64::from(total) * 2);
        u32::try_from(percent).unwrap_or(100)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    fn items(ids: &[&str]) -> Vec<TocItem> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| TocItem {
                id: (*id).to_string(),
                text: format!("Heading {}", i + 1),
                level: 2,
            })
            .collect()
    }

    fn state(ids: &[&str]) -> TocState {
        TocState::new(items(ids))
    }

    #[test]
    fn test_initial_state() {
        let state = state(&["a", "b"]);
        assert_eq!(state.active_id(), "");
        assert!(!state.collapsed());
        assert!(!state.sticky());
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn test_progress_at_index_two_of_five() {
        let mut state = state(&["a", "b", "c", "d", "e"]);
        assert!(state.record_active("c"));
        assert_eq!(state.progress_percent(), 60);
    }

    #[test]
    fn test_progress_rounds_half_up() {
        let mut state = state(&["a", "b", "c"]);
        state.record_active("a");
        assert_eq!(state.progress_percent(), 33);
        state.record_active("b");
        assert_eq!(state.progress_percent(), 67);
        state.record_active("c");
        assert_eq!(state.progress_percent(), 100);
    }

    #[test]
    fn test_unknown_active_id_reads_zero() {
        let mut state = state(&["a", "b"]);
        assert!(state.record_active("not-in-outline"));
        assert_eq!(state.active_index(), None);
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn test_empty_outline_guard() {
        let state = TocState::new(Vec::new());
        assert_eq!(state.progress_percent(), 0);
    }

    #[test]
    fn test_progress_monotonic_while_advancing() {
        let mut state = state(&["a", "b", "c", "d", "e", "f", "g"]);
        let mut last = 0;
        for id in ["a", "b", "c", "d", "e", "f", "g"] {
            state.record_active(id);
            let progress = state.progress_percent();
            assert!(progress >= last, "progress regressed at {id}");
            last = progress;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_record_active_reports_change() {
        let mut state = state(&["a", "b"]);
        assert!(state.record_active("a"));
        assert!(!state.record_active("a"));
        assert!(state.record_active("b"));
    }

    #[test]
    fn test_sticky_threshold() {
        let mut state = state(&["a"]);
        assert!(state.record_nav_top(STICKY_TOP_PX));
        assert!(state.sticky());
        assert!(!state.record_nav_top(-40.0), "already stuck");
        assert!(state.record_nav_top(STICKY_TOP_PX + 1.0));
        assert!(!state.sticky());
    }

    #[test]
    fn test_toggle_collapsed() {
        let mut state = state(&["a"]);
        assert!(state.toggle_collapsed());
        assert!(!state.toggle_collapsed());
    }

    #[test]
    fn test_detach_closes_every_entry_point() {
        let mut state = state(&["a", "b"]);
        state.record_active("a");
        state.detach();

        assert!(!state.record_active("b"));
        assert!(!state.record_nav_top(0.0));
        assert!(!state.toggle_collapsed());
        assert_eq!(state.active_id(), "a");
        assert!(!state.sticky());
    }

    #[test]
    fn test_detach_is_idempotent() {
        let mut state = state(&["a"]);
        state.detach();
        state.detach();
        assert!(state.is_detached());
    }
}
