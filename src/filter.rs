//! Tag filtering for post listings.
//!
//! One active tag filters the full post list; the filtered index list is
//! memoized so repeated reads while the tag is unchanged do no work. The
//! DOM widget in `widget::filter` drives this against pre-rendered cards.

use crate::types::{PostMeta, TagCount};

/// The pseudo-tag that passes every post.
pub const ALL_TAG: &str = "all";

/// Whether a post with the given tags passes the active tag.
pub fn matches(tags: &[String], active_tag: &str) -> bool {
    active_tag == ALL_TAG || tags.iter().any(|tag| tag == active_tag)
}

/// Tag-based filter over an ordered post list.
#[derive(Debug, Clone)]
pub struct TagFilter {
    entries: Vec<Vec<String>>,
    active_tag: String,
    cached_tag: Option<String>,
    cached: Vec<usize>,
}

impl TagFilter {
    /// Build a filter over per-post tag lists, in listing order.
    pub fn new(entries: Vec<Vec<String>>) -> Self {
        Self {
            entries,
            active_tag: ALL_TAG.to_string(),
            cached_tag: None,
            cached: Vec::new(),
        }
    }

    /// Build a filter from post metadata.
    pub fn from_posts(posts: &[PostMeta]) -> Self {
        Self::new(posts.iter().map(|post| post.tags.clone()).collect())
    }

    pub fn active_tag(&self) -> &str {
        &self.active_tag
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Switch the active tag. Returns true when it changed (the memoized
    /// result stays valid otherwise).
    pub fn set_active_tag(&mut self, tag: &str) -> bool {
        if self.active_tag == tag {
            return false;
        }
        self.active_tag = tag.to_string();
        true
    }

    /// Indices of posts passing the active tag, in listing order.
    /// Recomputed only when the active tag changed since the last call.
    pub fn filtered(&mut self) -> &[usize] {
        if self.cached_tag.as_deref() != Some(self.active_tag.as_str()) {
            self.cached = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, tags)| matches(tags, &self.active_tag))
                .map(|(index, _)| index)
                .collect();
            self.cached_tag = Some(self.active_tag.clone());
        }
        &self.cached
    }

    /// All distinct tags with their post counts, sorted by name.
    pub fn tag_counts(&self) -> Vec<TagCount> {
        let mut counts: Vec<TagCount> = Vec::new();
        for tags in &self.entries {
            for tag in tags {
                match counts.iter_mut().find(|entry| &entry.name == tag) {
                    Some(entry) => entry.count += 1,
                    None => counts.push(TagCount {
                        name: tag.clone(),
                        count: 1,
                    }),
                }
            }
        }
        counts.sort_by(|a, b| a.name.cmp(&b.name));
        counts
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

    fn filter() -> TagFilter {
        TagFilter::new(vec![
            vec!["rust".to_string(), "web".to_string()],
            vec!["web".to_string()],
            vec!["life".to_string()],
            vec![],
        ])
    }

    #[test]
    fn test_all_tag_passes_everything() {
        let mut filter = filter();
        assert_eq!(filter.filtered(), [0, 1, 2, 3]);
    }

    #[test]
    fn test_specific_tag() {
        let mut filter = filter();
        filter.set_active_tag("web");
        assert_eq!(filtered_vec(&mut filter), [0, 1]);

        filter.set_active_tag("rust");
        assert_eq!(filtered_vec(&mut filter), [0]);
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let mut filter = filter();
        filter.set_active_tag("databases");
        assert!(filter.filtered().is_empty());
    }

    #[test]
    fn test_untagged_post_only_passes_all() {
        let mut filter = filter();
        filter.set_active_tag("life");
        assert_eq!(filtered_vec(&mut filter), [2]);
        filter.set_active_tag(ALL_TAG);
        assert!(filter.filtered().contains(&3));
    }

    #[test]
    fn test_set_active_tag_reports_change() {
        let mut filter = filter();
        assert!(!filter.set_active_tag(ALL_TAG));
        assert!(filter.set_active_tag("web"));
        assert!(!filter.set_active_tag("web"));
    }

    #[test]
    fn test_filtered_is_memoized_per_tag() {
        let mut filter = filter();
        filter.set_active_tag("web");
        let _ = filter.filtered();
        assert_eq!(filter.cached_tag.as_deref(), Some("web"));

        // Same tag again: the cache key is untouched and still valid.
        let _ = filter.filtered();
        assert_eq!(filter.cached_tag.as_deref(), Some("web"));

        filter.set_active_tag("rust");
        assert_eq!(
            filter.cached_tag.as_deref(),
            Some("web"),
            "cache only refreshes on read"
        );
        let _ = filter.filtered();
        assert_eq!(filter.cached_tag.as_deref(), Some("rust"));
    }

    #[test]
    fn test_tag_counts_sorted_by_name() {
        let filter = filter();
        let counts = filter.tag_counts();
        let summary: Vec<(&str, usize)> = counts
            .iter()
            .map(|entry| (entry.name.as_str(), entry.count))
            .collect();
        assert_eq!(summary, [("life", 1), ("rust", 1), ("web", 2)]);
    }

    fn filtered_vec(filter: &mut TagFilter) -> Vec<usize> {
        filter.filtered().to_vec()
    }
}
