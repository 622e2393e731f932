//! Post metadata as produced by the content pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Front-matter of one blog post, as validated by the content pipeline.
///
/// The widgets only read from this — loading and validation happen at build
/// time, outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub published_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub draft: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PostImage>,
}

/// Cover image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostImage {
    pub src: String,
    pub alt: String,
}

/// A tag with the number of posts carrying it, for tag listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
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

    #[test]
    fn test_post_meta_from_front_matter_json() {
        let json = r#"{
            "title": "Shipping a static blog",
            "description": "Notes from the rebuild",
            "publishedDate": "2025-11-03",
            "tags": ["rust", "web"],
            "featured": true
        }"#;
        let post: PostMeta = serde_json::from_str(json).unwrap();

        assert_eq!(post.title, "Shipping a static blog");
        assert_eq!(
            post.published_date,
            NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
        );
        assert_eq!(post.tags, ["rust", "web"]);
        assert!(post.featured);
        assert!(!post.draft);
        assert!(post.updated_date.is_none());
        assert!(post.image.is_none());
    }
}
