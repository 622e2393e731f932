//! Heading id derivation.
//!
//! Headings without an `id` attribute get one derived from their text so
//! anchor navigation and viewport observation can target them. The rules
//! mirror in-page anchors generated elsewhere in the site: lower-case, drop
//! everything that is not a word character, whitespace, or hyphen, then
//! collapse whitespace runs to single hyphens.

/// Derive an anchor id from heading text.
///
/// Empty text yields an empty string; callers treat that as a valid (if
/// unhelpful) id rather than an error. Distinct headings with identical
/// text produce identical ids — duplicates are not deduplicated.
pub fn heading_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_gap = false;

    for ch in text.to_lowercase().chars() {
        if ch.is_whitespace() {
            pending_gap = true;
            continue;
        }
        if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '-') {
            continue;
        }
        if pending_gap {
            id.push('-');
            pending_gap = false;
        }
        id.push(ch);
    }
    // A trailing whitespace run still collapses to a hyphen
    if pending_gap {
        id.push('-');
    }
    id
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
    fn test_basic_derivation() {
        assert_eq!(heading_id("Getting Started"), "getting-started");
        assert_eq!(heading_id("Section 2: Results!"), "section-2-results");
        assert_eq!(heading_id("FAQ"), "faq");
    }

    #[test]
    fn test_punctuation_stripped_before_collapse() {
        // The stripped "&" leaves two adjacent spaces, which still collapse
        // to a single hyphen.
        assert_eq!(heading_id("Tips & Tricks"), "tips-tricks");
        assert_eq!(heading_id("C++ (advanced)"), "c-advanced");
    }

    #[test]
    fn test_word_characters_survive() {
        assert_eq!(heading_id("snake_case names"), "snake_case-names");
        assert_eq!(heading_id("pre-rendered pages"), "pre-rendered-pages");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(heading_id(""), "");
        // Whitespace-only text collapses to a single hyphen, same as the
        // rendered site's anchors do.
        assert_eq!(heading_id("   "), "-");
    }

    #[test]
    fn test_idempotent() {
        for text in ["Intro", "Section 2: Results!", "  padded  ", "Ünïcode"] {
            let once = heading_id(text);
            assert_eq!(heading_id(&once), once, "re-deriving {text:?} changed");
        }
    }

    #[test]
    fn test_output_character_set() {
        for text in ["Hello, World!", "ÀÉÎ stripped", "tabs\tand\nnewlines", "123"] {
            let id = heading_id(text);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
                "unexpected character in {id:?}"
            );
        }
    }

    #[test]
    fn test_duplicate_texts_collide() {
        // Known limitation: identical texts yield identical ids.
        assert_eq!(heading_id("Summary"), heading_id("Summary"));
    }
}
