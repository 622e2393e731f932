//! Heading outline scanning.
//!
//! The scanner runs exactly once per widget mount: it walks the rendered
//! document's headings in order, keeps those at or above the configured
//! depth, and derives ids for headings that lack one. The DOM walk itself
//! lives in `widget::scan`; this module is the headless core so the scan
//! rules can be tested without a browser.

use crate::slug;
use crate::types::TocItem;

/// A heading as read from the rendered document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeading {
    /// Numeric level, 1 (most significant) through 6.
    pub level: u8,
    /// The `id` attribute if the source document already carries one.
    pub id: Option<String>,
    /// Rendered text content, verbatim.
    pub text: String,
}

impl RawHeading {
    pub fn new(level: u8, id: Option<&str>, text: &str) -> Self {
        Self {
            level,
            id: id.map(str::to_string),
            text: text.to_string(),
        }
    }
}

/// An id the scanner derived for a heading that had none.
///
/// `index` points into the raw heading list so the DOM layer can write the
/// id back onto the live element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAssignment {
    pub index: usize,
    pub id: String,
}

/// Result of a scan: the ordered outline plus the ids to write back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub items: Vec<TocItem>,
    pub assignments: Vec<IdAssignment>,
}

/// Scan raw headings into an outline.
///
/// Every heading with `level <= max_level` becomes a [`TocItem`], in input
/// order. Qualifying headings without an id get one derived from their text
/// (possibly empty, possibly colliding with another derived id — both are
/// accepted as-is). Headings beyond `max_level` are excluded from the
/// outline and never receive a derived id.
pub fn scan(headings: &[RawHeading], max_level: u8) -> Outline {
    let mut outline = Outline::default();

    for (index, heading) in headings.iter().enumerate() {
        if heading.level > max_level {
            continue;
        }
        let id = match &heading.id {
            Some(id) => id.clone(),
            None => {
                let derived = slug::heading_id(&heading.text);
                outline.assignments.push(IdAssignment {
                    index,
                    id: derived.clone(),
                });
                derived
            }
        };
        outline.items.push(TocItem {
            id,
            text: heading.text.clone(),
            level: heading.level,
        });
    }

    outline
}

/// Left indentation in pixels for a heading level.
///
/// Level 1 sits flush; each deeper level indents by one 16px step, capped
/// by the level range itself (level 6 → 80px).
pub fn indent_px(level: u8) -> u32 {
    u32::from(level.saturating_sub(1)) * 16
}

/// Flat ordinal label for an item ("1.", "2.", ...), ignoring nesting.
pub fn ordinal_label(index: usize) -> String {
    format!("{}.", index + 1)
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

    fn heading(level: u8, text: &str) -> RawHeading {
        RawHeading::new(level, None, text)
    }

    #[test]
    fn test_scan_respects_max_level() {
        let headings = [
            heading(1, "Intro"),
            heading(2, "Background"),
            heading(3, "Methods"),
            heading(4, "Deep Detail"),
        ];
        let outline = scan(&headings, 3);

        let texts: Vec<&str> = outline.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["Intro", "Background", "Methods"]);
    }

    #[test]
    fn test_scan_preserves_document_order() {
        // Levels out of hierarchical order still come out in document order.
        let headings = [heading(3, "First"), heading(1, "Second"), heading(2, "Third")];
        let outline = scan(&headings, 6);

        let texts: Vec<&str> = outline.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, ["First", "Second", "Third"]);
        assert_eq!(outline.items[0].level, 3);
    }

    #[test]
    fn test_existing_ids_kept_verbatim() {
        let headings = [RawHeading::new(2, Some("custom-anchor"), "Background")];
        let outline = scan(&headings, 3);

        assert_eq!(outline.items[0].id, "custom-anchor");
        assert!(outline.assignments.is_empty());
    }

    #[test]
    fn test_assignments_point_at_source_headings() {
        let headings = [
            RawHeading::new(1, Some("intro"), "Intro"),
            heading(4, "Skipped"),
            heading(2, "Background"),
        ];
        let outline = scan(&headings, 3);

        assert_eq!(
            outline.assignments,
            vec![IdAssignment {
                index: 2,
                id: "background".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_text_gets_empty_id() {
        let outline = scan(&[heading(2, "")], 3);
        assert_eq!(outline.items[0].id, "");
        assert_eq!(outline.assignments[0].id, "");
    }

    #[test]
    fn test_duplicate_texts_keep_colliding_ids() {
        // Duplicate derived ids are a known limitation, preserved on purpose.
        let outline = scan(&[heading(2, "Summary"), heading(2, "Summary")], 3);
        assert_eq!(outline.items[0].id, outline.items[1].id);
        assert_eq!(outline.items.len(), 2);
    }

    #[test]
    fn test_indent_mapping() {
        assert_eq!(indent_px(1), 0);
        assert_eq!(indent_px(2), 16);
        assert_eq!(indent_px(6), 80);
        assert_eq!(indent_px(0), 0);
    }

    #[test]
    fn test_ordinal_is_flat() {
        assert_eq!(ordinal_label(0), "1.");
        assert_eq!(ordinal_label(4), "5.");
    }
}
