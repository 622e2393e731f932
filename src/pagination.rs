//! Pagination windowing for post listings.
//!
//! Pages are linked statically (`{base}/{page}`); this module only decides
//! which page links to show. Listings with up to seven pages show every
//! page; longer ones collapse the middle (or an edge) behind an ellipsis.

use serde::ser::Serializer;
use serde::Serialize;

/// Number of pages up to which no ellipsis is used.
const FULL_WINDOW_MAX: u32 = 7;

/// One slot in the pagination strip: a page link or a gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

// Serialized the way templates expect: a number, or the literal "..." .
impl Serialize for PageItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(page) => serializer.serialize_u32(*page),
            Self::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

/// Pagination state for one listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub base_url: String,
}

/// Serializable snapshot of the strip, handed to JS templates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationModel {
    pub current_page: u32,
    pub total_pages: u32,
    pub pages: Vec<PageItem>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

impl Pagination {
    pub fn new(current_page: u32, total_pages: u32, base_url: &str) -> Self {
        Self {
            current_page,
            total_pages,
            base_url: base_url.to_string(),
        }
    }

    /// The visible page slots.
    ///
    /// Seven or fewer pages: all of them. Otherwise the window keeps the
    /// first five (near the left edge), the last five (near the right
    /// edge), or the current page with one neighbor on each side, with
    /// ellipses bridging to the far endpoints.
    pub fn visible_pages(&self) -> Vec<PageItem> {
        let total = self.total_pages;
        let current = self.current_page;

        if total <= FULL_WINDOW_MAX {
            return (1..=total).map(PageItem::Page).collect();
        }

        if current <= 4 {
            let mut items: Vec<PageItem> = (1..=5).map(PageItem::Page).collect();
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
            return items;
        }

        if current >= total - 3 {
            let mut items = vec![PageItem::Page(1), PageItem::Ellipsis];
            items.extend((total - 4..=total).map(PageItem::Page));
            return items;
        }

        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(current - 1),
            PageItem::Page(current),
            PageItem::Page(current + 1),
            PageItem::Ellipsis,
            PageItem::Page(total),
        ]
    }

    pub fn page_href(&self, page: u32) -> String {
        format!("{}/{}", self.base_url, page)
    }

    /// Link to the previous page; `None` on the first page.
    pub fn prev_href(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.page_href(self.current_page - 1))
    }

    /// Link to the next page; `None` on the last page.
    pub fn next_href(&self) -> Option<String> {
        (self.current_page < self.total_pages).then(|| self.page_href(self.current_page + 1))
    }

    pub fn model(&self) -> PaginationModel {
        PaginationModel {
            current_page: self.current_page,
            total_pages: self.total_pages,
            pages: self.visible_pages(),
            prev: self.prev_href(),
            next: self.next_href(),
        }
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
    use test_case::test_case;

    fn pages(items: &[PageItem]) -> String {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(page) => page.to_string(),
                PageItem::Ellipsis => "...".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test_case(1, 1 => "1")]
    #[test_case(3, 7 => "1 2 3 4 5 6 7" ; "seven pages stay complete")]
    #[test_case(1, 12 => "1 2 3 4 5 ... 12" ; "left edge")]
    #[test_case(4, 12 => "1 2 3 4 5 ... 12" ; "still left edge at four")]
    #[test_case(5, 12 => "1 ... 4 5 6 ... 12" ; "middle")]
    #[test_case(8, 12 => "1 ... 7 8 9 ... 12" ; "deep middle")]
    #[test_case(9, 12 => "1 ... 8 9 10 11 12" ; "right edge at total minus three")]
    #[test_case(12, 12 => "1 ... 8 9 10 11 12" ; "last page")]
    fn test_visible_pages(current: u32, total: u32) -> String {
        pages(&Pagination::new(current, total, "/blog").visible_pages())
    }

    #[test]
    fn test_empty_listing_has_no_pages() {
        assert!(Pagination::new(1, 0, "/blog").visible_pages().is_empty());
    }

    #[test]
    fn test_prev_next_edges() {
        let first = Pagination::new(1, 5, "/blog");
        assert_eq!(first.prev_href(), None);
        assert_eq!(first.next_href(), Some("/blog/2".to_string()));

        let last = Pagination::new(5, 5, "/blog");
        assert_eq!(last.prev_href(), Some("/blog/4".to_string()));
        assert_eq!(last.next_href(), None);

        let middle = Pagination::new(3, 5, "/blog");
        assert_eq!(middle.prev_href(), Some("/blog/2".to_string()));
        assert_eq!(middle.next_href(), Some("/blog/4".to_string()));
    }

    #[test]
    fn test_model_serialization() {
        let model = Pagination::new(5, 12, "/blog").model();
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(
            json["pages"],
            serde_json::json!([1, "...", 4, 5, 6, "...", 12])
        );
        assert_eq!(json["prev"], "/blog/4");
        assert_eq!(json["next"], "/blog/6");
    }
}
