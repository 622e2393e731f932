//! postnav - blog navigation widgets for the web
//!
//! Client-side widgets for a Markdown-sourced static blog, running in the
//! browser via WebAssembly:
//! - Table of contents with scroll tracking, active-section highlighting,
//!   and reading progress
//! - Tag filtering over pre-rendered post listings
//! - Pagination windowing and share/copy-link actions
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { TocWidget } from 'postnav';
//! await init();
//! const toc = new TocWidget(document.getElementById('toc'), { maxLevel: 3 });
//! // later, when the page is torn down:
//! toc.unmount();
//! ```

// Headless core
pub mod error;
pub mod filter;
pub mod outline;
pub mod pagination;
pub mod share;
pub mod slug;
pub mod state;
pub mod tracker;
pub mod types;

// Browser layer
pub mod widget;

use wasm_bindgen::prelude::*;

// Re-export the widget structs
pub use widget::{FilterWidget, TocWidget};

pub use types::*;

/// Derive an anchor id from heading text, the same way the TOC scanner
/// does for headings without one.
#[must_use]
#[wasm_bindgen]
pub fn derive_heading_id(text: &str) -> String {
    slug::heading_id(text)
}

/// Build the pagination model for a listing page as a plain JS object:
/// `{currentPage, totalPages, pages, prev, next}` with `pages` mixing page
/// numbers and `"..."` gaps.
///
/// # Errors
/// Returns an error if the model cannot be serialized.
#[wasm_bindgen]
pub fn pagination_model(
    current_page: u32,
    total_pages: u32,
    base_url: &str,
) -> Result<JsValue, JsValue> {
    let model = pagination::Pagination::new(current_page, total_pages, base_url).model();
    serde_wasm_bindgen::to_value(&model)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Count posts per tag for a tag listing. Takes an array of post metadata
/// objects, returns `[{name, count}]` sorted by name.
///
/// # Errors
/// Returns an error if the posts array does not match the front-matter
/// schema.
#[wasm_bindgen]
pub fn tag_counts(posts: JsValue) -> Result<JsValue, JsValue> {
    let posts: Vec<types::PostMeta> = serde_wasm_bindgen::from_value(posts)
        .map_err(|e| JsValue::from_str(&format!("Invalid posts: {e}")))?;
    let counts = filter::TagFilter::from_posts(&posts).tag_counts();
    serde_wasm_bindgen::to_value(&counts)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Build a tweet-intent URL for an arbitrary page URL and title.
///
/// # Errors
/// Returns an error if the URL cannot be constructed.
#[wasm_bindgen]
pub fn tweet_share_url(page_url: &str, title: &str) -> Result<String, JsValue> {
    share::tweet_intent_url(page_url, title).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
