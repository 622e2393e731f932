//! Share actions for the current page.
//!
//! Thin bindings over the pure link building in `crate::share`: open a
//! tweet intent for the current page, or copy its URL to the clipboard.
//! The clipboard promise is fire-and-forget.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Open a tweet-intent for the current page in a new tab.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn share_on_twitter() {
    let Some((href, title)) = current_page() else {
        return;
    };
    let Ok(intent) = crate::share::tweet_intent_url(&href, &title) else {
        return;
    };
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&intent, "_blank");
    }
}

/// Copy the current page URL to the clipboard.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn copy_page_link() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let clipboard = window.navigator().clipboard();
    let _ = clipboard.write_text(&href);
}

#[cfg(target_arch = "wasm32")]
fn current_page() -> Option<(String, String)> {
    let window = web_sys::window()?;
    let href = window.location().href().ok()?;
    let title = window.document()?.title();
    Some((href, title))
}
