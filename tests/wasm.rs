//! Browser smoke tests
//!
//! Run with: wasm-pack test --headless --chrome
//!
//! Native `cargo test` compiles this file to nothing; the DOM-dependent
//! paths only exist on wasm32.

#![cfg(target_arch = "wasm32")]
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use postnav::TocWidget;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_article(markup: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    body.set_inner_html(&format!("{markup}<div id=\"toc-host\"></div>"));
    document
        .get_element_by_id("toc-host")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_mount_scans_and_assigns_ids() {
    let host = mount_article(
        "<h1>Intro</h1><h2>Section 2: Results!</h2><h4>Deep Detail</h4>",
    );
    let mut widget = TocWidget::new(host, JsValue::UNDEFINED).unwrap();

    assert_eq!(widget.item_count(), 2);
    assert_eq!(widget.active_id(), "");

    // The scan wrote the derived id back onto the live heading.
    let document = web_sys::window().unwrap().document().unwrap();
    assert!(document.get_element_by_id("section-2-results").is_some());
    assert!(document.get_element_by_id("intro").is_some());

    widget.unmount();
}

#[wasm_bindgen_test]
fn test_empty_page_renders_nothing() {
    let host = mount_article("<p>No headings here.</p>");
    let widget = TocWidget::new(host.clone(), JsValue::UNDEFINED).unwrap();

    assert_eq!(widget.item_count(), 0);
    assert_eq!(host.inner_html(), "");
}

#[wasm_bindgen_test]
fn test_unmount_clears_the_container() {
    let host = mount_article("<h2>Only Section</h2>");
    let mut widget = TocWidget::new(host.clone(), JsValue::UNDEFINED).unwrap();
    assert!(host.inner_html().contains("toc-nav"));

    widget.unmount();
    assert_eq!(host.inner_html(), "");
}
