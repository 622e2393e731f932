//! Scroll handling for `TocWidget`.
//!
//! The window scroll listener recomputes the widget's top offset on every
//! event (unthrottled) and flips the sticky state once it crosses the
//! threshold. Click-to-scroll positions the target heading just below the
//! viewport top.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{ScrollBehavior, ScrollToOptions};

#[cfg(target_arch = "wasm32")]
use super::WidgetShared;
#[cfg(target_arch = "wasm32")]
use crate::error::PostnavError;

/// Gap kept between the viewport top and a heading scrolled into view.
#[cfg(target_arch = "wasm32")]
const SCROLL_OFFSET_PX: f64 = 20.0;

/// Register the window scroll listener. The returned closure must stay
/// alive for as long as the listener is registered; teardown removes the
/// listener and drops it.
#[cfg(target_arch = "wasm32")]
pub(crate) fn attach(
    state: &Rc<RefCell<WidgetShared>>,
) -> Result<Closure<dyn FnMut(web_sys::Event)>, JsValue> {
    let window = web_sys::window()
        .ok_or_else(|| PostnavError::Dom("window is not available".to_string()))?;

    let state_for_scroll = state.clone();
    let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        handle_scroll(&state_for_scroll);
    }) as Box<dyn FnMut(web_sys::Event)>);

    window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}

#[cfg(target_arch = "wasm32")]
fn handle_scroll(state: &Rc<RefCell<WidgetShared>>) {
    // Take the nav handle out first; rect reads and class mutations happen
    // outside the borrow.
    let nav = { state.borrow().dom.nav.clone() };
    let Some(nav) = nav else {
        return;
    };
    let top = nav.get_bounding_client_rect().top();

    let (changed, sticky) = {
        let mut s = state.borrow_mut();
        let changed = s.core.record_nav_top(top);
        (changed, s.core.sticky())
    };
    if changed {
        let class_list = nav.class_list();
        if sticky {
            let _ = class_list.add_1("stuck");
        } else {
            let _ = class_list.remove_1("stuck");
        }
    }
}

/// Smooth-scroll the document so the heading with `id` sits just below the
/// viewport top. A missing target (removed after the scan) makes this a
/// no-op.
#[cfg(target_arch = "wasm32")]
pub(crate) fn scroll_to_heading(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };

    let top = element.get_bounding_client_rect().top();
    let page_offset = window.page_y_offset().unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(top + page_offset - SCROLL_OFFSET_PX);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
