//! Main `TocWidget` struct - the browser-facing table of contents.
//!
//! This module provides the WASM-exported `TocWidget` that handles:
//! - Scanning the rendered document's headings once at mount
//! - Tracking the active section via an IntersectionObserver
//! - Toggling the sticky state from window scroll events
//! - Rendering the list, collapse toggle, and progress bar into a host
//!   container
//!
//! Event wiring happens in the constructor; `unmount()` (or dropping the
//! widget) disconnects the observer, removes the scroll listener, and
//! closes the state machine so late callbacks are no-ops. The scan always
//! completes before the observer attaches, so only id-bearing headings are
//! ever observed.
//!
//! On native targets the same state machine is exposed without the DOM so
//! tests can drive mount, synthesized events, and teardown directly.

mod filter;
mod observe;
mod render;
mod scan;
mod scroll;
mod share;

pub use filter::FilterWidget;

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::{HtmlElement, IntersectionObserver};

#[cfg(target_arch = "wasm32")]
use crate::error::PostnavError;

#[cfg(not(target_arch = "wasm32"))]
use crate::outline;
#[cfg(not(target_arch = "wasm32"))]
use crate::outline::RawHeading;
#[cfg(not(target_arch = "wasm32"))]
use crate::tracker::{self, IntersectionRecord};
#[cfg(not(target_arch = "wasm32"))]
use crate::types::TocItem;

use crate::state::TocState;
use crate::types::TocConfig;

/// Shared state reachable from every event closure (wasm32 only).
#[cfg(target_arch = "wasm32")]
pub(crate) struct WidgetShared {
    pub(crate) core: TocState,
    pub(crate) config: TocConfig,
    pub(crate) dom: WidgetDom,
}

/// Handles to the widget-owned DOM, populated by the render pass.
/// All `None`/empty when the outline is empty and nothing was rendered.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub(crate) struct WidgetDom {
    pub(crate) nav: Option<HtmlElement>,
    pub(crate) body: Option<HtmlElement>,
    pub(crate) links: Vec<(String, HtmlElement)>,
    pub(crate) progress_fill: Option<HtmlElement>,
    pub(crate) progress_value: Option<HtmlElement>,
    pub(crate) toggle: Option<HtmlElement>,
}

/// The table-of-contents widget exported to JavaScript.
#[wasm_bindgen]
pub struct TocWidget {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<WidgetShared>>,
    #[cfg(target_arch = "wasm32")]
    container: HtmlElement,
    #[cfg(target_arch = "wasm32")]
    observer: Option<IntersectionObserver>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    observe_closure: Option<Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>>,
    #[cfg(target_arch = "wasm32")]
    scroll_closure: Option<Closure<dyn FnMut(web_sys::Event)>>,
    #[cfg(target_arch = "wasm32")]
    #[allow(dead_code)]
    click_closures: Vec<Closure<dyn FnMut(web_sys::Event)>>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    state: TocState,
    #[cfg(not(target_arch = "wasm32"))]
    #[allow(dead_code)]
    config: TocConfig,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl TocWidget {
    /// Mount the widget into `container`.
    ///
    /// Scans the document's headings, writes derived ids back onto them,
    /// renders the list, then attaches the intersection observer and the
    /// window scroll listener. `options` may be undefined/null or an object
    /// with any of `maxLevel`, `showNumbers`, `collapsible`, `title`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement, options: JsValue) -> Result<TocWidget, JsValue> {
        console_error_panic_hook::set_once();

        let config: TocConfig = if options.is_undefined() || options.is_null() {
            TocConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| PostnavError::Config(e.to_string()))?
        };

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PostnavError::Dom("document is not available".to_string()))?;

        // Scan first: the observer below must only ever see headings that
        // already carry their id.
        let (headings, elements) = scan::collect_headings(&document)?;
        let outline = crate::outline::scan(&headings, config.max_level);
        scan::apply_assignments(&elements, &outline.assignments);

        let state = Rc::new(RefCell::new(WidgetShared {
            core: TocState::new(outline.items),
            config,
            dom: WidgetDom::default(),
        }));

        let click_closures = render::build(&document, &container, &state)?;
        let (observer, observe_closure) = observe::attach(&elements, &state)?;
        let scroll_closure = scroll::attach(&state)?;

        Ok(TocWidget {
            state,
            container,
            observer: Some(observer),
            observe_closure: Some(observe_closure),
            scroll_closure: Some(scroll_closure),
            click_closures,
        })
    }

    /// Tear the widget down: disconnect the observer, remove the scroll
    /// listener, drop the rendered DOM, and close the state machine.
    /// Safe to call more than once; also runs on drop.
    pub fn unmount(&mut self) {
        self.teardown();
    }

    /// Number of outline entries.
    pub fn item_count(&self) -> u32 {
        u32::try_from(self.state.borrow().core.items().len()).unwrap_or(u32::MAX)
    }

    /// Id of the heading currently considered in view ("" when none yet).
    pub fn active_id(&self) -> String {
        self.state.borrow().core.active_id().to_string()
    }

    /// Reading progress as a whole percentage.
    pub fn progress(&self) -> u32 {
        self.state.borrow().core.progress_percent()
    }

    pub fn sticky(&self) -> bool {
        self.state.borrow().core.sticky()
    }

    pub fn collapsed(&self) -> bool {
        self.state.borrow().core.collapsed()
    }

    /// The outline as an array of `{id, text, level}` objects.
    pub fn items(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.state.borrow().core.items())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl TocWidget {
    fn teardown(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Some(closure) = self.scroll_closure.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            }
        }
        self.observe_closure = None;
        self.click_closures.clear();
        self.state.borrow_mut().core.detach();
        self.container.set_inner_html("");
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for TocWidget {
    fn drop(&mut self) {
        self.teardown();
    }
}

// ============================================================================
// Native Implementation (headless, used by tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl TocWidget {
    /// Build a widget over pre-collected headings, no DOM involved. Drives
    /// the same scan and state machine the browser build does.
    pub fn from_headings(headings: &[RawHeading], config: TocConfig) -> Self {
        let outline = outline::scan(headings, config.max_level);
        Self {
            state: TocState::new(outline.items),
            config,
        }
    }

    /// Feed one synthesized intersection batch. Returns true when the
    /// active id changed.
    pub fn record_intersections(&mut self, records: &[IntersectionRecord]) -> bool {
        match tracker::pick_active(records) {
            Some(id) => {
                let id = id.to_string();
                self.state.record_active(&id)
            }
            None => false,
        }
    }

    /// Feed one synthesized scroll event (the widget's top offset).
    /// Returns true when the sticky flag flipped.
    pub fn record_nav_top(&mut self, top: f64) -> bool {
        self.state.record_nav_top(top)
    }

    pub fn toggle_collapsed(&mut self) -> bool {
        self.state.toggle_collapsed()
    }

    /// Headless teardown: closes the state machine like the browser
    /// build's `unmount()` does.
    pub fn unmount(&mut self) {
        self.state.detach();
    }

    pub fn items(&self) -> &[TocItem] {
        self.state.items()
    }

    pub fn active_id(&self) -> &str {
        self.state.active_id()
    }

    pub fn progress(&self) -> u32 {
        self.state.progress_percent()
    }

    pub fn sticky(&self) -> bool {
        self.state.sticky()
    }

    pub fn collapsed(&self) -> bool {
        self.state.collapsed()
    }
}
