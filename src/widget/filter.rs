//! Tag filter widget over pre-rendered listing markup.
//!
//! The listing is server-rendered; this widget only wires it up. Filter
//! buttons carry `data-tag` (defaulting to "all"), post cards carry
//! `data-tags` as a JSON array, and an optional `#empty-state` element is
//! shown when nothing matches. Visibility is driven through inline
//! `display` so the markup needs no cooperation beyond the attributes.

use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlElement;

use crate::filter::TagFilter;
#[cfg(target_arch = "wasm32")]
use crate::filter::ALL_TAG;
#[cfg(target_arch = "wasm32")]
use crate::error::PostnavError;

#[cfg(target_arch = "wasm32")]
pub(crate) struct FilterShared {
    filter: TagFilter,
    buttons: Vec<(String, HtmlElement)>,
    cards: Vec<HtmlElement>,
    empty_state: Option<HtmlElement>,
}

/// The tag filter widget exported to JavaScript.
#[wasm_bindgen]
pub struct FilterWidget {
    #[cfg(target_arch = "wasm32")]
    state: Rc<RefCell<FilterShared>>,
    #[cfg(target_arch = "wasm32")]
    closures: Vec<(HtmlElement, Closure<dyn FnMut(web_sys::Event)>)>,

    // Non-wasm32 fields
    #[cfg(not(target_arch = "wasm32"))]
    filter: TagFilter,
}

// ============================================================================
// WASM32 Implementation
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl FilterWidget {
    /// Attach to a listing container and wire up its filter buttons.
    #[wasm_bindgen(constructor)]
    pub fn new(container: HtmlElement) -> Result<FilterWidget, JsValue> {
        console_error_panic_hook::set_once();

        let mut buttons = Vec::new();
        for button in collect(&container, ".tag-filter")? {
            let tag = button
                .get_attribute("data-tag")
                .unwrap_or_else(|| ALL_TAG.to_string());
            buttons.push((tag, button));
        }

        let cards = collect(&container, ".post-item")?;
        let mut entries = Vec::with_capacity(cards.len());
        for card in &cards {
            let tags = match card.get_attribute("data-tags") {
                Some(json) => {
                    serde_json::from_str::<Vec<String>>(&json).map_err(PostnavError::Json)?
                }
                None => Vec::new(),
            };
            entries.push(tags);
        }

        let empty_state = container
            .query_selector("#empty-state")?
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());

        let state = Rc::new(RefCell::new(FilterShared {
            filter: TagFilter::new(entries),
            buttons,
            cards,
            empty_state,
        }));

        let mut closures = Vec::new();
        let wired: Vec<(String, HtmlElement)> = { state.borrow().buttons.clone() };
        for (tag, button) in wired {
            let state_for_click = state.clone();
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                apply_tag(&state_for_click, &tag);
            }) as Box<dyn FnMut(web_sys::Event)>);
            button
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
                .ok();
            closures.push((button, closure));
        }

        let widget = FilterWidget { state, closures };
        // Initial paint so visibility and button styling match the model.
        apply_tag(&widget.state, ALL_TAG);
        Ok(widget)
    }

    /// Remove every click listener and stop reacting. Safe to call more
    /// than once; also runs on drop.
    pub fn unmount(&mut self) {
        self.teardown();
    }

    pub fn active_tag(&self) -> String {
        self.state.borrow().filter.active_tag().to_string()
    }

    /// Number of cards passing the active tag.
    pub fn visible_count(&self) -> u32 {
        let mut s = self.state.borrow_mut();
        u32::try_from(s.filter.filtered().len()).unwrap_or(u32::MAX)
    }
}

#[cfg(target_arch = "wasm32")]
impl FilterWidget {
    fn teardown(&mut self) {
        for (button, closure) in self.closures.drain(..) {
            let _ = button
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for FilterWidget {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_tag(state: &Rc<RefCell<FilterShared>>, tag: &str) {
    // Compute under the borrow, mutate the DOM after dropping it.
    let (visible, buttons, cards, empty_state, active) = {
        let mut s = state.borrow_mut();
        s.filter.set_active_tag(tag);
        (
            s.filter.filtered().to_vec(),
            s.buttons.clone(),
            s.cards.clone(),
            s.empty_state.clone(),
            s.filter.active_tag().to_string(),
        )
    };

    for (index, card) in cards.iter().enumerate() {
        let display = if visible.contains(&index) { "" } else { "none" };
        let _ = card.style().set_property("display", display);
    }
    for (button_tag, button) in &buttons {
        let class_list = button.class_list();
        if *button_tag == active {
            let _ = class_list.add_1("active");
        } else {
            let _ = class_list.remove_1("active");
        }
    }
    if let Some(empty_state) = empty_state {
        let display = if visible.is_empty() { "" } else { "none" };
        let _ = empty_state.style().set_property("display", display);
    }
}

#[cfg(target_arch = "wasm32")]
fn collect(container: &HtmlElement, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = container.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        if let Ok(element) = node.dyn_into::<HtmlElement>() {
            out.push(element);
        }
    }
    Ok(out)
}

// ============================================================================
// Native Implementation (headless, used by tests)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
impl FilterWidget {
    /// Build a widget over per-card tag lists, no DOM involved.
    pub fn from_entries(entries: Vec<Vec<String>>) -> Self {
        Self {
            filter: TagFilter::new(entries),
        }
    }

    pub fn set_active_tag(&mut self, tag: &str) -> bool {
        self.filter.set_active_tag(tag)
    }

    pub fn active_tag(&self) -> &str {
        self.filter.active_tag()
    }

    /// Indices of cards passing the active tag, in listing order.
    pub fn visible_indices(&mut self) -> Vec<usize> {
        self.filter.filtered().to_vec()
    }
}
