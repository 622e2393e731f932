//! Active-section observation for `TocWidget`.
//!
//! Wraps the platform IntersectionObserver: entries are marshalled into
//! plain [`IntersectionRecord`]s and handed to the headless tracker, which
//! owns the band geometry and the topmost-wins tie-break.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(target_arch = "wasm32")]
use super::{render, WidgetShared};
#[cfg(target_arch = "wasm32")]
use crate::tracker::{self, IntersectionRecord, ViewportBand};

/// Create the observer, wire its callback, and start observing every
/// id-bearing heading. Headings without an id cannot be targeted and are
/// skipped.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::type_complexity)]
pub(crate) fn attach(
    elements: &[Element],
    state: &Rc<RefCell<WidgetShared>>,
) -> Result<
    (
        IntersectionObserver,
        Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ),
    JsValue,
> {
    let state_for_callback = state.clone();
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let mut records = Vec::with_capacity(entries.length() as usize);
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                records.push(IntersectionRecord {
                    id: entry.target().id(),
                    top: entry.bounding_client_rect().top(),
                    is_intersecting: entry.is_intersecting(),
                });
            }
            apply_batch(&state_for_callback, &records);
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&ViewportBand::default().root_margin());
    options.set_threshold(&JsValue::from_f64(0.0));

    let observer =
        IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)?;
    for element in elements {
        if !element.id().is_empty() {
            observer.observe(element);
        }
    }

    Ok((observer, closure))
}

#[cfg(target_arch = "wasm32")]
fn apply_batch(state: &Rc<RefCell<WidgetShared>>, records: &[IntersectionRecord]) {
    let changed = {
        let mut s = state.borrow_mut();
        match tracker::pick_active(records) {
            Some(id) => {
                let id = id.to_string();
                s.core.record_active(&id)
            }
            None => false,
        }
    }; // borrow dropped here — safe to mutate DOM
    if changed {
        render::update_active(state);
    }
}
