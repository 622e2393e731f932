//! DOM rendering for `TocWidget`.
//!
//! Builds the widget subtree inside the host container once at mount and
//! applies incremental updates afterwards (active highlight, progress,
//! collapse). Visual styling is left to the site's stylesheet; this layer
//! only emits structural classes (`toc-nav`, `toc-item`, `active`,
//! `stuck`, ...) plus the per-level indentation and progress width.

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, HtmlElement};

#[cfg(target_arch = "wasm32")]
use super::{scroll, WidgetDom, WidgetShared};
#[cfg(target_arch = "wasm32")]
use crate::error::PostnavError;
#[cfg(target_arch = "wasm32")]
use crate::outline;

/// Build the widget DOM and register per-item click handlers. Returns the
/// closures backing those handlers; they live in the widget struct until
/// teardown. An empty outline renders nothing and returns no closures.
#[cfg(target_arch = "wasm32")]
pub(crate) fn build(
    document: &Document,
    container: &HtmlElement,
    state: &Rc<RefCell<WidgetShared>>,
) -> Result<Vec<Closure<dyn FnMut(web_sys::Event)>>, JsValue> {
    container.set_inner_html("");
    container.set_class_name("table-of-contents");

    let (items, config) = {
        let s = state.borrow();
        (s.core.items().to_vec(), s.config.clone())
    };
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let mut closures: Vec<Closure<dyn FnMut(web_sys::Event)>> = Vec::new();

    let nav = create(document, "nav", "toc-nav")?;

    // Header: title, item count, optional collapse toggle
    let header = create(document, "div", "toc-header")?;
    let title = create(document, "span", "toc-title")?;
    title.set_text_content(Some(&config.title));
    header.append_child(&title)?;
    let count = create(document, "span", "toc-count")?;
    count.set_text_content(Some(&items.len().to_string()));
    header.append_child(&count)?;

    let mut toggle = None;
    if config.collapsible {
        let button = create(document, "button", "toc-toggle")?;
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("aria-label", "Collapse table of contents");
        button.set_text_content(Some("▾"));

        let state_for_toggle = state.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            apply_collapse_toggle(&state_for_toggle);
        }) as Box<dyn FnMut(web_sys::Event)>);
        button
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);

        header.append_child(&button)?;
        toggle = Some(button);
    }
    nav.append_child(&header)?;

    // Body: item list + progress bar (hidden together when collapsed)
    let body = create(document, "div", "toc-body")?;
    let list = create(document, "ul", "toc-list")?;
    let mut links = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let entry = create(document, "li", "toc-item")?;
        let _ = entry
            .style()
            .set_property("padding-left", &format!("{}px", outline::indent_px(item.level)));

        let link = create(document, "button", "toc-link")?;
        let _ = link.set_attribute("type", "button");
        if config.show_numbers {
            let ordinal = create(document, "span", "toc-ordinal")?;
            ordinal.set_text_content(Some(&outline::ordinal_label(index)));
            link.append_child(&ordinal)?;
        }
        let label = create(document, "span", "toc-text")?;
        label.set_text_content(Some(&item.text));
        link.append_child(&label)?;

        let target = item.id.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            scroll::scroll_to_heading(&target);
        }) as Box<dyn FnMut(web_sys::Event)>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .ok();
        closures.push(closure);

        entry.append_child(&link)?;
        list.append_child(&entry)?;
        links.push((item.id.clone(), link));
    }
    body.append_child(&list)?;

    let progress = create(document, "div", "toc-progress")?;
    let track = create(document, "div", "toc-progress-track")?;
    let fill = create(document, "div", "toc-progress-fill")?;
    let _ = fill.style().set_property("width", "0%");
    track.append_child(&fill)?;
    progress.append_child(&track)?;

    let labels = create(document, "div", "toc-progress-labels")?;
    let caption = create(document, "span", "toc-progress-caption")?;
    caption.set_text_content(Some("Progress"));
    labels.append_child(&caption)?;
    let value = create(document, "span", "toc-progress-value")?;
    value.set_text_content(Some("0%"));
    labels.append_child(&value)?;
    progress.append_child(&labels)?;
    body.append_child(&progress)?;

    nav.append_child(&body)?;
    container.append_child(&nav)?;

    state.borrow_mut().dom = WidgetDom {
        nav: Some(nav),
        body: Some(body),
        links,
        progress_fill: Some(fill),
        progress_value: Some(value),
        toggle,
    };

    Ok(closures)
}

/// Re-apply the active highlight and progress bar after the active id
/// changed.
#[cfg(target_arch = "wasm32")]
pub(crate) fn update_active(state: &Rc<RefCell<WidgetShared>>) {
    // Extract state and handles, then drop the borrow before any DOM
    // mutation.
    let (active_id, progress, links, fill, value) = {
        let s = state.borrow();
        (
            s.core.active_id().to_string(),
            s.core.progress_percent(),
            s.dom.links.clone(),
            s.dom.progress_fill.clone(),
            s.dom.progress_value.clone(),
        )
    };

    for (id, link) in &links {
        let class_list = link.class_list();
        if !active_id.is_empty() && *id == active_id {
            let _ = class_list.add_1("active");
        } else {
            let _ = class_list.remove_1("active");
        }
    }
    if let Some(fill) = fill {
        let _ = fill.style().set_property("width", &format!("{progress}%"));
    }
    if let Some(value) = value {
        value.set_text_content(Some(&format!("{progress}%")));
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_collapse_toggle(state: &Rc<RefCell<WidgetShared>>) {
    let (collapsed, body, toggle) = {
        let mut s = state.borrow_mut();
        let collapsed = s.core.toggle_collapsed();
        (collapsed, s.dom.body.clone(), s.dom.toggle.clone())
    };

    // The body (list + progress) hides; the header stays.
    if let Some(body) = body {
        let display = if collapsed { "none" } else { "" };
        let _ = body.style().set_property("display", display);
    }
    if let Some(toggle) = toggle {
        toggle.set_text_content(Some(if collapsed { "▸" } else { "▾" }));
        let _ = toggle.set_attribute(
            "aria-label",
            if collapsed {
                "Expand table of contents"
            } else {
                "Collapse table of contents"
            },
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn create(document: &Document, tag: &str, class_name: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class_name);
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| PostnavError::Dom(format!("created <{tag}> is not an HtmlElement")).into())
}
