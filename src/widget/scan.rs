//! DOM heading scan for `TocWidget`.
//!
//! Runs exactly once, synchronously, at mount. Collects every `h1`..`h6`
//! in document order and writes derived ids back onto the live elements so
//! anchor navigation and the observer can target them. Content changes
//! after mount are not picked up.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element};

#[cfg(target_arch = "wasm32")]
use crate::outline::{IdAssignment, RawHeading};

#[cfg(target_arch = "wasm32")]
pub(crate) fn collect_headings(
    document: &Document,
) -> Result<(Vec<RawHeading>, Vec<Element>), JsValue> {
    let nodes = document.query_selector_all("h1, h2, h3, h4, h5, h6")?;
    let mut headings = Vec::with_capacity(nodes.length() as usize);
    let mut elements = Vec::with_capacity(nodes.length() as usize);

    for index in 0..nodes.length() {
        let Some(node) = nodes.get(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<Element>() else {
            continue;
        };
        let Some(level) = heading_level(&element.tag_name()) else {
            continue;
        };
        let id = element.id();
        headings.push(RawHeading {
            level,
            id: (!id.is_empty()).then_some(id),
            text: element.text_content().unwrap_or_default(),
        });
        elements.push(element);
    }

    Ok((headings, elements))
}

/// Write scanner-derived ids onto the live heading elements.
#[cfg(target_arch = "wasm32")]
pub(crate) fn apply_assignments(elements: &[Element], assignments: &[IdAssignment]) {
    for assignment in assignments {
        if let Some(element) = elements.get(assignment.index) {
            element.set_id(&assignment.id);
        }
    }
}

/// "H2" -> 2; anything that is not an h1..h6 tag name -> None.
#[cfg(target_arch = "wasm32")]
fn heading_level(tag_name: &str) -> Option<u8> {
    let mut chars = tag_name.chars();
    if !chars.next()?.eq_ignore_ascii_case(&'h') {
        return None;
    }
    let digit = chars.next()?.to_digit(10)?;
    if chars.next().is_some() {
        return None;
    }
    u8::try_from(digit).ok().filter(|level| (1..=6).contains(level))
}
