//! Small DOM helpers shared by the editor and the preview.
//!
//! Event handlers receive events whose target may be an `<input>`, a
//! `<textarea>` or a `<select>`; these helpers read the current value without
//! assuming which one.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use common::reorder::HoverPosition;

/// Current value of the form control that fired `e`, or an empty string when
/// the target is not a form control.
pub fn target_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };

    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Checked state of the checkbox or radio that fired `e`.
pub fn target_checked(e: &Event) -> bool {
    e.target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

/// Pointer position against the bounding box of the closest ancestor of the
/// event target matching `selector`.
///
/// Drag events bubble up from the card's inputs, so the target is often a
/// child of the card rather than the card itself.
pub fn hover_position(e: &DragEvent, selector: &str) -> Option<HoverPosition> {
    let target = e.target()?.dyn_into::<Element>().ok()?;
    let card = target.closest(selector).ok().flatten()?;
    let rect = card.get_bounding_client_rect();

    Some(HoverPosition {
        pointer_y: f64::from(e.client_y()),
        top: rect.top(),
        height: rect.height(),
    })
}
