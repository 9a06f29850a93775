// ============================================================================
// EVENT HANDLING
// ============================================================================
// Listeners live on elements that are discarded on every full re-render, so
// the browser drops them together with the node; `forget()` is fine here.
// Window/document listeners must be registered once at startup.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};

pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    listen(element, "click", handler)
}

/// `submit` with the page reload suppressed
pub fn on_submit<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    listen(element, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}

/// Current value of an `input`, `textarea` or `select` on every edit
pub fn on_value<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(String) + 'static,
{
    let event = if element.is_instance_of::<HtmlSelectElement>() {
        "change"
    } else {
        "input"
    };
    listen(element, event, move |e: Event| {
        if let Some(value) = e.target().and_then(|t| field_value(&t)) {
            handler(value);
        }
    })
}

pub fn on_checked<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(bool) + 'static,
{
    listen(element, "change", move |e: Event| {
        if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
            handler(input.checked());
        }
    })
}

/// Raw `change` event, for file inputs that need the element itself
pub fn on_change<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    listen(element, "change", handler)
}

fn listen<E, F>(element: &Element, event: &str, handler: F) -> Result<(), JsValue>
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn field_value(target: &web_sys::EventTarget) -> Option<String> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}
