//! Thin web-sys helpers used by every handler.
//!
//! Each wrapper turns the `JsValue` error side into [`NewsroomError::Dom`]
//! so handlers can use `?` and log one message per failed step.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlDocument, HtmlInputElement, Window};

use crate::error::NewsroomError;

pub fn js_error(value: JsValue) -> NewsroomError {
    NewsroomError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

pub fn window() -> Result<Window, NewsroomError> {
    web_sys::window()
        .ok_or_else(|| NewsroomError::Dom("no window".to_owned()))
}

pub fn document() -> Result<Document, NewsroomError> {
    window()?
        .document()
        .ok_or_else(|| NewsroomError::Dom("no document".to_owned()))
}

/// Raw `document.cookie`, or `None` when the document is unavailable.
pub fn cookie_string() -> Option<String> {
    let html = document().map(|doc| doc.unchecked_into::<HtmlDocument>());
    match html.map(|doc| doc.cookie()) {
        Ok(Ok(raw)) => Some(raw),
        Ok(Err(err)) => {
            log::warn!("cannot read cookies: {}", js_error(err));
            None
        }
        Err(err) => {
            log::warn!("cannot read cookies: {err}");
            None
        }
    }
}

/// Current `location.pathname`; empty when it cannot be read.
pub fn pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().map_err(js_error))
        .unwrap_or_default()
}

/// All elements under `document` matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, NewsroomError> {
    let nodes = document()?.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect())
}

/// First descendant of `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Result<Option<Element>, NewsroomError> {
    root.query_selector(selector).map_err(js_error)
}

/// Attach `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), NewsroomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Live value of an `<input>`; `None` for any other element.
pub fn input_value(el: Element) -> Option<String> {
    match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input.value()),
        Err(_) => None,
    }
}

pub fn set_attr(el: &Element, name: &str, value: &str) -> Result<(), NewsroomError> {
    el.set_attribute(name, value).map_err(js_error)
}

pub fn set_disabled(el: &Element, disabled: bool) -> Result<(), NewsroomError> {
    if disabled {
        el.set_attribute("disabled", "").map_err(js_error)
    } else {
        el.remove_attribute("disabled").map_err(js_error)
    }
}

/// Remove `from` and add `to` on the element's class list.
pub fn swap_class(el: &Element, from: &str, to: &str) -> Result<(), NewsroomError> {
    let classes = el.class_list();
    if !from.is_empty() {
        classes.remove_1(from).map_err(js_error)?;
    }
    if !to.is_empty() {
        classes.add_1(to).map_err(js_error)?;
    }
    Ok(())
}

pub fn alert(message: &str) {
    match window().and_then(|w| w.alert_with_message(message).map_err(js_error)) {
        Ok(()) => {}
        Err(err) => log::warn!("alert failed: {err}"),
    }
}

pub fn reload() {
    match window().and_then(|w| w.location().reload().map_err(js_error)) {
        Ok(()) => {}
        Err(err) => log::error!("reload failed: {err}"),
    }
}
