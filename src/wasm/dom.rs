use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::config::selectors::REDUCED_MOTION;

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    Ok(elements(document.query_selector_all(selector)?))
}

pub fn set_class(el: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    el.class_list().toggle_with_force(class, on).map(|_| ())
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media(REDUCED_MOTION)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&opts);
}

/// Attaches `handler` for the page's lifetime.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Like [`listen`], but marked passive so scrolling is never blocked.
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    )?;
    closure.forget();
    Ok(())
}

pub fn set_text(el: &HtmlElement, text: &str) {
    el.set_text_content(Some(text));
}

/// Reports whether a component started; a failure is logged and does not
/// stop the caller from starting the next one.
pub fn isolate(name: &str, result: Result<(), JsValue>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            web_sys::console::warn_2(&format!("{name}: init failed").into(), &e);
            false
        }
    }
}
