use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::reveal::OneShot;

/// Observer whose handler sees every entry of every batch.
pub fn watch(
    threshold: f64,
    root_margin: &str,
    mut handler: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry, &observer);
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();
    Ok(observer)
}

/// Runs `effect` the first time each element intersects, then stops
/// observing it. The observer disconnects once every element has fired.
pub fn observe_once(
    elements: Vec<Element>,
    threshold: f64,
    root_margin: &str,
    mut effect: impl FnMut(Element) + 'static,
) -> Result<(), JsValue> {
    if elements.is_empty() {
        return Ok(());
    }
    let shots = Rc::new(RefCell::new(OneShot::arm(elements.iter().cloned())));
    let observer = watch(threshold, root_margin, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        let fired = {
            let mut shots = shots.borrow_mut();
            let fired = shots.position(|el| *el == target).and_then(|i| shots.fire(i));
            if shots.is_spent() {
                observer.disconnect();
            }
            fired
        };
        if let Some(el) = fired {
            observer.unobserve(&el);
            effect(el);
        }
    })?;
    for el in &elements {
        observer.observe(el);
    }
    Ok(())
}
