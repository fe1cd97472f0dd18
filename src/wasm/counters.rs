use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::{dom, observer};
use crate::config::selectors::{COUNTERS, COUNT_ATTR, SUFFIX_ATTR};
use crate::config::CounterSettings;
use crate::counter::{parse_target, CounterRamp};

/// Counts `el` up from zero to its `data-count` value. Elements without a
/// parseable target are left as they are.
fn run(window: &Window, el: Element, settings: &CounterSettings) -> Result<(), JsValue> {
    let Some(target) = el.get_attribute(COUNT_ATTR).as_deref().and_then(parse_target) else {
        return Ok(());
    };
    let suffix = el.get_attribute(SUFFIX_ATTR).unwrap_or_default();
    let mut ramp = CounterRamp::new(target, suffix, settings);

    let interval = Rc::new(Cell::new(None::<i32>));
    let callback = {
        let (w, interval) = (window.clone(), interval.clone());
        Closure::<dyn FnMut()>::new(move || {
            el.set_text_content(Some(&ramp.tick()));
            if ramp.is_done() {
                if let Some(id) = interval.take() {
                    w.clear_interval_with_handle(id);
                }
            }
        })
    };
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        i32::try_from(settings.tick).unwrap_or(i32::MAX),
    )?;
    interval.set(Some(id));
    callback.forget();
    Ok(())
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let settings = CounterSettings::default();
    let counters = dom::query_all(document, COUNTERS)?;
    let w = window.clone();
    observer::observe_once(counters, settings.threshold, "0px", move |el| {
        if let Err(e) = run(&w, el, &settings) {
            web_sys::console::warn_2(&"counter failed".into(), &e);
        }
    })
}
