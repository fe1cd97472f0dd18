use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use super::dom;
use crate::config::selectors::TYPEWRITER;
use crate::config::{TypewriterSettings, PHRASES};
use crate::typewriter::Cycle;

type TickCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule(window: &Window, tick: &TickCallback, delay_ms: u32) -> Result<(), JsValue> {
    let tick = tick.borrow();
    let callback = tick.as_ref().ok_or("tick callback not installed")?;
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        i32::try_from(delay_ms).unwrap_or(i32::MAX),
    )?;
    Ok(())
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    start(window, document, &PHRASES, TypewriterSettings::default())
}

/// Cycles `phrases` through the typewriter target forever.
pub fn start(
    window: &Window,
    document: &Document,
    phrases: &[&'static str],
    timing: TypewriterSettings,
) -> Result<(), JsValue> {
    let Some(el) = dom::by_id::<HtmlElement>(document, TYPEWRITER) else {
        return Ok(());
    };
    let Some(&first) = phrases.first() else {
        return Ok(());
    };
    if dom::prefers_reduced_motion(window) {
        dom::set_text(&el, first);
        return Ok(());
    }

    let phrases: Vec<&'static str> = phrases.to_vec();
    let cycle = Cell::new(Cycle::default());
    let tick: TickCallback = Rc::new(RefCell::new(None));
    {
        let (w, me) = (window.clone(), tick.clone());
        *tick.borrow_mut() = Some(Closure::new(move || {
            let (next, step) = cycle.get().next(&phrases, &timing);
            cycle.set(next);
            dom::set_text(&el, &step.text);
            if let Err(e) = schedule(&w, &me, step.delay_ms) {
                web_sys::console::warn_2(&"typewriter stopped".into(), &e);
            }
        }));
    }
    schedule(window, &tick, timing.start_delay)
}
