use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use super::dom;
use crate::config::selectors::{BACK_TO_TOP, VISIBLE};
use crate::config::NavSettings;
use crate::nav;

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(button) = dom::by_id::<Element>(document, BACK_TO_TOP) else {
        return Ok(());
    };
    let s = NavSettings::default();

    let (w, control) = (window.clone(), button.clone());
    dom::listen_passive(window, "scroll", move |_| {
        let _ = dom::set_class(&control, VISIBLE, nav::shows_back_to_top(&s, dom::scroll_y(&w)));
    })?;

    let w = window.clone();
    dom::listen(&button, "click", move |_| dom::smooth_scroll_to(&w, 0.0))
}
