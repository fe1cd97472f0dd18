use wasm_bindgen::JsValue;
use web_sys::Document;

use super::{dom, observer};
use crate::config::selectors::{FADE_IN, VISIBLE};
use crate::config::RevealSettings;

pub fn init(document: &Document) -> Result<(), JsValue> {
    let s = RevealSettings::default();
    let targets = dom::query_all(document, FADE_IN)?;
    observer::observe_once(targets, s.threshold, s.root_margin, |el| {
        let _ = el.class_list().add_1(VISIBLE);
    })
}
