use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, Storage};

use super::dom;
use crate::config::selectors::{THEME_ATTR, THEME_TOGGLE};
use crate::theme::{restore, PreferenceStore, Theme, ThemeController};

/// `localStorage`, or nothing when the browser refuses access.
pub struct LocalStore(Option<Storage>);

impl LocalStore {
    pub fn open() -> Self {
        Self(web_sys::window().and_then(|w| w.local_storage().ok().flatten()))
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            // Quota or privacy-mode failures leave the in-page theme applied.
            let _ = storage.set_item(key, value);
        }
    }
}

fn apply(root: &Element, toggle: &HtmlElement, theme: Theme) -> Result<(), wasm_bindgen::JsValue> {
    root.set_attribute(THEME_ATTR, theme.as_str())?;
    dom::set_text(toggle, theme.glyph());
    Ok(())
}

pub fn init(document: &Document) -> Result<(), wasm_bindgen::JsValue> {
    let Some(toggle) = dom::by_id::<HtmlElement>(document, THEME_TOGGLE) else {
        return Ok(());
    };
    let Some(root) = document.document_element() else {
        return Ok(());
    };

    // Without the head bootstrap, fall back to the stored preference.
    let store = LocalStore::open();
    let applied = match root.get_attribute(THEME_ATTR) {
        Some(value) => Theme::from_attr(Some(&value)),
        None => restore(&store),
    };
    apply(&root, &toggle, applied)?;

    let controller = Rc::new(RefCell::new(ThemeController::new(applied, store)));
    let label = toggle.clone();
    dom::listen(&toggle, "click", move |_| {
        let current = Theme::from_attr(root.get_attribute(THEME_ATTR).as_deref());
        let theme = controller.borrow_mut().toggle_from(current);
        if let Err(e) = apply(&root, &label, theme) {
            web_sys::console::warn_1(&e);
        }
    })
}
