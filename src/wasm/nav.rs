use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use super::{dom, observer};
use crate::config::selectors::{
    ACTIVE, FRAGMENT_ANCHORS, NAVBAR, NAV_ANCHORS, NAV_LINKS, NAV_TOGGLE, OPEN, SCROLLED,
    SECTIONS,
};
use crate::config::NavSettings;
use crate::nav;

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    let s = NavSettings::default();
    dom::isolate("nav scroll class", scroll_class(window, document, s));
    dom::isolate("nav menu", mobile_menu(document));
    dom::isolate("nav smooth scroll", smooth_scroll(window, document, s));
    dom::isolate("nav highlight", highlight_sections(document, s));
    Ok(())
}

fn scroll_class(window: &Window, document: &Document, s: NavSettings) -> Result<(), JsValue> {
    let Some(navbar) = dom::by_id::<Element>(document, NAVBAR) else {
        return Ok(());
    };
    let w = window.clone();
    dom::listen_passive(window, "scroll", move |_| {
        let _ = dom::set_class(&navbar, SCROLLED, nav::is_scrolled(&s, dom::scroll_y(&w)));
    })
}

fn mobile_menu(document: &Document) -> Result<(), JsValue> {
    let Some(links) = dom::by_id::<Element>(document, NAV_LINKS) else {
        return Ok(());
    };
    if let Some(toggle) = dom::by_id::<Element>(document, NAV_TOGGLE) {
        let menu = links.clone();
        dom::listen(&toggle, "click", move |_| {
            let _ = menu.class_list().toggle(OPEN);
        })?;
    }
    for link in dom::elements(links.query_selector_all("a")?) {
        let menu = links.clone();
        dom::listen(&link, "click", move |_| {
            let _ = menu.class_list().remove_1(OPEN);
        })?;
    }
    Ok(())
}

fn smooth_scroll(window: &Window, document: &Document, s: NavSettings) -> Result<(), JsValue> {
    for anchor in dom::query_all(document, FRAGMENT_ANCHORS)? {
        let (w, doc, a) = (window.clone(), document.clone(), anchor.clone());
        dom::listen(&anchor, "click", move |event| {
            let href = a.get_attribute("href").unwrap_or_default();
            let Some(selector) = nav::fragment_selector(&href) else {
                return;
            };
            // A fragment that is not a valid selector resolves to nothing.
            let Ok(Some(target)) = doc.query_selector(selector) else {
                return;
            };
            event.prevent_default();
            let top = target.get_bounding_client_rect().top();
            dom::smooth_scroll_to(&w, nav::scroll_destination(&s, top, dom::scroll_y(&w)));
        })?;
    }
    Ok(())
}

fn highlight_sections(document: &Document, s: NavSettings) -> Result<(), JsValue> {
    let sections = dom::query_all(document, SECTIONS)?;
    let anchors = dom::query_all(document, NAV_ANCHORS)?;
    if sections.is_empty() || anchors.is_empty() {
        return Ok(());
    }
    let observer = observer::watch(s.section_threshold, s.section_margin, move |entry, _| {
        if !entry.is_intersecting() {
            return;
        }
        let id = entry.target().id();
        for a in &anchors {
            let on = nav::link_targets(a.get_attribute("href").as_deref(), &id);
            let _ = dom::set_class(a, ACTIVE, on);
        }
    })?;
    for section in &sections {
        observer.observe(section);
    }
    Ok(())
}
