//! Scroll-offset rules shared by the navigation bar and the back-to-top control.

use crate::config::NavSettings;

pub fn is_scrolled(settings: &NavSettings, offset: f64) -> bool {
    offset > settings.scrolled_after
}

pub fn shows_back_to_top(settings: &NavSettings, offset: f64) -> bool {
    offset > settings.back_to_top_after
}

/// Selector for an in-page anchor target, `None` for the bare `#` and for
/// anything that is not a fragment link.
pub fn fragment_selector(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(_) => Some(href),
    }
}

/// Document offset to scroll to so the target clears the fixed header.
/// `element_top` is relative to the viewport.
pub fn scroll_destination(settings: &NavSettings, element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - settings.header_offset
}

/// Whether a nav link points at the section with `section_id`.
pub fn link_targets(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(|h| h.strip_prefix('#')) == Some(section_id)
}
