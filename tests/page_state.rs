use folio_wasm::config::selectors::THEME_KEY;
use folio_wasm::config::{NavSettings, RevealSettings};
use folio_wasm::nav::{fragment_selector, is_scrolled, link_targets, scroll_destination, shows_back_to_top};
use folio_wasm::reveal::OneShot;
use folio_wasm::theme::{restore, MemoryStore, PreferenceStore, Theme, ThemeController};

#[test]
fn toggle_parity_decides_stored_theme() {
    let mut controller = ThemeController::new(Theme::Light, MemoryStore::default());
    for n in 1..=7 {
        let theme = controller.toggle();
        let expected = if n % 2 == 0 { Theme::Light } else { Theme::Dark };
        assert_eq!(theme, expected);
    }
    let store = controller.into_store();
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn first_toggle_persists_dark_across_reload() {
    let store = MemoryStore::default();
    let applied = restore(&store);
    assert_eq!(applied, Theme::Light);

    let mut controller = ThemeController::new(applied, store);
    controller.toggle();
    let store = controller.into_store();

    assert_eq!(restore(&store), Theme::Dark);
}

#[test]
fn toggle_follows_a_theme_applied_elsewhere() {
    let mut controller = ThemeController::new(Theme::Light, MemoryStore::default());
    assert_eq!(controller.toggle(), Theme::Dark);

    // Something else switched the page back to light before this click.
    assert_eq!(controller.toggle_from(Theme::Light), Theme::Dark);
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.into_store().get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn unknown_theme_values_read_as_light() {
    let mut store = MemoryStore::default();
    store.set(THEME_KEY, "sepia");
    assert_eq!(restore(&store), Theme::Light);
    assert_eq!(Theme::from_attr(None), Theme::Light);
    assert_eq!(Theme::Dark.glyph(), "\u{2600}\u{FE0F}");
    assert_eq!(Theme::Light.glyph(), "\u{1F319}");
}

#[test]
fn scroll_thresholds() {
    let s = NavSettings::default();
    assert!(!is_scrolled(&s, 0.0));
    assert!(!is_scrolled(&s, 50.0));
    assert!(is_scrolled(&s, 51.0));
    assert!(!shows_back_to_top(&s, 300.0));
    assert!(shows_back_to_top(&s, 301.0));
}

#[test]
fn reveal_zone_is_its_own_setting() {
    let r = RevealSettings::default();
    assert_eq!(r.threshold, 0.1);
    assert_eq!(r.root_margin, "0px 0px -40px 0px");
    assert_eq!(NavSettings::default().section_margin, "-64px 0px -40% 0px");
}

#[test]
fn fragments_and_destinations() {
    let s = NavSettings::default();
    assert_eq!(fragment_selector("#"), None);
    assert_eq!(fragment_selector("/about"), None);
    assert_eq!(fragment_selector("#skills"), Some("#skills"));
    assert_eq!(scroll_destination(&s, 400.0, 1000.0), 1332.0);

    assert!(link_targets(Some("#about"), "about"));
    assert!(!link_targets(Some("#about"), "contact"));
    assert!(!link_targets(None, "about"));
}

#[test]
fn one_shot_fires_once_per_item() {
    let mut shots = OneShot::arm(["a", "b"]);
    assert_eq!(shots.fire(1), Some("b"));
    assert_eq!(shots.fire(1), None);
    assert_eq!(shots.position(|s| *s == "b"), None);
    assert_eq!(shots.position(|s| *s == "a"), Some(0));
    assert_eq!(shots.pending(), 1);
    assert_eq!(shots.fire(0), Some("a"));
    assert!(shots.is_spent());
    assert_eq!(shots.fire(7), None);
}
