use std::collections::HashMap;

use crate::config::selectors::THEME_KEY;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Reads the applied attribute. Anything other than `"dark"` is light.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Toggle label: the glyph of the theme a click switches to.
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "\u{2600}\u{FE0F}",
            Theme::Light => "\u{1F319}",
        }
    }
}

/// Synchronous string key-value storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_owned(), value.to_owned());
    }
}

/// Theme the head bootstrap applies before any script runs.
pub fn restore(store: &impl PreferenceStore) -> Theme {
    Theme::from_attr(store.get(THEME_KEY).as_deref())
}

pub struct ThemeController<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(applied: Theme, store: S) -> Self {
        Self { theme: applied, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips whatever theme is applied right now, which may differ from the
    /// last one this controller wrote.
    pub fn toggle_from(&mut self, applied: Theme) -> Theme {
        self.theme = applied;
        self.toggle()
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str());
        self.theme
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
