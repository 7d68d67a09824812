//! Theme preference, persistence and application.
//!
//! Reads the stored preference, applies a `data-theme` attribute to the
//! `<html>` element, and writes toggles back to storage. Applying is a no-op
//! outside the browser.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon for the toggle button: what switching would bring.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }
}

/// Stored preference, or light when unset or unrecognized.
pub fn read_preference(store: &dyn KeyValueStore) -> Theme {
    store
        .get(STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

pub fn persist(store: &dyn KeyValueStore, theme: Theme) {
    store.set(STORAGE_KEY, theme.as_str());
}

/// Set `data-theme` on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Flip the theme, apply it and persist the new preference.
pub fn toggle(store: &dyn KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    persist(store, next);
    next
}
