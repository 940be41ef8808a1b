//! Theme initialization and toggle.
//!
//! Reads the stored theme, applies a `data-theme` attribute to the `<html>`
//! element, and writes the new value back on toggle.
//!
//! TRADE-OFFS
//! ==========
//! Persistence and DOM updates are best-effort browser-only behavior; SSR
//! paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use super::storage::KeyValueStore;
use crate::state::ui::Theme;

pub const STORAGE_KEY: &str = "theme";

/// Stored theme, or the default (dark) when nothing valid is stored.
pub fn read_preference(store: &impl KeyValueStore) -> Theme {
    store
        .get_item(STORAGE_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Flip `current`, persist and apply the result, and return it.
pub fn toggle(store: &impl KeyValueStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.set_item(STORAGE_KEY, next.as_str());
    apply(next);
    log::debug!("theme set to {}", next.as_str());
    next
}
