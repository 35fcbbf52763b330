//! Theme preference persistence.
//!
//! Reads the stored preference from `localStorage["theme"]` once at startup
//! and writes it back on every toggle. Rendering the theme is left to the
//! root component's `data-theme` binding; nothing here touches the document.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; without `csr` the store
//! reads nothing and writes nowhere.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;

pub const STORAGE_KEY: &str = "theme";

/// Durable per-browser home of the theme preference.
pub trait ThemeStore {
    fn load(&self) -> Option<Theme>;
    fn save(&self, theme: Theme);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageThemeStore;

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<Theme> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            let raw = storage.get_item(STORAGE_KEY).ok().flatten()?;
            Theme::parse(&raw)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, theme: Theme) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                log::warn!("theme preference not persisted");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = theme;
        }
    }
}

/// The system color-scheme preference, `Light` when unavailable.
pub fn system_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let prefers_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Stored preference first, then the system preference.
pub fn initial_theme(store: &dyn ThemeStore) -> Theme {
    store.load().unwrap_or_else(system_preference)
}
