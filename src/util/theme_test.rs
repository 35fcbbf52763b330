use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct MemoryStore(RefCell<Option<String>>);

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.0.borrow().as_deref().and_then(Theme::parse)
    }

    fn save(&self, theme: Theme) {
        *self.0.borrow_mut() = Some(theme.as_str().to_owned());
    }
}

#[test]
fn initial_theme_prefers_stored_value() {
    let store = MemoryStore::default();
    store.save(Theme::Dark);
    assert_eq!(initial_theme(&store), Theme::Dark);
}

#[test]
fn initial_theme_ignores_garbage_value() {
    let store = MemoryStore(RefCell::new(Some("purple".into())));
    assert_eq!(initial_theme(&store), system_preference());
}

#[test]
fn storage_key_is_theme() {
    assert_eq!(STORAGE_KEY, "theme");
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_store_is_noop_outside_browser() {
    let store = LocalStorageThemeStore;
    store.save(Theme::Dark);
    assert_eq!(store.load(), None);
    assert_eq!(system_preference(), Theme::Light);
}
