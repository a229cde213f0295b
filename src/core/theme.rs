//! Theme manager: localStorage persistence and `data-theme` application.

use folio_core::error::StoreError;
use folio_core::theme::{PreferenceStore, ThemeManager};
use folio_core::ThemePreference;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::dom;

/// Preference store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        dom::local_storage()?.get_item(key).ok()?
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = dom::local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::WriteFailed)
    }
}

/// Read the stored preference once, falling back to the site default.
pub fn load(fallback: ThemePreference) -> ThemeManager<LocalStore> {
    ThemeManager::load_or(LocalStore, fallback)
}

/// Keep `<html data-theme>` in sync with the resolved appearance.
pub fn init(ctx: AppContext) {
    Effect::new(move |_| {
        let appearance = ctx.appearance();
        dom::set_root_attribute("data-theme", appearance.as_str());
    });
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use folio_core::theme::THEME_STORAGE_KEY;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_round_trip() {
        let mut store = LocalStore;
        store.save(THEME_STORAGE_KEY, "light").unwrap();
        assert_eq!(store.load(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[wasm_bindgen_test]
    fn test_toggle_survives_reload() {
        LocalStore.save(THEME_STORAGE_KEY, "dark").unwrap();

        let mut manager = load(ThemePreference::Dark);
        manager.toggle(true).unwrap();

        let reloaded = load(ThemePreference::Dark);
        assert_eq!(reloaded.preference(), ThemePreference::Light);
    }
}
