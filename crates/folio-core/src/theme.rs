//! Theme preference and its persistence.
//!
//! The preference is a single string under one storage key. `Auto` defers
//! to the operating system colour scheme at render time.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
    Auto,
}

/// Resolved appearance actually rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// Value written to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        }
    }
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Auto => "auto",
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> Appearance {
        match self {
            Self::Dark => Appearance::Dark,
            Self::Light => Appearance::Light,
            Self::Auto if system_prefers_dark => Appearance::Dark,
            Self::Auto => Appearance::Light,
        }
    }

    /// Explicit preference showing the opposite of what is on screen now.
    pub fn toggled(self, system_prefers_dark: bool) -> Self {
        match self.resolve(system_prefers_dark) {
            Appearance::Dark => Self::Light,
            Appearance::Light => Self::Dark,
        }
    }
}

/// Error returned for unrecognized theme strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for ThemePreference {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "auto" | "system" => Ok(Self::Auto),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Key-value backend for preferences (localStorage in the browser).
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used off the browser and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(HashMap<String, String>);

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Theme preference bound to a store.
#[derive(Clone, Debug)]
pub struct ThemeManager<S> {
    store: S,
    preference: ThemePreference,
}

impl<S: PreferenceStore> ThemeManager<S> {
    /// Reads the stored preference. Missing or unknown values fall back to
    /// the default.
    pub fn load(store: S) -> Self {
        Self::load_or(store, ThemePreference::default())
    }

    /// Like [`ThemeManager::load`] with an explicit fallback.
    pub fn load_or(store: S, fallback: ThemePreference) -> Self {
        let preference = store
            .load(THEME_STORAGE_KEY)
            .and_then(|v| v.parse().ok())
            .unwrap_or(fallback);
        Self { store, preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Sets and persists the preference. The in-memory value changes even
    /// if persisting fails.
    pub fn set(&mut self, preference: ThemePreference) -> Result<(), StoreError> {
        self.preference = preference;
        self.store.save(THEME_STORAGE_KEY, preference.as_str())
    }

    pub fn toggle(&mut self, system_prefers_dark: bool) -> Result<ThemePreference, StoreError> {
        let next = self.preference.toggled(system_prefers_dark);
        self.set(next)?;
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("light".parse(), Ok(ThemePreference::Light));
        assert_eq!(" DARK ".parse(), Ok(ThemePreference::Dark));
        assert_eq!("system".parse(), Ok(ThemePreference::Auto));
        assert!("sepia".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn test_auto_resolution() {
        assert_eq!(ThemePreference::Auto.resolve(true), Appearance::Dark);
        assert_eq!(ThemePreference::Auto.resolve(false), Appearance::Light);
        assert_eq!(ThemePreference::Light.resolve(true), Appearance::Light);
    }

    #[test]
    fn test_toggle_flips_resolved() {
        assert_eq!(ThemePreference::Dark.toggled(false), ThemePreference::Light);
        assert_eq!(ThemePreference::Auto.toggled(true), ThemePreference::Light);
        assert_eq!(ThemePreference::Auto.toggled(false), ThemePreference::Dark);
    }

    #[test]
    fn test_light_survives_reload() {
        let mut manager = ThemeManager::load(MemoryStore::default());
        assert_eq!(manager.preference(), ThemePreference::Dark);
        manager.set(ThemePreference::Light).unwrap();

        let reloaded = ThemeManager::load(manager.into_store());
        assert_eq!(reloaded.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_garbage_falls_back_to_default() {
        let mut store = MemoryStore::default();
        store.save(THEME_STORAGE_KEY, "neon").unwrap();
        assert_eq!(ThemeManager::load(store).preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_load_or_fallback() {
        let manager = ThemeManager::load_or(MemoryStore::default(), ThemePreference::Auto);
        assert_eq!(manager.preference(), ThemePreference::Auto);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Auto).unwrap();
        assert_eq!(json, "\"auto\"");
    }
}
