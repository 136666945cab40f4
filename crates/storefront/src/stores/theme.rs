//! Persisted color theme preference.

use bazaar_core::Theme;

use crate::storage::{KeyValueStorage, SharedStorage, keys};

/// Holds the active theme. Stored as a raw string, not JSON.
pub struct ThemeStore {
    storage: SharedStorage,
    theme: Theme,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme)
            .finish_non_exhaustive()
    }
}

impl ThemeStore {
    /// Load the saved theme, falling back to [`Theme::Light`].
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let theme = match storage.get(keys::THEME) {
            Ok(Some(raw)) => raw.trim().parse::<Theme>().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Ignoring unrecognized saved theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read saved theme");
                Theme::default()
            }
        };

        Self { storage, theme }
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(e) = self.storage.set(keys::THEME, &theme.to_string()) {
            tracing::error!(error = %e, "Failed to persist theme");
        }
    }

    /// Switch between light and dark. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults_to_light() {
        let store = ThemeStore::load(Arc::new(MemoryStorage::new()));
        assert_eq!(store.current(), Theme::Light);
    }

    #[test]
    fn test_loads_saved_theme() {
        let storage = Arc::new(MemoryStorage::with_entries([(keys::THEME, "dark")]));
        assert_eq!(ThemeStore::load(storage).current(), Theme::Dark);
    }

    #[test]
    fn test_unrecognized_value_falls_back() {
        let storage = Arc::new(MemoryStorage::with_entries([(keys::THEME, "\"dark\"")]));
        assert_eq!(ThemeStore::load(storage).current(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists_raw_string() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ThemeStore::load(storage.clone());

        assert_eq!(store.toggle(), Theme::Dark);
        assert_eq!(storage.get(keys::THEME).unwrap().as_deref(), Some("dark"));

        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(storage.get(keys::THEME).unwrap().as_deref(), Some("light"));
    }
}
