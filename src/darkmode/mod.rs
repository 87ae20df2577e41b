//! Dark mode preference: a single boolean mirrored between a UI marker and a
//! storage key.
//!
//! Restore runs once when the page starts and only ever turns dark mode on.
//! Toggle flips the marker and then tries to persist the new state. Storage
//! failures never reach the caller; the marker stays authoritative for the
//! current session.

pub mod marker;
pub mod storage;

pub use marker::{MemoryMarker, ThemeMarker};
pub use storage::{MemoryStorage, PreferenceStore, StorageError};

#[cfg(target_arch = "wasm32")]
pub use marker::BodyClassMarker;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

use serde::Deserialize;

/// Storage key the preference lives under
pub const DEFAULT_STORAGE_KEY: &str = "prefersDark";

/// Class applied to the root container while dark mode is on
pub const DEFAULT_MARKER_CLASS: &str = "dark";

/// The two visual states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Light => "Light",
            ColorScheme::Dark => "Dark",
        }
    }
}

/// Key and class names, overridable from server config.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DarkModeSettings {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_marker_class")]
    pub marker_class: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_marker_class() -> String {
    DEFAULT_MARKER_CLASS.to_string()
}

impl Default for DarkModeSettings {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            marker_class: default_marker_class(),
        }
    }
}

/// The persisted preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DarkModePreference {
    pub enabled: bool,
}

impl DarkModePreference {
    /// Only the exact string `"true"` enables dark mode. Malformed values are
    /// treated like `"false"`.
    pub fn from_storage_value(value: &str) -> Self {
        Self {
            enabled: value == "true",
        }
    }

    pub fn as_storage_value(&self) -> &'static str {
        if self.enabled {
            "true"
        } else {
            "false"
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.enabled)
    }

    /// Read the preference. An absent key is the default (light).
    pub fn load(store: &impl PreferenceStore, key: &str) -> Result<Self, StorageError> {
        Ok(store
            .get(key)?
            .map(|value| Self::from_storage_value(&value))
            .unwrap_or_default())
    }

    pub fn save(&self, store: &impl PreferenceStore, key: &str) -> Result<(), StorageError> {
        store.set(key, self.as_storage_value())
    }

    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }
}

/// Ties a store and a marker together under one storage key.
#[derive(Debug)]
pub struct DarkMode<S, M> {
    store: S,
    marker: M,
    storage_key: String,
}

impl<S: PreferenceStore, M: ThemeMarker> DarkMode<S, M> {
    pub fn new(store: S, marker: M) -> Self {
        Self::with_storage_key(store, marker, DEFAULT_STORAGE_KEY)
    }

    pub fn with_storage_key(store: S, marker: M, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            marker,
            storage_key: storage_key.into(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn marker(&self) -> &M {
        &self.marker
    }

    pub fn is_dark(&self) -> bool {
        self.marker.is_set()
    }

    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_dark(self.is_dark())
    }

    /// Apply the stored preference. Only a stored `"true"` touches the
    /// marker; anything else leaves it in its default state.
    pub fn restore(&self) -> ColorScheme {
        match DarkModePreference::load(&self.store, &self.storage_key) {
            Ok(pref) if pref.enabled => {
                self.marker.set(true);
                tracing::debug!("Restored dark mode from {}", self.storage_key);
            }
            Ok(_) => {}
            Err(e) => {
                tracing::debug!("Dark mode preference not restored: {}", e);
            }
        }
        self.scheme()
    }

    /// Flip the marker, then persist the new state on a best-effort basis.
    pub fn toggle(&self) -> ColorScheme {
        let pref = DarkModePreference {
            enabled: self.marker.toggle(),
        };
        if let Err(e) = pref.save(&self.store, &self.storage_key) {
            tracing::debug!("Dark mode preference not saved: {}", e);
        }
        tracing::debug!("Color scheme now {}", pref.scheme().label());
        pref.scheme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store that throws on every access, like a sandboxed iframe.
    struct FailingStorage;

    impl PreferenceStore for FailingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("SecurityError".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("QuotaExceededError".to_string()))
        }
    }

    /// Reads fine, but writes fail
    struct ReadOnlyStorage(MemoryStorage);

    impl PreferenceStore for ReadOnlyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("QuotaExceededError".to_string()))
        }
    }

    fn stored(dark_mode: &DarkMode<MemoryStorage, MemoryMarker>) -> Option<String> {
        dark_mode.store().get(DEFAULT_STORAGE_KEY).unwrap()
    }

    #[test]
    fn test_restore_true_sets_marker() {
        let dm = DarkMode::new(
            MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "true"),
            MemoryMarker::new(),
        );
        assert_eq!(dm.restore(), ColorScheme::Dark);
        assert!(dm.is_dark());
    }

    #[test]
    fn test_restore_false_leaves_marker_unset() {
        let dm = DarkMode::new(
            MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "false"),
            MemoryMarker::new(),
        );
        assert_eq!(dm.restore(), ColorScheme::Light);
        assert!(!dm.is_dark());
    }

    #[test]
    fn test_restore_absent_leaves_marker_unset() {
        let dm = DarkMode::new(MemoryStorage::new(), MemoryMarker::new());
        dm.restore();
        assert!(!dm.is_dark());
    }

    #[test]
    fn test_restore_malformed_value_is_light() {
        for value in ["TRUE", "1", "yes", " true", ""] {
            let dm = DarkMode::new(
                MemoryStorage::with_value(DEFAULT_STORAGE_KEY, value),
                MemoryMarker::new(),
            );
            dm.restore();
            assert!(!dm.is_dark(), "stored {value:?} should not enable dark mode");
        }
    }

    #[test]
    fn test_restore_never_removes_marker() {
        // "false" means no action, not an explicit switch to light
        let marker = MemoryMarker::new();
        marker.set(true);
        let dm = DarkMode::new(
            MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "false"),
            &marker,
        );
        dm.restore();
        assert!(marker.is_set());
    }

    #[test]
    fn test_restore_with_failing_storage() {
        let dm = DarkMode::new(FailingStorage, MemoryMarker::new());
        assert_eq!(dm.restore(), ColorScheme::Light);
        assert!(!dm.is_dark());
    }

    #[test]
    fn test_toggle_writes_new_state() {
        let dm = DarkMode::new(MemoryStorage::new(), MemoryMarker::new());

        assert_eq!(dm.toggle(), ColorScheme::Dark);
        assert_eq!(stored(&dm).as_deref(), Some("true"));

        assert_eq!(dm.toggle(), ColorScheme::Light);
        assert_eq!(stored(&dm).as_deref(), Some("false"));
    }

    #[test]
    fn test_toggle_with_failing_storage_still_flips() {
        let dm = DarkMode::new(FailingStorage, MemoryMarker::new());
        assert_eq!(dm.toggle(), ColorScheme::Dark);
        assert!(dm.is_dark());
        assert_eq!(dm.toggle(), ColorScheme::Light);
        assert!(!dm.is_dark());
    }

    #[test]
    fn test_failed_write_keeps_previous_stored_value() {
        let dm = DarkMode::new(
            ReadOnlyStorage(MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "true")),
            MemoryMarker::new(),
        );
        dm.restore();
        assert_eq!(dm.toggle(), ColorScheme::Light);
        // the change is not remembered across reloads
        assert_eq!(
            dm.store().get(DEFAULT_STORAGE_KEY).unwrap().as_deref(),
            Some("true")
        );
    }

    #[test]
    fn test_toggle_parity() {
        for initial in [false, true] {
            for n in 0..7 {
                let dm = DarkMode::new(MemoryStorage::new(), MemoryMarker::new());
                dm.marker().set(initial);
                for _ in 0..n {
                    dm.toggle();
                }
                assert_eq!(
                    dm.marker().is_set(),
                    initial ^ (n % 2 == 1),
                    "initial={initial} n={n}"
                );
            }
        }
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let dm = DarkMode::new(
            MemoryStorage::with_value(DEFAULT_STORAGE_KEY, "true"),
            MemoryMarker::new(),
        );
        let before = dm.restore();
        dm.toggle();
        dm.toggle();
        assert_eq!(dm.scheme(), before);
        assert_eq!(stored(&dm).as_deref(), Some("true"));
    }

    #[test]
    fn test_restore_after_toggle_round_trips() {
        let storage = MemoryStorage::new();
        DarkMode::new(&storage, MemoryMarker::new()).toggle();

        // next page load
        let reloaded = DarkMode::new(&storage, MemoryMarker::new());
        assert_eq!(reloaded.restore(), ColorScheme::Dark);
    }

    #[test]
    fn test_custom_storage_key() {
        let storage = MemoryStorage::new();
        let dm = DarkMode::with_storage_key(&storage, MemoryMarker::new(), "site-dark");
        assert_eq!(dm.storage_key(), "site-dark");
        dm.toggle();
        assert_eq!(storage.get("site-dark").unwrap().as_deref(), Some("true"));
        assert_eq!(storage.get(DEFAULT_STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn test_preference_load_and_save() {
        let storage = MemoryStorage::new();
        assert_eq!(
            DarkModePreference::load(&storage, "k"),
            Ok(DarkModePreference { enabled: false })
        );

        let mut pref = DarkModePreference::default();
        assert!(pref.toggle());
        pref.save(&storage, "k").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("true"));
        assert_eq!(DarkModePreference::load(&storage, "k"), Ok(pref));
    }

    #[test]
    fn test_preference_load_propagates_error() {
        assert!(matches!(
            DarkModePreference::load(&FailingStorage, "k"),
            Err(StorageError::Unavailable(_))
        ));
    }

    #[test]
    fn test_color_scheme() {
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled().toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.label(), "Dark");
        assert!(ColorScheme::from_dark(true).is_dark());
    }

    #[test]
    fn test_settings_defaults() {
        let settings = DarkModeSettings::default();
        assert_eq!(settings.storage_key, "prefersDark");
        assert_eq!(settings.marker_class, "dark");
    }
}
