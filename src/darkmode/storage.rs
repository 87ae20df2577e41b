//! Persistent key-value storage for the dark mode preference.
//!
//! The browser implementation wraps `window.localStorage`. Every failure the
//! browser can raise (quota exceeded, storage disabled, sandboxed iframe) is
//! folded into [`StorageError::Unavailable`].

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

/// The only failure a preference store reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Origin-scoped string key-value store.
pub trait PreferenceStore {
    /// Read the value stored under `key`, `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-process store. Used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`, resolved on every call so a page that loses
/// storage access mid-session degrades instead of holding a stale handle.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(e: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Unavailable(format!("{e:?}"))
}
