//! Session Storage
//!
//! Persistent browser storage behind an injectable interface, so tests
//! can substitute an in-memory store for localStorage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const TOKEN_KEY: &str = "token";
const THEME_KEY: &str = "theme";

/// Minimal key/value persistence interface. `Send + Sync` because the
/// session travels through Leptos context.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser localStorage. All failures (no window, storage disabled)
/// degrade to "key absent".
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

/// The persisted session: exactly one token key, plus the display
/// preference. Token presence is what the session gate keys off.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn KeyValueStore>,
}

impl Session {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self { store: Arc::new(store) }
    }

    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn store_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn theme(&self) -> Option<String> {
        self.store.get(THEME_KEY)
    }

    pub fn store_theme(&self, theme: &str) {
        self.store.set(THEME_KEY, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let session = Session::new(MemoryStorage::default());
        assert!(!session.is_authenticated());

        session.store_token("abc123");
        assert_eq!(session.token().as_deref(), Some("abc123"));
        assert!(session.is_authenticated());

        session.clear_token();
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_theme_is_independent_of_token() {
        let session = Session::new(MemoryStorage::default());
        session.store_theme("dark");
        assert_eq!(session.theme().as_deref(), Some("dark"));
        // Theme alone does not authenticate
        assert!(!session.is_authenticated());

        session.store_token("t");
        session.clear_token();
        assert_eq!(session.theme().as_deref(), Some("dark"));
    }
}
