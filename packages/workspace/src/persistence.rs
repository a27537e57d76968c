//! # Persistence Bridge
//!
//! Mirrors playground state to a [`KeyValueStore`] as JSON.
//!
//! Storage faults never escape this module: reads fall back to the caller's
//! default and writes are logged and dropped. Malformed stored data is treated
//! the same as absent data.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use webplay_editor::EditorSet;

use crate::store::KeyValueStore;

pub const EDITORS_KEY: &str = "webplay_editors";
pub const SETTINGS_KEY: &str = "webplay_settings";
pub const THEME_KEY: &str = "webplay_theme";
pub const LAYOUT_KEY: &str = "webplay_layout";

pub struct PersistenceBridge<S> {
    store: S,
}

impl<S: KeyValueStore> PersistenceBridge<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Read and parse `key`, or return `default` if it is absent or unusable
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.read(key) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "malformed stored value, using default");
                    default
                }
            },
            None => default,
        }
    }

    /// Serialize and write `value` under `key`. Returns false on failure.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize value");
                return false;
            }
        };

        match self.store.set(key, &json) {
            Ok(()) => {
                debug!(key, bytes = json.len(), "saved");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "failed to write stored value");
                false
            }
        }
    }

    /// The persisted editor set, or the built-in defaults
    pub fn load_editors(&self) -> EditorSet {
        let Some(raw) = self.read(EDITORS_KEY) else {
            return EditorSet::defaults();
        };

        match EditorSet::from_json(&raw) {
            Ok(set) => set,
            Err(e) => {
                warn!(key = EDITORS_KEY, error = %e, "stored editors unusable, using defaults");
                EditorSet::defaults()
            }
        }
    }

    pub fn save_editors(&mut self, editors: &EditorSet) -> bool {
        self.save(EDITORS_KEY, editors)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value");
                None
            }
        }
    }
}
