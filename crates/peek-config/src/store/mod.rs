//! Persisted key-value state.
//!
//! Holds two independent records, each read with a caller-supplied
//! default: [`WINDOW_BOUNDS_KEY`] (a `WindowPlacement`) and
//! [`SETTINGS_KEY`] (a `Settings`).

mod file;
mod memory;


pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::Path;

use peek_common::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub const WINDOW_BOUNDS_KEY: &str = "windowBounds";
pub const SETTINGS_KEY: &str = "settings";

/// A small JSON key-value store.
pub trait StateStore {
    fn get_value(&self, key: &str) -> Option<serde_json::Value>;

    /// Store `value` under `key`. The in-memory copy is updated even when
    /// writing through to disk fails.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), StoreError>;
}

/// Read `key`, falling back to `default` when it is absent or does not
/// deserialize as `T`.
pub fn get_or<T: DeserializeOwned>(store: &dyn StateStore, key: &str, default: T) -> T {
    match store.get_value(key) {
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!(key, error = %e, "stored value has unexpected shape, using default");
            default
        }),
        None => default,
    }
}

/// Serialize and store `value` under `key`.
pub fn put<T: Serialize>(store: &mut dyn StateStore, key: &str, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_value(value).map_err(|e| StoreError::Serialize {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set_value(key, json)
}

/// Open the file store at `path`, or the in-memory store if that fails.
pub fn open_state_store(path: &Path) -> Box<dyn StateStore> {
    match FileStore::open(path) {
        Ok(store) => {
            debug!(path = %store.path().display(), "state store opened");
            Box::new(store)
        }
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "state store unavailable, settings will not survive a restart"
            );
            Box::new(MemoryStore::new())
        }
    }
}
