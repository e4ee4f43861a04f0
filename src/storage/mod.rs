//! Persistence of the garden layout into a key-value store.
//!
//! A layout is stored under a single key as a JSON array of
//! `{ "id", "vegetableId", "x", "y" }` objects.

mod error;
mod file;
mod memory;

use log::{info, warn};

use crate::models::garden::PlacedVegetable;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Default key the layout is saved under.
pub const DEFAULT_LAYOUT_KEY: &str = "garden-layout";

/// Keys are plain names: ASCII alphanumerics, `-`, `_` and `.`, not
/// starting with a dot.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Minimal string key-value store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Serialises `entries` and writes them under `key`.
pub fn save_layout(
    store: &dyn KeyValueStore,
    key: &str,
    entries: &[PlacedVegetable],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(entries)?;
    store.set(key, &json)?;
    info!("saved {} placement(s) under '{key}'", entries.len());
    Ok(())
}

/// Reads the layout stored under `key`.
///
/// A missing key, an unreadable store or malformed data all yield an empty
/// layout; the latter two are logged.
pub fn load_layout(store: &dyn KeyValueStore, key: &str) -> Vec<PlacedVegetable> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("failed to read saved garden '{key}': {e}");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<PlacedVegetable>>(&raw) {
        Ok(entries) => {
            info!("loaded {} placement(s) from '{key}'", entries.len());
            entries
        }
        Err(e) => {
            warn!("failed to load saved garden '{key}': {e}");
            Vec::new()
        }
    }
}
