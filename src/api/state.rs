use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    logic::placement::PlacementStore,
    storage::{load_layout, KeyValueStore, MemoryStore, DEFAULT_LAYOUT_KEY},
};

/// Shared application state: the session's placements and where they persist.
pub struct GardenState {
    garden: Mutex<PlacementStore>,
    storage: Box<dyn KeyValueStore>,
    layout_key: String,
}

impl GardenState {
    /// Starts with an empty garden.
    pub fn new(storage: Box<dyn KeyValueStore>, layout_key: impl Into<String>) -> Self {
        Self {
            garden: Mutex::new(PlacementStore::new()),
            storage,
            layout_key: layout_key.into(),
        }
    }

    /// Starts with whatever layout is saved under `layout_key`.
    pub fn restored(storage: Box<dyn KeyValueStore>, layout_key: impl Into<String>) -> Self {
        let state = Self::new(storage, layout_key);
        let entries = load_layout(state.storage(), state.layout_key());
        state.garden().restore(entries);
        state
    }

    /// Empty garden backed by a [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), DEFAULT_LAYOUT_KEY)
    }

    /// Locks the placement store. Every store operation leaves it consistent,
    /// so a poisoned lock is recovered rather than propagated.
    pub fn garden(&self) -> MutexGuard<'_, PlacementStore> {
        self.garden.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn layout_key(&self) -> &str {
        &self.layout_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::save_layout;

    #[test]
    fn test_restored_picks_up_saved_layout() {
        let storage = MemoryStore::new();
        let mut garden = PlacementStore::new();
        garden.place("tomato", 1.0, 1.0);
        save_layout(&storage, "plot", garden.entries()).unwrap();

        let state = GardenState::restored(Box::new(storage), "plot");

        assert_eq!(state.garden().snapshot(), garden.snapshot());
    }

    #[test]
    fn test_restored_with_garbage_starts_empty() {
        let storage = MemoryStore::new();
        storage.set("plot", "not json at all").unwrap();

        let state = GardenState::restored(Box::new(storage), "plot");

        assert!(state.garden().is_empty());
    }
}
