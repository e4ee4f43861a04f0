use log::debug;
use uuid::Uuid;

use crate::models::garden::PlacedVegetable;

/// Ordered collection of the vegetables placed during one planning session.
///
/// Every operation is total: removing an unknown instance is a no-op and
/// entries referencing vegetables outside the catalog are kept as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementStore {
    entries: Vec<PlacedVegetable>,
}

impl PlacementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store holding `entries`, in order.
    pub fn from_entries(entries: Vec<PlacedVegetable>) -> Self {
        Self { entries }
    }

    /// Appends a new instance of `vegetable_id` at `(x, y)` with a fresh id.
    pub fn place(&mut self, vegetable_id: impl Into<String>, x: f64, y: f64) -> PlacedVegetable {
        let placed = PlacedVegetable {
            id: Uuid::new_v4().to_string(),
            vegetable_id: vegetable_id.into(),
            x,
            y,
        };
        debug!(
            "placed {} ({}) at ({}, {})",
            placed.vegetable_id, placed.id, x, y
        );
        self.entries.push(placed.clone());
        placed
    }

    /// Removes the instance with `instance_id`. Returns whether one was removed.
    pub fn remove(&mut self, instance_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != instance_id);
        let removed = self.entries.len() != before;
        if removed {
            debug!("removed placement {instance_id}");
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("cleared {} placement(s)", self.entries.len());
        self.entries.clear();
    }

    /// Copy of the current entries, in placement order.
    pub fn snapshot(&self) -> Vec<PlacedVegetable> {
        self.entries.clone()
    }

    /// Replaces the whole collection.
    pub fn restore(&mut self, entries: Vec<PlacedVegetable>) {
        debug!("restored {} placement(s)", entries.len());
        self.entries = entries;
    }

    pub fn get(&self, instance_id: &str) -> Option<&PlacedVegetable> {
        self.entries.iter().find(|p| p.id == instance_id)
    }

    pub fn entries(&self) -> &[PlacedVegetable] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_place_appends_one_entry() {
        let mut store = PlacementStore::new();
        store.place("basil", 1.0, 2.0);
        let before = store.snapshot().len();

        let placed = store.place("tomato", 10.0, 20.0);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.len(), before + 1);
        let last = snapshot.last().unwrap();
        assert_eq!(last, &placed);
        assert_eq!(last.vegetable_id, "tomato");
        assert_eq!(last.x, 10.0);
        assert_eq!(last.y, 20.0);
    }

    #[test]
    fn test_place_generates_unique_ids() {
        let mut store = PlacementStore::new();
        for i in 0..50 {
            store.place("carrot", i as f64, i as f64);
        }
        let ids: HashSet<_> = store.entries().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids.len(), 50, "Every placement must get its own id");
    }

    #[test]
    fn test_place_allows_duplicates_overlap_and_unknown_ids() {
        let mut store = PlacementStore::new();
        store.place("tomato", 5.0, 5.0);
        store.place("tomato", 5.0, 5.0);
        store.place("mandrake", 5.0, 5.0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_remove_existing_entry() {
        let mut store = PlacementStore::new();
        let keep = store.place("tomato", 0.0, 0.0);
        let gone = store.place("basil", 1.0, 1.0);

        assert!(store.remove(&gone.id));
        assert_eq!(store.len(), 1);
        assert!(store.get(&gone.id).is_none());
        assert!(store.get(&keep.id).is_some());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = PlacementStore::new();
        store.place("tomato", 0.0, 0.0);
        let before = store.snapshot();

        assert!(!store.remove("not-an-id"));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = PlacementStore::new();
        store.place("tomato", 0.0, 0.0);
        store.place("basil", 1.0, 1.0);
        store.clear();
        assert!(store.snapshot().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_snapshot_round_trip() {
        let mut store = PlacementStore::new();
        store.place("tomato", 3.5, 4.25);
        store.place("potato", 8.0, 1.0);
        let before = store.clone();

        let snapshot = store.snapshot();
        store.restore(snapshot);

        assert_eq!(store, before);
    }

    #[test]
    fn test_restore_replaces_and_tolerates_unknown_vegetables() {
        let mut store = PlacementStore::new();
        store.place("tomato", 0.0, 0.0);
        let entries = vec![PlacedVegetable {
            id: "legacy-1".into(),
            vegetable_id: "mandrake".into(),
            x: 1.0,
            y: 2.0,
        }];

        store.restore(entries.clone());

        assert_eq!(store.snapshot(), entries);
    }
}
