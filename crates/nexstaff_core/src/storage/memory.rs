//! In-memory slot store.
//!
//! # Responsibility
//! - Back record stores in tests and throwaway sessions without touching
//!   the filesystem.
//!
//! # Invariants
//! - Semantics match `SqliteSlotStore` for every `SlotStore` operation.

use super::{SlotStore, StorageResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Volatile slot store over a plain map. Single-threaded by design, matching
/// the synchronous execution model of the whole storage layer.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: RefCell<BTreeMap<String, String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated slots. Test helper.
    pub fn slot_count(&self) -> usize {
        self.slots.borrow().len()
    }
}

impl SlotStore for MemorySlotStore {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.borrow().get(name).cloned())
    }

    fn write_slot(&self, name: &str, value: &str) -> StorageResult<()> {
        self.slots
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn clear_slot(&self, name: &str) -> StorageResult<()> {
        self.slots.borrow_mut().remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemorySlotStore;
    use crate::storage::SlotStore;

    #[test]
    fn read_back_what_was_written() {
        let store = MemorySlotStore::new();
        store.write_slot("a", "one").unwrap();
        store.write_slot("a", "two").unwrap();

        assert_eq!(store.read_slot("a").unwrap().as_deref(), Some("two"));
        assert_eq!(store.read_slot("b").unwrap(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemorySlotStore::new();
        store.write_slot("a", "one").unwrap();

        store.clear_slot("a").unwrap();
        store.clear_slot("a").unwrap();

        assert_eq!(store.read_slot("a").unwrap(), None);
        assert_eq!(store.slot_count(), 0);
    }
}
