//! Generic record store over one named storage slot.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over a single serialized record collection.
//! - Reconcile missing or malformed slot content back to a default sequence.
//!
//! # Invariants
//! - Every mutation rewrites the whole slot; there are no partial writes.
//! - New ids are computed as `max(existing ids, 0) + 1`; a deleted maximum
//!   id is reused by the next create.
//! - Reads never surface deserialization failures; they reset and log.

use crate::model::record::{Fields, Record};
use crate::storage::{SlotStore, StorageError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Record store error. Deserialization failures are deliberately absent:
/// they are recovered internally, never propagated.
#[derive(Debug)]
pub enum StoreError {
    /// Storage read/write transport failure.
    Storage(StorageError),
    /// The in-memory collection could not be encoded for writing.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Entity-agnostic CRUD accessor over one collection in one storage slot.
///
/// One instance is constructed per entity kind at startup; instances are
/// plain values borrowing a shared backend, so multiple collections coexist
/// without global singletons.
pub struct RecordStore<'s, S: SlotStore> {
    storage: &'s S,
    slot: String,
    defaults: Vec<Record>,
}

impl<'s, S: SlotStore> RecordStore<'s, S> {
    /// Creates a store bound to `slot`, seeded from `defaults` on first read
    /// or after a failed deserialization.
    pub fn new(storage: &'s S, slot: impl Into<String>, defaults: Vec<Record>) -> Self {
        Self {
            storage,
            slot: slot.into(),
            defaults,
        }
    }

    /// Name of the storage slot this store persists through.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Overwrites the persisted collection with the default sequence and
    /// returns that sequence.
    ///
    /// # Errors
    /// - `StoreError::Storage` when the slot cannot be written.
    pub fn reset_to_default(&self) -> StoreResult<Vec<Record>> {
        self.persist(&self.defaults)?;
        Ok(self.defaults.clone())
    }

    /// Loads the collection, reconciling uninitialized state.
    ///
    /// A missing, empty or undeserializable slot is treated as uninitialized:
    /// the default sequence is persisted and returned, and a diagnostic is
    /// logged. Malformed stored data is never an error for the caller.
    pub fn load_or_init(&self) -> StoreResult<Vec<Record>> {
        let raw = match self.storage.read_slot(&self.slot)? {
            Some(raw) => raw,
            None => {
                warn!(
                    "event=slot_reconcile module=store status=reset slot={} reason=missing",
                    self.slot
                );
                return self.reset_to_default();
            }
        };

        if raw.trim().is_empty() {
            warn!(
                "event=slot_reconcile module=store status=reset slot={} reason=empty",
                self.slot
            );
            return self.reset_to_default();
        }

        match serde_json::from_str::<Vec<Record>>(&raw) {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(
                    "event=slot_reconcile module=store status=reset slot={} reason=deserialize error={}",
                    self.slot, err
                );
                self.reset_to_default()
            }
        }
    }

    /// Returns the current collection, self-healing uninitialized state.
    pub fn get_all(&self) -> StoreResult<Vec<Record>> {
        self.load_or_init()
    }

    /// Returns the first record whose id matches, or `None`.
    pub fn get_by_id(&self, id: i64) -> StoreResult<Option<Record>> {
        let records = self.get_all()?;
        Ok(records.into_iter().find(|record| record.id == id))
    }

    /// Appends a new record built from `fields` and persists the collection.
    ///
    /// The new id is `max(existing ids, 0) + 1`, so the first record in an
    /// empty collection gets id 1. A caller-supplied `id` field is ignored;
    /// the computed id always wins.
    pub fn create(&self, fields: Fields) -> StoreResult<Record> {
        let mut records = self.get_all()?;
        let next_id = records.iter().map(|record| record.id).fold(0, i64::max) + 1;

        let record = Record::new(next_id, fields);
        records.push(record.clone());
        self.persist(&records)?;
        Ok(record)
    }

    /// Shallow-merges `patch` over the record with `id` and persists.
    ///
    /// Patch keys overwrite, other fields are retained and `id` is immune.
    /// Returns `None` without writing when no record matches.
    pub fn update(&self, id: i64, patch: Fields) -> StoreResult<Option<Record>> {
        let mut records = self.get_all()?;
        let Some(record) = records.iter_mut().find(|record| record.id == id) else {
            return Ok(None);
        };

        for (name, value) in patch {
            if name == "id" {
                continue;
            }
            record.fields.insert(name, value);
        }

        let updated = record.clone();
        self.persist(&records)?;
        Ok(Some(updated))
    }

    /// Removes the record with `id`, if any, and persists the result.
    ///
    /// Idempotent: deleting a nonexistent id succeeds and leaves the
    /// collection unchanged (the unchanged collection is still rewritten).
    pub fn delete(&self, id: i64) -> StoreResult<()> {
        let mut records = self.get_all()?;
        records.retain(|record| record.id != id);
        self.persist(&records)?;
        Ok(())
    }

    /// Destroys the storage slot. The next read re-seeds from defaults.
    pub fn clear(&self) -> StoreResult<()> {
        self.storage.clear_slot(&self.slot)?;
        Ok(())
    }

    fn persist(&self, records: &[Record]) -> StoreResult<()> {
        let encoded = serde_json::to_string(records)?;
        self.storage.write_slot(&self.slot, &encoded)?;
        Ok(())
    }
}
