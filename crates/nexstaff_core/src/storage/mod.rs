//! Key-value slot storage abstractions and backends.
//!
//! # Responsibility
//! - Define the slot-store contract record stores persist through.
//! - Provide a SQLite-backed persistent slot store and an in-memory one.
//!
//! # Invariants
//! - A slot holds one textual value; writes replace the whole value.
//! - Single-writer execution model: no backend performs its own locking,
//!   callers embedding this in a concurrent host must serialize access per
//!   slot name.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemorySlotStore;
pub use sqlite::{open_store, open_store_in_memory, SqliteSlotStore};

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage transport failure. The only error kind record stores propagate.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// Backend refused or failed the operation for a non-SQLite reason.
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Contract for a named-slot key-value store.
///
/// Mirrors browser local storage: one string value per named slot, read and
/// replaced atomically from the caller's point of view.
pub trait SlotStore {
    /// Reads a slot value. `None` when the slot has never been written.
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>>;

    /// Writes (creates or fully replaces) a slot value.
    fn write_slot(&self, name: &str, value: &str) -> StorageResult<()>;

    /// Removes a slot entirely. Removing an absent slot is not an error.
    fn clear_slot(&self, name: &str) -> StorageResult<()>;
}
