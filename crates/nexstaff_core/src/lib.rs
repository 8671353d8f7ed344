//! Core data layer for the NexStaff admin panel.
//! This crate is the single source of truth for collection semantics.

pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod storage;
pub mod store;
pub mod template;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{FieldValue, Fields, Record};
pub use service::directory::{DirectoryCounts, StaffDirectory};
pub use storage::{
    open_store, open_store_in_memory, MemorySlotStore, SlotStore, SqliteSlotStore, StorageError,
};
pub use store::record_store::{RecordStore, StoreError, StoreResult};
pub use template::{path_prefix, TemplateError, TemplateLoader, FOOTER_FALLBACK};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
