//! Record store layer: generic CRUD over serialized collections.
//!
//! # Responsibility
//! - Define the collection-per-slot data access contract used by every
//!   admin-panel entity kind.
//! - Isolate slot serialization details from service orchestration.
//!
//! # Invariants
//! - Malformed persisted data never reaches callers; reads self-heal to the
//!   default sequence.
//! - Only storage write failures propagate as errors.

pub mod record_store;
