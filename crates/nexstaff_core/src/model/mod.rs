//! Domain model shared by every admin-panel collection.
//!
//! # Responsibility
//! - Define the generic record shape used for employees, candidates and
//!   schedule events alike.
//! - Keep `id` a distinguished required field outside the open field map.
//!
//! # Invariants
//! - `id` values are unique within one collection.
//! - The open field map never carries an `id` key.

pub mod record;
