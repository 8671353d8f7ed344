//! Service layer: per-entity-kind store wiring.
//!
//! # Responsibility
//! - Construct one record store per entity kind at startup.
//! - Own the hard-coded default sequences each collection seeds from.
//!
//! # Invariants
//! - Service APIs never bypass record-store persistence contracts.
//! - Slot names are unique per entity kind.

pub mod directory;
