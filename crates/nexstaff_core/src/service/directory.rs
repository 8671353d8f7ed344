//! Staff directory service.
//!
//! # Responsibility
//! - Wire one `RecordStore` per admin-panel collection (employees,
//!   candidates, schedule) over a shared storage backend.
//! - Define the default sequences used to seed uninitialized slots.
//!
//! # Invariants
//! - Each collection persists through its own slot; stores never share one.
//! - Default employee ids are 1..=4 and stay contiguous.

use crate::model::record::{FieldValue, Fields, Record};
use crate::storage::SlotStore;
use crate::store::record_store::{RecordStore, StoreResult};
use log::info;

/// Slot holding the employee roster.
pub const EMPLOYEES_SLOT: &str = "nexstaff.employees";
/// Slot holding candidate profiles.
pub const CANDIDATES_SLOT: &str = "nexstaff.candidates";
/// Slot holding interview/meeting schedule events.
pub const SCHEDULE_SLOT: &str = "nexstaff.schedule";

/// All admin-panel collections, one store per entity kind.
///
/// Constructed once at startup; stores are plain values borrowing the shared
/// backend, so no global singletons are involved.
pub struct StaffDirectory<'s, S: SlotStore> {
    employees: RecordStore<'s, S>,
    candidates: RecordStore<'s, S>,
    schedule: RecordStore<'s, S>,
}

impl<'s, S: SlotStore> StaffDirectory<'s, S> {
    pub fn new(storage: &'s S) -> Self {
        Self {
            employees: RecordStore::new(storage, EMPLOYEES_SLOT, default_employees()),
            candidates: RecordStore::new(storage, CANDIDATES_SLOT, default_candidates()),
            schedule: RecordStore::new(storage, SCHEDULE_SLOT, default_schedule()),
        }
    }

    pub fn employees(&self) -> &RecordStore<'s, S> {
        &self.employees
    }

    pub fn candidates(&self) -> &RecordStore<'s, S> {
        &self.candidates
    }

    pub fn schedule(&self) -> &RecordStore<'s, S> {
        &self.schedule
    }

    /// Forces every collection through its reconciliation path and reports
    /// the resulting record counts.
    ///
    /// # Side effects
    /// - Seeds uninitialized slots with their defaults.
    /// - Emits a `directory_bootstrap` logging event.
    pub fn bootstrap(&self) -> StoreResult<DirectoryCounts> {
        let counts = DirectoryCounts {
            employees: self.employees.get_all()?.len(),
            candidates: self.candidates.get_all()?.len(),
            schedule: self.schedule.get_all()?.len(),
        };
        info!(
            "event=directory_bootstrap module=service status=ok employees={} candidates={} schedule={}",
            counts.employees, counts.candidates, counts.schedule
        );
        Ok(counts)
    }
}

/// Record counts per collection after bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectoryCounts {
    pub employees: usize,
    pub candidates: usize,
    pub schedule: usize,
}

fn record(id: i64, fields: Vec<(&str, FieldValue)>) -> Record {
    let fields: Fields = fields
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();
    Record::new(id, fields)
}

/// Default employee roster seeded into an uninitialized employees slot.
pub fn default_employees() -> Vec<Record> {
    vec![
        record(
            1,
            vec![
                ("name", "Sarah Mitchell".into()),
                ("position", "Recruitment Lead".into()),
                ("department", "Talent Acquisition".into()),
                ("email", "sarah.mitchell@nexstaff.com".into()),
                ("phone", "(555) 010-2234".into()),
            ],
        ),
        record(
            2,
            vec![
                ("name", "David Okafor".into()),
                ("position", "Account Manager".into()),
                ("department", "Client Services".into()),
                ("email", "david.okafor@nexstaff.com".into()),
                ("phone", "(555) 010-8841".into()),
            ],
        ),
        record(
            3,
            vec![
                ("name", "Elena Vasquez".into()),
                ("position", "HR Coordinator".into()),
                ("department", "Operations".into()),
                ("email", "elena.vasquez@nexstaff.com".into()),
                ("phone", "(555) 010-5190".into()),
            ],
        ),
        record(
            4,
            vec![
                ("name", "James Park".into()),
                ("position", "Payroll Specialist".into()),
                ("department", "Finance".into()),
                ("email", "james.park@nexstaff.com".into()),
                ("phone", "(555) 010-7762".into()),
            ],
        ),
    ]
}

/// Default candidate profiles seeded into an uninitialized candidates slot.
pub fn default_candidates() -> Vec<Record> {
    vec![
        record(
            1,
            vec![
                ("name", "Priya Raman".into()),
                ("applied_for", "Senior Accountant".into()),
                ("skills", FieldValue::list(["GAAP", "Excel", "NetSuite"])),
                ("experience_years", FieldValue::number(7)),
                ("status", "Interviewing".into()),
            ],
        ),
        record(
            2,
            vec![
                ("name", "Tom Whitfield".into()),
                ("applied_for", "Warehouse Supervisor".into()),
                (
                    "skills",
                    FieldValue::list(["Inventory", "Forklift Certified", "Scheduling"]),
                ),
                ("experience_years", FieldValue::number(4)),
                ("status", "Screening".into()),
            ],
        ),
        record(
            3,
            vec![
                ("name", "Aisha Bello".into()),
                ("applied_for", "Front-End Developer".into()),
                (
                    "skills",
                    FieldValue::list(["JavaScript", "CSS", "Accessibility"]),
                ),
                ("experience_years", FieldValue::number(5)),
                ("status", "Offer Extended".into()),
            ],
        ),
    ]
}

/// Default schedule events seeded into an uninitialized schedule slot.
pub fn default_schedule() -> Vec<Record> {
    vec![
        record(
            1,
            vec![
                ("title", "Interview: Priya Raman".into()),
                ("date", "2025-03-03".into()),
                ("time", "10:00".into()),
                ("location", "Room B".into()),
            ],
        ),
        record(
            2,
            vec![
                ("title", "Client intake: Harbor Logistics".into()),
                ("date", "2025-03-04".into()),
                ("time", "14:30".into()),
                ("location", "Main office".into()),
            ],
        ),
        record(
            3,
            vec![
                ("title", "Weekly placement review".into()),
                ("date", "2025-03-07".into()),
                ("time", "09:00".into()),
                ("location", "Conference room".into()),
            ],
        ),
    ]
}
