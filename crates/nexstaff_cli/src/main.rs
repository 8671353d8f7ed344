//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `nexstaff_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use nexstaff_core::{open_store_in_memory, StaffDirectory};

fn main() {
    println!("nexstaff_core version={}", nexstaff_core::core_version());

    let storage = match open_store_in_memory() {
        Ok(storage) => storage,
        Err(err) => {
            eprintln!("failed to open slot store: {err}");
            std::process::exit(1);
        }
    };

    let directory = StaffDirectory::new(&storage);
    match directory.bootstrap() {
        Ok(counts) => println!(
            "collections seeded employees={} candidates={} schedule={}",
            counts.employees, counts.candidates, counts.schedule
        ),
        Err(err) => {
            eprintln!("bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
