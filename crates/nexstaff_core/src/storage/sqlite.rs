//! SQLite-backed slot store.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for slot storage.
//! - Configure connection pragmas and apply schema migrations before use.
//! - Implement `SlotStore` over one `slots` table.
//!
//! # Invariants
//! - Returned stores have migrations fully applied.
//! - Slot writes replace the whole value in one statement.

use super::migrations::apply_migrations;
use super::{SlotStore, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Persistent slot store over a single SQLite database file.
pub struct SqliteSlotStore {
    conn: Connection,
}

/// Opens a slot database file and applies all pending migrations.
///
/// # Side effects
/// - Emits `store_open` logging events with duration and status.
pub fn open_store(path: impl AsRef<Path>) -> StorageResult<SqliteSlotStore> {
    let started_at = Instant::now();
    info!("event=store_open module=storage status=start mode=file");

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=file duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, started_at, "file")
}

/// Opens an in-memory slot database and applies all pending migrations.
pub fn open_store_in_memory() -> StorageResult<SqliteSlotStore> {
    let started_at = Instant::now();
    info!("event=store_open module=storage status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode=memory duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    finish_open(conn, started_at, "memory")
}

fn finish_open(
    mut conn: Connection,
    started_at: Instant,
    mode: &str,
) -> StorageResult<SqliteSlotStore> {
    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=store_open module=storage status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(SqliteSlotStore { conn })
        }
        Err(err) => {
            error!(
                "event=store_open module=storage status=error mode={mode} duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}

impl SlotStore for SqliteSlotStore {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE name = ?1;",
                [name],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_slot(&self, name: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO slots (name, value)
             VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![name, value],
        )?;
        Ok(())
    }

    fn clear_slot(&self, name: &str) -> StorageResult<()> {
        self.conn
            .execute("DELETE FROM slots WHERE name = ?1;", [name])?;
        Ok(())
    }
}
