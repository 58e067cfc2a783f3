//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `events.db` file in the configured output directory with
//! two tables: `events` and `calls`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{CallRow, EventRow, OutputResult};

/// Writes engine output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `events.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("events.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS events (
                 time_ms    INTEGER NOT NULL,
                 unix_ms    INTEGER NOT NULL,
                 kind       TEXT    NOT NULL,
                 elevator   INTEGER,
                 floor      INTEGER NOT NULL,
                 from_floor INTEGER,
                 value      INTEGER
             );
             CREATE TABLE IF NOT EXISTS calls (
                 floor        INTEGER NOT NULL,
                 elevator     INTEGER NOT NULL,
                 placed_ms    INTEGER NOT NULL,
                 estimated_ms INTEGER NOT NULL,
                 arrived_ms   INTEGER,
                 released_ms  INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO events \
                 (time_ms, unix_ms, kind, elevator, floor, from_floor, value) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.time_ms as i64,
                    row.unix_ms,
                    row.kind,
                    row.elevator,
                    row.floor,
                    row.from_floor,
                    row.value.map(|v| v as i64),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_call(&mut self, row: &CallRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO calls \
             (floor, elevator, placed_ms, estimated_ms, arrived_ms, released_ms) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.floor,
                row.elevator,
                row.placed_ms as i64,
                row.estimated_ms as i64,
                row.arrived_ms.map(|v| v as i64),
                row.released_ms as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
