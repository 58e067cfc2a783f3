//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `calls.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CallRow, EventRow, OutputResult};

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes engine output to two CSV files.
pub struct CsvWriter {
    events:   Writer<File>,
    calls:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["time_ms", "unix_ms", "kind", "elevator", "floor", "from_floor", "value"])?;

        let mut calls = Writer::from_path(dir.join("calls.csv"))?;
        calls.write_record(["floor", "elevator", "placed_ms", "estimated_ms", "arrived_ms", "released_ms"])?;

        Ok(Self {
            events,
            calls,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.time_ms.to_string(),
                row.unix_ms.to_string(),
                row.kind.to_string(),
                opt(row.elevator),
                row.floor.to_string(),
                opt(row.from_floor),
                opt(row.value),
            ])?;
        }
        Ok(())
    }

    fn write_call(&mut self, row: &CallRow) -> OutputResult<()> {
        self.calls.write_record(&[
            row.floor.to_string(),
            row.elevator.to_string(),
            row.placed_ms.to_string(),
            row.estimated_ms.to_string(),
            opt(row.arrived_ms),
            row.released_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.calls.flush()?;
        Ok(())
    }
}
