//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CallRow, EventRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never reach the building: the observer stores them for
/// [`BuildingOutputObserver::take_error`][crate::BuildingOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of event rows.
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()>;

    /// Write one completed call.
    fn write_call(&mut self, row: &CallRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
