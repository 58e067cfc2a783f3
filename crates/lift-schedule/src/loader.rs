//! CSV call-script loader.
//!
//! # CSV format
//!
//! One row per call.  Rows need not be sorted.
//!
//! ```csv
//! requested_at_ms,floor
//! 0,5
//! 0,2
//! 1500,9
//! ```
//!
//! Floors are not range-checked here; the building rejects out-of-range
//! floors with `InvalidFloor` when the call is scheduled.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{FloorId, SimTime};

use crate::ScheduleError;

/// A logical request for elevator service.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Call {
    pub floor:        FloorId,
    pub requested_at: SimTime,
}

impl Call {
    pub fn new(floor: FloorId, requested_at: SimTime) -> Self {
        Self { floor, requested_at }
    }
}

#[derive(Deserialize)]
struct CallRecord {
    requested_at_ms: u64,
    floor:           u32,
}

/// Load a call script from a CSV file.
///
/// Returns calls sorted by `requested_at`; calls with equal timestamps keep
/// their file order.
pub fn load_calls_csv(path: &Path) -> Result<Vec<Call>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_calls_reader(file)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
pub fn load_calls_reader<R: Read>(reader: R) -> Result<Vec<Call>, ScheduleError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut calls: Vec<Call> = csv_reader
        .deserialize::<CallRecord>()
        .map(|result| {
            let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
            Ok(Call::new(FloorId(row.floor), SimTime(row.requested_at_ms)))
        })
        .collect::<Result<_, ScheduleError>>()?;

    // Stable: equal timestamps keep file order.
    calls.sort_by_key(|c| c.requested_at);
    log::debug!("loaded {} calls", calls.len());
    Ok(calls)
}
