//! `lift-output` — event and call-log writers for the rust_lift engine.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature   | Backend     | Files created                  |
//! |-----------|-------------|--------------------------------|
//! | *(none)*  | CSV         | `events.csv`, `calls.csv`      |
//! | `sqlite`  | SQLite      | `events.db`                    |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`BuildingOutputObserver`], which implements `lift_sim::BuildingObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{BuildingOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = BuildingOutputObserver::new(writer, &building);
//! building.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::BuildingOutputObserver;
pub use row::{CallRow, EventRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
