//! `BuildingOutputObserver<W>` — bridges `BuildingObserver` to an `OutputWriter`.

use std::collections::HashMap;

use lift_core::{FloorId, SimTime};
use lift_sim::{Building, BuildingObserver, EngineEvent};

use crate::row::{CallRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Event rows buffered before a batch write.
const BATCH_ROWS: usize = 256;

#[derive(Debug, Clone, Copy)]
struct OpenCall {
    placed:    SimTime,
    elevator:  u32,
    estimated: u64,
    arrived:   Option<SimTime>,
}

/// A [`BuildingObserver`] that writes every event, plus one row per served
/// call, to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `building.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct BuildingOutputObserver<W: OutputWriter> {
    writer:        W,
    start_unix_ms: i64,
    pending_rows:  Vec<EventRow>,
    open_calls:    HashMap<FloorId, OpenCall>,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> BuildingOutputObserver<W> {
    /// Create an observer backed by `writer`, using `building`'s clock for
    /// wall-clock conversion.
    pub fn new(writer: W, building: &Building) -> Self {
        Self::with_start(writer, building.unix_ms(SimTime::ZERO))
    }

    /// Create an observer whose simulation time zero is `start_unix_ms`.
    pub fn with_start(writer: W, start_unix_ms: i64) -> Self {
        Self {
            writer,
            start_unix_ms,
            pending_rows: Vec::with_capacity(BATCH_ROWS),
            open_calls:   HashMap::new(),
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after `building.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Write out buffered event rows.
    pub fn flush(&mut self) {
        if self.pending_rows.is_empty() {
            return;
        }
        let result = self.writer.write_events(&self.pending_rows);
        self.pending_rows.clear();
        self.store_err(result);
    }

    fn track_call(&mut self, event: &EngineEvent) {
        match *event {
            EngineEvent::CallPlaced { floor, at } => {
                self.open_calls.insert(floor, OpenCall {
                    placed:    at,
                    elevator:  0,
                    estimated: 0,
                    arrived:   None,
                });
            }
            EngineEvent::ElevatorAssigned { elevator, floor, eta_ms, .. } => {
                if let Some(call) = self.open_calls.get_mut(&floor) {
                    call.elevator = elevator.0;
                    call.estimated = eta_ms;
                }
            }
            EngineEvent::ElevatorArrived { floor, dwell_start, .. } => {
                if let Some(call) = self.open_calls.get_mut(&floor) {
                    call.arrived.get_or_insert(dwell_start);
                }
            }
            EngineEvent::FloorReleased { floor, at } => match self.open_calls.remove(&floor) {
                Some(call) => {
                    let row = CallRow {
                        floor:        floor.0,
                        elevator:     call.elevator,
                        placed_ms:    call.placed.0,
                        estimated_ms: call.estimated,
                        arrived_ms:   call.arrived.map(|t| t.0),
                        released_ms:  at.0,
                    };
                    let result = self.writer.write_call(&row);
                    self.store_err(result);
                }
                None => log::warn!("{floor} released with no open call"),
            },
            _ => {}
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                log::error!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> BuildingObserver for BuildingOutputObserver<W> {
    fn on_event(&mut self, event: &EngineEvent) {
        let unix_ms = self.start_unix_ms + event.at().0 as i64;
        self.pending_rows.push(EventRow::from_event(event, unix_ms));
        if self.pending_rows.len() >= BATCH_ROWS {
            self.flush();
        }
        self.track_call(event);
    }

    fn on_sim_end(&mut self, _final_time: SimTime) {
        self.flush();
        if !self.open_calls.is_empty() {
            log::warn!("{} calls still open at end of run", self.open_calls.len());
        }
        let result = self.writer.finish();
        self.store_err(result);
    }
}
