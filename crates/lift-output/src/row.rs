//! Plain data row types written by output backends.

use lift_core::SimTime;
use lift_sim::EngineEvent;

/// One emitted engine event, flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub time_ms:    u64,
    pub unix_ms:    i64,
    /// [`EngineEvent::kind`] label.
    pub kind:       &'static str,
    pub elevator:   Option<u32>,
    /// Call floor, or the target floor for moves.
    pub floor:      u32,
    /// Departure floor; moves only.
    pub from_floor: Option<u32>,
    /// Kind-dependent figure: wait shown at the floor for `assigned`, trip length for
    /// `move_started`, dwell for `arrived` (all ms), seconds left for
    /// `countdown`.
    pub value:      Option<u64>,
}

impl EventRow {
    pub fn from_event(event: &EngineEvent, unix_ms: i64) -> Self {
        let (from_floor, value) = match *event {
            EngineEvent::ElevatorAssigned { wait_ms, .. } => (None, Some(wait_ms)),
            EngineEvent::ElevatorMoveStarted { from, duration_ms, .. } => {
                (Some(from.0), Some(duration_ms))
            }
            EngineEvent::ElevatorArrived { dwell_ms, .. } => (None, Some(dwell_ms)),
            EngineEvent::CountdownTick { seconds_remaining, .. } => (None, Some(seconds_remaining)),
            EngineEvent::CallPlaced { .. }
            | EngineEvent::CallIgnored { .. }
            | EngineEvent::FloorReleased { .. } => (None, None),
        };
        Self {
            time_ms: event.at().0,
            unix_ms,
            kind: event.kind(),
            elevator: event.elevator().map(|e| e.0),
            floor: event.floor().0,
            from_floor,
            value,
        }
    }
}

/// The life of one accepted call, written when its floor is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallRow {
    pub floor:           u32,
    pub elevator:        u32,
    pub placed_ms:       u64,
    /// Arrival estimate made at assignment, relative to `placed_ms`.
    pub estimated_ms:    u64,
    /// Doors opened; `None` if the cab never reported arriving.
    pub arrived_ms:      Option<u64>,
    pub released_ms:     u64,
}

impl CallRow {
    /// Actual call-to-doors-open wait.
    pub fn actual_wait_ms(&self) -> Option<u64> {
        self.arrived_ms.map(|a| SimTime(a).saturating_since(SimTime(self.placed_ms)))
    }
}
