//! Events the engine emits to its presentation layer.

use lift_core::{ElevatorId, FloorId, SimTime};

/// One observable change in the building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// A call was accepted at `floor`.
    CallPlaced { floor: FloorId, at: SimTime },

    /// A call at `floor` was dropped because one is already pending.
    CallIgnored { floor: FloorId, at: SimTime },

    /// `elevator` was committed to `floor`.  `wait_ms` is the wait shown
    /// at the floor (travel, or queueing delay for a busy cab); the cab is
    /// expected there after `eta_ms`.
    ElevatorAssigned {
        elevator: ElevatorId,
        floor:    FloorId,
        at:       SimTime,
        wait_ms:  u64,
        eta_ms:   u64,
    },

    ElevatorMoveStarted {
        elevator:    ElevatorId,
        from:        FloorId,
        to:          FloorId,
        start:       SimTime,
        duration_ms: u64,
    },

    /// Doors open at `floor` from `dwell_start` for `dwell_ms`.
    ElevatorArrived {
        elevator:    ElevatorId,
        floor:       FloorId,
        dwell_start: SimTime,
        dwell_ms:    u64,
    },

    /// The call at `floor` is served and the floor accepts calls again.
    FloorReleased { floor: FloorId, at: SimTime },

    /// Whole seconds left until the cab reaches `floor`.
    CountdownTick {
        floor:             FloorId,
        at:                SimTime,
        seconds_remaining: u64,
    },
}

impl EngineEvent {
    /// When the event happened.
    pub fn at(&self) -> SimTime {
        match *self {
            EngineEvent::CallPlaced { at, .. }
            | EngineEvent::CallIgnored { at, .. }
            | EngineEvent::ElevatorAssigned { at, .. }
            | EngineEvent::FloorReleased { at, .. }
            | EngineEvent::CountdownTick { at, .. } => at,
            EngineEvent::ElevatorMoveStarted { start, .. } => start,
            EngineEvent::ElevatorArrived { dwell_start, .. } => dwell_start,
        }
    }

    /// The floor the event concerns (the target floor for moves).
    pub fn floor(&self) -> FloorId {
        match *self {
            EngineEvent::CallPlaced { floor, .. }
            | EngineEvent::CallIgnored { floor, .. }
            | EngineEvent::ElevatorAssigned { floor, .. }
            | EngineEvent::ElevatorArrived { floor, .. }
            | EngineEvent::FloorReleased { floor, .. }
            | EngineEvent::CountdownTick { floor, .. } => floor,
            EngineEvent::ElevatorMoveStarted { to, .. } => to,
        }
    }

    /// The elevator involved, if any.
    pub fn elevator(&self) -> Option<ElevatorId> {
        match *self {
            EngineEvent::ElevatorAssigned { elevator, .. }
            | EngineEvent::ElevatorMoveStarted { elevator, .. }
            | EngineEvent::ElevatorArrived { elevator, .. } => Some(elevator),
            _ => None,
        }
    }

    /// Short lowercase label, useful for CSV/SQLite column values.
    pub fn kind(&self) -> &'static str {
        match self {
            EngineEvent::CallPlaced { .. }          => "call_placed",
            EngineEvent::CallIgnored { .. }         => "call_ignored",
            EngineEvent::ElevatorAssigned { .. }    => "assigned",
            EngineEvent::ElevatorMoveStarted { .. } => "move_started",
            EngineEvent::ElevatorArrived { .. }     => "arrived",
            EngineEvent::FloorReleased { .. }       => "released",
            EngineEvent::CountdownTick { .. }       => "countdown",
        }
    }
}

impl std::fmt::Display for EngineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            EngineEvent::CallPlaced { floor, at } => write!(f, "[{at}] call at {floor}"),
            EngineEvent::CallIgnored { floor, at } => write!(f, "[{at}] call at {floor} ignored (pending)"),
            EngineEvent::ElevatorAssigned { elevator, floor, at, wait_ms, eta_ms } => {
                write!(f, "[{at}] {elevator} assigned to {floor}, wait {wait_ms} ms, eta {eta_ms} ms")
            }
            EngineEvent::ElevatorMoveStarted { elevator, from, to, start, duration_ms } => {
                write!(f, "[{start}] {elevator} {from} → {to} ({duration_ms} ms)")
            }
            EngineEvent::ElevatorArrived { elevator, floor, dwell_start, dwell_ms } => {
                write!(f, "[{dwell_start}] {elevator} arrived at {floor}, doors open {dwell_ms} ms")
            }
            EngineEvent::FloorReleased { floor, at } => write!(f, "[{at}] {floor} released"),
            EngineEvent::CountdownTick { floor, at, seconds_remaining } => {
                write!(f, "[{at}] {floor}: {seconds_remaining}")
            }
        }
    }
}
