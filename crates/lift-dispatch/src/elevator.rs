//! Per-elevator state and movement state machine.

use lift_core::{ElevatorId, FloorId, SimTime};

use crate::ElevatorError;

/// Where an elevator is in its move/dwell cycle.
///
/// ```text
/// Idle ──begin_move──▶ Moving ──arrive──▶ Dwelling ──finish_dwell──▶ Idle
///                        ▲                   │
///                        └────begin_move─────┘
/// ```
///
/// A queued move may start while the previous dwell is still open (both are
/// due at the same instant); the stale dwell end then leaves the phase alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// At rest at `current_floor` with doors closed.
    #[default]
    Idle,
    /// Travelling; `current_floor` still reports the departure floor.
    Moving {
        from:       FloorId,
        to:         FloorId,
        arrives_at: SimTime,
    },
    /// Doors open at `floor` until `until`.
    Dwelling {
        floor: FloorId,
        until: SimTime,
    },
}

/// One physical trip produced by [`Elevator::begin_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveLeg {
    pub elevator:    ElevatorId,
    pub from:        FloorId,
    pub to:          FloorId,
    pub start:       SimTime,
    pub duration_ms: u64,
}

impl MoveLeg {
    #[inline]
    pub fn arrives_at(&self) -> SimTime {
        self.start + self.duration_ms
    }
}

/// A single elevator cab.
///
/// `destination` and `available_at` belong to the dispatcher (they describe
/// commitments); `current_floor` and `phase` belong to the state machine
/// (they describe physical reality).  The two views agree whenever the cab
/// is idle with nothing queued.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Elevator {
    id:            ElevatorId,
    current_floor: FloorId,
    destination:   FloorId,
    available_at:  SimTime,
    phase:         Phase,
}

impl Elevator {
    /// A cab idle on the ground floor, free from `now`.
    pub fn new(id: ElevatorId, now: SimTime) -> Self {
        Self {
            id,
            current_floor: FloorId::GROUND,
            destination:   FloorId::GROUND,
            available_at:  now,
            phase:         Phase::Idle,
        }
    }

    #[inline]
    pub fn id(&self) -> ElevatorId {
        self.id
    }

    /// The floor the cab occupies (departure floor while moving).
    #[inline]
    pub fn current_floor(&self) -> FloorId {
        self.current_floor
    }

    /// The last floor this cab was assigned.
    #[inline]
    pub fn destination(&self) -> FloorId {
        self.destination
    }

    /// When the cab finishes everything it has been committed to.
    #[inline]
    pub fn available_at(&self) -> SimTime {
        self.available_at
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self.phase, Phase::Moving { .. })
    }

    /// Milliseconds until the cab is free, 0 if it already is.
    #[inline]
    pub fn waiting_ms(&self, now: SimTime) -> u64 {
        self.available_at.saturating_since(now)
    }

    // ── Dispatcher-owned commitments ──────────────────────────────────────

    pub(crate) fn commit(&mut self, destination: FloorId, available_at: SimTime) {
        debug_assert!(available_at >= self.available_at);
        self.destination = destination;
        self.available_at = available_at;
    }

    // ── State machine ─────────────────────────────────────────────────────

    /// Start travelling to `target`.
    ///
    /// Allowed from `Idle` and `Dwelling`.  Travel time is measured from the
    /// cab's physical floor, not from its committed destination.
    pub fn begin_move(
        &mut self,
        target:              FloorId,
        now:                 SimTime,
        travel_ms_per_floor: u64,
    ) -> Result<MoveLeg, ElevatorError> {
        if let Phase::Moving { arrives_at, .. } = self.phase {
            return Err(ElevatorError::InTransit { elevator: self.id, arrives_at });
        }
        let from = self.current_floor;
        let duration_ms = from.distance(target) as u64 * travel_ms_per_floor;
        let leg = MoveLeg {
            elevator: self.id,
            from,
            to: target,
            start: now,
            duration_ms,
        };
        self.phase = Phase::Moving {
            from,
            to: target,
            arrives_at: leg.arrives_at(),
        };
        Ok(leg)
    }

    /// Complete the current trip: the cab is now at its target with doors
    /// open until `now + dwell_ms`.  Returns the floor reached.
    pub fn arrive(&mut self, now: SimTime, dwell_ms: u64) -> Result<FloorId, ElevatorError> {
        let Phase::Moving { to, .. } = self.phase else {
            return Err(ElevatorError::NotMoving(self.id));
        };
        self.current_floor = to;
        self.phase = Phase::Dwelling { floor: to, until: now + dwell_ms };
        Ok(to)
    }

    /// Close the doors at `floor`.
    ///
    /// Returns `false` (and changes nothing) when the cab has already left
    /// `floor` for a queued move.
    pub fn finish_dwell(&mut self, floor: FloorId) -> bool {
        match self.phase {
            Phase::Dwelling { floor: f, .. } if f == floor => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}
