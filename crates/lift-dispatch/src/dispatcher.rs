//! Cost-based elevator selection and commitment.

use lift_core::{BuildingConfig, ElevatorId, FloorId, SimTime};

use crate::{DispatchError, DispatchResult, Elevator, FloorRegistry};

/// When the chosen elevator should start moving.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveAction {
    /// The elevator is free: start the move right away.
    Now,
    /// The elevator is busy: start once its current commitment ends, this
    /// many milliseconds from now.
    After(u64),
}

impl MoveAction {
    #[inline]
    pub fn delay_ms(self) -> u64 {
        match self {
            MoveAction::Now => 0,
            MoveAction::After(ms) => ms,
        }
    }
}

/// The dispatcher's decision for one call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduledMove {
    pub elevator:     ElevatorId,
    /// The elevator's committed destination before this call (where the
    /// move is estimated to depart from).
    pub origin:       FloorId,
    pub to:           FloorId,
    pub action:       MoveAction,
    /// The winning cost.
    pub cost_ms:      u64,
    /// Estimated travel time from `origin` to `to`.
    pub travel_ms:    u64,
    /// Wait reported to the calling floor: the travel time when the
    /// elevator leaves now, the queueing delay when the move is deferred.
    pub wait_ms:      u64,
    /// Time from the call until the cab reaches `to` (delay plus travel).
    pub eta_ms:       u64,
    /// The elevator's new availability after this commitment.
    pub available_at: SimTime,
}

impl ScheduledMove {
    /// `wait_ms` in (fractional) seconds, the unit floors count down in.
    #[inline]
    pub fn wait_secs(&self) -> f64 {
        self.wait_ms as f64 / 1000.0
    }

    /// Absolute time the move starts, given the dispatch time.
    #[inline]
    pub fn starts_at(&self, now: SimTime) -> SimTime {
        now + self.action.delay_ms()
    }

    /// Absolute time the cab is expected at `to`, given the dispatch time.
    #[inline]
    pub fn arrives_at(&self, now: SimTime) -> SimTime {
        now + self.eta_ms
    }
}

/// Picks an elevator for each call and updates its commitments.
///
/// Calls are handled one at a time with no lookahead: each call goes to the
/// elevator that can serve *it* soonest given what is already committed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Dispatcher {
    pub travel_ms_per_floor: u64,
    pub dwell_ms:            u64,
}

impl Dispatcher {
    pub fn new(travel_ms_per_floor: u64, dwell_ms: u64) -> Self {
        Self { travel_ms_per_floor, dwell_ms }
    }

    pub fn from_config(config: &BuildingConfig) -> Self {
        Self::new(config.travel_ms_per_floor, config.dwell_ms)
    }

    #[inline]
    pub fn travel_ms(&self, gap: u32) -> u64 {
        gap as u64 * self.travel_ms_per_floor
    }

    /// Cost of sending `elevator` to `floor` at `now`.
    #[inline]
    pub fn cost(&self, elevator: &Elevator, floor: FloorId, now: SimTime) -> u64 {
        self.travel_ms(elevator.destination().distance(floor))
            + self.dwell_ms
            + elevator.waiting_ms(now)
    }

    /// Every elevator's cost for `floor`, in iteration order.  Read-only.
    pub fn estimate(&self, floor: FloorId, elevators: &[Elevator], now: SimTime) -> Vec<(ElevatorId, u64)> {
        elevators
            .iter()
            .map(|e| (e.id(), self.cost(e, floor, now)))
            .collect()
    }

    /// Index and cost of the cheapest elevator; the first one wins ties.
    pub fn select(&self, floor: FloorId, elevators: &[Elevator], now: SimTime) -> DispatchResult<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (i, e) in elevators.iter().enumerate() {
            let cost = self.cost(e, floor, now);
            if best.is_none_or(|(_, c)| cost < c) {
                best = Some((i, cost));
            }
        }
        best.ok_or(DispatchError::NoElevators)
    }

    /// Assign an elevator to the call at `floor`.
    ///
    /// Mutates only the selected elevator: its `destination` becomes `floor`
    /// and its `available_at` grows by this trip's travel plus dwell (from
    /// `now` if it was free, stacked on its current commitment otherwise).
    /// Floor state is the caller's responsibility.
    pub fn dispatch(
        &self,
        floor:     FloorId,
        elevators: &mut [Elevator],
        floors:    &FloorRegistry,
        now:       SimTime,
    ) -> DispatchResult<ScheduledMove> {
        floors.check(floor)?;
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("{floor} costs at {now}: {:?}", self.estimate(floor, elevators, now));
        }
        let (index, cost_ms) = self.select(floor, elevators, now)?;
        let elevator = &mut elevators[index];

        let origin = elevator.destination();
        let travel_ms = self.travel_ms(origin.distance(floor));
        let commitment = travel_ms + self.dwell_ms;

        let (action, available_at) = if now >= elevator.available_at() {
            (MoveAction::Now, now + commitment)
        } else {
            let delay = elevator.available_at() - now;
            (MoveAction::After(delay), elevator.available_at() + commitment)
        };
        elevator.commit(floor, available_at);

        let scheduled = ScheduledMove {
            elevator: elevator.id(),
            origin,
            to: floor,
            action,
            cost_ms,
            travel_ms,
            wait_ms: match action {
                MoveAction::Now => travel_ms,
                MoveAction::After(delay) => delay,
            },
            eta_ms: action.delay_ms() + travel_ms,
            available_at,
        };
        log::debug!(
            "{floor} → {} (cost {cost_ms} ms, {:?}, free at {available_at})",
            scheduled.elevator,
            action,
        );
        Ok(scheduled)
    }
}
