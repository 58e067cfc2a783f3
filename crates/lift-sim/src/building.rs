//! The `Building` struct and its event loop.

use lift_core::{BuildingConfig, ElevatorId, FloorId, SimTime};
use lift_dispatch::{
    DispatchError, Dispatcher, Elevator, ElevatorError, FloorRegistry, MoveAction, ScheduledMove,
};
use lift_schedule::Scheduler;

use crate::{BuildingBuilder, BuildingObserver, EngineEvent, SimResult};

// ── Internal events ───────────────────────────────────────────────────────────

/// Work queued for a future instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SimEvent {
    /// A scripted call arrives.
    Call(FloorId),
    /// A queued move may start.
    MoveDue { elevator: ElevatorId, to: FloorId },
    /// A cab reaches the end of its current trip.
    Arrival { elevator: ElevatorId },
    /// A cab's doors close at `floor`; the floor's call is served.
    DwellEnd { elevator: ElevatorId, floor: FloorId },
    /// Countdown display update for `floor`.
    Countdown { floor: FloorId, seconds_remaining: u64 },
}

// ── Building ──────────────────────────────────────────────────────────────────

/// The engine's composition root: floors, elevators, dispatcher and clock.
///
/// A `Building` is an ordinary owned value.  Create one per simulated
/// building with [`Building::new`] or [`BuildingBuilder`]; there is no
/// global registry.
///
/// All state mutation happens inside [`handle_call`][Self::handle_call] and
/// [`advance_to`][Self::advance_to], one event at a time.
pub struct Building {
    pub(crate) config:     BuildingConfig,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) elevators:  Vec<Elevator>,
    pub(crate) floors:     FloorRegistry,
    pub(crate) scheduler:  Scheduler<SimEvent>,
}

impl Building {
    /// Build a building from `config` with the clock at zero.
    ///
    /// # Errors
    ///
    /// A configuration error for zero floors or zero elevators.
    pub fn new(config: BuildingConfig) -> SimResult<Self> {
        BuildingBuilder::new(config).build()
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn now(&self) -> SimTime {
        self.scheduler.now()
    }

    pub fn config(&self) -> &BuildingConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> SimResult<&Elevator> {
        self.elevators
            .get(id.index())
            .ok_or_else(|| DispatchError::UnknownElevator(id).into())
    }

    pub fn floors(&self) -> &FloorRegistry {
        &self.floors
    }

    /// Wall-clock Unix milliseconds for a simulation timestamp.
    pub fn unix_ms(&self, time: SimTime) -> i64 {
        self.scheduler.clock().unix_ms(time)
    }

    /// Number of events waiting to fire.
    pub fn pending_events(&self) -> usize {
        self.scheduler.pending()
    }

    /// Time of the next queued event.
    pub fn next_event_time(&self) -> Option<SimTime> {
        self.scheduler.next_event_time()
    }

    /// `true` when nothing is queued and no floor is waiting.
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle() && self.floors.pending_count() == 0
    }

    // ── Calls ─────────────────────────────────────────────────────────────

    /// A call arrives at `floor` now.
    ///
    /// Returns the dispatcher's decision, or `None` if `floor` already had a
    /// pending call and this one was ignored.
    ///
    /// # Errors
    ///
    /// `InvalidFloor` if `floor` is out of range.  Building state is left
    /// untouched.
    pub fn handle_call<O: BuildingObserver>(
        &mut self,
        floor:    FloorId,
        observer: &mut O,
    ) -> SimResult<Option<ScheduledMove>> {
        let now = self.now();
        if !self.floors.place_call(floor)? {
            log::debug!("{floor}: call ignored, already pending");
            observer.on_event(&EngineEvent::CallIgnored { floor, at: now });
            return Ok(None);
        }
        observer.on_event(&EngineEvent::CallPlaced { floor, at: now });

        let scheduled = match self.dispatcher.dispatch(floor, &mut self.elevators, &self.floors, now) {
            Ok(m) => m,
            Err(e) => {
                self.floors.release(floor)?;
                return Err(e.into());
            }
        };
        observer.on_event(&EngineEvent::ElevatorAssigned {
            elevator: scheduled.elevator,
            floor,
            at: now,
            wait_ms: scheduled.wait_ms,
            eta_ms: scheduled.eta_ms,
        });

        match scheduled.action {
            MoveAction::Now => self.start_move(scheduled.elevator, floor, observer)?,
            MoveAction::After(_) => {
                self.scheduler.schedule_at(
                    scheduled.starts_at(now),
                    SimEvent::MoveDue { elevator: scheduled.elevator, to: floor },
                )?;
            }
        }

        if self.config.countdown {
            self.start_countdown(floor, scheduled.wait_ms, observer);
        }

        Ok(Some(scheduled))
    }

    /// Queue a call at `floor` for time `at`.
    ///
    /// # Errors
    ///
    /// `InvalidFloor` if `floor` is out of range; `PastEvent` if `at` is
    /// before the current time.
    pub fn schedule_call(&mut self, at: SimTime, floor: FloorId) -> SimResult<()> {
        self.floors.check(floor)?;
        self.scheduler.schedule_at(at, SimEvent::Call(floor))?;
        Ok(())
    }

    // ── Time ──────────────────────────────────────────────────────────────

    /// Fire every queued event due at or before `until`, then move the clock
    /// to `until`.  Returns the number of events fired.
    pub fn advance_to<O: BuildingObserver>(&mut self, until: SimTime, observer: &mut O) -> SimResult<usize> {
        let mut fired = 0;
        while let Some((_, event)) = self.scheduler.pop_due(until) {
            self.fire(event, observer)?;
            fired += 1;
        }
        self.scheduler.advance_to(until);
        Ok(fired)
    }

    /// Like [`advance_to`][Self::advance_to] with a relative step.
    pub fn advance_by<O: BuildingObserver>(&mut self, ms: u64, observer: &mut O) -> SimResult<usize> {
        let until = self.now() + ms;
        self.advance_to(until, observer)
    }

    /// Fire events until the queue is empty.  Returns the final time.
    pub fn run_until_idle<O: BuildingObserver>(&mut self, observer: &mut O) -> SimResult<SimTime> {
        while let Some(next) = self.scheduler.next_event_time() {
            self.advance_to(next, observer)?;
        }
        Ok(self.now())
    }

    /// [`run_until_idle`][Self::run_until_idle], then notify
    /// [`BuildingObserver::on_sim_end`].
    pub fn run<O: BuildingObserver>(&mut self, observer: &mut O) -> SimResult<SimTime> {
        let end = self.run_until_idle(observer)?;
        observer.on_sim_end(end);
        Ok(end)
    }

    // ── Event handling ────────────────────────────────────────────────────

    fn fire<O: BuildingObserver>(&mut self, event: SimEvent, observer: &mut O) -> SimResult<()> {
        log::trace!("{}: {event:?}", self.now());
        match event {
            SimEvent::Call(floor) => {
                self.handle_call(floor, observer)?;
            }
            SimEvent::MoveDue { elevator, to } => self.start_move(elevator, to, observer)?,
            SimEvent::Arrival { elevator } => self.arrive(elevator, observer)?,
            SimEvent::DwellEnd { elevator, floor } => {
                let now = self.now();
                let cab = self.cab_mut(elevator)?;
                cab.finish_dwell(floor);
                self.floors.release(floor)?;
                observer.on_event(&EngineEvent::FloorReleased { floor, at: now });
            }
            SimEvent::Countdown { floor, seconds_remaining } => {
                observer.on_event(&EngineEvent::CountdownTick {
                    floor,
                    at: self.now(),
                    seconds_remaining,
                });
            }
        }
        Ok(())
    }

    fn start_move<O: BuildingObserver>(
        &mut self,
        elevator: ElevatorId,
        to:       FloorId,
        observer: &mut O,
    ) -> SimResult<()> {
        let now = self.now();
        let travel = self.dispatcher.travel_ms_per_floor;
        let started = self.cab_mut(elevator)?.begin_move(to, now, travel);
        match started {
            Ok(leg) => {
                self.scheduler
                    .schedule_at(leg.arrives_at(), SimEvent::Arrival { elevator })?;
                observer.on_event(&EngineEvent::ElevatorMoveStarted {
                    elevator,
                    from: leg.from,
                    to,
                    start: now,
                    duration_ms: leg.duration_ms,
                });
                Ok(())
            }
            // Only reachable when a move comes due in the same instant the
            // previous trip ends, before its Arrival has fired.
            Err(ElevatorError::InTransit { arrives_at, .. }) => {
                log::warn!("{elevator} still in transit; move to {to} requeued at {arrives_at}");
                self.scheduler
                    .schedule_at(arrives_at, SimEvent::MoveDue { elevator, to })?;
                Ok(())
            }
            Err(e) => Err(DispatchError::from(e).into()),
        }
    }

    fn arrive<O: BuildingObserver>(&mut self, elevator: ElevatorId, observer: &mut O) -> SimResult<()> {
        let now = self.now();
        let dwell = self.dispatcher.dwell_ms;
        let floor = self.cab_mut(elevator)?.arrive(now, dwell).map_err(DispatchError::from)?;
        self.scheduler
            .schedule_at(now + dwell, SimEvent::DwellEnd { elevator, floor })?;
        observer.on_event(&EngineEvent::ElevatorArrived {
            elevator,
            floor,
            dwell_start: now,
            dwell_ms: dwell,
        });
        Ok(())
    }

    /// Show `floor(wait)` now, then count down once a second so that `0`
    /// lands when the reported wait runs out.
    fn start_countdown<O: BuildingObserver>(&mut self, floor: FloorId, wait_ms: u64, observer: &mut O) {
        let now = self.now();
        let whole_secs = wait_ms / 1000;
        let first_step = wait_ms % 1000;
        observer.on_event(&EngineEvent::CountdownTick {
            floor,
            at: now,
            seconds_remaining: whole_secs,
        });
        for k in 1..=whole_secs {
            self.scheduler.schedule_in(
                first_step + k * 1000,
                SimEvent::Countdown { floor, seconds_remaining: whole_secs - k },
            );
        }
    }

    fn cab_mut(&mut self, id: ElevatorId) -> SimResult<&mut Elevator> {
        self.elevators
            .get_mut(id.index())
            .ok_or_else(|| DispatchError::UnknownElevator(id).into())
    }
}
