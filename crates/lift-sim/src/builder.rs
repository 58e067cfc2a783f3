//! Fluent builder for constructing a [`Building`].

use lift_core::{BuildingConfig, ElevatorId, SimClock, SimTime};
use lift_dispatch::{Dispatcher, Elevator, FloorRegistry};
use lift_schedule::{Call, Scheduler};

use crate::{Building, SimResult};

/// Fluent builder for [`Building`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                        |
/// |---------------------|--------------------------------|
/// | `.start_unix_ms(t)` | `0` (sim time = Unix time)     |
/// | `.calls(v)`         | No scripted calls              |
///
/// # Example
///
/// ```rust,ignore
/// let calls = load_calls_csv(Path::new("calls.csv"))?;
/// let mut building = BuildingBuilder::new(BuildingConfig::preset("building1")?)
///     .calls(calls)
///     .build()?;
/// building.run(&mut NoopObserver)?;
/// ```
pub struct BuildingBuilder {
    config:        BuildingConfig,
    start_unix_ms: i64,
    calls:         Vec<Call>,
}

impl BuildingBuilder {
    pub fn new(config: BuildingConfig) -> Self {
        Self {
            config,
            start_unix_ms: 0,
            calls: Vec::new(),
        }
    }

    /// Unix timestamp (ms) that simulation time zero corresponds to.
    pub fn start_unix_ms(mut self, start_unix_ms: i64) -> Self {
        self.start_unix_ms = start_unix_ms;
        self
    }

    /// Pre-schedule calls.  Each is queued at its `requested_at` time.
    pub fn calls(mut self, calls: Vec<Call>) -> Self {
        self.calls = calls;
        self
    }

    /// Validate the configuration, create floors and elevators, and queue
    /// any scripted calls.
    ///
    /// # Errors
    ///
    /// A configuration error for zero floors/elevators, or `InvalidFloor`
    /// for a scripted call outside the building.
    pub fn build(self) -> SimResult<Building> {
        self.config.validate()?;

        let elevators = (0..self.config.num_elevators)
            .map(|i| Elevator::new(ElevatorId(i), SimTime::ZERO))
            .collect();

        let mut building = Building {
            dispatcher: Dispatcher::from_config(&self.config),
            floors:     FloorRegistry::new(self.config.num_floors),
            scheduler:  Scheduler::new(SimClock::new(self.start_unix_ms)),
            elevators,
            config:     self.config,
        };

        for call in self.calls {
            building.schedule_call(call.requested_at, call.floor)?;
        }

        log::debug!(
            "building {:?}: {} floors, {} elevators, {} scripted calls",
            building.config.name,
            building.config.num_floors,
            building.config.num_elevators,
            building.pending_events(),
        );
        Ok(building)
    }
}
