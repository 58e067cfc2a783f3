//! `lift-sim` — the building: calls in, timed elevator events out.
//!
//! # Event loop
//!
//! ```text
//! handle_call(floor)
//!   ① FloorRegistry::place_call   duplicate? emit CallIgnored, stop.
//!   ② Dispatcher::dispatch        pick + commit one elevator.
//!   ③ MoveAction::Now             → begin_move, queue Arrival at +travel
//!      MoveAction::After(d)       → queue MoveDue at +d
//!
//! advance_to(t) fires every queued event with time ≤ t, in order:
//!   MoveDue   → begin_move, queue Arrival            (ElevatorMoveStarted)
//!   Arrival   → arrive, queue DwellEnd at +dwell     (ElevatorArrived)
//!   DwellEnd  → finish_dwell, release the floor      (FloorReleased)
//!   Call      → handle_call                          (scripted calls)
//!   Countdown → CountdownTick                        (optional)
//! ```
//!
//! Every emitted [`EngineEvent`] goes to a [`BuildingObserver`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{BuildingConfig, FloorId};
//! use lift_sim::{Building, EventLog};
//!
//! let mut building = Building::new(BuildingConfig::preset("building1")?)?;
//! let mut log = EventLog::default();
//! building.handle_call(FloorId(5), &mut log)?;
//! building.run(&mut log)?;
//! ```

pub mod builder;
pub mod building;
pub mod error;
pub mod event;
pub mod observer;
pub mod traffic;


pub use builder::BuildingBuilder;
pub use building::Building;
pub use error::{SimError, SimResult};
pub use event::EngineEvent;
pub use observer::{BuildingObserver, EventLog, NoopObserver, ServiceStats};
pub use traffic::TrafficGenerator;
