//! `lift-dispatch` — the scheduling core: who answers which call, and when.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`elevator`]   | `Elevator`, `Phase`, `MoveLeg` — per-cab state machine       |
//! | [`floor`]      | `Floor`, `FloorRegistry` — pending-call bookkeeping          |
//! | [`dispatcher`] | `Dispatcher`, `ScheduledMove`, `MoveAction`                  |
//! | [`error`]      | `DispatchError`, `ElevatorError`, `DispatchResult<T>`        |
//!
//! # Cost model
//!
//! ```text
//! cost(e) = |e.destination - floor| * travel_ms_per_floor
//!         + dwell_ms
//!         + max(0, e.available_at - now)
//! ```
//!
//! The cheapest elevator wins; ties go to the lowest `ElevatorId`.  The chosen
//! elevator's `destination` is updated immediately, before it physically
//! moves, so later calls are scored against where it is *committed* to be.
//!
//! Nothing in this crate touches a clock or a queue: the dispatcher returns a
//! [`ScheduledMove`] and the caller (lift-sim's `Building`) turns it into
//! timed events.

pub mod dispatcher;
pub mod elevator;
pub mod error;
pub mod floor;

#[cfg(test)]
mod tests;

pub use dispatcher::{Dispatcher, MoveAction, ScheduledMove};
pub use elevator::{Elevator, MoveLeg, Phase};
pub use error::{DispatchError, DispatchResult, ElevatorError};
pub use floor::{Floor, FloorRegistry};
