//! `lift-schedule` — virtual clock, timed event queue, and call scripts.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`event_queue`] | `EventQueue<E>` (`BTreeMap<SimTime, VecDeque<E>>`)      |
//! | [`scheduler`]   | `Scheduler<E>` — clock + queue, `schedule_at`/`pop_due` |
//! | [`loader`]      | `Call`, `load_calls_csv`, `load_calls_reader`           |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                    |
//!
//! # Event model (summary)
//!
//! Instead of nesting timer callbacks (move → bell → release), the engine
//! enqueues typed events at absolute timestamps:
//!
//! ```text
//! scheduler.schedule_at(now + travel, Arrival { .. })
//! while let Some((t, ev)) = scheduler.pop_due(until) { handle(t, ev) }
//! ```
//!
//! Events sharing a timestamp fire in insertion order, and `pop_due`
//! advances the clock to each event's time before returning it.

pub mod error;
pub mod event_queue;
pub mod loader;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use event_queue::EventQueue;
pub use loader::{Call, load_calls_csv, load_calls_reader};
pub use scheduler::Scheduler;
