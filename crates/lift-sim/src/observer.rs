//! Observer trait through which the building reports what it does.

use std::collections::HashMap;

use lift_core::{FloorId, SimTime};

use crate::EngineEvent;

/// Callbacks invoked by [`Building`][crate::Building] as events happen.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — console printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl BuildingObserver for Printer {
///     fn on_event(&mut self, event: &EngineEvent) {
///         println!("{event}");
///     }
/// }
/// ```
pub trait BuildingObserver {
    /// Called for every emitted event, in the order they happen.
    fn on_event(&mut self, _event: &EngineEvent) {}

    /// Called once by [`Building::run`][crate::Building::run] after the
    /// event queue has drained.
    fn on_sim_end(&mut self, _final_time: SimTime) {}
}

/// A [`BuildingObserver`] that does nothing.
pub struct NoopObserver;

impl BuildingObserver for NoopObserver {}

/// Records every event in memory.
#[derive(Default, Debug)]
pub struct EventLog {
    pub events: Vec<EngineEvent>,
    pub ended_at: Option<SimTime>,
}

impl EventLog {
    /// Events of one kind (see [`EngineEvent::kind`]), in order.
    pub fn of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a EngineEvent> + 'a {
        self.events.iter().filter(move |e| e.kind() == kind)
    }

    pub fn count(&self, kind: &str) -> usize {
        self.of_kind(kind).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.ended_at = None;
    }
}

impl BuildingObserver for EventLog {
    fn on_event(&mut self, event: &EngineEvent) {
        self.events.push(*event);
    }

    fn on_sim_end(&mut self, final_time: SimTime) {
        self.ended_at = Some(final_time);
    }
}

/// Aggregate service figures: how many calls, and how long passengers
/// waited from call to doors opening.
#[derive(Default, Debug)]
pub struct ServiceStats {
    pub calls_placed:  usize,
    pub calls_ignored: usize,
    pub served:        usize,
    pub total_wait_ms: u64,
    pub max_wait_ms:   u64,
    placed_at:         HashMap<FloorId, SimTime>,
}

impl ServiceStats {
    /// Mean call-to-arrival wait over served calls, in milliseconds.
    pub fn mean_wait_ms(&self) -> Option<f64> {
        (self.served > 0).then(|| self.total_wait_ms as f64 / self.served as f64)
    }

    /// Calls placed but not yet reached by a cab.
    pub fn outstanding(&self) -> usize {
        self.placed_at.len()
    }
}

impl BuildingObserver for ServiceStats {
    fn on_event(&mut self, event: &EngineEvent) {
        match *event {
            EngineEvent::CallPlaced { floor, at } => {
                self.calls_placed += 1;
                self.placed_at.insert(floor, at);
            }
            EngineEvent::CallIgnored { .. } => self.calls_ignored += 1,
            EngineEvent::ElevatorArrived { floor, dwell_start, .. } => {
                if let Some(placed) = self.placed_at.remove(&floor) {
                    let wait = dwell_start.saturating_since(placed);
                    self.served += 1;
                    self.total_wait_ms += wait;
                    self.max_wait_ms = self.max_wait_ms.max(wait);
                }
            }
            _ => {}
        }
    }
}
