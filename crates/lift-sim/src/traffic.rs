//! Seeded synthetic call traffic.

use lift_core::{FloorId, SimTime, TrafficRng};
use lift_schedule::Call;

/// Generates a reproducible random call script.
///
/// Time is cut into fixed slots; in each slot every floor independently
/// places a call with probability `calls_per_minute / (60 s / slot) /
/// num_floors`, at a uniformly random offset inside the slot.  Each floor
/// has its own RNG stream, so the same seed gives the same calls per floor
/// regardless of building height.
#[derive(Clone, Debug)]
pub struct TrafficGenerator {
    num_floors:       u32,
    seed:             u64,
    horizon_ms:       u64,
    slot_ms:          u64,
    calls_per_minute: f64,
}

impl TrafficGenerator {
    /// One minute of traffic at 6 calls/minute in 1-second slots.
    pub fn new(num_floors: u32, seed: u64) -> Self {
        Self {
            num_floors,
            seed,
            horizon_ms:       60_000,
            slot_ms:          1_000,
            calls_per_minute: 6.0,
        }
    }

    pub fn horizon_ms(mut self, horizon_ms: u64) -> Self {
        self.horizon_ms = horizon_ms;
        self
    }

    pub fn slot_ms(mut self, slot_ms: u64) -> Self {
        self.slot_ms = slot_ms.max(1);
        self
    }

    pub fn calls_per_minute(mut self, rate: f64) -> Self {
        self.calls_per_minute = rate.max(0.0);
        self
    }

    /// Calls sorted by time (floor order within a timestamp).
    pub fn generate(&self) -> Vec<Call> {
        if self.num_floors == 0 {
            return Vec::new();
        }
        let slots_per_minute = 60_000.0 / self.slot_ms as f64;
        let p = (self.calls_per_minute / slots_per_minute / self.num_floors as f64).min(1.0);
        let slots = self.horizon_ms / self.slot_ms;

        let mut calls = Vec::new();
        for f in 0..self.num_floors {
            let floor = FloorId(f);
            let mut rng = TrafficRng::for_floor(self.seed, floor);
            for slot in 0..slots {
                if rng.gen_bool(p) {
                    let offset = rng.gen_range(0..self.slot_ms);
                    calls.push(Call::new(floor, SimTime(slot * self.slot_ms + offset)));
                }
            }
        }
        calls.sort_by_key(|c| (c.requested_at, c.floor));
        log::debug!("generated {} calls over {} ms", calls.len(), self.horizon_ms);
        calls
    }
}
