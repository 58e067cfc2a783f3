//! Simulated time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `SimTime`, measured
//! from the start of the simulation.  Nothing in the engine reads a wall
//! clock: the current time lives in `SimClock` and only moves forward when
//! the event loop advances it.  Tests drive the clock directly instead of
//! sleeping.
//!
//! `SimClock` also remembers the Unix timestamp (ms) of `SimTime::ZERO` so
//! output writers can emit wall-clock columns:
//!
//!   wall_ms = start_unix_ms + sim_time_ms

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// Return the time `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> SimTime {
        SimTime(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`, or 0 if `earlier` is
    /// in the future.
    #[inline]
    pub fn saturating_since(self, earlier: SimTime) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl std::ops::AddAssign<u64> for SimTime {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        self.0 += rhs;
    }
}

impl std::ops::Sub for SimTime {
    type Output = u64;
    /// # Panics
    /// Panics in debug mode if `rhs > self`.
    #[inline]
    fn sub(self, rhs: SimTime) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:03}s", self.0 / 1000, self.0 % 1000)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation's notion of "now".
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Unix timestamp (ms since epoch) of `SimTime::ZERO`.
    pub start_unix_ms: i64,
    current: SimTime,
}

impl SimClock {
    pub fn new(start_unix_ms: i64) -> Self {
        Self {
            start_unix_ms,
            current: SimTime::ZERO,
        }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.current
    }

    /// Move the clock forward to `time`.  Never moves backwards: an earlier
    /// `time` leaves the clock unchanged.
    #[inline]
    pub fn advance_to(&mut self, time: SimTime) {
        if time > self.current {
            self.current = time;
        }
    }

    /// Wall-clock Unix milliseconds corresponding to `time`.
    #[inline]
    pub fn unix_ms(&self, time: SimTime) -> i64 {
        self.start_unix_ms + time.0 as i64
    }

    /// Break elapsed time into (minutes, seconds, millis) from sim start.
    pub fn elapsed_msm(&self) -> (u64, u32, u32) {
        let ms = self.current.0;
        let minutes = ms / 60_000;
        let secs = ((ms % 60_000) / 1000) as u32;
        let millis = (ms % 1000) as u32;
        (minutes, secs, millis)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, s, ms) = self.elapsed_msm();
        write!(f, "{:02}:{:02}.{:03}", m, s, ms)
    }
}
