//! The engine's clock: current time plus the queue of future events.

use lift_core::{SimClock, SimTime};

use crate::{EventQueue, ScheduleError, ScheduleResult};

/// Supplies the current simulated time and schedules events for later.
///
/// Time only moves when [`pop_due`][Self::pop_due] hands out an event or
/// [`advance_to`][Self::advance_to] is called, so a test can step the
/// simulation deterministically without sleeping.
pub struct Scheduler<E> {
    clock: SimClock,
    queue: EventQueue<E>,
}

impl<E> Scheduler<E> {
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            queue: EventQueue::new(),
        }
    }

    #[inline]
    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn queue(&self) -> &EventQueue<E> {
        &self.queue
    }

    /// Schedule `event` at absolute time `at`.
    ///
    /// # Errors
    ///
    /// `PastEvent` if `at` is earlier than the current time.
    pub fn schedule_at(&mut self, at: SimTime, event: E) -> ScheduleResult<()> {
        let now = self.clock.now();
        if at < now {
            return Err(ScheduleError::PastEvent { at, now });
        }
        self.queue.push(at, event);
        Ok(())
    }

    /// Schedule `event` `delay_ms` after the current time.
    pub fn schedule_in(&mut self, delay_ms: u64, event: E) {
        let at = self.clock.now() + delay_ms;
        self.queue.push(at, event);
    }

    /// Pop the next event due at or before `until`, advancing the clock to
    /// that event's timestamp.
    pub fn pop_due(&mut self, until: SimTime) -> Option<(SimTime, E)> {
        let (time, event) = self.queue.pop_due(until)?;
        self.clock.advance_to(time);
        log::trace!("event due at {time}");
        Some((time, event))
    }

    /// Move the clock forward to `time` without firing anything.
    ///
    /// Callers drain [`pop_due`][Self::pop_due] first; events left behind
    /// an advanced clock still fire on the next drain.
    pub fn advance_to(&mut self, time: SimTime) {
        self.clock.advance_to(time);
    }

    /// Time of the next pending event.
    pub fn next_event_time(&self) -> Option<SimTime> {
        self.queue.next_time()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}
