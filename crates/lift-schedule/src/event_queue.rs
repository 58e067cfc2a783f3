//! `EventQueue` — timestamp-ordered queue of pending engine events.
//!
//! `BTreeMap` gives O(log W) insert and pop where W is the number of distinct
//! pending timestamps.  A building has at most a handful of events in flight
//! per elevator, so W stays small.
//!
//! Within one timestamp events are kept in a `VecDeque` and popped in
//! insertion order.  Per-elevator move ordering depends on this.

use std::collections::{BTreeMap, VecDeque};

use lift_core::SimTime;

/// A priority queue mapping simulation timestamps → events due at that time.
pub struct EventQueue<E> {
    inner: BTreeMap<SimTime, VecDeque<E>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self {
            inner: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `event` to fire at `time`, after any events already queued
    /// for that same time.
    pub fn push(&mut self, time: SimTime, event: E) {
        self.inner.entry(time).or_default().push_back(event);
        self.total += 1;
    }

    /// Remove and return the earliest event if its time is `<= until`.
    pub fn pop_due(&mut self, until: SimTime) -> Option<(SimTime, E)> {
        let mut entry = self.inner.first_entry()?;
        let time = *entry.key();
        if time > until {
            return None;
        }
        let event = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.total -= 1;
        Some((time, event))
    }

    /// Remove and return the earliest event regardless of time.
    pub fn pop_next(&mut self) -> Option<(SimTime, E)> {
        let time = self.next_time()?;
        self.pop_due(time)
    }

    /// The earliest timestamp with at least one queued event.
    pub fn next_time(&self) -> Option<SimTime> {
        self.inner.keys().next().copied()
    }

    /// Iterate over all pending events in firing order.
    pub fn iter(&self) -> impl Iterator<Item = (SimTime, &E)> {
        self.inner
            .iter()
            .flat_map(|(&t, events)| events.iter().map(move |e| (t, e)))
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future timestamps with at least one event.
    pub fn time_count(&self) -> usize {
        self.inner.len()
    }
}
