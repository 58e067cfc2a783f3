//! Unit tests for lift-schedule.

use lift_core::{FloorId, SimClock, SimTime};

use crate::{EventQueue, ScheduleError, Scheduler};

// ── EventQueue ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_queue {
    use super::*;

    #[test]
    fn empty_queue() {
        let mut q: EventQueue<u32> = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.next_time(), None);
        assert_eq!(q.pop_due(SimTime(u64::MAX)), None);
    }

    #[test]
    fn pops_in_time_order() {
        let mut q = EventQueue::new();
        q.push(SimTime(300), "c");
        q.push(SimTime(100), "a");
        q.push(SimTime(200), "b");
        assert_eq!(q.len(), 3);
        assert_eq!(q.pop_next(), Some((SimTime(100), "a")));
        assert_eq!(q.pop_next(), Some((SimTime(200), "b")));
        assert_eq!(q.pop_next(), Some((SimTime(300), "c")));
        assert!(q.is_empty());
    }

    #[test]
    fn same_time_is_fifo() {
        let mut q = EventQueue::new();
        q.push(SimTime(50), 1);
        q.push(SimTime(50), 2);
        q.push(SimTime(50), 3);
        assert_eq!(q.time_count(), 1);
        let order: Vec<i32> = std::iter::from_fn(|| q.pop_next().map(|(_, e)| e)).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(q.time_count(), 0);
    }

    #[test]
    fn pop_due_respects_bound() {
        let mut q = EventQueue::new();
        q.push(SimTime(100), 'a');
        q.push(SimTime(500), 'b');
        assert_eq!(q.pop_due(SimTime(99)), None);
        assert_eq!(q.pop_due(SimTime(100)), Some((SimTime(100), 'a')));
        assert_eq!(q.pop_due(SimTime(499)), None);
        assert_eq!(q.len(), 1);
        assert_eq!(q.next_time(), Some(SimTime(500)));
    }

    #[test]
    fn iter_matches_firing_order() {
        let mut q = EventQueue::new();
        q.push(SimTime(2), 'y');
        q.push(SimTime(1), 'x');
        q.push(SimTime(2), 'z');
        let seen: Vec<char> = q.iter().map(|(_, &e)| e).collect();
        assert_eq!(seen, vec!['x', 'y', 'z']);
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler {
    use super::*;

    #[test]
    fn pop_due_advances_clock() {
        let mut s = Scheduler::new(SimClock::new(0));
        s.schedule_at(SimTime(4_500), "arrive").unwrap();
        s.schedule_in(1_000, "tick");
        assert_eq!(s.pending(), 2);

        assert_eq!(s.pop_due(SimTime(10_000)), Some((SimTime(1_000), "tick")));
        assert_eq!(s.now(), SimTime(1_000));
        assert_eq!(s.pop_due(SimTime(10_000)), Some((SimTime(4_500), "arrive")));
        assert_eq!(s.now(), SimTime(4_500));
        assert!(s.is_idle());
    }

    #[test]
    fn schedule_in_is_relative_to_now() {
        let mut s = Scheduler::new(SimClock::new(0));
        s.advance_to(SimTime(2_000));
        s.schedule_in(500, ());
        assert_eq!(s.next_event_time(), Some(SimTime(2_500)));
    }

    #[test]
    fn schedule_in_the_past_errors() {
        let mut s = Scheduler::new(SimClock::new(0));
        s.advance_to(SimTime(1_000));
        let err = s.schedule_at(SimTime(999), ()).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::PastEvent { at: SimTime(999), now: SimTime(1_000) }
        ));
        // Same-instant scheduling is allowed.
        assert!(s.schedule_at(SimTime(1_000), ()).is_ok());
    }

    #[test]
    fn advance_does_not_fire_events() {
        let mut s = Scheduler::new(SimClock::new(0));
        s.schedule_at(SimTime(100), 'a').unwrap();
        s.advance_to(SimTime(1_000));
        assert_eq!(s.pending(), 1);
        // Overdue event still fires; the clock stays put.
        assert_eq!(s.pop_due(SimTime(1_000)), Some((SimTime(100), 'a')));
        assert_eq!(s.now(), SimTime(1_000));
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::*;
    use crate::{Call, load_calls_reader};

    #[test]
    fn loads_and_sorts_stably() {
        let csv = "requested_at_ms,floor\n1500,9\n0,5\n0,2\n";
        let calls = load_calls_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            calls,
            vec![
                Call::new(FloorId(5), SimTime(0)),
                Call::new(FloorId(2), SimTime(0)),
                Call::new(FloorId(9), SimTime(1_500)),
            ]
        );
    }

    #[test]
    fn tolerates_whitespace() {
        let csv = "requested_at_ms, floor\n 250 , 3\n";
        let calls = load_calls_reader(Cursor::new(csv)).unwrap();
        assert_eq!(calls, vec![Call::new(FloorId(3), SimTime(250))]);
    }

    #[test]
    fn bad_row_is_a_parse_error() {
        let csv = "requested_at_ms,floor\nsoon,3\n";
        let err = load_calls_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn empty_script() {
        let calls = load_calls_reader(Cursor::new("requested_at_ms,floor\n")).unwrap();
        assert!(calls.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = crate::load_calls_csv(std::path::Path::new("/nonexistent/calls.csv")).unwrap_err();
        assert!(matches!(err, ScheduleError::Io(_)));
    }
}
