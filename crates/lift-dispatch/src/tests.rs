//! Unit tests for lift-dispatch.

use lift_core::{ElevatorId, FloorId, SimTime};

use crate::{
    DispatchError, Dispatcher, Elevator, ElevatorError, FloorRegistry, MoveAction, Phase,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

const NOW: SimTime = SimTime(10_000);

/// 500 ms per floor, 2000 ms dwell.
fn dispatcher() -> Dispatcher {
    Dispatcher::new(500, 2_000)
}

fn fleet(n: u32, now: SimTime) -> Vec<Elevator> {
    (0..n).map(|i| Elevator::new(ElevatorId(i), now)).collect()
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatcher {
    use super::*;

    #[test]
    fn scenario_a_single_idle_elevator_moves_now() {
        let d = dispatcher();
        let floors = FloorRegistry::new(10);
        let mut elevators = fleet(1, NOW);

        let m = d.dispatch(FloorId(5), &mut elevators, &floors, NOW).unwrap();
        assert_eq!(m.elevator, ElevatorId(0));
        assert_eq!(m.action, MoveAction::Now);
        assert_eq!(m.available_at, NOW + 4_500);
        assert_eq!(m.wait_ms, 2_500);
        assert_eq!(m.wait_secs(), 2.5);
        assert_eq!(m.eta_ms, 2_500);
        assert_eq!(m.starts_at(NOW), NOW);
        assert_eq!(m.arrives_at(NOW), NOW + 2_500);
        assert_eq!(elevators[0].destination(), FloorId(5));
        assert_eq!(elevators[0].available_at(), NOW + 4_500);
    }

    #[test]
    fn scenario_b_busy_elevator_is_queued() {
        let d = dispatcher();
        let floors = FloorRegistry::new(10);
        let mut elevators = fleet(1, NOW);

        d.dispatch(FloorId(5), &mut elevators, &floors, NOW).unwrap();
        let m = d.dispatch(FloorId(2), &mut elevators, &floors, NOW).unwrap();

        assert_eq!(m.action, MoveAction::After(4_500));
        assert_eq!(m.origin, FloorId(5));
        assert_eq!(m.travel_ms, 1_500);
        assert_eq!(m.available_at, NOW + 8_000);
        assert_eq!(m.wait_ms, 4_500);
        assert_eq!(m.eta_ms, 4_500 + 1_500);
        assert_eq!(elevators[0].destination(), FloorId(2));
        assert_eq!(elevators[0].available_at(), NOW + 8_000);
    }

    #[test]
    fn deferred_wait_is_delay_until_move_starts() {
        let d = dispatcher();
        let floors = FloorRegistry::new(10);
        let mut elevators = fleet(1, NOW);

        d.dispatch(FloorId(5), &mut elevators, &floors, NOW).unwrap();
        let later = NOW + 1_000;
        let m = d.dispatch(FloorId(2), &mut elevators, &floors, later).unwrap();

        assert_eq!(m.action, MoveAction::After(3_500));
        assert_eq!(m.wait_ms, 3_500);
        assert_eq!(m.wait_secs(), 3.5);
        assert_eq!(m.starts_at(later), NOW + 4_500);
        assert_eq!(m.eta_ms, 3_500 + 1_500);
        assert_eq!(m.arrives_at(later), NOW + 6_000);
    }

    #[test]
    fn scenario_c_tie_goes_to_lowest_id() {
        let d = dispatcher();
        let floors = FloorRegistry::new(15);
        let mut elevators = fleet(3, NOW);

        let m = d.dispatch(FloorId(10), &mut elevators, &floors, NOW).unwrap();
        assert_eq!(m.elevator, ElevatorId(0));
        assert_eq!(m.cost_ms, 10 * 500 + 2_000);
    }

    #[test]
    fn second_call_prefers_free_elevator() {
        let d = dispatcher();
        let floors = FloorRegistry::new(15);
        let mut elevators = fleet(3, NOW);

        d.dispatch(FloorId(10), &mut elevators, &floors, NOW).unwrap();
        let m = d.dispatch(FloorId(10), &mut elevators, &floors, NOW).unwrap();
        // Elevator 0 is committed to floor 10 but busy for 7000 ms; elevator 1
        // costs 5000 + 2000 with no wait and wins.
        assert_eq!(m.elevator, ElevatorId(1));
    }

    #[test]
    fn committed_destination_is_used_for_scoring() {
        let d = dispatcher();
        let floors = FloorRegistry::new(20);
        let mut elevators = fleet(2, NOW);

        d.dispatch(FloorId(12), &mut elevators, &floors, NOW).unwrap();
        // Long after elevator 0 is free again it still "sits" at floor 12 for
        // scoring, so a call at 11 goes to it rather than to elevator 1 at 0.
        let later = NOW + 60_000;
        let m = d.dispatch(FloorId(11), &mut elevators, &floors, later).unwrap();
        assert_eq!(m.elevator, ElevatorId(0));
        assert_eq!(m.origin, FloorId(12));
        assert_eq!(m.action, MoveAction::Now);
        assert_eq!(m.available_at, later + 500 + 2_000);
    }

    #[test]
    fn only_selected_elevator_is_mutated() {
        let d = dispatcher();
        let floors = FloorRegistry::new(15);
        let mut elevators = fleet(4, NOW);
        let before = elevators.clone();

        let m = d.dispatch(FloorId(7), &mut elevators, &floors, NOW).unwrap();
        for (b, a) in before.iter().zip(&elevators) {
            if a.id() == m.elevator {
                assert_ne!(a, b);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn availability_is_monotonic_for_one_elevator() {
        let d = dispatcher();
        let floors = FloorRegistry::new(30);
        let mut elevators = fleet(1, NOW);

        let mut last = elevators[0].available_at();
        for (i, f) in [3u32, 29, 0, 14, 14, 7].into_iter().enumerate() {
            let now = NOW + i as u64 * 700;
            d.dispatch(FloorId(f), &mut elevators, &floors, now).unwrap();
            let avail = elevators[0].available_at();
            assert!(avail >= last, "call {i}: {avail} < {last}");
            last = avail;
        }
    }

    #[test]
    fn same_floor_call_costs_only_dwell() {
        let d = dispatcher();
        let floors = FloorRegistry::new(5);
        let mut elevators = fleet(1, NOW);

        let m = d.dispatch(FloorId(0), &mut elevators, &floors, NOW).unwrap();
        assert_eq!(m.cost_ms, 2_000);
        assert_eq!(m.wait_ms, 0);
        assert_eq!(m.available_at, NOW + 2_000);
    }

    #[test]
    fn invalid_floor_errors_without_mutation() {
        let d = dispatcher();
        let floors = FloorRegistry::new(5);
        let mut elevators = fleet(2, NOW);
        let before = elevators.clone();

        let err = d.dispatch(FloorId(5), &mut elevators, &floors, NOW).unwrap_err();
        assert!(matches!(
            err,
            DispatchError::InvalidFloor { floor: FloorId(5), num_floors: 5 }
        ));
        assert_eq!(elevators, before);
    }

    #[test]
    fn no_elevators_errors() {
        let d = dispatcher();
        let floors = FloorRegistry::new(5);
        let err = d.dispatch(FloorId(1), &mut [], &floors, NOW).unwrap_err();
        assert!(matches!(err, DispatchError::NoElevators));
    }

    #[test]
    fn estimate_is_read_only() {
        let d = dispatcher();
        let mut elevators = fleet(2, NOW);
        let floors = FloorRegistry::new(10);
        d.dispatch(FloorId(4), &mut elevators, &floors, NOW).unwrap();

        let costs = d.estimate(FloorId(6), &elevators, NOW);
        assert_eq!(
            costs,
            vec![
                (ElevatorId(0), 2 * 500 + 2_000 + 4_000),
                (ElevatorId(1), 6 * 500 + 2_000),
            ]
        );
    }
}

// ── Elevator state machine ────────────────────────────────────────────────────

#[cfg(test)]
mod elevator {
    use super::*;

    #[test]
    fn new_elevator_is_idle_on_ground() {
        let e = Elevator::new(ElevatorId(3), NOW);
        assert_eq!(e.current_floor(), FloorId::GROUND);
        assert_eq!(e.destination(), FloorId::GROUND);
        assert_eq!(e.available_at(), NOW);
        assert!(e.is_idle());
        assert_eq!(e.waiting_ms(NOW), 0);
    }

    #[test]
    fn full_cycle() {
        let mut e = Elevator::new(ElevatorId(0), SimTime::ZERO);

        let leg = e.begin_move(FloorId(4), SimTime(0), 500).unwrap();
        assert_eq!(leg.duration_ms, 2_000);
        assert_eq!(leg.arrives_at(), SimTime(2_000));
        assert!(e.is_moving());
        assert_eq!(e.current_floor(), FloorId(0));

        let floor = e.arrive(SimTime(2_000), 2_000).unwrap();
        assert_eq!(floor, FloorId(4));
        assert_eq!(e.current_floor(), FloorId(4));
        assert_eq!(e.phase(), Phase::Dwelling { floor: FloorId(4), until: SimTime(4_000) });

        assert!(e.finish_dwell(FloorId(4)));
        assert!(e.is_idle());
    }

    #[test]
    fn cannot_move_while_moving() {
        let mut e = Elevator::new(ElevatorId(1), SimTime::ZERO);
        e.begin_move(FloorId(3), SimTime(0), 500).unwrap();
        let err = e.begin_move(FloorId(1), SimTime(100), 500).unwrap_err();
        assert!(matches!(
            err,
            ElevatorError::InTransit { elevator: ElevatorId(1), arrives_at: SimTime(1_500) }
        ));
    }

    #[test]
    fn can_move_straight_from_dwell() {
        let mut e = Elevator::new(ElevatorId(0), SimTime::ZERO);
        e.begin_move(FloorId(5), SimTime(0), 500).unwrap();
        e.arrive(SimTime(2_500), 2_000).unwrap();

        let leg = e.begin_move(FloorId(2), SimTime(4_500), 500).unwrap();
        assert_eq!(leg.from, FloorId(5));
        assert_eq!(leg.duration_ms, 1_500);
        // The stale dwell end for floor 5 must not reset the new move.
        assert!(!e.finish_dwell(FloorId(5)));
        assert!(e.is_moving());
    }

    #[test]
    fn arrive_without_move_errors() {
        let mut e = Elevator::new(ElevatorId(2), SimTime::ZERO);
        assert!(matches!(
            e.arrive(SimTime(0), 2_000),
            Err(ElevatorError::NotMoving(ElevatorId(2)))
        ));
    }

    #[test]
    fn zero_gap_move_arrives_instantly() {
        let mut e = Elevator::new(ElevatorId(0), SimTime::ZERO);
        let leg = e.begin_move(FloorId(0), SimTime(700), 500).unwrap();
        assert_eq!(leg.duration_ms, 0);
        assert_eq!(leg.arrives_at(), SimTime(700));
    }
}

// ── Floor registry ────────────────────────────────────────────────────────────

#[cfg(test)]
mod floors {
    use super::*;

    #[test]
    fn place_call_is_idempotent() {
        let mut reg = FloorRegistry::new(5);
        assert!(reg.place_call(FloorId(3)).unwrap());
        assert!(!reg.place_call(FloorId(3)).unwrap());
        assert_eq!(reg.pending_count(), 1);
        assert_eq!(reg.pending_floors(), vec![FloorId(3)]);
    }

    #[test]
    fn release_then_place_again() {
        let mut reg = FloorRegistry::new(5);
        reg.place_call(FloorId(1)).unwrap();
        reg.release(FloorId(1)).unwrap();
        reg.release(FloorId(1)).unwrap();
        assert!(!reg.is_pending(FloorId(1)).unwrap());
        assert!(reg.place_call(FloorId(1)).unwrap());
    }

    #[test]
    fn out_of_range_floor_errors() {
        let mut reg = FloorRegistry::new(5);
        assert!(matches!(
            reg.place_call(FloorId(9)),
            Err(DispatchError::InvalidFloor { floor: FloorId(9), num_floors: 5 })
        ));
        assert!(reg.release(FloorId(5)).is_err());
        assert_eq!(reg.pending_count(), 0);
    }

    #[test]
    fn floors_are_numbered_in_order() {
        let reg = FloorRegistry::new(4);
        assert_eq!(reg.len(), 4);
        let numbers: Vec<u32> = reg.as_slice().iter().map(|f| f.number.0).collect();
        assert_eq!(numbers, vec![0, 1, 2, 3]);
    }
}
