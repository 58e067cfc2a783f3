//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, FloorId};

    #[test]
    fn index_roundtrip() {
        let id = ElevatorId(2);
        assert_eq!(id.index(), 2);
        assert_eq!(ElevatorId::try_from(2usize).unwrap(), id);
    }

    #[test]
    fn floor_distance_is_symmetric() {
        assert_eq!(FloorId(5).distance(FloorId(2)), 3);
        assert_eq!(FloorId(2).distance(FloorId(5)), 3);
        assert_eq!(FloorId::GROUND.distance(FloorId::GROUND), 0);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(7).to_string(), "ElevatorId(7)");
        assert_eq!(FloorId(3).to_string(), "FloorId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimTime};

    #[test]
    fn sim_time_arithmetic() {
        let t = SimTime(1_000);
        assert_eq!(t + 500, SimTime(1_500));
        assert_eq!(t.offset(250), SimTime(1_250));
        assert_eq!(SimTime(4_500) - SimTime(1_000), 3_500u64);
        assert_eq!(SimTime(10).saturating_since(SimTime(20)), 0);
    }

    #[test]
    fn sim_time_display() {
        assert_eq!(SimTime(4_500).to_string(), "4.500s");
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut clock = SimClock::new(0);
        clock.advance_to(SimTime(2_000));
        clock.advance_to(SimTime(1_000));
        assert_eq!(clock.now(), SimTime(2_000));
    }

    #[test]
    fn clock_unix_conversion_and_display() {
        let mut clock = SimClock::new(1_700_000_000_000);
        clock.advance_to(SimTime(61_250));
        assert_eq!(clock.unix_ms(clock.now()), 1_700_000_061_250);
        assert_eq!(clock.to_string(), "01:01.250");
    }
}

#[cfg(test)]
mod config {
    use crate::{BuildingConfig, CoreError, FloorId};

    #[test]
    fn presets_match_settings_table() {
        let b1 = BuildingConfig::preset("building1").unwrap();
        assert_eq!((b1.num_floors, b1.num_elevators), (15, 3));
        let b2 = BuildingConfig::preset("building2").unwrap();
        assert_eq!((b2.num_floors, b2.num_elevators), (5, 1));
        let b3 = BuildingConfig::preset("building3").unwrap();
        assert_eq!((b3.num_floors, b3.num_elevators), (10, 2));
        assert_eq!(b1.travel_ms_per_floor, 500);
        assert_eq!(b1.dwell_ms, 2_000);
    }

    #[test]
    fn unknown_preset_errors() {
        let err = BuildingConfig::preset("nowhere").unwrap_err();
        assert!(matches!(err, CoreError::UnknownBuilding(ref n) if n == "nowhere"));
    }

    #[test]
    fn validate_rejects_empty_layouts() {
        assert!(BuildingConfig::new(0, 1).validate().is_err());
        assert!(BuildingConfig::new(5, 0).validate().is_err());
        assert!(BuildingConfig::new(5, 1).validate().is_ok());
    }

    #[test]
    fn contains_and_travel() {
        let cfg = BuildingConfig::new(10, 1).with_timing(300, 1_000);
        assert!(cfg.contains(FloorId(9)));
        assert!(!cfg.contains(FloorId(10)));
        assert_eq!(cfg.travel_ms(4), 1_200);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_buildings_with_defaults() {
        let text = r#"
            [[building]]
            name = "tower"
            num_floors = 40
            num_elevators = 6

            [[building]]
            name = "annex"
            num_floors = 3
            num_elevators = 1
            dwell_ms = 500
            countdown = true
        "#;
        let buildings = crate::parse_buildings_toml(text).unwrap();
        assert_eq!(buildings.len(), 2);
        assert_eq!(buildings[0].travel_ms_per_floor, 500);
        assert_eq!(buildings[0].dwell_ms, 2_000);
        assert_eq!(buildings[1].dwell_ms, 500);
        assert!(buildings[1].countdown);

        let found = crate::find_building(&buildings, "annex").unwrap();
        assert_eq!(found.num_floors, 3);
        let preset = crate::find_building(&buildings, "building2").unwrap();
        assert_eq!(preset.num_elevators, 1);
    }

    #[cfg(feature = "toml")]
    #[test]
    fn toml_rejects_zero_elevators() {
        let text = "[[building]]\nname = \"bad\"\nnum_floors = 4\nnum_elevators = 0\n";
        assert!(crate::parse_buildings_toml(text).is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::{FloorId, TrafficRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = TrafficRng::new(12345);
        let mut r2 = TrafficRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn floors_get_distinct_streams() {
        let mut r0 = TrafficRng::for_floor(1, FloorId(0));
        let mut r1 = TrafficRng::for_floor(1, FloorId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = TrafficRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0u32..15);
            assert!(v < 15);
        }
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
