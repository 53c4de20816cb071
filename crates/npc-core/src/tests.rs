//! Unit tests for npc-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_and_ordering() {
        assert_eq!(AgentId(42).index(), 42);
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "#7");
    }
}

#[cfg(test)]
mod geo {
    use proptest::prelude::*;

    use crate::Vec2;

    #[test]
    fn distance_3_4_5() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert!((b.distance(a) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn zero_distance() {
        let p = Vec2::new(1.5, -2.0);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn normalize_unit_length() {
        let v = Vec2::new(10.0, 0.0).normalize();
        assert_eq!(v, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn direction_to_points_at_target() {
        let d = Vec2::new(1.0, 1.0).direction_to(Vec2::new(1.0, 5.0));
        assert_eq!(d, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn operators() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(0.5, -1.0);
        assert_eq!(a + b, Vec2::new(1.5, 1.0));
        assert_eq!(a - b, Vec2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert_eq!(-a, Vec2::new(-1.0, -2.0));
        let mut c = a;
        c += b;
        assert_eq!(c, a + b);
    }

    proptest! {
        #[test]
        fn normalized_vectors_have_unit_length(
            x in -1000.0f32..1000.0f32,
            y in -1000.0f32..1000.0f32,
        ) {
            prop_assume!(x.abs() > 1e-3 || y.abs() > 1e-3);
            let n = Vec2::new(x, y).normalize();
            prop_assert!((n.length() - 1.0).abs() < 1e-4);
        }

        #[test]
        fn distance_is_symmetric(
            ax in -100.0f32..100.0f32, ay in -100.0f32..100.0f32,
            bx in -100.0f32..100.0f32, by in -100.0f32..100.0f32,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            prop_assert_eq!(a.distance(b), b.distance(a));
            prop_assert!(a.distance(b) >= 0.0);
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn clock_accumulates_dt() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-9);
    }

    #[test]
    fn clock_minutes_seconds() {
        let mut clock = SimClock::new();
        for _ in 0..61 {
            clock.advance(1.0);
        }
        let (m, s) = clock.elapsed_ms();
        assert_eq!(m, 1);
        assert!((s - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pause_sticks() {
        let mut clock = SimClock::new();
        assert!(!clock.paused);
        clock.pause();
        clock.pause();
        assert!(clock.paused);
    }

    #[test]
    fn clock_display() {
        let mut clock = SimClock::new();
        for _ in 0..90 {
            clock.advance(1.0);
        }
        assert_eq!(clock.to_string(), "T90 (01:30.000)");
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig { total_ticks: 600, ..SimConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(600));
    }

    #[test]
    fn sim_config_rejects_bad_dt() {
        let cfg = SimConfig { dt_secs: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { dt_secs: f32::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        assert!(SimConfig::default().validate().is_ok());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(-1.0f32..1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }
}
