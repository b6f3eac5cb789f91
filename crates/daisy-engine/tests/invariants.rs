//! Properties that must hold for every seed and planet size.

use daisy_engine::{DaisyConfig, SimulationEngine};
use proptest::prelude::*;

fn config(width: u32, height: u32, seed: u64) -> DaisyConfig {
    DaisyConfig {
        width,
        height,
        seed,
        ..DaisyConfig::default()
    }
}

// ── Determinism ─────────────────────────────────────────────────

#[test]
fn same_seed_same_trajectory() {
    let mut a = SimulationEngine::new(config(40, 40, 2024)).unwrap();
    let mut b = SimulationEngine::new(config(40, 40, 2024)).unwrap();
    assert_eq!(a.grid().fingerprint(), b.grid().fingerprint());
    for _ in 0..150 {
        a.step();
        b.step();
        assert_eq!(a.grid().fingerprint(), b.grid().fingerprint());
        assert_eq!(a.counts(), b.counts());
        assert_eq!(a.temperature().to_bits(), b.temperature().to_bits());
        assert_eq!(a.luminosity().to_bits(), b.luminosity().to_bits());
    }
}

#[test]
fn different_seeds_diverge() {
    let a = SimulationEngine::new(config(40, 40, 1)).unwrap();
    let b = SimulationEngine::new(config(40, 40, 2)).unwrap();
    assert_ne!(a.grid().fingerprint(), b.grid().fingerprint());
}

#[test]
fn reset_replays_the_same_trajectory() {
    let mut engine = SimulationEngine::new(config(30, 30, 77)).unwrap();
    engine.run(60);
    let first = (engine.grid().fingerprint(), engine.counts());

    engine.initialize(config(30, 30, 77)).unwrap();
    engine.run(60);
    assert_eq!((engine.grid().fingerprint(), engine.counts()), first);
}

// ── Long run ────────────────────────────────────────────────────

#[test]
fn long_run_stays_physical() {
    let mut engine = SimulationEngine::new(config(50, 50, 5)).unwrap();
    for _ in 0..1_000 {
        engine.step();
        let t = engine.temperature();
        assert!(t.is_finite());
        assert!(t >= -273.0);
        assert_eq!(engine.counts().total(), 2_500);
    }
    assert!((engine.luminosity() - 0.9).abs() < 1e-9);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn counters_always_match_the_grid(
        width in 1u32..12,
        height in 1u32..12,
        seed in any::<u64>(),
        ticks in 1usize..25,
    ) {
        let mut engine = SimulationEngine::new(config(width, height, seed)).unwrap();
        let area = u64::from(width) * u64::from(height);
        prop_assert_eq!(engine.counts().total(), area);
        for _ in 0..ticks {
            engine.step();
            prop_assert_eq!(engine.counts().total(), area);
            prop_assert_eq!(engine.counts(), engine.grid().population());
        }
    }

    #[test]
    fn luminosity_is_monotone_and_capped(
        start in 0.0f64..1.5,
        headroom in 0.0f64..0.5,
        increase in 0.0f64..0.05,
        ticks in 1usize..40,
    ) {
        let mut cfg = config(6, 6, 11);
        cfg.luminosity.start = start;
        cfg.luminosity.max = start + headroom;
        cfg.luminosity.increase = increase;
        let max = cfg.luminosity.max;
        let mut engine = SimulationEngine::new(cfg).unwrap();
        let mut previous = engine.luminosity();
        for _ in 0..ticks {
            engine.step();
            prop_assert!(engine.luminosity() >= previous);
            prop_assert!(engine.luminosity() <= max);
            previous = engine.luminosity();
        }
    }
}
