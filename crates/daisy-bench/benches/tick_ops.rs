//! Criterion benchmarks for the full tick pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use daisy_bench::{reference_profile, stress_profile};
use daisy_engine::SimulationEngine;

fn bench_tick_10k(c: &mut Criterion) {
    let mut engine = SimulationEngine::new(reference_profile(42)).unwrap();

    // Warm up past genesis so the planet is in a typical mixed state.
    engine.run(50);

    c.bench_function("tick_10k", |b| {
        b.iter(|| {
            engine.step();
            black_box(engine.counts());
        });
    });
}

fn bench_tick_100k(c: &mut Criterion) {
    let mut engine = SimulationEngine::new(stress_profile(42)).unwrap();
    engine.run(5);

    c.bench_function("tick_100k", |b| {
        b.iter(|| {
            engine.step();
            black_box(engine.counts());
        });
    });
}

fn bench_100_ticks_10k(c: &mut Criterion) {
    c.bench_function("100_ticks_10k", |b| {
        b.iter(|| {
            let mut engine = SimulationEngine::new(reference_profile(42)).unwrap();
            engine.run(100);
            black_box(engine.telemetry());
        });
    });
}

fn bench_genesis_10k(c: &mut Criterion) {
    c.bench_function("genesis_10k", |b| {
        b.iter(|| {
            let engine = SimulationEngine::new(reference_profile(black_box(7))).unwrap();
            black_box(engine.counts());
        });
    });
}

criterion_group!(
    benches,
    bench_tick_10k,
    bench_tick_100k,
    bench_100_ticks_10k,
    bench_genesis_10k
);
criterion_main!(benches);
