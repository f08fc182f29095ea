// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Aging Sweep Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use copper_ml::sweep::{compare_models, sweep_aging_time};
use copper_ml::{Activation, CopperFcnn, CopperLann, FeedForwardNet};
use copper_types::config::SweepConfig;
use copper_types::input::{Composition, PhysicalInput, PreColdDeform, Quenching};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn models() -> (CopperLann, CopperFcnn) {
    let mut rng = StdRng::seed_from_u64(2023);
    let lann = CopperLann::new(
        FeedForwardNet::random(11, &[32, 32, 6], Activation::Tanh, &mut rng).unwrap(),
        FeedForwardNet::random(8, &[32, 4], Activation::Tanh, &mut rng).unwrap(),
        FeedForwardNet::random(6, &[32, 4], Activation::Tanh, &mut rng).unwrap(),
    )
    .unwrap();
    let fcnn = CopperFcnn::new(
        FeedForwardNet::random(13, &[64, 64, 4], Activation::Relu, &mut rng).unwrap(),
    )
    .unwrap();
    (lann, fcnn)
}

fn base_input() -> PhysicalInput {
    PhysicalInput::new(
        Composition {
            ni: 2.78,
            si: 0.8,
            mn: 0.5,
            ..Composition::default()
        },
        Quenching::Water,
        PreColdDeform::No,
        450.0,
        0.0,
    )
    .unwrap()
}

/// Benchmark: 101-node LaNN aging curve over 0..1000 min.
fn bench_lann_sweep(c: &mut Criterion) {
    let (lann, _) = models();
    let base = base_input();
    let cfg = SweepConfig::default();

    c.bench_function("bench_lann_sweep_101", |b| {
        b.iter(|| std::hint::black_box(sweep_aging_time(&lann, &base, &cfg).unwrap()))
    });
}

/// Benchmark: LaNN and FCNN curves over the same 101-node grid.
fn bench_compare_models(c: &mut Criterion) {
    let (lann, fcnn) = models();
    let base = base_input();
    let cfg = SweepConfig::default();

    c.bench_function("bench_compare_models_101", |b| {
        b.iter(|| std::hint::black_box(compare_models(&lann, &fcnn, &base, &cfg).unwrap()))
    });
}

criterion_group!(benches, bench_lann_sweep, bench_compare_models);
criterion_main!(benches);
