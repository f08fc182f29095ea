// ─────────────────────────────────────────────────────────────────────
// Copper LaNN — Model Evaluation Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use copper_ml::{Activation, CopperFcnn, CopperLann, FeedForwardNet, PropertyModel};
use copper_types::input::{Composition, PhysicalInput, PreColdDeform, Quenching};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Cu-Ni-Si-Mg-Cr alloy, air quench, pre-cold deformed, aged 1 h at 475 degC.
fn bench_input() -> PhysicalInput {
    PhysicalInput::new(
        Composition {
            ni: 3.04, // wt.%
            si: 0.68,
            mg: 0.07,
            ti: 0.0,
            cr: 0.10,
            mn: 0.0,
        },
        Quenching::Air,
        PreColdDeform::Yes,
        475.0, // aging temp [degC]
        60.0,  // aging time [min]
    )
    .expect("benchmark input is valid")
}

/// Benchmark: single LaNN evaluation (embedding + slope + intercept nets).
///
/// Sub-network widths mirror a small exported model: 11 -> 32 -> 32 -> 6,
/// 8 -> 32 -> 4, 6 -> 32 -> 4.
fn bench_lann_evaluate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let model = CopperLann::new(
        FeedForwardNet::random(11, &[32, 32, 6], Activation::Tanh, &mut rng).unwrap(),
        FeedForwardNet::random(8, &[32, 4], Activation::Tanh, &mut rng).unwrap(),
        FeedForwardNet::random(6, &[32, 4], Activation::Tanh, &mut rng).unwrap(),
    )
    .unwrap();
    let input = bench_input();

    c.bench_function("bench_lann_evaluate", |b| {
        b.iter(|| std::hint::black_box(model.evaluate(&input)))
    });
}

/// Benchmark: single FCNN evaluation, 13 -> 64 -> 64 -> 4.
fn bench_fcnn_evaluate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let model = CopperFcnn::new(
        FeedForwardNet::random(13, &[64, 64, 4], Activation::Relu, &mut rng).unwrap(),
    )
    .unwrap();
    let input = bench_input();

    c.bench_function("bench_fcnn_evaluate", |b| {
        b.iter(|| std::hint::black_box(model.evaluate(&input)))
    });
}

/// Benchmark: raw-vector path including validation.
fn bench_lann_evaluate_raw(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let model = CopperLann::new(
        FeedForwardNet::random(11, &[32, 32, 6], Activation::Tanh, &mut rng).unwrap(),
        FeedForwardNet::random(8, &[32, 4], Activation::Tanh, &mut rng).unwrap(),
        FeedForwardNet::random(6, &[32, 4], Activation::Tanh, &mut rng).unwrap(),
    )
    .unwrap();
    let raw = bench_input().values().to_vec();

    c.bench_function("bench_lann_evaluate_raw", |b| {
        b.iter(|| std::hint::black_box(model.evaluate_raw(&raw)))
    });
}

criterion_group!(
    benches,
    bench_lann_evaluate,
    bench_fcnn_evaluate,
    bench_lann_evaluate_raw,
);
criterion_main!(benches);
