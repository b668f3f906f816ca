//! Performance measurement for the chaos-game rendering loop

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flamegen::flame::{FlameAccumulatorBuilder, FlamePreset, presets};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Measures one-shot rendering cost as density increases
fn bench_compute_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("turbulence_compute");

    let flame = presets::turbulence();
    let Ok(frame) = FlamePreset::Turbulence.reference_frame() else {
        group.finish();
        return;
    };

    for density in &[1, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(density),
            density,
            |b, &density| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    let accumulator =
                        flame.compute(frame, 100, 100, black_box(density), &mut rng);
                    black_box(accumulator)
                });
            },
        );
    }

    group.finish();
}

/// Measures the resumable form folding chunks into one builder
fn bench_partial_steps(c: &mut Criterion) {
    let flame = presets::sharkfin();
    let Ok(frame) = FlamePreset::Sharkfin.reference_frame() else {
        return;
    };

    c.bench_function("sharkfin_partial_steps", |b| {
        b.iter(|| {
            let Ok(mut builder) = FlameAccumulatorBuilder::new(frame, 200, 160) else {
                return;
            };
            let mut rng = StdRng::seed_from_u64(42);
            for _ in 0..10 {
                flame.compute_partial(10_000, &mut builder, &mut rng);
            }
            black_box(builder.build());
        });
    });
}

criterion_group!(benches, bench_compute_density, bench_partial_steps);
criterion_main!(benches);
