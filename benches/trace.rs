//! Benchmarks for field evaluation and full retraces.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use efield::prelude::*;

fn ring_of_charges(n: usize) -> Vec<Charge> {
    (0..n)
        .map(|i| {
            let angle = std::f64::consts::TAU * i as f64 / n as f64;
            let polarity = if i % 2 == 0 {
                Polarity::Positive
            } else {
                Polarity::Negative
            };
            Charge::unit(DVec2::from_angle(angle) * 1.2, polarity)
        })
        .collect()
}

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("electric_field");
    let params = FieldParams::default();

    for n in [1usize, 10, 40] {
        let charges = ring_of_charges(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &charges, |b, charges| {
            b.iter(|| black_box(electric_field(charges, DVec2::new(0.3, -0.7), &params)))
        });
    }

    group.finish();
}

fn bench_trace_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace_all");
    let config = SimConfig::default();

    for n in [1usize, 10, 40] {
        let charges = ring_of_charges(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &charges, |b, charges| {
            b.iter(|| black_box(Tracer::from_config(&config).trace_all(charges)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field, bench_trace_all);
criterion_main!(benches);
