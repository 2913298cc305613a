//! Benchmarks for hyperexponential evaluation across phase counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hyperexp::batch;
use hyperexp::prelude::*;

/// Mixture with `k` phases whose rates span two decades
fn generate_mixture(k: usize) -> Hyperexponential<f64> {
    let rates = (0..k).map(|i| 0.1 * 10f64.powf(2.0 * i as f64 / k.max(2) as f64));
    Hyperexponential::from_rates(rates).expect("rates are positive")
}

fn generate_probabilities(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64 / (n + 1) as f64).collect()
}

fn bench_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");

    for &k in &[1usize, 3, 10, 50] {
        let dist = generate_mixture(k);
        group.bench_with_input(BenchmarkId::new("pdf", k), &dist, |b, dist| {
            b.iter(|| black_box(dist.pdf(black_box(1.5))));
        });
        group.bench_with_input(BenchmarkId::new("cdf", k), &dist, |b, dist| {
            b.iter(|| black_box(dist.cdf(black_box(1.5))));
        });
        group.bench_with_input(BenchmarkId::new("sf", k), &dist, |b, dist| {
            b.iter(|| black_box(dist.sf(black_box(1.5))));
        });
    }

    group.finish();
}

fn bench_quantile(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantile");

    for &k in &[1usize, 3, 10, 50] {
        let dist = generate_mixture(k);
        for &p in &[1e-6, 0.5, 0.999_999] {
            group.bench_with_input(
                BenchmarkId::new(format!("phases_{k}"), p),
                &(&dist, p),
                |b, (dist, p)| {
                    b.iter(|| black_box(dist.quantile(black_box(*p))));
                },
            );
        }
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_quantile");
    let dist = generate_mixture(10);
    let ps = generate_probabilities(10_000);

    for strategy in [ExecutionStrategy::Sequential, ExecutionStrategy::Parallel] {
        group.bench_with_input(
            BenchmarkId::new(format!("{strategy:?}"), ps.len()),
            &ps,
            |b, ps| {
                b.iter(|| black_box(batch::evaluate(&dist, Operation::Quantile, ps, strategy)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_density, bench_quantile, bench_batch);
criterion_main!(benches);
