use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nalgebra::Complex;

use dspl_rs::signal::spectral::FftPlan;

fn ramp(n: usize) -> Vec<Complex<f64>> {
    (0..n).map(|k| Complex::new(k as f64, 0.0)).collect()
}

fn forward_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("FftPlan::forward");

    for n in [64usize, 256, 1000, 4096] {
        let plan = FftPlan::new(n).unwrap();
        let x = ramp(n);

        group.bench_with_input(BenchmarkId::new("composite_size", n), &x, |b, x| {
            b.iter(|| plan.forward(black_box(x)).unwrap())
        });
    }

    group.finish();
}

fn round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("FftPlan::round_trip");
    let n = 1024;
    let plan = FftPlan::new(n).unwrap();
    let x = ramp(n);

    group.bench_function("forward_then_inverse", |b| {
        b.iter(|| {
            let y = plan.forward(black_box(&x)).unwrap();
            plan.inverse(black_box(&y)).unwrap()
        })
    });

    group.finish();
}

fn plan_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("FftPlan::new");

    for n in [100usize, 1000, 2048] {
        group.bench_with_input(BenchmarkId::new("size", n), &n, |b, &n| {
            b.iter(|| FftPlan::<f64>::new(black_box(n)))
        });
    }

    group.finish();
}

criterion_group!(benches, forward_transform, round_trip, plan_creation);
criterion_main!(benches);
