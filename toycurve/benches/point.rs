//! Curve point arithmetic benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use std::hint::black_box;
use toycurve::{AffinePoint, CurveGroup, ECRSA_CURVE};

fn test_points(group: &CurveGroup) -> (AffinePoint, AffinePoint) {
    (group.points()[17], group.points()[201])
}

fn bench_point_add<M: Measurement>(bench: &mut BenchmarkGroup<'_, M>, group: &CurveGroup) {
    let (p, q) = test_points(group);
    bench.bench_function("add", |b| b.iter(|| black_box(p) + black_box(q)));
}

fn bench_point_double<M: Measurement>(bench: &mut BenchmarkGroup<'_, M>, group: &CurveGroup) {
    let (p, _) = test_points(group);
    bench.bench_function("double", |b| b.iter(|| black_box(p).double()));
}

fn bench_point_mul<M: Measurement>(bench: &mut BenchmarkGroup<'_, M>, group: &CurveGroup) {
    let (p, _) = test_points(group);
    bench.bench_function("point-scalar mul", |b| {
        b.iter(|| black_box(p) * black_box(205))
    });
}

fn bench_point(c: &mut Criterion) {
    let group = CurveGroup::new(ECRSA_CURVE);
    let mut bench = c.benchmark_group("point operations");
    bench_point_add(&mut bench, &group);
    bench_point_double(&mut bench, &group);
    bench_point_mul(&mut bench, &group);
    bench.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("enumerate points", |b| {
        b.iter(|| CurveGroup::new(black_box(ECRSA_CURVE)))
    });
}

criterion_group!(benches, bench_point, bench_enumerate);
criterion_main!(benches);
