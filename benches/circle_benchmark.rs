// ============================================================================
// Precise Circle Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Construction - π generation at increasing precision
// 2. Derived Setters - radius recovery from diameter, area, circumference
// 3. Point Queries - distance and classification against a point
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use precise_circle::prelude::*;
use std::hint::black_box;

// ============================================================================
// Construction Benchmarks
// Dominated by computing π at the circle's precision
// ============================================================================

fn benchmark_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for precision in [7u32, 34, 100, 500].iter() {
        let mc = MathContext::new(*precision, RoundingMode::HalfEven).unwrap();
        group.bench_with_input(BenchmarkId::new("with_context", precision), &mc, |b, mc| {
            b.iter(|| black_box(Circle::with_context(*mc)));
        });
    }

    group.finish();
}

// ============================================================================
// Derived Setter Benchmarks
// ============================================================================

fn benchmark_derived_setters(c: &mut Criterion) {
    let mut group = c.benchmark_group("derived_setters");
    let mut circle = Circle::new();

    group.bench_function("set_diameter", |b| {
        b.iter(|| circle.set_diameter(black_box("12.5")).unwrap());
    });
    group.bench_function("set_area", |b| {
        b.iter(|| circle.set_area(black_box("1234.5678")).unwrap());
    });
    group.bench_function("set_circumference", |b| {
        b.iter(|| circle.set_circumference(black_box("42.42")).unwrap());
    });

    group.finish();
}

fn benchmark_derived_getters(c: &mut Criterion) {
    let mut circle = Circle::new();
    circle.set_radius("7.123456789").unwrap();

    c.bench_function("area_and_circumference", |b| {
        b.iter(|| {
            black_box(circle.area().unwrap());
            black_box(circle.circumference().unwrap());
        });
    });
}

// ============================================================================
// Point Query Benchmarks
// ============================================================================

fn benchmark_point_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_queries");
    let mut circle = Circle::new();
    circle.set_coordinates("1.5", "-2.25").unwrap();
    circle.set_radius(10).unwrap();

    group.bench_function("center_distance_to_point", |b| {
        b.iter(|| black_box(circle.center_distance_to_point(black_box(7), black_box("3.3"))));
    });
    group.bench_function("compare_point_to_circle", |b| {
        b.iter(|| black_box(circle.compare_point_to_circle(black_box(7), black_box("3.3"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_derived_setters,
    benchmark_derived_getters,
    benchmark_point_queries,
);
criterion_main!(benches);
