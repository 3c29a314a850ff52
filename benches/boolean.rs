//! Benchmarks for polygon Boolean operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use polybool2d::{boolean_segments, prepare, BooleanOp, InputPolygon, Point2};

/// Generates a regular n-gon approximating a circle.
fn generate_ngon(sides: usize, cx: f64, cy: f64, radius: f64) -> InputPolygon<f64> {
    let pts = (0..sides)
        .map(|i| {
            let theta = i as f64 / sides as f64 * 2.0 * std::f64::consts::PI;
            Point2::new(cx + radius * theta.cos(), cy + radius * theta.sin())
        })
        .collect();
    InputPolygon::from_outer(pts)
}

fn bench_prepare(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepare");

    // The cross-cut pass is O(|A| * |B|), so keep the edge counts moderate.
    for sides in [8, 32, 128, 512] {
        let a = generate_ngon(sides, 0.0, 0.0, 1.0);
        let b = generate_ngon(sides, 0.8, 0.0, 1.0);
        group.throughput(Throughput::Elements((sides * sides) as u64));

        group.bench_with_input(BenchmarkId::new("overlapping_ngons", sides), &sides, |bn, _| {
            bn.iter(|| prepare(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");

    let sides = 64;
    let a = generate_ngon(sides, 0.0, 0.0, 1.0);
    let b = generate_ngon(sides, 0.8, 0.0, 1.0);
    let prep = prepare(&a, &b);
    group.throughput(Throughput::Elements(prep.atoms.len() as u64));

    for (name, op) in [
        ("union", BooleanOp::Union),
        ("intersection", BooleanOp::Intersection),
        ("a_minus_b", BooleanOp::AMinusB),
        ("b_minus_a", BooleanOp::BMinusA),
    ] {
        group.bench_function(name, |bn| {
            bn.iter(|| boolean_segments(black_box(&prep), black_box(&a), black_box(&b), op))
        });
    }

    group.finish();
}

fn bench_with_holes(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_holes");

    let sides = 48;
    let mut a = generate_ngon(sides, 0.0, 0.0, 2.0);
    a.holes.push(generate_ngon(sides, 0.0, 0.0, 1.0).outer);
    let b = generate_ngon(sides, 1.5, 0.0, 2.0);

    group.bench_function("prepare_and_intersect", |bn| {
        bn.iter(|| {
            let prep = prepare(black_box(&a), black_box(&b));
            boolean_segments(&prep, &a, &b, BooleanOp::Intersection)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_prepare, bench_operations, bench_with_holes);
criterion_main!(benches);
