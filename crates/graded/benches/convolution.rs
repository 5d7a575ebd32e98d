//! Benchmarks for graded-element arithmetic and the ideal decision
//! procedures.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use graded::{Factor, GradedElement, HomogeneousElement, Ideal, PrimalityEngine};

type E = GradedElement<u32, i64>;
type H = HomogeneousElement<u32, i64>;

fn dense(len: u32, seed: i64) -> E {
    E::from_terms((0..len).map(|i| (i, seed + i64::from(i))))
}

fn bench_convolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolution");

    for len in [8u32, 32, 128] {
        let x = dense(len, 1);
        let y = dense(len, -3);
        group.throughput(Throughput::Elements(u64::from(len)));
        group.bench_function(BenchmarkId::new("dense", len), |b| {
            b.iter(|| black_box(black_box(&x) * black_box(&y)));
        });
    }

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    let x = dense(128, 5);

    group.bench_function("sum_of_components_128", |b| {
        b.iter(|| black_box(black_box(&x).sum_of_components()));
    });
    group.bench_function("project_hit", |b| {
        b.iter(|| black_box(black_box(&x).project(black_box(64))));
    });

    group.finish();
}

fn bench_decisions(c: &mut Criterion) {
    let mut group = c.benchmark_group("decisions");

    let in_t = |x: &E| x.support().all(|i| i >= 1);
    let ideal = Ideal::new([E::monomial(1, 1)], in_t);
    group.bench_function("is_component_closed", |b| {
        b.iter(|| black_box(ideal.is_component_closed()));
    });

    let engine = PrimalityEngine::new(
        |h: &H| h.index() >= 1,
        |a: &H, _: &H| {
            if a.index() >= 1 {
                Factor::Left
            } else {
                Factor::Right
            }
        },
    )
    .expect("(t) is proper");
    let x = dense(32, 7);
    let y = {
        let shifted: Vec<(u32, i64)> = (1..33).map(|i| (i, 2 + i64::from(i))).collect();
        E::from_terms(shifted)
    };
    group.bench_function("locate_factor_32", |b| {
        b.iter(|| black_box(engine.locate_factor(black_box(&y), black_box(&x))));
    });

    group.finish();
}

criterion_group!(benches, bench_convolution, bench_projection, bench_decisions);
criterion_main!(benches);
