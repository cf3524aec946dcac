//! Criterion benchmarks for the sequential and parallel bubble sorts.
//!
//! The comparator burns a fixed amount of CPU per call, which is the regime
//! the parallel sorters are built for: comparisons dominate, and the pool's
//! channel overhead is amortised.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use foamsort::generate;
use foamsort::{Algorithm, Case, PoolConfig, Sequence, Sorter};

const SIZE: usize = 1000;

/// Sum 0..1000 and check the result, so the work cannot be optimised out.
fn busy_work() {
    let mut sum = 0u64;
    for i in 0..black_box(1000u64) {
        sum += i;
    }
    assert_eq!(sum, 499_500);
}

fn expensive_less(seq: &Sequence, a: usize, b: usize) -> bool {
    busy_work();
    seq.get(a) < seq.get(b)
}

fn bench_case(c: &mut Criterion, case: Case) {
    let mut group = c.benchmark_group(format!("sort_{}", case.name()));
    group.sample_size(10);
    group.throughput(Throughput::Elements(SIZE as u64));

    let config = PoolConfig::default();
    for algorithm in Algorithm::ALL {
        let sorter = algorithm.sorter(config);
        group.bench_function(BenchmarkId::new(algorithm.name(), SIZE), |b| {
            b.iter_batched(
                || Sequence::new(&case.generate(SIZE, Some(42))),
                |mut seq| {
                    sorter.sort(black_box(&mut seq), &expensive_less);
                    seq
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    // Standard library baseline under the same comparator cost.
    group.bench_function(BenchmarkId::new("std", SIZE), |b| {
        b.iter_batched(
            || case.generate(SIZE, Some(42)),
            |mut data| {
                data.sort_unstable_by(|x, y| {
                    busy_work();
                    x.cmp(y)
                });
                data
            },
            criterion::BatchSize::LargeInput,
        )
    });

    group.finish();
}

fn bench_best(c: &mut Criterion) {
    bench_case(c, Case::Best);
}

fn bench_worst(c: &mut Criterion) {
    bench_case(c, Case::Worst);
}

fn bench_random(c: &mut Criterion) {
    bench_case(c, Case::Random);
}

/// Pool start-up and teardown cost on a sorted input, with a cheap comparator.
fn bench_pool_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool_overhead");
    let config = PoolConfig::default();
    let input = generate::best(SIZE);
    for algorithm in [Algorithm::Foam, Algorithm::Reddit] {
        let sorter = algorithm.sorter(config);
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || Sequence::new(&input),
                |mut seq| {
                    sorter.sort(&mut seq, &foamsort::ascending);
                    seq
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_best, bench_worst, bench_random, bench_pool_overhead);
criterion_main!(benches);
