//! Partial sort and selection benchmark.
//!
//! Compares `partial_sort` with a full `sort_unstable` (baseline) for a small
//! and a large `k`, and `item_at` for the median.
//!
//! Inputs are shuffled once with a seeded generator and cloned per iteration.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use seqview::compare::NaturalOrder;
use seqview::order::{item_at, partial_sort};
use seqview::view::SequenceViewMut;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 100_000, 1_000_000];

fn generate_shuffled(size: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..size as u64).collect();
    values.shuffle(&mut StdRng::seed_from_u64(42));
    values
}

fn benchmark_partial_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("partial_sort");

    for size in SIZES {
        let base = generate_shuffled(size);
        for k in [10, size / 10] {
            group.bench_with_input(BenchmarkId::new(format!("k={k}"), size), &k, |bencher, &k| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut values| {
                        partial_sort(&mut SequenceViewMut::new(&mut values), black_box(k), &NaturalOrder)
                            .unwrap();
                        values
                    },
                    BatchSize::LargeInput,
                );
            });
        }
        group.bench_with_input(BenchmarkId::new("sort_unstable", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base.clone(),
                |mut values| {
                    values.sort_unstable();
                    values
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_item_at(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("item_at");

    for size in SIZES {
        let base = generate_shuffled(size);
        group.bench_with_input(BenchmarkId::new("median", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |mut values| {
                    black_box(
                        item_at(&mut SequenceViewMut::new(&mut values), size / 2, &NaturalOrder)
                            .copied()
                            .ok(),
                    )
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_partial_sort, benchmark_item_at);
criterion_main!(benches);
