//! Two-source walk benchmark.
//!
//! Measures every merge operation on two interleaved sorted inputs, into a
//! fixed destination and into a growable one.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seqview::compare::NaturalOrder;
use seqview::merge::{MergeOperation, add_two_sources, copy_two_sources};
use seqview::view::{ExpandableView, SequenceView, SequenceViewMut};
use std::hint::black_box;

const SIZES: [i32; 3] = [100, 10_000, 1_000_000];

const OPERATIONS: [MergeOperation; 5] = [
    MergeOperation::Merge,
    MergeOperation::Union,
    MergeOperation::Intersection,
    MergeOperation::Difference,
    MergeOperation::SymmetricDifference,
];

/// Even numbers and multiples of three, so the inputs overlap on a sixth.
fn generate_sources(size: i32) -> (Vec<i32>, Vec<i32>) {
    ((0..size).map(|value| value * 2).collect(), (0..size).map(|value| value * 3).collect())
}

fn benchmark_copy(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge_copy");

    for size in SIZES {
        let (first, second) = generate_sources(size);
        let mut output = vec![0; first.len() + second.len()];
        for operation in OPERATIONS {
            group.bench_with_input(BenchmarkId::new(operation.name(), size), &size, |bencher, _| {
                bencher.iter(|| {
                    black_box(copy_two_sources(
                        operation,
                        SequenceView::new(black_box(&first)),
                        SequenceView::new(black_box(&second)),
                        &mut SequenceViewMut::new(&mut output),
                        &NaturalOrder,
                    ))
                });
            });
        }
    }

    group.finish();
}

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("merge_add");

    for size in SIZES {
        let (first, second) = generate_sources(size);
        for operation in OPERATIONS {
            group.bench_with_input(BenchmarkId::new(operation.name(), size), &size, |bencher, _| {
                bencher.iter(|| {
                    let mut output = Vec::new();
                    add_two_sources(
                        operation,
                        SequenceView::new(black_box(&first)),
                        SequenceView::new(black_box(&second)),
                        &mut ExpandableView::at_end(&mut output),
                        &NaturalOrder,
                    );
                    black_box(output)
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_copy, benchmark_add);
criterion_main!(benches);
