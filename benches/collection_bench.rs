//! Benchmark for Collection vs standard Vec.
//!
//! Compares the collection pipeline operators against hand-written
//! equivalents over Rust's standard Vec for common operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use kolekt::collection::Collection;
use std::hint::black_box;

// =============================================================================
// Construction Benchmark
// =============================================================================

fn benchmark_from_values(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("from_values");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let collection = Collection::from_values(0..size);
                    black_box(collection)
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let vector: Vec<i32> = (0..size).collect();
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// map + filter Benchmark
// =============================================================================

fn benchmark_map_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_filter");

    for size in [100, 1000, 10000] {
        let collection = Collection::from_values(0..size);
        let vector: Vec<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| {
                    let result = collection
                        .map(|value| value * 2)
                        .filter(|value, _| value % 3 == 0);
                    black_box(result)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Vec", size),
            &vector,
            |bencher, vector| {
                bencher.iter(|| {
                    let result: Vec<i32> = vector
                        .iter()
                        .map(|value| value * 2)
                        .filter(|value| value % 3 == 0)
                        .collect();
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// sort Benchmark
// =============================================================================

fn benchmark_sort(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort");

    for size in [100, 1000, 10000] {
        let collection = Collection::from_values((0..size).rev());
        let vector: Vec<i32> = (0..size).rev().collect();

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.sort()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Vec", size),
            &vector,
            |bencher, vector| {
                bencher.iter(|| {
                    let mut result = vector.clone();
                    result.sort();
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// group_by Benchmark
// =============================================================================

fn benchmark_group_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [100, 1000, 10000] {
        let collection = Collection::from_values(0..size);

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.group_by(|value, _| (value % 7) as usize)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_from_values,
    benchmark_map_filter,
    benchmark_sort,
    benchmark_group_by,
);
criterion_main!(benches);
