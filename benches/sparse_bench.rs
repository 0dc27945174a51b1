//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_indexed::{IndexedList, SparseIndexedList};

/// Deterministic scatter of positions across the list
fn positions(length: i64, count: usize) -> Vec<i64> {
    (0..count as i64)
        .map(|i| (i * 7_919) % length)
        .collect()
}

fn benchmark_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    for populated in [16usize, 256, 1_024] {
        let targets = positions(100_000, populated);
        group.bench_with_input(BenchmarkId::from_parameter(populated), &targets, |b, targets| {
            b.iter(|| {
                let mut list = SparseIndexedList::new(100_000, 0u32).unwrap();
                for &position in targets {
                    list.put(position, 1).unwrap();
                }
                black_box(list.populated())
            });
        });
    }
    group.finish();
}

fn benchmark_iterate(c: &mut Criterion) {
    let mut list = SparseIndexedList::new(100_000, 0u32).unwrap();
    for position in positions(100_000, 1_024) {
        list.put(position, 1).unwrap();
    }

    c.bench_function("iterate_length=100000", |b| {
        b.iter(|| black_box(list.iter().copied().sum::<u32>()));
    });
}

criterion_group!(benches, benchmark_put, benchmark_iterate);
criterion_main!(benches);
