//! Identifier allocation benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use shortly::alloc::{self, ID_LENGTH};
use shortly::store::LinkTable;

// ============== random_id benchmarks ==============

fn bench_random_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc/random_id");

    group.bench_function("draw", |b| {
        b.iter(|| {
            let id = alloc::random_id();
            assert_eq!(id.len(), ID_LENGTH);
        });
    });

    group.finish();
}

// ============== allocate benchmarks ==============

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc/allocate");

    group.bench_function("empty_table", |b| {
        let table = LinkTable::new();
        b.iter(|| {
            let id = alloc::allocate(|candidate| table.contains(candidate)).unwrap();
            assert_eq!(id.len(), ID_LENGTH);
        });
    });

    // Collision pressure grows with the number of taken identifiers, but
    // stays negligible against the 62^6 space.
    for size in [100usize, 1_000, 10_000] {
        let mut table = LinkTable::new();
        for i in 0..size {
            table.put(format!("{:06}", i), "https://example.com");
        }

        group.bench_with_input(BenchmarkId::new("occupied", size), &table, |b, table| {
            b.iter(|| {
                let id = alloc::allocate(|candidate| table.contains(candidate)).unwrap();
                assert_eq!(id.len(), ID_LENGTH);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_id, bench_allocate);
criterion_main!(benches);
