//! Benchmarks for ArrayMap vs VecDeque vs BTreeMap
//!
//! Run with: `cargo bench --bench array_map`

use arraymap_core::ArrayMap;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::collections::{BTreeMap, VecDeque};

fn bench_push_unshift(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_unshift");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("ArrayMap", size), &size, |b, &size| {
            b.iter(|| {
                let mut map = ArrayMap::new();
                for i in 0..size {
                    map.push(black_box(i)).unshift(black_box(i));
                }
                black_box(map);
            });
        });

        group.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |b, &size| {
            b.iter(|| {
                let mut deque = VecDeque::new();
                for i in 0..size {
                    deque.push_back(black_box(i));
                    deque.push_front(black_box(i));
                }
                black_box(deque);
            });
        });
    }

    group.finish();
}

fn bench_sparse_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_get");

    for stride in [1i64, 64, 4096] {
        let mut map = ArrayMap::new();
        let mut tree = BTreeMap::new();
        for i in -512..512 {
            map.insert(i * stride, i);
            tree.insert(i * stride, i);
        }

        group.bench_with_input(BenchmarkId::new("ArrayMap", stride), &stride, |b, &stride| {
            b.iter(|| {
                let mut sum = 0;
                for i in -512..512 {
                    sum += map.get(black_box(i * stride)).copied().unwrap_or(0);
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", stride), &stride, |b, &stride| {
            b.iter(|| {
                let mut sum = 0;
                for i in -512..512 {
                    sum += tree.get(&black_box(i * stride)).copied().unwrap_or(0);
                }
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    for size in [16i64, 256, 4096] {
        let map: ArrayMap<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("iterator", size), &map, |b, map| {
            b.iter(|| {
                let mut cursor = map.iterator();
                while cursor.has_next() {
                    black_box(cursor.next());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_unshift, bench_sparse_get, bench_snapshot);
criterion_main!(benches);
