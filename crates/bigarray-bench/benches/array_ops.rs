//! Criterion micro-benchmarks for big array access and resize.

use std::hint::black_box;

use bigarray::BigIntArray;
use bigarray_bench::{counting_array, scattered_indices};
use criterion::{criterion_group, criterion_main, Criterion};

/// 1M ints = 256 pages at the default page size.
const SIZE: u64 = 1 << 20;

/// Benchmark: read every element in index order.
fn bench_sequential_get(c: &mut Criterion) {
    let array = counting_array(SIZE).unwrap();
    c.bench_function("sequential_get_1m", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for i in 0..SIZE {
                sum += i64::from(array.get(i).unwrap());
            }
            black_box(sum);
        });
    });
}

/// Benchmark: walk every element through the iterator.
fn bench_iter(c: &mut Criterion) {
    let array = counting_array(SIZE).unwrap();
    c.bench_function("iter_sum_1m", |b| {
        b.iter(|| {
            let sum: i64 = array.iter().map(i64::from).sum();
            black_box(sum);
        });
    });
}

/// Benchmark: swap-set every element in index order.
fn bench_sequential_set(c: &mut Criterion) {
    let mut array = BigIntArray::new(SIZE).unwrap();
    c.bench_function("sequential_set_1m", |b| {
        b.iter(|| {
            for i in 0..SIZE {
                black_box(array.set(i, i as i32).unwrap());
            }
        });
    });
}

/// Benchmark: increments at scattered indices (histogram-style counting).
fn bench_scattered_increment(c: &mut Criterion) {
    let mut array = BigIntArray::new(SIZE).unwrap();
    let indices = scattered_indices(100_000, SIZE, 42);
    c.bench_function("scattered_increment_100k", |b| {
        b.iter(|| {
            for &i in &indices {
                black_box(array.increment(i, 1).unwrap());
            }
        });
    });
}

/// Benchmark: grow from empty one page at a time, then shrink back.
fn bench_grow_shrink(c: &mut Criterion) {
    c.bench_function("grow_shrink_256_pages", |b| {
        b.iter(|| {
            let mut array = BigIntArray::new(0).unwrap();
            for pages in 1..=256u64 {
                array.resize(pages * 4096).unwrap();
            }
            array.resize(10).unwrap();
            black_box(array.ram_bytes_used());
        });
    });
}

criterion_group!(
    benches,
    bench_sequential_get,
    bench_iter,
    bench_sequential_set,
    bench_scattered_increment,
    bench_grow_shrink
);
criterion_main!(benches);
