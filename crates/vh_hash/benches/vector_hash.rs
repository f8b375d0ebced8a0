#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Hashing benchmarks.
//!
//! Measures per-position hashing and equality across input sizes, with and
//! without parallel dispatch.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use vh_hash::{HashConfig, HashEngine};
use vh_value::na::na_real;
use vh_value::{CharInterner, Value};

/// Doubles with a sprinkling of missing values.
fn generate_doubles(n: usize) -> Value {
    Value::double(
        (0..n)
            .map(|i| if i % 17 == 0 { na_real() } else { i as f64 * 0.5 })
            .collect(),
    )
}

/// A two-column table of `n` rows.
fn generate_table(n: usize) -> Value {
    let interner = CharInterner::global();
    let labels = ["red", "green", "blue"];
    let ids = Value::integer((0..n).map(|i| i32::try_from(i % 1000).unwrap()).collect());
    let colors = Value::strings(interner, (0..n).map(|i| Some(labels[i % labels.len()])));
    Value::table(
        vec![(interner.intern("id"), ids), (interner.intern("color"), colors)],
        n,
    )
}

/// A list of `n` small integer vectors.
fn generate_list(n: usize) -> Value {
    Value::list(
        (0..n)
            .map(|i| Value::integer(vec![i32::try_from(i % 97).unwrap(), 1, 2]))
            .collect(),
    )
}

fn bench_vector_hash_doubles(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_hash/doubles");
    group.measurement_time(Duration::from_secs(5));

    let sequential = HashEngine::new(HashConfig::sequential());
    let parallel = HashEngine::new(HashConfig::default().with_parallel_threshold(0));

    for size in [1_000, 100_000, 1_000_000] {
        let x = generate_doubles(size);
        group.bench_with_input(BenchmarkId::new("sequential", size), &x, |b, x| {
            b.iter(|| black_box(sequential.vector_hash(x).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &x, |b, x| {
            b.iter(|| black_box(parallel.vector_hash(x).unwrap()));
        });
    }

    group.finish();
}

fn bench_vector_hash_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_hash/table");
    group.measurement_time(Duration::from_secs(5));

    let engine = HashEngine::default();
    for size in [1_000, 100_000] {
        let t = generate_table(size);
        group.bench_with_input(BenchmarkId::new("rows", size), &t, |b, t| {
            b.iter(|| black_box(engine.vector_hash(t).unwrap()));
        });
    }

    group.finish();
}

fn bench_vector_equal_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_equal/list");
    group.measurement_time(Duration::from_secs(5));

    let engine = HashEngine::default();
    let needle = Value::list(vec![Value::integer(vec![42, 1, 2])]);
    for size in [1_000, 100_000] {
        let x = generate_list(size);
        group.bench_with_input(BenchmarkId::new("elements", size), &x, |b, x| {
            b.iter(|| black_box(engine.vector_equal(x, &needle).unwrap()));
        });
    }

    group.finish();
}

fn bench_whole_value_hash(c: &mut Criterion) {
    let engine = HashEngine::default();
    let x = generate_list(10_000);
    c.bench_function("whole_value_hash/list_10k", |b| {
        b.iter(|| black_box(engine.whole_value_hash(&x).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_vector_hash_doubles,
    bench_vector_hash_table,
    bench_vector_equal_list,
    bench_whole_value_hash
);
criterion_main!(benches);
