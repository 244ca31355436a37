//! Wordchain Criterion Benchmark
//!
//! Setup cost (chain generation + keyspace) and emission throughput over
//! synthetic wordlists.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;
use std::io;
use wordchain::{Config, Generator, WordStore};

/// Synthetic wordlist: `per_len` random lowercase elements at each
/// length in `1..=max_len`.
fn synthetic_store(per_len: usize, max_len: usize) -> WordStore {
    let mut rng = rand::rng();
    let mut store = WordStore::new();

    for len in 1..=max_len {
        let mut elem = vec![0u8; len];
        for _ in 0..per_len {
            for b in &mut elem {
                *b = rng.random_range(b'a'..=b'z');
            }
            store.push(&elem);
        }
    }

    store
}

// =============================================================================
// BENCHMARK 1: SETUP
// =============================================================================

/// Chain generation and keyspace arithmetic across the full length range.
fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Setup");

    for per_len in [100, 1000, 10_000] {
        let store = synthetic_store(per_len, 16);

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(per_len),
            &store,
            |b, store| {
                b.iter(|| {
                    let generator =
                        Generator::new(store.clone(), Config::default()).unwrap();
                    black_box(generator.keyspace().clone())
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: EMISSION
// =============================================================================

/// Candidate emission throughput into a discarding sink.
fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Emission");

    const LIMIT: u64 = 1_000_000;
    group.throughput(Throughput::Elements(LIMIT));

    let store = synthetic_store(1000, 16);

    group.bench_function("1M-candidates", |b| {
        b.iter(|| {
            let config = Config {
                limit: Some(LIMIT.into()),
                ..Config::default()
            };
            let generator = Generator::new(store.clone(), config).unwrap();
            generator.run(&mut io::sink()).unwrap();
        });
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 3: SEEK
// =============================================================================

/// Deep-skip fast-forward: land far into the keyspace, emit one chunk.
fn bench_seek(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Seek");

    let store = synthetic_store(1000, 16);

    group.bench_function("skip-1e18-emit-1000", |b| {
        b.iter(|| {
            let config = Config {
                skip: 1_000_000_000_000_000_000u64.into(),
                limit: Some(1000u32.into()),
                ..Config::default()
            };
            let generator = Generator::new(store.clone(), config).unwrap();
            generator.run(&mut io::sink()).unwrap();
        });
    });
    group.finish();
}

criterion_group!(benches, bench_setup, bench_emission, bench_seek);
criterion_main!(benches);
