//! PRVHASH Criterion Benchmark
//!
//! Latency and throughput of every hash variant, the stream cipher and the
//! generator, with BLAKE3, SHA-256 and XXH3 as reference points.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use sha2::Digest;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (Hash Map keys, IDs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(8, "8B"), (16, "16B"), (64, "64B"), (256, "256B"), (KB, "1KB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("hash64_64", name), &input, |b, data| {
            b.iter(|| prvhash::hash64_64(black_box(data), 0))
        });
        group.bench_with_input(BenchmarkId::new("prvhash64s-256", name), &input, |b, data| {
            b.iter(|| {
                let mut out = [0u8; 32];
                prvhash::hash64s(black_box(data), &mut out).unwrap();
                out
            })
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: VARIANTS
// =============================================================================

/// Throughput of each word width and lane count at a fixed 256-bit output.
fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Variants");

    let size = 64 * KB;
    let input = random_input(size);
    group.throughput(Throughput::Bytes(size as u64));

    fn run<W: prvhash::Word, const LANES: usize>(data: &[u8]) -> [u8; 32] {
        let mut out = [0u8; 32];
        prvhash::hash::<W, LANES>(data, &mut out, W::default()).unwrap();
        out
    }

    group.bench_function("prvhash64s", |b| b.iter(|| run::<u64, 4>(black_box(&input))));
    group.bench_function("prvhash64", |b| b.iter(|| run::<u64, 1>(black_box(&input))));
    group.bench_function("prvhash32", |b| b.iter(|| run::<u32, 1>(black_box(&input))));
    group.bench_function("prvhash16", |b| b.iter(|| run::<u16, 1>(black_box(&input))));
    group.bench_function("prvhash8", |b| b.iter(|| run::<u8, 1>(black_box(&input))));
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Throughput for incremental updates (Network streams, large file hashing).
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let test_cases = [
        (MB, 61, "1MB-61B-chunks"),
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (16 * MB, 64 * KB, "16MB-64KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = prvhash::Hasher64s::new(32).unwrap();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: KEYSTREAM
// =============================================================================

/// Stream cipher and generator throughput, including keying cost.
fn bench_keystream(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Keystream");

    let key = [42u8; 32];
    let nonce = [7u8; 16];

    group.bench_function("cipher-init", |b| {
        b.iter(|| prvhash::StreamCipher::new(black_box(&key), black_box(&nonce)).unwrap())
    });

    for (size, name) in [(KB, "1KB"), (MB, "1MB")] {
        let mut buf = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        let mut cipher = prvhash::StreamCipher::new(&key, &nonce).unwrap();
        group.bench_function(BenchmarkId::new("cipher-xor", name), |b| {
            b.iter(|| cipher.apply_keystream(black_box(&mut buf)))
        });

        let mut rng = prvhash::Generator::from_seed(1);
        group.bench_function(BenchmarkId::new("generator-fill", name), |b| {
            b.iter(|| rng.fill_bytes(black_box(&mut buf)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: COMPARISON
// =============================================================================

/// PRVHASH against established hashes on identical inputs.
fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Comparison");

    for (size, name) in [(64, "64B"), (4 * KB, "4KB"), (MB, "1MB")] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("prvhash64s", name), &input, |b, data| {
            b.iter(|| {
                let mut out = [0u8; 32];
                prvhash::hash64s(black_box(data), &mut out).unwrap();
                out
            })
        });
        group.bench_with_input(BenchmarkId::new("blake3", name), &input, |b, data| {
            b.iter(|| blake3::hash(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha256", name), &input, |b, data| {
            b.iter(|| sha2::Sha256::digest(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("xxh3-64", name), &input, |b, data| {
            b.iter(|| xxhash_rust::xxh3::xxh3_64(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_variants,
    bench_streaming,
    bench_keystream,
    bench_comparison,
);
criterion_main!(benches);
