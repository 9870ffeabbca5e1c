//! Benchmarks comparing the three search strategies against the stdlib
//! binary search baseline.
//!
//! Distributions exercised:
//! - uniform: the ramp 1..=n, interpolation's best case
//! - random:  sorted uniform-random keys, the realistic middle ground
//! - skewed:  dense ramp with a far-flung tail, interpolation's worst
//!   case and the regime the hybrid delegation exists for
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use probex::testing::{ramp, skewed_tail};
use probex::{fibonacci_search, hybrid_search, interpolation_search};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: &[usize] = &[1_000, 100_000];
const BENCH_SEED: u64 = 0x5eed;

/// Sorted uniform-random keys with a fixed seed.
fn sorted_random(len: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(BENCH_SEED);
    let mut values: Vec<i64> = (0..len)
        .map(|_| rng.random_range(1..=len as i64 * 10))
        .collect();
    values.sort_unstable();
    values
}

/// A deterministic spread of present targets across the sequence.
fn targets(seq: &[i64]) -> Vec<i64> {
    seq.iter().step_by(seq.len() / 64 + 1).copied().collect()
}

fn bench_distribution(c: &mut Criterion, dist_name: &str, make_seq: fn(usize) -> Vec<i64>) {
    let mut group = c.benchmark_group(format!("search/{dist_name}"));

    for &size in SIZES {
        let seq = make_seq(size);
        let probes = targets(&seq);

        group.bench_with_input(BenchmarkId::new("fibonacci", size), &seq, |b, seq| {
            b.iter(|| {
                for &t in &probes {
                    black_box(fibonacci_search(seq, black_box(t)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("interpolation", size), &seq, |b, seq| {
            b.iter(|| {
                for &t in &probes {
                    black_box(interpolation_search(seq, black_box(t)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("hybrid", size), &seq, |b, seq| {
            b.iter(|| {
                for &t in &probes {
                    black_box(hybrid_search(seq, black_box(t)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary", size), &seq, |b, seq| {
            b.iter(|| {
                for &t in &probes {
                    black_box(seq.binary_search(black_box(&t)).ok());
                }
            });
        });
    }

    group.finish();
}

fn bench_uniform(c: &mut Criterion) {
    bench_distribution(c, "uniform", ramp);
}

fn bench_random(c: &mut Criterion) {
    bench_distribution(c, "random", sorted_random);
}

fn bench_skewed(c: &mut Criterion) {
    bench_distribution(c, "skewed", |n| skewed_tail(n, i64::MAX / 2));
}

criterion_group!(benches, bench_uniform, bench_random, bench_skewed);
criterion_main!(benches);
