//! Benchmarks for the normalization kernels
//!
//! Compares the auto-selected kernel against the scalar reference across the
//! pixel counts of the standard harness image sizes (10x10, 100x100,
//! 1000x1000), plus an explicit NEON group on ARM.
//!
//! Run with: cargo bench --bench normalize

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pixelnorm::ops::{normalize, normalize_scalar};

/// Pixel counts of the standard harness image sizes
const SIZES: [usize; 3] = [100, 10_000, 1_000_000];

/// Generate a deterministic pixel buffer covering the full value range
fn generate_pixels(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 256) as u8).collect()
}

/// Benchmark the auto-selected kernel across image sizes
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in SIZES.iter() {
        let pixels = generate_pixels(*size);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| normalize(black_box(&pixels)))
        });
    }

    group.finish();
}

/// Benchmark the scalar reference for comparison
fn bench_normalize_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_scalar");

    for size in SIZES.iter() {
        let pixels = generate_pixels(*size);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| normalize_scalar(black_box(&pixels)))
        });
    }

    group.finish();
}

/// Benchmark the NEON kernel directly (when available) for comparison
#[cfg(target_arch = "aarch64")]
mod neon_comparison {
    use super::*;
    use pixelnorm::ops::normalize_neon;

    pub fn bench_normalize_neon(c: &mut Criterion) {
        let mut group = c.benchmark_group("normalize_neon");

        for size in SIZES.iter() {
            let pixels = generate_pixels(*size);

            group.throughput(Throughput::Bytes(*size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
                b.iter(|| unsafe { normalize_neon(black_box(&pixels)) })
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_normalize, bench_normalize_scalar);

#[cfg(target_arch = "aarch64")]
criterion_group!(neon_benches, neon_comparison::bench_normalize_neon);

#[cfg(target_arch = "aarch64")]
criterion_main!(benches, neon_benches);

#[cfg(not(target_arch = "aarch64"))]
criterion_main!(benches);
