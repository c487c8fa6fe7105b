//! Benchmarks for dotver-core: version parsing and track selection.
//!
//! Popular packages publish a few hundred stable versions, so selection over
//! 500 versions is the realistic upper bound.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dotver_core::{parse_version, select_versions};
use semver::Version;
use std::hint::black_box;

fn generate_versions(count: u64) -> Vec<Version> {
    (0..count)
        .map(|i| Version::new(i / 50, (i / 10) % 5, i % 10))
        .collect()
}

/// Benchmark Current/LTS selection across version list sizes.
fn bench_select_versions(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_versions");

    for size in [10u64, 100, 500] {
        let versions = generate_versions(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &versions, |b, v| {
            b.iter(|| select_versions(black_box(v)))
        });
    }

    group.finish();
}

/// Benchmark parsing of registry version strings.
fn bench_parse_version(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_version");

    group.bench_function("semver", |b| b.iter(|| parse_version(black_box("3.1.5"))));
    group.bench_function("two_part", |b| b.iter(|| parse_version(black_box("4.7"))));
    group.bench_function("four_part", |b| {
        b.iter(|| parse_version(black_box("1.0.0.0")))
    });

    group.finish();
}

criterion_group!(benches, bench_select_versions, bench_parse_version);
criterion_main!(benches);
