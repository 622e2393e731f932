//! Benchmarks for heading scanning and id derivation.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::cast_possible_truncation
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use postnav::outline::{scan, RawHeading};
use postnav::slug::heading_id;

fn synthesize_headings(count: u64) -> Vec<RawHeading> {
    (0..count)
        .map(|i| {
            let level = (i % 3 + 1) as u8;
            RawHeading::new(level, None, &format!("Section {i}: Notes & Follow-up"))
        })
        .collect()
}

/// Benchmark id derivation over a typical heading text
fn bench_heading_id(c: &mut Criterion) {
    c.bench_function("heading_id", |b| {
        b.iter(|| heading_id(black_box("Section 2: Results and Follow-up Notes!")))
    });
}

/// Benchmark the full outline scan across document sizes
fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_scan");
    for size in [16u64, 128, 1024] {
        let headings = synthesize_headings(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &headings, |b, headings| {
            b.iter(|| scan(black_box(headings), 3))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_heading_id, bench_scan);
criterion_main!(benches);
