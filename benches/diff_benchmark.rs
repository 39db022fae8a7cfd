//! Benchmarks for the diff engine.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nanodiff::diff::{diff_with, DiffStats, Strategy};
use std::hint::black_box;

/// `n` numbered lines, with every `every`th line replaced when `every > 0`.
fn numbered_lines(n: usize, every: usize) -> Vec<u8> {
    let mut out = Vec::new();
    for i in 0..n {
        if every > 0 && i % every == every - 1 {
            out.extend_from_slice(format!("changed {i}\n").as_bytes());
        } else {
            out.extend_from_slice(format!("line {i}\n").as_bytes());
        }
    }
    out
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    for &(name, every) in &[("identical", 0), ("sparse_changes", 100), ("dense_changes", 3)] {
        let expected = numbered_lines(10_000, 0);
        let actual = numbered_lines(10_000, every);
        group.throughput(Throughput::Bytes((expected.len() + actual.len()) as u64));

        for strategy in [Strategy::Eager, Strategy::Lazy] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), name),
                &(&expected, &actual),
                |b, (expected, actual)| {
                    b.iter(|| {
                        let mut stats = DiffStats::new();
                        let has_diff = diff_with(
                            strategy,
                            expected.as_slice(),
                            actual.as_slice(),
                            &mut stats,
                        )
                        .unwrap();
                        black_box((has_diff, stats))
                    });
                },
            );
        }
    }
    group.finish();
}

fn bench_disjoint(c: &mut Criterion) {
    // Nothing matches, so every expected line scans the whole actual side.
    let expected: Vec<u8> = (0..1_000).flat_map(|i| format!("a{i}\n").into_bytes()).collect();
    let actual: Vec<u8> = (0..1_000).flat_map(|i| format!("b{i}\n").into_bytes()).collect();

    c.bench_function("diff/disjoint_worst_case", |b| {
        b.iter(|| {
            let mut stats = DiffStats::new();
            diff_with(
                Strategy::Lazy,
                expected.as_slice(),
                actual.as_slice(),
                &mut stats,
            )
            .unwrap();
            black_box(stats)
        });
    });
}

criterion_group!(benches, bench_strategies, bench_disjoint);
criterion_main!(benches);
