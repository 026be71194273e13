//! Brute-vs-optimized comparisons for the problems where the variants
//! differ asymptotically.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use drills::dynamic_programming::longest_increasing_subsequence::{lis_patience, lis_quadratic};
use drills::monotonic_stack::daily_temperatures::{daily_temperatures, daily_temperatures_brute};
use drills::sliding_window::max_sliding_window::{max_sliding_window, max_sliding_window_brute};
use drills::two_pointers::container_with_most_water::{max_area, max_area_brute};

fn synthetic(n: usize, modulus: i64) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 7919) % modulus).collect()
}

fn bench_daily_temperatures(c: &mut Criterion) {
    let temps: Vec<i32> = synthetic(2000, 70).iter().map(|&v| 30 + v as i32).collect();
    let mut group = c.benchmark_group("daily_temperatures");
    group.bench_function(BenchmarkId::from_parameter("brute"), |b| {
        b.iter(|| daily_temperatures_brute(&temps));
    });
    group.bench_function(BenchmarkId::from_parameter("stack"), |b| {
        b.iter(|| daily_temperatures(&temps));
    });
    group.finish();
}

fn bench_lis(c: &mut Criterion) {
    let nums = synthetic(2000, 6007);
    let mut group = c.benchmark_group("longest_increasing_subsequence");
    group.bench_function(BenchmarkId::from_parameter("quadratic"), |b| {
        b.iter(|| lis_quadratic(&nums));
    });
    group.bench_function(BenchmarkId::from_parameter("patience"), |b| {
        b.iter(|| lis_patience(&nums));
    });
    group.finish();
}

fn bench_sliding_window_max(c: &mut Criterion) {
    let nums = synthetic(10_000, 1009);
    let mut group = c.benchmark_group("max_sliding_window");
    group.bench_function(BenchmarkId::from_parameter("brute"), |b| {
        b.iter(|| max_sliding_window_brute(&nums, 200));
    });
    group.bench_function(BenchmarkId::from_parameter("deque"), |b| {
        b.iter(|| max_sliding_window(&nums, 200));
    });
    group.finish();
}

fn bench_container(c: &mut Criterion) {
    let heights: Vec<u64> = synthetic(3000, 10_000).iter().map(|&v| v as u64).collect();
    let mut group = c.benchmark_group("container_with_most_water");
    group.bench_function(BenchmarkId::from_parameter("brute"), |b| {
        b.iter(|| max_area_brute(&heights));
    });
    group.bench_function(BenchmarkId::from_parameter("converging"), |b| {
        b.iter(|| max_area(&heights));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_daily_temperatures,
    bench_lis,
    bench_sliding_window_max,
    bench_container
);
criterion_main!(benches);
