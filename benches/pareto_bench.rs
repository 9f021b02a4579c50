//! Criterion benchmarks for u-pareto dominance machinery.
//!
//! Uses synthetic fronts (seeded uniform populations, ZDT1-shaped
//! staircases) to measure pure algorithm overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pareto::archive::{ArchiveConfig, BoundedArchive, DensityStrategy};
use u_pareto::crowding::crowding_distance;
use u_pareto::hypervolume::WfgHypervolume;
use u_pareto::ranking::non_dominated_sort;

// ===========================================================================
// Synthetic fronts
// ===========================================================================

/// Uniform random population in [0, 1)^m — a realistic mix of dominated
/// and non-dominated points.
fn random_population(n: usize, m: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..m).map(|_| rng.random_range(0.0..1.0)).collect())
        .collect()
}

/// Mutually non-dominated 2-objective staircase shaped like the ZDT1
/// Pareto front: y = 1 - sqrt(x).
fn staircase_front(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            let x = i as f64 / (n - 1) as f64;
            vec![x, 1.0 - x.sqrt()]
        })
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_non_dominated_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("non_dominated_sort");
    group.sample_size(10);

    for &n in &[100, 500, 1000] {
        let population = random_population(n, 2, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, pop| {
            b.iter(|| black_box(non_dominated_sort(black_box(pop))))
        });
    }
    group.finish();
}

fn bench_crowding_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("crowding_distance");
    group.sample_size(10);

    for &n in &[100, 1000] {
        let front = random_population(n, 3, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &front, |b, front| {
            b.iter(|| black_box(crowding_distance(black_box(front))))
        });
    }
    group.finish();
}

fn bench_hypervolume_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypervolume_2d");
    group.sample_size(10);

    for &n in &[100, 1000] {
        let front = staircase_front(n);
        let reference = vec![2.0, 2.0];
        let mut engine = WfgHypervolume::new(2, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &front, |b, front| {
            b.iter(|| black_box(engine.hypervolume(black_box(front), &reference)))
        });
    }
    group.finish();
}

fn bench_hypervolume_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("hypervolume_3d");
    group.sample_size(10);

    for &n in &[10, 50, 100] {
        let front = random_population(n, 3, 42);
        let reference = vec![1.0, 1.0, 1.0];
        let mut engine = WfgHypervolume::new(3, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &front, |b, front| {
            b.iter(|| black_box(engine.hypervolume(black_box(front), &reference)))
        });
    }
    group.finish();
}

fn bench_archive_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("archive_add_stream");
    group.sample_size(10);

    let stream = random_population(500, 2, 42);
    for strategy in [
        DensityStrategy::CrowdingDistance,
        DensityStrategy::HypervolumeContribution,
    ] {
        let config = ArchiveConfig::new(50, 2).with_strategy(strategy);
        group.bench_with_input(
            BenchmarkId::new(format!("{:?}", strategy), stream.len()),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut archive = BoundedArchive::new(config.clone());
                    for solution in &stream {
                        archive.add(black_box(solution.clone()));
                    }
                    black_box(archive.len())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_non_dominated_sort,
    bench_crowding_distance,
    bench_hypervolume_2d,
    bench_hypervolume_3d,
    bench_archive_add
);
criterion_main!(benches);
