use crate::uniform::{DIMENSION as D, NUM_POINTS, NUM_QUERIES};
use criterion::Criterion;
use kdsearch::{BuildConfig, KdTree};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rstar::RTree;

pub fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("build");
    group.sample_size(10);

    let pts = dataset(NUM_POINTS, 0);
    group.bench_function("kdtree", |b| {
        b.iter(|| {
            KdTree::build(&pts).expect("Failed to build KdTree");
        });
    });

    group.bench_function("kdtree_sequential", |b| {
        b.iter(|| {
            KdTree::build_with(&pts, BuildConfig::sequential()).expect("Failed to build KdTree");
        });
    });

    group.bench_function("rstar", |b| {
        b.iter(|| {
            RTree::bulk_load(pts.clone());
        });
    });
    group.finish();
}

pub fn dataset(n: usize, seed: u64) -> Vec<[f64; D]> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        let mut point = [0.0; D];
        for x in &mut point {
            *x = rng.gen_range(-100.0..100.0);
        }
        points.push(point);
    }
    points
}

pub fn queries() -> Vec<[f64; D]> {
    dataset(NUM_QUERIES, 1)
}
