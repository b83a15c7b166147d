use crate::uniform::build::dataset;
use crate::uniform::{DIMENSION as D, NUM_POINTS, RADIUS, RADIUS_SQUARED};
use criterion::Criterion;
use kdsearch::{Index, KdTree, LinearIndex};
use rstar::RTree;

pub fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("query_radius");
    group.sample_size(10);

    let pts = dataset(NUM_POINTS, 0);

    let kdtree = KdTree::build(&pts).expect("Failed to build KdTree");
    group.bench_function("kdtree", |b| {
        b.iter(|| {
            query_range(&kdtree, &pts);
        });
    });

    let rstar = RTree::bulk_load(pts.clone());
    group.bench_function("rstar", |b| {
        b.iter(|| {
            query_range_rstar(&rstar, &pts);
        });
    });

    let linear = LinearIndex::build(&pts).expect("Failed to build LinearIndex");
    group.bench_function("list", |b| {
        b.iter(|| {
            query_range(&linear, &pts);
        });
    });
    group.finish();
}

fn query_range(index: &impl Index, points: &[[f64; D]]) {
    for (id, query) in points.iter().enumerate() {
        let neighbors = index.within(query, RADIUS).expect("Invalid query");
        assert!(neighbors.iter().any(|n| n.id == id));
    }
}

fn query_range_rstar(rstar: &RTree<[f64; D]>, points: &[[f64; D]]) {
    for query in points {
        let result = rstar
            .locate_within_distance(*query, RADIUS_SQUARED)
            .collect::<Vec<_>>();
        assert!(result.contains(&query));
    }
}
