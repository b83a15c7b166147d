use crate::uniform::build::{dataset, queries};
use crate::uniform::{DIMENSION as D, K, NUM_POINTS};
use criterion::Criterion;
use kdsearch::{Index, KdTree, LinearIndex};
use rstar::RTree;

pub fn benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("query");

    let pts = dataset(NUM_POINTS, 0);
    let queries = queries();

    let kdtree = KdTree::build(&pts).expect("Failed to build KdTree");
    group.bench_function("kdtree_nearest", |b| {
        b.iter(|| {
            query_nearest(&kdtree, &queries);
        });
    });
    group.bench_function("kdtree_knn", |b| {
        b.iter(|| {
            query_knn(&kdtree, &queries);
        });
    });

    let rstar = RTree::bulk_load(pts.clone());
    group.bench_function("rstar_nearest", |b| {
        b.iter(|| {
            query_rstar(&rstar, &queries, 1);
        });
    });
    group.bench_function("rstar_knn", |b| {
        b.iter(|| {
            query_rstar(&rstar, &queries, K);
        });
    });

    let linear = LinearIndex::build(&pts).expect("Failed to build LinearIndex");
    group.bench_function("list_knn", |b| {
        b.iter(|| {
            query_knn(&linear, &queries);
        });
    });
    group.finish();
}

fn query_nearest(index: &impl Index, queries: &[[f64; D]]) {
    for query in queries {
        let nearest = index.nearest(query).expect("Invalid query");
        assert!(nearest.is_some());
    }
}

fn query_knn(index: &impl Index, queries: &[[f64; D]]) {
    for query in queries {
        let neighbors = index.nearest_k(query, K).expect("Invalid query");
        assert_eq!(neighbors.len(), K);
    }
}

fn query_rstar(rstar: &RTree<[f64; D]>, queries: &[[f64; D]], k: usize) {
    for query in queries {
        let mut iter = rstar.nearest_neighbor_iter(query);
        let results = iter.by_ref().take(k).collect::<Vec<_>>();
        assert_eq!(results.len(), k);
    }
}
