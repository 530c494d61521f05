use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use roadtrip_lib::{plan_route, shortest_distances, Atlas, DatasetPaths, LoadOptions, RouteRequest};
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

static ATLAS: Lazy<Atlas> = Lazy::new(|| {
    Atlas::load(&DatasetPaths::in_dir(&fixture_dir()), &LoadOptions::default())
        .expect("fixture loads")
});
static LONG_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("Portugal", "Poland"));
static ALIAS_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::new("Myanmar", "Laos"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let atlas = &*ATLAS;

    c.bench_function("dijkstra_portugal_poland", |b| {
        let request = &*LONG_REQUEST;
        b.iter(|| {
            let plan = plan_route(atlas, request).expect("route exists");
            black_box(plan.total_distance)
        });
    });

    c.bench_function("dijkstra_alias_lookup", |b| {
        let request = &*ALIAS_REQUEST;
        b.iter(|| {
            let plan = plan_route(atlas, request).expect("route exists");
            black_box(plan.hop_count())
        });
    });

    c.bench_function("full_search_from_france", |b| {
        b.iter(|| black_box(shortest_distances(atlas.graph(), "France").len()));
    });

    c.bench_function("island_rejection", |b| {
        b.iter(|| black_box(atlas.get_distance("Iceland", "France")));
    });
}

fn benchmark_loading(c: &mut Criterion) {
    let paths = DatasetPaths::in_dir(&fixture_dir());
    let options = LoadOptions::default();

    c.bench_function("load_fixture_atlas", |b| {
        b.iter(|| {
            let atlas = Atlas::load(&paths, &options).expect("fixture loads");
            black_box(atlas.graph().edge_count())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding, benchmark_loading);
criterion_main!(benches);
