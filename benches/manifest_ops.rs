//! Benchmarks for manifest derivations
//!
//! Measures merge, pin and peer-sync cost on manifests with large dependency
//! maps, plus a full parse/serialize cycle.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use manifix::manifest::{parse_str, to_json_string, DependencyField, DependencyMap, Manifest, SemverPart};

/// Create a manifest with `size` entries in each dependency map
fn create_large_manifest(size: usize) -> Manifest {
    let scoped = |scope: &str, range: &str| -> DependencyMap {
        (0..size)
            .map(|i| (format!("@{}/pkg-{}", scope, i), format!("{}{}.{}.0", range, i % 7, i)))
            .collect()
    };

    let mut manifest = Manifest::default();
    manifest.version = Some("v1.2.3".to_string());
    manifest.set_dependency_map(DependencyField::Dependencies, scoped("acme", "^"));
    manifest.set_dependency_map(DependencyField::DevDependencies, scoped("tools", "~"));

    let peers: DependencyMap = (0..size)
        .step_by(2)
        .map(|i| (format!("@acme/pkg-{}", i), "*".to_string()))
        .collect();
    manifest.set_dependency_map(DependencyField::PeerDependencies, peers);
    manifest
}

/// Benchmark merging dependencies and devDependencies
fn bench_merged(c: &mut Criterion) {
    let mut group = c.benchmark_group("merged_dependencies");

    for size in [100, 1000, 5000].iter() {
        let manifest = create_large_manifest(*size);

        group.bench_with_input(BenchmarkId::new("entries", size), size, |b, _| {
            b.iter(|| black_box(manifest.merged_dependencies()));
        });
    }

    group.finish();
}

/// Benchmark scoped pinning with several scopes
fn bench_pinned(c: &mut Criterion) {
    let mut group = c.benchmark_group("pinned_dependencies");
    let scopes = ["@acme", "@other", "left-pad", "@tools"];

    for size in [100, 1000, 5000].iter() {
        let manifest = create_large_manifest(*size);

        group.bench_with_input(BenchmarkId::new("entries", size), size, |b, _| {
            b.iter(|| {
                black_box(manifest.pinned_dependencies(&scopes, Some(DependencyField::DevDependencies)))
            });
        });
    }

    group.finish();
}

/// Benchmark peer dependency sync
fn bench_peer_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("updated_peer_dependencies");

    for size in [100, 1000, 5000].iter() {
        let manifest = create_large_manifest(*size);

        group.bench_with_input(BenchmarkId::new("entries", size), size, |b, _| {
            b.iter(|| black_box(manifest.updated_peer_dependencies()));
        });
    }

    group.finish();
}

/// Benchmark a version increment
fn bench_increase(c: &mut Criterion) {
    let manifest = create_large_manifest(10);

    c.bench_function("increase_patch", |b| {
        b.iter(|| black_box(manifest.increase(black_box(SemverPart::Patch))))
    });
}

/// Benchmark a full parse and serialize cycle
fn bench_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    for size in [100, 1000].iter() {
        let json = to_json_string(&create_large_manifest(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("entries", size), size, |b, _| {
            b.iter(|| {
                let manifest = parse_str(black_box(&json)).unwrap();
                black_box(to_json_string(&manifest).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_merged,
    bench_pinned,
    bench_peer_sync,
    bench_increase,
    bench_round_trip
);
criterion_main!(benches);
