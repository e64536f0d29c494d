//! Performance benchmarks for dirscout cache builds.
//!
//! Measures the cost of the bounded directory walk at a few fixture sizes,
//! plus the cache-backed filename lookup over a built index.
//!
//! **Run benchmarks:**
//! ```bash
//! cargo bench                 # Run all benchmarks
//! cargo bench -- cache_build  # Cache build only
//! ```
//!
//! Fixtures are generated under a TempDir so numbers reflect walk cost,
//! not a particular machine's directory layout.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dirscout::DirectoryCache;
use std::fs;
use tempfile::TempDir;

/// Build a fixture tree of `width` top-level directories, each with
/// `width` children.
fn build_fixture(width: usize) -> TempDir {
    let tmp = TempDir::new().expect("failed to create temp dir");
    for outer in 0..width {
        let dir = tmp.path().join(format!("outer{outer}"));
        fs::create_dir(&dir).expect("failed to create fixture dir");
        for inner in 0..width {
            fs::create_dir(dir.join(format!("inner{inner}"))).expect("failed to create fixture dir");
        }
    }
    tmp
}

fn bench_cache_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache_build");
    group.sample_size(10);

    for width in [10, 20, 40] {
        let fixture = build_fixture(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            let cache = DirectoryCache::new(vec![fixture.path().to_path_buf()], 100_000);
            b.iter(|| {
                black_box(cache.build());
            });
        });
    }

    group.finish();
}

fn bench_find_by_name(c: &mut Criterion) {
    let fixture = build_fixture(30);
    fs::write(fixture.path().join("outer7/needle.txt"), "x").expect("failed to write fixture");

    let cache = DirectoryCache::new(vec![fixture.path().to_path_buf()], 100_000);
    cache.build();

    c.bench_function("find_by_name", |b| {
        b.iter(|| {
            let hits = cache.find_by_name(black_box("needle.txt")).unwrap();
            black_box(hits);
        });
    });
}

criterion_group!(benches, bench_cache_build, bench_find_by_name);
criterion_main!(benches);
