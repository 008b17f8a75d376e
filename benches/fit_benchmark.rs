//! Benchmarks for slidefit fitting performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slidefit::{
    contain_rect, crop_rect, AssetSource, DimensionReader, ImageMetadataCache, Result, Session,
    Viewport,
};
use std::path::Path;
use std::sync::Arc;

struct StaticSource;

impl AssetSource for StaticSource {
    fn read(&self, _path: &Path) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

struct StaticReader;

impl DimensionReader for StaticReader {
    fn dimensions(&self, _bytes: &[u8]) -> Result<(u32, u32)> {
        Ok((1600, 900))
    }
}

/// Benchmark the pure geometry.
fn bench_geometry(c: &mut Criterion) {
    let viewport = Viewport::new(6.2, 1.9, 3.5, 2.5);

    c.bench_function("contain_rect", |b| {
        b.iter(|| contain_rect(black_box(16.0 / 9.0), black_box(viewport)).unwrap());
    });

    c.bench_function("crop_rect", |b| {
        b.iter(|| crop_rect(black_box(16.0 / 9.0), black_box(viewport)).unwrap());
    });
}

/// Benchmark fitting through a warm metadata cache.
fn bench_cached_fit(c: &mut Criterion) {
    let cache =
        ImageMetadataCache::with_collaborators(Arc::new(StaticSource), Arc::new(StaticReader));
    let session = Session::with_cache(cache);
    session.fit_crop("wide.png", 0.0, 0.0, 1.0, 1.0).unwrap();

    c.bench_function("cached_fit_crop", |b| {
        b.iter(|| {
            session
                .fit_crop(black_box("wide.png"), 6.4, 2.1, 3.5, 2.5)
                .unwrap()
        });
    });
}

/// Benchmark citation rendering onto a recording slide.
fn bench_citations(c: &mut Criterion) {
    let session = Session::new();
    let urls = ["https://a.example", "https://b.example", "https://c.example"];

    c.bench_function("render_citations_3", |b| {
        b.iter(|| {
            let mut slide = slidefit::Slide::new(1);
            session.render_citations(&mut slide, black_box(&urls[..]))
        });
    });
}

criterion_group!(benches, bench_geometry, bench_cached_fit, bench_citations);
criterion_main!(benches);
