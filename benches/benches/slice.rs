//! Benchmark suite for the resample and slice hot path
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mosaic_benches::{generate_animation, generate_frame, sizes};
use mosaic_types::layout::{GridSpec, Layout, TileGeometry};
use mosaic_types::mosaic::Mosaic;
use mosaic_types::resample::Resampler;
use mosaic_types::slice::TileSlicer;
use std::hint::black_box;

/// Benchmark single-frame scaling
fn bench_resample(c: &mut Criterion) {
	let mut group = c.benchmark_group("resample");

	for (name, (w, h)) in [("small", sizes::SMALL), ("medium", sizes::MEDIUM), ("large", sizes::LARGE)] {
		let layout = Layout::compute(GridSpec::new(4, 4), TileGeometry::EMOJI, w, h).unwrap();
		let frame = generate_frame(w, h, 0);

		let resampler = Resampler::for_layout(&layout, w, h);
		group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));
		group.bench_with_input(BenchmarkId::new("scale", name), &frame, |b, frame| {
			b.iter(|| black_box(resampler.scale(black_box(frame)).unwrap()));
		});
	}

	group.finish();
}

/// Benchmark cropping every tile out of one scaled frame
fn bench_slice(c: &mut Criterion) {
	let mut group = c.benchmark_group("slice");

	let layout = Layout::compute(GridSpec::new(5, 3), TileGeometry::EMOJI, 300, 170).unwrap();
	let scaled = generate_frame(layout.width(), layout.height(), 0);
	let slicer = TileSlicer::new(layout);
	let tiles = layout.grid().tile_count();

	group.throughput(Throughput::Elements(tiles as u64));
	group.bench_function("all_tiles", |b| {
		b.iter(|| {
			for index in 0..tiles {
				black_box(slicer.slice(&scaled, index));
			}
		});
	});

	group.finish();
}

/// Benchmark the full build of a multi-frame mosaic
fn bench_mosaic(c: &mut Criterion) {
	let mut group = c.benchmark_group("mosaic");
	group.sample_size(20);

	let (w, h) = sizes::MEDIUM;
	let animation = generate_animation(w, h, 8);
	group.bench_function("build_4x3", |b| {
		b.iter(|| black_box(Mosaic::build(&animation, GridSpec::new(4, 3), TileGeometry::EMOJI).unwrap()));
	});

	group.finish();
}

criterion_group!(benches, bench_resample, bench_slice, bench_mosaic);
criterion_main!(benches);
