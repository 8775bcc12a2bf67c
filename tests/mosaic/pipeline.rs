//! Decode, slice and write round trips.

use gif_mosaic::prelude::*;

use crate::fixtures::{self, Fixture};

fn decode_file(path: &std::path::Path) -> Animation {
	Animation::open(path).unwrap()
}

#[test_log::test]
fn test_square_source_exact_quadrants() {
	let dir = tempfile::tempdir().unwrap();
	let fixture = Fixture::new(64, 64, 3);
	let input = fixtures::write(dir.path(), "square.gif", &fixture);

	let source = Animation::open(&input).unwrap();
	let mosaic = Mosaic::build(&source, GridSpec::new(2, 2), TileGeometry::EMOJI).unwrap();
	assert_eq!(mosaic.grid(), GridSpec::new(2, 2));
	assert_eq!((mosaic.layout().width(), mosaic.layout().height()), (64, 64));

	let out = dir.path().join(OUTPUT_DIR);
	let paths = write_tiles(&mosaic, &out).unwrap();
	assert_eq!(paths.len(), 4);

	for (index, path) in paths.iter().enumerate() {
		assert_eq!(path.file_name().unwrap().to_str().unwrap(), tile_file_name(index));

		let tile = decode_file(path);
		assert_eq!((tile.width(), tile.height()), (32, 32));
		assert_eq!(tile.frame_count(), 3);

		for (frame_index, frame) in tile.frames().iter().enumerate() {
			// each tile is exactly one quadrant, so one colour per frame
			let expected = fixtures::pixel(&fixture, frame_index, (index as u16 % 2) * 32, (index as u16 / 2) * 32);
			let color = frame.palette().get(expected);
			assert!(
				(0..32).all(|y| (0..32).all(|x| frame.color_at(x, y) == Some(color))),
				"tile {index} frame {frame_index} is not uniform"
			);
		}
	}
}

#[test_log::test]
fn test_tiles_keep_source_metadata() {
	let dir = tempfile::tempdir().unwrap();
	let mut fixture = Fixture::new(100, 50, 4);
	fixture.repeat = Some(gif::Repeat::Finite(2));
	let input = fixtures::write(dir.path(), "wide.gif", &fixture);

	let source = Animation::open(&input).unwrap();
	let mosaic = Mosaic::build(&source, GridSpec::new(2, 2), TileGeometry::EMOJI).unwrap();
	// height is the tighter ratio; only the column count changes
	assert_eq!(mosaic.grid(), GridSpec::new(4, 2));

	let paths = write_tiles(&mosaic, dir.path().join("out")).unwrap();
	assert_eq!(paths.len(), 8);

	for path in &paths {
		let tile = decode_file(path);
		assert_eq!(tile.frame_count(), source.frame_count());
		assert_eq!(tile.timings(), source.timings());
		assert_eq!(tile.loop_count(), LoopCount::Finite(2));
		assert_eq!(tile.background_index(), source.background_index());
	}

	let delays: Vec<u16> = source.timings().iter().map(|t| t.delay).collect();
	assert_eq!(delays, vec![4, 5, 6, 7]);
}

#[test]
fn test_no_loop_extension_is_kept() {
	let mut fixture = Fixture::new(32, 32, 2);
	fixture.repeat = None;
	let source = Animation::from_bytes(&fixtures::encode(&fixture)).unwrap();
	assert_eq!(source.loop_count(), LoopCount::Once);

	let mosaic = Mosaic::build(&source, GridSpec::new(1, 1), TileGeometry::EMOJI).unwrap();
	let encoded = mosaic.encode_all().unwrap();
	let tile = Animation::from_bytes(&encoded[0]).unwrap();
	assert_eq!(tile.loop_count(), LoopCount::Once);
}

#[test]
fn test_edge_tiles_have_transparent_padding() {
	// 50×120 -> 64×153 scaled, 2×5 grid; bottom row holds 25 rows of content
	let fixture = Fixture::new(50, 120, 1);
	let source = Animation::from_bytes(&fixtures::encode(&fixture)).unwrap();
	let mosaic = Mosaic::build(&source, GridSpec::new(2, 2), TileGeometry::EMOJI).unwrap();
	assert_eq!(mosaic.grid(), GridSpec::new(2, 5));

	let encoded = mosaic.encode_all().unwrap();
	let bottom = Animation::from_bytes(&encoded[8]).unwrap();
	let frame = &bottom.frames()[0];
	assert!(frame.color_at(0, 24).is_some_and(|c| !c.is_transparent()));
	assert!(frame.color_at(0, 25).is_some_and(|c| c.is_transparent()));
	assert!(frame.color_at(31, 31).is_some_and(|c| c.is_transparent()));

	let top = Animation::from_bytes(&encoded[0]).unwrap();
	assert!(top.frames()[0].pixels().iter().all(|&p| Some(p) != top.frames()[0].palette().transparent()));
}

#[test]
fn test_output_is_deterministic() {
	let dir = tempfile::tempdir().unwrap();
	let fixture = Fixture::new(90, 70, 3);
	let input = fixtures::write(dir.path(), "input.gif", &fixture);

	let run = |name: &str| {
		let source = Animation::open(&input).unwrap();
		let mosaic = Mosaic::build(&source, GridSpec::new(3, 2), TileGeometry::EMOJI).unwrap();
		write_tiles(&mosaic, dir.path().join(name))
			.unwrap()
			.iter()
			.map(|p| std::fs::read(p).unwrap())
			.collect::<Vec<_>>()
	};

	assert_eq!(run("first"), run("second"));
}

#[test]
fn test_write_into_existing_directory() {
	let dir = tempfile::tempdir().unwrap();
	let out = dir.path().join(OUTPUT_DIR);
	std::fs::create_dir_all(&out).unwrap();

	let source = Animation::from_bytes(&fixtures::encode(&Fixture::new(32, 32, 1))).unwrap();
	let mosaic = Mosaic::build(&source, GridSpec::new(1, 1), TileGeometry::EMOJI).unwrap();
	let paths = write_tiles(&mosaic, &out).unwrap();
	assert_eq!(paths, vec![out.join("000.gif")]);
}

#[test]
fn test_invalid_input_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("broken.gif");
	std::fs::write(&path, b"definitely not a gif").unwrap();

	assert!(matches!(Animation::open(&path), Err(MosaicError::Decode(_))));
	assert!(matches!(
		Animation::open(dir.path().join("missing.gif")),
		Err(MosaicError::IOError(_))
	));
}

#[test]
fn test_reference_grid_matches_tiles() {
	let source = Animation::from_bytes(&fixtures::encode(&Fixture::new(100, 50, 1))).unwrap();
	let mosaic = Mosaic::build(&source, GridSpec::new(2, 2), TileGeometry::EMOJI).unwrap();
	let grid = reference_grid(mosaic.grid());

	let lines: Vec<&str> = grid.lines().collect();
	assert_eq!(lines.len(), 2);
	assert_eq!(lines[0], ":000: :001: :002: :003: ");
	assert_eq!(lines[1], ":004: :005: :006: :007: ");
}

#[test_log::test]
fn test_partial_frame_lands_at_its_offset() {
	// green square covering only the bottom-right quadrant of a 64×64 screen
	let data = fixtures::encode_frames(64, 64, &[fixtures::solid_frame(32, 32, 32, 32, 1)]);
	let source = Animation::from_bytes(&data).unwrap();
	assert_eq!((source.width(), source.height()), (64, 64));

	let mosaic = Mosaic::build(&source, GridSpec::new(2, 2), TileGeometry::EMOJI).unwrap();
	let encoded = mosaic.encode_all().unwrap();
	assert_eq!(encoded.len(), 4);

	for (index, data) in encoded.iter().enumerate() {
		let tile = Animation::from_bytes(data).unwrap();
		let frame = &tile.frames()[0];
		let all = |check: &dyn Fn(Color) -> bool| (0..32).all(|y| (0..32).all(|x| frame.color_at(x, y).is_some_and(check)));
		if index == 3 {
			assert!(all(&|c: Color| c == Color::rgb(0, 255, 0)), "tile {index} should be green");
		} else {
			assert!(all(&|c: Color| c.is_transparent()), "tile {index} should be empty");
		}
	}
}

#[test]
fn test_local_palette_overrides_global() {
	let mut yellow = fixtures::solid_frame(0, 0, 32, 32, 1);
	yellow.palette = Some(vec![0, 0, 0, 255, 255, 0]);
	let frames = [fixtures::solid_frame(0, 0, 32, 32, 0), yellow];
	let source = Animation::from_bytes(&fixtures::encode_frames(32, 32, &frames)).unwrap();

	// the second frame reads index 1 through its own table, not the global green
	assert_eq!(source.frames()[0].color_at(0, 0), Some(Color::rgb(255, 0, 0)));
	assert_eq!(source.frames()[1].color_at(0, 0), Some(Color::rgb(255, 255, 0)));

	let mosaic = Mosaic::build(&source, GridSpec::new(1, 1), TileGeometry::EMOJI).unwrap();
	let tile = Animation::from_bytes(&mosaic.encode_all().unwrap()[0]).unwrap();
	let frames = tile.frames();
	assert_eq!(frames.len(), 2);
	assert_eq!(frames[0].palette().len(), 4);
	assert_eq!(frames[1].palette().len(), 2);
	assert!(frames[0].pixels().iter().all(|&p| frames[0].palette().get(p) == Color::rgb(255, 0, 0)));
	assert!(frames[1].pixels().iter().all(|&p| frames[1].palette().get(p) == Color::rgb(255, 255, 0)));
}

