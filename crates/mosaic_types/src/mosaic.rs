//! Tile animation assembly.
//!
//! Runs the layout once, then scales every source frame and slices it into
//! every tile, accumulating one [`Animation`] per tile. Frames are processed in
//! source order and tiles in row-major order.

use log::{debug, info};

use crate::animation::{Animation, SourceAnimation};
use crate::error::{MosaicError, Result};
use crate::layout::{GridSpec, Layout, TileGeometry};
use crate::resample::Resampler;
use crate::slice::TileSlicer;

/// One grid cell's output animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
	index: usize,
	animation: Animation,
}

impl Tile {
	/// Row-major index of the tile.
	#[inline]
	pub fn index(&self) -> usize {
		self.index
	}

	/// The tile's frames and playback metadata.
	#[inline]
	pub fn animation(&self) -> &Animation {
		&self.animation
	}
}

/// All tiles cut from one source animation.
#[derive(Debug, Clone)]
pub struct Mosaic {
	layout: Layout,
	tiles: Vec<Tile>,
}

impl Mosaic {
	/// Slices `source` into a grid of at least `requested` tiles.
	///
	/// # Errors
	///
	/// Returns [`MosaicError::InvalidLayout`] for degenerate sizes and
	/// [`MosaicError::FrameCountMismatch`] if a tile ends up with a different
	/// number of frames than the source.
	pub fn build(source: &SourceAnimation, requested: GridSpec, geometry: TileGeometry) -> Result<Self> {
		let layout = Layout::compute(requested, geometry, source.width(), source.height())?;
		info!("Source {source}; requested {requested} tiles, using {layout}");

		let resampler = Resampler::for_layout(&layout, source.width(), source.height());
		let slicer = TileSlicer::new(layout);

		let mut animations: Vec<Animation> = (0..layout.grid().tile_count())
			.map(|_| Animation::new(geometry.tile_width, geometry.tile_height, source.meta().clone()))
			.collect();

		for (frame_index, frame) in source.frames().iter().enumerate() {
			let scaled = resampler.scale(frame)?;
			for (tile_index, animation) in animations.iter_mut().enumerate() {
				animation.push_frame(slicer.slice(&scaled, tile_index));
			}
			debug!("Sliced frame {frame_index} into {} tiles", animations.len());
		}

		let expected = source.frame_count();
		let tiles = animations
			.into_iter()
			.enumerate()
			.map(|(index, animation)| {
				if animation.frame_count() != expected {
					return Err(MosaicError::FrameCountMismatch {
						index,
						expected,
						actual: animation.frame_count(),
					});
				}
				Ok(Tile {
					index,
					animation,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		Ok(Self {
			layout,
			tiles,
		})
	}

	/// Final layout.
	#[inline]
	pub fn layout(&self) -> &Layout {
		&self.layout
	}

	/// Final grid size.
	#[inline]
	pub fn grid(&self) -> GridSpec {
		self.layout.grid()
	}

	/// Tiles in row-major order.
	#[inline]
	pub fn tiles(&self) -> &[Tile] {
		&self.tiles
	}

	/// Encodes every tile, in index order.
	///
	/// Nothing is returned unless every tile encodes successfully.
	pub fn encode_all(&self) -> Result<Vec<Vec<u8>>> {
		self.tiles.iter().map(|tile| tile.animation.encode()).collect()
	}
}
