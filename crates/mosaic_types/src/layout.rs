//! Grid layout computation.
//!
//! Converts a requested minimum grid of tiles into a final grid and a common
//! scaled-frame resolution that keeps the source aspect ratio.
//!
//! # Block arithmetic
//!
//! A *block* is one grid cell. Its pixel extent along an axis is the tile size
//! plus the spacing on that axis:
//!
//! ```text
//! blocks_to_pixels(n) = n × (tile + spacing)
//! pixels_to_blocks(p) = ceil(p / (tile + spacing))
//! ```
//!
//! The axis whose ratio is the tighter constraint keeps its requested block
//! count; the other axis is derived from the aspect ratio and rounded up to
//! whole blocks, so the grid only ever grows beyond the request.
//!
//! # Example
//!
//! ```
//! use mosaic_types::layout::{GridSpec, Layout, TileGeometry};
//!
//! let layout = Layout::compute(GridSpec::new(2, 2), TileGeometry::EMOJI, 100, 50).unwrap();
//! assert_eq!(layout.grid(), GridSpec::new(4, 2));
//! assert_eq!((layout.width(), layout.height()), (128, 64));
//! ```

use std::fmt;

use crate::error::{MosaicError, Result};

/// Axis selector for block/pixel conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
	/// Columns / x
	Horizontal,
	/// Rows / y
	Vertical,
}

/// Fixed per-tile pixel size plus inter-tile spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
	/// Tile width in pixels
	pub tile_width: u32,
	/// Tile height in pixels
	pub tile_height: u32,
	/// Extra pixels between horizontally adjacent tiles
	pub horizontal_spacing: u32,
	/// Extra pixels between vertically adjacent tiles
	pub vertical_spacing: u32,
}

impl TileGeometry {
	/// 32×32 emoji-sized tiles with no spacing.
	pub const EMOJI: Self = Self::new(32, 32);

	/// Creates a geometry with zero spacing.
	pub const fn new(tile_width: u32, tile_height: u32) -> Self {
		Self {
			tile_width,
			tile_height,
			horizontal_spacing: 0,
			vertical_spacing: 0,
		}
	}

	/// Sets the spacing added to each block.
	pub const fn with_spacing(mut self, horizontal: u32, vertical: u32) -> Self {
		self.horizontal_spacing = horizontal;
		self.vertical_spacing = vertical;
		self
	}

	/// Pixel extent of one block along `axis`, saturating at `u32::MAX`.
	#[inline]
	pub fn block_extent(&self, axis: Axis) -> u32 {
		match axis {
			Axis::Horizontal => self.tile_width.saturating_add(self.horizontal_spacing),
			Axis::Vertical => self.tile_height.saturating_add(self.vertical_spacing),
		}
	}

	/// Converts a block count into pixels, or `None` if it overflows.
	#[inline]
	pub fn blocks_to_pixels(&self, blocks: u32, axis: Axis) -> Option<u32> {
		blocks.checked_mul(self.block_extent(axis))
	}

	/// Converts pixels into blocks, rounding up.
	#[inline]
	pub fn pixels_to_blocks(&self, pixels: u32, axis: Axis) -> u32 {
		pixels.div_ceil(self.block_extent(axis))
	}
}

impl Default for TileGeometry {
	fn default() -> Self {
		Self::EMOJI
	}
}

/// Grid size in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
	/// Number of tile columns
	pub columns: u32,
	/// Number of tile rows
	pub rows: u32,
}

impl GridSpec {
	/// Creates a new grid size.
	pub const fn new(columns: u32, rows: u32) -> Self {
		Self {
			columns,
			rows,
		}
	}

	/// Total number of tiles in the grid.
	#[inline]
	pub fn tile_count(&self) -> usize {
		self.columns as usize * self.rows as usize
	}

	/// Converts a row-major tile index into `(column, row)`.
	#[inline]
	pub fn index_to_block(&self, index: usize) -> (u32, u32) {
		let columns = self.columns as usize;
		((index % columns) as u32, (index / columns) as u32)
	}
}

impl fmt::Display for GridSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{}", self.columns, self.rows)
	}
}

/// Final grid and scaled-frame resolution shared by every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
	grid: GridSpec,
	geometry: TileGeometry,
	width: u32,
	height: u32,
}

impl Layout {
	/// Largest scaled frame extent on either axis, the GIF logical screen limit
	pub const MAX_EXTENT: u32 = u16::MAX as u32;

	/// Computes the final layout for a source of `native_width × native_height`.
	///
	/// # Arguments
	///
	/// * `requested` - Minimum number of columns and rows
	/// * `geometry` - Tile size and spacing
	/// * `native_width` - Source animation width in pixels
	/// * `native_height` - Source animation height in pixels
	///
	/// # Errors
	///
	/// Returns [`MosaicError::InvalidLayout`] when any input dimension is zero
	/// or the scaled frame would exceed [`Layout::MAX_EXTENT`] on either axis.
	pub fn compute(
		requested: GridSpec,
		geometry: TileGeometry,
		native_width: u32,
		native_height: u32,
	) -> Result<Self> {
		if requested.columns == 0 || requested.rows == 0 {
			return Err(MosaicError::InvalidLayout("requested grid must be at least 1×1"));
		}
		if geometry.tile_width == 0 || geometry.tile_height == 0 {
			return Err(MosaicError::InvalidLayout("tile size must be non-zero"));
		}
		if native_width == 0 || native_height == 0 {
			return Err(MosaicError::InvalidLayout("source dimensions must be non-zero"));
		}

		let too_large = || MosaicError::InvalidLayout("requested grid too large");
		let mut grid = requested;
		let mut width = geometry.blocks_to_pixels(grid.columns, Axis::Horizontal).ok_or_else(too_large)?;
		let mut height = geometry.blocks_to_pixels(grid.rows, Axis::Vertical).ok_or_else(too_large)?;

		// native_w / width < native_h / height, cross-multiplied
		let (nw, nh) = (u64::from(native_width), u64::from(native_height));
		if nw * u64::from(height) < nh * u64::from(width) {
			height = clamp_u32(u64::from(width) * nh / nw);
			grid.rows = geometry.pixels_to_blocks(height, Axis::Vertical);
		} else {
			width = clamp_u32(u64::from(height) * nw / nh);
			grid.columns = geometry.pixels_to_blocks(width, Axis::Horizontal);
		}

		// Tile origins stay addressable for every block of the final grid
		let covered_width = geometry.blocks_to_pixels(grid.columns, Axis::Horizontal);
		let covered_height = geometry.blocks_to_pixels(grid.rows, Axis::Vertical);
		if width > Self::MAX_EXTENT || height > Self::MAX_EXTENT || covered_width.is_none() || covered_height.is_none() {
			return Err(too_large());
		}

		Ok(Self {
			grid,
			geometry,
			width,
			height,
		})
	}

	/// Final grid size.
	#[inline]
	pub fn grid(&self) -> GridSpec {
		self.grid
	}

	/// Tile geometry this layout was computed with.
	#[inline]
	pub fn geometry(&self) -> TileGeometry {
		self.geometry
	}

	/// Scaled frame width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Scaled frame height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Top-left corner of a tile in scaled-frame coordinates.
	///
	/// Indices past the grid saturate at `u32::MAX`.
	pub fn tile_origin(&self, index: usize) -> (u32, u32) {
		let (column, row) = self.grid.index_to_block(index);
		(
			self.geometry.blocks_to_pixels(column, Axis::Horizontal).unwrap_or(u32::MAX),
			self.geometry.blocks_to_pixels(row, Axis::Vertical).unwrap_or(u32::MAX),
		)
	}
}

impl fmt::Display for Layout {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} tiles, scaled to {}×{}", self.grid, self.width, self.height)
	}
}

fn clamp_u32(value: u64) -> u32 {
	u32::try_from(value).unwrap_or(u32::MAX)
}
