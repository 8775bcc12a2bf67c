//! Cropping scaled frames into tiles.
//!
//! Each tile covers the block at its grid position. The crop region starts as a
//! full tile translated to the block origin and is clamped so it never extends
//! past the right or bottom edge of the scaled frame. The tile image is filled
//! with the transparent index first, so clamped-away pixels stay transparent.

use crate::frame::IndexedFrame;
use crate::layout::Layout;

/// Axis-aligned pixel rectangle, `min` inclusive and `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
	/// Left edge
	pub x0: u32,
	/// Top edge
	pub y0: u32,
	/// Right edge (exclusive)
	pub x1: u32,
	/// Bottom edge (exclusive)
	pub y1: u32,
}

impl Rect {
	/// Creates a rectangle from its edges.
	pub const fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
		Self {
			x0,
			y0,
			x1,
			y1,
		}
	}

	/// Width, or zero for an empty rectangle.
	#[inline]
	pub fn width(&self) -> u32 {
		self.x1.saturating_sub(self.x0)
	}

	/// Height, or zero for an empty rectangle.
	#[inline]
	pub fn height(&self) -> u32 {
		self.y1.saturating_sub(self.y0)
	}

	/// Returns true if the rectangle covers no pixels.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.width() == 0 || self.height() == 0
	}
}

/// Crops tiles out of frames scaled to a [`Layout`].
#[derive(Debug, Clone, Copy)]
pub struct TileSlicer {
	layout: Layout,
}

impl TileSlicer {
	/// Creates a slicer for `layout`.
	pub fn new(layout: Layout) -> Self {
		Self {
			layout,
		}
	}

	/// Source region of tile `index` within a `frame_width × frame_height` frame.
	///
	/// The region is a full tile at the block origin, shrunk on the right and
	/// bottom to end at the frame edge.
	pub fn crop_region(&self, index: usize, frame_width: u32, frame_height: u32) -> Rect {
		let geometry = self.layout.geometry();
		let (x0, y0) = self.layout.tile_origin(index);
		let x1 = x0.saturating_add(geometry.tile_width).min(frame_width.max(x0));
		let y1 = y0.saturating_add(geometry.tile_height).min(frame_height.max(y0));
		Rect::new(x0, y0, x1, y1)
	}

	/// Produces the tile image for `index` from a scaled frame.
	///
	/// The tile keeps the frame's palette. When the crop had to be clamped, the
	/// copied pixels are placed on a transparent tile; the transparent index
	/// is picked from those pixels, so a full palette never loses a colour the
	/// tile shows.
	pub fn slice(&self, frame: &IndexedFrame, index: usize) -> IndexedFrame {
		let geometry = self.layout.geometry();
		let region = self.crop_region(index, frame.width(), frame.height());
		let content = frame.crop(region.x0, region.y0, region.width(), region.height());

		if region.width() == geometry.tile_width && region.height() == geometry.tile_height {
			return content;
		}
		content.place_on_canvas(geometry.tile_width, geometry.tile_height, 0, 0)
	}
}
