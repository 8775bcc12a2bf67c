//! Palette-indexed frame images.
//!
//! An [`IndexedFrame`] is a rectangular plane of palette indices together with
//! the palette they refer to. Source frames, scaled frames and tile frames all
//! use this representation. The index plane is a single-channel
//! [`GrayImage`], so cropping and placement go through [`imageops`].

use std::fmt;

use image::{GrayImage, Luma, Rgba, RgbaImage, imageops};
use log::warn;

use crate::error::{MosaicError, Result};
use crate::palette::{Color, Palette, least_used_index};

/// Palette-indexed image with its own colour table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFrame {
	plane: GrayImage,
	palette: Palette,
}

impl IndexedFrame {
	/// Creates a frame from existing pixel data.
	///
	/// # Errors
	///
	/// Returns [`MosaicError::FrameSizeMismatch`] if `pixels` does not hold
	/// exactly `width × height` indices.
	pub fn new(width: u32, height: u32, pixels: Vec<u8>, palette: Palette) -> Result<Self> {
		let expected = width as usize * height as usize;
		let actual = pixels.len();
		let plane = GrayImage::from_raw(width, height, pixels)
			.filter(|plane| plane.as_raw().len() == expected)
			.ok_or(MosaicError::FrameSizeMismatch {
				expected,
				actual,
			})?;

		Ok(Self {
			plane,
			palette,
		})
	}

	/// Creates a frame with every pixel set to `fill`.
	pub fn filled(width: u32, height: u32, fill: u8, palette: Palette) -> Self {
		Self {
			plane: GrayImage::from_pixel(width, height, Luma([fill])),
			palette,
		}
	}

	/// Returns the frame width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.plane.width()
	}

	/// Returns the frame height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.plane.height()
	}

	/// Returns the pixel indices in row-major order.
	#[inline]
	pub fn pixels(&self) -> &[u8] {
		self.plane.as_raw()
	}

	/// Returns the pixel indices mutably.
	#[inline]
	pub fn pixels_mut(&mut self) -> &mut [u8] {
		&mut self.plane
	}

	/// Returns the frame palette.
	#[inline]
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Gets the palette index at a position.
	#[inline]
	pub fn get(&self, x: u32, y: u32) -> Option<u8> {
		self.plane.get_pixel_checked(x, y).map(|p| p.0[0])
	}

	/// Returns one row of pixel indices.
	#[inline]
	pub fn row(&self, y: u32) -> &[u8] {
		let width = self.width() as usize;
		let start = y as usize * width;
		&self.pixels()[start..start + width]
	}

	/// Returns the colour at a position.
	pub fn color_at(&self, x: u32, y: u32) -> Option<Color> {
		self.get(x, y).map(|index| self.palette.get(index))
	}

	/// Returns the index used for transparent fill, creating one if needed.
	///
	/// If the palette has no transparent index, a transparent entry is
	/// appended. A full palette instead gives up the entry this frame uses
	/// least, and pixels still using it move to the nearest remaining colour.
	pub fn ensure_transparent(&mut self) -> u8 {
		if let Some(index) = self.palette.transparent() {
			return index;
		}
		if let Some(index) = self.palette.push_transparent() {
			return index;
		}

		let index = least_used_index(self.pixels(), self.palette.len());
		let evicted = self.palette.get(index);
		self.palette.set_transparent(index);

		let mut moved = 0usize;
		if let Some(replacement) = self.palette.nearest_opaque([evicted.r, evicted.g, evicted.b]) {
			for pixel in self.pixels_mut().iter_mut().filter(|p| **p == index) {
				*pixel = replacement;
				moved += 1;
			}
		}

		warn!("Palette is full, repurposing least used index {index} as transparent ({moved} pixels remapped)");
		index
	}

	/// Copies the `width × height` region at `(x, y)` into a new frame.
	///
	/// The region is clipped to the frame bounds. The palette is kept.
	pub fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Self {
		Self {
			plane: imageops::crop_imm(&self.plane, x, y, width, height).to_image(),
			palette: self.palette.clone(),
		}
	}

	/// Places this frame at `(left, top)` on a transparent canvas.
	///
	/// The transparent index is chosen before placement, so a full palette
	/// gives up an entry this frame's own pixels can spare. Pixels that fall
	/// outside the canvas are dropped.
	pub fn place_on_canvas(mut self, canvas_width: u32, canvas_height: u32, left: u32, top: u32) -> Self {
		if left == 0 && top == 0 && self.width() == canvas_width && self.height() == canvas_height {
			return self;
		}

		let fill = self.ensure_transparent();
		let mut canvas = GrayImage::from_pixel(canvas_width, canvas_height, Luma([fill]));
		imageops::replace(&mut canvas, &self.plane, i64::from(left), i64::from(top));

		Self {
			plane: canvas,
			palette: self.palette,
		}
	}

	/// Expands the frame into an RGBA image through its palette.
	pub fn to_rgba_image(&self) -> RgbaImage {
		RgbaImage::from_fn(self.width(), self.height(), |x, y| {
			let c = self.palette.get(self.plane.get_pixel(x, y).0[0]);
			Rgba([c.r, c.g, c.b, c.a])
		})
	}
}

impl fmt::Display for IndexedFrame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}×{} ({} colors)", self.width(), self.height(), self.palette.len())
	}
}
