//! Bilinear frame resampling.
//!
//! A [`Resampler`] is configured once for a fixed source and destination size
//! and then applied to every frame. Each frame is expanded through its palette
//! into premultiplied RGBA, scaled with [`imageops::resize`] using the
//! triangle (bilinear) filter, and mapped back onto the frame's own palette.
//!
//! When shrinking, the triangle filter widens with the scale factor so every
//! source pixel contributes.

use std::collections::HashMap;

use image::imageops::{self, FilterType};
use image::{Rgba, Rgba32FImage, RgbaImage};
use log::debug;

use crate::error::{MosaicError, Result};
use crate::frame::IndexedFrame;
use crate::layout::Layout;

/// Reusable bilinear scaler for frames of one fixed size.
#[derive(Debug, Clone, Copy)]
pub struct Resampler {
	src_width: u32,
	src_height: u32,
	dst_width: u32,
	dst_height: u32,
	filter: FilterType,
}

impl Resampler {
	/// Alpha at or above which an interpolated pixel maps to an opaque entry
	pub const OPAQUE_THRESHOLD: f32 = 0.5;

	/// Builds a scaler from `src_width × src_height` to `dst_width × dst_height`.
	pub fn new(dst_width: u32, dst_height: u32, src_width: u32, src_height: u32) -> Self {
		Self {
			src_width,
			src_height,
			dst_width,
			dst_height,
			filter: FilterType::Triangle,
		}
	}

	/// Builds a scaler targeting the scaled resolution of `layout`.
	pub fn for_layout(layout: &Layout, src_width: u32, src_height: u32) -> Self {
		Self::new(layout.width(), layout.height(), src_width, src_height)
	}

	/// Scales one frame, keeping its palette.
	///
	/// The source frame is left untouched. A transparent palette entry is
	/// added to the output only if some output pixel is transparent and the
	/// palette had none.
	///
	/// # Errors
	///
	/// Returns [`MosaicError::FrameSizeMismatch`] if the frame does not have
	/// the source size this scaler was built for.
	pub fn scale(&self, frame: &IndexedFrame) -> Result<IndexedFrame> {
		if frame.width() != self.src_width || frame.height() != self.src_height {
			return Err(MosaicError::FrameSizeMismatch {
				expected: self.src_width as usize * self.src_height as usize,
				actual: frame.width() as usize * frame.height() as usize,
			});
		}

		let premultiplied = premultiply(&frame.to_rgba_image());
		let resized = imageops::resize(&premultiplied, self.dst_width, self.dst_height, self.filter);

		let palette = frame.palette();
		let mut cache: HashMap<[u8; 3], u8> = HashMap::new();
		let indices: Vec<Option<u8>> = resized
			.pixels()
			.map(|&Rgba([r, g, b, a])| {
				if a < Self::OPAQUE_THRESHOLD {
					return None;
				}
				let rgb = [unpremultiply(r, a), unpremultiply(g, a), unpremultiply(b, a)];
				if let Some(&index) = cache.get(&rgb) {
					return Some(index);
				}
				let nearest = palette.nearest_opaque(rgb)?;
				cache.insert(rgb, nearest);
				Some(nearest)
			})
			.collect();

		let pixels = indices.iter().map(|index| index.unwrap_or(0)).collect();
		let mut scaled = IndexedFrame::new(self.dst_width, self.dst_height, pixels, palette.clone())?;

		if indices.iter().any(Option::is_none) {
			let transparent = scaled.ensure_transparent();
			for (pixel, index) in scaled.pixels_mut().iter_mut().zip(&indices) {
				if index.is_none() {
					*pixel = transparent;
				}
			}
		}

		debug!(
			"Scaled frame {}×{} -> {}×{} ({} distinct colors)",
			self.src_width,
			self.src_height,
			self.dst_width,
			self.dst_height,
			cache.len()
		);

		Ok(scaled)
	}
}

/// Converts to premultiplied RGBA in `0.0..=1.0`.
fn premultiply(image: &RgbaImage) -> Rgba32FImage {
	Rgba32FImage::from_fn(image.width(), image.height(), |x, y| {
		let Rgba([r, g, b, a]) = *image.get_pixel(x, y);
		let alpha = f32::from(a) / 255.0;
		Rgba([
			f32::from(r) / 255.0 * alpha,
			f32::from(g) / 255.0 * alpha,
			f32::from(b) / 255.0 * alpha,
			alpha,
		])
	})
}

#[inline]
fn unpremultiply(value: f32, alpha: f32) -> u8 {
	(value / alpha * 255.0).round().clamp(0.0, 255.0) as u8
}
