//! Benchmark helper utilities for gif-mosaic
//!
//! Generates synthetic palette-indexed animations so the resample and slice
//! benchmarks do not depend on files on disk.

use mosaic_types::animation::{Animation, AnimationMeta, Disposal, FrameTiming, LoopCount};
use mosaic_types::frame::IndexedFrame;
use mosaic_types::palette::Palette;

/// Builds a 256-colour palette with a smooth gradient
pub fn gradient_palette() -> Palette {
	let rgb: Vec<u8> = (0..=255u8).flat_map(|i| [i, i.wrapping_mul(2), 255 - i]).collect();
	Palette::from_rgb(&rgb, Some(0))
}

/// Generates one frame with a diagonal gradient pattern shifted by `phase`
pub fn generate_frame(width: u32, height: u32, phase: u32) -> IndexedFrame {
	let pixels = (0..height)
		.flat_map(|y| (0..width).map(move |x| ((x + y + phase) % 256) as u8))
		.collect();
	IndexedFrame::new(width, height, pixels, gradient_palette()).expect("pixel count matches")
}

/// Generates an animation of `frames` frames at `width × height`
pub fn generate_animation(width: u32, height: u32, frames: usize) -> Animation {
	let frame_list = (0..frames).map(|i| generate_frame(width, height, i as u32 * 7)).collect();
	let meta = AnimationMeta {
		timings: vec![FrameTiming::new(4, Disposal::Background); frames],
		loop_count: LoopCount::Infinite,
		background_index: 0,
		global_palette: None,
	};
	Animation::from_frames(width, height, frame_list, meta).expect("frames and timings are aligned")
}

/// Common benchmark sizes for synthetic test data
pub mod sizes {
	/// Small emoji source: 64x64
	pub const SMALL: (u32, u32) = (64, 64);
	/// Typical reaction GIF: 320x240
	pub const MEDIUM: (u32, u32) = (320, 240);
	/// Large GIF: 640x480
	pub const LARGE: (u32, u32) = (640, 480);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_frame() {
		let frame = generate_frame(10, 4, 3);
		assert_eq!(frame.pixels().len(), 40);
		assert_eq!(frame.get(0, 0), Some(3));
		assert_eq!(frame.get(2, 1), Some(6));
	}

	#[test]
	fn test_generate_animation() {
		let animation = generate_animation(16, 8, 5);
		assert_eq!(animation.frame_count(), 5);
		assert_eq!(animation.timings().len(), 5);
	}
}
