//! Animated GIF model for the source animation and the per-tile outputs.
//!
//! An [`Animation`] is an ordered list of palette-indexed frames at a fixed
//! logical screen size plus the metadata that controls playback. Each frame
//! carries its own delay and disposal method; the loop count, background index
//! and global palette apply to the whole animation.
//!
//! Source animations are loaded with [`Animation::open`] /
//! [`Animation::from_reader`] and tile animations are written with
//! [`Animation::encode`]. Metadata is copied verbatim from source to tile.
//!
//! # Example
//!
//! ```no_run
//! use mosaic_types::animation::Animation;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Animation::open("party.gif")?;
//! println!("{}×{}, {} frames", source.width(), source.height(), source.frame_count());
//! for (frame, timing) in source.frames().iter().zip(source.timings()) {
//!     println!("  {frame}: {} cs, {:?}", timing.delay, timing.disposal);
//! }
//! # Ok(())
//! # }
//! ```

mod decode;
mod encode;

use std::fmt;

use crate::error::{MosaicError, Result};
use crate::frame::IndexedFrame;
use crate::palette::Palette;

/// How a renderer treats the previous frame before drawing the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Disposal {
	/// No disposal specified
	#[default]
	Any = 0,
	/// Leave the frame in place
	Keep = 1,
	/// Restore the frame area to the background
	Background = 2,
	/// Restore the frame area to the previous contents
	Previous = 3,
}

impl Disposal {
	/// Converts the packed GIF disposal field.
	pub fn from_u8(value: u8) -> Self {
		match value {
			1 => Self::Keep,
			2 => Self::Background,
			3 => Self::Previous,
			_ => Self::Any,
		}
	}

	/// Converts `Disposal` to u8
	pub fn to_u8(self) -> u8 {
		self as u8
	}
}

/// Number of times the animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopCount {
	/// No looping extension, plays once
	#[default]
	Once,
	/// Loops forever
	Infinite,
	/// Repeats the given number of times after the first play
	Finite(u16),
}

impl fmt::Display for LoopCount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Once => write!(f, "once"),
			Self::Infinite => write!(f, "infinite"),
			Self::Finite(n) => write!(f, "{n} repeats"),
		}
	}
}

/// Per-frame playback parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTiming {
	/// Delay in hundredths of a second
	pub delay: u16,
	/// Disposal method applied after the frame
	pub disposal: Disposal,
}

impl FrameTiming {
	/// Creates frame timing.
	pub const fn new(delay: u16, disposal: Disposal) -> Self {
		Self {
			delay,
			disposal,
		}
	}
}

/// Playback metadata shared by the source animation and every tile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimationMeta {
	/// Timing of each frame, aligned with the frame list
	pub timings: Vec<FrameTiming>,
	/// Loop count
	pub loop_count: LoopCount,
	/// Background colour index into the global palette
	pub background_index: u8,
	/// Global colour table, if the animation has one
	pub global_palette: Option<Palette>,
}

/// Animated palette-indexed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
	width: u32,
	height: u32,
	frames: Vec<IndexedFrame>,
	meta: AnimationMeta,
}

/// The decoded input animation.
pub type SourceAnimation = Animation;

impl Animation {
	/// Creates an empty animation that will hold frames of `width × height`.
	///
	/// Capacity is reserved for one frame per timing entry in `meta`.
	pub fn new(width: u32, height: u32, meta: AnimationMeta) -> Self {
		Self {
			width,
			height,
			frames: Vec::with_capacity(meta.timings.len()),
			meta,
		}
	}

	/// Creates an animation from complete frame data.
	///
	/// # Errors
	///
	/// Returns [`MosaicError::EmptyAnimation`] if `frames` is empty and
	/// [`MosaicError::FrameCountMismatch`] if the timings are not aligned with
	/// the frames.
	pub fn from_frames(width: u32, height: u32, frames: Vec<IndexedFrame>, meta: AnimationMeta) -> Result<Self> {
		if frames.is_empty() {
			return Err(MosaicError::EmptyAnimation);
		}
		if frames.len() != meta.timings.len() {
			return Err(MosaicError::FrameCountMismatch {
				index: 0,
				expected: meta.timings.len(),
				actual: frames.len(),
			});
		}

		Ok(Self {
			width,
			height,
			frames,
			meta,
		})
	}

	/// Logical screen width.
	#[inline]
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Logical screen height.
	#[inline]
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Number of frames currently held.
	#[inline]
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Frames in playback order.
	#[inline]
	pub fn frames(&self) -> &[IndexedFrame] {
		&self.frames
	}

	/// Appends a frame.
	pub fn push_frame(&mut self, frame: IndexedFrame) {
		self.frames.push(frame);
	}

	/// Playback metadata.
	#[inline]
	pub fn meta(&self) -> &AnimationMeta {
		&self.meta
	}

	/// Per-frame timings.
	#[inline]
	pub fn timings(&self) -> &[FrameTiming] {
		&self.meta.timings
	}

	/// Loop count.
	#[inline]
	pub fn loop_count(&self) -> LoopCount {
		self.meta.loop_count
	}

	/// Background colour index.
	#[inline]
	pub fn background_index(&self) -> u8 {
		self.meta.background_index
	}
}

impl fmt::Display for Animation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}×{}, {} frames, loop {}",
			self.width,
			self.height,
			self.frames.len(),
			self.meta.loop_count
		)
	}
}
