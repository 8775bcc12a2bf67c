//! Error types for decoding, slicing and writing tile animations.

use thiserror::Error;

/// Errors that can occur while building or writing a tile mosaic
#[derive(Debug, Error)]
pub enum MosaicError {
	/// The source animation contains no frames
	#[error("Animation contains no frames")]
	EmptyAnimation,

	/// Layout inputs that cannot produce a grid
	#[error("Invalid layout: {0}")]
	InvalidLayout(&'static str),

	/// A frame's pixel buffer does not match its dimensions
	#[error("Frame buffer size mismatch: expected {expected} pixels, got {actual}")]
	FrameSizeMismatch {
		/// Expected number of pixels (width × height)
		expected: usize,
		/// Actual number of pixels in the buffer
		actual: usize,
	},

	/// A tile was assembled with a different number of frames than the source
	#[error("Tile {index} has {actual} frames, source has {expected}")]
	FrameCountMismatch {
		/// Tile index in row-major order
		index: usize,
		/// Number of frames in the source animation
		expected: usize,
		/// Number of frames present in the tile
		actual: usize,
	},

	/// GIF decoding error
	#[error(transparent)]
	Decode(#[from] gif::DecodingError),

	/// GIF encoding error
	#[error(transparent)]
	Encode(#[from] gif::EncodingError),

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

/// Result alias used throughout `mosaic_types`.
pub type Result<T> = std::result::Result<T, MosaicError>;
