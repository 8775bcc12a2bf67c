//! Prelude module for `mosaic_types`.
//!
//! This module provides a convenient way to import commonly used types and functions.
//!
//! # Examples
//!
//! ```
//! use mosaic_types::prelude::*;
//!
//! let layout = Layout::compute(GridSpec::new(2, 2), TileGeometry::EMOJI, 64, 64).unwrap();
//! assert_eq!(reference_grid(layout.grid()), ":000: :001: \n:002: :003: \n");
//! ```

#[doc(inline)]
pub use crate::animation::{
	Animation, AnimationMeta, Disposal, FrameTiming, LoopCount, SourceAnimation,
};

#[doc(inline)]
pub use crate::error::MosaicError;

#[doc(inline)]
pub use crate::frame::IndexedFrame;

#[doc(inline)]
pub use crate::layout::{Axis, GridSpec, Layout, TileGeometry};

#[doc(inline)]
pub use crate::mosaic::{Mosaic, Tile};

#[doc(inline)]
pub use crate::output::{
	INSTRUCTIONS, OUTPUT_DIR, OUTPUT_EXTENSION, reference_grid, tile_file_name, tile_token,
	write_tiles,
};

#[doc(inline)]
pub use crate::palette::{Color, Palette};

#[doc(inline)]
pub use crate::resample::Resampler;

#[doc(inline)]
pub use crate::slice::{Rect, TileSlicer};
