//! This crate provides the layout, resampling, slicing and GIF codec support
//! for the `gif-mosaic` project.
//!
//! # Pipeline
//!
//! - **Layout**: computes the final tile grid and scaled resolution from a
//!   requested minimum grid and the source aspect ratio
//! - **Resample**: scales every frame to that resolution with one reusable
//!   bilinear scaler, keeping each frame's palette
//! - **Slice**: crops each scaled frame into fixed-size tiles, padding the
//!   right and bottom edges with transparency
//! - **Mosaic**: collects the per-frame tiles into one animation per tile
//! - **Output**: writes `NNN.gif` files and formats the `:NNN:` token grid
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use mosaic_types::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Animation::open("party.gif")?;
//! let mosaic = Mosaic::build(&source, GridSpec::new(2, 2), TileGeometry::EMOJI)?;
//! write_tiles(&mosaic, OUTPUT_DIR)?;
//! print!("{}", reference_grid(mosaic.grid()));
//! # Ok(())
//! # }
//! ```

pub mod animation;
pub mod error;
pub mod frame;
pub mod layout;
pub mod mosaic;
pub mod output;
pub mod palette;
pub mod resample;
pub mod slice;

/// `use mosaic_types::prelude::*;` to import commonly used items.
pub mod prelude;
