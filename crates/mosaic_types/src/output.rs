//! Writing tile files and the reference-token grid.
//!
//! Tiles are written as `NNN.gif` (zero-padded row-major index) into one
//! output directory. The token grid lists `:NNN:` placeholders in the same
//! layout as the tiles so they can be pasted back together as a mosaic.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::layout::GridSpec;
use crate::mosaic::Mosaic;

/// Directory tiles are written to, relative to the working directory
pub const OUTPUT_DIR: &str = "gifs";

/// Extension of tile files
pub const OUTPUT_EXTENSION: &str = "gif";

/// Line printed ahead of the token grid
pub const INSTRUCTIONS: &str = "Upload all the gifs in gifs directory then copy paste the below";

/// File name of tile `index`, e.g. `007.gif`.
pub fn tile_file_name(index: usize) -> String {
	format!("{index:03}.{OUTPUT_EXTENSION}")
}

/// Placeholder token for tile `index`, e.g. `:007:`.
pub fn tile_token(index: usize) -> String {
	format!(":{index:03}:")
}

/// Formats the token grid, one line per grid row.
///
/// Every token is followed by a single space and every row by a newline.
pub fn reference_grid(grid: GridSpec) -> String {
	let mut out = String::new();
	let mut index = 0;
	for _ in 0..grid.rows {
		for _ in 0..grid.columns {
			out.push_str(&tile_token(index));
			out.push(' ');
			index += 1;
		}
		out.push('\n');
	}
	out
}

/// Encodes every tile and writes it into `dir`.
///
/// All tiles are encoded before the directory or any file is touched, so an
/// encoding failure leaves the file system unchanged. The directory is
/// created if missing.
///
/// # Returns
///
/// The written paths in tile index order.
pub fn write_tiles<P: AsRef<Path>>(mosaic: &Mosaic, dir: P) -> Result<Vec<PathBuf>> {
	let dir = dir.as_ref();
	let encoded = mosaic.encode_all()?;

	fs::create_dir_all(dir)?;

	let mut paths = Vec::with_capacity(encoded.len());
	for (index, data) in encoded.iter().enumerate() {
		let path = dir.join(tile_file_name(index));
		fs::write(&path, data)?;
		debug!("Wrote {} ({} bytes)", path.display(), data.len());
		paths.push(path);
	}

	info!("Wrote {} tiles to {}", paths.len(), dir.display());
	Ok(paths)
}
