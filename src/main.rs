//! `gif-mosaic` command-line tool.
//!
//! Rescales an animated GIF to fit a grid of 32×32 tiles, writes one animated
//! GIF per tile into `gifs/`, then prints the `:NNN:` tokens that rebuild the
//! mosaic.
//!
//! # Usage
//!
//! ```bash
//! # Slice into at least 2×2 tiles
//! gif-mosaic -f party.gif
//!
//! # Request at least 4 columns and 3 rows
//! gif-mosaic -h 4 -v 3 -f party.gif
//!
//! # Show per-frame progress
//! RUST_LOG=debug gif-mosaic -f party.gif
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use gif_mosaic::prelude::*;
use log::info;

#[derive(Parser)]
#[command(name = "gif-mosaic")]
#[command(version)]
#[command(about = "Slice an animated GIF into a grid of emoji-sized animated tiles", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
	/// Minimum horizontal blocks requested
	#[arg(short = 'h', value_name = "COLUMNS", default_value_t = 2)]
	columns: u32,

	/// Minimum vertical blocks requested
	#[arg(short = 'v', value_name = "ROWS", default_value_t = 2)]
	rows: u32,

	/// File to split into tiles
	#[arg(short = 'f', value_name = "FILE")]
	file: Option<PathBuf>,

	/// Print help
	#[arg(long, action = ArgAction::Help)]
	help: Option<bool>,
}

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let Some(path) = cli.file.filter(|p| !p.as_os_str().is_empty()) else {
		bail!("Please pass a file with the -f flag");
	};

	let source = Animation::open(&path).with_context(|| format!("Failed to load {}", path.display()))?;
	info!("Loaded {}: {source}", path.display());

	let mosaic = Mosaic::build(&source, GridSpec::new(cli.columns, cli.rows), TileGeometry::EMOJI)
		.with_context(|| format!("Failed to slice {}", path.display()))?;

	write_tiles(&mosaic, OUTPUT_DIR).with_context(|| format!("Failed to write tiles to {OUTPUT_DIR}/"))?;

	println!("{INSTRUCTIONS}");
	print!("{}", reference_grid(mosaic.grid()));
	Ok(())
}
