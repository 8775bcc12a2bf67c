//! GIF decoding into [`Animation`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use super::{Animation, AnimationMeta, Disposal, FrameTiming, LoopCount};
use crate::error::{MosaicError, Result};
use crate::frame::IndexedFrame;
use crate::palette::Palette;

impl Animation {
	/// Opens and decodes a GIF file.
	///
	/// The file handle is released as soon as decoding finishes.
	pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
		let file = File::open(path)?;
		Self::from_reader(BufReader::new(file))
	}

	/// Decodes a GIF from a byte slice.
	pub fn from_bytes(data: &[u8]) -> Result<Self> {
		Self::from_reader(data)
	}

	/// Decodes a GIF from a reader.
	///
	/// Frames that cover only part of the logical screen are placed at their
	/// offset on a transparent full-size canvas.
	///
	/// # Errors
	///
	/// Returns [`MosaicError::Decode`] for malformed data and
	/// [`MosaicError::EmptyAnimation`] if the GIF has no frames.
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		let mut options = gif::DecodeOptions::new();
		options.set_color_output(gif::ColorOutput::Indexed);
		let mut decoder = options.read_info(reader)?;

		let width = u32::from(decoder.width());
		let height = u32::from(decoder.height());
		let global_rgb = decoder.global_palette().map(<[u8]>::to_vec);
		let background_index = decoder.bg_color().map_or(0, |index| index as u8);

		let mut frames = Vec::new();
		let mut timings = Vec::new();
		while let Some(frame) = decoder.read_next_frame()? {
			let rgb = frame.palette.as_deref().or(global_rgb.as_deref()).unwrap_or_default();
			let palette = Palette::from_rgb(rgb, frame.transparent);
			let indexed = IndexedFrame::new(
				u32::from(frame.width),
				u32::from(frame.height),
				frame.buffer.to_vec(),
				palette,
			)?
			.place_on_canvas(width, height, u32::from(frame.left), u32::from(frame.top));

			debug!(
				"Decoded frame {}: {}×{} at ({}, {}), delay {}",
				frames.len(),
				frame.width,
				frame.height,
				frame.left,
				frame.top,
				frame.delay
			);

			timings.push(FrameTiming::new(frame.delay, Disposal::from_u8(frame.dispose as u8)));
			frames.push(indexed);
		}

		if frames.is_empty() {
			return Err(MosaicError::EmptyAnimation);
		}

		let loop_count = match decoder.repeat() {
			gif::Repeat::Infinite => LoopCount::Infinite,
			gif::Repeat::Finite(0) => LoopCount::Once,
			gif::Repeat::Finite(n) => LoopCount::Finite(n),
		};

		let meta = AnimationMeta {
			timings,
			loop_count,
			background_index,
			global_palette: global_rgb.map(|rgb| Palette::from_rgb(&rgb, None)),
		};

		Self::from_frames(width, height, frames, meta)
	}
}
