//! GIF encoding of [`Animation`].

use std::borrow::Cow;

use super::{Animation, LoopCount};
use crate::error::{MosaicError, Result};

/// Offset of the background colour index in the logical screen descriptor
/// (signature 6 + width 2 + height 2 + flags 1).
const BACKGROUND_INDEX_OFFSET: usize = 11;

impl Animation {
	/// Encodes the animation as a GIF89a byte stream.
	///
	/// Local palettes equal to the global palette are omitted. Output is
	/// deterministic for a given animation.
	///
	/// # Errors
	///
	/// Returns [`MosaicError::InvalidLayout`] if the screen does not fit in a
	/// GIF header and [`MosaicError::Encode`] if the encoder rejects a frame.
	pub fn encode(&self) -> Result<Vec<u8>> {
		let width = u16::try_from(self.width)
			.map_err(|_| MosaicError::InvalidLayout("animation width exceeds 65535"))?;
		let height = u16::try_from(self.height)
			.map_err(|_| MosaicError::InvalidLayout("animation height exceeds 65535"))?;

		let global_rgb = self.meta.global_palette.as_ref().map(|p| p.to_rgb()).unwrap_or_default();

		let mut data = Vec::new();
		let mut encoder = gif::Encoder::new(&mut data, width, height, &global_rgb)?;
		match self.meta.loop_count {
			LoopCount::Once => {}
			LoopCount::Infinite => encoder.set_repeat(gif::Repeat::Infinite)?,
			LoopCount::Finite(n) => encoder.set_repeat(gif::Repeat::Finite(n))?,
		}

		for (frame, timing) in self.frames.iter().zip(&self.meta.timings) {
			let rgb = frame.palette().to_rgb();
			let palette = if rgb.is_empty() || rgb == global_rgb {
				None
			} else {
				Some(rgb)
			};

			let gif_frame = gif::Frame {
				width: u16::try_from(frame.width())
					.map_err(|_| MosaicError::InvalidLayout("frame width exceeds 65535"))?,
				height: u16::try_from(frame.height())
					.map_err(|_| MosaicError::InvalidLayout("frame height exceeds 65535"))?,
				delay: timing.delay,
				dispose: gif::DisposalMethod::from_u8(timing.disposal.to_u8())
					.unwrap_or(gif::DisposalMethod::Any),
				transparent: frame.palette().transparent(),
				palette,
				buffer: Cow::Borrowed(frame.pixels()),
				..Default::default()
			};
			encoder.write_frame(&gif_frame)?;
		}

		// Dropping the encoder writes the trailer
		drop(encoder);

		if let Some(byte) = data.get_mut(BACKGROUND_INDEX_OFFSET) {
			*byte = self.meta.background_index;
		}

		Ok(data)
	}
}
