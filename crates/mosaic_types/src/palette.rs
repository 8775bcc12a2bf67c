//! Colour palette support.
//!
//! GIF frames store pixels as indices into a colour table of up to 256 RGB
//! entries. A frame may additionally mark one index as transparent; that entry
//! is represented here with alpha 0.

use std::collections::HashMap;
use std::fmt;

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Returns true if the color is fully transparent.
	#[inline]
	pub const fn is_transparent(&self) -> bool {
		self.a == 0
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Frame colour table.
///
/// Holds at most [`Palette::MAX_COLORS`] entries. At most one entry, the
/// transparent index, carries alpha 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
	colors: Vec<Color>,
	transparent: Option<u8>,
}

impl Palette {
	/// Largest colour table a GIF frame can reference
	pub const MAX_COLORS: usize = 256;

	/// Creates a new empty palette.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a palette from packed RGB triplets.
	///
	/// # Arguments
	///
	/// * `rgb` - Colour table bytes, three per entry; a trailing partial entry is ignored
	/// * `transparent` - Index to treat as fully transparent
	pub fn from_rgb(rgb: &[u8], transparent: Option<u8>) -> Self {
		let mut colors: Vec<Color> = rgb
			.chunks_exact(3)
			.take(Self::MAX_COLORS)
			.map(|c| Color::rgb(c[0], c[1], c[2]))
			.collect();

		// An out-of-range transparent index is kept but matches no entry
		if let Some(color) = transparent.and_then(|index| colors.get_mut(index as usize)) {
			color.a = 0;
		}

		Self {
			colors,
			transparent,
		}
	}

	/// Packs the palette into RGB triplets as stored in a GIF colour table.
	pub fn to_rgb(&self) -> Vec<u8> {
		self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
	}

	/// Number of entries.
	#[inline]
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Returns true if the palette has no entries.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Gets a color by index, or transparent black if out of range.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors.get(index as usize).copied().unwrap_or_default()
	}

	/// Index marked as transparent, if any.
	#[inline]
	pub fn transparent(&self) -> Option<u8> {
		self.transparent
	}

	/// Appends a fully transparent entry and marks it as the transparent index.
	///
	/// Returns `None` if the palette is already full.
	pub fn push_transparent(&mut self) -> Option<u8> {
		if self.colors.len() >= Self::MAX_COLORS {
			return None;
		}
		let index = self.colors.len() as u8;
		self.colors.push(Color::transparent());
		self.transparent = Some(index);
		Some(index)
	}

	/// Marks an existing entry as the transparent index.
	pub fn set_transparent(&mut self, index: u8) {
		if let Some(previous) = self.transparent.and_then(|i| self.colors.get_mut(i as usize)) {
			previous.a = 255;
		}
		if let Some(color) = self.colors.get_mut(index as usize) {
			color.a = 0;
		}
		self.transparent = Some(index);
	}

	/// Finds the opaque entry closest to `rgb` by squared distance.
	///
	/// Ties resolve to the lowest index. Returns `None` if the palette has no
	/// opaque entries.
	pub fn nearest_opaque(&self, rgb: [u8; 3]) -> Option<u8> {
		self.colors
			.iter()
			.enumerate()
			.filter(|(_, c)| !c.is_transparent())
			.min_by_key(|(_, c)| {
				let dr = i32::from(c.r) - i32::from(rgb[0]);
				let dg = i32::from(c.g) - i32::from(rgb[1]);
				let db = i32::from(c.b) - i32::from(rgb[2]);
				dr * dr + dg * dg + db * db
			})
			.map(|(index, _)| index as u8)
	}
}

/// Returns the palette index occurring least often in `pixels`.
///
/// Indices in `0..palette_len` that never occur count as zero hits, so an unused
/// entry is preferred over any used one. Ties resolve to the lowest index.
pub fn least_used_index(pixels: &[u8], palette_len: usize) -> u8 {
	let mut hits: HashMap<u8, usize> = HashMap::new();
	for &index in pixels {
		*hits.entry(index).or_default() += 1;
	}

	(0..palette_len.clamp(1, Palette::MAX_COLORS))
		.map(|i| i as u8)
		.min_by_key(|i| hits.get(i).copied().unwrap_or(0))
		.unwrap_or(0)
}
