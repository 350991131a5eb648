#![forbid(unsafe_code)]

//! Provides the heap-allocated image type that the parser builds and the
//! filters work on.

use alloc::vec::Vec;
use bytemuck::{Pod, Zeroable};
use pixel_formats::r8g8b8_Srgb;

use crate::PpmError;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
///
/// You don't ever need to call this function yourself, but it's how [`Image`]
/// converts 2d coordinates into index values within its pixel vector.
#[inline]
#[must_use]
pub const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  (y as usize) * (width as usize) + (x as usize)
}

/// The largest width or height that [`Image::new`] will allocate.
///
/// 17,000 by 17,000 is still a few gigabytes of pixels, which is plenty.
pub const MAX_DIMENSION: u32 = 17_000;

/// Red/Green/Blue, stored as plain integers.
///
/// The type itself doesn't enforce any upper bound on the channels. Values are
/// *expected* to be in `0..=255`, and every filter clamps what it writes back
/// into that range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Zeroable, Pod)]
#[repr(C)]
#[allow(missing_docs)]
pub struct Color {
  pub red: u32,
  pub green: u32,
  pub blue: u32,
}
impl Color {
  #[inline]
  #[must_use]
  pub const fn new(red: u32, green: u32, blue: u32) -> Self {
    Self { red, green, blue }
  }

  /// All three channels set to the same level.
  #[inline]
  #[must_use]
  pub const fn gray(level: u32) -> Self {
    Self { red: level, green: level, blue: level }
  }
}
impl From<[u32; 3]> for Color {
  #[inline]
  fn from([red, green, blue]: [u32; 3]) -> Self {
    Self { red, green, blue }
  }
}
impl From<r8g8b8_Srgb> for Color {
  #[inline]
  fn from(r8g8b8_Srgb { r, g, b }: r8g8b8_Srgb) -> Self {
    Self { red: u32::from(r), green: u32::from(g), blue: u32::from(b) }
  }
}
impl From<Color> for r8g8b8_Srgb {
  /// Channels above 255 saturate.
  #[inline]
  fn from(Color { red, green, blue }: Color) -> Self {
    let clamp = |c: u32| c.min(u8::MAX as u32) as u8;
    r8g8b8_Srgb { r: clamp(red), g: clamp(green), b: clamp(blue) }
  }
}

/// A direct-color image.
///
/// Pixels are kept row-major, so `(0,0)` is the top left and `x` moves
/// fastest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Image {
  width: u32,
  height: u32,
  pixels: Vec<Color>,
}
impl Image {
  /// Makes an image with every pixel set to black.
  ///
  /// ## Failure
  /// * [`PpmError::DimensionsTooLarge`] if either side is over
  ///   [`MAX_DIMENSION`].
  /// * [`PpmError::Alloc`] if the allocator can't provide the grid.
  #[inline]
  pub fn new(width: u32, height: u32) -> Result<Self, PpmError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
      return Err(PpmError::DimensionsTooLarge);
    }
    let len =
      (width as usize).checked_mul(height as usize).ok_or(PpmError::DimensionsTooLarge)?;
    let mut pixels: Vec<Color> = Vec::new();
    pixels.try_reserve_exact(len)?;
    pixels.resize(len, Color::zeroed());
    Ok(Self { width, height, pixels })
  }

  /// Wraps an existing row-major pixel vector.
  ///
  /// ## Failure
  /// * The vector must hold exactly `width * height` pixels.
  #[inline]
  pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, PpmError> {
    if pixels.len() == xy_width_to_index(0, height, width) {
      Ok(Self { width, height, pixels })
    } else {
      Err(PpmError::PixelCountMismatch)
    }
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[Color] {
    &self.pixels
  }

  #[inline]
  pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
    &mut self.pixels
  }

  #[inline]
  fn index_of(&self, x: u32, y: u32) -> Result<usize, PpmError> {
    if x < self.width && y < self.height {
      Ok(xy_width_to_index(x, y, self.width))
    } else {
      Err(PpmError::IndexOutOfRange)
    }
  }

  /// Gets the pixel at the position.
  #[inline]
  pub fn get(&self, x: u32, y: u32) -> Result<Color, PpmError> {
    let i = self.index_of(x, y)?;
    Ok(self.pixels[i])
  }

  /// Overwrites the pixel at the position.
  #[inline]
  pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<(), PpmError> {
    let i = self.index_of(x, y)?;
    self.pixels[i] = color;
    Ok(())
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Color> {
    let i = self.index_of(x, y).ok()?;
    self.pixels.get_mut(i)
  }

  /// Iterates the image one row at a time, top to bottom.
  #[inline]
  pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
    // `chunks_exact` panics on zero, and a zero width image has no pixels
    // anyway.
    self.pixels.chunks_exact(self.width.max(1) as usize)
  }

  #[inline]
  pub(crate) fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Color]> + '_ {
    self.pixels.chunks_exact_mut(self.width.max(1) as usize)
  }

  /// Makes an independent copy of this image.
  ///
  /// Every filter starts from a copy, so the image handed to a filter is never
  /// changed.
  #[inline]
  #[must_use]
  pub fn copy(&self) -> Self {
    self.clone()
  }
}
