#![forbid(unsafe_code)]

//! Pixel filters.
//!
//! Every filter takes the source image by reference and returns a brand new
//! image, leaving the source untouched. Output channels are always clamped to
//! `0..=255`.

use crate::{Color, Image, PpmError};

/// Clamps into the `u8` range, as a `u32` channel value.
#[inline]
#[must_use]
fn clamp_channel(level: i64) -> u32 {
  level.clamp(0, u8::MAX as i64) as u32
}

/// A filter that can be picked by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
  Grayscale,
  Invert,
  Emboss,
  /// Averages each pixel with the `length - 1` pixels to its right.
  MotionBlur { length: u32 },
}
impl Filter {
  /// Every name [`from_name`](Self::from_name) accepts.
  pub const NAMES: &'static [&'static str] =
    &["grayscale", "greyscale", "invert", "emboss", "motionblur"];

  /// Picks a filter by name.
  ///
  /// The `length` only matters for `motionblur`, and is ignored otherwise.
  ///
  /// ## Failure
  /// * [`PpmError::UnsupportedFilter`] for an unknown name.
  /// * [`PpmError::MissingLength`] for `motionblur` without a length.
  pub fn from_name(name: &str, length: Option<u32>) -> Result<Self, PpmError> {
    Ok(match name {
      "grayscale" | "greyscale" => Self::Grayscale,
      "invert" => Self::Invert,
      "emboss" => Self::Emboss,
      "motionblur" => Self::MotionBlur { length: length.ok_or(PpmError::MissingLength)? },
      _ => return Err(PpmError::UnsupportedFilter),
    })
  }

  /// Runs the filter, giving a new image.
  #[must_use]
  pub fn apply(self, image: &Image) -> Image {
    log::debug!("applying {:?} to {}x{}", self, image.width(), image.height());
    let out = match self {
      Self::Grayscale => grayscale(image),
      Self::Invert => invert(image),
      Self::Emboss => emboss(image),
      Self::MotionBlur { length } => motion_blur(image, length),
    };
    log::debug!("finished {:?}", self);
    out
  }
}

/// Replaces every channel with `255 - channel`.
#[must_use]
pub fn invert(image: &Image) -> Image {
  let mut out = image.copy();
  out.pixels_mut().iter_mut().for_each(|c| {
    let flip = |v: u32| clamp_channel(u8::MAX as i64 - v as i64);
    *c = Color::new(flip(c.red), flip(c.green), flip(c.blue));
  });
  out
}

/// Sets each pixel to the (rounded down) mean of its three channels.
#[must_use]
pub fn grayscale(image: &Image) -> Image {
  let mut out = image.copy();
  out.pixels_mut().iter_mut().for_each(|c| {
    let sum = c.red as i64 + c.green as i64 + c.blue as i64;
    *c = Color::gray(clamp_channel(sum / 3));
  });
  out
}

/// The channel difference from `prev` to `here` with the largest magnitude.
///
/// Channels are checked red, green, blue, and a later channel only wins if
/// it's strictly larger.
#[inline]
#[must_use]
fn emboss_delta(here: Color, prev: Color) -> i64 {
  [
    here.red as i64 - prev.red as i64,
    here.green as i64 - prev.green as i64,
    here.blue as i64 - prev.blue as i64,
  ]
  .into_iter()
  .fold(0, |best, d| if d.abs() > best.abs() { d } else { best })
}

/// Gray relief based on each pixel's difference from its up-left neighbor.
///
/// Pixels in the top row or left column have no such neighbor and become
/// middle gray, as does any pixel that matches its neighbor.
#[must_use]
pub fn emboss(image: &Image) -> Image {
  let mut out = image.copy();
  let mut prev_row: Option<&[Color]> = None;
  for (row, out_row) in image.rows().zip(out.rows_mut()) {
    for (x, slot) in out_row.iter_mut().enumerate() {
      let delta = match prev_row {
        Some(prev) if x > 0 => emboss_delta(row[x], prev[x - 1]),
        _ => 0,
      };
      *slot = Color::gray(clamp_channel(128 + delta));
    }
    prev_row = Some(row);
  }
  out
}

/// Horizontal blur, averaging each pixel with up to `length - 1` pixels to
/// its right.
///
/// The window shrinks near the right edge instead of wrapping or padding, and
/// every average is over the *source* pixels. A `length` of 0 or 1 gives back
/// an unchanged copy.
#[must_use]
pub fn motion_blur(image: &Image, length: u32) -> Image {
  let mut out = image.copy();
  if length <= 1 {
    return out;
  }
  let length = length as usize;
  for (row, out_row) in image.rows().zip(out.rows_mut()) {
    for (x, slot) in out_row.iter_mut().enumerate() {
      let window = &row[x..row.len().min(x.saturating_add(length))];
      let n = window.len() as u64;
      let [r, g, b] = window.iter().fold([0_u64; 3], |[r, g, b], c| {
        [r + c.red as u64, g + c.green as u64, b + c.blue as u64]
      });
      *slot = Color::new(
        clamp_channel((r / n) as i64),
        clamp_channel((g / n) as i64),
        clamp_channel((b / n) as i64),
      );
    }
  }
  out
}
