#![forbid(unsafe_code)]

use alloc::collections::TryReserveError;
use core::{
  fmt,
  num::ParseIntError,
  str::Utf8Error,
};

/// An error from the `ppmedit` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmError {
  /// The header tag wasn't `P3`, or the data ended before any tag was read.
  UnsupportedFormat,

  /// The filter name given isn't one this crate knows.
  UnsupportedFilter,

  /// `motionblur` needs a length and none was given.
  MissingLength,

  /// Failed to parse the data given.
  ///
  /// Numeric fields that don't fit in a `u32` end up here, as does input
  /// that isn't valid UTF-8.
  Parse,

  /// A pixel position was outside of the image's width and height.
  ///
  /// The parser also reports this when the data holds more pixels than the
  /// header declared.
  IndexOutOfRange,

  /// A pixel buffer didn't have exactly `width * height` entries.
  PixelCountMismatch,

  /// The allocator couldn't give us enough space.
  Alloc,

  /// The image is too large.
  ///
  /// Width and height are each limited to [`MAX_DIMENSION`](crate::MAX_DIMENSION)
  /// so that a tiny header can't ask for an enormous pixel grid.
  DimensionsTooLarge,
}
impl fmt::Display for PpmError {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      Self::UnsupportedFormat => "unsupported image format, only `P3` is handled",
      Self::UnsupportedFilter => {
        "unknown filter, expected grayscale, greyscale, invert, emboss, or motionblur"
      }
      Self::MissingLength => "motionblur requires a blur length",
      Self::Parse => "failed to parse a numeric field",
      Self::IndexOutOfRange => "pixel position is outside of the image",
      Self::PixelCountMismatch => "pixel count doesn't match width * height",
      Self::Alloc => "couldn't allocate the pixel grid",
      Self::DimensionsTooLarge => "image width or height is too large",
    };
    f.write_str(s)
  }
}
#[cfg(feature = "std")]
impl std::error::Error for PpmError {}
impl From<Utf8Error> for PpmError {
  #[inline]
  fn from(_: Utf8Error) -> Self {
    Self::Parse
  }
}
impl From<ParseIntError> for PpmError {
  #[inline]
  fn from(_: ParseIntError) -> Self {
    Self::Parse
  }
}
impl From<TryReserveError> for PpmError {
  #[inline]
  fn from(_: TryReserveError) -> Self {
    Self::Alloc
  }
}
