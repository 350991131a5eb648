#![forbid(unsafe_code)]

use alloc::string::String;
use core::fmt::Write;

use crate::{xy_width_to_index, Image};

/// Writes the image as `P3` text.
///
/// The output always has the same shape: the header on three lines (`P3`,
/// then `width height`, then `255`), and then one line per pixel row with
/// single spaces between every value.
pub fn ppm_write_to<W: Write>(image: &Image, out: &mut W) -> core::fmt::Result {
  writeln!(out, "P3")?;
  writeln!(out, "{} {}", image.width(), image.height())?;
  writeln!(out, "255")?;
  let width = image.width() as usize;
  for y in 0..image.height() {
    let start = xy_width_to_index(0, y, image.width());
    let row = &image.pixels()[start..start + width];
    for (x, c) in row.iter().enumerate() {
      if x > 0 {
        out.write_char(' ')?;
      }
      write!(out, "{} {} {}", c.red, c.green, c.blue)?;
    }
    writeln!(out)?;
  }
  Ok(())
}

/// Renders the image to a new `String`.
#[inline]
#[must_use]
pub fn ppm_write(image: &Image) -> String {
  let mut s = String::with_capacity(16 + image.pixels().len() * 12);
  // Writing into a `String` can't fail.
  let _ = ppm_write_to(image, &mut s);
  s
}
