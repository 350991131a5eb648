#![forbid(unsafe_code)]

use alloc::string::String;

use super::{ppm_is_digit, ppm_is_whitespace, FieldParser, ParseState};
use crate::{Color, Image, PpmError};

/// Which channel of the current pixel is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
  Red,
  Green,
  Blue,
}

/// Parses the pixel data into a grid of the size given by the header.
///
/// Pixels fill in left to right, then top to bottom. This parser never hands
/// off to another state, it just keeps consuming until the input runs out.
#[derive(Debug, Clone)]
pub struct RgbParser {
  image: Image,
  channel: Channel,
  raw: [String; 3],
  x: u32,
  y: u32,
}
impl RgbParser {
  /// Allocates the (black) pixel grid up front.
  ///
  /// ## Failure
  /// * Anything that [`Image::new`] fails with.
  #[inline]
  pub fn new(width: u32, height: u32) -> Result<Self, PpmError> {
    Ok(Self {
      image: Image::new(width, height)?,
      channel: Channel::Red,
      raw: Default::default(),
      x: 0,
      y: 0,
    })
  }

  /// How many whole pixels have been written so far.
  #[inline]
  #[must_use]
  pub fn pixels_written(&self) -> usize {
    crate::xy_width_to_index(self.x, self.y, self.image.width())
  }

  /// Gives up the grid, however full it got.
  #[inline]
  #[must_use]
  pub fn into_image(self) -> Image {
    self.image
  }

  fn finish_pixel(&mut self) -> Result<(), PpmError> {
    let [r, g, b] = &self.raw;
    let color = Color::new(r.parse()?, g.parse()?, b.parse()?);
    self.raw.iter_mut().for_each(String::clear);
    self.image.set(self.x, self.y, color)?;
    self.x += 1;
    if self.x == self.image.width() {
      log::trace!("finished pixel row {}", self.y);
      self.x = 0;
      self.y += 1;
    }
    Ok(())
  }
}
impl FieldParser for RgbParser {
  type Output = Image;

  #[inline]
  fn consume(&mut self, ch: char) -> Result<ParseState, PpmError> {
    let slot = self.channel as usize;
    if ppm_is_whitespace(ch) {
      if !self.raw[slot].is_empty() {
        self.channel = match self.channel {
          Channel::Red => Channel::Green,
          Channel::Green => Channel::Blue,
          Channel::Blue => {
            self.finish_pixel()?;
            Channel::Red
          }
        };
      }
    } else if ppm_is_digit(ch) {
      self.raw[slot].push(ch);
    }
    Ok(ParseState::Rgb)
  }

  /// A copy of the grid as it stands.
  #[inline]
  fn value(&self) -> Image {
    self.image.copy()
  }
}
