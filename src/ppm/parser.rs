#![forbid(unsafe_code)]

use core::str::from_utf8;

use super::{FieldParser, NoneParser, NumberParser, ParseState, RgbParser, TypeParser};
use crate::{Image, PpmError};

/// The header values of a PPM image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PpmHeader {
  pub width: u32,
  pub height: u32,
  /// Max value per channel entry.
  ///
  /// This is only reported, pixel values are never scaled by it.
  pub max_color: u32,
}

/// A push parser that builds an [`Image`] one character at a time.
///
/// ```
/// # use ppmedit::*;
/// let mut parser = PpmParser::new();
/// parser.feed_str("P3 1 1 255 ").unwrap();
/// assert_eq!(parser.state(), ParseState::Rgb);
/// parser.feed_str("1 2 3").unwrap();
/// let image = parser.finish().unwrap();
/// assert_eq!(image.get(0, 0), Ok(Color::new(1, 2, 3)));
/// ```
#[derive(Debug, Clone)]
pub struct PpmParser {
  state: ParseState,
  tag: TypeParser,
  width: NumberParser,
  height: NumberParser,
  max_color: NumberParser,
  none: NoneParser,
  /// Only exists once the header is complete.
  rgb: Option<RgbParser>,
}
impl Default for PpmParser {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
impl PpmParser {
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self {
      state: ParseState::Type,
      tag: TypeParser::default(),
      width: NumberParser::width(),
      height: NumberParser::height(),
      max_color: NumberParser::max_color(),
      none: NoneParser,
      rgb: None,
    }
  }

  /// The state that will get the next character.
  #[inline]
  #[must_use]
  pub const fn state(&self) -> ParseState {
    self.state
  }

  /// The header as far as it's been parsed.
  ///
  /// Fields that haven't been reached yet are 0.
  #[inline]
  #[must_use]
  pub fn header(&self) -> PpmHeader {
    PpmHeader {
      width: self.width.value(),
      height: self.height.value(),
      max_color: self.max_color.value(),
    }
  }

  /// Feeds a single character to whichever field parser owns the input.
  ///
  /// ## Failure
  /// * The tag wasn't `P3`.
  /// * A numeric value is too big for a `u32`.
  /// * There's more pixel data than the header declared.
  /// * The header declares a grid too big to allocate.
  #[inline]
  pub fn feed(&mut self, ch: char) -> Result<(), PpmError> {
    let next = match self.state {
      ParseState::Type => self.tag.consume(ch)?,
      ParseState::Width => self.width.consume(ch)?,
      ParseState::Height => self.height.consume(ch)?,
      ParseState::MaxColor => self.max_color.consume(ch)?,
      ParseState::Rgb => match self.rgb.as_mut() {
        Some(rgb) => rgb.consume(ch)?,
        None => ParseState::None,
      },
      ParseState::None => self.none.consume(ch)?,
    };
    if next != self.state {
      log::trace!("parse state {:?} -> {:?}", self.state, next);
      if next == ParseState::Rgb {
        self.begin_pixels()?;
      }
      self.state = next;
    }
    Ok(())
  }

  /// Feeds every character of the string.
  #[inline]
  pub fn feed_str(&mut self, s: &str) -> Result<(), PpmError> {
    s.chars().try_for_each(|ch| self.feed(ch))
  }

  fn begin_pixels(&mut self) -> Result<(), PpmError> {
    let header = self.header();
    log::debug!("{:?}", header);
    if header.max_color != u8::MAX as u32 {
      log::warn!("max color value is {}, channels will be used as-is", header.max_color);
    }
    self.rgb = Some(RgbParser::new(header.width, header.height)?);
    Ok(())
  }

  /// Ends the input and gives back the image.
  ///
  /// The end of input acts like one last whitespace character, so a value
  /// right at the end still counts.
  ///
  /// ## Failure
  /// * The input never contained a complete `P3` tag.
  /// * Any failure of [`feed`](Self::feed) caused by the final separator.
  /// * There was no pixel data and the header's grid can't be allocated.
  pub fn finish(mut self) -> Result<Image, PpmError> {
    if self.state != ParseState::None {
      self.feed('\n')?;
    }
    if self.state == ParseState::Type {
      return Err(PpmError::UnsupportedFormat);
    }
    match self.rgb {
      Some(rgb) => {
        let written = rgb.pixels_written();
        let image = rgb.into_image();
        let expected = image.pixels().len();
        if written < expected {
          log::warn!("only {} of {} pixels present, the rest are black", written, expected);
        }
        Ok(image)
      }
      None => {
        let header = self.header();
        let image = Image::new(header.width, header.height)?;
        if !image.pixels().is_empty() {
          log::warn!("no pixel data present, all {} pixels are black", image.pixels().len());
        }
        Ok(image)
      }
    }
  }
}

/// Parses `P3` text into an [`Image`].
#[inline]
pub fn ppm_parse(text: &str) -> Result<Image, PpmError> {
  let mut parser = PpmParser::new();
  parser.feed_str(text)?;
  parser.finish()
}

/// As [`ppm_parse`], but the bytes must be UTF-8 first.
#[inline]
pub fn ppm_parse_bytes(bytes: &[u8]) -> Result<Image, PpmError> {
  ppm_parse(from_utf8(bytes)?)
}
