#![forbid(unsafe_code)]

use alloc::string::String;

use super::{ppm_is_digit, ppm_is_whitespace};
use crate::PpmError;

/// Which field parser currently owns the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseState {
  /// The `P3` tag.
  Type,
  Width,
  Height,
  MaxColor,
  /// The pixel data, which runs until the end of input.
  Rgb,
  /// Absorbs everything. Nothing transitions here with valid input.
  None,
}

/// One field's worth of parsing.
///
/// A field parser is handed characters one at a time while its state is
/// active. It returns the state that should get the next character, which is
/// its own state until the field is complete.
pub trait FieldParser {
  /// What the field parses into.
  type Output;

  /// Feeds one character in.
  fn consume(&mut self, ch: char) -> Result<ParseState, PpmError>;

  /// The finished value, or the default before the field is complete.
  fn value(&self) -> Self::Output;
}

/// Parses the header tag, which must be `P3`.
#[derive(Debug, Clone, Default)]
pub struct TypeParser {
  raw: String,
  tag: String,
}
impl FieldParser for TypeParser {
  type Output = String;

  #[inline]
  fn consume(&mut self, ch: char) -> Result<ParseState, PpmError> {
    if ppm_is_whitespace(ch) {
      if self.raw.is_empty() {
        return Ok(ParseState::Type);
      }
      self.tag = core::mem::take(&mut self.raw);
      if self.tag != "P3" {
        log::debug!("unsupported tag {:?}", self.tag);
        return Err(PpmError::UnsupportedFormat);
      }
      return Ok(ParseState::Width);
    }
    self.raw.push(ch);
    Ok(ParseState::Type)
  }

  #[inline]
  fn value(&self) -> String {
    self.tag.clone()
  }
}

/// Parses one of the unsigned decimal header fields.
///
/// Anything that isn't a digit or whitespace is skipped over.
#[derive(Debug, Clone)]
pub struct NumberParser {
  own: ParseState,
  next: ParseState,
  raw: String,
  number: u32,
}
impl NumberParser {
  #[inline]
  #[must_use]
  const fn new(own: ParseState, next: ParseState) -> Self {
    Self { own, next, raw: String::new(), number: 0 }
  }

  #[inline]
  #[must_use]
  pub const fn width() -> Self {
    Self::new(ParseState::Width, ParseState::Height)
  }

  #[inline]
  #[must_use]
  pub const fn height() -> Self {
    Self::new(ParseState::Height, ParseState::MaxColor)
  }

  #[inline]
  #[must_use]
  pub const fn max_color() -> Self {
    Self::new(ParseState::MaxColor, ParseState::Rgb)
  }
}
impl FieldParser for NumberParser {
  type Output = u32;

  #[inline]
  fn consume(&mut self, ch: char) -> Result<ParseState, PpmError> {
    if ppm_is_whitespace(ch) {
      if self.raw.is_empty() {
        return Ok(self.own);
      }
      self.number = self.raw.parse::<u32>()?;
      self.raw.clear();
      return Ok(self.next);
    }
    if ppm_is_digit(ch) {
      self.raw.push(ch);
    }
    Ok(self.own)
  }

  #[inline]
  fn value(&self) -> u32 {
    self.number
  }
}

/// Swallows all input without ever leaving [`ParseState::None`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneParser;
impl FieldParser for NoneParser {
  type Output = ();

  #[inline]
  fn consume(&mut self, _: char) -> Result<ParseState, PpmError> {
    Ok(ParseState::None)
  }

  #[inline]
  fn value(&self) {}
}
