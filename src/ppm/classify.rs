#![forbid(unsafe_code)]

//! Character classes used by the field parsers.

/// If the character is an ascii decimal digit, `'0'..='9'`.
#[inline]
#[must_use]
pub const fn ppm_is_digit(ch: char) -> bool {
  ch.is_ascii_digit()
}

/// If the character separates fields.
///
/// That's space, tab, newline, carriage return, form feed, and vertical tab.
/// Note that [`char::is_ascii_whitespace`] doesn't count vertical tab, so we
/// can't just use that.
#[inline]
#[must_use]
pub const fn ppm_is_whitespace(ch: char) -> bool {
  matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}
