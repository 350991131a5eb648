#![forbid(unsafe_code)]

//! Module for reading and writing ASCII
//! [PPM](https://en.wikipedia.org/wiki/Netpbm) (`P3`) data.
//!
//! The format is about as simple as images get:
//! * The tag `P3`.
//! * The width, height, and maximum channel value, as ascii decimal.
//! * Then `width * height` pixels, each a red, green, and blue value.
//!
//! Every field is separated by a run of whitespace, and line breaks carry no
//! meaning at all. Comments and the binary `P6` form aren't supported.
//!
//! ## Parsing
//!
//! Parsing doesn't split the input into lines or tokens first. Instead a
//! [`PpmParser`] is fed one `char` at a time. At any moment exactly one field
//! parser owns the input, as tracked by [`ParseState`], and each field parser
//! says which state should get the *next* character. The states always flow
//! in the same order:
//!
//! ```text
//! Type -> Width -> Height -> MaxColor -> Rgb
//! ```
//!
//! The pixel grid is only allocated once the header is fully known, at the
//! moment that the `MaxColor -> Rgb` transition happens.
//!
//! Most of the time you just want [`ppm_parse`] and [`ppm_write`].
//!
//! ## Leniency
//!
//! * Characters that can't be part of a numeric field are skipped.
//! * The end of the input counts as a final separator, so the last value
//!   doesn't need trailing whitespace.
//! * Pixels that the data never gets around to are left black.
//! * The max color value is read and reported, but channel values are used as
//!   they are. Output always declares a max of 255.

mod classify;
pub use classify::*;

mod fields;
pub use fields::*;

mod rgb;
pub use rgb::*;

mod parser;
pub use parser::*;

mod writer;
pub use writer::*;
