#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![forbid(unsafe_code)]

//! A crate for reading, filtering, and writing ASCII PPM (`P3`) images.
//!
//! * [`ppm_parse`] turns text into an [`Image`], one character at a time.
//! * A [`Filter`] turns an [`Image`] into a new [`Image`].
//! * [`ppm_write`] turns an [`Image`] back into text.
//!
//! ```
//! # use ppmedit::*;
//! let image = ppm_parse("P3\n1 1\n255\n255 0 128\n").unwrap();
//! let inverted = Filter::Invert.apply(&image);
//! assert_eq!(ppm_write(&inverted), "P3\n1 1\n255\n0 255 127\n");
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

pub mod image;
pub use image::*;

pub mod ppm;
pub use ppm::*;

pub mod filters;
pub use filters::*;
