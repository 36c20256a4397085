//! colorpick is the color model behind a color picker: exact conversions
//! between the RGB, HSL and hex notations, and the reduction of a buffer of
//! pixel samples to a single average color.
//!
//! [`Rgb`] is the canonical representation. [`Hsl`] and hex strings are
//! always derived from it on demand, so the notations can not drift apart.
//!
//! ```rust
//! use colorpick::{Notation, PixelBuffer, Rgb};
//!
//! let pixels = [0u8, 0, 0, 255, 255, 255, 255, 255];
//! let average = PixelBuffer::rgba(&pixels)?.average_color()?;
//! assert_eq!(average, Rgb::new(128, 128, 128));
//! assert_eq!(average.to_css(Notation::Hex), "#808080");
//! assert_eq!(average.to_css(Notation::Hsl), "hsl(0, 0%, 50%)");
//! # Ok::<(), colorpick::Error>(())
//! ```

#![deny(missing_docs)]


mod color;
mod convert;
mod error;
mod hex;
mod hsl;
mod math;
mod notation;
mod rgb;
mod sample;

pub use color::{Component, Components};
pub use convert::{hsl_to_rgb, rgb_to_hsl};
pub use error::{Error, Result};
pub use hex::{hex_to_rgb, rgb_to_hex, HexCase};
pub use hsl::Hsl;
pub use notation::Notation;
pub use rgb::{Rgb, Rgba};
pub use sample::{average_color, average_samples, PixelBuffer, PixelLayout, Sample};
