//! The `#rrggbb` hex notation.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::Rgb;

/// Letter case used for the hex digits `a` to `f`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HexCase {
    /// `#ff8000`
    #[default]
    Lower,
    /// `#FF8000`
    Upper,
}

impl Rgb {
    /// Format this color as `#rrggbb` with lower case digits.
    pub fn to_hex(&self) -> String {
        self.to_hex_with(HexCase::Lower)
    }

    /// Format this color as `#rrggbb` using the given letter case.
    pub fn to_hex_with(&self, case: HexCase) -> String {
        let Rgb { red, green, blue } = *self;
        match case {
            HexCase::Lower => format!("#{red:02x}{green:02x}{blue:02x}"),
            HexCase::Upper => format!("#{red:02X}{green:02X}{blue:02X}"),
        }
    }

    /// Parse a color from `#` followed by exactly six hex digits, in either
    /// case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        // `from_str_radix` alone would let a leading `+` through, so every
        // digit is checked up front. This also keeps the slicing below on
        // ASCII boundaries.
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| Error::invalid_format(hex))?;

        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| Error::invalid_format(hex))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Format integer RGB channels as `#rrggbb`. Channels are clamped into
/// `[0, 255]`.
pub fn rgb_to_hex(red: i32, green: i32, blue: i32) -> String {
    Rgb::clamped(red, green, blue).to_hex()
}

/// Parse a `#rrggbb` string into RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}
