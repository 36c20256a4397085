//! CSS style text renderings of a color.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::{Hsl, Rgb};

/// The text forms a color can be rendered in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
}

impl Notation {
    /// Every notation, in display order.
    pub const ALL: [Notation; 3] = [Notation::Hex, Notation::Rgb, Notation::Hsl];

    /// The lower case name of the notation, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "rgb",
            Notation::Hsl => "hsl",
        }
    }
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notation::ALL
            .into_iter()
            .find(|n| n.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_input("notation", s))
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Rgb {
    /// Render this color in the given notation. HSL is derived from the RGB
    /// channels on every call.
    pub fn to_css(&self, notation: Notation) -> String {
        match notation {
            Notation::Hex => self.to_hex(),
            Notation::Rgb => self.to_string(),
            Notation::Hsl => self.to_hsl().to_string(),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
