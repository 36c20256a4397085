//! Model a color with the HSL notation.

use crate::error::{Error, Result};
use crate::math::{clamp_percent, wrap_hue};

colorpick_macros::gen_model! {
    /// A color specified with the HSL notation, in whole degrees and whole
    /// percents. Always derived from an [`Rgb`](crate::Rgb) value.
    pub struct Hsl {
        /// The hue of the color in degrees, `[0, 360)`.
        hue: u16,
        /// The saturation of the color in percent, `[0, 100]`.
        saturation: u8,
        /// The lightness of the color in percent, `[0, 100]`.
        lightness: u8,
    }
}

impl Hsl {
    /// Create a color from wide integer components. The hue wraps around the
    /// wheel, saturation and lightness are clamped into `[0, 100]`.
    pub fn clamped(hue: i32, saturation: i32, lightness: i32) -> Self {
        Self::new(
            wrap_hue(hue),
            clamp_percent(saturation),
            clamp_percent(lightness),
        )
    }

    /// Create a color from wide integer components, failing with
    /// [`Error::InvalidInput`] if any is outside its range. A hue of 360 is
    /// accepted and wraps to 0.
    pub fn try_from_components(hue: i32, saturation: i32, lightness: i32) -> Result<Self> {
        if !(0..=360).contains(&hue) {
            return Err(Error::invalid_input("hue", hue));
        }
        if !(0..=100).contains(&saturation) {
            return Err(Error::invalid_input("saturation", saturation));
        }
        if !(0..=100).contains(&lightness) {
            return Err(Error::invalid_input("lightness", lightness));
        }

        Ok(Self::clamped(hue, saturation, lightness))
    }
}
