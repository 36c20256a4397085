//! Model a color by its red, green and blue channels.

use crate::error::{Error, Result};
use crate::math::clamp_channel;

colorpick_macros::gen_model! {
    /// A color specified by its red, green and blue channels. This is the
    /// canonical representation: every other notation is derived from it.
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Create a color from wide integer channels, clamping each into
    /// `[0, 255]`.
    pub fn clamped(red: i32, green: i32, blue: i32) -> Self {
        Self::new(
            clamp_channel(red),
            clamp_channel(green),
            clamp_channel(blue),
        )
    }

    /// Create a color from wide integer channels, failing with
    /// [`Error::InvalidInput`] if any channel is outside `[0, 255]`.
    pub fn try_from_channels(red: i32, green: i32, blue: i32) -> Result<Self> {
        let channel = |what: &'static str, value: i32| {
            u8::try_from(value).map_err(|_| Error::invalid_input(what, value))
        };

        Ok(Self::new(
            channel("red", red)?,
            channel("green", green)?,
            channel("blue", blue)?,
        ))
    }

    /// Return the channels as an array in red, green, blue order.
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

/// An RGB color with an alpha channel, the record shape of a single RGBA
/// pixel sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// The red channel of the color.
    pub red: u8,
    /// The green channel of the color.
    pub green: u8,
    /// The blue channel of the color.
    pub blue: u8,
    /// The alpha channel of the color.
    pub alpha: u8,
}

impl Rgba {
    /// Create a new color with RGBA (red, green, blue, alpha) channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Drop the alpha channel.
    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_rgb_colors() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(rgb.red, 10);
        assert_eq!(rgb.green, 20);
        assert_eq!(rgb.blue, 30);
        assert_eq!(rgb.channels(), [10, 20, 30]);
        assert_eq!(rgb.to_tuple(), (10, 20, 30));
        assert_eq!(Rgb::from((10, 20, 30)), rgb);
        assert_eq!(Rgb::from([10, 20, 30]), rgb);
        assert_eq!(Rgb::default(), Rgb::new(0, 0, 0));
    }

    #[test]
    fn clamped_saturates_out_of_range_channels() {
        assert_eq!(Rgb::clamped(-10, 128, 300), Rgb::new(0, 128, 255));
        assert_eq!(Rgb::clamped(i32::MIN, 0, i32::MAX), Rgb::new(0, 0, 255));
    }

    #[test]
    fn try_from_channels_names_the_bad_channel() {
        assert_eq!(Rgb::try_from_channels(0, 255, 1), Ok(Rgb::new(0, 255, 1)));
        assert_eq!(
            Rgb::try_from_channels(0, 256, 1),
            Err(Error::InvalidInput {
                what: "green",
                value: "256".into()
            })
        );
        assert_eq!(
            Rgb::try_from_channels(-1, 0, 0),
            Err(Error::InvalidInput {
                what: "red",
                value: "-1".into()
            })
        );
    }

    #[test]
    fn rgba_drops_alpha() {
        let rgba = Rgba::from([1, 2, 3, 4]);
        assert_eq!(rgba.alpha, 4);
        assert_eq!(rgba.rgb(), Rgb::new(1, 2, 3));
    }
}
