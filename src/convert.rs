//! Conversions between the RGB and HSL notations.
//!
//! Both directions go through normalized [`Components`] in `[0, 1]` and round
//! to whole numbers only at the end, so the conversion itself adds no error
//! beyond the quantization of the HSL output to whole degrees and percents.
//!
//! ```rust
//! use colorpick::{Hsl, Rgb};
//! let hsl = Rgb::new(210, 105, 30).to_hsl();
//! assert_eq!(hsl, Hsl::new(25, 75, 47));
//! assert_eq!(hsl.to_rgb(), Rgb::new(210, 105, 30));
//! ```

use crate::{
    color::Components,
    math::{saturate_channel, scale_round, wrap_hue, CHANNEL_MAX, HUE_TURN, PERCENT_MAX},
    Hsl, Rgb,
};

impl Rgb {
    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(self);

        Hsl::new(
            wrap_hue(scale_round(hue, HUE_TURN) as i32),
            scale_round(saturation, PERCENT_MAX) as u8,
            scale_round(lightness, PERCENT_MAX) as u8,
        )
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB channels.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) =
            util::hsl_to_rgb(self).map(|v| scale_round(v, CHANNEL_MAX));

        Rgb::new(
            saturate_channel(red),
            saturate_channel(green),
            saturate_channel(blue),
        )
    }
}

/// Convert integer RGB channels to HSL. Channels are clamped into `[0, 255]`.
pub fn rgb_to_hsl(red: i32, green: i32, blue: i32) -> Hsl {
    Rgb::clamped(red, green, blue).to_hsl()
}

/// Convert integer HSL components to RGB. The hue wraps, saturation and
/// lightness are clamped into `[0, 100]`.
pub fn hsl_to_rgb(hue: i32, saturation: i32, lightness: i32) -> Rgb {
    Hsl::clamped(hue, saturation, lightness).to_rgb()
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{normalize, CHANNEL_MAX, PERCENT_MAX},
        Hsl, Rgb,
    };

    /// Convert from RGB to HSL with every output component in `[0, 1]`.
    ///
    /// The channel holding the maximum is picked on the integer channels,
    /// first match in red, green, blue order, so ties resolve the same way
    /// regardless of float rounding.
    pub fn rgb_to_hsl(from: &Rgb) -> Components {
        let (red, green, blue) = from.to_tuple();

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let Components(r, g, b) = Components(
            Component::from(red),
            Component::from(green),
            Component::from(blue),
        )
        .map(|v| normalize(v, CHANNEL_MAX));
        let max_n = normalize(Component::from(max), CHANNEL_MAX);
        let min_n = normalize(Component::from(min), CHANNEL_MAX);

        let lightness = (max_n + min_n) / 2.0;

        // Achromatic: hue and saturation are both zero.
        if max == min {
            return Components(0.0, 0.0, lightness);
        }

        let delta = max_n - min_n;

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max_n - min_n)
        } else {
            delta / (max_n + min_n)
        };

        let sector = if max == red {
            (g - b) / delta + if green < blue { 6.0 } else { 0.0 }
        } else if max == green {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Components(sector / 6.0, saturation, lightness)
    }

    /// Convert from HSL to RGB with every output channel in `[0, 1]`.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Hsl) -> Components {
        let hue = Component::from(from.hue % 360);
        let saturation = normalize(Component::from(from.saturation.min(100)), PERCENT_MAX);
        let lightness = normalize(Component::from(from.lightness.min(100)), PERCENT_MAX);

        let a = saturation * lightness.min(1.0 - lightness);

        let f = |n: Component| {
            let k = (n + hue / 30.0) % 12.0;
            lightness - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0)
        };

        Components(f(0.0), f(8.0), f(4.0))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_abs_diff_eq;

        #[test]
        fn rgb_to_hsl_components() {
            // rgb(117, 133, 71), hsl(75.5deg 30.4% 40%)
            let Components(h, s, l) = rgb_to_hsl(&Rgb::new(117, 133, 71));
            assert_abs_diff_eq!(h * 360.0, 75.483_87, epsilon = 1e-3);
            assert_abs_diff_eq!(s, 0.303_921_6, epsilon = 1e-5);
            assert_abs_diff_eq!(l, 0.4, epsilon = 1e-5);
        }

        #[test]
        fn hsl_to_rgb_components() {
            // hsl(120deg 40% 40%)
            let Components(r, g, b) = hsl_to_rgb(&Hsl::new(120, 40, 40));
            assert_abs_diff_eq!(r, 0.24, epsilon = 1e-5);
            assert_abs_diff_eq!(g, 0.56, epsilon = 1e-5);
            assert_abs_diff_eq!(b, 0.24, epsilon = 1e-5);
        }

        #[test]
        fn red_wins_ties_for_max() {
            // Red and green tie: the red branch gives (G - B) / d = 1 sector.
            let Components(h, _, _) = rgb_to_hsl(&Rgb::new(255, 255, 0));
            assert_abs_diff_eq!(h, 1.0 / 6.0, epsilon = 1e-6);

            // Red and blue tie: the red branch gives (G - B) / d + 6 = 5 sectors.
            let Components(h, _, _) = rgb_to_hsl(&Rgb::new(255, 0, 255));
            assert_abs_diff_eq!(h, 5.0 / 6.0, epsilon = 1e-6);

            // Green and blue tie: the green branch gives (B - R) / d + 2 = 3 sectors.
            let Components(h, _, _) = rgb_to_hsl(&Rgb::new(0, 255, 255));
            assert_abs_diff_eq!(h, 0.5, epsilon = 1e-6);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achromatic_colors_have_no_hue_or_saturation() {
        assert_eq!(rgb_to_hsl(0, 0, 0), Hsl::new(0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255), Hsl::new(0, 0, 100));
        assert_eq!(rgb_to_hsl(128, 128, 128), Hsl::new(0, 0, 50));
    }

    #[test]
    fn primaries() {
        assert_eq!(rgb_to_hsl(255, 0, 0), Hsl::new(0, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 0), Hsl::new(120, 100, 50));
        assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240, 100, 50));
    }

    #[test]
    fn secondaries() {
        assert_eq!(rgb_to_hsl(255, 255, 0), Hsl::new(60, 100, 50));
        assert_eq!(rgb_to_hsl(0, 255, 255), Hsl::new(180, 100, 50));
        assert_eq!(rgb_to_hsl(255, 0, 255), Hsl::new(300, 100, 50));
    }

    #[test]
    fn saturation_uses_the_light_branch_above_half_lightness() {
        // rgb(255, 128, 128): l > 0.5, s = d / (2 - max - min).
        assert_eq!(rgb_to_hsl(255, 128, 128), Hsl::new(0, 100, 75));
        // rgb(128, 0, 0): s = d / (max + min).
        assert_eq!(rgb_to_hsl(128, 0, 0), Hsl::new(0, 100, 25));
    }

    #[test]
    fn hue_rounding_up_to_a_full_turn_wraps_to_zero() {
        // 359.76 degrees rounds to 360, which is reported as 0.
        assert_eq!(rgb_to_hsl(255, 0, 1).hue, 0);
        // 359.06 degrees stays below the wrap.
        assert_eq!(rgb_to_hsl(255, 0, 4).hue, 359);
    }

    #[test]
    fn out_of_range_rgb_is_clamped() {
        assert_eq!(rgb_to_hsl(300, -20, -1), rgb_to_hsl(255, 0, 0));
    }

    #[test]
    fn hsl_primaries_to_rgb() {
        assert_eq!(hsl_to_rgb(0, 100, 50), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120, 100, 50), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240, 100, 50), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(0, 0, 100), Rgb::new(255, 255, 255));
        assert_eq!(hsl_to_rgb(0, 0, 0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn hue_wheel_is_closed() {
        assert_eq!(hsl_to_rgb(360, 100, 50), hsl_to_rgb(0, 100, 50));
        assert_eq!(hsl_to_rgb(-90, 60, 40), hsl_to_rgb(270, 60, 40));
    }

    #[test]
    fn unchecked_hsl_is_still_converted_in_range() {
        // Built through `new`, bypassing the clamping constructors.
        let rgb = Hsl::new(400, 250, 250).to_rgb();
        assert_eq!(rgb, Rgb::new(255, 255, 255));
        assert_eq!(Hsl::new(400, 100, 50).to_rgb(), hsl_to_rgb(40, 100, 50));
    }

    #[test]
    fn grays_round_trip_within_one() {
        for v in 0..=255u8 {
            let rgb = Rgb::new(v, v, v);
            let back = rgb.to_hsl().to_rgb();
            assert_channels_within!(back, rgb, 1);
        }
    }

    #[test]
    fn saturated_primaries_and_secondaries_round_trip_exactly() {
        for rgb in [
            Rgb::new(255, 0, 0),
            Rgb::new(255, 255, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(0, 255, 255),
            Rgb::new(0, 0, 255),
            Rgb::new(255, 0, 255),
        ] {
            assert_eq!(rgb.to_hsl().to_rgb(), rgb);
        }
    }

    #[test]
    fn hsl_quantization_can_move_a_channel_by_more_than_one() {
        // Hue 0.47deg rounds down to 0deg, dropping the small green component.
        let rgb = Rgb::new(255, 2, 0);
        assert_eq!(rgb.to_hsl(), Hsl::new(0, 100, 50));
        assert_eq!(rgb.to_hsl().to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn values_on_a_rounding_tie_round_up() {
        // Exact hue is 238.5deg.
        assert_eq!(rgb_to_hsl(0, 1, 40).hue, 239);
        // Red is exactly 25.5 before rounding.
        assert_eq!(hsl_to_rgb(0, 25, 8), Rgb::new(26, 15, 15));
        // Green and blue are exactly 76.5 before rounding.
        assert_eq!(hsl_to_rgb(0, 100, 65), Rgb::new(255, 77, 77));
    }
}
