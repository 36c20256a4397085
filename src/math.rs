//! Math utility functions.

use num_traits::Float;

use crate::color::Component;

/// Largest value of an RGB channel.
pub const CHANNEL_MAX: Component = 255.0;

/// Largest value of a saturation or lightness percentage.
pub const PERCENT_MAX: Component = 100.0;

/// Number of degrees in a full turn of the hue wheel.
pub const HUE_TURN: Component = 360.0;

/// Map `value` in `[0, max]` onto `[0, 1]`.
pub fn normalize<T: Float>(value: T, max: T) -> T {
    value / max
}

/// Scale `value` in `[0, 1]` up to `[0, max]` and round to the nearest whole
/// number, ties away from zero.
pub fn scale_round<T: Float>(value: T, max: T) -> T {
    (value * max).round()
}

/// Narrow a rounded component into a channel, saturating at both ends.
/// NaN maps to 0.
pub fn saturate_channel(value: Component) -> u8 {
    value.clamp(0.0, CHANNEL_MAX) as u8
}

/// Wrap a hue in whole degrees into `[0, 360)`.
pub fn wrap_hue(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}

/// Clamp a value into `[0, 255]`.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Clamp a value into `[0, 100]`.
pub fn clamp_percent(value: i32) -> u8 {
    value.clamp(0, 100) as u8
}
