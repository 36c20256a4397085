//! Floating point primitives shared by the conversion routines.

/// The floating point type used for intermediate color math. Always 64-bit:
/// channel values that land exactly on a rounding tie (e.g. a hue of 238.5)
/// must round up, which `f32` can not represent for every input.
pub type Component = f64;

/// Three normalized components of a color, in the order the model declares
/// them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}
