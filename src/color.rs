//! The scalar component type and the generic component triplet that every
//! color model is built from.

/// A 64-bit floating point value that all components are stored as. Table
/// and grid results stay stable across platforms only at this precision.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}
