//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// The D65 reference white, 2° standard observer. All conversions in this
/// crate are relative to it.
pub const WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);

gamutgrid_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space, relative to the D65
    /// white point.
    pub struct Xyz {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}
