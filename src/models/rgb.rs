//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

gamutgrid_macros::gen_model! {
    /// A color specified in the gamma encoded sRGB color space. The nominal
    /// range of each component is [0, 1]; conversions from Lab or LCH leave
    /// components of out of gamut colors outside of it.
    pub struct Srgb {
        /// The red component of the color.
        pub red: Component,
        /// The green component of the color.
        pub green: Component,
        /// The blue component of the color.
        pub blue: Component,
    }
}

/// Decode the sRGB transfer function, yielding components that are linear
/// with respect to energy.
fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        if value > 0.04045 {
            ((value + 0.055) / 1.055).powf(2.4)
        } else {
            value / 12.92
        }
    })
}

/// Encode linear light components with the sRGB transfer function. Negative
/// components stay on the linear segment, so out of gamut results from the
/// inverse matrix survive as negative values instead of becoming NaN.
fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        if value > 0.0031308 {
            1.055 * value.powf(1.0 / 2.4) - 0.055
        } else {
            value * 12.92
        }
    })
}

impl Srgb {
    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        let linear = to_linear_light(&Components(self.red, self.green, self.blue));
        transform(&TO_XYZ, linear).into()
    }
}

impl From<Xyz> for Srgb {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -0.9692660,  0.0556434,
            -1.5371385,  1.8760108, -0.2040259,
            -0.4985314,  0.0415560,  1.0572252,
        );

        let linear = transform(&FROM_XYZ, Components(value.x, value.y, value.z));
        to_gamma_encoded(&linear).into()
    }
}
