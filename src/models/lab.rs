//! Models for the CIE-Lab color space, in the rectangular orthogonal form
//! and the cylindrical polar form (LCH).

use crate::{
    color::{Component, Components},
    math::normalize_hue,
    models::xyz::{Xyz, WHITE_POINT},
};

gamutgrid_macros::gen_model! {
    /// The model for a color specified in the rectangular orthogonal form.
    /// `lightness` nominally ranges over [0, 100]; `a` and `b` stay inside
    /// ±128 for colors within the sRGB gamut.
    pub struct Lab {
        /// The lightness component.
        pub lightness: Component,
        /// The a component.
        pub a: Component,
        /// The b component.
        pub b: Component,
    }
}

gamutgrid_macros::gen_model! {
    /// The model for a color specified in the cylindrical polar form.
    /// `chroma` stays inside [0, 180] for colors within the sRGB gamut and
    /// `hue` is an angle in degrees in [0, 360), or [`Lch::HUE_NONE`].
    pub struct Lch {
        /// The lightness component.
        pub lightness: Component,
        /// The chroma component.
        pub chroma: Component,
        /// The hue component.
        pub hue: Component,
    }
}

impl Lab {
    /// Convert this orthogonal rectangular model into its cylindrical polar
    /// form. An exactly achromatic color (`a` and `b` both zero) has no
    /// defined hue angle and yields [`Lch::HUE_NONE`].
    pub fn to_polar(&self) -> Lch {
        if self.a == 0.0 && self.b == 0.0 {
            return Lch::new(self.lightness, 0.0, Lch::HUE_NONE);
        }

        let chroma = self.a.hypot(self.b);
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Lch::new(self.lightness, chroma, hue)
    }

    /// Convert this color to CIE-XYZ.
    pub fn to_xyz(&self) -> Xyz {
        const KAPPA: Component = 24389.0 / 27.0;
        const EPSILON: Component = 216.0 / 24389.0;

        let f1 = (self.lightness + 16.0) / 116.0;
        let f0 = f1 + self.a / 500.0;
        let f2 = f1 - self.b / 200.0;

        let Components(x, y, z) = Components(f0, f1, f2).map(|f| {
            let f_cubed = f * f * f;
            if f_cubed > EPSILON {
                f_cubed
            } else {
                (116.0 * f - 16.0) / KAPPA
            }
        });

        Xyz::new(x * WHITE_POINT.0, y * WHITE_POINT.1, z * WHITE_POINT.2)
    }
}

impl Lch {
    /// The hue value of an achromatic color, which has no defined hue angle.
    pub const HUE_NONE: Component = -1.0;

    /// Convert this cylindrical polar model into its orthogonal rectangular
    /// form. [`Lch::HUE_NONE`] is read back as a hue angle of 0 degrees.
    pub fn to_rectangular(&self) -> Lab {
        let hue = if self.hue == Self::HUE_NONE {
            0.0
        } else {
            self.hue.to_radians()
        };

        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        const KAPPA: Component = 24389.0 / 27.0;
        const EPSILON: Component = 216.0 / 24389.0;

        let adapted = Components(
            value.x / WHITE_POINT.0,
            value.y / WHITE_POINT.1,
            value.z / WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b)
    }
}
