//! The quantized forms of the color models used by picker grids: sRGB with
//! 8-bit channels, Lab and LCH rounded to whole components.
//!
//! All conversions round half away from zero. A conversion toward sRGB that
//! leaves the gamut yields [`RgbInt::INVALID`]; a triplet is either fully
//! valid or fully the sentinel, never a mix.

use crate::{
    color::{Component, Components},
    models::{Lab, Lch, Model, Srgb},
};

/// A color in the sRGB color space with 8-bit channels, stored widened so
/// the out of gamut sentinel fits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RgbInt {
    /// The red channel, 0 to 255.
    pub red: i32,
    /// The green channel, 0 to 255.
    pub green: i32,
    /// The blue channel, 0 to 255.
    pub blue: i32,
}

/// A color in the CIE-Lab color space rounded to whole components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabInt {
    /// The lightness component, 0 to 100.
    pub lightness: i32,
    /// The a component, -128 to 128.
    pub a: i32,
    /// The b component, -128 to 128.
    pub b: i32,
}

/// A color in the CIE-LCH color space rounded to whole components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LchInt {
    /// The lightness component, 0 to 100.
    pub lightness: i32,
    /// The chroma component, 0 to 180.
    pub chroma: i32,
    /// The hue angle in degrees, 0 to 359, or [`LchInt::HUE_NONE`].
    pub hue: i32,
}

/// Round the components of a model to integers, half away from zero.
fn round_components(model: &impl Model) -> [i32; 3] {
    let Components(c0, c1, c2) = model.to_components();
    [c0.round() as i32, c1.round() as i32, c2.round() as i32]
}

impl RgbInt {
    /// The sentinel for colors that fall outside the sRGB gamut.
    pub const INVALID: Self = Self::new(-1, -1, -1);

    /// Create a new quantized sRGB color.
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// The channels as a `[red, green, blue]` array.
    pub const fn to_array(&self) -> [i32; 3] {
        [self.red, self.green, self.blue]
    }

    /// Whether this triplet holds a real color rather than the out of gamut
    /// sentinel.
    pub const fn is_in_gamut(&self) -> bool {
        self.red != -1 && self.green != -1 && self.blue != -1
    }

    /// Quantize a continuous sRGB color, rejecting out of gamut results.
    fn from_continuous(rgb: &Srgb) -> Self {
        let Components(red, green, blue) =
            rgb.to_components().map(|value| (value * 255.0).round());
        let (red, green, blue) = (red as i32, green as i32, blue as i32);

        if [red, green, blue].iter().any(|c| !(0..=255).contains(c)) {
            return Self::INVALID;
        }

        Self::new(red, green, blue)
    }

    /// Widen to the continuous sRGB model, scaling the channels to [0, 1].
    fn to_float(&self) -> Srgb {
        Srgb::new(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Convert this color to quantized CIE-Lab.
    pub fn to_lab(&self) -> LabInt {
        LabInt::from_continuous(&self.to_float().to_lab())
    }

    /// Convert this color to quantized CIE-LCH.
    pub fn to_lch(&self) -> LchInt {
        LchInt::from_continuous(&self.to_float().to_lch())
    }

    /// Convert this color to quantized CIE-Lab and CIE-LCH at once. Both
    /// results are rounded from the same continuous Lab value.
    pub fn to_lab_and_lch(&self) -> (LabInt, LchInt) {
        let lab = self.to_float().to_lab();
        (
            LabInt::from_continuous(&lab),
            LchInt::from_continuous(&lab.to_polar()),
        )
    }
}

impl LabInt {
    /// Create a new quantized CIE-Lab color.
    pub const fn new(lightness: i32, a: i32, b: i32) -> Self {
        Self { lightness, a, b }
    }

    /// The components as a `[lightness, a, b]` array.
    pub const fn to_array(&self) -> [i32; 3] {
        [self.lightness, self.a, self.b]
    }

    fn from_continuous(lab: &Lab) -> Self {
        let [lightness, a, b] = round_components(lab);
        Self::new(lightness, a, b)
    }

    /// Widen to the continuous Lab model.
    fn to_float(&self) -> Lab {
        Lab::new(
            self.lightness as Component,
            self.a as Component,
            self.b as Component,
        )
    }

    /// Convert this color to 8-bit sRGB, or [`RgbInt::INVALID`] when it
    /// lies outside the sRGB gamut.
    pub fn to_rgb(&self) -> RgbInt {
        RgbInt::from_continuous(&self.to_float().to_srgb())
    }

    /// Convert this color to quantized CIE-LCH.
    pub fn to_lch(&self) -> LchInt {
        LchInt::from_continuous(&self.to_float().to_polar())
    }

    /// Convert this color to 8-bit sRGB and quantized CIE-LCH at once.
    pub fn to_rgb_and_lch(&self) -> (RgbInt, LchInt) {
        (self.to_rgb(), self.to_lch())
    }
}

impl LchInt {
    /// The hue value of an achromatic color, which has no defined hue angle.
    pub const HUE_NONE: i32 = -1;

    /// Create a new quantized CIE-LCH color.
    pub const fn new(lightness: i32, chroma: i32, hue: i32) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// The components as a `[lightness, chroma, hue]` array.
    pub const fn to_array(&self) -> [i32; 3] {
        [self.lightness, self.chroma, self.hue]
    }

    fn from_continuous(lch: &Lch) -> Self {
        let [lightness, chroma, mut hue] = round_components(lch);

        // Rounding can collapse a small chroma to zero, which leaves the
        // hue meaningless.
        if chroma == 0 {
            hue = Self::HUE_NONE;
        }
        // Rounding can also push a hue just below 360 up to it; wrap to the
        // canonical 0.
        if hue == 360 {
            hue = 0;
        }

        Self::new(lightness, chroma, hue)
    }

    /// Widen to the continuous LCH model.
    fn to_float(&self) -> Lch {
        Lch::new(
            self.lightness as Component,
            self.chroma as Component,
            self.hue as Component,
        )
    }

    /// Convert this color to 8-bit sRGB, or [`RgbInt::INVALID`] when it
    /// lies outside the sRGB gamut.
    pub fn to_rgb(&self) -> RgbInt {
        RgbInt::from_continuous(&self.to_float().to_srgb())
    }

    /// Convert this color to quantized CIE-Lab.
    pub fn to_lab(&self) -> LabInt {
        LabInt::from_continuous(&self.to_float().to_rectangular())
    }

    /// Convert this color to 8-bit sRGB and quantized CIE-Lab at once. Both
    /// results are derived from the same continuous Lab value.
    pub fn to_rgb_and_lab(&self) -> (RgbInt, LabInt) {
        let lab = self.to_float().to_rectangular();
        (
            RgbInt::from_continuous(&lab.to_srgb()),
            LabInt::from_continuous(&lab),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_to_lab_grid() {
        const TESTS: &[([i32; 3], [i32; 3])] = &[
            ([0, 0, 0], [0, 0, 0]),
            ([255, 255, 255], [100, 0, 0]),
            ([255, 0, 0], [53, 80, 67]),
            ([0, 255, 0], [88, -86, 83]),
            ([0, 0, 255], [32, 79, -108]),
            ([255, 255, 0], [97, -22, 94]),
            ([0, 255, 255], [91, -48, -14]),
            ([255, 0, 255], [60, 98, -61]),
            ([210, 105, 30], [56, 37, 57]),
            ([12, 34, 56], [13, 0, -17]),
            ([200, 200, 200], [81, 0, 0]),
        ];

        for (rgb, lab) in TESTS {
            let [red, green, blue] = *rgb;
            assert_eq!(
                RgbInt::new(red, green, blue).to_lab().to_array(),
                *lab,
                "lab of rgb {rgb:?}"
            );
        }
    }

    #[test]
    fn rgb_to_lch_grid() {
        const TESTS: &[([i32; 3], [i32; 3])] = &[
            ([0, 0, 0], [0, 0, -1]),
            ([255, 255, 255], [100, 0, -1]),
            ([255, 0, 0], [53, 105, 40]),
            ([0, 255, 0], [88, 120, 136]),
            ([0, 0, 255], [32, 134, 306]),
            ([210, 105, 30], [56, 68, 57]),
            ([12, 34, 56], [13, 17, 270]),
            // Near neutral gray: the rounded chroma collapses to zero and
            // takes the hue with it.
            ([200, 200, 200], [81, 0, -1]),
        ];

        for (rgb, lch) in TESTS {
            let [red, green, blue] = *rgb;
            assert_eq!(
                RgbInt::new(red, green, blue).to_lch().to_array(),
                *lch,
                "lch of rgb {rgb:?}"
            );
        }
    }

    #[test]
    fn lab_grid_to_rgb() {
        const TESTS: &[([i32; 3], [i32; 3])] = &[
            ([0, 0, 0], [0, 0, 0]),
            ([100, 0, 0], [255, 255, 255]),
            ([50, 0, 0], [119, 119, 119]),
            ([50, -25, 43], [98, 129, 40]),
            // Out of gamut corners and saturated colors all collapse to the
            // full sentinel.
            ([100, 128, 128], [-1, -1, -1]),
            ([53, 80, 67], [-1, -1, -1]),
            ([32, 79, -108], [-1, -1, -1]),
            ([75, -50, 75], [-1, -1, -1]),
        ];

        for (lab, rgb) in TESTS {
            let [lightness, a, b] = *lab;
            assert_eq!(
                LabInt::new(lightness, a, b).to_rgb().to_array(),
                *rgb,
                "rgb of lab {lab:?}"
            );
        }
    }

    #[test]
    fn lch_grid_to_rgb() {
        const TESTS: &[([i32; 3], [i32; 3])] = &[
            ([0, 0, -1], [0, 0, 0]),
            ([100, 0, -1], [255, 255, 255]),
            ([50, 50, 120], [99, 129, 39]),
            ([70, 40, 300], [175, 162, 234]),
        ];

        for (lch, rgb) in TESTS {
            let [lightness, chroma, hue] = *lch;
            assert_eq!(
                LchInt::new(lightness, chroma, hue).to_rgb().to_array(),
                *rgb,
                "rgb of lch {lch:?}"
            );
        }

        // The achromatic sentinel converts exactly like a hue angle of 0.
        assert_eq!(
            LchInt::new(50, 50, LchInt::HUE_NONE).to_rgb(),
            LchInt::new(50, 50, 0).to_rgb(),
        );
        assert_eq!(LchInt::new(50, 50, 0).to_rgb().to_array(), [194, 79, 121]);
    }

    #[test]
    fn mid_tone_colors_round_trip_within_one_unit() {
        // Quantizing Lab loses up to half a unit per component, which the
        // inverse conversion amplifies near the dark faces of the RGB cube;
        // mid tones come back within one step per channel.
        const TESTS: &[[i32; 3]] = &[
            [99, 129, 39],
            [128, 128, 128],
            [210, 105, 30],
            [200, 150, 100],
            [60, 90, 120],
            [119, 119, 119],
            [170, 85, 85],
            [230, 200, 160],
            [140, 70, 90],
            [100, 100, 160],
            [40, 120, 80],
            [200, 80, 140],
            [120, 160, 60],
            [80, 60, 140],
            [160, 120, 200],
            [50, 50, 50],
            [220, 220, 220],
            [130, 190, 230],
        ];

        for rgb in TESTS {
            let [red, green, blue] = *rgb;
            let back = RgbInt::new(red, green, blue).to_lab().to_rgb();
            assert!(back.is_in_gamut(), "round trip of {rgb:?} left the gamut");
            for (before, after) in rgb.iter().zip(back.to_array()) {
                assert!(
                    (before - after).abs() <= 1,
                    "round trip of {rgb:?} came back as {:?}",
                    back.to_array()
                );
            }
        }
    }

    #[test]
    fn saturated_colors_can_round_trip_to_the_sentinel() {
        // Rounding the Lab of a fully saturated color pushes it just past
        // the gamut boundary.
        assert_eq!(RgbInt::new(255, 0, 0).to_lab().to_rgb(), RgbInt::INVALID);
    }

    #[test]
    fn gamut_sentinel_is_all_or_nothing() {
        let rgb = LabInt::new(100, 128, 128).to_rgb();
        assert!(!rgb.is_in_gamut());
        assert_eq!(rgb, RgbInt::INVALID);

        assert!(RgbInt::new(0, 0, 0).is_in_gamut());
        assert!(RgbInt::new(255, 255, 255).is_in_gamut());
        assert!(!RgbInt::INVALID.is_in_gamut());
    }

    #[test]
    fn rounded_chroma_of_zero_drops_the_hue() {
        assert_eq!(LabInt::new(70, 0, 0).to_lch().to_array(), [70, 0, -1]);
    }

    #[test]
    fn rounded_hue_of_360_wraps_to_zero() {
        // The continuous hue of this color is just above 359.5.
        assert_eq!(LabInt::new(50, 115, -1).to_lch().to_array(), [50, 115, 0]);
    }

    #[test]
    fn composite_conversions_match_the_single_ones() {
        let rgb = RgbInt::new(99, 129, 39);
        assert_eq!(rgb.to_lab_and_lch(), (rgb.to_lab(), rgb.to_lch()));
        assert_eq!(rgb.to_lab().to_array(), [50, -25, 43]);
        assert_eq!(rgb.to_lch().to_array(), [50, 50, 120]);

        let lab = LabInt::new(50, -25, 43);
        assert_eq!(lab.to_rgb_and_lch(), (lab.to_rgb(), lab.to_lch()));
        assert_eq!(lab.to_lch().to_array(), [50, 50, 120]);

        let lch = LchInt::new(50, 50, 120);
        assert_eq!(lch.to_rgb_and_lab(), (lch.to_rgb(), lch.to_lab()));
        assert_eq!(lch.to_rgb().to_array(), [99, 129, 39]);
        assert_eq!(lch.to_lab().to_array(), [50, -25, 43]);
    }
}
