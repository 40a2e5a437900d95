//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths accurate and
//! explicit.
//!
//! ```rust
//! use gamutgrid::models::{Lab, Srgb};
//! let blue_on_lch = Lab::from(        // create color in lab.
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_xyz(),                  // convert to xyz-d65.
//! )
//! .to_polar();                        // convert to lch.
//! ```

use crate::models::{Lab, Lch, Srgb};

impl Srgb {
    /// Convert this color to the rectangular CIE-Lab form.
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_xyz())
    }

    /// Convert this color to the cylindrical polar CIE-LCH form.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_polar()
    }
}

impl Lab {
    /// Convert this color to gamma encoded sRGB. A color outside the sRGB
    /// gamut yields components outside [0, 1].
    pub fn to_srgb(&self) -> Srgb {
        Srgb::from(self.to_xyz())
    }
}

impl Lch {
    /// Convert this color to gamma encoded sRGB. A color outside the sRGB
    /// gamut yields components outside [0, 1].
    pub fn to_srgb(&self) -> Srgb {
        self.to_rectangular().to_srgb()
    }
}
