//! gamutgrid converts colors between sRGB, CIE-XYZ, CIE-Lab and CIE-LCH
//! relative to the D65 white point and sweeps the quantized Lab/LCH grid
//! into gamut tables for color picker widgets.
//!
//! The continuous conversions live on the [`models`] types. The [`quantized`]
//! triplets round to the integer grid a picker works in, and [`table`] sweeps
//! that grid into ready-to-blit planes and lines:
//!
//! ```rust
//! use gamutgrid::{table, RgbInt};
//!
//! let (lab, lch) = RgbInt::new(99, 129, 39).to_lab_and_lch();
//! assert_eq!(lab.to_array(), [50, -25, 43]);
//! assert_eq!(lch.to_array(), [50, 50, 120]);
//!
//! // The a/b plane of the gamut at the lightness of that color.
//! let mut plane = Box::new([[table::TinyRgb::default(); table::AB_SPAN]; table::AB_SPAN]);
//! table::fill_ab_for_l(&mut plane, lab.lightness)?;
//! assert!(plane[(lab.a + 128) as usize][(lab.b + 128) as usize].valid);
//! # Ok::<(), table::TableError>(())
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod math;
pub mod models;
pub mod quantized;
pub mod table;
#[cfg(test)]
mod test;

pub use color::{Component, Components};
pub use models::{Lab, Lch, Model, Srgb, Xyz};
pub use quantized::{LabInt, LchInt, RgbInt};
