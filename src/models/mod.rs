//! One model type per color space, plus the trait that breaks a model into
//! its generic components.

use crate::color::Components;

pub mod lab;
pub mod rgb;
pub mod xyz;

pub use lab::{Lab, Lch};
pub use rgb::Srgb;
pub use xyz::{Xyz, WHITE_POINT};

/// A trait implemented for color models to break them down into their
/// generic components.
pub trait Model {
    /// Convert this model into generic components.
    fn to_components(&self) -> Components;
}
