//! The coordinate axes of the picker grids.

use std::fmt;
use std::ops::RangeInclusive;

/// Grid steps on the L axis.
pub const L_SPAN: usize = 101;
/// Grid steps on the a and b axes.
pub const AB_SPAN: usize = 257;
/// Grid steps on the C axis.
pub const C_SPAN: usize = 181;
/// Grid steps on the H axis.
pub const H_SPAN: usize = 360;

/// One coordinate axis of the quantized Lab/LCH color spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Lightness, 0 to 100.
    L,
    /// The a component of Lab, -128 to 128.
    A,
    /// The b component of Lab, -128 to 128.
    B,
    /// Chroma, 0 to 180.
    C,
    /// The hue angle in degrees, 0 to 359.
    H,
}

impl Axis {
    /// The smallest grid value on this axis.
    pub const fn min(self) -> i32 {
        match self {
            Axis::L | Axis::C | Axis::H => 0,
            Axis::A | Axis::B => -128,
        }
    }

    /// The largest grid value on this axis.
    pub const fn max(self) -> i32 {
        match self {
            Axis::L => 100,
            Axis::A | Axis::B => 128,
            Axis::C => 180,
            Axis::H => 359,
        }
    }

    /// The number of grid values on this axis.
    pub const fn span(self) -> usize {
        match self {
            Axis::L => L_SPAN,
            Axis::A | Axis::B => AB_SPAN,
            Axis::C => C_SPAN,
            Axis::H => H_SPAN,
        }
    }

    /// The grid values of this axis in ascending order.
    pub fn values(self) -> RangeInclusive<i32> {
        self.min()..=self.max()
    }

    /// Whether `value` lies on this axis.
    pub(crate) fn contains(self, value: i32) -> bool {
        value >= self.min() && value <= self.max()
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::L => "L",
            Axis::A => "a",
            Axis::B => "b",
            Axis::C => "C",
            Axis::H => "H",
        })
    }
}
