//! Generators for the gamut slice tables a color picker displays.
//!
//! A table holds one cell per grid point of a plane (two axes swept, one
//! held fixed) or a line (one axis swept, two held fixed) through the
//! quantized Lab or LCH space. Each cell is the 8-bit sRGB rendering of its
//! grid point, or a zeroed invalid cell when the point lies outside the
//! sRGB gamut.
//!
//! The planes are large; allocate them on the heap:
//!
//! ```rust
//! use gamutgrid::table::{self, TinyRgb};
//!
//! let mut plane = Box::new([[TinyRgb::default(); table::AB_SPAN]; table::AB_SPAN]);
//! let in_gamut = table::fill_ab_for_l(&mut plane, 50)?;
//! assert!(in_gamut > 0);
//! # Ok::<(), table::TableError>(())
//! ```

mod axis;
mod error;

pub use axis::{Axis, AB_SPAN, C_SPAN, H_SPAN, L_SPAN};
pub use error::TableError;

use crate::quantized::{LabInt, LchInt, RgbInt};

/// One cell of a generated table: an sRGB color in 4 bytes with a C
/// compatible layout, ready to blit into image rows.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TinyRgb {
    /// Whether the grid point lies inside the sRGB gamut. The channels of
    /// an invalid cell are zero.
    pub valid: bool,
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl From<RgbInt> for TinyRgb {
    fn from(value: RgbInt) -> Self {
        if value.is_in_gamut() {
            Self {
                valid: true,
                r: value.red as u8,
                g: value.green as u8,
                b: value.blue as u8,
            }
        } else {
            Self::default()
        }
    }
}

/// Cell buffer for [`fill_ab_for_l`], indexed by `[a + 128][b + 128]`.
pub type AbForLPlane = [[TinyRgb; AB_SPAN]; AB_SPAN];
/// Cell buffer for [`fill_bl_for_a`], indexed by `[b + 128][l]`.
pub type BlForAPlane = [[TinyRgb; L_SPAN]; AB_SPAN];
/// Cell buffer for [`fill_al_for_b`], indexed by `[a + 128][l]`.
pub type AlForBPlane = [[TinyRgb; L_SPAN]; AB_SPAN];
/// Cell buffer for [`fill_hc_for_l`], indexed by `[h][c]`.
pub type HcForLPlane = [[TinyRgb; C_SPAN]; H_SPAN];
/// Cell buffer for [`fill_hl_for_c`], indexed by `[h][l]`.
pub type HlForCPlane = [[TinyRgb; L_SPAN]; H_SPAN];
/// Cell buffer for [`fill_cl_for_h`], indexed by `[c][l]`.
pub type ClForHPlane = [[TinyRgb; L_SPAN]; C_SPAN];

/// Cell buffer for the L axis lines, indexed by `[l]`.
pub type LLine = [TinyRgb; L_SPAN];
/// Cell buffer for the a and b axis lines, indexed by `[a + 128]` or
/// `[b + 128]`.
pub type AbLine = [TinyRgb; AB_SPAN];
/// Cell buffer for the C axis line, indexed by `[c]`.
pub type CLine = [TinyRgb; C_SPAN];
/// Cell buffer for the H axis line, indexed by `[h]`.
pub type HLine = [TinyRgb; H_SPAN];

/// The axis roles of a plane: which axes are swept (rows, then columns)
/// and which one is held fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaneSlice {
    /// Sweep a and b at a fixed L.
    AbForL,
    /// Sweep b and L at a fixed a.
    BlForA,
    /// Sweep a and L at a fixed b.
    AlForB,
    /// Sweep H and C at a fixed L.
    HcForL,
    /// Sweep H and L at a fixed C.
    HlForC,
    /// Sweep C and L at a fixed H.
    ClForH,
}

impl PlaneSlice {
    /// The axis held fixed over the whole plane.
    pub const fn fixed_axis(self) -> Axis {
        match self {
            PlaneSlice::AbForL | PlaneSlice::HcForL => Axis::L,
            PlaneSlice::BlForA => Axis::A,
            PlaneSlice::AlForB => Axis::B,
            PlaneSlice::HlForC => Axis::C,
            PlaneSlice::ClForH => Axis::H,
        }
    }

    /// The swept axes as (rows, columns).
    pub const fn swept_axes(self) -> (Axis, Axis) {
        match self {
            PlaneSlice::AbForL => (Axis::A, Axis::B),
            PlaneSlice::BlForA => (Axis::B, Axis::L),
            PlaneSlice::AlForB => (Axis::A, Axis::L),
            PlaneSlice::HcForL => (Axis::H, Axis::C),
            PlaneSlice::HlForC => (Axis::H, Axis::L),
            PlaneSlice::ClForH => (Axis::C, Axis::L),
        }
    }

    /// Whether `fixed` is a legal fixed parameter for this slice.
    fn accepts_fixed(self, fixed: i32) -> bool {
        // The C/L plane of an achromatic color is requested with the hue
        // sentinel; it sweeps exactly like hue angle 0.
        if matches!(self, PlaneSlice::ClForH) && fixed == LchInt::HUE_NONE {
            return true;
        }

        self.fixed_axis().contains(fixed)
    }

    /// The color at the grid point (`fixed`, row value `v1`, column value
    /// `v2`), rendered to 8-bit sRGB.
    fn rgb_at(self, fixed: i32, v1: i32, v2: i32) -> RgbInt {
        match self {
            PlaneSlice::AbForL => LabInt::new(fixed, v1, v2).to_rgb(),
            PlaneSlice::BlForA => LabInt::new(v2, fixed, v1).to_rgb(),
            PlaneSlice::AlForB => LabInt::new(v2, v1, fixed).to_rgb(),
            PlaneSlice::HcForL => LchInt::new(fixed, v2, v1).to_rgb(),
            PlaneSlice::HlForC => LchInt::new(v2, fixed, v1).to_rgb(),
            PlaneSlice::ClForH => LchInt::new(v2, v1, fixed).to_rgb(),
        }
    }
}

/// The axis roles of a line: which axis is swept and which two are held
/// fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineSlice {
    /// Sweep L at a fixed (a, b).
    LForAb,
    /// Sweep a at a fixed (b, L).
    AForBl,
    /// Sweep b at a fixed (a, L).
    BForAl,
    /// Sweep L at a fixed (H, C).
    LForHc,
    /// Sweep C at a fixed (H, L).
    CForHl,
    /// Sweep H at a fixed (C, L).
    HForCl,
}

impl LineSlice {
    /// The swept axis.
    pub const fn swept_axis(self) -> Axis {
        match self {
            LineSlice::LForAb | LineSlice::LForHc => Axis::L,
            LineSlice::AForBl => Axis::A,
            LineSlice::BForAl => Axis::B,
            LineSlice::CForHl => Axis::C,
            LineSlice::HForCl => Axis::H,
        }
    }

    /// The fixed axes in parameter order.
    pub const fn fixed_axes(self) -> (Axis, Axis) {
        match self {
            LineSlice::LForAb => (Axis::A, Axis::B),
            LineSlice::AForBl => (Axis::B, Axis::L),
            LineSlice::BForAl => (Axis::A, Axis::L),
            LineSlice::LForHc => (Axis::H, Axis::C),
            LineSlice::CForHl => (Axis::H, Axis::L),
            LineSlice::HForCl => (Axis::C, Axis::L),
        }
    }

    /// The color at the grid point (`fixed1`, `fixed2`, swept value `v`),
    /// rendered to 8-bit sRGB.
    fn rgb_at(self, fixed1: i32, fixed2: i32, v: i32) -> RgbInt {
        match self {
            LineSlice::LForAb => LabInt::new(v, fixed1, fixed2).to_rgb(),
            LineSlice::AForBl => LabInt::new(fixed2, v, fixed1).to_rgb(),
            LineSlice::BForAl => LabInt::new(fixed2, fixed1, v).to_rgb(),
            LineSlice::LForHc => LchInt::new(v, fixed2, fixed1).to_rgb(),
            LineSlice::CForHl => LchInt::new(fixed2, v, fixed1).to_rgb(),
            LineSlice::HForCl => LchInt::new(fixed2, fixed1, v).to_rgb(),
        }
    }
}

fn fill_plane<const COLUMNS: usize>(
    table: &mut [[TinyRgb; COLUMNS]],
    slice: PlaneSlice,
    fixed: i32,
) -> Result<usize, TableError> {
    if !slice.accepts_fixed(fixed) {
        return Err(TableError::FixedOutOfRange {
            axis: slice.fixed_axis(),
            value: fixed,
        });
    }

    let (rows, columns) = slice.swept_axes();
    debug_assert_eq!(table.len(), rows.span());
    debug_assert_eq!(COLUMNS, columns.span());

    Ok(fill_rows(table, slice, fixed))
}

/// Fill one row of a plane; `v1` is the row's value on the first swept axis.
fn fill_row(slice: PlaneSlice, fixed: i32, v1: i32, columns: Axis, row: &mut [TinyRgb]) -> usize {
    let mut in_gamut = 0;
    for (cell, v2) in row.iter_mut().zip(columns.values()) {
        *cell = TinyRgb::from(slice.rgb_at(fixed, v1, v2));
        in_gamut += cell.valid as usize;
    }
    in_gamut
}

#[cfg(not(feature = "parallel"))]
fn fill_rows<const COLUMNS: usize>(
    table: &mut [[TinyRgb; COLUMNS]],
    slice: PlaneSlice,
    fixed: i32,
) -> usize {
    let (rows, columns) = slice.swept_axes();
    table
        .iter_mut()
        .zip(rows.values())
        .map(|(row, v1)| fill_row(slice, fixed, v1, columns, row))
        .sum()
}

#[cfg(feature = "parallel")]
fn fill_rows<const COLUMNS: usize>(
    table: &mut [[TinyRgb; COLUMNS]],
    slice: PlaneSlice,
    fixed: i32,
) -> usize {
    use rayon::prelude::*;

    let (rows, columns) = slice.swept_axes();
    table
        .par_iter_mut()
        .enumerate()
        .map(|(index, row)| fill_row(slice, fixed, rows.min() + index as i32, columns, row))
        .sum()
}

fn fill_line<const CELLS: usize>(
    table: &mut [TinyRgb; CELLS],
    slice: LineSlice,
    fixed1: i32,
    fixed2: i32,
) -> Result<usize, TableError> {
    let (axis1, axis2) = slice.fixed_axes();
    if !axis1.contains(fixed1) {
        return Err(TableError::FixedOutOfRange {
            axis: axis1,
            value: fixed1,
        });
    }
    if !axis2.contains(fixed2) {
        return Err(TableError::FixedOutOfRange {
            axis: axis2,
            value: fixed2,
        });
    }

    let swept = slice.swept_axis();
    debug_assert_eq!(CELLS, swept.span());

    let mut in_gamut = 0;
    for (cell, v) in table.iter_mut().zip(swept.values()) {
        *cell = TinyRgb::from(slice.rgb_at(fixed1, fixed2, v));
        in_gamut += cell.valid as usize;
    }

    Ok(in_gamut)
}

/// Fill `table` with the a/b plane of the sRGB gamut at a fixed lightness.
///
/// Every cell is written. Returns the number of in-gamut cells, or an error
/// when `l` lies outside its axis.
pub fn fill_ab_for_l(table: &mut AbForLPlane, l: i32) -> Result<usize, TableError> {
    fill_plane(table, PlaneSlice::AbForL, l)
}

/// Fill `table` with the b/L plane at a fixed a.
pub fn fill_bl_for_a(table: &mut BlForAPlane, a: i32) -> Result<usize, TableError> {
    fill_plane(table, PlaneSlice::BlForA, a)
}

/// Fill `table` with the a/L plane at a fixed b.
pub fn fill_al_for_b(table: &mut AlForBPlane, b: i32) -> Result<usize, TableError> {
    fill_plane(table, PlaneSlice::AlForB, b)
}

/// Fill `table` with the H/C plane at a fixed lightness.
pub fn fill_hc_for_l(table: &mut HcForLPlane, l: i32) -> Result<usize, TableError> {
    fill_plane(table, PlaneSlice::HcForL, l)
}

/// Fill `table` with the H/L plane at a fixed chroma.
pub fn fill_hl_for_c(table: &mut HlForCPlane, c: i32) -> Result<usize, TableError> {
    fill_plane(table, PlaneSlice::HlForC, c)
}

/// Fill `table` with the C/L plane at a fixed hue. [`LchInt::HUE_NONE`] is
/// accepted and sweeps the plane at hue angle 0.
pub fn fill_cl_for_h(table: &mut ClForHPlane, h: i32) -> Result<usize, TableError> {
    fill_plane(table, PlaneSlice::ClForH, h)
}

/// Fill `table` with the L line at a fixed (a, b).
///
/// Every cell is written. Returns the number of in-gamut cells, or an error
/// when a fixed parameter lies outside its axis.
pub fn fill_l_for_ab(table: &mut LLine, a: i32, b: i32) -> Result<usize, TableError> {
    fill_line(table, LineSlice::LForAb, a, b)
}

/// Fill `table` with the a line at a fixed (b, L).
pub fn fill_a_for_bl(table: &mut AbLine, b: i32, l: i32) -> Result<usize, TableError> {
    fill_line(table, LineSlice::AForBl, b, l)
}

/// Fill `table` with the b line at a fixed (a, L).
pub fn fill_b_for_al(table: &mut AbLine, a: i32, l: i32) -> Result<usize, TableError> {
    fill_line(table, LineSlice::BForAl, a, l)
}

/// Fill `table` with the L line at a fixed (H, C). The fixed hue must be a
/// real angle; the achromatic sentinel is rejected.
pub fn fill_l_for_hc(table: &mut LLine, h: i32, c: i32) -> Result<usize, TableError> {
    fill_line(table, LineSlice::LForHc, h, c)
}

/// Fill `table` with the C line at a fixed (H, L).
pub fn fill_c_for_hl(table: &mut CLine, h: i32, l: i32) -> Result<usize, TableError> {
    fill_line(table, LineSlice::CForHl, h, l)
}

/// Fill `table` with the H line at a fixed (C, L).
pub fn fill_h_for_cl(table: &mut HLine, c: i32, l: i32) -> Result<usize, TableError> {
    fill_line(table, LineSlice::HForCl, c, l)
}
