//! Grid-system constants: geometry, resolution limits and the index bit layout.

use std::f64::consts;

/// pi
pub const M_PI: f64 = consts::PI;
/// pi / 2
pub const M_PI_2: f64 = consts::FRAC_PI_2;
/// 2 * pi
pub const M_2PI: f64 = 2.0 * consts::PI;
/// pi / 180
pub const M_PI_180: f64 = consts::PI / 180.0;
/// 180 / pi
pub const M_180_PI: f64 = 180.0 / consts::PI;

/// General purpose threshold used by the projection math.
pub const EPSILON: f64 = 0.000_000_000_000_000_1;

/// sqrt(3) / 2, i.e. sin(60 degrees).
pub const M_SQRT3_2: f64 = 0.866_025_403_784_438_6;
/// sqrt(7)
pub const M_SQRT7: f64 = 2.645_751_311_064_590_6;
/// 1 / sqrt(7)
pub const M_RSQRT7: f64 = 1.0 / M_SQRT7;
/// 1 / sin(60 degrees)
pub const M_RSIN60: f64 = 1.0 / M_SQRT3_2;
/// 1 / 3
pub const M_ONETHIRD: f64 = 1.0 / 3.0;

/// Rotation between the Class II and Class III axes, `asin(sqrt(3 / 28))`.
pub const M_AP7_ROT_RADS: f64 = 0.333_473_172_251_832_1;

/// Authalic earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.007_180_918_475;

/// Resolution 0 hex2d unit length expressed in gnomonic units.
pub const RES0_U_GNOMONIC: f64 = 0.381_966_011_250_105;
/// `1 / RES0_U_GNOMONIC`
pub const INV_RES0_U_GNOMONIC: f64 = 1.0 / RES0_U_GNOMONIC;

/// Finest supported resolution. Resolutions run 0 through 15.
pub const MAX_H3_RES: i32 = 15;
/// Faces of the icosahedron.
pub const NUM_ICOSA_FACES: i32 = 20;
/// Resolution 0 cells.
pub const NUM_BASE_CELLS: i32 = 122;
/// Pentagons at every resolution.
pub const NUM_PENTAGONS: i32 = 12;
/// Topological vertices of a hexagon.
pub const NUM_HEX_VERTS: usize = 6;
/// Topological vertices of a pentagon.
pub const NUM_PENT_VERTS: usize = 5;
/// Worst case boundary: 5 pentagon vertices plus 5 icosahedron edge crossings.
pub const MAX_CELL_BNDRY_VERTS: usize = 10;

/// Upper bound on consecutive face hops while settling an overage.
pub const MAX_OVERAGE_HOPS: usize = 2;

/// Largest per-axis IJK value of a base cell on its face.
pub(crate) const MAX_FACE_COORD: i32 = 2;

// Index bit layout
pub(crate) const H3_MODE_OFFSET: u32 = 59;
pub(crate) const H3_RESERVED_OFFSET: u32 = 56;
pub(crate) const H3_RES_OFFSET: u32 = 52;
pub(crate) const H3_BC_OFFSET: u32 = 45;
pub(crate) const H3_PER_DIGIT_OFFSET: u32 = 3;

pub(crate) const H3_HIGH_BIT_MASK: u64 = 1 << 63;
pub(crate) const H3_MODE_MASK: u64 = 0b1111 << H3_MODE_OFFSET;
pub(crate) const H3_RESERVED_MASK: u64 = 0b111 << H3_RESERVED_OFFSET;
pub(crate) const H3_RES_MASK: u64 = 0b1111 << H3_RES_OFFSET;
pub(crate) const H3_BC_MASK: u64 = 0b111_1111 << H3_BC_OFFSET;
pub(crate) const H3_DIGIT_MASK: u64 = 0b111;

/// Mode value of a cell index.
pub const H3_CELL_MODE: u8 = 1;
/// Mode value of a directed edge index.
pub const H3_DIRECTEDEDGE_MODE: u8 = 2;

/// Mode 0, resolution 0, base cell 0, every digit set to 7.
pub(crate) const H3_INIT: u64 = (1 << 45) - 1;

/// Number of cells at resolution 15: `2 + 120 * 7^15`.
pub const NUM_CELLS_MAX_RES: i64 = 569_707_381_193_162;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_init_pattern() {
    assert_eq!(H3_INIT, 35_184_372_088_831);
    assert_eq!(H3_INIT & H3_RES_MASK, 0);
    assert_eq!(H3_INIT & H3_BC_MASK, 0);
  }

  #[test]
  fn test_masks_are_disjoint() {
    let masks = [H3_HIGH_BIT_MASK, H3_MODE_MASK, H3_RESERVED_MASK, H3_RES_MASK, H3_BC_MASK, H3_INIT];
    for (i, a) in masks.iter().enumerate() {
      for b in &masks[i + 1..] {
        assert_eq!(a & b, 0);
      }
    }
    assert_eq!(masks.iter().fold(0u64, |acc, m| acc | m), u64::MAX);
  }

  #[test]
  fn test_ap7_rotation_constant() {
    assert!(((3.0f64 / 28.0).sqrt().asin() - M_AP7_ROT_RADS).abs() < 1e-15);
  }
}
