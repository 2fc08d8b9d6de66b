//! Local IJ(K) coordinates anchored at an origin cell.
//!
//! A cell and its origin share a frame when they sit on the same base cell or
//! on two adjacent ones; the neighbor base cell is unfolded into the origin's
//! orientation. Frames around a pentagon are only defined on the sides where
//! the unfolding is unambiguous.

use tracing::{debug, trace};

use crate::base_cells::{
  _base_cell_neighbor_rotations, _get_base_cell_direction, _get_base_cell_neighbor, _is_base_cell_pentagon,
  _is_base_cell_polar_pentagon,
};
use crate::constants::{H3_CELL_MODE, H3_INIT};
use crate::coords::ijk::{
  _down_ap7, _down_ap7r, _ijk_add, _ijk_normalize, _ijk_rotate60_cw, _ijk_sub, _neighbor, _unit_ijk_to_digit, _up_ap7,
  _up_ap7r, ij_to_ijk, ijk_to_ij,
};
use crate::error::H3Error;
use crate::h3_index::{
  _check_cell, _get_base_cell, _get_resolution, _h3_leading_non_zero_digit, _h3_rotate60_ccw, _h3_rotate60_cw,
  _h3_rotate_pent60_ccw, _h3_rotate_pent60_cw, _h3_to_face_ijk_with_initialized_fijk, _set_base_cell, _set_index_digit,
  _set_mode, _set_resolution, is_resolution_class_iii,
};
use crate::types::{CoordIJ, CoordIJK, Direction, FaceIJK, H3Index};

/// Clockwise rotations applied to a cell when unfolding across a pentagon,
/// by `[origin leading digit][direction]`. `-1` marks the deleted K digit.
#[rustfmt::skip]
const PENTAGON_ROTATIONS: [[i32; 7]; 7] = [
  [ 0, -1,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0, -1,  0,  0,  0,  1,  0],
  [ 0, -1,  0,  0,  1,  1,  0],
  [ 0, -1,  0,  5,  0,  0,  0],
  [ 0, -1,  5,  5,  0,  0,  0],
  [ 0, -1,  0,  0,  0,  0,  0],
];

/// Counter-clockwise inverse of `PENTAGON_ROTATIONS`, when the origin is on the pentagon.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  5,  0,  5,  0,  0,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

/// Counter-clockwise inverse when the target is on a non-polar pentagon.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_NONPOLAR: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  5,  0,  0,  0,  0,  0],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  0,  0,  0,  0,  0,  0],
];

/// Counter-clockwise inverse when the target is on a polar pentagon.
#[rustfmt::skip]
const PENTAGON_ROTATIONS_REVERSE_POLAR: [[i32; 7]; 7] = [
  [ 0,  0,  0,  0,  0,  0,  0],
  [-1, -1, -1, -1, -1, -1, -1],
  [ 0,  1,  1,  1,  1,  1,  1],
  [ 0,  1,  0,  0,  0,  1,  0],
  [ 0,  1,  0,  0,  1,  1,  1],
  [ 0,  1,  0,  5,  1,  1,  0],
  [ 0,  1,  1,  0,  1,  1,  1],
];

/// Leading digit and direction pairs whose unfolding around a pentagon is ambiguous.
#[rustfmt::skip]
const FAILED_DIRECTIONS: [[bool; 7]; 7] = [
  [false, false, false, false, false, false, false],
  [false, false, false, false, false, false, false],
  [false, false, false, false, true,  true,  false],
  [false, false, false, false, true,  false, true ],
  [false, false, true,  true,  false, false, false],
  [false, false, true,  false, false, false, true ],
  [false, false, false, true,  false, true,  false],
];

#[inline]
fn _rotations(table: &[[i32; 7]; 7], a: Direction, b: Direction) -> Result<i32, H3Error> {
  match table[a as usize][b as usize] {
    r if r >= 0 => Ok(r),
    _ => Err(H3Error::PentagonDistortion),
  }
}

fn _ambiguous_unfolding(leading: Direction, dir: Direction) -> Result<(), H3Error> {
  if FAILED_DIRECTIONS[leading as usize][dir as usize] {
    debug!(?leading, ?dir, "ambiguous unfolding around pentagon");
    return Err(H3Error::IncompatibleCells);
  }
  Ok(())
}

/// IJK coordinate of `h` in the frame centered on `origin`'s base cell.
///
/// # Errors
/// `ResolutionMismatch` for cells of different resolution, `IncompatibleCells`
/// when the base cells are not adjacent or the unfolding crosses pentagon distortion.
pub(crate) fn cell_to_local_ijk(origin: H3Index, h: H3Index) -> Result<CoordIJK, H3Error> {
  let res = _get_resolution(origin);
  if res != _get_resolution(h) {
    return Err(H3Error::ResolutionMismatch);
  }

  let origin_base_cell = _get_base_cell(origin);
  let base_cell = _get_base_cell(h);

  let mut dir = Direction::Center;
  let mut rev_dir = Direction::Center;
  if origin_base_cell != base_cell {
    dir = _get_base_cell_direction(origin_base_cell, base_cell);
    if dir == Direction::InvalidDigit {
      debug!(origin_base_cell, base_cell, "base cells are not adjacent");
      return Err(H3Error::IncompatibleCells);
    }
    rev_dir = _get_base_cell_direction(base_cell, origin_base_cell);
  }

  let origin_on_pent = _is_base_cell_pentagon(origin_base_cell);
  let index_on_pent = _is_base_cell_pentagon(base_cell);

  let mut h = h;
  if dir != Direction::Center {
    // undo the rotation into the neighbor's frame
    let base_cell_rotations = _base_cell_neighbor_rotations(origin_base_cell, dir);
    for _ in 0..base_cell_rotations {
      if index_on_pent {
        h = _h3_rotate_pent60_cw(h);
        rev_dir = rev_dir.rotate60_cw();
        if rev_dir == Direction::KAxes {
          rev_dir = rev_dir.rotate60_cw();
        }
      } else {
        h = _h3_rotate60_cw(h);
        rev_dir = rev_dir.rotate60_cw();
      }
    }
    trace!(origin_base_cell, base_cell, ?dir, base_cell_rotations, "unfolding neighbor base cell");
  }

  // face is unused; digits are applied around the base cell center
  let mut fijk = FaceIJK::default();
  _h3_to_face_ijk_with_initialized_fijk(h, &mut fijk);
  let mut coord = fijk.coord;

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    let mut direction_rotations = 0;
    if origin_on_pent {
      let origin_leading = _h3_leading_non_zero_digit(origin);
      _ambiguous_unfolding(origin_leading, dir)?;
      direction_rotations = _rotations(&PENTAGON_ROTATIONS, origin_leading, dir)?;
      pentagon_rotations = direction_rotations;
    } else if index_on_pent {
      let index_leading = _h3_leading_non_zero_digit(h);
      _ambiguous_unfolding(index_leading, rev_dir)?;
      pentagon_rotations = _rotations(&PENTAGON_ROTATIONS, rev_dir, index_leading)?;
    }

    for _ in 0..pentagon_rotations {
      _ijk_rotate60_cw(&mut coord);
    }

    let mut offset = CoordIJK::default();
    _neighbor(&mut offset, dir);
    for r in (0..res).rev() {
      if is_resolution_class_iii(r + 1) {
        _down_ap7(&mut offset);
      } else {
        _down_ap7r(&mut offset);
      }
    }
    for _ in 0..direction_rotations {
      _ijk_rotate60_cw(&mut offset);
    }

    coord = _ijk_add(&coord, &offset);
    _ijk_normalize(&mut coord);
  } else if origin_on_pent && index_on_pent {
    let origin_leading = _h3_leading_non_zero_digit(origin);
    let index_leading = _h3_leading_non_zero_digit(h);
    _ambiguous_unfolding(origin_leading, index_leading)?;
    for _ in 0.._rotations(&PENTAGON_ROTATIONS, origin_leading, index_leading)? {
      _ijk_rotate60_cw(&mut coord);
    }
  }

  Ok(coord)
}

/// Cell at local coordinate `ijk` in the frame anchored at `origin`.
///
/// # Errors
/// `InvalidDomain` when the coordinate lies beyond the neighboring base cells,
/// `PentagonDistortion` when it falls in a pentagon's deleted sub-sequence.
pub(crate) fn local_ijk_to_cell(origin: H3Index, ijk: &CoordIJK) -> Result<H3Index, H3Error> {
  let res = _get_resolution(origin);
  let origin_base_cell = _get_base_cell(origin);
  let origin_on_pent = _is_base_cell_pentagon(origin_base_cell);

  let mut out = H3Index::new(H3_INIT);
  _set_mode(&mut out, H3_CELL_MODE);
  _set_resolution(&mut out, res);

  if res == 0 {
    let dir = _unit_ijk_to_digit(ijk);
    if dir == Direction::InvalidDigit {
      return Err(H3Error::InvalidDomain);
    }
    let base_cell = _get_base_cell_neighbor(origin_base_cell, dir).ok_or(H3Error::PentagonDistortion)?;
    _set_base_cell(&mut out, base_cell);
    return Ok(out);
  }

  // digits from finest up, as when encoding a face coordinate
  let mut coord = *ijk;
  for r in (0..res).rev() {
    let last = coord;
    let mut center;
    if is_resolution_class_iii(r + 1) {
      _up_ap7(&mut coord);
      center = coord;
      _down_ap7(&mut center);
    } else {
      _up_ap7r(&mut coord);
      center = coord;
      _down_ap7r(&mut center);
    }
    let mut diff = _ijk_sub(&last, &center);
    _ijk_normalize(&mut diff);
    _set_index_digit(&mut out, r + 1, _unit_ijk_to_digit(&diff));
  }

  // `coord` is now the base cell offset in the origin base cell's frame
  if coord.i > 1 || coord.j > 1 || coord.k > 1 {
    return Err(H3Error::InvalidDomain);
  }

  let mut dir = _unit_ijk_to_digit(&coord);
  let mut base_cell = _get_base_cell_neighbor(origin_base_cell, dir);
  let index_on_pent = base_cell.is_some_and(_is_base_cell_pentagon);

  if dir != Direction::Center {
    let mut pentagon_rotations = 0;
    if origin_on_pent {
      let origin_leading = _h3_leading_non_zero_digit(origin);
      pentagon_rotations = _rotations(&PENTAGON_ROTATIONS_REVERSE, origin_leading, dir)?;
      for _ in 0..pentagon_rotations {
        dir = dir.rotate60_ccw();
      }
      if dir == Direction::KAxes {
        return Err(H3Error::PentagonDistortion);
      }
      base_cell = _get_base_cell_neighbor(origin_base_cell, dir);
    }
    let target = base_cell.ok_or(H3Error::PentagonDistortion)?;
    let base_cell_rotations = _base_cell_neighbor_rotations(origin_base_cell, dir);

    if index_on_pent {
      let rev_dir = _get_base_cell_direction(target, origin_base_cell);
      for _ in 0..base_cell_rotations {
        out = _h3_rotate60_ccw(out);
      }
      let index_leading = _h3_leading_non_zero_digit(out);
      let table = if _is_base_cell_polar_pentagon(target) {
        &PENTAGON_ROTATIONS_REVERSE_POLAR
      } else {
        &PENTAGON_ROTATIONS_REVERSE_NONPOLAR
      };
      for _ in 0.._rotations(table, rev_dir, index_leading)? {
        out = _h3_rotate_pent60_ccw(out);
      }
    } else {
      for _ in 0..pentagon_rotations + base_cell_rotations {
        out = _h3_rotate60_ccw(out);
      }
    }
  } else if origin_on_pent && index_on_pent {
    let origin_leading = _h3_leading_non_zero_digit(origin);
    let index_leading = _h3_leading_non_zero_digit(out);
    for _ in 0.._rotations(&PENTAGON_ROTATIONS_REVERSE, origin_leading, index_leading)? {
      out = _h3_rotate60_ccw(out);
    }
  }

  if index_on_pent && _h3_leading_non_zero_digit(out) == Direction::KAxes {
    debug!(origin = %origin, "local coordinate falls in a deleted pentagon sub-sequence");
    return Err(H3Error::PentagonDistortion);
  }

  _set_base_cell(&mut out, base_cell.ok_or(H3Error::PentagonDistortion)?);
  Ok(out)
}

/// Two-axis coordinate of `h` relative to `origin`.
///
/// The frame is only meaningful in the neighborhood of `origin`; coordinates
/// from different origins are not comparable.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `ResolutionMismatch` for different
/// resolutions, `IncompatibleCells` when no shared frame exists.
pub fn cell_to_local_ij(origin: H3Index, h: H3Index) -> Result<CoordIJ, H3Error> {
  _check_cell(origin)?;
  _check_cell(h)?;
  Ok(ijk_to_ij(&cell_to_local_ijk(origin, h)?))
}

/// Inverse of [`cell_to_local_ij`].
///
/// # Errors
/// `InvalidIndex` for an invalid origin, `InvalidDomain` for a coordinate out
/// of range of the frame, `PentagonDistortion` for a coordinate with no cell.
pub fn local_ij_to_cell(origin: H3Index, ij: &CoordIJ) -> Result<H3Index, H3Error> {
  _check_cell(origin)?;
  local_ijk_to_cell(origin, &ij_to_ijk(ij)?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::{_set_h3_index, get_pentagons, is_valid_cell};
  use crate::hierarchy::cell_to_children;

  #[test]
  fn test_origin_is_zero_within_base_cell() {
    let origin = _set_h3_index(0, 15, Direction::Center);
    assert_eq!(cell_to_local_ijk(origin, origin), Ok(CoordIJK::new(0, 0, 0)));
  }

  #[test]
  fn test_res0_neighbors() {
    let origin = _set_h3_index(0, 15, Direction::Center);
    for dir in Direction::NEIGHBORS {
      let Some(bc) = _get_base_cell_neighbor(15, dir) else { continue };
      let neighbor = _set_h3_index(0, bc, Direction::Center);
      let ijk = cell_to_local_ijk(origin, neighbor).unwrap();
      assert_eq!(_unit_ijk_to_digit(&ijk), dir, "base cell {bc}");
      assert_eq!(local_ijk_to_cell(origin, &ijk), Ok(neighbor));
    }
  }

  #[test]
  fn test_round_trip_within_base_cell() {
    let origin = _set_h3_index(2, 20, Direction::Center);
    let parent = _set_h3_index(0, 20, Direction::Center);
    for cell in cell_to_children(parent, 2).unwrap() {
      let ij = cell_to_local_ij(origin, cell).unwrap();
      assert_eq!(local_ij_to_cell(origin, &ij), Ok(cell), "{cell}");
    }
  }

  #[test]
  fn test_round_trip_around_pentagon() {
    let origin = get_pentagons(1).unwrap()[0];
    let parent = _set_h3_index(0, _get_base_cell(origin), Direction::Center);
    for cell in cell_to_children(parent, 1).unwrap() {
      let ij = cell_to_local_ij(origin, cell).unwrap();
      assert_eq!(local_ij_to_cell(origin, &ij), Ok(cell), "{cell}");
    }
  }

  #[test]
  fn test_resolution_mismatch() {
    let a = _set_h3_index(2, 20, Direction::Center);
    let b = _set_h3_index(3, 20, Direction::Center);
    assert_eq!(cell_to_local_ij(a, b), Err(H3Error::ResolutionMismatch));
  }

  #[test]
  fn test_distant_base_cells_are_incompatible() {
    // opposite sides of the globe
    let a = _set_h3_index(0, 0, Direction::Center);
    let b = _set_h3_index(0, 121, Direction::Center);
    assert_eq!(cell_to_local_ij(a, b), Err(H3Error::IncompatibleCells));
  }

  #[test]
  fn test_out_of_range_coordinate() {
    let origin = _set_h3_index(1, 20, Direction::Center);
    assert_eq!(local_ij_to_cell(origin, &CoordIJ { i: 100, j: 0 }), Err(H3Error::InvalidDomain));
  }

  #[test]
  fn test_pentagon_deleted_direction() {
    let pent = _set_h3_index(0, 4, Direction::Center);
    let k = CoordIJK::new(0, 0, 1);
    assert_eq!(local_ijk_to_cell(pent, &k), Err(H3Error::PentagonDistortion));
  }

  #[test]
  fn test_neighbors_of_a_res5_cell() {
    let origin = H3Index::new(0x85283473fffffff);
    let base = cell_to_local_ijk(origin, origin).unwrap();
    for dir in Direction::NEIGHBORS {
      let mut ijk = base;
      _neighbor(&mut ijk, dir);
      let cell = local_ijk_to_cell(origin, &ijk).unwrap();
      assert!(is_valid_cell(cell));
      assert_eq!(cell_to_local_ijk(origin, cell), Ok(ijk));
    }
  }
}
