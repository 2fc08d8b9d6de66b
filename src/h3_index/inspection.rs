//! Validation and whole-grid inspection.

use crate::base_cells::{_base_cell_num_to_cell, _is_base_cell_pentagon, _pentagon_base_cells};
use crate::constants::*;
use crate::coords::face_ijk::{_adjust_overage_class_ii, _adjust_pent_vert_overage, _face_ijk_pent_to_verts, _face_ijk_to_verts};
use crate::error::H3Error;
use crate::math::extensions::_ipow;
use crate::types::{Direction, FaceIJK, H3Index};

use super::{
  _check_cell, _get_base_cell, _get_high_bit, _get_index_digit, _get_mode, _get_reserved_bits, _get_resolution,
  _h3_leading_non_zero_digit, _h3_to_face_ijk, _set_index_digit, _set_resolution, is_resolution_class_iii,
};

/// Checks every structural invariant of a cell index.
///
/// The header must be a cell with zero reserved bits, digits up to the
/// resolution must be real directions, digits past it must all be 7, and a
/// pentagon must not lead with the deleted K digit.
#[must_use]
pub fn is_valid_cell(h: H3Index) -> bool {
  if _get_high_bit(h) != 0 || _get_mode(h) != H3_CELL_MODE || _get_reserved_bits(h) != 0 {
    return false;
  }

  let base_cell = _get_base_cell(h);
  if base_cell >= NUM_BASE_CELLS {
    return false;
  }

  let res = _get_resolution(h);
  let mut found_first_non_zero = false;
  for r in 1..=res {
    let digit = _get_index_digit(h, r);
    if !found_first_non_zero && digit != Direction::Center {
      found_first_non_zero = true;
      if _is_base_cell_pentagon(base_cell) && digit == Direction::KAxes {
        return false;
      }
    }
    if digit == Direction::InvalidDigit {
      return false;
    }
  }

  (res + 1..=MAX_H3_RES).all(|r| _get_index_digit(h, r) == Direction::InvalidDigit)
}

/// True for the center cell of a pentagon base cell, at any resolution.
#[must_use]
pub fn is_pentagon(h: H3Index) -> bool {
  _is_base_cell_pentagon(_get_base_cell(h)) && _h3_leading_non_zero_digit(h) == Direction::Center
}

/// True when the index resolution is odd.
#[must_use]
pub fn is_res_class_iii(h: H3Index) -> bool {
  is_resolution_class_iii(_get_resolution(h))
}

/// Number of cells at `res`: `2 + 120 * 7^res`.
///
/// # Errors
/// `InvalidResolution` outside `0..=15`.
pub fn get_num_cells(res: i32) -> Result<i64, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::InvalidResolution);
  }
  Ok(2 + 120 * _ipow(7, i64::from(res)))
}

/// The 122 resolution 0 cells in base cell order.
#[must_use]
pub fn get_res0_cells() -> Vec<H3Index> {
  (0..NUM_BASE_CELLS).map(_base_cell_num_to_cell).collect()
}

/// The twelve pentagons at `res`, in base cell order.
///
/// # Errors
/// `InvalidResolution` outside `0..=15`.
pub fn get_pentagons(res: i32) -> Result<Vec<H3Index>, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::InvalidResolution);
  }
  Ok(
    _pentagon_base_cells()
      .map(|bc| super::_set_h3_index(res, bc, Direction::Center))
      .collect(),
  )
}

/// Upper bound on the faces a cell can touch.
#[must_use]
pub fn max_face_count(h: H3Index) -> usize {
  if is_pentagon(h) {
    5
  } else {
    2
  }
}

/// Icosahedron faces intersected by a cell, ascending.
///
/// # Errors
/// `InvalidIndex` for anything but a valid cell.
pub fn get_icosahedron_faces(h: H3Index) -> Result<Vec<i32>, H3Error> {
  _check_cell(h)?;
  let res = _get_resolution(h);

  // Class II pentagons have all vertices on face edges; their center child does not
  if is_pentagon(h) && !is_resolution_class_iii(res) {
    let mut child = h;
    _set_resolution(&mut child, res + 1);
    _set_index_digit(&mut child, res + 1, Direction::Center);
    return get_icosahedron_faces(child);
  }

  let fijk = _h3_to_face_ijk(h)?;
  let mut faces = Vec::with_capacity(max_face_count(h));
  let mut add = |v: FaceIJK| {
    if !faces.contains(&v.face) {
      faces.push(v.face);
    }
  };

  if is_pentagon(h) {
    let (verts, adj_res) = _face_ijk_pent_to_verts(&fijk, res);
    for v in &verts {
      add(_adjust_pent_vert_overage(v, adj_res)?.0);
    }
  } else {
    let (verts, adj_res) = _face_ijk_to_verts(&fijk, res);
    for v in &verts {
      add(_adjust_overage_class_ii(v, adj_res, false, true).0);
    }
  }

  faces.sort_unstable();
  Ok(faces)
}
