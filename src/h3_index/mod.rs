//! Index bit layout, digit rotation and conversion between indexes and `FaceIJK`.

pub mod inspection;
pub mod string_conv;

use crate::base_cells::{
  _base_cell_home, _base_cell_is_cw_offset, _face_ijk_to_base_cell, _is_base_cell_pentagon,
};
use crate::constants::*;
use crate::coords::face_ijk::{Overage, _adjust_overage_class_ii, _settle_overage};
use crate::coords::ijk::{
  _down_ap7, _down_ap7r, _ijk_normalize, _ijk_sub, _neighbor, _unit_ijk_to_digit, _up_ap7, _up_ap7r,
};
use crate::error::H3Error;
use crate::types::{Direction, FaceIJK, H3Index};

pub use inspection::{
  get_icosahedron_faces, get_num_cells, get_pentagons, get_res0_cells, is_pentagon, is_res_class_iii,
  is_valid_cell, max_face_count,
};
pub use string_conv::{h3_to_string, string_to_h3};

#[inline]
fn _with_field(h: &mut H3Index, mask: u64, offset: u32, v: u64) {
  *h = H3Index::new((h.bits() & !mask) | ((v << offset) & mask));
}

#[inline(always)]
#[must_use]
pub(crate) const fn _get_high_bit(h: H3Index) -> u8 {
  ((h.bits() & H3_HIGH_BIT_MASK) >> 63) as u8
}

#[inline(always)]
#[must_use]
pub(crate) const fn _get_mode(h: H3Index) -> u8 {
  ((h.bits() & H3_MODE_MASK) >> H3_MODE_OFFSET) as u8
}

#[inline(always)]
pub(crate) fn _set_mode(h: &mut H3Index, mode: u8) {
  _with_field(h, H3_MODE_MASK, H3_MODE_OFFSET, u64::from(mode));
}

#[inline(always)]
#[must_use]
pub(crate) const fn _get_reserved_bits(h: H3Index) -> u8 {
  ((h.bits() & H3_RESERVED_MASK) >> H3_RESERVED_OFFSET) as u8
}

#[inline(always)]
pub(crate) fn _set_reserved_bits(h: &mut H3Index, v: u8) {
  _with_field(h, H3_RESERVED_MASK, H3_RESERVED_OFFSET, u64::from(v));
}

#[inline(always)]
#[must_use]
pub(crate) const fn _get_resolution(h: H3Index) -> i32 {
  ((h.bits() & H3_RES_MASK) >> H3_RES_OFFSET) as i32
}

#[inline(always)]
pub(crate) fn _set_resolution(h: &mut H3Index, res: i32) {
  _with_field(h, H3_RES_MASK, H3_RES_OFFSET, res as u64);
}

#[inline(always)]
#[must_use]
pub(crate) const fn _get_base_cell(h: H3Index) -> i32 {
  ((h.bits() & H3_BC_MASK) >> H3_BC_OFFSET) as i32
}

#[inline(always)]
pub(crate) fn _set_base_cell(h: &mut H3Index, bc: i32) {
  _with_field(h, H3_BC_MASK, H3_BC_OFFSET, bc as u64);
}

#[inline(always)]
const fn _digit_offset(res: i32) -> u32 {
  ((MAX_H3_RES - res) as u32) * H3_PER_DIGIT_OFFSET
}

/// Digit at resolution `res`, 1 through 15.
#[inline(always)]
#[must_use]
pub(crate) const fn _get_index_digit(h: H3Index, res: i32) -> Direction {
  Direction::from_bits(h.bits() >> _digit_offset(res))
}

#[inline(always)]
pub(crate) fn _set_index_digit(h: &mut H3Index, res: i32, digit: Direction) {
  _with_field(h, H3_DIGIT_MASK << _digit_offset(res), _digit_offset(res), digit as u64);
}

/// A cell index with every digit up to `res` set to `init_digit`.
#[must_use]
pub(crate) fn _set_h3_index(res: i32, base_cell: i32, init_digit: Direction) -> H3Index {
  let mut h = H3Index::new(H3_INIT);
  _set_mode(&mut h, H3_CELL_MODE);
  _set_resolution(&mut h, res);
  _set_base_cell(&mut h, base_cell);
  for r in 1..=res {
    _set_index_digit(&mut h, r, init_digit);
  }
  h
}

/// Odd resolutions are Class III.
#[inline]
#[must_use]
pub(crate) fn is_resolution_class_iii(res: i32) -> bool {
  res % 2 == 1
}

/// Coarsest non-center digit, or `Center` if there is none.
#[must_use]
pub(crate) fn _h3_leading_non_zero_digit(h: H3Index) -> Direction {
  (1..=_get_resolution(h))
    .map(|r| _get_index_digit(h, r))
    .find(|d| *d != Direction::Center)
    .unwrap_or(Direction::Center)
}

/// Resolution of an index whose header is well formed.
///
/// # Errors
/// `InvalidIndex` when the high bit is set, the mode is neither cell nor edge,
/// or the base cell is out of range.
pub fn get_resolution(h: H3Index) -> Result<i32, H3Error> {
  _check_header(h)?;
  Ok(_get_resolution(h))
}

/// Base cell number of an index whose header is well formed.
///
/// # Errors
/// Same as [`get_resolution`].
pub fn get_base_cell(h: H3Index) -> Result<i32, H3Error> {
  _check_header(h)?;
  Ok(_get_base_cell(h))
}

fn _check_header(h: H3Index) -> Result<(), H3Error> {
  let mode = _get_mode(h);
  if _get_high_bit(h) != 0
    || (mode != H3_CELL_MODE && mode != H3_DIRECTEDEDGE_MODE)
    || _get_base_cell(h) >= NUM_BASE_CELLS
  {
    return Err(H3Error::InvalidIndex);
  }
  Ok(())
}

#[inline]
fn _rotate_digits(mut h: H3Index, rotate: fn(Direction) -> Direction) -> H3Index {
  for r in 1..=_get_resolution(h) {
    let d = rotate(_get_index_digit(h, r));
    _set_index_digit(&mut h, r, d);
  }
  h
}

#[must_use]
pub(crate) fn _h3_rotate60_ccw(h: H3Index) -> H3Index {
  _rotate_digits(h, Direction::rotate60_ccw)
}

#[must_use]
pub(crate) fn _h3_rotate60_cw(h: H3Index) -> H3Index {
  _rotate_digits(h, Direction::rotate60_cw)
}

/// Rotates about a pentagon center. A rotation that would lead into the deleted
/// K sub-sequence takes one more step in the same direction.
fn _rotate_pent(mut h: H3Index, rotate: fn(Direction) -> Direction, full: fn(H3Index) -> H3Index) -> H3Index {
  let mut found_first_non_zero = false;
  for r in 1..=_get_resolution(h) {
    let d = rotate(_get_index_digit(h, r));
    _set_index_digit(&mut h, r, d);
    if !found_first_non_zero && d != Direction::Center {
      found_first_non_zero = true;
      if _h3_leading_non_zero_digit(h) == Direction::KAxes {
        h = full(h);
      }
    }
  }
  h
}

#[must_use]
pub(crate) fn _h3_rotate_pent60_ccw(h: H3Index) -> H3Index {
  _rotate_pent(h, Direction::rotate60_ccw, _h3_rotate60_ccw)
}

#[must_use]
pub(crate) fn _h3_rotate_pent60_cw(h: H3Index) -> H3Index {
  _rotate_pent(h, Direction::rotate60_cw, _h3_rotate60_cw)
}

/// Encodes a face coordinate at `res` as a cell index.
///
/// Returns `None` when the coordinate does not resolve to a base cell on its face.
#[must_use]
pub(crate) fn _face_ijk_to_h3(fijk: &FaceIJK, res: i32) -> Option<H3Index> {
  let mut h = H3Index::new(H3_INIT);
  _set_mode(&mut h, H3_CELL_MODE);
  _set_resolution(&mut h, res);

  if res == 0 {
    let found = _face_ijk_to_base_cell(fijk)?;
    _set_base_cell(&mut h, found.base_cell);
    return Some(h);
  }

  // walk up to the base cell, recording the digit of each step
  let mut fijk_bc = *fijk;
  for r in (0..res).rev() {
    let last = fijk_bc.coord;
    let mut center = if is_resolution_class_iii(r + 1) {
      _up_ap7(&mut fijk_bc.coord);
      let mut c = fijk_bc.coord;
      _down_ap7(&mut c);
      c
    } else {
      _up_ap7r(&mut fijk_bc.coord);
      let mut c = fijk_bc.coord;
      _down_ap7r(&mut c);
      c
    };
    center = _ijk_sub(&last, &center);
    _ijk_normalize(&mut center);
    _set_index_digit(&mut h, r + 1, _unit_ijk_to_digit(&center));
  }

  let found = _face_ijk_to_base_cell(&fijk_bc)?;
  _set_base_cell(&mut h, found.base_cell);

  if _is_base_cell_pentagon(found.base_cell) {
    if _h3_leading_non_zero_digit(h) == Direction::KAxes {
      h = if _base_cell_is_cw_offset(found.base_cell, fijk_bc.face) {
        _h3_rotate60_cw(h)
      } else {
        _h3_rotate60_ccw(h)
      };
    }
    for _ in 0..found.ccw_rot60 {
      h = _h3_rotate_pent60_ccw(h);
    }
  } else {
    for _ in 0..found.ccw_rot60 {
      h = _h3_rotate60_ccw(h);
    }
  }
  Some(h)
}

/// Applies the digits of `h` to `fijk`, which must hold the home coordinate of
/// the base cell. Returns whether the result may lie off the home face.
pub(crate) fn _h3_to_face_ijk_with_initialized_fijk(h: H3Index, fijk: &mut FaceIJK) -> bool {
  let res = _get_resolution(h);
  let possible_overage =
    _is_base_cell_pentagon(_get_base_cell(h)) || (res != 0 && fijk.coord != crate::types::CoordIJK::default());

  for r in 1..=res {
    if is_resolution_class_iii(r) {
      _down_ap7(&mut fijk.coord);
    } else {
      _down_ap7r(&mut fijk.coord);
    }
    _neighbor(&mut fijk.coord, _get_index_digit(h, r));
  }
  possible_overage
}

/// Canonical `FaceIJK` of a cell center: the face that actually contains it.
///
/// # Errors
/// `InvalidIndex` for a base cell out of range, `FaceOverageLoopExceeded` if a
/// pentagon cell fails to settle on a face.
pub(crate) fn _h3_to_face_ijk(mut h: H3Index) -> Result<FaceIJK, H3Error> {
  let base_cell = _get_base_cell(h);
  let mut fijk = _base_cell_home(base_cell).ok_or(H3Error::InvalidIndex)?;
  let is_pent = _is_base_cell_pentagon(base_cell);

  // skip the deleted sub-sequence
  if is_pent && _h3_leading_non_zero_digit(h) == Direction::IkAxes {
    h = _h3_rotate60_cw(h);
  }

  if !_h3_to_face_ijk_with_initialized_fijk(h, &mut fijk) {
    return Ok(fijk);
  }

  // overage is resolved on the Class II grid
  let orig = fijk.coord;
  let cell_res = _get_resolution(h);
  let mut res = cell_res;
  if is_resolution_class_iii(res) {
    _down_ap7r(&mut fijk.coord);
    res += 1;
  }

  let pent_leading_4 = is_pent && _h3_leading_non_zero_digit(h) == Direction::IAxes;
  let (mut adjusted, overage) = _adjust_overage_class_ii(&fijk, res, pent_leading_4, false);
  if overage == Overage::NoOverage {
    fijk.coord = orig;
    return Ok(fijk);
  }

  if is_pent {
    adjusted = _settle_overage(&adjusted, res, false, 0)?.0;
  }
  if res != cell_res {
    _up_ap7r(&mut adjusted.coord);
  }
  Ok(adjusted)
}

/// `Ok` for a valid cell index, `InvalidIndex` otherwise.
#[inline]
pub(crate) fn _check_cell(h: H3Index) -> Result<(), H3Error> {
  if is_valid_cell(h) {
    Ok(())
  } else {
    Err(H3Error::InvalidIndex)
  }
}
