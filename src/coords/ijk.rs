//! IJK hex coordinate arithmetic: normalization, aperture changes, rotations
//! and conversions to planar, two-axis and cube forms.

use crate::constants::{M_RSIN60, M_SQRT3_2};
use crate::error::H3Error;
use crate::types::{CoordIJ, CoordIJK, Direction, Vec2d};

/// Unit vectors for the seven digits, indexed by digit value.
#[rustfmt::skip]
pub(crate) const UNIT_VECS: [CoordIJK; 7] = [
  CoordIJK::new(0, 0, 0), // center
  CoordIJK::new(0, 0, 1), // k
  CoordIJK::new(0, 1, 0), // j
  CoordIJK::new(0, 1, 1), // jk
  CoordIJK::new(1, 0, 0), // i
  CoordIJK::new(1, 0, 1), // ik
  CoordIJK::new(1, 1, 0), // ij
];

/// Largest magnitude accepted by `ij_to_ijk`; keeps later aperture math inside `i32`.
const MAX_IJ_MAGNITUDE: i32 = i32::MAX / 8;

#[inline]
#[must_use]
pub(crate) fn _ijk_add(h1: &CoordIJK, h2: &CoordIJK) -> CoordIJK {
  CoordIJK::new(h1.i + h2.i, h1.j + h2.j, h1.k + h2.k)
}

#[inline]
#[must_use]
pub(crate) fn _ijk_sub(h1: &CoordIJK, h2: &CoordIJK) -> CoordIJK {
  CoordIJK::new(h1.i - h2.i, h1.j - h2.j, h1.k - h2.k)
}

/// Scales every component by `factor`, in place.
#[inline]
pub(crate) fn _ijk_scale(c: &mut CoordIJK, factor: i32) {
  c.i *= factor;
  c.j *= factor;
  c.k *= factor;
}

/// Brings `c` to normalized form: non-negative with at least one zero component.
#[inline]
pub(crate) fn _ijk_normalize(c: &mut CoordIJK) {
  if c.i < 0 {
    c.j -= c.i;
    c.k -= c.i;
    c.i = 0;
  }
  if c.j < 0 {
    c.i -= c.j;
    c.k -= c.j;
    c.j = 0;
  }
  if c.k < 0 {
    c.i -= c.k;
    c.j -= c.k;
    c.k = 0;
  }
  let min = c.i.min(c.j).min(c.k);
  if min > 0 {
    c.i -= min;
    c.j -= min;
    c.k -= min;
  }
}

/// Digit of a unit (or zero) vector; `InvalidDigit` for anything else.
#[must_use]
pub(crate) fn _unit_ijk_to_digit(ijk: &CoordIJK) -> Direction {
  let mut c = *ijk;
  _ijk_normalize(&mut c);
  UNIT_VECS
    .iter()
    .position(|u| *u == c)
    .map_or(Direction::InvalidDigit, |d| Direction::from_bits(d as u64))
}

/// Moves `ijk` one cell in direction `digit`, in place.
#[inline]
pub(crate) fn _neighbor(ijk: &mut CoordIJK, digit: Direction) {
  if digit != Direction::Center && digit != Direction::InvalidDigit {
    *ijk = _ijk_add(ijk, &UNIT_VECS[digit as usize]);
    _ijk_normalize(ijk);
  }
}

/// Containing hex of a planar point.
#[must_use]
pub(crate) fn _hex2d_to_coord_ijk(v: &Vec2d) -> CoordIJK {
  let a1 = v.x.abs();
  let a2 = v.y.abs();

  // reverse conversion into the ij system
  let x2 = a2 * M_RSIN60;
  let x1 = a1 + x2 / 2.0;

  let m1 = x1 as i32;
  let m2 = x2 as i32;
  let r1 = x1 - f64::from(m1);
  let r2 = x2 - f64::from(m2);

  let (mut i, mut j);
  if r1 < 0.5 {
    if r1 < 1.0 / 3.0 {
      i = m1;
      j = if r2 < (1.0 + r1) / 2.0 { m2 } else { m2 + 1 };
    } else {
      j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
      i = if (1.0 - r1) <= r2 && r2 < 2.0 * r1 { m1 + 1 } else { m1 };
    }
  } else if r1 < 2.0 / 3.0 {
    j = if r2 < 1.0 - r1 { m2 } else { m2 + 1 };
    i = if (2.0 * r1 - 1.0) < r2 && r2 < (1.0 - r1) { m1 } else { m1 + 1 };
  } else {
    i = m1 + 1;
    j = if r2 < r1 / 2.0 { m2 } else { m2 + 1 };
  }

  // fold across the axes
  if v.x < 0.0 {
    if j % 2 == 0 {
      let diff = i64::from(i) - i64::from(j) / 2;
      i = (i64::from(i) - 2 * diff) as i32;
    } else {
      let diff = i64::from(i) - (i64::from(j) + 1) / 2;
      i = (i64::from(i) - (2 * diff + 1)) as i32;
    }
  }
  if v.y < 0.0 {
    i -= (2 * j + 1) / 2;
    j = -j;
  }

  let mut h = CoordIJK::new(i, j, 0);
  _ijk_normalize(&mut h);
  h
}

/// Planar center of a hex.
#[inline]
#[must_use]
pub(crate) fn _ijk_to_hex2d(h: &CoordIJK) -> Vec2d {
  let i = f64::from(h.i - h.k);
  let j = f64::from(h.j - h.k);
  Vec2d::new(i - 0.5 * j, j * M_SQRT3_2)
}

#[inline]
fn _lround(v: f64) -> i32 {
  // f64::round breaks ties away from zero
  v.round() as i32
}

#[inline]
fn _set_ij_normalized(ijk: &mut CoordIJK, i: i32, j: i32) {
  *ijk = CoordIJK::new(i, j, 0);
  _ijk_normalize(ijk);
}

/// Parent coordinate on the counter-clockwise aperture 7 grid (Class III children).
pub(crate) fn _up_ap7(ijk: &mut CoordIJK) {
  let i = i64::from(ijk.i - ijk.k);
  let j = i64::from(ijk.j - ijk.k);
  _set_ij_normalized(ijk, _lround((3 * i - j) as f64 / 7.0), _lround((i + 2 * j) as f64 / 7.0));
}

/// Parent coordinate on the clockwise aperture 7 grid (Class II children).
pub(crate) fn _up_ap7r(ijk: &mut CoordIJK) {
  let i = i64::from(ijk.i - ijk.k);
  let j = i64::from(ijk.j - ijk.k);
  _set_ij_normalized(ijk, _lround((2 * i + j) as f64 / 7.0), _lround((3 * j - i) as f64 / 7.0));
}

/// Applies the linear map whose images of the i, j and k unit vectors are given.
#[inline]
fn _transform(ijk: &mut CoordIJK, i_vec: CoordIJK, j_vec: CoordIJK, k_vec: CoordIJK) {
  let mut iv = i_vec;
  let mut jv = j_vec;
  let mut kv = k_vec;
  _ijk_scale(&mut iv, ijk.i);
  _ijk_scale(&mut jv, ijk.j);
  _ijk_scale(&mut kv, ijk.k);
  *ijk = _ijk_add(&_ijk_add(&iv, &jv), &kv);
  _ijk_normalize(ijk);
}

/// Center child coordinate on the counter-clockwise aperture 7 grid.
pub(crate) fn _down_ap7(ijk: &mut CoordIJK) {
  _transform(ijk, CoordIJK::new(3, 0, 1), CoordIJK::new(1, 3, 0), CoordIJK::new(0, 1, 3));
}

/// Center child coordinate on the clockwise aperture 7 grid.
pub(crate) fn _down_ap7r(ijk: &mut CoordIJK) {
  _transform(ijk, CoordIJK::new(3, 1, 0), CoordIJK::new(0, 3, 1), CoordIJK::new(1, 0, 3));
}

/// Counter-clockwise aperture 3 substrate grid.
pub(crate) fn _down_ap3(ijk: &mut CoordIJK) {
  _transform(ijk, CoordIJK::new(2, 0, 1), CoordIJK::new(1, 2, 0), CoordIJK::new(0, 1, 2));
}

/// Clockwise aperture 3 substrate grid.
pub(crate) fn _down_ap3r(ijk: &mut CoordIJK) {
  _transform(ijk, CoordIJK::new(2, 1, 0), CoordIJK::new(0, 2, 1), CoordIJK::new(1, 0, 2));
}

pub(crate) fn _ijk_rotate60_ccw(ijk: &mut CoordIJK) {
  _transform(ijk, CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1), CoordIJK::new(1, 0, 1));
}

pub(crate) fn _ijk_rotate60_cw(ijk: &mut CoordIJK) {
  _transform(ijk, CoordIJK::new(1, 0, 1), CoordIJK::new(1, 1, 0), CoordIJK::new(0, 1, 1));
}

/// Grid distance between two coordinates in the same frame.
#[must_use]
pub(crate) fn ijk_distance(c1: &CoordIJK, c2: &CoordIJK) -> i32 {
  let mut diff = _ijk_sub(c1, c2);
  _ijk_normalize(&mut diff);
  diff.i.abs().max(diff.j.abs()).max(diff.k.abs())
}

#[inline]
#[must_use]
pub(crate) fn ijk_to_ij(ijk: &CoordIJK) -> CoordIJ {
  CoordIJ {
    i: ijk.i - ijk.k,
    j: ijk.j - ijk.k,
  }
}

/// Two-axis coordinate back to normalized IJK. Rejects magnitudes that would
/// overflow during later aperture arithmetic.
pub(crate) fn ij_to_ijk(ij: &CoordIJ) -> Result<CoordIJK, H3Error> {
  if ij.i.unsigned_abs() > MAX_IJ_MAGNITUDE as u32 || ij.j.unsigned_abs() > MAX_IJ_MAGNITUDE as u32 {
    return Err(H3Error::InvalidDomain);
  }
  let mut ijk = CoordIJK::new(ij.i, ij.j, 0);
  _ijk_normalize(&mut ijk);
  Ok(ijk)
}

/// Normalized IJK to cube coordinates (components sum to zero), in place.
pub(crate) fn ijk_to_cube(ijk: &mut CoordIJK) {
  let i = -ijk.i + ijk.k;
  let j = ijk.j - ijk.k;
  *ijk = CoordIJK::new(i, j, -i - j);
}

/// Cube coordinates back to normalized IJK, in place.
pub(crate) fn cube_to_ijk(ijk: &mut CoordIJK) {
  ijk.i = -ijk.i;
  ijk.k = 0;
  _ijk_normalize(ijk);
}
