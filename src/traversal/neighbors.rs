//! Single steps across the grid: the neighbor of a cell in a direction and
//! the inverse lookup of that direction.

use tracing::trace;

use crate::base_cells::{
  _base_cell_home, _base_cell_is_cw_offset, _base_cell_neighbor_rotations, _get_base_cell_neighbor,
  _is_base_cell_pentagon, _is_base_cell_polar_pentagon,
};
use crate::error::H3Error;
use crate::h3_index::{
  _check_cell, _get_base_cell, _get_index_digit, _get_resolution, _h3_leading_non_zero_digit, _h3_rotate60_ccw,
  _h3_rotate60_cw, _h3_rotate_pent60_ccw, _set_base_cell, _set_index_digit, is_pentagon, is_resolution_class_iii,
};
use crate::types::{Direction, H3Index};

use Direction::{Center as C0, IAxes as I4, IjAxes as IJ6, IkAxes as IK5, JAxes as J2, JkAxes as JK3, KAxes as K1};

/// Digit after moving one step in a direction, for Class III resolutions,
/// by `[old digit][direction]`.
#[rustfmt::skip]
const NEW_DIGIT_CLASS_III: [[Direction; 7]; 7] = [
  [C0,  K1,  J2,  JK3, I4,  IK5, IJ6],
  [K1,  I4,  JK3, IJ6, IK5, J2,  C0 ],
  [J2,  JK3, K1,  I4,  IJ6, C0,  IK5],
  [JK3, IJ6, I4,  IK5, C0,  K1,  J2 ],
  [I4,  IK5, IJ6, C0,  J2,  JK3, K1 ],
  [IK5, J2,  C0,  K1,  JK3, IJ6, I4 ],
  [IJ6, C0,  IK5, J2,  K1,  I4,  JK3],
];

/// Direction carried into the parent digit, for Class III resolutions.
#[rustfmt::skip]
const NEW_ADJUSTMENT_CLASS_III: [[Direction; 7]; 7] = [
  [C0, C0,  C0,  C0,  C0, C0,  C0 ],
  [C0, K1,  C0,  K1,  C0, IK5, C0 ],
  [C0, C0,  J2,  JK3, C0, C0,  J2 ],
  [C0, K1,  JK3, JK3, C0, C0,  C0 ],
  [C0, C0,  C0,  C0,  I4, I4,  IJ6],
  [C0, IK5, C0,  C0,  I4, IK5, C0 ],
  [C0, C0,  J2,  C0,  IJ6, C0, IJ6],
];

/// Digit after moving one step in a direction, for Class II resolutions.
#[rustfmt::skip]
const NEW_DIGIT_CLASS_II: [[Direction; 7]; 7] = [
  [C0,  K1,  J2,  JK3, I4,  IK5, IJ6],
  [K1,  J2,  JK3, I4,  IK5, IJ6, C0 ],
  [J2,  JK3, I4,  IK5, IJ6, C0,  K1 ],
  [JK3, I4,  IK5, IJ6, C0,  K1,  J2 ],
  [I4,  IK5, IJ6, C0,  K1,  J2,  JK3],
  [IK5, IJ6, C0,  K1,  J2,  JK3, I4 ],
  [IJ6, C0,  K1,  J2,  JK3, I4,  IK5],
];

/// Direction carried into the parent digit, for Class II resolutions.
#[rustfmt::skip]
const NEW_ADJUSTMENT_CLASS_II: [[Direction; 7]; 7] = [
  [C0, C0,  C0,  C0,  C0,  C0,  C0 ],
  [C0, K1,  C0,  JK3, C0,  K1,  C0 ],
  [C0, C0,  J2,  J2,  C0,  C0,  IJ6],
  [C0, JK3, J2,  JK3, C0,  C0,  C0 ],
  [C0, C0,  C0,  C0,  I4,  IK5, I4 ],
  [C0, K1,  C0,  C0,  IK5, IK5, C0 ],
  [C0, C0,  IJ6, C0,  I4,  C0,  IJ6],
];

/// Base cells whose edge into the north polar pentagon needs no extra rotation.
const POLAR_NEIGHBOR_EXCEPTIONS: [i32; 2] = [8, 118];

/// Neighbor of `origin` in direction `dir`, after first rotating `dir` by
/// `rotations` 60 degree counter-clockwise steps.
///
/// Returns the neighbor and the updated rotation count that maps directions
/// in `origin`'s frame onto the neighbor's frame.
///
/// # Errors
/// `PentagonDistortion` when the step lands in a pentagon's deleted
/// sub-sequence, `InvalidIndex` for a malformed digit.
pub(crate) fn h3_neighbor_rotations(origin: H3Index, dir: Direction, rotations: i32) -> Result<(H3Index, i32), H3Error> {
  if dir == Direction::InvalidDigit {
    return Err(H3Error::InvalidDomain);
  }
  let mut rotations = rotations.rem_euclid(6);
  let mut dir = (0..rotations).fold(dir, |d, _| d.rotate60_ccw());

  let mut current = origin;
  let old_base_cell = _get_base_cell(current);
  let old_leading_digit = _h3_leading_non_zero_digit(current);
  let mut new_rotations = 0;

  let mut r = _get_resolution(current) - 1;
  loop {
    if r == -1 {
      match _get_base_cell_neighbor(old_base_cell, dir) {
        Some(bc) => {
          _set_base_cell(&mut current, bc);
          new_rotations = _base_cell_neighbor_rotations(old_base_cell, dir);
        }
        None => {
          // the deleted K edge of a pentagon borders its IK neighbor
          let bc = _get_base_cell_neighbor(old_base_cell, Direction::IkAxes).ok_or(H3Error::InvalidIndex)?;
          _set_base_cell(&mut current, bc);
          new_rotations = _base_cell_neighbor_rotations(old_base_cell, Direction::IkAxes);
          current = _h3_rotate60_ccw(current);
          rotations += 1;
        }
      }
      break;
    }

    let old_digit = _get_index_digit(current, r + 1);
    if old_digit == Direction::InvalidDigit {
      return Err(H3Error::InvalidIndex);
    }
    let (digits, adjustments) = if is_resolution_class_iii(r + 1) {
      (&NEW_DIGIT_CLASS_III, &NEW_ADJUSTMENT_CLASS_III)
    } else {
      (&NEW_DIGIT_CLASS_II, &NEW_ADJUSTMENT_CLASS_II)
    };
    _set_index_digit(&mut current, r + 1, digits[old_digit as usize][dir as usize]);
    let next_dir = adjustments[old_digit as usize][dir as usize];
    if next_dir == Direction::Center {
      break;
    }
    dir = next_dir;
    r -= 1;
  }

  let new_base_cell = _get_base_cell(current);
  if _is_base_cell_pentagon(new_base_cell) {
    let mut already_adjusted_k = false;

    if _h3_leading_non_zero_digit(current) == Direction::KAxes {
      if old_base_cell != new_base_cell {
        // entered the deleted sub-sequence from a neighboring base cell
        let old_face = _base_cell_home(old_base_cell).map_or(-1, |f| f.face);
        current = if _base_cell_is_cw_offset(new_base_cell, old_face) {
          _h3_rotate60_cw(current)
        } else {
          _h3_rotate60_ccw(current)
        };
        already_adjusted_k = true;
      } else {
        match old_leading_digit {
          Direction::JkAxes => {
            current = _h3_rotate60_ccw(current);
            rotations += 1;
          }
          Direction::IkAxes => {
            current = _h3_rotate60_cw(current);
            rotations += 5;
          }
          _ => return Err(H3Error::PentagonDistortion),
        }
      }
    }

    for _ in 0..new_rotations {
      current = _h3_rotate_pent60_ccw(current);
    }

    if old_base_cell != new_base_cell {
      if _is_base_cell_polar_pentagon(new_base_cell) {
        if !POLAR_NEIGHBOR_EXCEPTIONS.contains(&old_base_cell)
          && _h3_leading_non_zero_digit(current) != Direction::JkAxes
        {
          rotations += 1;
        }
      } else if _h3_leading_non_zero_digit(current) == Direction::IkAxes && !already_adjusted_k {
        rotations += 1;
      }
    }
  } else {
    for _ in 0..new_rotations {
      current = _h3_rotate60_ccw(current);
    }
  }

  if old_base_cell != new_base_cell {
    trace!(old_base_cell, new_base_cell, new_rotations, "neighbor crossed base cells");
  }
  Ok((current, (rotations + new_rotations) % 6))
}

/// Direction from `origin` to an adjacent `destination`; `Center` for the
/// same cell and `InvalidDigit` when they are not neighbors.
pub(crate) fn direction_for_neighbor(origin: H3Index, destination: H3Index) -> Direction {
  if origin == destination {
    return Direction::Center;
  }
  // pentagons have no K neighbor
  let first = usize::from(is_pentagon(origin));
  Direction::NEIGHBORS[first..]
    .iter()
    .copied()
    .find(|dir| matches!(h3_neighbor_rotations(origin, *dir, 0), Ok((n, _)) if n == destination))
    .unwrap_or(Direction::InvalidDigit)
}

/// Whether two distinct cells share an edge.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `ResolutionMismatch` for cells of
/// different resolution.
pub fn are_neighbor_cells(origin: H3Index, destination: H3Index) -> Result<bool, H3Error> {
  _check_cell(origin)?;
  _check_cell(destination)?;
  if origin == destination {
    return Ok(false);
  }
  if _get_resolution(origin) != _get_resolution(destination) {
    return Err(H3Error::ResolutionMismatch);
  }
  Ok(direction_for_neighbor(origin, destination) != Direction::InvalidDigit)
}
