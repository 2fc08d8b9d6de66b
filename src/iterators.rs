//! Lazy enumeration of the descendants of a cell.

use crate::constants::{H3_PER_DIGIT_OFFSET, MAX_H3_RES};
use crate::error::H3Error;
use crate::h3_index::{_check_cell, _get_index_digit, _get_resolution, _set_index_digit, _set_resolution, is_pentagon};
use crate::types::{Direction, H3Index, H3_NULL};

/// Descendants of a cell at a finer resolution, in ascending digit order.
///
/// Pentagon parents skip every child whose first non-zero digit would be K.
#[derive(Debug, Clone)]
pub struct CellChildren {
  h: H3Index,
  parent_res: i32,
  /// Finest digit still subject to the pentagon K skip; moves coarser as
  /// the walk leaves the pentagon's center line.
  skip_digit: i32,
}

impl CellChildren {
  fn exhausted() -> Self {
    Self {
      h: H3_NULL,
      parent_res: -1,
      skip_digit: -1,
    }
  }

  /// Adds one to the digit at `res`, carrying into coarser digits on overflow.
  #[inline]
  fn increment_digit(&mut self, res: i32) {
    let step = 1u64 << (((MAX_H3_RES - res) as u32) * H3_PER_DIGIT_OFFSET);
    self.h = H3Index::new(self.h.bits().wrapping_add(step));
  }

  fn step(&mut self) {
    let child_res = _get_resolution(self.h);
    self.increment_digit(child_res);

    let mut r = child_res;
    loop {
      if r == self.parent_res {
        *self = Self::exhausted();
        return;
      }
      let digit = _get_index_digit(self.h, r);
      if r == self.skip_digit && digit == Direction::KAxes {
        self.increment_digit(r);
        self.skip_digit -= 1;
        return;
      }
      if digit != Direction::InvalidDigit {
        return;
      }
      // 7 rolls over to 0 and carries
      self.increment_digit(r);
      r -= 1;
    }
  }
}

impl Iterator for CellChildren {
  type Item = H3Index;

  fn next(&mut self) -> Option<H3Index> {
    if self.h == H3_NULL {
      return None;
    }
    let current = self.h;
    self.step();
    Some(current)
  }
}

impl std::iter::FusedIterator for CellChildren {}

/// Lazily enumerates the children of `parent` at `child_res`.
///
/// # Errors
/// `InvalidIndex` for an invalid parent, `InvalidResolution` when `child_res`
/// is coarser than the parent or above 15.
pub fn children_iter(parent: H3Index, child_res: i32) -> Result<CellChildren, H3Error> {
  _check_cell(parent)?;
  let parent_res = _get_resolution(parent);
  if child_res < parent_res || child_res > MAX_H3_RES {
    return Err(H3Error::InvalidResolution);
  }
  let mut h = parent;
  _set_resolution(&mut h, child_res);
  for r in parent_res + 1..=child_res {
    _set_index_digit(&mut h, r, Direction::Center);
  }

  Ok(CellChildren {
    h,
    parent_res,
    skip_digit: if is_pentagon(parent) { child_res } else { -1 },
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::{_set_h3_index, is_valid_cell};
  use std::collections::HashSet;

  #[test]
  fn test_invalid_parent() {
    assert_eq!(children_iter(H3_NULL, 3).unwrap_err(), H3Error::InvalidIndex);
    let h = _set_h3_index(5, 20, Direction::JAxes);
    assert_eq!(children_iter(h, 4).unwrap_err(), H3Error::InvalidResolution);
    assert_eq!(children_iter(h, 16).unwrap_err(), H3Error::InvalidResolution);
  }

  #[test]
  fn test_self_is_only_child_at_same_res() {
    let h = _set_h3_index(5, 20, Direction::JAxes);
    assert_eq!(children_iter(h, 5).unwrap().collect::<Vec<_>>(), vec![h]);
  }

  #[test]
  fn test_hexagon_children() {
    let parent = _set_h3_index(3, 20, Direction::IAxes);
    let children: Vec<H3Index> = children_iter(parent, 5).unwrap().collect();
    assert_eq!(children.len(), 49);
    assert!(children.windows(2).all(|w| w[0] < w[1]), "ascending order");
    assert!(children.iter().all(|c| is_valid_cell(*c) && _get_resolution(*c) == 5));
    let mut first = _set_h3_index(5, 20, Direction::IAxes);
    _set_index_digit(&mut first, 4, Direction::Center);
    _set_index_digit(&mut first, 5, Direction::Center);
    assert_eq!(children[0], first);
  }

  #[test]
  fn test_pentagon_children() {
    let parent = _set_h3_index(0, 4, Direction::Center);
    let children: Vec<H3Index> = children_iter(parent, 2).unwrap().collect();
    // 1 + 5 * (49 - 1) / 6
    assert_eq!(children.len(), 41);
    let unique: HashSet<H3Index> = children.iter().copied().collect();
    assert_eq!(unique.len(), children.len());
    assert!(children.iter().all(|c| is_valid_cell(*c)));
  }

  #[test]
  fn test_max_resolution_children() {
    let parent = _set_h3_index(14, 117, Direction::Center);
    let children: Vec<H3Index> = children_iter(parent, 15).unwrap().collect();
    assert_eq!(children.len(), 6);
  }
}
