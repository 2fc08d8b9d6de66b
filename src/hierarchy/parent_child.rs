use crate::constants::MAX_H3_RES;
use crate::error::H3Error;
use crate::h3_index::{
  _check_cell, _get_index_digit, _get_resolution, _set_index_digit, _set_resolution, is_pentagon,
};
use crate::iterators::children_iter;
use crate::math::extensions::_ipow;
use crate::types::{Direction, H3Index};

/// Descendant count of a pentagon `n` levels down: the center line is a
/// pentagon at every level, everything else fans out as hexagons.
#[inline]
fn _pentagon_children_count(n: i32) -> i64 {
  let hex_count = _ipow(7, i64::from(n));
  1 + 5 * (hex_count - 1) / 6
}

/// Ancestor of `h` at `parent_res`.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `InvalidResolution` when `parent_res`
/// is negative or finer than the cell.
pub fn cell_to_parent(h: H3Index, parent_res: i32) -> Result<H3Index, H3Error> {
  _check_cell(h)?;
  let child_res = _get_resolution(h);
  if parent_res < 0 || parent_res > child_res {
    return Err(H3Error::InvalidResolution);
  }

  let mut parent = h;
  _set_resolution(&mut parent, parent_res);
  for r in parent_res + 1..=child_res {
    _set_index_digit(&mut parent, r, Direction::InvalidDigit);
  }
  Ok(parent)
}

fn _check_child_res(h: H3Index, child_res: i32) -> Result<i32, H3Error> {
  _check_cell(h)?;
  let parent_res = _get_resolution(h);
  if child_res < parent_res || child_res > MAX_H3_RES {
    return Err(H3Error::InvalidResolution);
  }
  Ok(child_res - parent_res)
}

/// Number of children of `h` at `child_res`.
///
/// # Errors
/// Same as [`cell_to_children`].
pub fn cell_to_children_size(h: H3Index, child_res: i32) -> Result<i64, H3Error> {
  let n = _check_child_res(h, child_res)?;
  if is_pentagon(h) {
    Ok(_pentagon_children_count(n))
  } else {
    Ok(_ipow(7, i64::from(n)))
  }
}

/// The child of `h` at `child_res` sharing its center.
///
/// # Errors
/// Same as [`cell_to_children`].
pub fn cell_to_center_child(h: H3Index, child_res: i32) -> Result<H3Index, H3Error> {
  _check_child_res(h, child_res)?;
  let mut child = h;
  _set_resolution(&mut child, child_res);
  for r in _get_resolution(h) + 1..=child_res {
    _set_index_digit(&mut child, r, Direction::Center);
  }
  Ok(child)
}

/// All children of `h` at `child_res`, in ascending order.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `InvalidResolution` when `child_res` is
/// coarser than the cell or above 15.
pub fn cell_to_children(h: H3Index, child_res: i32) -> Result<Vec<H3Index>, H3Error> {
  Ok(children_iter(h, child_res)?.collect())
}

/// Position of `child` within the ordered children of its ancestor at `parent_res`.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `InvalidResolution` when `parent_res` is
/// out of range or finer than the cell.
pub fn cell_to_child_pos(child: H3Index, parent_res: i32) -> Result<i64, H3Error> {
  let parent = cell_to_parent(child, parent_res)?;
  let child_res = _get_resolution(child);

  if !is_pentagon(parent) {
    return Ok(
      (parent_res + 1..=child_res)
        .map(|r| _get_index_digit(child, r) as i64 * _ipow(7, i64::from(child_res - r)))
        .sum(),
    );
  }

  let mut pos = 0;
  let mut in_pentagon = true;
  for r in parent_res + 1..=child_res {
    let raw = _get_index_digit(child, r) as i64;
    if raw == 0 {
      continue;
    }
    let hex_count = _ipow(7, i64::from(child_res - r));
    if in_pentagon {
      // skip the center subtree, then the deleted K slot
      pos += _pentagon_children_count(child_res - r) + (raw - 2) * hex_count;
      in_pentagon = false;
    } else {
      pos += raw * hex_count;
    }
  }
  Ok(pos)
}

/// The child of `parent` at `child_res` found at position `child_pos`.
///
/// # Errors
/// `InvalidResolution` for `child_res` outside `0..=15`, `ResolutionMismatch`
/// when it is coarser than the parent, `InvalidDomain` for a position out of range.
pub fn child_pos_to_cell(child_pos: i64, parent: H3Index, child_res: i32) -> Result<H3Index, H3Error> {
  if !(0..=MAX_H3_RES).contains(&child_res) {
    return Err(H3Error::InvalidResolution);
  }
  _check_cell(parent)?;
  let parent_res = _get_resolution(parent);
  if child_res < parent_res {
    return Err(H3Error::ResolutionMismatch);
  }
  let max_children = cell_to_children_size(parent, child_res)?;
  if !(0..max_children).contains(&child_pos) {
    return Err(H3Error::InvalidDomain);
  }

  let mut child = parent;
  _set_resolution(&mut child, child_res);
  let mut idx = child_pos;
  let mut in_pentagon = is_pentagon(parent);
  for r in parent_res + 1..=child_res {
    let width = _ipow(7, i64::from(child_res - r));
    let digit = if in_pentagon {
      let pentagon_width = _pentagon_children_count(child_res - r);
      if idx < pentagon_width {
        0
      } else {
        idx -= pentagon_width;
        in_pentagon = false;
        let d = idx / width + 2;
        idx %= width;
        d
      }
    } else {
      let d = idx / width;
      idx %= width;
      d
    };
    _set_index_digit(&mut child, r, Direction::from_bits(digit as u64));
  }
  Ok(child)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::{_set_h3_index, get_resolution, is_valid_cell};
  use crate::types::H3_NULL;

  #[test]
  fn test_cell_to_parent() {
    let child = H3Index::new(0x8928308280fffff);
    assert_eq!(cell_to_parent(child, 8), Ok(H3Index::new(0x8828308281fffff)));
    assert_eq!(cell_to_parent(child, 5), Ok(H3Index::new(0x85283083fffffff)));
    assert_eq!(cell_to_parent(child, 9), Ok(child));
    assert_eq!(cell_to_parent(child, 10), Err(H3Error::InvalidResolution));
    assert_eq!(cell_to_parent(child, -1), Err(H3Error::InvalidResolution));
    assert_eq!(cell_to_parent(H3_NULL, 5), Err(H3Error::InvalidIndex));
    assert_eq!(get_resolution(cell_to_parent(child, 0).unwrap()), Ok(0));
  }

  #[test]
  fn test_cell_to_children_size() {
    let hex = _set_h3_index(5, 10, Direction::Center);
    assert_eq!(cell_to_children_size(hex, 5), Ok(1));
    assert_eq!(cell_to_children_size(hex, 6), Ok(7));
    assert_eq!(cell_to_children_size(hex, 7), Ok(49));
    assert_eq!(cell_to_children_size(hex, 4), Err(H3Error::InvalidResolution));

    let pent = _set_h3_index(5, 4, Direction::Center);
    assert_eq!(cell_to_children_size(pent, 5), Ok(1));
    assert_eq!(cell_to_children_size(pent, 6), Ok(6));
    assert_eq!(cell_to_children_size(pent, 7), Ok(41));
  }

  #[test]
  fn test_children_match_size_and_parent() {
    for parent in [_set_h3_index(2, 10, Direction::JAxes), _set_h3_index(1, 24, Direction::Center)] {
      let children = cell_to_children(parent, 4).unwrap();
      assert_eq!(children.len() as i64, cell_to_children_size(parent, 4).unwrap());
      for c in &children {
        assert!(is_valid_cell(*c));
        assert_eq!(cell_to_parent(*c, _get_resolution(parent)), Ok(parent));
      }
    }
  }

  #[test]
  fn test_cell_to_center_child() {
    let hex = _set_h3_index(5, 10, Direction::IjAxes);
    assert_eq!(cell_to_center_child(hex, 5), Ok(hex));
    let center = cell_to_center_child(hex, 7).unwrap();
    assert_eq!(_get_resolution(center), 7);
    assert_eq!(_get_index_digit(center, 6), Direction::Center);
    assert_eq!(_get_index_digit(center, 7), Direction::Center);
    assert_eq!(cell_to_parent(center, 5), Ok(hex));

    let pent = _set_h3_index(2, 4, Direction::Center);
    assert!(is_pentagon(cell_to_center_child(pent, 4).unwrap()));
    assert_eq!(cell_to_center_child(pent, 1), Err(H3Error::InvalidResolution));
  }

  #[test]
  fn test_child_pos_round_trip() {
    for parent in [_set_h3_index(2, 10, Direction::Center), _set_h3_index(1, 4, Direction::Center)] {
      let parent_res = _get_resolution(parent);
      for (pos, child) in cell_to_children(parent, parent_res + 2).unwrap().into_iter().enumerate() {
        assert_eq!(cell_to_child_pos(child, parent_res), Ok(pos as i64), "{child}");
        assert_eq!(child_pos_to_cell(pos as i64, parent, parent_res + 2), Ok(child));
      }
    }
  }

  #[test]
  fn test_child_pos_errors() {
    let child = _set_h3_index(8, 20, Direction::JAxes);
    assert_eq!(cell_to_child_pos(child, -1), Err(H3Error::InvalidResolution));
    assert_eq!(cell_to_child_pos(child, 9), Err(H3Error::InvalidResolution));

    let parent = _set_h3_index(5, 20, Direction::JAxes);
    assert_eq!(child_pos_to_cell(0, parent, 4), Err(H3Error::ResolutionMismatch));
    assert_eq!(child_pos_to_cell(0, parent, 16), Err(H3Error::InvalidResolution));
    assert_eq!(child_pos_to_cell(-1, parent, 6), Err(H3Error::InvalidDomain));
    assert_eq!(child_pos_to_cell(7, parent, 6), Err(H3Error::InvalidDomain));
    assert_eq!(child_pos_to_cell(6, parent, 6).map(|c| _get_index_digit(c, 6)), Ok(Direction::IjAxes));
  }
}
