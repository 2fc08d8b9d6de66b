//! Straight line of cells between two cells.

use crate::coords::ijk::{cube_to_ijk, ijk_distance, ijk_to_cube};
use crate::error::H3Error;
use crate::local_ij::local_ijk_to_cell;
use crate::traversal::distance::_shared_frame;
use crate::types::{CoordIJK, H3Index};

/// Rounds fractional cube coordinates to the nearest cell, keeping `i + j + k == 0`.
fn _cube_round(i: f64, j: f64, k: f64) -> CoordIJK {
  let mut ri = i.round() as i32;
  let mut rj = j.round() as i32;
  let mut rk = k.round() as i32;

  let i_diff = (f64::from(ri) - i).abs();
  let j_diff = (f64::from(rj) - j).abs();
  let k_diff = (f64::from(rk) - k).abs();

  // recompute the component with the largest rounding error
  if i_diff > j_diff && i_diff > k_diff {
    ri = -rj - rk;
  } else if j_diff > k_diff {
    rj = -ri - rk;
  } else {
    rk = -ri - rj;
  }
  CoordIJK::new(ri, rj, rk)
}

/// Number of cells on the line from `start` to `end`, both included.
///
/// # Errors
/// Same as [`grid_path_cells`].
pub fn grid_path_cells_size(start: H3Index, end: H3Index) -> Result<i64, H3Error> {
  crate::traversal::distance::grid_distance(start, end).map(|d| d + 1)
}

/// Cells on a straight line from `start` to `end`, both included. Each cell
/// is a neighbor of the one before it.
///
/// The line is drawn in `start`'s local frame, so it is not guaranteed to be
/// the same as the line from `end` back to `start`.
///
/// # Errors
/// As [`grid_distance`](crate::traversal::grid_distance), plus
/// `PentagonDistortion` when the line runs through a pentagon's deleted sub-sequence.
pub fn grid_path_cells(start: H3Index, end: H3Index) -> Result<Vec<H3Index>, H3Error> {
  let (mut start_ijk, mut end_ijk) = _shared_frame(start, end)?;
  let distance = ijk_distance(&start_ijk, &end_ijk);

  ijk_to_cube(&mut start_ijk);
  ijk_to_cube(&mut end_ijk);

  let step = |a: i32, b: i32| {
    if distance == 0 {
      0.0
    } else {
      f64::from(b - a) / f64::from(distance)
    }
  };
  let (i_step, j_step, k_step) = (
    step(start_ijk.i, end_ijk.i),
    step(start_ijk.j, end_ijk.j),
    step(start_ijk.k, end_ijk.k),
  );

  (0..=distance)
    .map(|n| {
      let n = f64::from(n);
      let mut current = _cube_round(
        f64::from(start_ijk.i) + i_step * n,
        f64::from(start_ijk.j) + j_step * n,
        f64::from(start_ijk.k) + k_step * n,
      );
      cube_to_ijk(&mut current);
      local_ijk_to_cell(start, &current)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::traversal::grid_disk::grid_ring;
  use crate::traversal::neighbors::are_neighbor_cells;

  const SF: H3Index = H3Index::new(0x8928308280fffff);

  #[test]
  fn test_cube_round_keeps_sum_zero() {
    for (i, j, k) in [(0.4, -0.2, -0.2), (1.5, -0.5, -1.0), (-2.6, 1.3, 1.3), (0.0, 0.0, 0.0)] {
      let c = _cube_round(i, j, k);
      assert_eq!(c.i + c.j + c.k, 0, "({i}, {j}, {k})");
    }
    assert_eq!(_cube_round(0.9, -0.45, -0.45), CoordIJK::new(1, 0, -1));
  }

  #[test]
  fn test_path_to_self() {
    assert_eq!(grid_path_cells(SF, SF), Ok(vec![SF]));
    assert_eq!(grid_path_cells_size(SF, SF), Ok(1));
  }

  #[test]
  fn test_path_is_connected() {
    for end in grid_ring(SF, 4).unwrap() {
      let path = grid_path_cells(SF, end).unwrap();
      assert_eq!(path.len() as i64, grid_path_cells_size(SF, end).unwrap());
      assert_eq!(path.len(), 5);
      assert_eq!(path.first(), Some(&SF));
      assert_eq!(path.last(), Some(&end));
      for pair in path.windows(2) {
        assert_eq!(are_neighbor_cells(pair[0], pair[1]), Ok(true), "{} {}", pair[0], pair[1]);
      }
    }
  }

  #[test]
  fn test_path_errors() {
    assert_eq!(grid_path_cells(SF, H3Index::new(0)), Err(H3Error::InvalidIndex));
  }
}
