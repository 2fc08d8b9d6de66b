//! Cells within `k` grid steps of an origin.

use std::collections::{HashSet, VecDeque};
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::H3Error;
use crate::h3_index::_check_cell;
use crate::traversal::neighbors::h3_neighbor_rotations;
use crate::types::{Direction, H3Index};

/// Number of cells within `k` steps of a hexagon: `3k(k+1) + 1`.
///
/// # Errors
/// `InvalidDomain` for negative `k`.
pub fn max_grid_disk_size(k: i32) -> Result<i64, H3Error> {
  if k < 0 {
    return Err(H3Error::InvalidDomain);
  }
  let k = i64::from(k);
  Ok(3 * k * (k + 1) + 1)
}

/// Breadth-first walk outward from an origin, yielding each cell once with
/// its grid distance. Cells come out ring by ring.
///
/// A direction that would step into a pentagon's deleted sub-sequence has no
/// neighbor and is skipped. Any other failure is yielded once and ends the walk.
#[derive(Debug, Clone)]
pub struct GridDisk {
  k: u32,
  seen: HashSet<H3Index>,
  frontier: VecDeque<(H3Index, u32)>,
}

impl GridDisk {
  fn expand(&mut self, cell: H3Index, distance: u32) -> Result<(), H3Error> {
    for dir in Direction::NEIGHBORS {
      match h3_neighbor_rotations(cell, dir, 0) {
        Ok((neighbor, _)) => {
          if self.seen.insert(neighbor) {
            self.frontier.push_back((neighbor, distance + 1));
          }
        }
        Err(H3Error::PentagonDistortion) => {
          debug!(%cell, ?dir, "no neighbor across deleted pentagon direction");
        }
        Err(e) => return Err(e),
      }
    }
    Ok(())
  }
}

impl Iterator for GridDisk {
  type Item = Result<(H3Index, u32), H3Error>;

  fn next(&mut self) -> Option<Self::Item> {
    let (cell, distance) = self.frontier.pop_front()?;
    if distance < self.k {
      if let Err(e) = self.expand(cell, distance) {
        self.frontier.clear();
        return Some(Err(e));
      }
    }
    Some(Ok((cell, distance)))
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = max_grid_disk_size(self.k as i32).map_or(usize::MAX, |n| n as usize);
    (self.frontier.len(), Some(remaining))
  }
}

impl FusedIterator for GridDisk {}

/// Lazily walks the cells within `k` steps of `origin`.
///
/// # Errors
/// `InvalidIndex` for an invalid origin, `InvalidDomain` for negative `k`.
pub fn grid_disk_iter(origin: H3Index, k: i32) -> Result<GridDisk, H3Error> {
  _check_cell(origin)?;
  let k = u32::try_from(k).map_err(|_| H3Error::InvalidDomain)?;
  Ok(GridDisk {
    k,
    seen: HashSet::from([origin]),
    frontier: VecDeque::from([(origin, 0)]),
  })
}

/// Cells within `k` steps of `origin`, with their distances, ordered by distance.
///
/// # Errors
/// Same as [`grid_disk_iter`].
pub fn grid_disk_distances(origin: H3Index, k: i32) -> Result<Vec<(H3Index, u32)>, H3Error> {
  grid_disk_iter(origin, k)?.collect()
}

/// Cells within `k` steps of `origin`, ordered by distance. Within one ring the
/// order is unspecified.
///
/// # Errors
/// Same as [`grid_disk_iter`].
pub fn grid_disk(origin: H3Index, k: i32) -> Result<Vec<H3Index>, H3Error> {
  grid_disk_iter(origin, k)?.map(|r| r.map(|(cell, _)| cell)).collect()
}

/// Cells exactly `k` steps from `origin`.
///
/// # Errors
/// Same as [`grid_disk_iter`].
pub fn grid_ring(origin: H3Index, k: i32) -> Result<Vec<H3Index>, H3Error> {
  let ring = u32::try_from(k).map_err(|_| H3Error::InvalidDomain)?;
  grid_disk_iter(origin, k)?
    .filter_map(|r| match r {
      Ok((cell, d)) if d == ring => Some(Ok(cell)),
      Ok(_) => None,
      Err(e) => Some(Err(e)),
    })
    .collect()
}
