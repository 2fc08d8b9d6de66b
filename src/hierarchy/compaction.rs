use std::collections::HashMap;

use tracing::trace;

use crate::constants::MAX_H3_RES;
use crate::error::H3Error;
use crate::h3_index::{_check_cell, _get_resolution, is_pentagon};
use crate::hierarchy::parent_child::{cell_to_children_size, cell_to_parent};
use crate::iterators::children_iter;
use crate::types::H3Index;

fn _check_uncompact_target(cell: H3Index, res: i32) -> Result<(), H3Error> {
  _check_cell(cell)?;
  if _get_resolution(cell) > res {
    return Err(H3Error::ResolutionMismatch);
  }
  Ok(())
}

/// Number of cells [`uncompact_cells`] would return.
///
/// # Errors
/// Same as [`uncompact_cells`].
pub fn uncompact_cells_size(compacted: &[H3Index], res: i32) -> Result<i64, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::InvalidResolution);
  }
  compacted.iter().try_fold(0i64, |total, &cell| {
    _check_uncompact_target(cell, res)?;
    Ok(total.saturating_add(cell_to_children_size(cell, res)?))
  })
}

/// Expands every cell of a compacted set to its descendants at `res`.
///
/// # Errors
/// `InvalidResolution` for `res` outside `0..=15`, `InvalidIndex` for an invalid
/// cell, `ResolutionMismatch` for a cell finer than `res`.
pub fn uncompact_cells(compacted: &[H3Index], res: i32) -> Result<Vec<H3Index>, H3Error> {
  let size = uncompact_cells_size(compacted, res)?;
  let mut out = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
  for &cell in compacted {
    out.extend(children_iter(cell, res)?);
  }
  Ok(out)
}

/// Replaces every complete family of siblings by its parent, repeatedly,
/// until no family is complete.
///
/// The input must be a set of distinct cells at one resolution. The output is
/// sorted within each resolution, finest resolutions first.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `ResolutionMismatch` for mixed
/// resolutions, `DuplicateInput` when a cell appears twice.
pub fn compact_cells(cells: &[H3Index]) -> Result<Vec<H3Index>, H3Error> {
  let Some(&first) = cells.first() else {
    return Ok(Vec::new());
  };
  _check_cell(first)?;
  let res = _get_resolution(first);

  let mut current = cells.to_vec();
  current.sort_unstable();
  for pair in current.windows(2) {
    if pair[0] == pair[1] {
      return Err(H3Error::DuplicateInput);
    }
  }
  for &cell in &current {
    _check_cell(cell)?;
    if _get_resolution(cell) != res {
      return Err(H3Error::ResolutionMismatch);
    }
  }

  let mut out = Vec::with_capacity(current.len());
  for r in (1..=res).rev() {
    let mut siblings: HashMap<H3Index, usize> = HashMap::new();
    for &cell in &current {
      *siblings.entry(cell_to_parent(cell, r - 1)?).or_default() += 1;
    }

    let mut parents = Vec::new();
    for &cell in &current {
      let parent = cell_to_parent(cell, r - 1)?;
      let family_size = if is_pentagon(parent) { 6 } else { 7 };
      if siblings.get(&parent) == Some(&family_size) {
        parents.push(parent);
      } else {
        out.push(cell);
      }
    }
    parents.dedup();
    trace!(res = r, emitted = out.len(), parents = parents.len(), "compaction round");

    if parents.is_empty() {
      return Ok(out);
    }
    current = parents;
  }
  out.extend(current);
  Ok(out)
}
