use crate::coords::ijk::ijk_distance;
use crate::error::H3Error;
use crate::h3_index::{_check_cell, _get_resolution};
use crate::local_ij::cell_to_local_ijk;
use crate::types::{CoordIJK, H3Index};

/// Local IJK coordinates of both cells in `origin`'s frame.
pub(crate) fn _shared_frame(origin: H3Index, destination: H3Index) -> Result<(CoordIJK, CoordIJK), H3Error> {
  _check_cell(origin)?;
  _check_cell(destination)?;
  if _get_resolution(origin) != _get_resolution(destination) {
    return Err(H3Error::ResolutionMismatch);
  }
  let unfold = |h| {
    cell_to_local_ijk(origin, h).map_err(|e| match e {
      H3Error::PentagonDistortion => H3Error::IncompatibleCells,
      other => other,
    })
  };
  Ok((unfold(origin)?, unfold(destination)?))
}

/// Number of grid steps between two cells.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `ResolutionMismatch` for different
/// resolutions, `IncompatibleCells` when the cells are too far apart to share
/// a local frame or the frame would cross pentagon distortion.
pub fn grid_distance(origin: H3Index, destination: H3Index) -> Result<i64, H3Error> {
  let (a, b) = _shared_frame(origin, destination)?;
  Ok(i64::from(ijk_distance(&a, &b)))
}
