use crate::constants::{NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::face_ijk::{_face_ijk_pent_to_cell_boundary, _face_ijk_to_cell_boundary, _face_ijk_to_geo};
use crate::error::H3Error;
use crate::h3_index::{_check_cell, _get_resolution, _h3_to_face_ijk, is_pentagon};
use crate::types::{CellBoundary, H3Index, LatLng};

/// Center of a cell.
///
/// # Errors
/// `InvalidIndex` for anything but a valid cell.
pub fn cell_to_lat_lng(cell: H3Index) -> Result<LatLng, H3Error> {
  _check_cell(cell)?;
  let fijk = _h3_to_face_ijk(cell)?;
  Ok(_face_ijk_to_geo(&fijk, _get_resolution(cell)))
}

/// Boundary of a cell, counter-clockwise.
///
/// # Errors
/// `InvalidIndex` for anything but a valid cell.
pub fn cell_to_boundary(cell: H3Index) -> Result<CellBoundary, H3Error> {
  _check_cell(cell)?;
  let fijk = _h3_to_face_ijk(cell)?;
  let res = _get_resolution(cell);
  if is_pentagon(cell) {
    _face_ijk_pent_to_cell_boundary(&fijk, res, 0, NUM_PENT_VERTS)
  } else {
    Ok(_face_ijk_to_cell_boundary(&fijk, res, 0, NUM_HEX_VERTS))
  }
}
