//! Directed edges: an origin cell plus the direction of one of its neighbors,
//! packed into the reserved bits of an index in edge mode.

use crate::base_cells::{
  _base_cell_home, _base_cell_to_ccwrot60, _is_base_cell_pentagon, _is_base_cell_polar_pentagon,
  _pentagon_direction_face,
};
use crate::constants::{H3_CELL_MODE, H3_DIRECTEDEDGE_MODE, NUM_HEX_VERTS, NUM_PENT_VERTS};
use crate::coords::face_ijk::{_face_ijk_pent_to_cell_boundary, _face_ijk_to_cell_boundary};
use crate::error::H3Error;
use crate::h3_index::{
  _check_cell, _get_base_cell, _get_mode, _get_reserved_bits, _get_resolution, _h3_leading_non_zero_digit,
  _h3_to_face_ijk, _set_mode, _set_reserved_bits, is_pentagon, is_valid_cell,
};
use crate::traversal::neighbors::{direction_for_neighbor, h3_neighbor_rotations};
use crate::types::{CellBoundary, Direction, H3Index};

/// First vertex of the edge shared with the neighbor in each direction, by digit.
const DIRECTION_TO_VERTEX_NUM_HEX: [usize; 7] = [usize::MAX, 3, 1, 2, 5, 4, 0];
const DIRECTION_TO_VERTEX_NUM_PENT: [usize; 7] = [usize::MAX, usize::MAX, 1, 2, 4, 3, 0];

/// Counter-clockwise rotations between a cell's vertex numbering and its base cell frame.
fn _vertex_rotations(cell: H3Index) -> Result<i32, H3Error> {
  let fijk = _h3_to_face_ijk(cell)?;
  let base_cell = _get_base_cell(cell);
  let home_face = _base_cell_home(base_cell).ok_or(H3Error::InvalidIndex)?.face;
  let mut ccw_rot60 = _base_cell_to_ccwrot60(base_cell, fijk.face).ok_or(H3Error::InvalidIndex)?;

  if _is_base_cell_pentagon(base_cell) {
    let ik_face = _pentagon_direction_face(base_cell, Direction::IkAxes);
    let jk_face = _pentagon_direction_face(base_cell, Direction::JkAxes);

    if fijk.face != home_face && (_is_base_cell_polar_pentagon(base_cell) || Some(fijk.face) == ik_face) {
      ccw_rot60 = (ccw_rot60 + 1) % 6;
    }

    // crossing the deleted sub-sequence
    match _h3_leading_non_zero_digit(cell) {
      Direction::JkAxes if Some(fijk.face) == ik_face => ccw_rot60 = (ccw_rot60 + 5) % 6,
      Direction::IkAxes if Some(fijk.face) == jk_face => ccw_rot60 = (ccw_rot60 + 1) % 6,
      _ => {}
    }
  }
  Ok(ccw_rot60)
}

/// Topological vertex at the start of the edge from `origin` in direction `dir`.
fn _vertex_num_for_direction(origin: H3Index, dir: Direction) -> Result<usize, H3Error> {
  let pentagon = is_pentagon(origin);
  if dir == Direction::Center || dir == Direction::InvalidDigit || (pentagon && dir == Direction::KAxes) {
    return Err(H3Error::InvalidDirectedEdge);
  }
  let rotations = _vertex_rotations(origin)? as usize;
  Ok(if pentagon {
    (DIRECTION_TO_VERTEX_NUM_PENT[dir as usize] + NUM_PENT_VERTS - rotations) % NUM_PENT_VERTS
  } else {
    (DIRECTION_TO_VERTEX_NUM_HEX[dir as usize] + NUM_HEX_VERTS - rotations) % NUM_HEX_VERTS
  })
}

fn _edge_direction(edge: H3Index) -> Direction {
  Direction::from_bits(u64::from(_get_reserved_bits(edge)))
}

fn _edge_origin_unchecked(edge: H3Index) -> H3Index {
  let mut origin = edge;
  _set_mode(&mut origin, H3_CELL_MODE);
  _set_reserved_bits(&mut origin, 0);
  origin
}

/// Whether `edge` is a well formed directed edge from a valid cell.
#[must_use]
pub fn is_valid_directed_edge(edge: H3Index) -> bool {
  if _get_mode(edge) != H3_DIRECTEDEDGE_MODE {
    return false;
  }
  let dir = _edge_direction(edge);
  if dir == Direction::Center || dir == Direction::InvalidDigit {
    return false;
  }
  let origin = _edge_origin_unchecked(edge);
  if is_pentagon(origin) && dir == Direction::KAxes {
    return false;
  }
  is_valid_cell(origin)
}

fn _check_edge(edge: H3Index) -> Result<(), H3Error> {
  if is_valid_directed_edge(edge) {
    Ok(())
  } else {
    Err(H3Error::InvalidDirectedEdge)
  }
}

/// The edge from `origin` to the adjacent cell `destination`.
///
/// # Errors
/// `InvalidIndex` for an invalid cell, `ResolutionMismatch` for different
/// resolutions, `NotNeighbors` when the cells do not share an edge.
pub fn cells_to_directed_edge(origin: H3Index, destination: H3Index) -> Result<H3Index, H3Error> {
  _check_cell(origin)?;
  _check_cell(destination)?;
  if _get_resolution(origin) != _get_resolution(destination) {
    return Err(H3Error::ResolutionMismatch);
  }
  let dir = direction_for_neighbor(origin, destination);
  if dir == Direction::Center || dir == Direction::InvalidDigit {
    return Err(H3Error::NotNeighbors);
  }
  let mut edge = origin;
  _set_mode(&mut edge, H3_DIRECTEDEDGE_MODE);
  _set_reserved_bits(&mut edge, dir as u8);
  Ok(edge)
}

/// Origin cell of a directed edge.
///
/// # Errors
/// `InvalidDirectedEdge` for anything but a valid edge.
pub fn get_directed_edge_origin(edge: H3Index) -> Result<H3Index, H3Error> {
  _check_edge(edge)?;
  Ok(_edge_origin_unchecked(edge))
}

/// Destination cell of a directed edge.
///
/// # Errors
/// `InvalidDirectedEdge` for anything but a valid edge.
pub fn get_directed_edge_destination(edge: H3Index) -> Result<H3Index, H3Error> {
  let origin = get_directed_edge_origin(edge)?;
  Ok(h3_neighbor_rotations(origin, _edge_direction(edge), 0)?.0)
}

/// Origin and destination of a directed edge.
///
/// # Errors
/// `InvalidDirectedEdge` for anything but a valid edge.
pub fn directed_edge_to_cells(edge: H3Index) -> Result<(H3Index, H3Index), H3Error> {
  Ok((get_directed_edge_origin(edge)?, get_directed_edge_destination(edge)?))
}

/// Every edge leaving `origin`: six for a hexagon, five for a pentagon.
///
/// # Errors
/// `InvalidIndex` for an invalid cell.
pub fn origin_to_directed_edges(origin: H3Index) -> Result<Vec<H3Index>, H3Error> {
  _check_cell(origin)?;
  let first = usize::from(is_pentagon(origin));
  Ok(
    Direction::NEIGHBORS[first..]
      .iter()
      .map(|dir| {
        let mut edge = origin;
        _set_mode(&mut edge, H3_DIRECTEDEDGE_MODE);
        _set_reserved_bits(&mut edge, *dir as u8);
        edge
      })
      .collect(),
  )
}

/// Geographic line of a directed edge: its two end vertices, plus a distortion
/// vertex where a Class III edge crosses an icosahedron edge.
///
/// # Errors
/// `InvalidDirectedEdge` for anything but a valid edge.
pub fn directed_edge_to_boundary(edge: H3Index) -> Result<CellBoundary, H3Error> {
  let origin = get_directed_edge_origin(edge)?;
  let start = _vertex_num_for_direction(origin, _edge_direction(edge))?;
  let fijk = _h3_to_face_ijk(origin)?;
  let res = _get_resolution(origin);
  if is_pentagon(origin) {
    _face_ijk_pent_to_cell_boundary(&fijk, res, start, 2)
  } else {
    Ok(_face_ijk_to_cell_boundary(&fijk, res, start, 2))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::get_pentagons;
  use crate::indexing::cell_to_boundary;
  use crate::latlng::geo_almost_equal_threshold;
  use crate::traversal::grid_disk::grid_ring;
  use crate::types::{LatLng, H3_NULL};

  const SF: H3Index = H3Index::new(0x8928308280fffff);

  fn contains(verts: &[LatLng], p: &LatLng) -> bool {
    verts.iter().any(|v| geo_almost_equal_threshold(v, p, 1e-9))
  }

  #[test]
  fn test_edge_round_trip() {
    for neighbor in grid_ring(SF, 1).unwrap() {
      let edge = cells_to_directed_edge(SF, neighbor).unwrap();
      assert!(is_valid_directed_edge(edge));
      assert!(!is_valid_cell(edge));
      assert_eq!(directed_edge_to_cells(edge), Ok((SF, neighbor)));
    }
  }

  #[test]
  fn test_not_neighbors() {
    let far = grid_ring(SF, 2).unwrap()[0];
    assert_eq!(cells_to_directed_edge(SF, far), Err(H3Error::NotNeighbors));
    assert_eq!(cells_to_directed_edge(SF, SF), Err(H3Error::NotNeighbors));
    assert_eq!(cells_to_directed_edge(SF, H3_NULL), Err(H3Error::InvalidIndex));
  }

  #[test]
  fn test_invalid_edges() {
    assert!(!is_valid_directed_edge(SF));
    assert_eq!(get_directed_edge_origin(SF), Err(H3Error::InvalidDirectedEdge));

    let mut center = SF;
    _set_mode(&mut center, H3_DIRECTEDEDGE_MODE);
    assert!(!is_valid_directed_edge(center), "center direction");

    let pent = get_pentagons(5).unwrap()[0];
    let mut k_edge = pent;
    _set_mode(&mut k_edge, H3_DIRECTEDEDGE_MODE);
    _set_reserved_bits(&mut k_edge, Direction::KAxes as u8);
    assert!(!is_valid_directed_edge(k_edge), "deleted pentagon direction");
  }

  #[test]
  fn test_origin_to_directed_edges() {
    let edges = origin_to_directed_edges(SF).unwrap();
    assert_eq!(edges.len(), 6);
    for edge in &edges {
      assert!(is_valid_directed_edge(*edge));
      assert_eq!(get_directed_edge_origin(*edge), Ok(SF));
    }

    for pent in get_pentagons(3).unwrap() {
      let edges = origin_to_directed_edges(pent).unwrap();
      assert_eq!(edges.len(), 5);
      for edge in edges {
        let dest = get_directed_edge_destination(edge).unwrap();
        assert_eq!(cells_to_directed_edge(pent, dest), Ok(edge));
      }
    }
  }

  #[test]
  fn test_edge_boundary_is_shared() {
    let origin_verts = cell_to_boundary(SF).unwrap();
    for edge in origin_to_directed_edges(SF).unwrap() {
      let dest = get_directed_edge_destination(edge).unwrap();
      let dest_verts = cell_to_boundary(dest).unwrap();
      let line = directed_edge_to_boundary(edge).unwrap();
      assert_eq!(line.num_verts, 2);
      for v in line.vertices() {
        assert!(contains(origin_verts.vertices(), v));
        assert!(contains(dest_verts.vertices(), v));
      }
    }
  }

  #[test]
  fn test_pentagon_edge_boundaries() {
    for res in [2, 3] {
      for pent in get_pentagons(res).unwrap() {
        let cell_verts = cell_to_boundary(pent).unwrap();
        for edge in origin_to_directed_edges(pent).unwrap() {
          let line = directed_edge_to_boundary(edge).unwrap();
          assert!(line.num_verts >= 2);
          for v in line.vertices() {
            assert!(contains(cell_verts.vertices(), v), "{pent} res {res}");
          }
        }
      }
    }
  }
}
