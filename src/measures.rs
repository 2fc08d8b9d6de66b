//! Cell areas, edge lengths and the published per-resolution averages.

use crate::constants::{EARTH_RADIUS_KM, MAX_H3_RES};
use crate::error::H3Error;
use crate::indexing::{cell_to_boundary, cell_to_lat_lng};
use crate::latlng::great_circle_distance_rads;
use crate::traversal::directed_edge::directed_edge_to_boundary;
use crate::types::{H3Index, LatLng};

const NUM_RES: usize = (MAX_H3_RES + 1) as usize;

#[rustfmt::skip]
const HEXAGON_AREA_AVG_KM2: [f64; NUM_RES] = [
  4.357_449_416_078_383e+06, 6.097_884_417_941_332e+05, 8.680_178_039_899_720e+04,
  1.239_343_465_508_816e+04, 1.770_347_654_491_307e+03, 2.529_038_581_819_449e+02,
  3.612_906_216_441_245e+01, 5.161_293_359_717_191e+00, 7.373_275_975_944_177e-01,
  1.053_325_134_272_067e-01, 1.504_750_190_766_435e-02, 2.149_643_129_451_879e-03,
  3.070_918_756_316_060e-04, 4.387_026_794_728_296e-05, 6.267_181_135_324_313e-06,
  8.953_115_907_605_790e-07,
];

#[rustfmt::skip]
const HEXAGON_AREA_AVG_M2: [f64; NUM_RES] = [
  4.357_449_416_078_390e+12, 6.097_884_417_941_339e+11, 8.680_178_039_899_731e+10,
  1.239_343_465_508_818e+10, 1.770_347_654_491_309e+09, 2.529_038_581_819_452e+08,
  3.612_906_216_441_250e+07, 5.161_293_359_717_198e+06, 7.373_275_975_944_188e+05,
  1.053_325_134_272_069e+05, 1.504_750_190_766_437e+04, 2.149_643_129_451_882e+03,
  3.070_918_756_316_063e+02, 4.387_026_794_728_301e+01, 6.267_181_135_324_322,
  8.953_115_907_605_802e-01,
];

#[rustfmt::skip]
const HEXAGON_EDGE_LENGTH_AVG_KM: [f64; NUM_RES] = [
  1281.256011, 483.0568391, 182.5129565, 68.97922179, 26.07175968, 9.854090990,
  3.724532667, 1.406475763, 0.531414010, 0.200786148, 0.075863783, 0.028663897,
  0.010830188, 0.004092010, 0.001546100, 0.000584169,
];

#[rustfmt::skip]
const HEXAGON_EDGE_LENGTH_AVG_M: [f64; NUM_RES] = [
  1281256.011, 483056.8391, 182512.9565, 68979.22179, 26071.75968, 9854.090990,
  3724.532667, 1406.475763, 531.4140101, 200.7861476, 75.86378287, 28.66389748,
  10.83018784, 4.092010473, 1.546099657, 0.584168630,
];

fn _lookup(table: &[f64; NUM_RES], res: i32) -> Result<f64, H3Error> {
  usize::try_from(res)
    .ok()
    .and_then(|r| table.get(r).copied())
    .ok_or(H3Error::InvalidResolution)
}

/// Average hexagon area at `res`, in square kilometers. Pentagons are excluded.
///
/// # Errors
/// `InvalidResolution` outside `0..=15`.
pub fn get_hexagon_area_avg_km2(res: i32) -> Result<f64, H3Error> {
  _lookup(&HEXAGON_AREA_AVG_KM2, res)
}

/// Average hexagon area at `res`, in square meters.
///
/// # Errors
/// `InvalidResolution` outside `0..=15`.
pub fn get_hexagon_area_avg_m2(res: i32) -> Result<f64, H3Error> {
  _lookup(&HEXAGON_AREA_AVG_M2, res)
}

/// Average hexagon edge length at `res`, in kilometers.
///
/// # Errors
/// `InvalidResolution` outside `0..=15`.
pub fn get_hexagon_edge_length_avg_km(res: i32) -> Result<f64, H3Error> {
  _lookup(&HEXAGON_EDGE_LENGTH_AVG_KM, res)
}

/// Average hexagon edge length at `res`, in meters.
///
/// # Errors
/// `InvalidResolution` outside `0..=15`.
pub fn get_hexagon_edge_length_avg_m(res: i32) -> Result<f64, H3Error> {
  _lookup(&HEXAGON_EDGE_LENGTH_AVG_M, res)
}

/// Spherical excess of a triangle from its side lengths (L'Huilier).
fn _triangle_edge_lengths_to_area(a: f64, b: f64, c: f64) -> f64 {
  let s = (a + b + c) / 2.0;
  let (ta, tb, tc) = ((s - a) / 2.0, (s - b) / 2.0, (s - c) / 2.0);
  let s = s / 2.0;
  4.0 * (s.tan() * ta.tan() * tb.tan() * tc.tan()).sqrt().atan()
}

fn _triangle_area(a: &LatLng, b: &LatLng, c: &LatLng) -> f64 {
  _triangle_edge_lengths_to_area(
    great_circle_distance_rads(a, b),
    great_circle_distance_rads(b, c),
    great_circle_distance_rads(c, a),
  )
}

/// Exact area of a cell on the unit sphere, in steradians.
///
/// # Errors
/// `InvalidIndex` for anything but a valid cell.
pub fn cell_area_rads2(cell: H3Index) -> Result<f64, H3Error> {
  let center = cell_to_lat_lng(cell)?;
  let boundary = cell_to_boundary(cell)?;
  let verts = boundary.vertices();
  Ok(
    (0..verts.len())
      .map(|i| _triangle_area(&verts[i], &verts[(i + 1) % verts.len()], &center))
      .sum(),
  )
}

/// Exact area of a cell, in square kilometers.
///
/// # Errors
/// `InvalidIndex` for anything but a valid cell.
pub fn cell_area_km2(cell: H3Index) -> Result<f64, H3Error> {
  Ok(cell_area_rads2(cell)? * EARTH_RADIUS_KM * EARTH_RADIUS_KM)
}

/// Exact area of a cell, in square meters.
///
/// # Errors
/// `InvalidIndex` for anything but a valid cell.
pub fn cell_area_m2(cell: H3Index) -> Result<f64, H3Error> {
  Ok(cell_area_km2(cell)? * 1_000_000.0)
}

/// Length of a directed edge along its boundary, in radians.
///
/// # Errors
/// `InvalidDirectedEdge` for anything but a valid edge.
pub fn edge_length_rads(edge: H3Index) -> Result<f64, H3Error> {
  let boundary = directed_edge_to_boundary(edge)?;
  Ok(
    boundary
      .vertices()
      .windows(2)
      .map(|w| great_circle_distance_rads(&w[0], &w[1]))
      .sum(),
  )
}

/// Length of a directed edge, in kilometers.
///
/// # Errors
/// `InvalidDirectedEdge` for anything but a valid edge.
pub fn edge_length_km(edge: H3Index) -> Result<f64, H3Error> {
  Ok(edge_length_rads(edge)? * EARTH_RADIUS_KM)
}

/// Length of a directed edge, in meters.
///
/// # Errors
/// `InvalidDirectedEdge` for anything but a valid edge.
pub fn edge_length_m(edge: H3Index) -> Result<f64, H3Error> {
  Ok(edge_length_km(edge)? * 1000.0)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::M_PI;
  use crate::h3_index::{get_pentagons, get_res0_cells};
  use crate::hierarchy::cell_to_children;
  use crate::traversal::directed_edge::origin_to_directed_edges;

  #[test]
  fn test_average_tables() {
    assert_eq!(get_hexagon_area_avg_km2(0), Ok(4.357_449_416_078_383e+06));
    assert_eq!(get_hexagon_area_avg_m2(15), Ok(8.953_115_907_605_802e-01));
    assert_eq!(get_hexagon_edge_length_avg_km(9), Ok(0.200786148));
    assert_eq!(get_hexagon_edge_length_avg_m(0), Ok(1281256.011));
    for f in [get_hexagon_area_avg_km2, get_hexagon_area_avg_m2, get_hexagon_edge_length_avg_km, get_hexagon_edge_length_avg_m] {
      assert_eq!(f(-1), Err(H3Error::InvalidResolution));
      assert_eq!(f(16), Err(H3Error::InvalidResolution));
    }
  }

  #[test]
  fn test_cell_area_known_value() {
    let cell = H3Index::new(0x85283473fffffff);
    let km2 = cell_area_km2(cell).unwrap();
    assert!((km2 - 265.0925581283).abs() < 1e-3, "{km2}");
    assert!((cell_area_m2(cell).unwrap() - km2 * 1e6).abs() < 1.0);
  }

  #[test]
  fn test_res0_areas_cover_sphere() {
    let total: f64 = get_res0_cells().into_iter().map(|c| cell_area_rads2(c).unwrap()).sum();
    assert!((total - 4.0 * M_PI).abs() < 1e-6, "{total}");
  }

  #[test]
  fn test_children_area_matches_parent() {
    let total: f64 = get_res0_cells()
      .into_iter()
      .flat_map(|c| cell_to_children(c, 1).unwrap())
      .map(|c| cell_area_rads2(c).unwrap())
      .sum();
    assert!((total - 4.0 * M_PI).abs() < 1e-6, "{total}");
  }

  #[test]
  fn test_pentagon_area_is_smaller() {
    let pent = get_pentagons(4).unwrap()[0];
    assert!(cell_area_km2(pent).unwrap() < get_hexagon_area_avg_km2(4).unwrap());
  }

  #[test]
  fn test_edge_lengths() {
    let cell = H3Index::new(0x8928308280fffff);
    let avg = get_hexagon_edge_length_avg_km(9).unwrap();
    for edge in origin_to_directed_edges(cell).unwrap() {
      let km = edge_length_km(edge).unwrap();
      assert!(km > avg * 0.5 && km < avg * 1.5, "{km}");
      assert!((edge_length_m(edge).unwrap() - km * 1000.0).abs() < 1e-6);
    }
    assert_eq!(edge_length_rads(cell), Err(H3Error::InvalidDirectedEdge));
  }
}
