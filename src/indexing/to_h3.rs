use crate::constants::MAX_H3_RES;
use crate::coords::face_ijk::_geo_to_face_ijk;
use crate::error::H3Error;
use crate::h3_index::_face_ijk_to_h3;
use crate::types::{H3Index, LatLng};

/// The cell containing `geo` at resolution `res`.
///
/// # Errors
/// `InvalidResolution` outside `0..=15`, `InvalidLatLng` for a non-finite coordinate.
pub fn lat_lng_to_cell(geo: &LatLng, res: i32) -> Result<H3Index, H3Error> {
  if !(0..=MAX_H3_RES).contains(&res) {
    return Err(H3Error::InvalidResolution);
  }
  if !geo.lat.is_finite() || !geo.lng.is_finite() {
    return Err(H3Error::InvalidLatLng);
  }

  let fijk = _geo_to_face_ijk(geo, res);
  _face_ijk_to_h3(&fijk, res).ok_or(H3Error::InvalidDomain)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::h3_index::{get_resolution, is_valid_cell};

  #[test]
  fn test_resolution_domain() {
    let geo = LatLng::from_degrees(37.77, -122.4);
    assert_eq!(lat_lng_to_cell(&geo, -1), Err(H3Error::InvalidResolution));
    assert_eq!(lat_lng_to_cell(&geo, 16), Err(H3Error::InvalidResolution));
  }

  #[test]
  fn test_non_finite_coordinates() {
    assert_eq!(lat_lng_to_cell(&LatLng::new(0.0, f64::NAN), 5), Err(H3Error::InvalidLatLng));
    assert_eq!(lat_lng_to_cell(&LatLng::new(f64::INFINITY, 0.0), 5), Err(H3Error::InvalidLatLng));
    assert_eq!(lat_lng_to_cell(&LatLng::new(0.0, f64::NEG_INFINITY), 0), Err(H3Error::InvalidLatLng));
  }

  #[test]
  fn test_known_cells() {
    let h = lat_lng_to_cell(&LatLng::from_degrees(37.3615593, -122.0553238), 7).unwrap();
    assert_eq!(u64::from(h), 0x87283472bffffff);
    assert_eq!(get_resolution(h), Ok(7));

    let h = lat_lng_to_cell(&LatLng::from_degrees(40.689167, -74.044444), 10).unwrap();
    assert_eq!(u64::from(h), 0x8a2a1072b59ffff);
  }

  #[test]
  fn test_poles() {
    let north = lat_lng_to_cell(&LatLng::from_degrees(90.0, 0.0), 3).unwrap();
    assert_eq!(u64::from(north), 0x830326fffffffff);
    let south = lat_lng_to_cell(&LatLng::from_degrees(-90.0, 0.0), 4).unwrap();
    assert_eq!(u64::from(south), 0x84f2939ffffffff);
  }

  #[test]
  fn test_every_resolution_is_valid() {
    let geo = LatLng::from_degrees(-33.8688, 151.2093);
    for res in 0..=MAX_H3_RES {
      let h = lat_lng_to_cell(&geo, res).unwrap();
      assert!(is_valid_cell(h), "res {res}");
      assert_eq!(get_resolution(h), Ok(res));
    }
  }

  #[test]
  fn test_longitude_wraps() {
    let a = lat_lng_to_cell(&LatLng::from_degrees(10.0, 170.0), 6).unwrap();
    let b = lat_lng_to_cell(&LatLng::from_degrees(10.0, 170.0 - 360.0), 6).unwrap();
    assert_eq!(a, b);
  }
}
