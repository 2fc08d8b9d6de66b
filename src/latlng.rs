//! Spherical helpers: angle normalization, azimuths and great circle distances.

use crate::constants::{EARTH_RADIUS_KM, EPSILON, M_180_PI, M_2PI, M_PI, M_PI_180, M_PI_2};
use crate::types::LatLng;

/// Normalizes radians to `[0, 2pi)`.
#[inline]
#[must_use]
pub(crate) fn _pos_angle_rads(rads: f64) -> f64 {
  let tmp = if rads < 0.0 { rads + M_2PI } else { rads };
  if rads >= M_2PI {
    return tmp - M_2PI;
  }
  tmp
}

/// True when both components differ by less than `threshold`.
#[cfg(test)]
#[must_use]
pub(crate) fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Wraps longitude into `[-pi, pi]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > M_PI {
    lng -= M_2PI;
  }
  while lng < -M_PI {
    lng += M_2PI;
  }
  lng
}

/// Initial bearing from `p1` to `p2`, radians clockwise from north.
#[inline]
#[must_use]
pub(crate) fn _geo_azimuth_rads(p1: &LatLng, p2: &LatLng) -> f64 {
  let dlng = p2.lng - p1.lng;
  (p2.lat.cos() * dlng.sin()).atan2(p1.lat.cos() * p2.lat.sin() - p1.lat.sin() * p2.lat.cos() * dlng.cos())
}

#[inline]
fn _snap_to_pole(lat: f64) -> Option<LatLng> {
  if (lat - M_PI_2).abs() < EPSILON {
    Some(LatLng::new(M_PI_2, 0.0))
  } else if (lat + M_PI_2).abs() < EPSILON {
    Some(LatLng::new(-M_PI_2, 0.0))
  } else {
    None
  }
}

/// The point reached from `p1` travelling `distance` radians along azimuth `az`.
///
/// Points landing on a pole get longitude 0.
#[must_use]
pub(crate) fn _geo_az_distance_rads(p1: &LatLng, az: f64, distance: f64) -> LatLng {
  if distance < EPSILON {
    return *p1;
  }

  let az = _pos_angle_rads(az);

  // due north or due south
  if az < EPSILON || (az - M_PI).abs() < EPSILON {
    let lat = if az < EPSILON { p1.lat + distance } else { p1.lat - distance };
    return _snap_to_pole(lat).unwrap_or_else(|| LatLng::new(lat, constrain_lng(p1.lng)));
  }

  let sin_lat = (p1.lat.sin() * distance.cos() + p1.lat.cos() * distance.sin() * az.cos()).clamp(-1.0, 1.0);
  let lat = sin_lat.asin();
  if let Some(pole) = _snap_to_pole(lat) {
    return pole;
  }

  let inv_cos_lat = 1.0 / lat.cos();
  let sin_lng = (az.sin() * distance.sin() * inv_cos_lat).clamp(-1.0, 1.0);
  let cos_lng = ((distance.cos() - p1.lat.sin() * lat.sin()) / p1.lat.cos() * inv_cos_lat).clamp(-1.0, 1.0);
  LatLng::new(lat, constrain_lng(p1.lng + sin_lng.atan2(cos_lng)))
}

/// Great circle distance in radians, by the haversine formula.
#[must_use]
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng = ((b.lng - a.lng) * 0.5).sin();
  let h = (sin_lat * sin_lat + a.lat.cos() * b.lat.cos() * sin_lng * sin_lng).clamp(0.0, 1.0);
  2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Great circle distance in kilometres.
#[must_use]
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Great circle distance in metres.
#[must_use]
pub fn great_circle_distance_m(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_km(a, b) * 1000.0
}

#[must_use]
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * M_PI_180
}

#[must_use]
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * M_180_PI
}

#[cfg(test)]
mod tests {
  use super::*;

  const TOL: f64 = 1e-12;

  fn deg(lat: f64, lng: f64) -> LatLng {
    LatLng::from_degrees(lat, lng)
  }

  #[test]
  fn test_pos_angle_rads() {
    assert!((_pos_angle_rads(0.0)).abs() < f64::EPSILON);
    assert!((_pos_angle_rads(M_PI) - M_PI).abs() < f64::EPSILON);
    assert!((_pos_angle_rads(-M_PI_2) - M_PI * 1.5).abs() < f64::EPSILON);
    assert!((_pos_angle_rads(M_PI * 2.5) - M_PI_2).abs() < 1e-15);
    assert!((_pos_angle_rads(M_2PI)).abs() < f64::EPSILON, "2pi wraps to 0");
  }

  #[test]
  fn test_constrain_lng() {
    assert_eq!(constrain_lng(0.0), 0.0);
    assert_eq!(constrain_lng(1.0), 1.0);
    assert_eq!(constrain_lng(M_PI), M_PI);
    assert_eq!(constrain_lng(-M_PI), -M_PI);
    assert!((constrain_lng(M_2PI)).abs() < TOL);
    assert!((constrain_lng(M_PI * 3.0) - M_PI).abs() < TOL);
    assert!((constrain_lng(-M_PI * 1.5) - M_PI_2).abs() < TOL);
  }

  #[test]
  fn test_azimuth_cardinal() {
    let origin = deg(0.0, 0.0);
    assert!(_geo_azimuth_rads(&origin, &deg(10.0, 0.0)).abs() < TOL, "north");
    assert!((_geo_azimuth_rads(&origin, &deg(0.0, 10.0)) - M_PI_2).abs() < TOL, "east");
    assert!((_geo_azimuth_rads(&origin, &deg(-10.0, 0.0)).abs() - M_PI).abs() < TOL, "south");
    assert!((_geo_azimuth_rads(&origin, &deg(0.0, -10.0)) + M_PI_2).abs() < TOL, "west");
  }

  #[test]
  fn test_az_distance_zero_is_noop() {
    let start = deg(15.0, 10.0);
    assert_eq!(_geo_az_distance_rads(&start, 0.0, 0.0), start);
  }

  #[test]
  fn test_az_distance_due_north_south() {
    let out = _geo_az_distance_rads(&deg(45.0, 1.0), 0.0, 45f64.to_radians());
    assert_eq!(out, LatLng::new(M_PI_2, 0.0), "due north to the north pole");

    let out = _geo_az_distance_rads(&deg(-45.0, 2.0), M_PI, 45f64.to_radians());
    assert_eq!(out, LatLng::new(-M_PI_2, 0.0), "due south to the south pole");

    let out = _geo_az_distance_rads(&deg(-45.0, 10.0), 0.0, 35f64.to_radians());
    assert!(geo_almost_equal_threshold(&out, &deg(-10.0, 10.0), TOL));
  }

  #[test]
  fn test_az_distance_pole_to_pole() {
    let out = _geo_az_distance_rads(&deg(90.0, 0.0), 12f64.to_radians(), M_PI);
    assert!(geo_almost_equal_threshold(&out, &deg(-90.0, 0.0), 1e-9));
  }

  #[test]
  fn test_az_distance_inverts_azimuth() {
    let a = deg(37.0, -122.0);
    let b = deg(40.0, -74.0);
    let az = _geo_azimuth_rads(&a, &b);
    let d = great_circle_distance_rads(&a, &b);
    let reached = _geo_az_distance_rads(&a, az, d);
    assert!(great_circle_distance_rads(&reached, &b) < 1e-9);
  }

  #[test]
  fn test_great_circle_distance() {
    let a = deg(10.0, 10.0);
    assert!(great_circle_distance_rads(&a, &a).abs() < TOL);
    let q = great_circle_distance_rads(&deg(0.0, 0.0), &deg(0.0, 90.0));
    assert!((q - M_PI_2).abs() < TOL);
    let km = great_circle_distance_km(&deg(0.0, 0.0), &deg(0.0, 1.0));
    assert!((km - EARTH_RADIUS_KM * M_PI_180).abs() < 1e-9);
    assert!((great_circle_distance_m(&deg(0.0, 0.0), &deg(0.0, 1.0)) - km * 1000.0).abs() < 1e-6);
  }

  #[test]
  fn test_degree_conversion() {
    assert!((degs_to_rads(180.0) - M_PI).abs() < TOL);
    assert!((rads_to_degs(M_PI_2) - 90.0).abs() < TOL);
  }
}
