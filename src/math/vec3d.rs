//! Unit-sphere vector helpers used to pick the closest icosahedron face.

use crate::types::{LatLng, Vec3d};

#[inline]
fn _square(x: f64) -> f64 {
  x * x
}

/// Squared chord distance between two 3D points.
#[inline]
#[must_use]
pub(crate) fn _point_square_dist(v1: &Vec3d, v2: &Vec3d) -> f64 {
  _square(v1.x - v2.x) + _square(v1.y - v2.y) + _square(v1.z - v2.z)
}

/// Unit-sphere point for a geographic coordinate.
#[inline]
#[must_use]
pub(crate) fn _geo_to_vec3d(geo: &LatLng) -> Vec3d {
  let r = geo.lat.cos();
  Vec3d {
    x: geo.lng.cos() * r,
    y: geo.lng.sin() * r,
    z: geo.lat.sin(),
  }
}
