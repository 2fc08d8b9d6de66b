//! Planar vector helpers used on the gnomonic face plane.

use crate::types::Vec2d;

impl Vec2d {
  #[inline]
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// Euclidean length of `v`.
#[inline]
#[must_use]
pub(crate) fn _v2d_mag(v: &Vec2d) -> f64 {
  v.x.hypot(v.y)
}

/// Intersection of the line through `p0`,`p1` with the line through `p2`,`p3`.
///
/// Callers only pass segments known to cross: a cell edge and an icosahedron edge.
#[inline]
#[must_use]
pub(crate) fn _v2d_intersect(p0: &Vec2d, p1: &Vec2d, p2: &Vec2d, p3: &Vec2d) -> Vec2d {
  let s1 = Vec2d::new(p1.x - p0.x, p1.y - p0.y);
  let s2 = Vec2d::new(p3.x - p2.x, p3.y - p2.y);
  let t = (s2.x * (p0.y - p2.y) - s2.y * (p0.x - p2.x)) / (-s2.x * s1.y + s1.x * s2.y);
  Vec2d::new(p0.x + t * s1.x, p0.y + t * s1.y)
}

/// Component-wise equality within single precision epsilon.
#[inline]
#[must_use]
pub(crate) fn _v2d_almost_equals(v1: &Vec2d, v2: &Vec2d) -> bool {
  let eps = f64::from(f32::EPSILON);
  (v1.x - v2.x).abs() < eps && (v1.y - v2.y).abs() < eps
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_v2d_mag() {
    assert!((_v2d_mag(&Vec2d::new(3.0, 4.0)) - 5.0).abs() < f64::EPSILON);
    assert_eq!(_v2d_mag(&Vec2d::default()), 0.0);
  }

  #[test]
  fn test_v2d_intersect() {
    let inter = _v2d_intersect(
      &Vec2d::new(2.0, 2.0),
      &Vec2d::new(6.0, 6.0),
      &Vec2d::new(0.0, 4.0),
      &Vec2d::new(10.0, 4.0),
    );
    assert!((inter.x - 4.0).abs() < 1e-12);
    assert!((inter.y - 4.0).abs() < 1e-12);
  }

  #[test]
  fn test_v2d_almost_equals() {
    let a = Vec2d::new(3.0, 4.0);
    assert!(_v2d_almost_equals(&a, &Vec2d::new(3.0 + 1e-9, 4.0)));
    assert!(!_v2d_almost_equals(&a, &Vec2d::new(3.5, 4.0)));
    assert!(!_v2d_almost_equals(&a, &Vec2d::new(3.0, 4.0 + 1e-3)));
  }
}
