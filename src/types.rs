//! Core value types: the packed index, geographic and planar coordinates, and digits.

use crate::constants::MAX_CELL_BNDRY_VERTS;
use crate::error::H3Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A 64-bit cell or directed edge index.
///
/// The raw bits are private. `H3Index::new` wraps any `u64` without checking it;
/// every public operation validates its input before trusting the layout.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct H3Index(u64);

/// The null index. Never a valid cell.
pub const H3_NULL: H3Index = H3Index(0);

impl H3Index {
  /// Wraps a raw 64-bit value.
  #[inline]
  pub const fn new(raw: u64) -> Self {
    Self(raw)
  }

  #[inline]
  pub(crate) const fn bits(self) -> u64 {
    self.0
  }
}

impl From<H3Index> for u64 {
  #[inline]
  fn from(h: H3Index) -> u64 {
    h.0
  }
}

/// Latitude/longitude in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl LatLng {
  /// Builds a coordinate from radians.
  #[inline]
  pub const fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }

  /// Builds a coordinate from decimal degrees.
  #[inline]
  pub fn from_degrees(lat: f64, lng: f64) -> Self {
    Self {
      lat: lat.to_radians(),
      lng: lng.to_radians(),
    }
  }

  /// Returns `(lat, lng)` in decimal degrees.
  #[inline]
  pub fn to_degrees(self) -> (f64, f64) {
    (self.lat.to_degrees(), self.lng.to_degrees())
  }
}

/// Ordered vertices of a cell or edge boundary, counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellBoundary {
  /// Number of meaningful entries in `verts`.
  pub num_verts: usize,
  /// Vertex storage; entries past `num_verts` are unspecified.
  pub verts: [LatLng; MAX_CELL_BNDRY_VERTS],
}

impl CellBoundary {
  /// The meaningful vertices.
  #[inline]
  pub fn vertices(&self) -> &[LatLng] {
    &self.verts[..self.num_verts]
  }

  #[inline]
  pub(crate) fn push(&mut self, v: LatLng) {
    self.verts[self.num_verts] = v;
    self.num_verts += 1;
  }
}

impl Default for CellBoundary {
  fn default() -> Self {
    Self {
      num_verts: 0,
      verts: [LatLng::default(); MAX_CELL_BNDRY_VERTS],
    }
  }
}

/// Two-axis local hex coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJ {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
}

/// Three-axis hex coordinate, axes 120 degrees apart.
///
/// Normalized form has no negative component and at least one zero component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordIJK {
  /// I component.
  pub i: i32,
  /// J component.
  pub j: i32,
  /// K component.
  pub k: i32,
}

impl CoordIJK {
  /// Builds a coordinate from its components.
  #[inline]
  pub const fn new(i: i32, j: i32, k: i32) -> Self {
    Self { i, j, k }
  }
}

/// An icosahedron face plus an IJK coordinate in that face's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceIJK {
  /// Face number, 0 through 19.
  pub face: i32,
  /// Coordinate on that face.
  pub coord: CoordIJK,
}

impl FaceIJK {
  #[inline]
  pub const fn new(face: i32, coord: CoordIJK) -> Self {
    Self { face, coord }
  }
}

/// Planar point.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vec2d {
  pub x: f64,
  pub y: f64,
}

/// Point in 3D, usually on the unit sphere.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Vec3d {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// One index digit: a unit direction in the IJK frame, or the unused sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum Direction {
  /// Center of the parent.
  #[default]
  Center = 0,
  /// K axis.
  KAxes = 1,
  /// J axis.
  JAxes = 2,
  /// J == K.
  JkAxes = 3,
  /// I axis.
  IAxes = 4,
  /// I == K.
  IkAxes = 5,
  /// I == J.
  IjAxes = 6,
  /// Sentinel for digits finer than the index resolution.
  InvalidDigit = 7,
}

impl Direction {
  /// The six non-center directions in digit order.
  pub const NEIGHBORS: [Direction; 6] = [
    Direction::KAxes,
    Direction::JAxes,
    Direction::JkAxes,
    Direction::IAxes,
    Direction::IkAxes,
    Direction::IjAxes,
  ];

  /// Maps the low three bits of `v` onto a digit.
  #[inline]
  pub(crate) const fn from_bits(v: u64) -> Self {
    match v & 0b111 {
      0 => Direction::Center,
      1 => Direction::KAxes,
      2 => Direction::JAxes,
      3 => Direction::JkAxes,
      4 => Direction::IAxes,
      5 => Direction::IkAxes,
      6 => Direction::IjAxes,
      _ => Direction::InvalidDigit,
    }
  }

  /// Rotates the digit 60 degrees counter-clockwise.
  #[inline]
  pub const fn rotate60_ccw(self) -> Self {
    match self {
      Direction::KAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::IAxes,
      Direction::IAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::JAxes,
      Direction::JAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::KAxes,
      other => other,
    }
  }

  /// Rotates the digit 60 degrees clockwise.
  #[inline]
  pub const fn rotate60_cw(self) -> Self {
    match self {
      Direction::KAxes => Direction::JkAxes,
      Direction::JkAxes => Direction::JAxes,
      Direction::JAxes => Direction::IjAxes,
      Direction::IjAxes => Direction::IAxes,
      Direction::IAxes => Direction::IkAxes,
      Direction::IkAxes => Direction::KAxes,
      other => other,
    }
  }
}

impl TryFrom<u8> for Direction {
  type Error = H3Error;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    if value > 7 {
      return Err(H3Error::InvalidDomain);
    }
    Ok(Direction::from_bits(u64::from(value)))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_rotations_invert() {
    for d in Direction::NEIGHBORS {
      assert_eq!(d.rotate60_ccw().rotate60_cw(), d);
      let mut r = d;
      for _ in 0..6 {
        r = r.rotate60_ccw();
      }
      assert_eq!(r, d, "six ccw turns are the identity");
    }
    assert_eq!(Direction::Center.rotate60_cw(), Direction::Center);
    assert_eq!(Direction::InvalidDigit.rotate60_ccw(), Direction::InvalidDigit);
  }

  #[test]
  fn test_direction_try_from() {
    assert_eq!(Direction::try_from(5u8), Ok(Direction::IkAxes));
    assert_eq!(Direction::try_from(7u8), Ok(Direction::InvalidDigit));
    assert_eq!(Direction::try_from(8u8), Err(H3Error::InvalidDomain));
  }

  #[test]
  fn test_boundary_push() {
    let mut b = CellBoundary::default();
    b.push(LatLng::new(0.1, 0.2));
    b.push(LatLng::new(0.3, 0.4));
    assert_eq!(b.vertices(), &[LatLng::new(0.1, 0.2), LatLng::new(0.3, 0.4)]);
  }

  #[test]
  fn test_latlng_degrees() {
    let ll = LatLng::from_degrees(45.0, -90.0);
    let (lat, lng) = ll.to_degrees();
    assert!((lat - 45.0).abs() < 1e-12);
    assert!((lng + 90.0).abs() < 1e-12);
  }
}
