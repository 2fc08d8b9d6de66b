// tests/serde_tests.rs

#![cfg(feature = "serde")]

use hexindex::*;

#[test]
fn test_h3index_serde() {
  let h = H3Index::new(0x8928308280fffff);
  let serialized = serde_json::to_string(&h).unwrap();
  assert_eq!(serialized, "617700169958293503");
  assert_eq!(serde_json::from_str::<H3Index>(&serialized).unwrap(), h);
  assert_eq!(serde_json::to_string(&H3_NULL).unwrap(), "0");
}

#[test]
fn test_latlng_serde() {
  let ll = LatLng::new(0.5, -1.2);
  let serialized = serde_json::to_string(&ll).unwrap();
  assert_eq!(serialized, r#"{"lat":0.5,"lng":-1.2}"#);
  assert_eq!(serde_json::from_str::<LatLng>(&serialized).unwrap(), ll);
}

#[test]
fn test_error_serializes_as_code() {
  for (err, code) in [
    (H3Error::InvalidIndex, "5"),
    (H3Error::PentagonDistortion, "9"),
    (H3Error::IncompatibleCells, "16"),
    (H3Error::FaceOverageLoopExceeded, "17"),
  ] {
    assert_eq!(serde_json::to_string(&err).unwrap(), code);
    assert_eq!(serde_json::from_str::<H3Error>(code).unwrap(), err);
  }
  assert!(serde_json::from_str::<H3Error>("1").is_err());
}

#[test]
fn test_direction_serializes_as_digit() {
  assert_eq!(serde_json::to_string(&Direction::IkAxes).unwrap(), "5");
  assert_eq!(serde_json::from_str::<Direction>("2").unwrap(), Direction::JAxes);
  assert!(serde_json::from_str::<Direction>("8").is_err());
}

#[test]
fn test_coordinates_serde() {
  let ij = CoordIJ { i: -3, j: 7 };
  let json = serde_json::to_string(&ij).unwrap();
  assert_eq!(json, r#"{"i":-3,"j":7}"#);
  assert_eq!(serde_json::from_str::<CoordIJ>(&json).unwrap(), ij);

  let fijk = FaceIJK::new(7, CoordIJK::new(1, 0, 2));
  let json = serde_json::to_string(&fijk).unwrap();
  assert_eq!(serde_json::from_str::<FaceIJK>(&json).unwrap(), fijk);
}

#[test]
fn test_boundary_serde() {
  let boundary = cell_to_boundary(H3Index::new(0x85283473fffffff)).unwrap();
  let json = serde_json::to_string(&boundary).unwrap();
  let back: CellBoundary = serde_json::from_str(&json).unwrap();
  assert_eq!(back.num_verts, boundary.num_verts);
  assert_eq!(back.vertices(), boundary.vertices());
}
