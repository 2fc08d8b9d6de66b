// tests/h3_properties_tests.rs

use hexindex::*;
use proptest::prelude::*;

fn any_point() -> impl Strategy<Value = LatLng> {
  (-89.99f64..89.99, -180.0f64..180.0).prop_map(|(lat, lng)| LatLng::from_degrees(lat, lng))
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn prop_center_reindexes_to_cell(p in any_point(), res in 0..=MAX_H3_RES) {
    let cell = lat_lng_to_cell(&p, res).unwrap();
    prop_assert!(is_valid_cell(cell));
    let center = cell_to_lat_lng(cell).unwrap();
    prop_assert_eq!(lat_lng_to_cell(&center, res).unwrap(), cell);
  }

  #[test]
  fn prop_parent_contains_cell(p in any_point(), res in 1..=MAX_H3_RES, up in 1i32..=3) {
    let parent_res = (res - up).max(0);
    let cell = lat_lng_to_cell(&p, res).unwrap();
    let parent = cell_to_parent(cell, parent_res).unwrap();
    prop_assert_eq!(get_resolution(parent).unwrap(), parent_res);
    prop_assert!(children_iter(parent, res).unwrap().any(|c| c == cell));
  }

  #[test]
  fn prop_child_position_round_trip(p in any_point(), res in 2..=MAX_H3_RES) {
    let cell = lat_lng_to_cell(&p, res).unwrap();
    let parent_res = res - 2;
    let pos = cell_to_child_pos(cell, parent_res).unwrap();
    let parent = cell_to_parent(cell, parent_res).unwrap();
    prop_assert_eq!(child_pos_to_cell(pos, parent, res).unwrap(), cell);
  }

  #[test]
  fn prop_distance_is_symmetric(p in any_point(), res in 4..=MAX_H3_RES, k in 0i32..4) {
    let origin = lat_lng_to_cell(&p, res).unwrap();
    let disk = grid_disk_distances(origin, k).unwrap();
    prop_assume!(disk.iter().all(|(cell, _)| !is_pentagon(*cell)));
    for (cell, d) in disk {
      match (grid_distance(origin, cell), grid_distance(cell, origin)) {
        (Ok(a), Ok(b)) => {
          prop_assert_eq!(a, b);
          prop_assert_eq!(a, i64::from(d));
        }
        (Err(e), _) | (_, Err(e)) => prop_assert_eq!(e, H3Error::IncompatibleCells),
      }
    }
  }

  #[test]
  fn prop_string_round_trip(raw in any::<u64>()) {
    let h = H3Index::new(raw);
    prop_assert_eq!(string_to_h3(&h3_to_string(h)).unwrap(), h);
  }
}
