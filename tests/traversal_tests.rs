// tests/traversal_tests.rs

use std::collections::HashSet;

use hexindex::*;

const SF9: H3Index = H3Index::new(0x8928308280fffff);

// RUST_LOG=hexindex=trace shows unfolding and skipped pentagon directions.
fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_test_writer()
    .try_init();
}

#[test]
fn test_disk_sizes_away_from_pentagons() {
  for k in 0..=5 {
    let disk = grid_disk(SF9, k).unwrap();
    assert_eq!(disk.len() as i64, max_grid_disk_size(k).unwrap());
    let unique: HashSet<_> = disk.iter().collect();
    assert_eq!(unique.len(), disk.len());
  }
}

#[test]
fn test_disk_is_smaller_near_pentagons() {
  init_tracing();
  for pent in get_pentagons(5).unwrap() {
    for k in 1..=3 {
      let disk = grid_disk(pent, k).unwrap();
      assert!((disk.len() as i64) < max_grid_disk_size(k).unwrap(), "{pent} k {k}");
    }
  }
}

#[test]
fn test_disk_iter_reports_distances() {
  let by_ring: Vec<(H3Index, u32)> = grid_disk_iter(SF9, 2).unwrap().collect::<Result<_, _>>().unwrap();
  assert_eq!(by_ring.len(), 19);
  for (cell, d) in by_ring {
    assert_eq!(grid_distance(SF9, cell), Ok(i64::from(d)));
  }
}

#[test]
fn test_rings_partition_the_disk() {
  let disk: HashSet<H3Index> = grid_disk(SF9, 3).unwrap().into_iter().collect();
  let rings: HashSet<H3Index> = (0..=3).flat_map(|k| grid_ring(SF9, k).unwrap()).collect();
  assert_eq!(disk, rings);
}

#[test]
fn test_distance_symmetry() {
  for cell in grid_disk(SF9, 4).unwrap() {
    assert_eq!(grid_distance(SF9, cell), grid_distance(cell, SF9));
  }
}

#[test]
fn test_distance_and_path_between_cities() {
  let a = lat_lng_to_cell(&LatLng::from_degrees(37.7749, -122.4194), 5).unwrap();
  let b = lat_lng_to_cell(&LatLng::from_degrees(37.3382, -121.8863), 5).unwrap();
  let d = grid_distance(a, b).unwrap();
  assert!(d > 0);
  let path = grid_path_cells(a, b).unwrap();
  assert_eq!(path.len() as i64, d + 1);
  assert_eq!(grid_path_cells_size(a, b), Ok(d + 1));
}

#[test]
fn test_far_cells_have_no_distance() {
  init_tracing();
  let sf = lat_lng_to_cell(&LatLng::from_degrees(37.7749, -122.4194), 3).unwrap();
  let sydney = lat_lng_to_cell(&LatLng::from_degrees(-33.8688, 151.2093), 3).unwrap();
  assert_eq!(grid_distance(sf, sydney), Err(H3Error::IncompatibleCells));
}

#[test]
fn test_path_steps_are_neighbors() {
  let end = grid_ring(SF9, 7).unwrap()[11];
  let path = grid_path_cells(SF9, end).unwrap();
  assert_eq!(path.len(), 8);
  for pair in path.windows(2) {
    assert!(are_neighbor_cells(pair[0], pair[1]).unwrap());
  }
}

#[test]
fn test_local_ij_round_trip() {
  for cell in grid_disk(SF9, 3).unwrap() {
    let ij = cell_to_local_ij(SF9, cell).unwrap();
    assert_eq!(local_ij_to_cell(SF9, &ij), Ok(cell));
  }
  let origin_ij = cell_to_local_ij(SF9, SF9).unwrap();
  let neighbor = local_ij_to_cell(SF9, &CoordIJ { i: origin_ij.i + 1, j: origin_ij.j }).unwrap();
  assert!(are_neighbor_cells(SF9, neighbor).unwrap());
}

#[test]
fn test_directed_edges() {
  let edges = origin_to_directed_edges(SF9).unwrap();
  assert_eq!(edges.len(), 6);
  let destinations: HashSet<H3Index> = edges.iter().map(|e| get_directed_edge_destination(*e).unwrap()).collect();
  let ring: HashSet<H3Index> = grid_ring(SF9, 1).unwrap().into_iter().collect();
  assert_eq!(destinations, ring);

  for edge in edges {
    let (origin, dest) = directed_edge_to_cells(edge).unwrap();
    assert_eq!(cells_to_directed_edge(origin, dest), Ok(edge));
    let reverse = cells_to_directed_edge(dest, origin).unwrap();
    assert_eq!(directed_edge_to_boundary(edge).unwrap().num_verts, 2);
    assert!((edge_length_km(edge).unwrap() - edge_length_km(reverse).unwrap()).abs() < 1e-6);
  }
}

#[test]
fn test_pentagon_edges() {
  for pent in get_pentagons(2).unwrap() {
    let edges = origin_to_directed_edges(pent).unwrap();
    assert_eq!(edges.len(), 5);
    assert!(edges.iter().all(|e| is_valid_directed_edge(*e)));
  }
}
