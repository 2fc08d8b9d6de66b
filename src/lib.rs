#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // digit and resolution fields are at most 7 bits
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unreadable_literal)] // index literals read as raw bit patterns
#![allow(clippy::similar_names)]
#![allow(clippy::wildcard_imports)]

//! `hexindex` is a hierarchical hexagonal geospatial index.
//!
//! The sphere is projected onto an icosahedron, each face carries a hexagonal
//! grid at 16 resolutions, and every cell is named by a 64-bit [`H3Index`]:
//! one of 122 base cells followed by up to 15 aperture-7 digits.
//!
//! ```
//! use hexindex::{cell_to_parent, grid_disk, lat_lng_to_cell, LatLng};
//!
//! let cell = lat_lng_to_cell(&LatLng::from_degrees(37.775, -122.418), 9)?;
//! let parent = cell_to_parent(cell, 5)?;
//! assert_eq!(grid_disk(cell, 1)?.len(), 7);
//! # let _ = parent;
//! # Ok::<(), hexindex::H3Error>(())
//! ```
//!
//! Diagnostics go through `tracing`; the library never installs a subscriber.

mod base_cells;
pub mod constants;
mod coords;
pub mod error;
pub mod h3_index;
pub mod hierarchy;
pub mod indexing;
pub mod iterators;
pub mod latlng;
pub mod local_ij;
mod math;
pub mod measures;
pub mod traversal;
pub mod types;

pub use constants::{MAX_CELL_BNDRY_VERTS, MAX_H3_RES, NUM_BASE_CELLS, NUM_PENTAGONS};
pub use error::H3Error;
pub use h3_index::{
  get_base_cell, get_icosahedron_faces, get_num_cells, get_pentagons, get_res0_cells, get_resolution, h3_to_string,
  is_pentagon, is_res_class_iii, is_valid_cell, max_face_count, string_to_h3,
};
pub use hierarchy::{
  cell_to_center_child, cell_to_child_pos, cell_to_children, cell_to_children_size, cell_to_parent, child_pos_to_cell,
  compact_cells, uncompact_cells, uncompact_cells_size,
};
pub use indexing::{cell_to_boundary, cell_to_lat_lng, lat_lng_to_cell};
pub use iterators::{children_iter, CellChildren};
pub use latlng::{degs_to_rads, great_circle_distance_km, great_circle_distance_m, great_circle_distance_rads, rads_to_degs};
pub use local_ij::{cell_to_local_ij, local_ij_to_cell};
pub use measures::{
  cell_area_km2, cell_area_m2, cell_area_rads2, edge_length_km, edge_length_m, edge_length_rads,
  get_hexagon_area_avg_km2, get_hexagon_area_avg_m2, get_hexagon_edge_length_avg_km, get_hexagon_edge_length_avg_m,
};
pub use traversal::{
  are_neighbor_cells, cells_to_directed_edge, directed_edge_to_boundary, directed_edge_to_cells,
  get_directed_edge_destination, get_directed_edge_origin, grid_disk, grid_disk_distances, grid_disk_iter,
  grid_distance, grid_path_cells, grid_path_cells_size, grid_ring, is_valid_directed_edge, max_grid_disk_size,
  origin_to_directed_edges, GridDisk,
};
pub use types::{CellBoundary, CoordIJ, CoordIJK, Direction, FaceIJK, H3Index, LatLng, H3_NULL};
