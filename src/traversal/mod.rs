//! Moving across the grid at a single resolution.

pub mod directed_edge;
pub mod distance;
pub mod grid_disk;
pub mod grid_path;
pub mod neighbors;

pub use directed_edge::{
  cells_to_directed_edge, directed_edge_to_boundary, directed_edge_to_cells, get_directed_edge_destination,
  get_directed_edge_origin, is_valid_directed_edge, origin_to_directed_edges,
};
pub use distance::grid_distance;
pub use grid_disk::{grid_disk, grid_disk_distances, grid_disk_iter, grid_ring, max_grid_disk_size, GridDisk};
pub use grid_path::{grid_path_cells, grid_path_cells_size};
pub use neighbors::are_neighbor_cells;
