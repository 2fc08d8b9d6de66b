//! Parent/child relationships between resolutions and set compaction.

pub mod compaction;
pub mod parent_child;

pub use compaction::{compact_cells, uncompact_cells, uncompact_cells_size};
pub use parent_child::{
  cell_to_center_child, cell_to_child_pos, cell_to_children, cell_to_children_size, cell_to_parent,
  child_pos_to_cell,
};
