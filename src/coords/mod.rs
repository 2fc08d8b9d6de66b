//! Hex grid coordinate systems.

pub mod face_ijk;
pub mod ijk;
