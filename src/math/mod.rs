//! Small numeric helpers shared by the projection code.

pub mod extensions;
pub mod vec2d;
pub mod vec3d;
