//! Error type shared by every fallible operation in the crate.

#[cfg(feature = "serde")]
use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Failure kinds reported by index, projection and traversal operations.
///
/// Each variant carries a stable numeric code so errors can be persisted or
/// exchanged as plain integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u32)]
#[cfg_attr(feature = "serde", derive(Serialize_repr, Deserialize_repr))]
pub enum H3Error {
  /// An argument was outside its accepted range (k, child position, string form).
  #[error("argument outside of acceptable range")]
  InvalidDomain = 2,
  /// Latitude or longitude was not a finite number.
  #[error("latitude or longitude is not finite")]
  InvalidLatLng = 3,
  /// Resolution outside `0..=15` or inconsistent with the requested operation.
  #[error("resolution outside of acceptable range")]
  InvalidResolution = 4,
  /// The bit pattern is not a valid cell index.
  #[error("invalid cell index")]
  InvalidIndex = 5,
  /// The bit pattern is not a valid directed edge index.
  #[error("invalid directed edge index")]
  InvalidDirectedEdge = 6,
  /// The operation needed the deleted sub-cell of a pentagon.
  #[error("pentagon distortion encountered")]
  PentagonDistortion = 9,
  /// The same cell appeared more than once where distinct cells are required.
  #[error("duplicate input cells")]
  DuplicateInput = 10,
  /// The two cells are not adjacent.
  #[error("cells are not neighbors")]
  NotNeighbors = 11,
  /// The cells have different resolutions.
  #[error("cells have mismatched resolutions")]
  ResolutionMismatch = 12,
  /// No shared local coordinate frame exists for the two cells.
  #[error("cells have no shared local coordinate frame")]
  IncompatibleCells = 16,
  /// Overage correction did not settle within its hop bound.
  #[error("face overage correction exceeded its hop bound")]
  FaceOverageLoopExceeded = 17,
}

impl H3Error {
  /// Stable numeric code of this error.
  #[inline]
  pub fn code(self) -> u32 {
    self as u32
  }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, H3Error>;
