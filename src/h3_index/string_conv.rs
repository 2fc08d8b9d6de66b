//! Fixed-width hexadecimal form of an index.

use std::fmt;
use std::str::FromStr;

use crate::error::H3Error;
use crate::types::H3Index;

const MAX_HEX_DIGITS: usize = 16;

impl fmt::Display for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}", self.bits())
  }
}

impl fmt::LowerHex for H3Index {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.bits(), f)
  }
}

impl FromStr for H3Index {
  type Err = H3Error;

  /// Parses 1 to 16 hexadecimal digits, either case. Signs and prefixes are rejected.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.is_empty() || s.len() > MAX_HEX_DIGITS || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
      return Err(H3Error::InvalidDomain);
    }
    u64::from_str_radix(s, 16)
      .map(H3Index::new)
      .map_err(|_| H3Error::InvalidDomain)
  }
}

/// The 16 digit lowercase hexadecimal form of `h`.
#[must_use]
pub fn h3_to_string(h: H3Index) -> String {
  h.to_string()
}

/// Parses the hexadecimal form of an index. The result is not validated.
///
/// # Errors
/// `InvalidDomain` for an empty, overlong or non-hexadecimal string.
pub fn string_to_h3(s: &str) -> Result<H3Index, H3Error> {
  s.parse()
}
