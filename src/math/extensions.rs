//! Integer helpers.

/// Integer power by squaring. Negative exponents yield 0 except for bases of +/-1.
#[inline]
pub(crate) fn _ipow(mut base: i64, mut exp: i64) -> i64 {
  if exp < 0 {
    return match base {
      1 => 1,
      -1 if exp % 2 == 0 => 1,
      -1 => -1,
      _ => 0,
    };
  }
  let mut result: i64 = 1;
  while exp > 0 {
    if exp & 1 == 1 {
      result = result.wrapping_mul(base);
    }
    exp >>= 1;
    base = base.wrapping_mul(base);
  }
  result
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ipow() {
    assert_eq!(_ipow(7, 0), 1);
    assert_eq!(_ipow(7, 1), 7);
    assert_eq!(_ipow(7, 2), 49);
    assert_eq!(_ipow(7, 15), 4_747_561_509_943);
    assert_eq!(_ipow(2, 10), 1024);
    assert_eq!(_ipow(-1, -3), -1);
    assert_eq!(_ipow(5, -1), 0);
  }
}
