use super::*;

/// Split `x` into three doubles of at most 53 significant bits each, least significant first.
/// Each is exact, and they don't overlap.
fn split_u128(x: u128) -> [f64; 3] {
  const MASK: u128 = (1 << 53) - 1;
  const TWO_53: f64 = 9007199254740992.0;
  [
    (x & MASK) as f64,
    ((x >> 53) & MASK) as f64 * TWO_53,
    (x >> 106) as f64 * (TWO_53 * TWO_53),
  ]
}

impl<
  const N: usize,
> Ereal<N> {
  /// The ereal `±magnitude`. Exact if `N ≥ 3` (or if `magnitude` is small enough).
  fn from_sign_magnitude(negative: bool, magnitude: u128) -> Self {
    let sign = if negative {-1.0} else {1.0};
    Self::from_expansion(&split_u128(magnitude).map(|x| x * sign))
  }
}

macro_rules! from_narrow {
  ($($int:ty),*) => {$(
    impl<const N: usize> From<$int> for Ereal<N> {
      #[doc = concat!("Convert an `", stringify!($int), "` to an ereal. This is exact.")]
      #[inline]
      fn from(value: $int) -> Self {
        Self::from(f64::from(value))
      }
    }
  )*}
}

macro_rules! from_wide_signed {
  ($($int:ty),*) => {$(
    impl<const N: usize> From<$int> for Ereal<N> {
      #[doc = concat!("Convert an `", stringify!($int), "` to an ereal. This is exact provided `N` \
        is large enough (2 limbs for 64-bit integers, 3 for 128-bit), and rounds otherwise.")]
      #[inline]
      fn from(value: $int) -> Self {
        Self::from_sign_magnitude(value < 0, value.unsigned_abs() as u128)
      }
    }
  )*}
}

macro_rules! from_wide_unsigned {
  ($($int:ty),*) => {$(
    impl<const N: usize> From<$int> for Ereal<N> {
      #[doc = concat!("Convert a `", stringify!($int), "` to an ereal. This is exact provided `N` \
        is large enough (2 limbs for 64-bit integers, 3 for 128-bit), and rounds otherwise.")]
      #[inline]
      fn from(value: $int) -> Self {
        Self::from_sign_magnitude(false, value as u128)
      }
    }
  )*}
}

from_narrow!{i8, i16, i32, u8, u16, u32}
from_wide_signed!{i64, i128, isize}
from_wide_unsigned!{u64, u128, usize}
