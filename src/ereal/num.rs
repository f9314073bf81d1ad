use super::*;
use crate::error::ParseErealError;
use num_traits::{FromPrimitive, Num, One, Signed, ToPrimitive, Zero};

impl<const N: usize>
Zero for Ereal<N> {
  #[inline]
  fn zero() -> Self {
    Self::ZERO
  }

  #[inline]
  fn is_zero(&self) -> bool {
    Ereal::is_zero(self)
  }

  #[inline]
  fn set_zero(&mut self) {
    Ereal::set_zero(self)
  }
}

impl<const N: usize>
One for Ereal<N> {
  #[inline]
  fn one() -> Self {
    Self::ONE
  }

  #[inline]
  fn is_one(&self) -> bool {
    Ereal::is_one(self)
  }
}

impl<const N: usize>
Num for Ereal<N> {
  type FromStrRadixErr = ParseErealError;

  /// Only radix 10 is supported.
  fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
    if radix != 10 {
      return Err(ParseErealError::UnsupportedRadix(radix))
    }
    s.parse()
  }
}

impl<const N: usize>
Signed for Ereal<N> {
  #[inline]
  fn abs(&self) -> Self {
    Ereal::abs(*self)
  }

  fn abs_sub(&self, other: &Self) -> Self {
    if *self <= *other { Self::ZERO } else { *self - *other }
  }

  #[inline]
  fn signum(&self) -> Self {
    Ereal::signum(*self)
  }

  #[inline]
  fn is_positive(&self) -> bool {
    Ereal::is_positive(self)
  }

  #[inline]
  fn is_negative(&self) -> bool {
    Ereal::is_negative(self)
  }
}

const TWO_63: f64 = 9223372036854775808.0;
const TWO_64: f64 = 18446744073709551616.0;
const TWO_127: f64 = 170141183460469231731687303715884105728.0;
const TWO_128: f64 = 340282366920938463463374607431768211456.0;

impl<
  const N: usize,
> Ereal<N> {
  /// The integer part of `self` modulo 2^128 (that is, as two's complement bits), or `None` if
  /// it's NaN, infinite, or outside `min .. max`.
  fn trunc_in_range(self, min: f64, max: f64) -> Option<u128> {
    let trunc = self.trunc();
    if !(trunc >= min && trunc < max) {
      return None
    }
    // Every limb of an integer is an integer, so we can add them up. Within range, the only limb
    // that may not fit is 2^128 itself, which is 0 modulo 2^128.
    Some(trunc.limbs().iter().fold(0u128, |acc, &x| {
      let magnitude = if x.abs() >= TWO_128 { 0 } else { x.abs() as u128 };
      if x < 0.0 { acc.wrapping_sub(magnitude) } else { acc.wrapping_add(magnitude) }
    }))
  }
}

impl<const N: usize>
ToPrimitive for Ereal<N> {
  fn to_i64(&self) -> Option<i64> {
    self.trunc_in_range(-TWO_63, TWO_63).map(|bits| bits as i64)
  }

  fn to_u64(&self) -> Option<u64> {
    self.trunc_in_range(0., TWO_64).map(|bits| bits as u64)
  }

  fn to_i128(&self) -> Option<i128> {
    self.trunc_in_range(-TWO_127, TWO_127).map(|bits| bits as i128)
  }

  fn to_u128(&self) -> Option<u128> {
    self.trunc_in_range(0., TWO_128)
  }

  #[inline]
  fn to_f64(&self) -> Option<f64> {
    Some(Ereal::to_f64(self))
  }

  #[inline]
  fn to_f32(&self) -> Option<f32> {
    Some(Ereal::to_f32(self))
  }
}

impl<const N: usize>
FromPrimitive for Ereal<N> {
  #[inline]
  fn from_i64(n: i64) -> Option<Self> {
    Some(Self::from(n))
  }

  #[inline]
  fn from_u64(n: u64) -> Option<Self> {
    Some(Self::from(n))
  }

  #[inline]
  fn from_i128(n: i128) -> Option<Self> {
    Some(Self::from(n))
  }

  #[inline]
  fn from_u128(n: u128) -> Option<Self> {
    Some(Self::from(n))
  }

  #[inline]
  fn from_f64(n: f64) -> Option<Self> {
    Some(Self::from(n))
  }

  #[inline]
  fn from_f32(n: f32) -> Option<Self> {
    Some(Self::from(n))
  }
}
