use super::*;
use crate::expansion::lowest_bit_exponent;
use core::f64::consts::SQRT_2;

impl<
  const N: usize,
> Ereal<N> {
  /// The natural logarithm of `self`, or [`DomainError::NonPositiveLogarithm`] if `self` is
  /// zero or negative.
  ///
  /// Writing `self = m 2^k` with `m` in `[√½, √2)`, `ln(m)` is found by iterating
  /// `y ← y + 2 (m - e^y) / (m + e^y)`, which converges cubically, and `k ln 2` is added back.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::{Ereal, DomainError};
  /// let x = Ereal::<4>::from(2.).try_ln().unwrap();
  /// assert!((x - Ereal::ln2()).abs() < 1e-57);
  /// assert_eq!(Ereal::<4>::ZERO.try_ln(), Err(DomainError::NonPositiveLogarithm));
  /// ```
  pub fn try_ln(self) -> Result<Self, DomainError> {
    if self.is_nan() {
      return Ok(self)
    }
    if !self.is_positive() {
      return Err(DomainError::NonPositiveLogarithm)
    }
    if self.is_infinite() {
      return Ok(self)
    }
    if self.is_one() {
      return Ok(Self::ZERO)
    }
    let mut k = exponent(self.top());
    let mut m = self.ldexp(-k);
    if m.top() > SQRT_2 {
      m = m.ldexp(-1);
      k += 1;
    }
    let y = Self::newton("ln", Self::from(m.top().ln()), |y| {
      let e = y.exp();
      (m - e) / (m + e) * 2.
    });
    Ok(y + Self::ln2() * k as f64)
  }

  /// The natural logarithm of `self`, or NaN if `self` is zero or negative. See
  /// [`Self::try_ln`].
  pub fn ln(self) -> Self {
    self.try_ln().unwrap_or_else(Self::domain_error)
  }

  /// The base 2 logarithm of `self`. Exact if `self` is a power of two.
  pub fn try_log2(self) -> Result<Self, DomainError> {
    let top = self.top();
    if self.len == 1 && top > 0.0 && top.is_finite() && lowest_bit_exponent(top) == exponent(top) {
      return Ok(Self::from(exponent(top)))
    }
    Ok(self.try_ln()? / Self::ln2())
  }

  /// The base 2 logarithm of `self`, or NaN if `self` is zero or negative.
  pub fn log2(self) -> Self {
    self.try_log2().unwrap_or_else(Self::domain_error)
  }

  /// The base 10 logarithm of `self`. Exact if `self` is a power of ten (as computed in `N`
  /// limbs, so `log10(100) = 2` but also `log10(1/1000) = -3`).
  pub fn try_log10(self) -> Result<Self, DomainError> {
    if self.is_positive() && self.is_finite() {
      let k = self.top().log10().round();
      if Self::ONE.scale10(k as i64) == self {
        return Ok(Self::from(k))
      }
    }
    Ok(self.try_ln()? / Self::ln10())
  }

  /// The base 10 logarithm of `self`, or NaN if `self` is zero or negative.
  pub fn log10(self) -> Self {
    self.try_log10().unwrap_or_else(Self::domain_error)
  }

  /// `ln(1 + self)`, accurate even when `self` is close to zero. A domain error if `self ≤ -1`.
  ///
  /// For `|self| < 1/2` this runs the same iteration as [`Self::try_ln`], but on
  /// [`expm1`](Self::expm1), so that relative precision is kept.
  pub fn try_ln_1p(self) -> Result<Self, DomainError> {
    if self.is_nan() {
      return Ok(self)
    }
    if self <= -1. {
      return Err(DomainError::NonPositiveLogarithm)
    }
    if self.is_zero() || self.is_infinite() {
      return Ok(self)
    }
    if self.top().abs() >= 0.5 {
      return (self + 1.).try_ln()
    }
    Ok(Self::newton("ln_1p", Self::from(self.top().ln_1p()), |y| {
      let m = y.expm1();
      (self - m) / (self + m + 2.) * 2.
    }))
  }

  /// `ln(1 + self)`, or NaN if `self ≤ -1`.
  pub fn ln_1p(self) -> Self {
    self.try_ln_1p().unwrap_or_else(Self::domain_error)
  }
}
