use super::*;

impl<
  const N: usize,
> Ereal<N> {
  /// The square root of `self`, or [`DomainError::NegativeSqrt`] if `self` is negative.
  ///
  /// The argument is scaled by an even power of two into `[1, 4)`, where Newton's iteration for
  /// the inverse square root, `y ← y + y (1 - x y²) / 2`, needs no division. The square root is
  /// then `x y`, plus one final correction.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::{Ereal, DomainError};
  /// let x = Ereal::<4>::from(2.).try_sqrt().unwrap();
  /// assert!((x * x - 2.).abs() < 1e-60);
  /// assert_eq!(Ereal::<4>::from(-1.).try_sqrt(), Err(DomainError::NegativeSqrt));
  /// ```
  pub fn try_sqrt(self) -> Result<Self, DomainError> {
    if self.is_negative() {
      return Err(DomainError::NegativeSqrt)
    }
    if self.is_zero() || !self.is_finite() {
      return Ok(self)
    }
    let k = exponent(self.top()).div_euclid(2);
    let x = self.ldexp(-2 * k);
    let y = Self::from(1. / x.top().sqrt());
    let y = Self::newton("sqrt", y, |y| y * (Self::ONE - x * y * y) * 0.5);
    let s = x * y;
    let s = s + y * (x - s * s) * 0.5;
    Ok(s.ldexp(k))
  }

  /// The square root of `self`, or NaN if `self` is negative. See [`Self::try_sqrt`].
  pub fn sqrt(self) -> Self {
    self.try_sqrt().unwrap_or_else(Self::domain_error)
  }

  /// The cube root of `self`. Defined for every argument, with `cbrt(-x) = -cbrt(x)`.
  pub fn cbrt(self) -> Self {
    if self.is_zero() || !self.is_finite() {
      return self
    }
    let k = exponent(self.top()).div_euclid(3);
    let x = self.abs().ldexp(-3 * k);
    let y = Self::from(x.top().cbrt());
    let y = Self::newton("cbrt", y, |y| (x / (y * y) - y) / 3.);
    let y = y.ldexp(k);
    if self.is_negative() { -y } else { y }
  }

  /// `√(self² + other²)`, without undue overflow or underflow.
  ///
  /// Like [`f64::hypot`], this is +∞ if either argument is infinite, even if the other is NaN.
  pub fn hypot(self, other: Self) -> Self {
    if self.is_infinite() || other.is_infinite() {
      return Self::INFINITY
    }
    if self.is_nan() || other.is_nan() {
      return Self::NAN
    }
    if self.is_zero() || other.is_zero() {
      return (self + other).abs()
    }
    let k = exponent(self.top()).max(exponent(other.top()));
    let (a, b) = (self.ldexp(-k), other.ldexp(-k));
    (a * a + b * b).sqrt().ldexp(k)
  }
}
