use super::*;
use core::f64::consts::FRAC_PI_4;

impl<
  const N: usize,
> Ereal<N> {
  /// The arctangent of `self`, in `[-π/2, π/2]`.
  ///
  /// For `|self| ≤ 1`, Newton's iteration solves `x cos(y) - sin(y) = 0` for `y`; larger
  /// arguments use `atan(x) = ±π/2 - atan(1/x)`.
  pub fn atan(self) -> Self {
    if self.is_nan() || self.is_zero() {
      return self
    }
    if self.is_infinite() {
      let half_pi = Self::half_pi();
      return if self.is_positive() { half_pi } else { -half_pi }
    }
    if self.abs() > 1. {
      let half_pi = Self::half_pi();
      let complement = (Self::ONE / self).atan();
      return if self.is_positive() { half_pi - complement } else { -half_pi - complement }
    }
    let x = self;
    Self::newton("atan", Self::from(x.top().atan()), |y| {
      let (s, c) = y.sin_cos();
      (x * c - s) / (c + x * s)
    })
  }

  /// The four quadrant arctangent of `self` (the `y` coordinate) and `other` (the `x`
  /// coordinate), in `[-π, π]`.
  ///
  /// Since there is no signed zero, `atan2(0, x)` is `0` for `x ≥ 0` and `π` for `x < 0`.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let (one, minus_one) = (Ereal::<4>::ONE, Ereal::<4>::MINUS_ONE);
  /// let three_quarters_pi = Ereal::pi() * 0.75;
  /// assert!((one.atan2(minus_one) - three_quarters_pi).abs() < 1e-60);
  /// ```
  pub fn atan2(self, other: Self) -> Self {
    let (y, x) = (self, other);
    if y.is_nan() || x.is_nan() {
      return Self::NAN
    }
    if y.is_infinite() || x.is_infinite() {
      // Always a multiple of π/4.
      let octants = (y.top().atan2(x.top()) / FRAC_PI_4).round();
      return Self::pi().ldexp(-2) * octants
    }
    if x.is_zero() {
      let half_pi = Self::half_pi();
      return match y.sign() {
        1 => half_pi,
        -1 => -half_pi,
        _ => Self::ZERO,
      }
    }
    if y.abs() > x.abs() {
      let half_pi = Self::half_pi();
      let complement = (x / y).atan();
      return if y.is_positive() { half_pi - complement } else { -half_pi - complement }
    }
    let angle = (y / x).atan();
    if x.is_positive() {
      angle
    } else if y.is_negative() {
      angle - Self::pi()
    } else {
      angle + Self::pi()
    }
  }

  /// The arcsine of `self`, in `[-π/2, π/2]`, or [`DomainError::InverseTrigOutOfRange`] if
  /// `|self| > 1`.
  pub fn try_asin(self) -> Result<Self, DomainError> {
    if self.is_nan() {
      return Ok(self)
    }
    if self.abs() > 1. {
      return Err(DomainError::InverseTrigOutOfRange)
    }
    let cos = ((Self::ONE - self) * (Self::ONE + self)).sqrt();
    Ok(self.atan2(cos))
  }

  /// The arcsine of `self`, or NaN if `|self| > 1`.
  pub fn asin(self) -> Self {
    self.try_asin().unwrap_or_else(Self::domain_error)
  }

  /// The arccosine of `self`, in `[0, π]`, or [`DomainError::InverseTrigOutOfRange`] if
  /// `|self| > 1`.
  pub fn try_acos(self) -> Result<Self, DomainError> {
    if self.is_nan() {
      return Ok(self)
    }
    if self.abs() > 1. {
      return Err(DomainError::InverseTrigOutOfRange)
    }
    let sin = ((Self::ONE - self) * (Self::ONE + self)).sqrt();
    Ok(sin.atan2(self))
  }

  /// The arccosine of `self`, or NaN if `|self| > 1`.
  pub fn acos(self) -> Self {
    self.try_acos().unwrap_or_else(Self::domain_error)
  }
}
