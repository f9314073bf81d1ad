use super::*;

/// Above this, `x² + 1` and `x²` agree to more limbs than any `Ereal` has, and squaring risks
/// overflow; the inverse hyperbolic functions fall back to `ln(2x)`.
const HUGE: f64 = 3.273390607896142e150;

impl<
  const N: usize,
> Ereal<N> {
  /// `e^|self| / 2`, computed as `e^(|self| - ln 2)` so that it only overflows when the result
  /// does.
  fn half_exp_abs(self) -> Self {
    (self.abs() - Self::ln2()).exp()
  }

  /// Restore the sign of `self` on a result computed from `|self|`.
  fn with_sign_of(self, x: Self) -> Self {
    if x.is_negative() { -self } else { self }
  }

  /// The hyperbolic sine of `self`.
  ///
  /// Summed from its Taylor series below 1/2, to avoid cancellation, and from
  /// `e^x / 2 - e^-x / 2` above.
  pub fn sinh(self) -> Self {
    if self.is_zero() || !self.is_finite() {
      return self
    }
    let a = self.abs();
    let s = if a < 0.5 {
      let a2 = a * a;
      let mut term = a;
      Self::sum_series(a, |n| {
        term = term * a2 / (2 * n * (2 * n + 1)) as f64;
        term
      })
    } else {
      let h = self.half_exp_abs();
      h - (Self::ONE / h).ldexp(-2)
    };
    s.with_sign_of(self)
  }

  /// The hyperbolic cosine of `self`.
  pub fn cosh(self) -> Self {
    if self.is_nan() {
      return self
    }
    if self.is_infinite() {
      return Self::INFINITY
    }
    if self.is_zero() {
      return Self::ONE
    }
    let h = self.half_exp_abs();
    h + (Self::ONE / h).ldexp(-2)
  }

  /// The hyperbolic tangent of `self`, computed as `expm1(2x) / (expm1(2x) + 2)`.
  ///
  /// Beyond `|x| ≈ 18.4 N`, the result is ±1 to `N` limbs.
  pub fn tanh(self) -> Self {
    if self.is_nan() || self.is_zero() {
      return self
    }
    let a = self.abs();
    let t = if a.top() > 18.4 * N as f64 + 3. {
      Self::ONE
    } else {
      let m = a.ldexp(1).expm1();
      m / (m + 2.)
    };
    t.with_sign_of(self)
  }

  /// The inverse hyperbolic sine of `self`, `ln(x + √(x² + 1))`.
  pub fn asinh(self) -> Self {
    if self.is_zero() || !self.is_finite() {
      return self
    }
    let a = self.abs();
    let s = if a.top() > HUGE {
      a.ln() + Self::ln2()
    } else {
      // x + √(x² + 1) - 1 = x + x² / (√(x² + 1) + 1)
      let a2 = a * a;
      (a + a2 / ((a2 + 1.).sqrt() + 1.)).ln_1p()
    };
    s.with_sign_of(self)
  }

  /// The inverse hyperbolic cosine of `self`, `ln(x + √(x² - 1))`, or
  /// [`DomainError::AcoshBelowOne`] if `self < 1`.
  pub fn try_acosh(self) -> Result<Self, DomainError> {
    if self.is_nan() {
      return Ok(self)
    }
    if self < 1. {
      return Err(DomainError::AcoshBelowOne)
    }
    if self.is_infinite() {
      return Ok(self)
    }
    if self.top() > HUGE {
      return Ok(self.ln() + Self::ln2())
    }
    // With t = x - 1, x + √(x² - 1) - 1 = t + √(2t + t²)
    let t = self - 1.;
    Ok((t + (t.ldexp(1) + t * t).sqrt()).ln_1p())
  }

  /// The inverse hyperbolic cosine of `self`, or NaN if `self < 1`.
  pub fn acosh(self) -> Self {
    self.try_acosh().unwrap_or_else(Self::domain_error)
  }

  /// The inverse hyperbolic tangent of `self`, or [`DomainError::AtanhOutOfRange`] unless
  /// `-1 < self < 1`.
  ///
  /// Summed from its series `Σ x^(2n+1) / (2n+1)` for `|x| < 0.2`, and computed as
  /// `ln(1 + 2x / (1 - x)) / 2` otherwise.
  pub fn try_atanh(self) -> Result<Self, DomainError> {
    if self.is_nan() {
      return Ok(self)
    }
    if self.abs() >= 1. {
      return Err(DomainError::AtanhOutOfRange)
    }
    if self.is_zero() {
      return Ok(self)
    }
    if self.top().abs() < 0.2 {
      let x2 = self * self;
      let mut power = self;
      return Ok(Self::sum_series(self, |n| {
        power = power * x2;
        power / (2 * n + 1) as f64
      }))
    }
    Ok((self.ldexp(1) / (Self::ONE - self)).ln_1p().ldexp(-1))
  }

  /// The inverse hyperbolic tangent of `self`, or NaN unless `-1 < self < 1`.
  pub fn atanh(self) -> Self {
    self.try_atanh().unwrap_or_else(Self::domain_error)
  }
}
