use super::*;
use crate::error::DomainError;
use crate::expansion::{divide_by_scalar, exponent, expansion_quotient};

impl<
  const N: usize,
> Ereal<N> {
  /// Divide `self` by `other`, or return [`DomainError::DivisionByZero`] if `other` is zero.
  ///
  /// This is the fallible form of the `/` operator, which instead returns [NaN](Self::NAN) when
  /// dividing by zero.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::{Ereal, DomainError};
  /// let x = Ereal::<2>::from(3.);
  /// assert_eq!(x.try_div(Ereal::from(4.)), Ok(Ereal::from(0.75)));
  /// assert_eq!(x.try_div(Ereal::ZERO), Err(DomainError::DivisionByZero));
  /// ```
  pub fn try_div(self, other: Self) -> Result<Self, DomainError> {
    if other.is_zero() && !self.is_nan() {
      return Err(DomainError::DivisionByZero)
    }
    Ok(self.div_kernel(other))
  }

  pub(crate) fn div(self, other: Self) -> Self {
    self.try_div(other).unwrap_or_else(Self::domain_error)
  }

  fn div_kernel(self, other: Self) -> Self {
    if self.is_nan() || other.is_nan() {
      return Self::NAN
    }
    if !self.is_finite() || !other.is_finite() {
      return Self::from(self.top() / other.top())
    }
    if self.is_zero() {
      return Self::ZERO
    }
    let estimate = self.top() / other.top();
    if estimate.is_infinite() {
      return Self::from(estimate)
    }
    if estimate == 0.0 {
      return Self::ZERO
    }
    // Bring both operands to [1, 2) first: the reciprocal of a huge divisor would otherwise
    // lose its lower limbs to underflow.
    let (scale_self, scale_other) = (exponent(self.top()), exponent(other.top()));
    let (a, b) = (self.ldexp(-scale_self), other.ldexp(-scale_other));
    // Long division by a single limb converges one limb per step and needs no reciprocal.
    let quotient = match b.len {
      1 => divide_by_scalar(a.limbs(), b.limbs[0], N),
      _ => expansion_quotient(a.limbs(), b.limbs(), N),
    };
    Self::from_expansion(&quotient).ldexp(scale_self - scale_other)
  }
}

super::mk_ops!{Div, DivAssign, div, div_assign}
