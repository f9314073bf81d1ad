use super::*;
use crate::error::DomainError;

impl<
  const N: usize,
> Ereal<N> {
  /// The remainder of `self / other`, truncating the quotient (so the result has the sign of
  /// `self`, like `%` on primitive floats), or [`DomainError::DivisionByZero`] if `other` is
  /// zero.
  ///
  /// This is the fallible form of the `%` operator, which instead returns [NaN](Self::NAN) when
  /// `other` is zero.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let x = Ereal::<2>::from(-7.5);
  /// assert_eq!(x.try_rem(Ereal::from(2.)), Ok(Ereal::from(-1.5)));
  /// ```
  pub fn try_rem(self, other: Self) -> Result<Self, DomainError> {
    if other.is_zero() && !self.is_nan() {
      return Err(DomainError::DivisionByZero)
    }
    Ok(self.rem_kernel(other))
  }

  pub(crate) fn rem(self, other: Self) -> Self {
    self.try_rem(other).unwrap_or_else(Self::domain_error)
  }

  fn rem_kernel(self, other: Self) -> Self {
    if self.is_nan() || other.is_nan() || self.is_infinite() {
      return Self::NAN
    }
    if other.is_infinite() || self.is_zero() {
      return self
    }
    let quotient = self.div(other).trunc();
    let remainder = self.sub(quotient.mul(other));
    // The quotient may be off by one if `self / other` is within rounding error of an integer;
    // if so, the remainder has the wrong sign or magnitude, and we step it back by `|other|`.
    let off_by_one = !remainder.is_zero() && (
      remainder.is_negative() != self.is_negative()
      || remainder.abs() >= other.abs()
    );
    if !off_by_one {
      remainder
    } else if remainder.is_negative() == other.is_negative() {
      remainder.sub(other)
    } else {
      remainder.add(other)
    }
  }
}

super::mk_ops!{Rem, RemAssign, rem, rem_assign}
