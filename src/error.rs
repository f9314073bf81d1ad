//! Error types.

use thiserror::Error;

/// A math function was called outside its mathematical domain.
///
/// Every fallible function on [`Ereal`](crate::Ereal) comes in two forms: `try_foo`, which
/// returns this error, and `foo`, which instead returns [NaN](crate::Ereal::NAN) (or, with the
/// `panic_on_domain_error` cargo feature, panics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DomainError {
  #[error("division by zero")]
  DivisionByZero,
  #[error("square root of a negative number")]
  NegativeSqrt,
  #[error("logarithm of a non-positive number")]
  NonPositiveLogarithm,
  #[error("inverse sine or cosine of a number outside [-1, 1]")]
  InverseTrigOutOfRange,
  #[error("inverse hyperbolic cosine of a number below 1")]
  AcoshBelowOne,
  #[error("inverse hyperbolic tangent of a number outside (-1, 1)")]
  AtanhOutOfRange,
  #[error("negative number raised to a non-integer power")]
  NegativeBaseNonIntegerPower,
}

/// The error returned when parsing an [`Ereal`](crate::Ereal) from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErealError {
  #[error("cannot parse an ereal from an empty string")]
  Empty,
  #[error("ereal literal has no digits")]
  NoDigits,
  #[error("invalid character {0:?} in ereal literal")]
  InvalidCharacter(char),
  #[error("malformed exponent in ereal literal")]
  InvalidExponent,
  #[error("unsupported radix {0}, only radix 10 is supported")]
  UnsupportedRadix(u32),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(DomainError::NegativeSqrt.to_string(), "square root of a negative number");
    assert_eq!(ParseErealError::InvalidCharacter('x').to_string(), "invalid character 'x' in ereal literal");
    assert_eq!(ParseErealError::UnsupportedRadix(16).to_string(), "unsupported radix 16, only radix 10 is supported");
  }
}
