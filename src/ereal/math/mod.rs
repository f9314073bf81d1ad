//! Elementary functions of ereals.
//!
//! Every function first reduces its argument to a small interval (by powers of two, multiples of
//! π/2, or multiples of ln 2), and then either sums a Taylor series until its terms become
//! negligible, or runs a Newton iteration starting from the `f64` result until the correction
//! is below the precision of `N` limbs. All intermediate steps are carried out in `Ereal<N>`
//! arithmetic, so the work grows with `N` but the code is the same for every precision.
//!
//! Functions that are undefined for part of their domain come in pairs: `try_foo` returns a
//! [`DomainError`], and `foo` returns NaN instead (see [`Ereal::domain_error`]).

use super::*;
use crate::error::DomainError;
use crate::expansion::exponent;

/// Square root, cube root, and hypotenuse
mod sqrt;

/// Exponentials
mod exp;

/// Logarithms
mod log;

/// Powers
mod pow;

/// Sine, cosine, and tangent
mod trig;

/// Inverse sine, cosine, and tangent
mod inverse_trig;

/// Hyperbolic functions and their inverses
mod hyperbolic;

#[cfg(test)]
mod progressive;

/// Newton iterations roughly double (or triple) the number of correct bits each step, so this is
/// far more than any `N` needs.
const MAX_NEWTON_STEPS: usize = 32;

/// Reduced arguments are below 1, so series converge at least as fast as `1/n!` or `x^n` with
/// `x ≤ 1/3`; this is enough for the largest precisions.
const MAX_SERIES_TERMS: usize = 5000;

impl<
  const N: usize,
> Ereal<N> {
  /// Turn a domain error into the NaN sentinel returned by the infallible form of a function.
  ///
  /// With the `panic_on_domain_error` feature, this panics instead.
  pub(crate) fn domain_error(err: DomainError) -> Self {
    if cfg!(feature = "panic_on_domain_error") {
      panic!("ereal domain error: {err}")
    }
    ::log::debug!("domain error ({err}), returning NaN");
    Self::NAN
  }

  /// Return `true` if adding `term` to `sum` cannot change `sum` rounded to `N` limbs.
  pub(crate) fn is_negligible(term: &Self, sum: &Self) -> bool {
    term.is_zero() || exponent(term.top()) < exponent(sum.top()) - 53 * N as i32 - 8
  }

  /// Sum the series `first + term(1) + term(2) + ...`, stopping at the first negligible term.
  ///
  /// `term` is called with increasing `n` and may keep state between calls (typically the
  /// previous power of the argument).
  pub(crate) fn sum_series(first: Self, mut term: impl FnMut(usize) -> Self) -> Self {
    let mut sum = first;
    for n in 1 .. MAX_SERIES_TERMS {
      let t = term(n);
      if Self::is_negligible(&t, &sum) {
        return sum
      }
      sum += t;
    }
    ::log::warn!("series did not converge after {MAX_SERIES_TERMS} terms, at {:e}", sum.top());
    sum
  }

  /// Newton iteration: starting from `x`, repeatedly add `correction(x)` until the correction
  /// is below the precision of `N` limbs, or stops decreasing (meaning that what is left is
  /// rounding noise).
  pub(crate) fn newton(what: &str, x: Self, mut correction: impl FnMut(Self) -> Self) -> Self {
    let mut x = x;
    let mut previous = f64::INFINITY;
    for step in 0 .. MAX_NEWTON_STEPS {
      let delta = correction(x);
      if !delta.is_finite() {
        ::log::warn!("{what}: non-finite Newton correction at step {step}");
        return x
      }
      x += delta;
      ::log::trace!("{what}: step {step}, correction {:e}", delta.top());
      if delta.is_zero() || exponent(delta.top()) < exponent(x.top()) - 53 * N as i32 + 8 {
        return x
      }
      let size = delta.top().abs();
      if size >= previous {
        return x
      }
      previous = size;
    }
    ::log::warn!("{what}: Newton iteration did not converge after {MAX_NEWTON_STEPS} steps");
    x
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn negligible() {
    let one = Ereal::<2>::ONE;
    assert!(Ereal::is_negligible(&Ereal::ZERO, &one));
    assert!(Ereal::is_negligible(&Ereal::from(2f64.powi(-120)), &one));
    assert!(!Ereal::is_negligible(&Ereal::from(2f64.powi(-100)), &one));
    assert!(!Ereal::is_negligible(&one, &Ereal::ZERO));
  }

  #[test]
  fn series() {
    // Σ 2^-n = 2
    let mut power = Ereal::<4>::ONE;
    let sum = Ereal::sum_series(Ereal::ONE, |_| { power = power.ldexp(-1); power });
    assert_eq!(sum, Ereal::from(2.) - power.ldexp(1));
    assert!(sum < 2.);
  }

  #[test]
  fn newton_sqrt_two() {
    // x ← x + (2 - x²) / 2x
    let x = Ereal::<4>::newton("test", Ereal::from(1.4), |x| (Ereal::from(2.) - x * x) / (x * 2.));
    assert!((x * x - 2.).abs() < 1e-60);
  }

  #[test]
  fn domain_error() {
    if cfg!(feature = "panic_on_domain_error") {
      return
    }
    assert!(Ereal::<2>::domain_error(DomainError::NegativeSqrt).is_nan());
  }
}
