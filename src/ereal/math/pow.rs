use super::*;
use core::cmp::Ordering;
use num_traits::ToPrimitive;

impl<
  const N: usize,
> Ereal<N> {
  /// `self^n`, by binary powering.
  fn powu(self, n: u64) -> Self {
    let mut result = Self::ONE;
    let mut power = self;
    let mut n = n;
    while n > 0 {
      if n & 1 == 1 {
        result = result * power;
      }
      n >>= 1;
      if n > 0 {
        power = power * power;
      }
    }
    result
  }

  /// `self^n`, by binary powering. A domain error if `self` is zero and `n` negative.
  pub fn try_powi(self, n: i32) -> Result<Self, DomainError> {
    if n >= 0 {
      return Ok(self.powu(n as u64))
    }
    if self.is_zero() {
      return Err(DomainError::DivisionByZero)
    }
    Ok(Self::ONE / self.powu(n.unsigned_abs() as u64))
  }

  /// `self^n`, or NaN if `self` is zero and `n` negative.
  pub fn powi(self, n: i32) -> Self {
    self.try_powi(n).unwrap_or_else(Self::domain_error)
  }

  /// `self^y`.
  ///
  /// Integer exponents are computed by binary powering, so that negative bases are allowed and
  /// small cases are exact. Otherwise the result is `e^(y ln self)`, and a negative base
  /// is a [`DomainError::NegativeBaseNonIntegerPower`]. Zero to a negative power is a
  /// [`DomainError::DivisionByZero`].
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::{Ereal, DomainError};
  /// let x = Ereal::<2>::from(-2.);
  /// assert_eq!(x.try_pow(Ereal::from(15.)), Ok(Ereal::from(-32768.)));
  /// assert_eq!(x.try_pow(Ereal::from(2.5)), Err(DomainError::NegativeBaseNonIntegerPower));
  /// ```
  pub fn try_pow(self, y: Self) -> Result<Self, DomainError> {
    if y.is_zero() || self.is_one() {
      return Ok(Self::ONE)
    }
    if self.is_nan() || y.is_nan() {
      return Ok(Self::NAN)
    }
    if y.is_infinite() {
      let magnitude = self.abs();
      return Ok(match (magnitude.partial_cmp(&Self::ONE), y.is_positive()) {
        (Some(Ordering::Equal), _) => Self::ONE,
        (Some(Ordering::Greater), true) | (Some(Ordering::Less), false) => Self::INFINITY,
        _ => Self::ZERO,
      })
    }
    if self.is_infinite() {
      return Ok(Self::from(self.top().powf(y.top())))
    }
    if self.is_zero() {
      return if y.is_negative() { Err(DomainError::DivisionByZero) } else { Ok(Self::ZERO) }
    }
    if y.is_integer() {
      if let Some(n) = y.to_i64() {
        let power = self.powu(n.unsigned_abs());
        return Ok(if n < 0 { Self::ONE / power } else { power })
      }
      // Too large for powering: the result over- or underflows unless `self` is very close to 1.
      let magnitude = (y * self.abs().try_ln()?).exp();
      let odd = y.limbs().iter().any(|x| x % 2. != 0.);
      return Ok(if self.is_negative() && odd { -magnitude } else { magnitude })
    }
    if self.is_negative() {
      return Err(DomainError::NegativeBaseNonIntegerPower)
    }
    Ok((y * self.try_ln()?).exp())
  }

  /// `self^y`, or NaN on a domain error. See [`Self::try_pow`].
  pub fn pow(self, y: Self) -> Self {
    self.try_pow(y).unwrap_or_else(Self::domain_error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ereal::test::is_close;
  use malachite::base::num::arithmetic::traits::Pow;
  use proptest::prelude::*;

  fn pow<const N: usize>(x: f64, y: f64) -> Ereal<N> {
    Ereal::<N>::from(x).pow(Ereal::from(y))
  }

  #[test]
  fn trivial() {
    assert_eq!(pow::<4>(5., 0.), Ereal::ONE);
    assert_eq!(pow::<4>(5., 1.), Ereal::from(5.));
    assert_eq!(pow::<4>(1., 42.), Ereal::ONE);
    assert_eq!(pow::<4>(0., 2.), Ereal::ZERO);
    assert_eq!(pow::<4>(f64::NAN, 0.), Ereal::ONE);
    assert_eq!(pow::<4>(1., f64::NAN), Ereal::ONE);
  }

  #[test]
  fn integer() {
    assert_eq!(pow::<4>(2., 3.), Ereal::from(8.));
    assert_eq!(pow::<4>(10., 2.), Ereal::from(100.));
    assert_eq!(pow::<4>(3., 4.), Ereal::from(81.));
    assert_eq!(pow::<4>(2., -1.), Ereal::from(0.5));
    assert_eq!(pow::<4>(10., -2.), Ereal::ONE / 100.);
  }

  #[test]
  fn negative_base() {
    assert_eq!(pow::<4>(-2., 15.), Ereal::from(-32768.));
    assert_eq!(pow::<4>(-2., -10.), Ereal::from(1. / 1024.));
    assert_eq!(pow::<4>(-3., 20.), Ereal::from(3486784401.));
    assert_eq!(pow::<4>(-3., 21.), Ereal::from(-10460353203.));
    assert_eq!(
      Ereal::<4>::from(-2.).try_pow(Ereal::from(2.5)),
      Err(DomainError::NegativeBaseNonIntegerPower),
    );
  }

  #[test]
  #[cfg(not(feature = "panic_on_domain_error"))]
  fn negative_base_is_nan() {
    assert!(pow::<4>(-2., 2.5).is_nan());
    assert!(pow::<4>(0., -1.).is_nan());
  }

  #[test]
  fn zero_base() {
    assert_eq!(Ereal::<4>::ZERO.try_pow(Ereal::from(-2.)), Err(DomainError::DivisionByZero));
    assert_eq!(Ereal::<4>::ZERO.try_powi(-2), Err(DomainError::DivisionByZero));
    assert_eq!(pow::<4>(0., 0.5), Ereal::ZERO);
  }

  #[test]
  fn infinite() {
    assert_eq!(pow::<4>(2., f64::INFINITY), Ereal::INFINITY);
    assert_eq!(pow::<4>(0.5, f64::INFINITY), Ereal::ZERO);
    assert_eq!(pow::<4>(0.5, f64::NEG_INFINITY), Ereal::INFINITY);
    assert_eq!(pow::<4>(-1., f64::INFINITY), Ereal::ONE);
    assert_eq!(pow::<4>(f64::INFINITY, -1.), Ereal::ZERO);
    assert_eq!(pow::<4>(f64::NEG_INFINITY, 3.), Ereal::NEG_INFINITY);
    assert_eq!(pow::<4>(2., 1e20), Ereal::INFINITY);
    assert_eq!(pow::<4>(-2., -1e20), Ereal::ZERO);
  }

  #[test]
  fn fractional() {
    let x = pow::<8>(2., 3.5);
    assert!(((x * x) / Ereal::from(128.) - 1.).abs() < 1e-115);
    // The double 0.1 is not a tenth; a parsed one is, to 4 limbs
    let tenth: Ereal<4> = "0.1".parse().unwrap();
    let x = Ereal::<4>::from(1e10).pow(tenth);
    assert!((x - 10.).abs() < 1e-55);
  }

  #[test]
  fn powi() {
    assert_eq!(Ereal::<2>::from(3.).powi(0), Ereal::ONE);
    assert_eq!(Ereal::<2>::NAN.powi(0), Ereal::ONE);
    assert_eq!(Ereal::<2>::from(-0.5).powi(-3), Ereal::from(-8.));
    assert_eq!(Ereal::<3>::from(10.).powi(40), "1e40".parse::<Ereal<3>>().unwrap());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn powi_accurate(x in Ereal::<4>::cases_proptest(), n in 0i32 .. 8) {
      let exact = x.rational().pow(n as u64);
      prop_assert!(is_close(&x.powi(n), &exact, 185), "{x:?}^{n}");
    }

    #[test]
    fn integer_matches_powi(x in Ereal::<3>::cases_proptest(), n in -20i32 .. 20) {
      prop_assert_eq!(x.pow(Ereal::from(n)), x.powi(n));
    }

    #[test]
    fn roots(x in Ereal::<3>::cases_proptest_positive(), n in 2i32 .. 6) {
      let root = x.pow(Ereal::ONE / n as f64);
      prop_assert!(is_close(&root.powi(n), &x.rational(), 125), "{x:?}");
    }
  }
}
