use super::*;
use crate::expansion::Expansion;

/// `x × 2^k`, correctly rounded (so exact unless the result overflows or is subnormal).
pub(super) fn ldexp_f64(x: f64, k: i32) -> f64 {
  if x == 0.0 || !x.is_finite() {
    return x
  }
  // Any further and every finite `x` overflows or underflows anyway.
  let mut k = k.clamp(-2200, 2200);
  let mut x = x;
  // Steps of 2^±1000 keep the multiplier itself a normal double.
  while k > 1000 {
    x *= 2f64.powi(1000);
    k -= 1000;
  }
  while k < -1000 {
    x *= 2f64.powi(-1000);
    k += 1000;
  }
  x * 2f64.powi(k)
}

impl<
  const N: usize,
> Ereal<N> {
  /// Returns `self × 2^k`.
  ///
  /// This is exact, unless the result overflows (to ±∞) or some of its limbs fall into the
  /// subnormal range (in which case they are rounded).
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let x = Ereal::<2>::from_limbs(&[1e-20, 3.0]);
  /// assert_eq!(x.ldexp(-1).limbs(), [5e-21, 1.5]);
  /// assert_eq!(x.ldexp(2000), Ereal::INFINITY);
  /// ```
  pub fn ldexp(self, k: i32) -> Self {
    if !self.is_finite() || self.is_zero() || k == 0 {
      return self
    }
    let mut result = self;
    for x in &mut result.limbs[.. result.len] {
      *x = ldexp_f64(*x, k)
    }
    if result.limbs().iter().all(|x| x.is_normal()) {
      result
    } else {
      Self::from_expansion(result.limbs())
    }
  }

  /// Returns the largest integer less than or equal to `self`.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// assert_eq!(Ereal::<2>::from(-2.5).floor(), Ereal::from(-3.));
  /// // 3 - 10^-30 is just below 3
  /// assert_eq!((Ereal::<2>::from(3.) - 1e-30).floor(), Ereal::from(2.));
  /// ```
  pub fn floor(self) -> Self {
    if !self.is_finite() || self.is_zero() {
      return self
    }
    // Going from the top limb down, every limb is an integer until the first one that isn't;
    // everything below that one is smaller than its lowest bit, so flooring it is enough to
    // floor the whole value.
    let mut limbs = Expansion::new();
    for &x in self.limbs().iter().rev() {
      let floor = x.floor();
      limbs.push(floor);
      if floor != x {
        break
      }
    }
    Self::from_limbs(&limbs)
  }

  /// Returns the smallest integer greater than or equal to `self`.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// assert_eq!(Ereal::<2>::from(-2.5).ceil(), Ereal::from(-2.));
  /// assert_eq!((Ereal::<2>::from(3.) + 1e-30).ceil(), Ereal::from(4.));
  /// ```
  pub fn ceil(self) -> Self {
    -(-self).floor()
  }

  /// Returns the integer part of `self`, rounding towards zero.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// assert_eq!(Ereal::<2>::from(-2.5).trunc(), Ereal::from(-2.));
  /// assert_eq!(Ereal::<2>::from(2.5).trunc(), Ereal::from(2.));
  /// ```
  pub fn trunc(self) -> Self {
    if self.is_negative() { self.ceil() } else { self.floor() }
  }

  /// Returns the integer nearest to `self`, rounding half-way cases away from zero (like
  /// [`f64::round`]).
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// assert_eq!(Ereal::<2>::from(2.5).round(), Ereal::from(3.));
  /// assert_eq!(Ereal::<2>::from(-2.5).round(), Ereal::from(-3.));
  /// assert_eq!((Ereal::<2>::from(2.5) - 1e-30).round(), Ereal::from(2.));
  /// ```
  pub fn round(self) -> Self {
    if !self.is_finite() {
      return self
    }
    let trunc = self.trunc();
    let fract = self - trunc;
    if fract.abs() >= 0.5 {
      trunc + self.signum()
    } else {
      trunc
    }
  }

  /// Returns the fractional part of `self`, that is, `self - self.trunc()`.
  ///
  /// This is always exact.
  pub fn fract(self) -> Self {
    if !self.is_finite() {
      return Self::NAN
    }
    self - self.trunc()
  }

  /// Returns `true` if `self` is an integer (zero included; NaN and infinities excluded).
  pub fn is_integer(&self) -> bool {
    // Like in `floor`, the value is an integer iff every limb is.
    self.is_finite() && self.limbs().iter().all(|x| x.fract() == 0.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::Integer;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::{Ceiling, Floor, PowerOf2};
  use proptest::prelude::*;

  #[test]
  fn ldexp_f64_steps() {
    assert_eq!(ldexp_f64(1.0, 1023), 2f64.powi(1023));
    assert_eq!(ldexp_f64(f64::MAX, -2000), f64::MAX * 2f64.powi(-1000) * 2f64.powi(-1000));
    assert_eq!(ldexp_f64(1.0, -1100), 0.0);
    assert_eq!(ldexp_f64(f64::MIN_POSITIVE, -52), f64::from_bits(1));
    assert_eq!(ldexp_f64(f64::from_bits(1), 2000), 2f64.powi(926));
    assert_eq!(ldexp_f64(3.0, i32::MAX), f64::INFINITY);
    assert_eq!(ldexp_f64(-3.0, i32::MIN), -0.0);
  }

  #[test]
  fn ldexp_special() {
    assert!(Ereal::<2>::NAN.ldexp(3).is_nan());
    assert!(Ereal::<2>::ZERO.ldexp(3).is_zero());
    assert_eq!(Ereal::<2>::NEG_INFINITY.ldexp(-3), Ereal::NEG_INFINITY);
    assert!(Ereal::<2>::ONE.ldexp(-1100).is_zero());
    assert_eq!(Ereal::<2>::MINUS_ONE.ldexp(1024), Ereal::NEG_INFINITY);
  }

  #[test]
  fn ldexp_subnormal() {
    let x = Ereal::<2>::from_limbs(&[1e-20, 1.0]).ldexp(-1030);
    assert_eq!(x.top(), 2f64.powi(-1030));
    assert_eq!(x.len(), 1);
  }

  #[test]
  fn floor_by_tail() {
    let x = Ereal::<3>::from_limbs(&[-1e-40, 1e20]);
    assert_eq!(x.floor(), Ereal::from(1e20) - 1.);
    assert_eq!(x.ceil(), Ereal::from(1e20));
    assert_eq!(x.trunc(), Ereal::from(1e20) - 1.);
    assert_eq!(x.round(), Ereal::from(1e20));
  }

  #[test]
  fn big_integers() {
    let x = Ereal::<2>::from_limbs(&[0.25, 1e30]);
    assert_eq!(x.floor(), Ereal::from(1e30));
    assert_eq!(x.ceil(), Ereal::from(1e30) + 1.);
    assert_eq!(x.fract(), Ereal::from(0.25));
    assert!(!x.is_integer());
    assert!(x.floor().is_integer());
  }

  #[test]
  fn small() {
    assert!(Ereal::<2>::from(0.3).floor().is_zero());
    assert_eq!(Ereal::<2>::from(-0.3).floor(), Ereal::MINUS_ONE);
    assert!(Ereal::<2>::from(-0.3).ceil().is_zero());
    assert!(Ereal::<2>::from(0.49).round().is_zero());
    assert_eq!(Ereal::<2>::from(0.5).round(), Ereal::ONE);
  }

  #[test]
  fn special() {
    assert!(Ereal::<2>::NAN.floor().is_nan());
    assert_eq!(Ereal::<2>::INFINITY.ceil(), Ereal::INFINITY);
    assert_eq!(Ereal::<2>::NEG_INFINITY.round(), Ereal::NEG_INFINITY);
    assert!(Ereal::<2>::INFINITY.fract().is_nan());
    assert!(!Ereal::<2>::INFINITY.is_integer());
    assert!(Ereal::<2>::ZERO.is_integer());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn floor_exact(x in Ereal::<4>::cases_proptest()) {
      prop_assert_eq!(x.floor().rational(), Rational::from(Floor::floor(x.rational())));
      prop_assert_eq!(x.ceil().rational(), Rational::from(Ceiling::ceiling(x.rational())));
    }

    #[test]
    fn fract_in_range(x in Ereal::<4>::cases_proptest()) {
      let fract = x.fract();
      prop_assert!(fract.abs() < 1.);
      prop_assert!(fract.is_zero() || fract.is_negative() == x.is_negative());
      prop_assert!((x - fract).is_integer());
    }

    #[test]
    fn integers(n in any::<i64>()) {
      let x = Ereal::<2>::from(n);
      prop_assert!(x.is_integer());
      prop_assert_eq!(x.floor(), x);
      prop_assert_eq!(x.round(), x);
      prop_assert_eq!(Rational::from(Integer::from(n)), x.rational());
    }

    #[test]
    fn ldexp_exact(x in Ereal::<4>::cases_proptest(), k in -600i32 .. 600) {
      prop_assert_eq!(x.ldexp(k).rational(), x.rational() * Rational::power_of_2(k as i64));
    }
  }
}
