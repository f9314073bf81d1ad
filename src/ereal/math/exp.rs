use super::*;

/// The reduced argument of the exponential is halved this many times before summing the series,
/// and the result squared back as many times.
const HALVINGS: i32 = 8;

/// `e^x` overflows above this.
const OVERFLOW: f64 = 709.79;

/// `e^x` underflows to zero below this.
const UNDERFLOW: f64 = -745.2;

impl<
  const N: usize,
> Ereal<N> {
  /// `e^r - 1`, for `|r|` below 1/2 or so.
  ///
  /// The Taylor series is summed for `r / 2^8`, and the result brought back by squaring, in the
  /// form `(1 + m)² - 1 = m (m + 2)` so that no relative precision is lost for small `r`.
  fn expm1_reduced(r: Self) -> Self {
    let r = r.ldexp(-HALVINGS);
    let mut term = r;
    let mut m = Self::sum_series(r, |n| {
      term = term * r / (n + 1) as f64;
      term
    });
    for _ in 0 .. HALVINGS {
      m = m * (m + 2.);
    }
    m
  }

  /// The exponential function, `e^self`.
  ///
  /// The argument is reduced to `r = self - k ln 2` with `|r| ≤ ln(2)/2`, so that
  /// `e^self = 2^k e^r`.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let e = Ereal::<4>::ONE.exp();
  /// assert!((e - Ereal::e()).abs() < 1e-57);
  /// ```
  pub fn exp(self) -> Self {
    if self.is_nan() {
      return self
    }
    if self.is_zero() {
      return Self::ONE
    }
    if self.top() > OVERFLOW {
      return Self::INFINITY
    }
    if self.top() < UNDERFLOW {
      return Self::ZERO
    }
    let ln2 = Self::ln2();
    let k = (self / ln2).round();
    let m = Self::expm1_reduced(self - ln2 * k);
    (m + 1.).ldexp(k.to_f64() as i32)
  }

  /// `2^self`. Exact if `self` is an integer.
  pub fn exp2(self) -> Self {
    if !self.is_finite() {
      return Self::from(self.top().exp2())
    }
    // Split off the integer part, which is applied exactly.
    let k = self.round();
    let power = k.top().clamp(-2200., 2200.) as i32;
    let f = self - k;
    if f.is_zero() {
      return Self::ONE.ldexp(power)
    }
    (f * Self::ln2()).exp().ldexp(power)
  }

  /// `10^self`. Exact if `self` is an integer and the power of ten fits in `N` limbs.
  pub fn exp10(self) -> Self {
    if !self.is_finite() {
      return Self::from(10f64.powf(self.top()))
    }
    if self.is_integer() {
      return Self::ONE.scale10(self.top().clamp(-2000., 2000.) as i64)
    }
    (self * Self::ln10()).exp()
  }

  /// `e^self - 1`, accurate even when `self` is close to zero.
  pub fn expm1(self) -> Self {
    if self.is_nan() || self.is_zero() {
      return self
    }
    if self.top().abs() < 0.5 {
      return Self::expm1_reduced(self)
    }
    self.exp() - 1.
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use proptest::prelude::*;

  /// Relative difference between `x` and `y`, as an `f64`.
  fn relative<const N: usize>(x: Ereal<N>, y: Ereal<N>) -> f64 {
    ((x - y) / y).abs().to_f64()
  }

  #[test]
  fn e() {
    assert_eq!(Ereal::<4>::ZERO.exp(), Ereal::ONE);
    assert!(relative(Ereal::<4>::ONE.exp(), Ereal::e()) < 1e-58);
    assert!(relative(Ereal::<8>::ONE.exp(), Ereal::e()) < 1e-120);
    assert!(relative(Ereal::<16>::ONE.exp(), Ereal::e()) < 1e-245);
  }

  #[test]
  fn ln2() {
    assert!(relative(Ereal::<4>::ln2().exp(), Ereal::from(2.)) < 1e-58);
    assert!(relative(Ereal::<8>::ln10().exp(), Ereal::from(10.)) < 1e-120);
  }

  #[test]
  fn matches_f64() {
    for x in [-700f64, -20., -1., -1e-10, 1e-10, 0.3, 1., 2.5, 100., 709.] {
      let y = Ereal::<2>::from(x).exp().to_f64();
      assert!((y - x.exp()).abs() <= 2. * f64::EPSILON * y, "{x}");
    }
  }

  #[test]
  fn special() {
    assert!(Ereal::<4>::NAN.exp().is_nan());
    assert_eq!(Ereal::<4>::INFINITY.exp(), Ereal::INFINITY);
    assert!(Ereal::<4>::NEG_INFINITY.exp().is_zero());
    assert_eq!(Ereal::<4>::NEG_INFINITY.expm1(), Ereal::MINUS_ONE);
    assert_eq!(Ereal::<4>::INFINITY.exp2(), Ereal::INFINITY);
    assert!(Ereal::<4>::NEG_INFINITY.exp10().is_zero());
  }

  #[test]
  fn overflow_underflow() {
    assert_eq!(Ereal::<4>::from(710.).exp(), Ereal::INFINITY);
    assert!(Ereal::<4>::from(709.).exp().is_finite());
    assert!(Ereal::<4>::from(-746.).exp().is_zero());
    assert!(Ereal::<4>::from(-740.).exp().is_positive());
    assert_eq!(Ereal::<4>::from(1024.).exp2(), Ereal::INFINITY);
  }

  #[test]
  fn exact_powers() {
    assert_eq!(Ereal::<2>::from(10.).exp2(), Ereal::from(1024.));
    assert_eq!(Ereal::<2>::from(-3.).exp2(), Ereal::from(0.125));
    assert_eq!(Ereal::<2>::from(-1074.).exp2().limbs(), [f64::from_bits(1)]);
    assert_eq!(Ereal::<2>::from(3.).exp10(), Ereal::from(1000.));
    assert_eq!(Ereal::<2>::from(30.).exp10(), "1e30".parse::<Ereal<2>>().unwrap());
    assert_eq!(Ereal::<2>::from(-1.).exp10(), Ereal::ONE / 10.);
    assert_eq!(Ereal::<2>::ZERO.exp10(), Ereal::ONE);
  }

  #[test]
  fn fractional_powers() {
    let root = Ereal::<4>::from(0.5).exp2();
    assert!(relative(root * root, Ereal::from(2.)) < 1e-58);
    let root = Ereal::<4>::from(0.5).exp10();
    assert!(relative(root * root, Ereal::from(10.)) < 1e-58);
  }

  #[test]
  fn expm1_small() {
    let x = Ereal::<3>::from(1e-30);
    let series = x + x * x / 2. + x * x * x / 6.;
    assert!(relative(x.expm1(), series) < 1e-45);
    assert!(relative(Ereal::<3>::from(0.4).expm1(), Ereal::from(0.4).exp() - 1.) < 1e-45);
    assert!(relative(Ereal::<3>::from(-0.6).expm1(), Ereal::from(-0.6).exp() - 1.) < 1e-45);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn inverse(x in -300f64 .. 300., tail in -1f64 .. 1.) {
      let x = Ereal::<3>::from(x) + tail * 1e-20;
      prop_assert!(relative(x.exp() * (-x).exp(), Ereal::ONE) < 1e-42, "{x:?}");
    }

    #[test]
    fn sum(a in -100f64 .. 100., b in -100f64 .. 100.) {
      let (a, b) = (Ereal::<3>::from(a), Ereal::<3>::from(b));
      prop_assert!(relative((a + b).exp(), a.exp() * b.exp()) < 1e-42, "{a:?} {b:?}");
    }

    #[test]
    fn integer_exp2(k in -1000i32 .. 1000) {
      let x = Ereal::<2>::from(k).exp2();
      prop_assert_eq!(x.limbs(), [2f64.powi(k)]);
    }
  }
}
