use super::*;
use crate::expansion::{self, exponent, grow_expansion, lowest_bit_exponent, renormalize, Expansion};

impl<
  const N: usize,
> Ereal<N> {
  /// The maximum number of limbs of this type (i.e. parameter `N`).
  pub const LIMBS: usize = {
    assert!(
      N >= 1,
      "An ereal must have at least 1 limb",
    );
    N
  };

  /// The number of bits of precision, `53 × N`.
  ///
  /// Note: this is a nominal figure. Values whose limbs would fall below the smallest normal
  /// `f64` (which happens for `N` above ~19, or for very small values) carry fewer bits.
  pub const MANTISSA_DIGITS: u32 = 53 * Self::LIMBS as u32;

  /// The number of significant decimal digits that this type can represent faithfully,
  /// `⌊53 × N × log10(2)⌋`. This is the default number of digits when formatting.
  pub const DIGITS: u32 = (Self::MANTISSA_DIGITS as u64 * 30103 / 100000) as u32;

  /// A value with a single limb `x`, which must not be zero.
  pub(crate) const fn single(x: f64) -> Self {
    let _ = Self::LIMBS;
    let mut limbs = [0.0; N];
    limbs[0] = x;
    Self { limbs, len: 1 }
  }

  /// Take an expansion and round it to `N` limbs.
  ///
  /// The expansion must be in order of increasing magnitude and (loosely) non-overlapping, as
  /// returned by the functions in [`expansion`]. If it has non-finite limbs, the result is ±∞
  /// (if the limbs add up to that) or NaN.
  pub(crate) fn from_expansion(e: &[f64]) -> Self {
    if e.iter().any(|x| !x.is_finite()) {
      let estimate = expansion::estimate(e);
      return if estimate.is_infinite() { Self::single(estimate) } else { Self::NAN }
    }
    let h = renormalize(e, N);
    let mut result = Self::ZERO;
    for &x in h.iter().filter(|x| **x != 0.0) {
      result.limbs[result.len] = x;
      result.len += 1;
    }
    result
  }

  /// Construct an ereal whose value is the exact sum of `components`, rounded to `N` limbs.
  ///
  /// The components may be given in any order and need not be non-overlapping. NaN or infinite
  /// components give NaN or ±∞.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let x = Ereal::<2>::from_limbs(&[1.0, 1e-30, -1.0]);
  /// assert_eq!(x.limbs(), [1e-30]);
  /// ```
  pub fn from_limbs(components: &[f64]) -> Self {
    if components.iter().any(|x| !x.is_finite()) {
      return Self::from_expansion(components)
    }
    let mut e = Expansion::new();
    for &x in components {
      e = grow_expansion(&e, x);
    }
    Self::from_expansion(&e)
  }

  /// The limbs of `self`, least significant first.
  ///
  /// Zero has no limbs; NaN and infinities have a single non-finite one.
  #[inline]
  pub fn limbs(&self) -> &[f64] {
    &self.limbs[.. self.len]
  }

  /// The number of limbs in use, between 0 and `N`.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// The most significant limb, which approximates `self` to within 1 ulp. Zero for zero.
  #[inline]
  pub fn top(&self) -> f64 {
    match self.len {
      0 => 0.0,
      len => self.limbs[len - 1],
    }
  }

  /// Set `self` to zero.
  #[inline]
  pub fn set_zero(&mut self) {
    self.len = 0
  }

  /// Return `true` if `self` is zero.
  #[inline]
  pub const fn is_zero(&self) -> bool {
    self.len == 0
  }

  /// Return `true` if `self` is exactly one.
  #[inline]
  pub fn is_one(&self) -> bool {
    self.len == 1 && self.limbs[0] == 1.0
  }

  /// Return `true` if `self` is NaN.
  #[inline]
  pub fn is_nan(&self) -> bool {
    self.top().is_nan()
  }

  /// Return `true` if `self` is +∞ or -∞.
  #[inline]
  pub fn is_infinite(&self) -> bool {
    self.top().is_infinite()
  }

  /// Return `true` if `self` is neither NaN nor infinite.
  #[inline]
  pub fn is_finite(&self) -> bool {
    self.top().is_finite()
  }

  /// Return `true` if `self` is strictly greater than zero (including +∞).
  #[inline]
  pub fn is_positive(&self) -> bool {
    self.top() > 0.0
  }

  /// Return `true` if `self` is strictly less than zero (including -∞).
  #[inline]
  pub fn is_negative(&self) -> bool {
    self.top() < 0.0
  }

  /// The sign of `self`: `1` if positive, `-1` if negative, `0` if zero or NaN.
  #[inline]
  pub fn sign(&self) -> i32 {
    match self.top() {
      x if x > 0.0 => 1,
      x if x < 0.0 => -1,
      _ => 0,
    }
  }

  /// `1` if `self` is positive, `-1` if negative, `0` if zero, NaN if NaN.
  ///
  /// Note: unlike [`f64::signum`], the signum of zero is zero (there is no signed zero).
  #[inline]
  pub fn signum(self) -> Self {
    match self.sign() {
      _ if self.is_nan() => Self::NAN,
      1 => Self::ONE,
      -1 => Self::MINUS_ONE,
      _ => Self::ZERO,
    }
  }

  /// The binary exponent of `self`, that is, `⌊log2 |self|⌋` computed from the top limb.
  ///
  /// Returns `None` for zero, NaN, and infinities.
  pub fn scale(&self) -> Option<i32> {
    let top = self.top();
    if top == 0.0 || !top.is_finite() {
      return None
    }
    // The top limb may be a power of two while the rest of the expansion is negative, in which
    // case the value lies just below that power.
    let exp = exponent(top);
    let below = self.len > 1
      && lowest_bit_exponent(top) == exp
      && (self.limbs[self.len - 2] < 0.0) == (top > 0.0);
    Some(if below {exp - 1} else {exp})
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn digits() {
    assert_eq!(Ereal::<1>::DIGITS, f64::DIGITS);
    assert_eq!(Ereal::<2>::DIGITS, 31);
    assert_eq!(Ereal::<4>::DIGITS, 63);
    assert_eq!(Ereal::<19>::DIGITS, 303);
    assert_eq!(Ereal::<4>::MANTISSA_DIGITS, 212);
  }

  #[test]
  fn from_expansion_rounds() {
    let x = Ereal::<2>::from_expansion(&[2f64.powi(-130), 2f64.powi(-60), 1.0]);
    assert_eq!(x.limbs(), [2f64.powi(-60), 1.0]);
    let x = Ereal::<1>::from_expansion(&[2f64.powi(-60), 1.0]);
    assert_eq!(x.limbs(), [1.0]);
  }

  #[test]
  fn from_expansion_zero() {
    assert!(Ereal::<3>::from_expansion(&[]).is_zero());
    assert!(Ereal::<3>::from_expansion(&[0.0]).is_zero());
    assert!(Ereal::<3>::from_expansion(&[1e-30, -1e-30]).is_zero());
  }

  #[test]
  fn from_expansion_special() {
    assert!(Ereal::<3>::from_expansion(&[1.0, f64::NAN]).is_nan());
    assert_eq!(Ereal::<3>::from_expansion(&[1.0, f64::INFINITY]).limbs(), [f64::INFINITY]);
    assert!(Ereal::<3>::from_expansion(&[f64::NEG_INFINITY, f64::INFINITY]).is_nan());
  }

  #[test]
  fn from_limbs_any_order() {
    let x = Ereal::<4>::from_limbs(&[1.0, 1e-20, 1e-40]);
    assert_eq!(x.limbs(), [1e-40, 1e-20, 1.0]);
    let x = Ereal::<4>::from_limbs(&[1.0, 1e-30, -1.0]);
    assert_eq!(x.limbs(), [1e-30]);
  }

  #[test]
  fn predicates() {
    let x = Ereal::<4>::from_limbs(&[1e-20, -3.0]);
    assert!(x.is_negative() && !x.is_positive() && x.is_finite());
    assert_eq!(x.sign(), -1);
    assert_eq!(x.len(), 2);
    assert_eq!(x.top(), -3.0);
    assert!(Ereal::<4>::ONE.is_one());
    assert!(!Ereal::<4>::from_limbs(&[1e-30, 1.0]).is_one());
    assert!(Ereal::<4>::NAN.is_nan() && !Ereal::<4>::NAN.is_finite());
    assert_eq!(Ereal::<4>::NAN.sign(), 0);
    assert!(Ereal::<4>::NEG_INFINITY.is_infinite() && Ereal::<4>::NEG_INFINITY.is_negative());
    assert!(!Ereal::<4>::ZERO.is_positive() && !Ereal::<4>::ZERO.is_negative());
  }

  #[test]
  fn set_zero() {
    let mut x = Ereal::<4>::from_limbs(&[1e-20, 3.0]);
    x.set_zero();
    assert!(x.is_zero());
    assert!(x.limbs().is_empty());
  }

  #[test]
  fn signum() {
    assert_eq!(Ereal::<2>::from(-7.5).signum(), Ereal::MINUS_ONE);
    assert_eq!(Ereal::<2>::from(1e-300).signum(), Ereal::ONE);
    assert_eq!(Ereal::<2>::ZERO.signum(), Ereal::ZERO);
    assert!(Ereal::<2>::NAN.signum().is_nan());
  }

  #[test]
  fn scale() {
    assert_eq!(Ereal::<2>::from(1.0).scale(), Some(0));
    assert_eq!(Ereal::<2>::from(-12.0).scale(), Some(3));
    assert_eq!(Ereal::<2>::from(1e-310).scale(), Some(-1030));
    assert_eq!(Ereal::<2>::from_limbs(&[1.0, -1e-30]).scale(), Some(-1));
    assert_eq!(Ereal::<2>::from_limbs(&[-1.0, 1e-30]).scale(), Some(-1));
    assert_eq!(Ereal::<2>::from_limbs(&[1.0, 1e-30]).scale(), Some(0));
    assert_eq!(Ereal::<2>::ZERO.scale(), None);
    assert_eq!(Ereal::<2>::INFINITY.scale(), None);
  }
}
