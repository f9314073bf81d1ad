//! Exact conversion between decimal and binary.
//!
//! A decimal value `digits × 10^k` is `digits × 5^k × 2^k`, and powers of five are exact
//! expansions (built in steps of 5^22, the largest power of five that is a double). So both
//! directions are carried out on exact expansions, as a ratio `num / den × 2^exp`, and rounded
//! only once at the end: to `N` limbs when parsing or scaling, and to the requested number of
//! digits when formatting.

use super::*;
use super::round::ldexp_f64;
use crate::expansion::{
  Expansion,
  compare_adaptive,
  compress,
  estimate,
  exponent,
  fast_expansion_sum,
  grow_expansion,
  lowest_bit_exponent,
  most_significant,
  negate,
  scale_expansion,
  sign_adaptive,
};
use core::cmp::Ordering;

/// Binary exponent of the most significant limb of a normalized [`Scaled`]. Leaves room above
/// for a few bits of growth, and below for values about 2000 bits wide.
const ANCHOR: i32 = 960;

/// 5^22 < 2^53 is the largest power of five that is an exact double.
const POW5_STEP: u64 = 22;

/// Digits per chunk when accumulating a decimal significand: 10^15 < 2^53, so every chunk and
/// its scale factor are exact doubles.
const CHUNK_DIGITS: usize = 15;

/// At most this many significant digits of a literal are read exactly; the rest only decide the
/// direction of rounding. Keeps `5^k` within the anchored range.
const MAX_DIGITS: usize = 380;

/// Decimal exponents (of the leading digit) above this overflow, and below the negative of
/// [`MIN_DECIMAL_EXPONENT`] underflow, whatever the digits.
const MAX_DECIMAL_EXPONENT: i64 = 310;
const MIN_DECIMAL_EXPONENT: i64 = -330;

/// Width in bits of the part of a value kept when scaling by a power of ten.
const SCALE_WINDOW: i32 = 1100;

/// Width in bits of the part of a value kept when printing it.
const FORMAT_WINDOW: i32 = 1900;

/// `x × 2^k`, for `k` of any size.
fn ldexp(x: f64, k: i64) -> f64 {
  ldexp_f64(x, k.clamp(-4000, 4000) as i32)
}

/// Every limb of `e` times `2^k`.
fn shifted(e: &[f64], k: i32) -> Expansion {
  e.iter().map(|&x| ldexp_f64(x, k)).collect()
}

/// The exact value `limbs × 2^exp`.
///
/// Once normalized, the top limb of `limbs` has exponent [`ANCHOR`], whatever the magnitude of
/// the value, so that the exact products and sums on it neither overflow nor underflow.
#[derive(Clone, Debug)]
struct Scaled {
  limbs: Expansion,
  exp: i64,
}

impl Scaled {
  fn zero() -> Self {
    Self { limbs: Expansion::new(), exp: 0 }
  }

  fn new(e: &[f64]) -> Self {
    let mut result = Self { limbs: compress(e), exp: 0 };
    result.normalize();
    result
  }

  /// `10^k`, exactly.
  fn pow10(k: u64) -> Self {
    let mut result = Self::new(&[1.0]);
    result.mul_pow5(k);
    result.exp += k as i64;
    result
  }

  fn is_zero(&self) -> bool {
    most_significant(&self.limbs).is_none()
  }

  fn normalize(&mut self) {
    let Some(top) = most_significant(&self.limbs) else { return };
    let shift = ANCHOR - exponent(top);
    if shift != 0 {
      self.limbs = shifted(&self.limbs, shift);
      self.exp -= shift as i64;
    }
  }

  /// Multiply by `m`, a double with few enough bits that the product stays exact.
  fn mul(&mut self, m: f64) {
    if self.is_zero() {
      return
    }
    self.limbs = compress(&scale_expansion(&self.limbs, m));
    self.normalize();
  }

  /// Add `x`, an integer no larger than the value.
  fn add(&mut self, x: f64) {
    self.limbs = compress(&grow_expansion(&self.limbs, ldexp(x, -self.exp)));
    self.normalize();
  }

  fn mul_pow5(&mut self, k: u64) {
    let mut k = k;
    while k > 0 {
      let step = k.min(POW5_STEP);
      self.mul(5f64.powi(step as i32));
      k -= step;
    }
  }
}

/// The limbs of `e` within `window` bits of its top limb, and the sign of the rest.
fn trimmed(e: &[f64], window: i32) -> (Expansion, Ordering) {
  let Some(top) = most_significant(e) else { return (Expansion::new(), Ordering::Equal) };
  let floor = exponent(top) - window;
  let split = e.iter().position(|&x| x != 0.0 && exponent(x) >= floor).unwrap_or(e.len());
  (Expansion::from_slice(&e[split ..]), sign_adaptive(&e[.. split]))
}

/// The exponent of half the distance from `c` to the next double in `direction` (`Greater` for
/// towards +∞). That is `ulp(c) / 2`, except below a power of two, where the spacing halves.
fn half_gap_exponent(c: f64, direction: Ordering) -> i32 {
  if c == 0.0 {
    return -1075
  }
  let e = exponent(c);
  let ulp = (e - 52).max(-1074);
  let towards_zero = (direction == Ordering::Greater) != (c > 0.0);
  let power_of_two = c.to_bits() & ((1 << 52) - 1) == 0;
  if towards_zero && power_of_two && e > -1022 { ulp - 2 } else { ulp - 1 }
}

/// The next double after `c` in `direction` (`Greater` for towards +∞).
fn next_towards(c: f64, direction: Ordering) -> f64 {
  let up = direction == Ordering::Greater;
  if c == 0.0 {
    let tiny = f64::from_bits(1);
    return if up {tiny} else {-tiny}
  }
  if (c > 0.0) == up {
    f64::from_bits(c.to_bits() + 1)
  } else {
    f64::from_bits(c.to_bits() - 1)
  }
}

impl<
  const N: usize,
> Ereal<N> {
  /// The value `num / den × 2^exp`, rounded to `N` limbs.
  ///
  /// Each limb is the double nearest to what the limbs before it leave over (ties to even), so
  /// the result depends only on the exact value: its top limb is the correctly rounded `f64`,
  /// and equal values always get identical limbs. Every candidate limb is checked exactly
  /// against the rounding boundaries, by comparing the remainder with half the gap to the
  /// neighbouring double, both scaled by `den`.
  fn from_ratio(num: Scaled, den: &Scaled, exp: i64) -> Self {
    let mut exp = exp + num.exp - den.exp;
    let den = den.limbs.as_slice();
    let mut remainder = num.limbs;
    let mut nearest = Expansion::new();
    while nearest.len() < N {
      if most_significant(&remainder).is_none() {
        break
      }
      let mut c = ldexp(estimate(&remainder) / estimate(den), exp);
      if c.is_infinite() {
        c = f64::MAX.copysign(c)
      }
      let rest = loop {
        let rest = compress(&fast_expansion_sum(
          &remainder,
          &negate(&scale_expansion(den, ldexp(c, -exp))),
        ));
        let direction = sign_adaptive(&rest);
        if direction == Ordering::Equal {
          break rest
        }
        let half_gap = scale_expansion(den, ldexp(1.0, half_gap_exponent(c, direction) as i64 - exp));
        let distance = if direction == Ordering::Less { negate(&rest) } else { rest.clone() };
        let excess = compare_adaptive(&distance, &half_gap);
        if excess == Ordering::Greater || (excess == Ordering::Equal && c.to_bits() & 1 == 1) {
          c = next_towards(c, direction);
          if c.is_infinite() {
            return Self::single(c)
          }
        } else {
          break rest
        }
      };
      // Below half the smallest subnormal: nothing further can be represented.
      if c == 0.0 {
        break
      }
      nearest.push(c);
      remainder = rest;
      if let Some(top) = most_significant(&remainder) {
        let shift = ANCHOR - exponent(top);
        remainder = shifted(&remainder, shift);
        exp -= shift as i64;
      }
    }

    let mut result = Self::ZERO;
    for (slot, &c) in result.limbs.iter_mut().zip(nearest.iter().rev()) {
      *slot = c;
    }
    result.len = nearest.len();
    result
  }

  /// `digits × 10^power`, rounded to `N` limbs as in [`Self::from_ratio`]. `digits` are decimal
  /// digit values, most significant first, the first of them non-zero.
  pub(super) fn from_decimal(digits: &[u8], power: i64) -> Self {
    let magnitude = digits.len() as i64 - 1 + power;
    if digits.is_empty() || magnitude < MIN_DECIMAL_EXPONENT {
      return Self::ZERO
    }
    if magnitude > MAX_DECIMAL_EXPONENT {
      return Self::INFINITY
    }

    // Digits beyond what `N` limbs can tell apart only matter through whether they're zero.
    let kept = digits.len().min(16 * N + 40).min(MAX_DIGITS);
    let sticky = digits[kept ..].iter().any(|&d| d != 0);
    let mut power = power + (digits.len() - kept) as i64;

    let mut num = Scaled::zero();
    for chunk in digits[.. kept].chunks(CHUNK_DIGITS) {
      let chunk_value = chunk.iter().fold(0u64, |acc, &d| acc * 10 + d as u64);
      num.mul(10f64.powi(chunk.len() as i32));
      num.add(chunk_value as f64);
    }
    if sticky {
      num.mul(10.);
      num.add(1.);
      power -= 1;
    }

    if power >= 0 {
      num.mul_pow5(power as u64);
      Self::from_ratio(num, &Scaled::new(&[1.0]), power)
    } else {
      let mut den = Scaled::new(&[1.0]);
      den.mul_pow5(power.unsigned_abs());
      Self::from_ratio(num, &den, power)
    }
  }

  /// 10^k, correctly rounded to `N` limbs (so exact whenever it fits).
  pub(crate) fn pow10(k: u32) -> Self {
    Self::ONE.scale10(k as i64)
  }

  /// `self × 10^k`, for any `k` (overflowing to ±∞ or underflowing to zero where appropriate).
  ///
  /// The product is computed exactly and rounded once, on the leading 1100 bits of `self`.
  pub(crate) fn scale10(self, k: i64) -> Self {
    if !self.is_finite() || self.is_zero() || k == 0 {
      return self
    }
    let negative = self.is_negative();
    let magnitude = self.top().abs().log10() + k as f64;
    if magnitude > MAX_DECIMAL_EXPONENT as f64 + 1. {
      return if negative {Self::NEG_INFINITY} else {Self::INFINITY}
    }
    if magnitude < MIN_DECIMAL_EXPONENT as f64 {
      return Self::ZERO
    }

    let (mut kept, sticky) = trimmed(self.abs().limbs(), (53 * N as i32 + 128).min(SCALE_WINDOW));
    // What was left out is far below the last limb; only its sign matters.
    if let Some(&lowest) = kept.first() {
      let sign = match sticky {
        Ordering::Greater => 1.0,
        Ordering::Less => -1.0,
        Ordering::Equal => 0.0,
      };
      if sign != 0.0 {
        kept.insert(0, ldexp_f64(sign, lowest_bit_exponent(lowest) - 2));
      }
    }

    let mut num = Scaled::new(&kept);
    let result = if k >= 0 {
      num.mul_pow5(k as u64);
      Self::from_ratio(num, &Scaled::new(&[1.0]), k)
    } else {
      let mut den = Scaled::new(&[1.0]);
      den.mul_pow5(k.unsigned_abs());
      Self::from_ratio(num, &den, k)
    };
    if negative {-result} else {result}
  }

  /// The first `count` significant decimal digits of `|self|`, rounded to nearest (ties away from
  /// zero), and the decimal exponent of the first one, so that `|self| ≈ d₀.d₁d₂… × 10^exponent`.
  ///
  /// The digits are exact: `|self|` is divided by a power of ten exactly and the digits are
  /// peeled off by exact long division. `self` must be finite and non-zero.
  pub(super) fn decimal_digits(&self, count: usize) -> (Vec<u8>, i64) {
    let count = count.max(1);
    let x = self.abs();
    let window = ((count as f64 * core::f64::consts::LOG2_10) as i32 + 128).min(FORMAT_WINDOW);
    let (kept, sticky) = trimmed(x.limbs(), window);

    // |self| / 10^exponent = num / unit, which should be in [1, 10).
    let mut exponent = x.top().log10().floor() as i64;
    let (num, unit) = if exponent >= 0 {
      (Scaled::new(&kept), Scaled::pow10(exponent as u64))
    } else {
      let mut num = Scaled::new(&kept);
      num.mul_pow5(exponent.unsigned_abs());
      num.exp -= exponent;
      (num, Scaled::new(&[1.0]))
    };
    let mut num = shifted(&num.limbs, (num.exp - unit.exp) as i32);
    let mut unit = unit.limbs;
    // The top limb may have put us one decade off.
    if compare_adaptive(&num, &unit) == Ordering::Less {
      num = compress(&scale_expansion(&num, 10.));
      exponent -= 1;
    } else if compare_adaptive(&num, &scale_expansion(&unit, 10.)) != Ordering::Less {
      unit = compress(&scale_expansion(&unit, 10.));
      exponent += 1;
    }

    let mut digits = Vec::with_capacity(count);
    let mut rest = Expansion::new();
    for i in 0 .. count {
      if i > 0 {
        num = compress(&scale_expansion(&rest, 10.));
      }
      let mut digit = (estimate(&num) / estimate(&unit)).floor().clamp(0., 9.);
      rest = compress(&fast_expansion_sum(&num, &negate(&scale_expansion(&unit, digit))));
      while sign_adaptive(&rest) == Ordering::Less {
        digit -= 1.;
        rest = compress(&fast_expansion_sum(&rest, &unit));
      }
      while compare_adaptive(&rest, &unit) != Ordering::Less {
        digit += 1.;
        rest = compress(&fast_expansion_sum(&rest, &negate(&unit)));
      }
      digits.push(digit as u8);
    }

    let round_up = match compare_adaptive(&scale_expansion(&rest, 2.), &unit) {
      Ordering::Greater => true,
      Ordering::Equal => sticky != Ordering::Less,
      Ordering::Less => false,
    };
    if round_up {
      match digits.iter().rposition(|&d| d != 9) {
        Some(i) => {
          digits[i] += 1;
          digits[i + 1 ..].fill(0);
        },
        // 99…9 rounds up to 100…0
        None => {
          digits.fill(0);
          digits[0] = 1;
          exponent += 1;
        },
      }
    }
    (digits, exponent)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::Pow;
  use malachite::base::num::conversion::traits::RoundingFrom;
  use malachite::base::rounding_modes::RoundingMode;
  use crate::ereal::test::is_close;

  /// The digit values of a string of decimal digits.
  fn digits(s: &str) -> Vec<u8> {
    s.bytes().map(|c| c - b'0').collect()
  }

  #[test]
  fn small_powers_are_exact() {
    for k in 0 ..= 22 {
      assert_eq!(Ereal::<2>::pow10(k).limbs(), [10f64.powi(k as i32)]);
    }
  }

  #[test]
  fn pow10_exact_in_limbs() {
    // 10^30 = 2^30 × 5^30, and 5^30 needs 70 bits
    let x = Ereal::<2>::pow10(30);
    assert_eq!(x.rational(), Rational::from(10).pow(30u64));
    assert_eq!(x.len(), 2);
    // 5^280 needs 651 bits, which 19 limbs hold
    let x = Ereal::<19>::pow10(280);
    assert_eq!(x.rational(), Rational::from(10).pow(280u64));
  }

  #[test]
  fn pow10_large() {
    for k in [50, 100, 255, 256, 300] {
      let exact = Rational::from(10).pow(k as u64);
      assert!(is_close(&Ereal::<4>::pow10(k), &exact, 200), "10^{k}");
    }
    assert_eq!(Ereal::<4>::pow10(400), Ereal::INFINITY);
  }

  #[test]
  fn powers_of_ten_are_correctly_rounded() {
    for k in -320i64 ..= 308 {
      let expected: f64 = format!("1e{k}").parse().unwrap();
      assert_eq!(Ereal::<1>::ONE.scale10(k).top(), expected, "10^{k}");
      assert_eq!(Ereal::<3>::ONE.scale10(k).top(), expected, "10^{k}");
    }
  }

  #[test]
  fn scale10() {
    let x = Ereal::<2>::from(1.5);
    assert_eq!(x.scale10(3), Ereal::from(1500.));
    assert_eq!(Ereal::<2>::from(1500.).scale10(-3), x);
    assert_eq!((-x).scale10(2), Ereal::from(-150.));
    assert_eq!(x.scale10(400), Ereal::INFINITY);
    assert!(x.scale10(-400).is_zero());
    assert_eq!(x.scale10(i64::MAX), Ereal::INFINITY);
    assert!((-x).scale10(i64::MIN).is_zero());
  }

  #[test]
  fn scale10_subnormal() {
    let x = Ereal::<2>::from(15.).scale10(-321);
    assert_eq!(x.limbs(), [1.5e-320]);
  }

  #[test]
  fn scale10_big_steps() {
    let x = Ereal::<4>::from(1e200).scale10(-400);
    let exact = Rational::try_from(1e200).unwrap() / Rational::from(10).pow(400u64);
    assert!(is_close(&x, &exact, 200));
    let x = Ereal::<4>::from(1e-200).scale10(500);
    let exact = Rational::try_from(1e-200).unwrap() * Rational::from(10).pow(500u64);
    assert!(is_close(&x, &exact, 200));
  }

  #[test]
  fn ties_to_even() {
    // 2^53 + 1 and 2^53 + 3 are halfway between two doubles
    assert_eq!(Ereal::<1>::from_decimal(&digits("9007199254740993"), 0).limbs(), [9007199254740992.]);
    assert_eq!(Ereal::<1>::from_decimal(&digits("9007199254740995"), 0).limbs(), [9007199254740996.]);
    assert_eq!(Ereal::<2>::from_decimal(&digits("9007199254740993"), 0).limbs(), [1., 9007199254740992.]);
  }

  #[test]
  fn limbs_are_nearest() {
    // Each limb is the double nearest to what the ones above it leave over
    for (s, power) in [("1", -1i64), ("125", -201), ("314159265358979323846264338327950288", -35)] {
      let x = Ereal::<3>::from_decimal(&digits(s), power);
      let mut rest = Rational::from(s.parse::<u128>().unwrap()) * Rational::from(10).pow(power);
      for &limb in x.limbs().iter().rev() {
        let (nearest, _) = f64::rounding_from(&rest, RoundingMode::Nearest);
        assert_eq!(nearest, limb, "{s}e{power}");
        rest -= Rational::try_from(limb).unwrap();
      }
    }
  }

  #[test]
  fn equal_values_equal_limbs() {
    // The same value, written differently, and computed differently
    let a = Ereal::<4>::from_decimal(&digits("125"), -201);
    let b = Ereal::<4>::from_decimal(&digits("1250000"), -205);
    let c = Ereal::<4>::from(12.5).scale10(-200);
    assert_eq!(a.limbs(), b.limbs());
    assert_eq!(a.limbs(), c.limbs());
  }

  #[test]
  fn overflow_underflow() {
    assert_eq!(Ereal::<2>::from_decimal(&digits("17976931348623159"), 292), Ereal::INFINITY);
    assert_eq!(Ereal::<2>::from_decimal(&digits("17976931348623157"), 292).top(), f64::MAX);
    assert_eq!(Ereal::<2>::from_decimal(&digits("248"), -326).limbs(), [f64::from_bits(1)]);
    assert!(Ereal::<2>::from_decimal(&digits("247"), -327).is_zero());
  }

  #[test]
  fn digits_exact() {
    assert_eq!(Ereal::<2>::from(0.125).decimal_digits(3), (vec![1, 2, 5], -1));
    assert_eq!(Ereal::<2>::from(0.125).decimal_digits(2), (vec![1, 3], -1));
    assert_eq!(Ereal::<2>::from(1e300).decimal_digits(1), (vec![1], 300));
    assert_eq!(Ereal::<2>::from(f64::MAX).decimal_digits(4), (vec![1, 7, 9, 8], 308));
    assert_eq!(Ereal::<2>::from(9.5).decimal_digits(1), (vec![1], 1));
    assert_eq!(Ereal::<2>::from(f64::from_bits(1)).decimal_digits(3), (vec![4, 9, 4], -324));
  }

  #[test]
  fn digits_below_a_tie() {
    // 2.5 ± 2^-1000: the part below the printed window still decides the rounding
    let x = Ereal::<2>::from_limbs(&[-2f64.powi(-1000), 2.5]);
    assert_eq!(x.decimal_digits(1), (vec![2], 0));
    let x = Ereal::<2>::from_limbs(&[2f64.powi(-1000), 2.5]);
    assert_eq!(x.decimal_digits(1), (vec![3], 0));
  }
}
