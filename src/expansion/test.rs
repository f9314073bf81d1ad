use malachite::rational::Rational;
use proptest::prelude::*;

/// The exact value of an expansion, as a rational.
pub(crate) fn rational(e: &[f64]) -> Rational {
  let mut sum = Rational::from(0);
  for &x in e {
    sum += Rational::try_from(x).expect("finite limb");
  }
  sum
}

/// A [proptest Strategy](proptest::strategy::Strategy) that yields normal doubles of either sign,
/// whose binary exponent lies in `exp`.
pub(crate) fn with_exponent(exp: core::ops::Range<i32>) -> impl Strategy<Value = f64> {
  (
    any::<bool>(),
    (1u64 << 52) .. (1u64 << 53),
    exp,
  ).prop_map(|(negative, significand, exp)| {
    let x = significand as f64 * pow2(exp - 52);
    if negative {-x} else {x}
  })
}

/// Finite doubles that can be added or subtracted without overflowing.
pub(crate) fn finite() -> impl Strategy<Value = f64> {
  with_exponent(-1000 .. 1000)
}

/// A [proptest Strategy](proptest::strategy::Strategy) that yields well-formed (non-overlapping,
/// increasing magnitude, zero-free) expansions with between 1 and `max_len` limbs, centered
/// around `2^exp` for some `exp` in `-60 .. 60`.
///
/// They are built the same way users build them: by accumulating arbitrary doubles with
/// [`grow_expansion`](super::grow_expansion), then [`compress`](super::compress)ing.
pub(crate) fn expansion(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
  prop::collection::vec(
    (any::<bool>(), 1u64 .. (1u64 << 53), -60i32 .. 60),
    1 ..= max_len,
  ).prop_map(|components| {
    let mut e = super::Expansion::new();
    for (i, (negative, significand, exp)) in components.into_iter().enumerate() {
      let x = significand as f64 * pow2(exp - 56 * i as i32);
      e = super::grow_expansion(&e, if negative {-x} else {x});
    }
    super::compress(&e).into_vec()
  })
}

/// `2^exp`, for `exp` in the range of finite doubles (subnormals included).
pub(crate) fn pow2(exp: i32) -> f64 {
  assert!((-1074 ..= 1023).contains(&exp));
  if exp < -1022 {
    f64::from_bits(1 << (exp + 1074))
  } else {
    f64::from_bits(((exp + 1023) as u64) << 52)
  }
}

/// Check the structural invariants of an expansion.
pub(crate) fn is_well_formed(e: &[f64]) -> bool {
  super::is_increasing_magnitude(e) && super::is_nonoverlapping(e)
}

#[test]
fn pow2_covers_subnormals() {
  assert_eq!(pow2(-1074), f64::from_bits(1));
  assert_eq!(pow2(-1023), f64::MIN_POSITIVE / 2.);
  assert_eq!(pow2(-1022), f64::MIN_POSITIVE);
  assert_eq!(pow2(0), 1.0);
  assert_eq!(pow2(1023), 2f64.powi(1023));
}
