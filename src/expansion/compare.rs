use core::cmp::Ordering;
use super::{fast_expansion_sum, most_significant, negate};

/// The sign of the non-overlapping expansion `e`, as its ordering relative to zero.
///
/// The most significant non-zero limb dominates the sum of all the others, so this needs to look
/// at nothing else. An empty or all-zero expansion is [`Ordering::Equal`].
pub fn sign_adaptive(e: &[f64]) -> Ordering {
  match most_significant(e) {
    Some(x) if x > 0.0 => Ordering::Greater,
    Some(x) if x < 0.0 => Ordering::Less,
    _ => Ordering::Equal,
  }
}

/// Compare the values of the non-overlapping expansions `e` and `f`, exactly.
///
/// If the signs differ (which can be read off the top limbs) that settles it. Otherwise, the
/// answer is the sign of the exact difference `e - f`.
pub fn compare_adaptive(e: &[f64], f: &[f64]) -> Ordering {
  let (sign_e, sign_f) = (sign_adaptive(e), sign_adaptive(f));
  if sign_e != sign_f {
    return sign_e.cmp(&sign_f)
  }
  if sign_e == Ordering::Equal {
    return Ordering::Equal
  }
  sign_adaptive(&fast_expansion_sum(e, &negate(f)))
}
