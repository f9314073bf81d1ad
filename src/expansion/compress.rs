use super::{Expansion, exponent, lowest_bit_exponent, two_sum};
use smallvec::smallvec;

/// Rewrite `e` as an equivalent expansion with as few limbs as possible (Shewchuk's Compress).
///
/// The result has the same exact value as `e`, is non-overlapping, and its most significant limb
/// approximates the whole value to within one ulp. Zero limbs are eliminated; an all-zero input
/// results in `[0.0]`, and an empty input in an empty output.
///
/// Uses [`two_sum`] in both passes, so the result is exact even if `e` is only loosely
/// non-overlapping.
pub fn compress(e: &[f64]) -> Expansion {
  let n = e.len();
  if n == 0 {
    return Expansion::new()
  }
  let mut g = Expansion::from_slice(e);

  // First pass, top-down: accumulate into `q`, and whenever the accumulation is inexact, commit
  // the rounded part as a limb (stacked at the top of `g`) and carry on with the error.
  let mut bottom = n - 1;
  let mut q = g[bottom];
  for k in (0 .. n - 1).rev() {
    let (sum, err) = two_sum(q, g[k]);
    if err != 0.0 {
      g[bottom] = sum;
      bottom -= 1;
      q = err;
    } else {
      q = sum;
    }
  }

  // Second pass, bottom-up over the committed limbs, emitting the error terms.
  let mut h = Expansion::with_capacity(n - bottom);
  for k in bottom + 1 .. n {
    let (sum, err) = two_sum(g[k], q);
    if err != 0.0 {
      h.push(err)
    }
    q = sum;
  }
  h.push(q);
  h
}

/// Compress `e` and then, if more than `limit` limbs remain, round it to `limit` limbs.
///
/// The low limbs that don't fit are summed and absorbed into the lowest limb that is kept
/// (rounding to nearest), and the result is compressed again. The relative error of the result
/// is therefore about `2^(-53 × limit)`.
///
/// `limit` must be at least 1.
pub fn renormalize(e: &[f64], limit: usize) -> Expansion {
  let limit = limit.max(1);
  let h = compress(e);
  if h.len() <= limit {
    return h
  }
  let drop = h.len() - limit;
  let tail: f64 = h[.. drop].iter().sum();
  let (boundary, _) = two_sum(h[drop], tail);
  let mut kept: Expansion = smallvec![boundary];
  kept.extend_from_slice(&h[drop + 1 ..]);
  compress(&kept)
}

/// A double approximation of the value of `e`: the plain floating point sum of its limbs, from
/// least to most significant.
pub fn estimate(e: &[f64]) -> f64 {
  e.iter().sum()
}

/// Are the non-zero limbs of `e` in order of non-decreasing magnitude?
pub fn is_increasing_magnitude(e: &[f64]) -> bool {
  let mut last = 0.0f64;
  for &x in e.iter().filter(|x| **x != 0.0) {
    if x.abs() < last {
      return false
    }
    last = x.abs();
  }
  true
}

/// Is `e` non-overlapping, in the sense that the lowest set bit of each non-zero limb lies above
/// the highest set bit of the previous non-zero limb?
///
/// Assumes `e` is in order of increasing magnitude, and its limbs finite.
pub fn is_nonoverlapping(e: &[f64]) -> bool {
  let mut nonzero = e.iter().copied().filter(|x| *x != 0.0);
  let Some(mut prev) = nonzero.next() else { return true };
  for x in nonzero {
    if exponent(prev) >= lowest_bit_exponent(x) {
      return false
    }
    prev = x;
  }
  true
}
