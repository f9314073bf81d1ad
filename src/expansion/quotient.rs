use super::{
  Expansion,
  compress,
  exponent,
  expansion_product_truncated,
  fast_expansion_sum,
  grow_expansion,
  most_significant,
  negate,
  renormalize,
  scale_expansion,
};
use smallvec::smallvec;

/// Safety cap on Newton iterations. Convergence is quadratic from a 53-bit seed, so even the
/// widest expansions need fewer than 10.
const MAX_ITERATIONS: u32 = 32;

/// Divide the expansion `e` by the double `d`, keeping about `limit` limbs of precision.
///
/// This is schoolbook long division with one double per "digit": each step divides the most
/// significant limb of the remainder by `d`, and subtracts the (exact) product of that quotient
/// digit by `d` from the remainder. Each step gains about 53 bits.
///
/// `d` must be non-zero and finite. A zero `e` gives `[0.0]`.
pub fn divide_by_scalar(e: &[f64], d: f64, limit: usize) -> Expansion {
  let mut remainder = compress(e);
  let mut digits: smallvec::SmallVec<[f64; 24]> = smallvec::SmallVec::new();
  for _ in 0 ..= limit {
    let Some(top) = most_significant(&remainder) else { break };
    let digit = top / d;
    digits.push(digit);
    remainder = compress(&fast_expansion_sum(&remainder, &negate(&scale_expansion(&[digit], d))));
  }

  // The digits are in decreasing order of magnitude; accumulate them from the smallest.
  let mut h = Expansion::new();
  for &digit in digits.iter().rev() {
    h = grow_expansion(&h, digit);
  }
  if h.is_empty() {
    h.push(0.0)
  }
  renormalize(&h, limit)
}

/// The reciprocal `1 / e`, to about `limit` limbs of precision, by Newton–Raphson iteration.
///
/// Starting from `x = 1 / top(e)`, iterate
///
///   x ← x + x × (1 - e × x)
///
/// which doubles the number of correct bits each time, until the correction no longer affects
/// the last retained limb (or stops shrinking, meaning we're down to rounding noise).
///
/// `e` must be non-zero; a zero `e` gives `[∞]`.
pub fn expansion_reciprocal(e: &[f64], limit: usize) -> Expansion {
  let Some(top) = most_significant(e) else { return smallvec![f64::INFINITY] };
  let mut x: Expansion = smallvec![1.0 / top];
  let mut last = None;
  for iteration in 0 .. MAX_ITERATIONS {
    let ex = expansion_product_truncated(e, &x, limit + 2);
    let residual = renormalize(&fast_expansion_sum(&[1.0], &negate(&ex)), limit + 1);
    if most_significant(&residual).is_none() {
      return renormalize(&x, limit)
    }
    let correction = expansion_product_truncated(&x, &residual, limit + 2);
    x = renormalize(&fast_expansion_sum(&x, &correction), limit + 1);

    let (Some(correction), Some(top)) = (most_significant(&correction), most_significant(&x))
      else { return renormalize(&x, limit) };
    let correction = exponent(correction);
    log::trace!("reciprocal: iteration {iteration}, correction 2^{correction}");
    if correction < exponent(top) - 53 * limit as i32 - 8
    || last.is_some_and(|last| correction >= last) {
      return renormalize(&x, limit)
    }
    last = Some(correction);
  }
  log::warn!("reciprocal: no convergence after {MAX_ITERATIONS} iterations");
  renormalize(&x, limit)
}

/// The quotient `e / f`, to about `limit` limbs of precision.
///
/// Single-limb divisors go through [`divide_by_scalar`]. Otherwise, compute `x ≈ 1/f` with
/// [`expansion_reciprocal`] at one extra limb of precision, take `q = e × x`, and refine it once
/// with the residual:
///
///   q ← q + x × (e - f × q)
///
/// `f` must be non-zero; a zero `f` gives an infinite (or, for a zero `e`, NaN) single limb.
pub fn expansion_quotient(e: &[f64], f: &[f64], limit: usize) -> Expansion {
  let mut nonzero = f.iter().copied().filter(|x| *x != 0.0);
  match (nonzero.next(), nonzero.next()) {
    (None, _) => return smallvec![most_significant(e).unwrap_or(0.0) / 0.0],
    (Some(d), None) => return divide_by_scalar(e, d, limit),
    _ => (),
  }
  if most_significant(e).is_none() {
    return smallvec![0.0]
  }

  let x = expansion_reciprocal(f, limit + 1);
  let q = expansion_product_truncated(e, &x, limit + 2);
  let fq = expansion_product_truncated(f, &q, limit + 2);
  let residual = renormalize(&fast_expansion_sum(e, &negate(&fq)), limit + 1);
  let correction = expansion_product_truncated(&x, &residual, limit + 2);
  renormalize(&fast_expansion_sum(&q, &correction), limit)
}
