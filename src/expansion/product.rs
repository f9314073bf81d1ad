use super::{Expansion, exponent, fast_expansion_sum, most_significant, renormalize, scale_expansion};
use smallvec::smallvec;

/// Multiply two expansions, exactly.
///
/// Each limb `f[j]` scales the whole of `e` with [`scale_expansion`], and the partial products
/// are accumulated with [`fast_expansion_sum`]. The result may have up to `2 × e.len() ×
/// f.len()` limbs; callers that only need a bounded precision should prefer
/// [`expansion_product_truncated`].
///
/// A product with an empty or all-zero factor is `[0.0]`.
pub fn expansion_product(e: &[f64], f: &[f64]) -> Expansion {
  let mut h = Expansion::new();
  for &b in f {
    h = fast_expansion_sum(&h, &scale_expansion(e, b));
  }
  if h.is_empty() {
    h.push(0.0)
  }
  h
}

/// Multiply two expansions, keeping about `limit` limbs of precision.
///
/// Partial products are formed from the most significant limb of `f` downwards, and the running
/// sum is [`renormalize`]d to `limit` limbs after each one. Partial products (or parts of them)
/// that lie entirely below the precision retained by the running sum are skipped altogether:
/// this is what makes the product of two `N`-limb values cost `O(N²)` rather than `O(N³)`.
///
/// The relative error of the result is about `2^(-53 × limit)`. A product with an empty or
/// all-zero factor is `[0.0]`.
pub fn expansion_product_truncated(e: &[f64], f: &[f64], limit: usize) -> Expansion {
  let Some(e_top) = most_significant(e) else { return smallvec![0.0] };
  let e_top = exponent(e_top);
  // Bits below the top of the running sum that are still worth computing.
  let budget = 53 * (limit as i32 + 1);

  let mut h = Expansion::new();
  for &b in f.iter().rev().filter(|b| **b != 0.0) {
    let b_exp = exponent(b);
    let e = match most_significant(&h) {
      None => e,
      Some(h_top) => {
        let threshold = exponent(h_top) - budget;
        // `f` is in increasing order, so every remaining partial product is even smaller.
        if b_exp + e_top + 1 < threshold {
          break
        }
        let start = e.iter()
          .position(|&x| x != 0.0 && exponent(x) + b_exp + 1 >= threshold)
          .unwrap_or(e.len());
        &e[start ..]
      },
    };
    if e.is_empty() {
      continue
    }
    h = renormalize(&fast_expansion_sum(&h, &scale_expansion(e, b)), limit);
  }
  if h.is_empty() {
    h.push(0.0)
  }
  h
}
