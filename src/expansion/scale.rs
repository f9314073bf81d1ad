use super::{Expansion, quick_two_sum, two_product, two_sum};

/// Multiply the expansion `e` by the double `b`, exactly (Shewchuk's Scale-Expansion, with zero
/// elimination).
///
/// Each limb is multiplied with [`two_product`], and the partial products are threaded through a
/// running accumulator `q`: the low half of each product is absorbed with [`two_sum`], and the
/// high half with [`quick_two_sum`] (it is never smaller than the accumulated remainder). Every
/// error term becomes a limb of the result, in increasing order.
///
/// The result is exact as long as no partial product overflows or underflows. An empty `e` gives
/// an empty result; a zero product gives `[0.0]`.
///
/// Scaling by a power of two (in particular by `1.0` or `-1.0`) is done limb by limb, so that the
/// result has exactly the same structure as `e`.
pub fn scale_expansion(e: &[f64], b: f64) -> Expansion {
  let Some((&first, rest)) = e.split_first() else { return Expansion::new() };
  if let Some(h) = scale_by_power_of_two(e, b) {
    return h
  }
  let mut h = Expansion::with_capacity(2 * e.len());

  let (mut q, err) = two_product(first, b);
  if err != 0.0 {
    h.push(err)
  }
  for &x in rest {
    let (hi, lo) = two_product(x, b);
    let (sum, err) = two_sum(q, lo);
    if err != 0.0 {
      h.push(err)
    }
    let (sum, err) = quick_two_sum(hi, sum);
    if err != 0.0 {
      h.push(err)
    }
    q = sum;
  }
  if q != 0.0 || h.is_empty() {
    h.push(q)
  }
  h
}

/// If `b` is a power of two and every non-zero limb of `e` stays normal when multiplied by it,
/// the limb-by-limb product (zero-eliminated). Otherwise `None`.
fn scale_by_power_of_two(e: &[f64], b: f64) -> Option<Expansion> {
  let mantissa = b.to_bits() & ((1 << 52) - 1);
  if mantissa != 0 || !b.is_normal() {
    return None
  }
  let mut h = Expansion::with_capacity(e.len());
  for &x in e.iter().filter(|x| **x != 0.0) {
    let y = x * b;
    if !y.is_normal() {
      return None
    }
    h.push(y)
  }
  if h.is_empty() {
    h.push(0.0)
  }
  Some(h)
}
