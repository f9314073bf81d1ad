use super::{Expansion, quick_two_sum, two_sum};
use smallvec::smallvec;

/// Push `x` onto `h` unless it is zero.
#[inline]
fn push_nonzero(h: &mut Expansion, x: f64) {
  if x != 0.0 {
    h.push(x)
  }
}

/// Push the final (most significant) accumulator `q` onto `h`; a zero `q` is only kept if it is
/// the sole limb, so that a zero result is `[0.0]` rather than empty.
#[inline]
fn push_last(h: &mut Expansion, q: f64) {
  if q != 0.0 || h.is_empty() {
    h.push(q)
  }
}

/// Add a double `b` to the expansion `e`, exactly (Shewchuk's Grow-Expansion, with zero
/// elimination).
///
/// `b` need not be related in magnitude to `e` in any way. If `e` is non-overlapping, so is the
/// result.
pub fn grow_expansion(e: &[f64], b: f64) -> Expansion {
  if e.is_empty() {
    return smallvec![b]
  }
  let mut h = Expansion::with_capacity(e.len() + 1);
  let mut q = b;
  for &x in e {
    let (sum, err) = two_sum(q, x);
    push_nonzero(&mut h, err);
    q = sum;
  }
  push_last(&mut h, q);
  h
}

/// Add two expansions, exactly.
///
/// The limbs of `e` and `f` are merged in order of increasing magnitude, and then accumulated
/// with a single chain of [`two_sum`]s, keeping each error term as a limb of the result. This is
/// Shewchuk's Fast-Expansion-Sum, except that it uses `two_sum` at every step: this keeps the
/// result exact and non-overlapping even when `e` and `f` are only *weakly* non-overlapping, at
/// the cost of 3 extra flops per limb.
///
/// If either input is empty, the other is returned unchanged.
pub fn fast_expansion_sum(e: &[f64], f: &[f64]) -> Expansion {
  if e.is_empty() {
    return Expansion::from_slice(f)
  }
  if f.is_empty() {
    return Expansion::from_slice(e)
  }

  let mut h = Expansion::with_capacity(e.len() + f.len());
  let mut merged = Merge { e, f, i: 0, j: 0 };
  // Both inputs are non-empty, so there is at least one limb.
  let Some(mut q) = merged.next() else { return smallvec![0.0] };
  for x in merged {
    let (sum, err) = two_sum(q, x);
    push_nonzero(&mut h, err);
    q = sum;
  }
  push_last(&mut h, q);
  h
}

/// Add two expansions, exactly, using Shewchuk's Linear-Expansion-Sum.
///
/// The merged limbs are accumulated through a two-limb accumulator `(q, Q)`, renormalised with
/// [`quick_two_sum`] at every step. Produces the same value as [`fast_expansion_sum`], and is the
/// variant of choice when the inputs are known to be strongly non-overlapping.
pub fn linear_expansion_sum(e: &[f64], f: &[f64]) -> Expansion {
  if e.is_empty() {
    return Expansion::from_slice(f)
  }
  if f.is_empty() {
    return Expansion::from_slice(e)
  }

  let mut h = Expansion::with_capacity(e.len() + f.len());
  let mut merged = Merge { e, f, i: 0, j: 0 };
  let (Some(g0), Some(g1)) = (merged.next(), merged.next()) else { return smallvec![0.0] };
  let (mut big, mut small) = quick_two_sum(g1, g0);
  for g in merged {
    let (r, err) = quick_two_sum(g, small);
    push_nonzero(&mut h, err);
    (big, small) = two_sum(big, r);
  }
  push_nonzero(&mut h, small);
  push_last(&mut h, big);
  h
}

/// Negate every limb of `e`. This is exact, and preserves all structural properties.
pub fn negate(e: &[f64]) -> Expansion {
  e.iter().map(|&x| -x).collect()
}

/// Iterator merging the limbs of two expansions by increasing magnitude (ties go to `f`).
struct Merge<'a> {
  e: &'a [f64],
  f: &'a [f64],
  i: usize,
  j: usize,
}

impl Iterator for Merge<'_> {
  type Item = f64;

  #[inline]
  fn next(&mut self) -> Option<f64> {
    match (self.e.get(self.i), self.f.get(self.j)) {
      (Some(&x), Some(&y)) if x.abs() < y.abs() => { self.i += 1; Some(x) }
      (_, Some(&y)) => { self.j += 1; Some(y) }
      (Some(&x), None) => { self.i += 1; Some(x) }
      (None, None) => None,
    }
  }
}
