//! Each function here returns a pair `(s, e)` such that `s` is the correctly rounded result of the
//! operation and `s + e` is *exactly* equal to the mathematical result, provided no overflow
//! happens along the way.

/// Dekker's splitting constant, `2^27 + 1`.
const SPLITTER: f64 = 134217729.0;

/// Above this magnitude, `SPLITTER × a` may overflow; such inputs are scaled down first.
const SPLIT_THRESHOLD: f64 = 6.69692879491417e+299;

/// `2^-28`
const SPLIT_SCALE_DOWN: f64 = 3.7252902984619140625e-09;

/// `2^28`
const SPLIT_SCALE_UP: f64 = 268435456.0;

/// Knuth's branch-free Two-Sum: `s = fl(a + b)` and `e = (a + b) - s`, exactly, for any finite
/// `a` and `b` (whose sum doesn't overflow).
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  let bb = s - a;
  let e = (a - (s - bb)) + (b - bb);
  (s, e)
}

/// Dekker's Fast-Two-Sum: like [`two_sum`] but in 3 flops instead of 6.
///
/// The result is exact only if `|a| ≥ |b|` (or `a` is zero); callers must guarantee that.
#[inline]
pub fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
  let s = a + b;
  let e = b - (s - a);
  (s, e)
}

/// Two-Diff: `s = fl(a - b)` and `e = (a - b) - s`, exactly.
#[inline]
pub fn two_diff(a: f64, b: f64) -> (f64, f64) {
  let s = a - b;
  let bb = s - a;
  let e = (a - (s - bb)) - (b + bb);
  (s, e)
}

/// Dekker's split of `a` into `(hi, lo)`, with `a = hi + lo` and each half fitting in 26 bits
/// of significand, so that products of halves are exact.
#[inline]
pub fn split(a: f64) -> (f64, f64) {
  if a > SPLIT_THRESHOLD || a < -SPLIT_THRESHOLD {
    let a = a * SPLIT_SCALE_DOWN;
    let t = SPLITTER * a;
    let hi = t - (t - a);
    let lo = a - hi;
    (hi * SPLIT_SCALE_UP, lo * SPLIT_SCALE_UP)
  } else {
    let t = SPLITTER * a;
    let hi = t - (t - a);
    (hi, a - hi)
  }
}

/// Two-Product: `p = fl(a × b)` and `e = a × b - p`, exactly.
///
/// This is done with Dekker's algorithm rather than a fused multiply-add, so that results are
/// bit-identical on every target. The error term is exact as long as `a × b` neither overflows
/// nor falls into the subnormal range.
#[inline]
pub fn two_product(a: f64, b: f64) -> (f64, f64) {
  let p = a * b;
  let (ah, al) = split(a);
  let (bh, bl) = split(b);
  let e = ((ah * bh - p) + ah * bl + al * bh) + al * bl;
  (p, e)
}
