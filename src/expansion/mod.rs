//! Arithmetic on floating point *expansions*.
//!
//! An expansion is a sequence of `f64` *limbs* whose exact (unrounded) sum is the represented
//! value. Following Shewchuk, "Adaptive Precision Floating-Point Arithmetic and Fast Robust
//! Geometric Predicates" (1997), the kernels in this module keep expansions
//!
//!   - ordered by **increasing magnitude**: `e[0]` is the least significant limb and `e[len-1]`
//!     the most significant one, and
//!   - **non-overlapping**: the lowest set bit of every limb is more significant than the highest
//!     set bit of every smaller limb.
//!
//! Together these guarantee that the most significant limb carries the sign of the whole
//! expansion, and (after [`compress`]) approximates its value to within one ulp.
//!
//! Every function in this module is *error-free*, meaning the returned expansion sums to exactly
//! the mathematical result, except for the ones that take a `limit` on the number of limbs
//! ([`renormalize`], [`expansion_product_truncated`], [`divide_by_scalar`],
//! [`expansion_reciprocal`], [`expansion_quotient`]), which are correct to about `53 × limit`
//! bits.
//!
//! Inputs are borrowed slices and outputs are freshly allocated [`Expansion`]s. Outputs are
//! *zero-eliminated*: they contain no zero limbs, except that an exactly-zero result of a
//! non-empty computation is returned as the single limb `[0.0]`.
//!
//! None of the functions here check for NaN or infinite limbs; those propagate in unspecified
//! ways. The [`Ereal`](crate::Ereal) type filters them out before calling into this module.

/// Error-free transformations on pairs of doubles: the building blocks of everything else.
mod eft;

/// Expansion + double and expansion + expansion.
mod sum;

/// Compression and renormalisation to a bounded number of limbs.
mod compress;

/// Expansion × double.
mod scale;

/// Expansion × expansion, exact and truncated.
mod product;

/// Division of expansions, via long division or Newton iteration.
mod quotient;

/// Sign and comparison of expansions.
mod compare;

#[cfg(test)]
pub(crate) mod test;

pub use eft::{quick_two_sum, split, two_diff, two_product, two_sum};
pub use sum::{fast_expansion_sum, grow_expansion, linear_expansion_sum, negate};
pub use compress::{compress, estimate, is_increasing_magnitude, is_nonoverlapping, renormalize};
pub use scale::scale_expansion;
pub use product::{expansion_product, expansion_product_truncated};
pub use quotient::{divide_by_scalar, expansion_quotient, expansion_reciprocal};
pub use compare::{compare_adaptive, sign_adaptive};

/// An owned expansion, as returned by every function in this module.
///
/// Short expansions (which is nearly all of them, for [`Ereal`](crate::Ereal)s of moderate
/// precision) live inline without touching the heap.
pub type Expansion = smallvec::SmallVec<[f64; 32]>;

/// The binary exponent of `x`, that is, `floor(log2(|x|))`, also for subnormals.
///
/// Zero maps to a very negative value and non-finite values to a very positive one, chosen so
/// that adding or subtracting a few thousand never overflows.
#[inline]
pub(crate) fn exponent(x: f64) -> i32 {
  const ZERO: i32 = i32::MIN / 4;
  const NON_FINITE: i32 = i32::MAX / 4;
  let bits = x.to_bits() & !(1 << 63);
  let biased = (bits >> 52) as i32;
  let mantissa = bits & ((1 << 52) - 1);
  match biased {
    0 if mantissa == 0 => ZERO,
    0 => -1074 + (63 - mantissa.leading_zeros() as i32),
    0x7ff => NON_FINITE,
    _ => biased - 1023,
  }
}

/// The exponent of the lowest set bit of `x`, which must be finite and non-zero.
#[inline]
pub(crate) fn lowest_bit_exponent(x: f64) -> i32 {
  let bits = x.to_bits() & !(1 << 63);
  let biased = (bits >> 52) as i32;
  let mantissa = bits & ((1 << 52) - 1);
  if biased == 0 {
    -1074 + mantissa.trailing_zeros() as i32
  } else {
    let significand = mantissa | (1 << 52);
    biased - 1075 + significand.trailing_zeros() as i32
  }
}

/// The most significant non-zero limb of `e`, if any.
#[inline]
pub(crate) fn most_significant(e: &[f64]) -> Option<f64> {
  e.iter().rev().copied().find(|&x| x != 0.0)
}
