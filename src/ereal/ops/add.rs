use super::*;
use crate::expansion::fast_expansion_sum;

impl<
  const N: usize,
> Ereal<N> {
  pub(crate) fn add(self, other: Self) -> Self {
    if !self.is_finite() || !other.is_finite() {
      return Self::from(self.top() + other.top())
    }
    if self.is_zero() {
      return other
    }
    if other.is_zero() {
      return self
    }
    // The sum of the top limbs is within an ulp or so of the result, so if that overflows the
    // result does too (and the expansion arithmetic would produce NaN error terms).
    let estimate = self.top() + other.top();
    if estimate.is_infinite() {
      return Self::from(estimate)
    }
    Self::from_expansion(&fast_expansion_sum(self.limbs(), other.limbs()))
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
