use super::*;
use core::cmp::Ordering;
use crate::expansion::compare_adaptive;

impl<
  const N: usize,
> Ereal<N> {
  /// Compare `self` and `other` exactly, or return `None` if either is NaN.
  ///
  /// Most comparisons are decided by the signs and top limbs; only values that agree on those
  /// need to look at the rest of the limbs.
  fn compare(&self, other: &Self) -> Option<Ordering> {
    if self.is_nan() || other.is_nan() {
      None
    } else if !self.is_finite() || !other.is_finite() {
      self.top().partial_cmp(&other.top())
    } else {
      Some(compare_adaptive(self.limbs(), other.limbs()))
    }
  }
}

impl<const N: usize>
PartialEq for Ereal<N> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.compare(other) == Some(Ordering::Equal)
  }
}

impl<const N: usize>
PartialOrd for Ereal<N> {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.compare(other)
  }
}

impl<const N: usize>
PartialEq<f64> for Ereal<N> {
  #[inline]
  fn eq(&self, other: &f64) -> bool {
    self.compare(&Self::from(*other)) == Some(Ordering::Equal)
  }
}

impl<const N: usize>
PartialOrd<f64> for Ereal<N> {
  #[inline]
  fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
    self.compare(&Self::from(*other))
  }
}

impl<const N: usize>
PartialEq<Ereal<N>> for f64 {
  #[inline]
  fn eq(&self, other: &Ereal<N>) -> bool {
    other == self
  }
}

impl<const N: usize>
PartialOrd<Ereal<N>> for f64 {
  #[inline]
  fn partial_cmp(&self, other: &Ereal<N>) -> Option<Ordering> {
    other.partial_cmp(self).map(Ordering::reverse)
  }
}
