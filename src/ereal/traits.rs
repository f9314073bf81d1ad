use super::*;

impl<const N: usize>
Default for Ereal<N> {
  /// Zero.
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl<const N: usize>
core::iter::Sum for Ereal<N> {
  /// Sums the ereals of an iterator, rounding to `N` limbs after every addition.
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::ZERO, |acc, x| acc + x)
  }
}

impl<'a, const N: usize>
core::iter::Sum<&'a Ereal<N>> for Ereal<N> {
  fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.fold(Self::ZERO, |acc, x| acc + x)
  }
}

impl<const N: usize>
core::iter::Product for Ereal<N> {
  /// Multiplies the ereals of an iterator, rounding to `N` limbs after every multiplication.
  fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::ONE, |acc, x| acc * x)
  }
}

impl<'a, const N: usize>
core::iter::Product<&'a Ereal<N>> for Ereal<N> {
  fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.fold(Self::ONE, |acc, x| acc * x)
  }
}
