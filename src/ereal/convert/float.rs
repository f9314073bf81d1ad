use super::*;

impl<
  const N: usize,
> From<f64> for Ereal<N> {
  /// Convert an `f64` to an ereal. This is exact (a negative zero becomes zero).
  #[inline]
  fn from(value: f64) -> Self {
    if value == 0.0 {
      Self::ZERO
    } else {
      Self::single(value)
    }
  }
}

impl<
  const N: usize,
> From<f32> for Ereal<N> {
  /// Convert an `f32` to an ereal. This is exact.
  #[inline]
  fn from(value: f32) -> Self {
    Self::from(f64::from(value))
  }
}

impl<
  const N: usize,
> Ereal<N> {
  /// The `f64` nearest to `self` (up to a possible double rounding in the last bit).
  ///
  /// This sums the limbs in increasing order of magnitude.
  #[inline]
  pub fn to_f64(&self) -> f64 {
    crate::expansion::estimate(self.limbs())
  }

  /// An `f32` near `self`, obtained by rounding [`Self::to_f64`].
  #[inline]
  pub fn to_f32(&self) -> f32 {
    self.to_f64() as f32
  }
}

impl<
  const N: usize,
> From<Ereal<N>> for f64 {
  #[inline]
  fn from(value: Ereal<N>) -> Self {
    value.to_f64()
  }
}

impl<
  const N: usize,
> From<Ereal<N>> for f32 {
  #[inline]
  fn from(value: Ereal<N>) -> Self {
    value.to_f32()
  }
}
