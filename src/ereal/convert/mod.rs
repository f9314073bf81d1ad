use super::*;

/// Conversions to and from `f64` and `f32`.
mod float;

/// Conversions from primitive integers.
mod int;

impl<
  const N: usize,
> Ereal<N> {
  /// Convert to an ereal with a different number of limbs `M`. This is exact if `M ≥ N`, and
  /// rounds to `M` limbs otherwise.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let third = Ereal::<8>::ONE / 3.;
  /// assert_eq!(third.resize::<2>().len(), 2);
  /// assert_eq!(third.resize::<1>().limbs(), [1. / 3.]);
  /// assert_eq!(third.resize::<16>().resize::<8>(), third);
  /// ```
  pub fn resize<const M: usize>(self) -> Ereal<M> {
    Ereal::<M>::from_expansion(self.limbs())
  }
}
