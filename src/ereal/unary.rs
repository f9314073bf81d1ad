use super::*;

impl<
  const N: usize,
> Ereal<N> {
  /// The absolute value of `self`. NaN stays NaN.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let x = Ereal::<2>::from_limbs(&[1e-20, -3.0]);
  /// assert_eq!(x.abs().limbs(), [-1e-20, 3.0]);
  /// ```
  #[inline]
  pub fn abs(self) -> Self {
    if self.is_negative() { -self } else { self }
  }
}

impl<const N: usize>
core::ops::Neg for Ereal<N> {
  type Output = Ereal<N>;

  /// Negation is exact: it negates every limb.
  #[inline]
  fn neg(mut self) -> Self::Output {
    for x in &mut self.limbs[.. self.len] {
      *x = -*x
    }
    self
  }
}

impl<const N: usize>
core::ops::Neg for &Ereal<N> {
  type Output = Ereal<N>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}
