use super::*;

impl<
  const N: usize,
> Ereal<N> {
  /// Write `self = r + k π/2` with `|r| ≤ π/4`, and return `r` and `k mod 4`.
  ///
  /// The reduction is done with `N`-limb π, so the absolute error of `r` grows with `|k|`.
  fn reduce_half_pi(self) -> (Self, u8) {
    let half_pi = Self::half_pi();
    let k = (self / half_pi).round();
    let r = self - half_pi * k;
    // `k` is an integer, so this is exact.
    let quadrant = k - k.ldexp(-2).floor().ldexp(2);
    (r, quadrant.to_f64() as u8)
  }

  /// `sin(r)` by its Taylor series, for `|r| ≤ π/4`.
  fn sin_reduced(r: Self) -> Self {
    let r2 = r * r;
    let mut term = r;
    Self::sum_series(r, |n| {
      term = -(term * r2) / (2 * n * (2 * n + 1)) as f64;
      term
    })
  }

  /// The sine and cosine of `self`, computed together.
  ///
  /// After reduction modulo π/2 the sine is summed from its Taylor series, and the cosine
  /// obtained as `√((1 - s)(1 + s))`, which loses nothing since it is at least `√½`.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let (s, c) = Ereal::<4>::from(0.5).sin_cos();
  /// assert!((s * s + c * c - 1.).abs() < 1e-60);
  /// ```
  pub fn sin_cos(self) -> (Self, Self) {
    if !self.is_finite() {
      return (Self::NAN, Self::NAN)
    }
    if self.is_zero() {
      return (Self::ZERO, Self::ONE)
    }
    let (r, quadrant) = self.reduce_half_pi();
    let s = Self::sin_reduced(r);
    let c = ((Self::ONE - s) * (Self::ONE + s)).sqrt();
    match quadrant {
      0 => (s, c),
      1 => (c, -s),
      2 => (-s, -c),
      _ => (-c, s),
    }
  }

  /// The sine of `self` (in radians). NaN for infinite arguments.
  pub fn sin(self) -> Self {
    self.sin_cos().0
  }

  /// The cosine of `self` (in radians). NaN for infinite arguments.
  pub fn cos(self) -> Self {
    self.sin_cos().1
  }

  /// The tangent of `self` (in radians). NaN for infinite arguments.
  pub fn tan(self) -> Self {
    let (s, c) = self.sin_cos();
    if c.is_zero() {
      // `self` is π/2 (mod π) to all `N` limbs.
      return Self::from(s.top() * f64::INFINITY)
    }
    s / c
  }
}
