//! Free functions mirroring the C `<math.h>` names, for code that reads better as `sqrt(x)` than
//! as `x.sqrt()`.
//!
//! Each one simply forwards to the [`Ereal`] method of the same meaning; in particular domain
//! errors produce NaN (or panic, with the `panic_on_domain_error` feature). Use the `try_*`
//! methods to get a [`DomainError`](crate::DomainError) instead.
//!
//! ```
//! use ereal::Ereal;
//! use ereal::functions::{atan, sqrt};
//!
//! let four_atan_one = atan(Ereal::<4>::ONE).ldexp(2);
//! assert!((four_atan_one - Ereal::<4>::pi()).abs() < 1e-60);
//! assert_eq!(sqrt(Ereal::<4>::from(2.25)), Ereal::from(1.5));
//! ```

use crate::Ereal;

macro_rules! unary {
  ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
    $(
      $(#[$doc])*
      #[inline]
      pub fn $name<const N: usize>(x: Ereal<N>) -> Ereal<N> {
        x.$method()
      }
    )*
  };
}

macro_rules! binary {
  ($($(#[$doc:meta])* $name:ident($x:ident, $y:ident) => $body:expr;)*) => {
    $(
      $(#[$doc])*
      #[inline]
      pub fn $name<const N: usize>($x: Ereal<N>, $y: Ereal<N>) -> Ereal<N> {
        $body
      }
    )*
  };
}

unary!{
  /// Absolute value.
  abs => abs;
  /// Square root.
  sqrt => sqrt;
  /// Cube root.
  cbrt => cbrt;
  /// `e^x`.
  exp => exp;
  /// `2^x`.
  exp2 => exp2;
  /// `10^x`.
  exp10 => exp10;
  /// `e^x - 1`.
  expm1 => expm1;
  /// Natural logarithm.
  log => ln;
  /// Base 2 logarithm.
  log2 => log2;
  /// Base 10 logarithm.
  log10 => log10;
  /// `ln(1 + x)`.
  log1p => ln_1p;
  /// Sine.
  sin => sin;
  /// Cosine.
  cos => cos;
  /// Tangent.
  tan => tan;
  /// Arcsine.
  asin => asin;
  /// Arccosine.
  acos => acos;
  /// Arctangent.
  atan => atan;
  /// Hyperbolic sine.
  sinh => sinh;
  /// Hyperbolic cosine.
  cosh => cosh;
  /// Hyperbolic tangent.
  tanh => tanh;
  /// Inverse hyperbolic sine.
  asinh => asinh;
  /// Inverse hyperbolic cosine.
  acosh => acosh;
  /// Inverse hyperbolic tangent.
  atanh => atanh;
  /// Largest integer not above `x`.
  floor => floor;
  /// Smallest integer not below `x`.
  ceil => ceil;
  /// `x` with its fractional part removed.
  trunc => trunc;
  /// Nearest integer, ties away from zero.
  round => round;
}

binary!{
  /// Four quadrant arctangent of `y / x`.
  atan2(y, x) => y.atan2(x);
  /// `√(x² + y²)`, without intermediate overflow.
  hypot(x, y) => x.hypot(y);
  /// `x^y`.
  pow(x, y) => x.pow(y);
  /// Remainder of `x / y`, with the sign of `x`.
  fmod(x, y) => x % y;
}

/// `x × 2^k`, exactly.
#[inline]
pub fn ldexp<const N: usize>(x: Ereal<N>, k: i32) -> Ereal<N> {
  x.ldexp(k)
}
