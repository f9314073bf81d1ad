//! This module and its submodules contain [`Ereal`], an adaptive-precision floating point type
//! built on top of the [expansion](crate::expansion) kernels.
//!
//! An `Ereal<N>` holds a non-overlapping [expansion](crate::expansion) of at most `N` limbs, in
//! order of increasing magnitude, stored inline. Every arithmetic operation is carried out
//! *exactly* (or, for products and quotients, to a couple of limbs beyond `N`) on the underlying
//! expansions, and the result is then rounded back to `N` limbs, by absorbing whatever doesn't
//! fit into the lowest retained limb. The precision is thus roughly `53 × N` bits, or about
//! `16 × N` decimal digits.
//!
//! Some notation used in the comments:
//!
//!   - **Top limb**: the most significant limb, which determines the sign and approximates the
//!     value to within 1 ulp.
//!   - **Negligible**: a quantity is negligible relative to `x` if it is below
//!     `2^(-53 × N - 8)` times the top limb of `x`; adding it to `x` cannot change the rounded
//!     result.

/// An adaptive-precision floating point number of at most `N` limbs (about `16 × N` significant
/// decimal digits).
///
/// The special values NaN, +∞, and -∞ are represented as a single non-finite limb. Zero is the
/// empty expansion (there is no negative zero).
///
/// Examples:
///
/// ```
/// # use ereal::Ereal;
/// type Quad = Ereal<2>;  // About 32 decimal digits
/// type Octo = Ereal<8>;  // About 128 decimal digits
///
/// let third = Octo::ONE / 3.;
/// assert!((third * 3. - 1.).abs() < 1e-125);
///
/// // Doubles are converted exactly, so this is the sum of the two doubles nearest 0.1 and 0.2
/// assert!(Quad::from(0.1) + Quad::from(0.2) != Quad::from(0.3));
/// ```
#[derive(Clone, Copy)]
pub struct Ereal<const N: usize> {
  /// The limbs, least significant first. Only the first `len` are meaningful.
  limbs: [f64; N],
  len: usize,
}

/// Basics
mod basics;

/// Constants (zero, one, NaN, π, e, ln 2, ...)
mod consts;

/// Conversions to and from primitive types
mod convert;

/// Arithmetic operators
mod ops;

/// Negation and absolute value
mod unary;

/// Comparisons
mod cmp;

/// Rounding to integers and scaling by powers of two
mod round;

/// Powers of ten, shared by parsing and formatting
mod decimal;

/// Parsing from decimal strings
mod parse;

/// Formatting as decimal strings (and debug output)
mod fmt;

/// `Sum`, `Product`, `Default`, and other std traits
mod traits;

/// Glue for the `num-traits` crate
mod num;

/// Elementary functions: roots, exponentials, logarithms, trigonometric and hyperbolic functions
mod math;
