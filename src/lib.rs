//! This crate provides adaptive-precision floating point arithmetic built on
//! [Shewchuk expansions](https://people.eecs.berkeley.edu/~jrs/papers/robustr.pdf): numbers
//! represented as unevaluated sums of ordinary `f64`s.
//!
//! # Introduction
//!
//! An *expansion* is a sequence of doubles, ordered by increasing magnitude, whose binary
//! significands don't overlap. Their exact sum can carry far more precision than any single
//! double, and error-free transformations (`two_sum`, `two_product`) allow adding and multiplying
//! expansions *exactly*, using nothing but native hardware floating point operations. This makes
//! them fast for moderate precisions, and particularly good at sums of terms with wildly
//! different magnitudes.
//!
//! The crate has two layers:
//!
//!   - [`expansion`]: the raw kernels, working on `&[f64]` slices and returning exact results.
//!   - [`Ereal<N>`]: a fixed-capacity number type of at most `N` limbs (about `16 × N` decimal
//!     digits), with the usual operators, comparisons, conversions, decimal parsing and
//!     formatting, and elementary functions (roots, exponentials, logarithms, powers,
//!     trigonometric and hyperbolic functions). Results are rounded back to `N` limbs after every
//!     operation.
//!
//! The [`functions`] module provides the elementary functions as free functions with the familiar
//! C names.
//!
//! # Usage
//!
//! ```
//! use ereal::Ereal;
//! type E4 = Ereal<4>;  // About 63 significant digits
//!
//! // Create ereals from ints, floats, strings, or constants.
//! let a = E4::from(2);
//! let b: E4 = "0.1".parse().unwrap();
//! let pi = E4::pi();
//!
//! // Arithmetic and comparisons with the usual operators, also mixing in f64s.
//! assert!((b * 10. - 1.).abs() < 1e-60);
//! assert!((a.sqrt() * a.sqrt() - 2.).abs() < 1e-60);
//! assert!((pi.sin()).abs() < 1e-60);
//!
//! // Format with as many digits as needed.
//! assert_eq!(format!("{:.20}", pi), "3.1415926535897932385");
//! ```
//!
//! # Domain errors
//!
//! Functions outside their domain (`sqrt(-1)`, `ln(0)`, `x / 0`, ...) return NaN. Each of them
//! also has a `try_` form returning a [`DomainError`] instead; and the `panic_on_domain_error`
//! cargo feature makes the NaN-returning forms panic, to track down where a NaN came from.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade: domain errors at `debug` level, Newton iteration
//! progress at `trace` level, and iterations that fail to converge at `warn` level.

pub mod expansion;
mod ereal;
pub mod error;
pub mod functions;

pub use ereal::Ereal;
pub use error::{DomainError, ParseErealError};

/// Number of cases for each proptest; elementary functions at high precision are slow, so fewer
/// in debug builds.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x200} else {0x2000};
