use super::*;
use core::fmt;

impl<
  const N: usize,
> Ereal<N> {
  /// Format `|self|` with `precision` significant digits, in fixed or scientific notation,
  /// whichever is more compact (like C's `%g`). Trailing zeros are removed unless `keep_zeros`.
  fn format_general(&self, precision: usize, keep_zeros: bool) -> String {
    let (digits, exponent) = self.decimal_digits(precision);
    let digits: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    if exponent < -4 || exponent >= precision as i64 {
      let mantissa = with_point(&digits, 1);
      let mantissa = if keep_zeros { mantissa.as_str() } else { trim_zeros(&mantissa) };
      format!("{mantissa}e{exponent}")
    } else if exponent >= 0 {
      let fixed = with_point(&digits, exponent as usize + 1);
      if keep_zeros { fixed } else { trim_zeros(&fixed).to_owned() }
    } else {
      let fixed = format!("0.{}{digits}", "0".repeat((-exponent - 1) as usize));
      if keep_zeros { fixed } else { trim_zeros(&fixed).to_owned() }
    }
  }

  /// Format `|self|` in scientific notation with `precision` significant digits. Trailing zeros
  /// are removed unless `keep_zeros`.
  fn format_scientific(&self, precision: usize, keep_zeros: bool) -> String {
    if self.is_zero() {
      let mantissa = with_point(&"0".repeat(precision), 1);
      let mantissa = if keep_zeros { mantissa.as_str() } else { "0" };
      return format!("{mantissa}e0")
    }
    let (digits, exponent) = self.decimal_digits(precision);
    let digits: String = digits.iter().map(|&d| char::from(b'0' + d)).collect();
    let mantissa = with_point(&digits, 1);
    let mantissa = if keep_zeros { mantissa.as_str() } else { trim_zeros(&mantissa) };
    format!("{mantissa}e{exponent}")
  }
}

/// Insert a decimal point after the first `integral` digits (if there are any digits after it).
fn with_point(digits: &str, integral: usize) -> String {
  if integral >= digits.len() {
    format!("{digits}{}", "0".repeat(integral - digits.len()))
  } else {
    format!("{}.{}", &digits[.. integral], &digits[integral ..])
  }
}

/// Remove trailing zeros after the decimal point, and the point itself if nothing is left.
fn trim_zeros(s: &str) -> &str {
  if s.contains('.') {
    s.trim_end_matches('0').trim_end_matches('.')
  } else {
    s
  }
}

impl<
  const N: usize,
> fmt::Debug for Ereal<N> {
  /// Prints the limbs, least significant first, e.g. `Ereal([1e-20, 1.0])`.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Ereal")
      .field(&self.limbs())
      .finish()
  }
}

impl<
  const N: usize,
> fmt::Display for Ereal<N> {
  /// Prints `self` in decimal.
  ///
  /// The precision of the formatter is the number of *significant* digits (not of digits after
  /// the point), and defaults to [`Self::DIGITS`]. The shorter of fixed and scientific notation
  /// is used, and trailing zeros are omitted unless the alternate flag `#` is given.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let third = Ereal::<4>::ONE / 3.;
  /// assert_eq!(format!("{third:.10}"), "0.3333333333");
  /// assert_eq!(format!("{:.3}", third * 1e10), "3.33e9");
  /// assert_eq!(format!("{:#.4}", Ereal::<4>::from(1.5)), "1.500");
  /// assert_eq!(format!("{}", Ereal::<4>::from(-0.375)), "-0.375");
  /// ```
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_nan() {
      return f.pad("NaN")
    }
    let body = if self.is_infinite() {
      String::from("inf")
    } else if self.is_zero() {
      String::from("0")
    } else {
      let precision = f.precision().unwrap_or(Self::DIGITS as usize).max(1);
      self.format_general(precision, f.alternate())
    };
    f.pad_integral(!self.is_negative(), "", &body)
  }
}

impl<
  const N: usize,
> fmt::LowerExp for Ereal<N> {
  /// Prints `self` in scientific notation.
  ///
  /// As with primitive floats, the precision is the number of digits after the point, and if
  /// given, trailing zeros are kept. Without one, up to [`Self::DIGITS`] significant digits are
  /// printed.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// assert_eq!(format!("{:e}", Ereal::<2>::from(1500.)), "1.5e3");
  /// assert_eq!(format!("{:.3e}", Ereal::<2>::from(-0.00125)), "-1.250e-3");
  /// ```
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.is_nan() {
      return f.pad("NaN")
    }
    let body = if self.is_infinite() {
      String::from("inf")
    } else {
      match f.precision() {
        Some(precision) => self.format_scientific(precision + 1, true),
        None => self.format_scientific(Self::DIGITS as usize, false),
      }
    };
    f.pad_integral(!self.is_negative(), "", &body)
  }
}
