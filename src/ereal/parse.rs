use super::*;
use crate::error::ParseErealError;

/// Largest magnitude of decimal exponent we keep track of; anything beyond overflows or
/// underflows regardless of the digits.
const MAX_EXPONENT: i64 = 1_000_000_000;

impl<
  const N: usize,
> core::str::FromStr for Ereal<N> {
  type Err = ParseErealError;

  /// Parse a decimal literal of the form `[+-]digits[.digits][(e|E)[+-]digits]` (either the
  /// integer or the fractional digits may be omitted, but not both), or one of `inf`,
  /// `infinity`, or `nan` (case insensitive, optionally signed). Surrounding whitespace is
  /// ignored.
  ///
  /// The result is correctly rounded, with any number of digits or size of exponent: its top limb
  /// is the `f64` nearest to the literal, and each further limb the `f64` nearest to what is left
  /// over. So equal values always parse to identical limbs. Values too large overflow to ±∞, and
  /// values too small underflow to zero.
  ///
  /// # Example
  ///
  /// ```
  /// # use ereal::Ereal;
  /// let x: Ereal<2> = "12.5e-1".parse().unwrap();
  /// assert_eq!(x, 1.25);
  /// let tenth: Ereal<4> = "0.1".parse().unwrap();
  /// assert!((tenth * 10. - 1.).abs() < 1e-60);
  /// assert!("1e999".parse::<Ereal<4>>().unwrap().is_infinite());
  /// assert!("1.2.3".parse::<Ereal<4>>().is_err());
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.is_empty() {
      return Err(ParseErealError::Empty)
    }
    let (negative, body) = match s.as_bytes()[0] {
      b'-' => (true, &s[1 ..]),
      b'+' => (false, &s[1 ..]),
      _ => (false, s),
    };
    let value = if body.eq_ignore_ascii_case("inf") || body.eq_ignore_ascii_case("infinity") {
      Self::INFINITY
    } else if body.eq_ignore_ascii_case("nan") {
      Self::NAN
    } else {
      Self::parse_decimal(body)?
    };
    Ok(if negative {-value} else {value})
  }
}

impl<
  const N: usize,
> Ereal<N> {
  /// Parse an unsigned decimal literal.
  fn parse_decimal(s: &str) -> Result<Self, ParseErealError> {
    let (mantissa, exponent) = match s.find(['e', 'E']) {
      Some(i) => (&s[.. i], Some(&s[i + 1 ..])),
      None => (s, None),
    };
    let (int, frac) = match mantissa.find('.') {
      Some(i) => (&mantissa[.. i], &mantissa[i + 1 ..]),
      None => (mantissa, ""),
    };
    if let Some(c) = int.chars().chain(frac.chars()).find(|c| !c.is_ascii_digit()) {
      return Err(ParseErealError::InvalidCharacter(c))
    }
    if int.is_empty() && frac.is_empty() {
      return Err(ParseErealError::NoDigits)
    }
    let exponent = match exponent {
      Some(exponent) => parse_exponent(exponent)?,
      None => 0,
    };

    // The value is `digits × 10^power`, with `digits` read as an integer.
    let digits: Vec<u8> = int.bytes().chain(frac.bytes()).map(|c| c - b'0').collect();
    let power = exponent - frac.len().min(MAX_EXPONENT as usize) as i64;
    let start = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
    let end = digits.iter().rposition(|&d| d != 0).map_or(start, |i| i + 1);
    if start == end {
      return Ok(Self::ZERO)
    }
    Ok(Self::from_decimal(&digits[start .. end], power + (digits.len() - end) as i64))
  }
}

/// Parse the exponent part of a literal (after the `e`), saturating at ±[`MAX_EXPONENT`].
fn parse_exponent(s: &str) -> Result<i64, ParseErealError> {
  let (negative, digits) = match s.as_bytes().first() {
    Some(b'-') => (true, &s[1 ..]),
    Some(b'+') => (false, &s[1 ..]),
    _ => (false, s),
  };
  if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
    return Err(ParseErealError::InvalidExponent)
  }
  let magnitude = digits.bytes()
    .fold(0i64, |acc, c| (acc * 10 + (c - b'0') as i64).min(MAX_EXPONENT));
  Ok(if negative {-magnitude} else {magnitude})
}
