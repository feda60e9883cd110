//! Shortest round-trip text for binary floats.
//!
//! `core` already knows how to find the shortest digit string that parses
//! back to the same value; it exposes it through `{:e}`. This module only
//! decides where the decimal point goes:
//!
//! - fixed notation while the decimal point sits within 21 digits left of,
//!   or 6 zeros right of, the first digit: `100`, `0.5`, `0.000001`;
//! - scientific notation otherwise: `1e21`, `1.5e-7`, `5e-324`.
//!
//! Integral values carry no fraction (`1`, not `1.0`) and negative zero keeps
//! its sign (`-0`). Every output matches the JSON number grammar.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::{error::EncodeError, float::Float};

/// Largest exponent (point position) printed in fixed notation.
const MAX_FIXED_POINT: i32 = 21;
/// Smallest exponent (point position) printed in fixed notation, exclusive.
const MIN_FIXED_POINT: i32 = -6;

/// `Display` adapter that writes a finite float as its shortest JSON text.
///
/// ```
/// use jsonnum::Shortest;
///
/// assert_eq!(Shortest::new(0.5_f32).unwrap().to_string(), "0.5");
/// assert_eq!(Shortest::new(1e-7_f64).unwrap().to_string(), "1e-7");
/// assert!(Shortest::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shortest<T>(T);

impl<T: Float> Shortest<T> {
    /// Wraps `value`, rejecting `NaN` and the infinities.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::NonFinite`] if `value` is not finite.
    pub fn new(value: T) -> Result<Self, EncodeError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            tracing::debug!(ty = T::NAME, ?value, "rejecting non-finite number");
            Err(EncodeError::NonFinite)
        }
    }

    /// The wrapped value.
    #[must_use]
    pub fn get(self) -> T {
        self.0
    }
}

impl<T: Float> fmt::Display for Shortest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sci = SciBuf::default();
        write!(sci, "{:e}", self.0)?;
        let parts = sci.split().ok_or(fmt::Error)?;
        parts.write_json(f)
    }
}

/// Encodes a finite float as its shortest JSON number text.
///
/// # Errors
///
/// Returns [`EncodeError::NonFinite`] for `NaN` and the infinities.
pub fn encode_shortest<T: Float>(value: T) -> Result<String, EncodeError> {
    Ok(Shortest::new(value)?.to_string())
}

/// Stack buffer for the `{:e}` rendering; `-1.7976931348623157e308` is the
/// longest it gets.
struct SciBuf {
    bytes: [u8; 32],
    len: usize,
}

impl Default for SciBuf {
    fn default() -> Self {
        Self {
            bytes: [0; 32],
            len: 0,
        }
    }
}

impl Write for SciBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        let dst = self.bytes.get_mut(self.len..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

impl SciBuf {
    /// Splits `-d.ddde-x` into sign, significant digits and exponent.
    fn split(&self) -> Option<SciParts<'_>> {
        let text = &self.bytes[..self.len];
        let (negative, text) = match text.split_first() {
            Some((b'-', rest)) => (true, rest),
            _ => (false, text),
        };
        let e = text.iter().position(|&b| b == b'e')?;
        let (mantissa, exponent) = (&text[..e], &text[e + 1..]);
        let exponent = core::str::from_utf8(exponent).ok()?.parse::<i32>().ok()?;

        let (lead, frac) = match mantissa.iter().position(|&b| b == b'.') {
            Some(dot) => (&mantissa[..dot], &mantissa[dot + 1..]),
            None => (mantissa, &[][..]),
        };
        if lead.len() != 1 {
            return None;
        }

        Some(SciParts {
            negative,
            lead: lead[0],
            frac,
            point: exponent + 1,
        })
    }
}

/// A float in scientific form: `lead.frac × 10^(point - 1)`.
struct SciParts<'a> {
    negative: bool,
    lead: u8,
    frac: &'a [u8],
    /// Position of the decimal point relative to the first digit.
    point: i32,
}

impl SciParts<'_> {
    fn digit_count(&self) -> i32 {
        // At most 17 significant digits.
        i32::try_from(self.frac.len()).map_or(i32::MAX, |n| n + 1)
    }

    fn digit(&self, i: usize) -> char {
        if i == 0 {
            char::from(self.lead)
        } else {
            char::from(self.frac[i - 1])
        }
    }

    fn write_digits<W: Write>(&self, out: &mut W, from: usize, to: usize) -> fmt::Result {
        (from..to).try_for_each(|i| out.write_char(self.digit(i)))
    }

    fn write_zeros<W: Write>(out: &mut W, count: i32) -> fmt::Result {
        (0..count).try_for_each(|_| out.write_char('0'))
    }

    fn write_json<W: Write>(&self, out: &mut W) -> fmt::Result {
        let k = self.digit_count();
        let n = self.point;
        let digits = self.frac.len() + 1;

        if self.negative {
            out.write_char('-')?;
        }

        if k <= n && n <= MAX_FIXED_POINT {
            // 1234000
            self.write_digits(out, 0, digits)?;
            Self::write_zeros(out, n - k)
        } else if 0 < n && n <= MAX_FIXED_POINT {
            // 12.34
            let split = usize::try_from(n).map_err(|_| fmt::Error)?;
            self.write_digits(out, 0, split)?;
            out.write_char('.')?;
            self.write_digits(out, split, digits)
        } else if MIN_FIXED_POINT < n && n <= 0 {
            // 0.001234
            out.write_str("0.")?;
            Self::write_zeros(out, -n)?;
            self.write_digits(out, 0, digits)
        } else {
            // 1.234e-7
            self.write_digits(out, 0, 1)?;
            if digits > 1 {
                out.write_char('.')?;
                self.write_digits(out, 1, digits)?;
            }
            write!(out, "e{}", n - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, "0")]
    #[case(-0.0, "-0")]
    #[case(0.5, "0.5")]
    #[case(1.0, "1")]
    #[case(-1.0, "-1")]
    #[case(1.1, "1.1")]
    #[case(100.0, "100")]
    #[case(123.456, "123.456")]
    #[case(0.1 + 0.2, "0.30000000000000004")]
    #[case(1e-6, "0.000001")]
    #[case(1.5e-6, "0.0000015")]
    #[case(1e-7, "1e-7")]
    #[case(-1.5e-7, "-1.5e-7")]
    #[case(1e20, "100000000000000000000")]
    #[case(1e21, "1e21")]
    #[case(1.25e21, "1.25e21")]
    #[case(123_456_789_012_345_680_000.0, "123456789012345680000")]
    #[case(f64::MAX, "1.7976931348623157e308")]
    #[case(f64::MIN_POSITIVE, "2.2250738585072014e-308")]
    #[case(5e-324, "5e-324")]
    fn formats_f64(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(encode_shortest(value).unwrap(), expected);
    }

    #[rstest]
    #[case(0.5, "0.5")]
    #[case(1.1, "1.1")]
    #[case(16_777_216.0, "16777216")]
    #[case(0.1, "0.1")]
    #[case(f32::MAX, "3.4028235e38")]
    #[case(f32::MIN_POSITIVE, "1.1754944e-38")]
    #[case(1e-45, "1e-45")]
    fn formats_f32(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(encode_shortest(value).unwrap(), expected);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn rejects_non_finite(#[case] value: f64) {
        assert_eq!(encode_shortest(value), Err(EncodeError::NonFinite));
        assert_eq!(encode_shortest(value as f32), Err(EncodeError::NonFinite));
    }

    #[test]
    fn display_composes_with_writers() {
        let a = Shortest::new(2.5_f64).unwrap();
        let b = Shortest::new(-3e30_f32).unwrap();
        assert_eq!(format!("[{a},{b}]"), "[2.5,-3e30]");
        assert!((a.get() - 2.5).abs() < f64::EPSILON);
    }
}
