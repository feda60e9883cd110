//! Binary floating-point widths the codec can target.

use core::{
    fmt::{Debug, LowerExp},
    str::FromStr,
};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// An IEEE-754 binary floating-point type: `f32` or `f64`.
///
/// Parsing goes through `core`'s `FromStr`, which rounds correctly
/// (round-to-nearest, ties-to-even) straight from the decimal text to the
/// target width. Formatting goes through `LowerExp`, which yields the
/// shortest digit string that parses back to the same value.
pub trait Float: Copy + PartialEq + Debug + LowerExp + FromStr + sealed::Sealed + 'static {
    /// Type name used in diagnostics.
    const NAME: &'static str;

    /// Returns `true` if the value is neither infinite nor `NaN`.
    fn is_finite(self) -> bool;

    /// Raw bit pattern, widened to 64 bits.
    fn to_bits_u64(self) -> u64;
}

impl Float for f32 {
    const NAME: &'static str = "f32";

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn to_bits_u64(self) -> u64 {
        u64::from(self.to_bits())
    }
}

impl Float for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn to_bits_u64(self) -> u64 {
        self.to_bits()
    }
}

/// Converts scanner-validated number text to the nearest `T`.
///
/// Out-of-range magnitudes round to `±inf` or `±0`. Returns `None` only if
/// `lexeme` is not number text, which the scanner rules out.
#[inline]
pub(crate) fn parse_lexeme<T: Float>(lexeme: &[u8]) -> Option<T> {
    let text = core::str::from_utf8(lexeme).ok()?;
    text.parse::<T>().ok()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn nearest_value_per_width() {
        assert_eq!(parse_lexeme::<f64>(b"1.1"), Some(1.1_f64));
        assert_eq!(parse_lexeme::<f32>(b"1.1"), Some(1.1_f32));
        #[allow(clippy::cast_possible_truncation)]
        let narrowed = 1.1_f64 as f32;
        assert_eq!(parse_lexeme::<f32>(b"1.1"), Some(narrowed));
        assert_ne!(
            f64::from(parse_lexeme::<f32>(b"1.1").unwrap()),
            parse_lexeme::<f64>(b"1.1").unwrap()
        );
    }

    #[test]
    fn single_precision_is_not_double_rounded() {
        // Halfway between two f32 neighbours once rounded to f64 first.
        let text = b"1.00000005960464477550";
        assert_eq!(parse_lexeme::<f32>(text), Some(1.000_000_1_f32));
    }

    #[rstest]
    #[case(b"1e400", f64::INFINITY)]
    #[case(b"-1e400", f64::NEG_INFINITY)]
    #[case(b"1e-400", 0.0)]
    #[case(b"5e-324", 5e-324)]
    #[case(b"2.4703282292062328e-324", 5e-324)]
    fn saturates_out_of_range(#[case] text: &[u8], #[case] expected: f64) {
        let got = parse_lexeme::<f64>(text).unwrap();
        assert_eq!(got.to_bits(), expected.to_bits());
    }

    #[test]
    fn negative_zero_keeps_sign() {
        let got = parse_lexeme::<f64>(b"-0").unwrap();
        assert_eq!(got.to_bits(), (-0.0_f64).to_bits());
        let got = parse_lexeme::<f32>(b"-0.0e7").unwrap();
        assert_eq!(got.to_bits(), (-0.0_f32).to_bits());
    }

    #[test]
    fn widened_bits() {
        assert_eq!(1.0_f32.to_bits_u64(), 0x3f80_0000);
        assert_eq!(1.0_f64.to_bits_u64(), 0x3ff0_0000_0000_0000);
        assert_eq!(<f32 as Float>::NAME, "f32");
    }
}
