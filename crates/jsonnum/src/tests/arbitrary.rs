use quickcheck::{Arbitrary, Gen};

/// A finite `f64`, drawn either from quickcheck's float generator (small,
/// "interesting" values) or from an arbitrary bit pattern (the whole range,
/// subnormals included).
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct FiniteF64(pub f64);

impl Arbitrary for FiniteF64 {
    fn arbitrary(g: &mut Gen) -> Self {
        loop {
            let value = if bool::arbitrary(g) {
                f64::arbitrary(g)
            } else {
                f64::from_bits(u64::arbitrary(g))
            };
            if value.is_finite() {
                return Self(value);
            }
        }
    }
}

/// A finite `f32`; see [`FiniteF64`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct FiniteF32(pub f32);

impl Arbitrary for FiniteF32 {
    fn arbitrary(g: &mut Gen) -> Self {
        loop {
            let value = if bool::arbitrary(g) {
                f32::arbitrary(g)
            } else {
                f32::from_bits(u32::arbitrary(g))
            };
            if value.is_finite() {
                return Self(value);
            }
        }
    }
}
