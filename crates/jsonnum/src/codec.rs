//! The [`Codec`] seam and the number codec built on the scanner.

use alloc::string::String;
use core::{fmt, marker::PhantomData};

use bstr::BStr;

use crate::{
    context::DecodeContext,
    encoder::encode_shortest,
    error::{DecodeError, DecodeErrorKind, EncodeError},
    float::{Float, parse_lexeme},
    scanner::scan_number,
};

/// Converts between JSON text and a Rust value.
pub trait Codec {
    /// The value produced by decoding and consumed by encoding.
    type Object;

    /// Decodes a value at the cursor, advancing it past the consumed text.
    ///
    /// On error the cursor is left where it was. A successful decode may stop
    /// before the end of the input; whether that is acceptable is up to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] tagged with the cursor position when no value
    /// can be decoded there.
    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<Self::Object, DecodeError>;

    /// Encodes `value` as JSON text.
    ///
    /// # Errors
    ///
    /// Returns an [`EncodeError`] when `value` has no JSON representation.
    fn encode(&self, value: &Self::Object) -> Result<String, EncodeError>;
}

/// Codec for JSON numbers as `f32` or `f64`.
///
/// Stateless: one instance can be shared freely, across threads included.
pub struct NumberCodec<T>(PhantomData<fn() -> T>);

impl<T: Float> NumberCodec<T> {
    /// Creates the codec.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: Float> Default for NumberCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for NumberCodec<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NumberCodec<T> {}

impl<T: Float> fmt::Debug for NumberCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumberCodec<{}>", T::NAME)
    }
}

impl<T: Float> Codec for NumberCodec<T> {
    type Object = T;

    fn decode(&self, ctx: &mut DecodeContext<'_>) -> Result<T, DecodeError> {
        let input = ctx.remaining();
        let invalid = || DecodeError::new(DecodeErrorKind::InvalidNumber, ctx.position());

        let Some(lexeme) = scan_number(input) else {
            tracing::trace!(
                position = ctx.position(),
                input = %BStr::new(&input[..input.len().min(16)]),
                "no number at cursor"
            );
            return Err(invalid());
        };

        let text = &input[..lexeme.len()];
        let value = parse_lexeme::<T>(text).ok_or_else(invalid)?;
        ctx.advance(lexeme.len());
        Ok(value)
    }

    fn encode(&self, value: &T) -> Result<String, EncodeError> {
        encode_shortest(*value)
    }
}

/// Shorthand for [`NumberCodec::new`].
#[must_use]
pub const fn number<T: Float>() -> NumberCodec<T> {
    NumberCodec::new()
}

/// Types with a canonical codec.
pub trait DefaultCodec: Sized {
    /// The canonical codec for `Self`.
    type Codec: Codec<Object = Self>;

    /// Returns the canonical codec for `Self`.
    fn default_codec() -> Self::Codec;
}

impl DefaultCodec for f32 {
    type Codec = NumberCodec<f32>;

    fn default_codec() -> Self::Codec {
        number()
    }
}

impl DefaultCodec for f64 {
    type Codec = NumberCodec<f64>;

    fn default_codec() -> Self::Codec {
        number()
    }
}

/// Returns the canonical codec for `T`.
#[must_use]
pub fn default_codec<T: DefaultCodec>() -> T::Codec {
    T::default_codec()
}
