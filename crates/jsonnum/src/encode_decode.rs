//! Whole-input conveniences over [`Codec`].

use alloc::string::String;

use crate::{
    codec::{Codec, DefaultCodec},
    context::DecodeContext,
    error::{DecodeError, DecodeErrorKind, EncodeError},
    options::DecodeOptions,
};

/// Encodes `value` with its default codec.
///
/// # Errors
///
/// Propagates the codec's [`EncodeError`].
pub fn encode<T: DefaultCodec>(value: &T) -> Result<String, EncodeError> {
    T::default_codec().encode(value)
}

/// Decodes all of `input` with the default codec for `T`.
///
/// ```
/// assert_eq!(jsonnum::decode::<f64>("0.5"), Ok(0.5));
/// assert!(jsonnum::decode::<f64>("0.5 ").is_err());
/// ```
///
/// # Errors
///
/// [`InvalidNumber`](DecodeErrorKind::InvalidNumber) if `input` does not start
/// with a number, [`TrailingInput`](DecodeErrorKind::TrailingInput) if it
/// continues after one.
pub fn decode<T: DefaultCodec>(input: &str) -> Result<T, DecodeError> {
    decode_with(&T::default_codec(), input, DecodeOptions::default())
}

/// Decodes `input` with `codec`, checking consumption according to `options`.
///
/// # Errors
///
/// As [`decode`], except that trailing input is accepted when
/// [`DecodeOptions::allow_trailing_input`] is set.
pub fn decode_with<C: Codec>(
    codec: &C,
    input: &str,
    options: DecodeOptions,
) -> Result<C::Object, DecodeError> {
    let mut ctx = DecodeContext::new(input);
    let value = codec.decode(&mut ctx)?;
    if !options.allow_trailing_input && !ctx.is_at_end() {
        return Err(DecodeError::new(
            DecodeErrorKind::TrailingInput,
            ctx.position(),
        ));
    }
    Ok(value)
}

/// Decodes a prefix of `input` with `codec`, returning the value and the
/// number of bytes consumed.
///
/// # Errors
///
/// Propagates the codec's [`DecodeError`].
pub fn decode_partial<C: Codec>(codec: &C, input: &str) -> Result<(C::Object, usize), DecodeError> {
    let mut ctx = DecodeContext::new(input);
    let value = codec.decode(&mut ctx)?;
    Ok((value, ctx.position()))
}
