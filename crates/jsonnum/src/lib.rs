//! Strict JSON number codec.
//!
//! Recognizes the RFC 8259 number grammar at a cursor inside a larger buffer,
//! converts the match to a correctly rounded `f32` or `f64`, and writes floats
//! back as the shortest text that parses to the identical bit pattern.
//!
//! ```
//! use jsonnum::{Codec, DecodeContext, number};
//!
//! let mut ctx = DecodeContext::new("1.1,2");
//! let value = number::<f32>().decode(&mut ctx).unwrap();
//! assert_eq!(value, 1.1_f32);
//! assert_eq!(ctx.position(), 3);
//!
//! assert_eq!(number::<f64>().encode(&0.5).unwrap(), "0.5");
//! ```
//!
//! A valid number followed by other bytes is a successful, partial match: the
//! cursor stops after the number and the caller decides what comes next.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod context;
mod encode_decode;
mod encoder;
mod error;
mod float;
mod options;
pub mod scanner;

#[cfg(test)]
mod tests;

pub use codec::{Codec, DefaultCodec, NumberCodec, default_codec, number};
pub use context::DecodeContext;
pub use encode_decode::{decode, decode_partial, decode_with, encode};
pub use encoder::{Shortest, encode_shortest};
pub use error::{DecodeError, DecodeErrorKind, EncodeError};
pub use float::Float;
pub use options::DecodeOptions;
