use thiserror::Error;

/// A decoding failure, tagged with the byte offset at which it occurred.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct DecodeError {
    pub(crate) kind: DecodeErrorKind,
    pub(crate) position: usize,
}

impl DecodeError {
    pub(crate) fn new(kind: DecodeErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// What went wrong.
    #[must_use]
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }

    /// Byte offset into the input at which decoding failed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }
}

/// The reasons a decode can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// No grammar-valid number starts at the position.
    #[error("invalid number")]
    InvalidNumber,
    /// A number was decoded but the input continues after it. Only the
    /// whole-input helpers report this; codecs leave the decision to the
    /// caller.
    #[error("unexpected trailing input")]
    TrailingInput,
}

/// An encoding failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// `NaN` and the infinities have no JSON representation.
    #[error("cannot encode non-finite number")]
    NonFinite,
}
