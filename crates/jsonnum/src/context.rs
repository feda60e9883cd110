use core::fmt;

use bstr::BStr;

/// A read-only position within a caller-owned input buffer.
///
/// The context is created by the caller for one decoding pass and advanced in
/// place by codecs that match successfully. It never owns the buffer.
///
/// Invariant: `position <= end <= input.len()`.
#[derive(Clone, PartialEq, Eq)]
pub struct DecodeContext<'a> {
    input: &'a [u8],
    position: usize,
    end: usize,
}

impl<'a> DecodeContext<'a> {
    /// Creates a context spanning all of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::from_bytes(input.as_bytes())
    }

    /// Creates a context spanning all of `input`.
    #[must_use]
    pub fn from_bytes(input: &'a [u8]) -> Self {
        Self {
            input,
            position: 0,
            end: input.len(),
        }
    }

    /// Creates a context over `input[position..end]`.
    ///
    /// `end` is clamped to the input length and `position` to `end`, so the
    /// context is always valid.
    #[must_use]
    pub fn with_bounds(input: &'a [u8], position: usize, end: usize) -> Self {
        let end = end.min(input.len());
        Self {
            input,
            position: position.min(end),
            end,
        }
    }

    /// Byte offset of the next unread byte.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset one past the last readable byte.
    #[inline]
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The unread bytes, `[position, end)`.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.position..self.end]
    }

    /// Returns `true` when no readable bytes remain.
    #[inline]
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.position == self.end
    }

    /// Moves the cursor forward by `len` bytes.
    #[inline]
    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(len <= self.end - self.position, "advance past end");
        self.position = (self.position + len).min(self.end);
    }
}

impl fmt::Debug for DecodeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeContext")
            .field("position", &self.position)
            .field("end", &self.end)
            .field("remaining", &BStr::new(self.remaining()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn bounds_are_clamped() {
        let ctx = DecodeContext::with_bounds(b"123", 5, 10);
        assert_eq!(ctx.position(), 3);
        assert_eq!(ctx.end(), 3);
        assert!(ctx.is_at_end());

        let ctx = DecodeContext::with_bounds(b"12345", 1, 3);
        assert_eq!(ctx.remaining(), b"23");
    }

    #[test]
    fn advance_stops_at_end() {
        let mut ctx = DecodeContext::new("42,");
        ctx.advance(2);
        assert_eq!(ctx.position(), 2);
        assert_eq!(ctx.remaining(), b",");
        assert!(!ctx.is_at_end());
    }

    #[test]
    fn debug_shows_remaining_input() {
        let mut ctx = DecodeContext::from_bytes(b"1.5\xffz");
        ctx.advance(3);
        assert_eq!(
            format!("{ctx:?}"),
            "DecodeContext { position: 3, end: 5, remaining: \"\\xffz\" }"
        );
    }
}
