/// Configuration for the whole-input decode helpers.
///
/// Codecs themselves take no options: they always match the longest valid
/// number and leave the rest of the input to the caller. These options
/// control what [`decode_with`](crate::decode_with) does with that rest.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Whether input may continue after the decoded value.
    ///
    /// When `false`, anything after the value is reported as
    /// [`TrailingInput`](crate::DecodeErrorKind::TrailingInput). When
    /// `true`, the trailing bytes are ignored.
    ///
    /// # Examples
    ///
    /// ```text
    /// 12,      decodes 12 only when trailing input is allowed
    /// 1..1     decodes 1 only when trailing input is allowed
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub allow_trailing_input: bool,
}
