//! Scanner for the JSON number grammar (RFC 8259):
//!
//! ```text
//! number := '-'? int frac? exp?
//! int    := '0' | [1-9] digit*
//! frac   := '.' digit+
//! exp    := ('e' | 'E') ('+' | '-')? digit+
//! ```
//!
//! The scanner is greedy but bounded by grammar validity: it walks the lexer
//! states until no transition applies, then reports the longest prefix that
//! ended in an accepting state. A valid prefix followed by garbage (`1..1`,
//! `1e`, `01`) is a match, not an error. Only a zero-length match fails.

/// A matched number lexeme at the start of the scanned slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    len: usize,
}

impl Lexeme {
    /// Length of the lexeme in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a lexeme holds at least one digit.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Start,
    Sign,
    Zero,
    DecimalInteger,
    DecimalPoint,
    DecimalFraction,
    DecimalExponent,
    DecimalExponentSign,
    DecimalExponentInteger,
}

impl LexState {
    /// States in which the consumed text is a complete number.
    #[inline]
    fn is_accepting(self) -> bool {
        matches!(
            self,
            LexState::Zero
                | LexState::DecimalInteger
                | LexState::DecimalFraction
                | LexState::DecimalExponentInteger
        )
    }

    #[inline]
    fn step(self, b: u8) -> Option<LexState> {
        use LexState::{
            DecimalExponent, DecimalExponentInteger, DecimalExponentSign, DecimalFraction,
            DecimalInteger, DecimalPoint, Sign, Start, Zero,
        };

        let next = match (self, b) {
            (Start, b'-') => Sign,
            (Start | Sign, b'0') => Zero,
            (Start | Sign, b'1'..=b'9') | (DecimalInteger, b'0'..=b'9') => DecimalInteger,
            (Zero | DecimalInteger, b'.') => DecimalPoint,
            (DecimalPoint | DecimalFraction, b'0'..=b'9') => DecimalFraction,
            (Zero | DecimalInteger | DecimalFraction, b'e' | b'E') => DecimalExponent,
            (DecimalExponent, b'+' | b'-') => DecimalExponentSign,
            (DecimalExponent | DecimalExponentSign | DecimalExponentInteger, b'0'..=b'9') => {
                DecimalExponentInteger
            }
            _ => return None,
        };
        Some(next)
    }
}

/// Matches the longest grammar-valid number at the start of `input`.
///
/// Returns `None` when no prefix of `input` is a number. Never looks past
/// the end of `input`.
#[must_use]
pub fn scan_number(input: &[u8]) -> Option<Lexeme> {
    let mut state = LexState::Start;
    let mut accepted: Option<Lexeme> = None;

    for (i, &b) in input.iter().enumerate() {
        let Some(next) = state.step(b) else {
            break;
        };
        state = next;
        if state.is_accepting() {
            accepted = Some(Lexeme { len: i + 1 });
        }
    }

    accepted
}
