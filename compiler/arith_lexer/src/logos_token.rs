//! Raw token type recognised by the logos state machine.
//!
//! Logos only splits the input: whitespace is skipped, brackets and lone
//! operator symbols become their own tokens, and every other run of
//! non-whitespace, non-bracket characters is a [`LogosToken::Word`] that the
//! [`Lexer`](crate::Lexer) classifies afterwards.

use logos::Logos;

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // Operators. A longer word such as `+3` or `**` wins over these by length.
    /// `+`
    #[token("+", priority = 3)]
    Plus,
    /// `-`
    #[token("-", priority = 3)]
    Minus,
    /// `*`
    #[token("*", priority = 3)]
    Star,
    /// `/`
    #[token("/", priority = 3)]
    Slash,
    /// `^`
    #[token("^", priority = 3)]
    Caret,

    // Brackets never belong to a surrounding word
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,

    /// Any other run of characters up to whitespace or a bracket
    #[regex(r"[^()\s]+", priority = 1)]
    Word,

    /// Whitespace, skipped
    #[regex(r"\s+", logos::skip)]
    Whitespace,
}
