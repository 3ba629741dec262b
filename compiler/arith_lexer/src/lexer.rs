//! Lexer for infix arithmetic expressions built on the 'logos' crate.
//!
//! The input is split on whitespace, with `(` and `)` always standing alone.
//! Every word is then classified: exact operator or bracket symbols first,
//! then all-alphabetic words as identifiers, then anything `f64` accepts as a
//! number. The first word matching none of these becomes an
//! [`TokenKind::Illegal`] token and ends the stream.

use logos::Logos;

use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenKind};

/// Arithmetic expression lexer
pub struct Lexer<'source> {
    /// The logos lexer instance
    logos_lexer: logos::Lexer<'source, LogosToken>,
    /// The full source text
    source: &'source str,
    /// Byte offset up to which `line` and `column` are known
    cursor: usize,
    /// Line number at `cursor` (1-based)
    line: usize,
    /// Column number at `cursor` (1-based)
    column: usize,
    /// Set once an illegal token has been emitted
    finished: bool,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source text
    pub fn new(source: &'source str) -> Self {
        Self {
            logos_lexer: LogosToken::lexer(source),
            source,
            cursor: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Advance the line/column bookkeeping to `offset`
    fn location_at(&mut self, offset: usize) -> Location {
        for c in self.source[self.cursor..offset].chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.cursor = offset;
        Location {
            line: self.line,
            column: self.column,
            offset,
        }
    }

    /// Convert a LogosToken to our semantic token kind
    fn convert_token(logos_token: LogosToken, lexeme: &str) -> TokenKind {
        match logos_token {
            LogosToken::Plus => TokenKind::Add,
            LogosToken::Minus => TokenKind::Subtract,
            LogosToken::Star => TokenKind::Multiply,
            LogosToken::Slash => TokenKind::Divide,
            LogosToken::Caret => TokenKind::Power,
            LogosToken::LeftParen => TokenKind::LeftParen,
            LogosToken::RightParen => TokenKind::RightParen,
            LogosToken::Word | LogosToken::Whitespace => classify_word(lexeme),
        }
    }
}

/// Classify a single whitespace-delimited word.
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(kind) = TokenKind::from_symbol(word) {
        return kind;
    }
    if !word.is_empty() && word.chars().all(char::is_alphabetic) {
        return TokenKind::Identifier;
    }
    if word.parse::<f64>().is_ok() {
        return TokenKind::Number;
    }
    TokenKind::Illegal
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let logos_token = self.logos_lexer.next()?;
        let lexeme = self.logos_lexer.slice();
        let location = self.location_at(self.logos_lexer.span().start);

        let kind = match logos_token {
            Ok(token) => Self::convert_token(token, lexeme),
            Err(()) => TokenKind::Illegal,
        };

        if kind == TokenKind::Illegal {
            #[cfg(feature = "logging")]
            log::debug!("illegal word {lexeme:?} at {location}, stopping");
            self.finished = true;
        } else {
            #[cfg(feature = "logging")]
            log::trace!("{kind} {lexeme:?} at {location}");
        }

        Some(Token::new(kind, lexeme, location))
    }
}

/// Tokenize `source` into a vector of tokens.
///
/// If the input contains an unrecognised word, the returned vector ends with
/// the corresponding [`TokenKind::Illegal`] token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
