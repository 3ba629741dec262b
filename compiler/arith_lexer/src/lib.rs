//! Lexical analysis for infix arithmetic expressions
//!
//! This crate turns raw expression text such as `3 ( x + 4 ) ^ 2` into a flat
//! stream of [`Token`]s for the reduction parser. Words are separated by
//! whitespace and brackets always stand on their own.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{tokenize, Lexer};
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenCategory, TokenKind};
