use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a token's location in the source text.
///
/// Line and column numbers are 1-based, the byte offset is 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number, counted in characters
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A literal accepted by `f64` parsing, e.g. `3`, `2.5`, `1e3`
    Number,
    /// A word made of alphabetic characters only
    Identifier,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Anything the lexer could not classify
    Illegal,
}

/// Coarse classification of a [`TokenKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenCategory {
    /// Numbers and identifiers
    Value,
    /// The five binary operators
    Operator,
    /// Opening and closing brackets
    Paren,
    /// Unrecognised input
    Illegal,
}

impl TokenKind {
    /// Returns the category this kind belongs to.
    pub const fn category(self) -> TokenCategory {
        match self {
            TokenKind::Number | TokenKind::Identifier => TokenCategory::Value,
            TokenKind::Add
            | TokenKind::Subtract
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Power => TokenCategory::Operator,
            TokenKind::LeftParen | TokenKind::RightParen => TokenCategory::Paren,
            TokenKind::Illegal => TokenCategory::Illegal,
        }
    }

    /// Returns the fixed spelling of operator and bracket kinds.
    pub const fn symbol(self) -> Option<&'static str> {
        match self {
            TokenKind::Add => Some("+"),
            TokenKind::Subtract => Some("-"),
            TokenKind::Multiply => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::Power => Some("^"),
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::Number | TokenKind::Identifier | TokenKind::Illegal => None,
        }
    }

    /// Maps an exact symbol to its operator or bracket kind.
    pub fn from_symbol(word: &str) -> Option<Self> {
        let kind = match word {
            "+" => TokenKind::Add,
            "-" => TokenKind::Subtract,
            "*" => TokenKind::Multiply,
            "/" => TokenKind::Divide,
            "^" => TokenKind::Power,
            "(" => TokenKind::LeftParen,
            ")" => TokenKind::RightParen,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for `+ - * / ^`.
    pub const fn is_operator(self) -> bool {
        matches!(self.category(), TokenCategory::Operator)
    }

    /// Returns true for numbers and identifiers.
    pub const fn is_value(self) -> bool {
        matches!(self.category(), TokenCategory::Value)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "NUM",
            TokenKind::Identifier => "ALPHA",
            TokenKind::Add => "ADD",
            TokenKind::Subtract => "SUB",
            TokenKind::Multiply => "MUL",
            TokenKind::Divide => "DIV",
            TokenKind::Power => "POW",
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Illegal => "ILLEGAL",
        };
        f.write_str(name)
    }
}

/// A token produced by the lexer: its kind, the original text and where it began.
///
/// Equality and hashing only look at the kind and the lexeme. The location is
/// carried for diagnostics, so `3` lexed at column 1 and `3` lexed inside
/// `( 3 )` compare equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The kind of the token
    pub kind: TokenKind,
    /// The original source text of the token
    pub lexeme: String,
    /// The location of the token in the source text
    pub location: Location,
}

impl Token {
    /// Creates a new token.
    pub fn new<S: Into<String>>(kind: TokenKind, lexeme: S, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// Creates an operator or bracket token spelled with its canonical symbol.
    ///
    /// Value and illegal kinds have no canonical spelling and get an empty lexeme.
    pub fn synthetic(kind: TokenKind, location: Location) -> Self {
        Self::new(kind, kind.symbol().unwrap_or_default(), location)
    }

    /// Returns the category of this token's kind.
    pub fn category(&self) -> TokenCategory {
        self.kind.category()
    }

    /// Returns true if this token is one of `+ - * / ^`
    pub fn is_operator(&self) -> bool {
        self.kind.is_operator()
    }

    /// Returns true if this token is a number or an identifier
    pub fn is_value(&self) -> bool {
        self.kind.is_value()
    }

    /// Returns true if this token is `kind`
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.lexeme == other.lexeme
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.lexeme.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})@{}", self.kind, self.lexeme, self.location)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_token_creation() {
        let location = Location {
            line: 1,
            column: 3,
            offset: 2,
        };
        let token = Token::new(TokenKind::Number, "42", location);
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.lexeme, "42");
        assert_eq!(token.location, location);
        assert_eq!(token.category(), TokenCategory::Value);
    }

    #[test]
    fn test_category_is_a_function_of_kind() {
        use TokenKind::*;
        let cases = [
            (Number, TokenCategory::Value),
            (Identifier, TokenCategory::Value),
            (Add, TokenCategory::Operator),
            (Subtract, TokenCategory::Operator),
            (Multiply, TokenCategory::Operator),
            (Divide, TokenCategory::Operator),
            (Power, TokenCategory::Operator),
            (LeftParen, TokenCategory::Paren),
            (RightParen, TokenCategory::Paren),
            (Illegal, TokenCategory::Illegal),
        ];
        for (kind, category) in cases {
            assert_eq!(kind.category(), category, "category of {kind}");
        }
    }

    #[test]
    fn test_equality_ignores_location() {
        let a = Token::new(TokenKind::Identifier, "x", Location::default());
        let b = Token::new(
            TokenKind::Identifier,
            "x",
            Location {
                line: 4,
                column: 9,
                offset: 30,
            },
        );
        assert_eq!(a, b);
        assert_ne!(a, Token::new(TokenKind::Identifier, "y", Location::default()));
        assert_ne!(a, Token::new(TokenKind::Number, "x", Location::default()));
    }

    #[test]
    fn test_synthetic_token_uses_symbol() {
        let token = Token::synthetic(TokenKind::Multiply, Location::default());
        assert_eq!(token.lexeme, "*");
        assert!(token.is_operator());

        for symbol in ["+", "-", "*", "/", "^", "(", ")"] {
            let kind = TokenKind::from_symbol(symbol).unwrap();
            assert_eq!(kind.symbol(), Some(symbol));
        }
        assert_eq!(TokenKind::from_symbol("**"), None);
    }
}
