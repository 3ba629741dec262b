use arith_lexer::Location;

/// Errors produced while reducing a token sequence to a tree.
///
/// Errors raised inside a parenthesized group reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The lexer met a symbol it could not classify.
    #[error("invalid expression: unrecognised symbol {lexeme:?} at {location}")]
    InvalidExpression { lexeme: String, location: Location },

    /// A `(` without its `)`, or a `)` without its `(`.
    #[error("no matching bracket for '{bracket}' at {location}")]
    NoMatchingBracket { bracket: char, location: Location },

    /// An operator without a reducible operand on both sides.
    #[error("invalid infix expression: operator '{operator}' at {location} needs an operand on each side")]
    InvalidInfixExpression { operator: String, location: Location },

    /// The sequence could not be reduced to a single tree.
    #[error("could not parse expression")]
    CouldNotParseExpression,

    /// There was nothing to parse, either at the top level or inside `( )`.
    #[error("empty expression")]
    EmptyExpression,

    /// Groups are nested deeper than the configured limit.
    #[error("expression nests more than {limit} groups deep")]
    NestingTooDeep { limit: usize },
}

/// Fieldless classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidExpression,
    NoMatchingBracket,
    InvalidInfixExpression,
    CouldNotParseExpression,
    EmptyExpression,
    NestingTooDeep,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidExpression { .. } => ErrorKind::InvalidExpression,
            ParseError::NoMatchingBracket { .. } => ErrorKind::NoMatchingBracket,
            ParseError::InvalidInfixExpression { .. } => ErrorKind::InvalidInfixExpression,
            ParseError::CouldNotParseExpression => ErrorKind::CouldNotParseExpression,
            ParseError::EmptyExpression => ErrorKind::EmptyExpression,
            ParseError::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
        }
    }

    /// Where the offending token started, when the error is tied to one.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::InvalidExpression { location, .. }
            | ParseError::NoMatchingBracket { location, .. }
            | ParseError::InvalidInfixExpression { location, .. } => Some(*location),
            ParseError::CouldNotParseExpression
            | ParseError::EmptyExpression
            | ParseError::NestingTooDeep { .. } => None,
        }
    }

    /// Length in bytes of the offending token, for underlining.
    pub fn byte_width(&self) -> usize {
        match self {
            ParseError::InvalidExpression { lexeme, .. } => lexeme.len().max(1),
            ParseError::InvalidInfixExpression { operator, .. } => operator.len().max(1),
            _ => 1,
        }
    }
}
