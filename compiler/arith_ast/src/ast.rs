//! Abstract Syntax Tree (AST) definitions for arithmetic expressions.
//!
//! A tree is either a single [`Operand`] (a number or identifier token) or a
//! [`BinaryExpr`] that owns its two children. Nodes are immutable once built
//! and compare structurally.

use std::fmt;

use arith_lexer::{Location, Token, TokenCategory, TokenKind};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors raised when an AST invariant would be violated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    /// Operands can only wrap numbers and identifiers.
    #[error("operand must be a number or identifier, found {kind} {lexeme:?}")]
    NotAValue {
        /// The kind of the rejected token
        kind: TokenKind,
        /// The text of the rejected token
        lexeme: String,
    },
    /// Binary expressions can only be built from `+ - * / ^`.
    #[error("{kind} is not a binary operator")]
    NotAnOperator {
        /// The rejected kind
        kind: TokenKind,
    },
}

/// The five binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOperator {
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
}

impl BinaryOperator {
    /// Every operator, in BIDMAS order.
    pub const ALL: [BinaryOperator; 5] = [
        BinaryOperator::Power,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Add,
        BinaryOperator::Subtract,
    ];

    /// The symbol used when rendering this operator.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Power => "^",
        }
    }

    /// The short lowercase name (`add`, `sub`, `mul`, `div`, `pow`).
    pub const fn name(self) -> &'static str {
        match self {
            BinaryOperator::Add => "add",
            BinaryOperator::Subtract => "sub",
            BinaryOperator::Multiply => "mul",
            BinaryOperator::Divide => "div",
            BinaryOperator::Power => "pow",
        }
    }

    /// The token kind that spells this operator.
    pub const fn token_kind(self) -> TokenKind {
        match self {
            BinaryOperator::Add => TokenKind::Add,
            BinaryOperator::Subtract => TokenKind::Subtract,
            BinaryOperator::Multiply => TokenKind::Multiply,
            BinaryOperator::Divide => TokenKind::Divide,
            BinaryOperator::Power => TokenKind::Power,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A leaf wrapping a number or identifier token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Token", into = "Token")
)]
pub struct Operand {
    token: Token,
}

impl Operand {
    /// Wraps `token`, rejecting anything that is not a value.
    pub fn new(token: Token) -> Result<Self, AstError> {
        match token.category() {
            TokenCategory::Value => Ok(Self { token }),
            _ => Err(AstError::NotAValue {
                kind: token.kind,
                lexeme: token.lexeme,
            }),
        }
    }

    /// The wrapped token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// The source text of the wrapped token.
    pub fn lexeme(&self) -> &str {
        &self.token.lexeme
    }

    /// Either [`TokenKind::Number`] or [`TokenKind::Identifier`].
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    /// Unwraps the token.
    pub fn into_token(self) -> Token {
        self.token
    }
}

/// An operator applied to two sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Node,
    pub right: Node,
}

impl BinaryExpr {
    pub fn new(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Self {
            operator,
            left,
            right,
        }
    }
}

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    Operand(Operand),
    Binary(Box<BinaryExpr>),
}

impl Node {
    /// Builds a number operand. The lexeme is not checked.
    pub fn number(lexeme: &str) -> Self {
        Node::Operand(Operand {
            token: Token::new(TokenKind::Number, lexeme, Location::default()),
        })
    }

    /// Builds an identifier operand. The lexeme is not checked.
    pub fn identifier(name: &str) -> Self {
        Node::Operand(Operand {
            token: Token::new(TokenKind::Identifier, name, Location::default()),
        })
    }

    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Node::Binary(Box::new(BinaryExpr::new(operator, left, right)))
    }

    pub fn as_operand(&self) -> Option<&Operand> {
        match self {
            Node::Operand(operand) => Some(operand),
            Node::Binary(_) => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryExpr> {
        match self {
            Node::Operand(_) => None,
            Node::Binary(expr) => Some(expr),
        }
    }

    /// Height of the tree; a lone operand has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Operand(_) => 1,
            Node::Binary(expr) => 1 + expr.left.depth().max(expr.right.depth()),
        }
    }

    /// Number of operand leaves.
    pub fn operand_count(&self) -> usize {
        match self {
            Node::Operand(_) => 1,
            Node::Binary(expr) => expr.left.operand_count() + expr.right.operand_count(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

impl fmt::Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand(operand) => operand.fmt(f),
            Node::Binary(expr) => expr.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operand_rejects_non_values() {
        let plus = Token::new(TokenKind::Add, "+", Location::default());
        assert_eq!(
            Operand::new(plus),
            Err(AstError::NotAValue {
                kind: TokenKind::Add,
                lexeme: "+".to_string()
            })
        );

        let three = Token::new(TokenKind::Number, "3", Location::default());
        let operand = Operand::new(three).unwrap();
        assert_eq!(operand.lexeme(), "3");
        assert_eq!(operand.kind(), TokenKind::Number);
    }

    #[test]
    fn test_rendering() {
        let expr = Node::binary(
            BinaryOperator::Add,
            Node::number("3"),
            Node::binary(BinaryOperator::Multiply, Node::number("6"), Node::identifier("x")),
        );
        assert_eq!(expr.to_string(), "(3 + (6 * x))");
        assert_eq!(Node::identifier("a").to_string(), "a");
    }

    #[test]
    fn test_structural_equality() {
        let a = Node::binary(BinaryOperator::Power, Node::identifier("p"), Node::identifier("q"));
        let b = Node::binary(BinaryOperator::Power, Node::identifier("p"), Node::identifier("q"));
        let c = Node::binary(BinaryOperator::Multiply, Node::identifier("p"), Node::identifier("q"));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, Node::identifier("p"));

        let none: Option<Node> = None;
        assert_eq!(none, None);
        assert_ne!(Some(a), none);
    }

    #[test]
    fn test_depth_and_operand_count() {
        let leaf = Node::number("1");
        assert_eq!(leaf.depth(), 1);
        assert_eq!(leaf.operand_count(), 1);

        let expr = Node::binary(
            BinaryOperator::Subtract,
            Node::binary(BinaryOperator::Add, Node::number("2"), Node::number("4")),
            Node::number("3"),
        );
        assert_eq!(expr.depth(), 3);
        assert_eq!(expr.operand_count(), 3);
        assert!(expr.as_binary().is_some());
        assert!(expr.as_operand().is_none());
    }
}
