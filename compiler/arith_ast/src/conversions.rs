use arith_lexer::{Token, TokenKind};

use super::ast::{AstError, BinaryExpr, BinaryOperator, Node, Operand};

impl TryFrom<TokenKind> for BinaryOperator {
    type Error = AstError;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::Add => Ok(BinaryOperator::Add),
            TokenKind::Subtract => Ok(BinaryOperator::Subtract),
            TokenKind::Multiply => Ok(BinaryOperator::Multiply),
            TokenKind::Divide => Ok(BinaryOperator::Divide),
            TokenKind::Power => Ok(BinaryOperator::Power),
            other => Err(AstError::NotAnOperator { kind: other }),
        }
    }
}

impl TryFrom<Token> for Operand {
    type Error = AstError;

    fn try_from(token: Token) -> Result<Self, Self::Error> {
        Operand::new(token)
    }
}

impl From<Operand> for Token {
    fn from(operand: Operand) -> Self {
        operand.into_token()
    }
}

impl From<Operand> for Node {
    fn from(operand: Operand) -> Self {
        Node::Operand(operand)
    }
}

impl From<BinaryExpr> for Node {
    fn from(expr: BinaryExpr) -> Self {
        Node::Binary(Box::new(expr))
    }
}
