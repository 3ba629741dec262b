//! Test utilities for the parser

// This module is only used for testing purposes
#![allow(dead_code)]

use arith_ast::{BinaryOperator, Node};
use arith_lexer::{Location, Token, TokenKind};

/// Creates a token at the start of line 1 for testing
pub fn create_token(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(
        kind,
        lexeme,
        Location {
            line: 1,
            column: 1,
            offset: 0,
        },
    )
}

pub fn create_identifier(name: &str) -> Token {
    create_token(TokenKind::Identifier, name)
}

pub fn create_number(value: &str) -> Token {
    create_token(TokenKind::Number, value)
}

/// Creates an operator or bracket token from its symbol
pub fn create_operator(op: &str) -> Token {
    match TokenKind::from_symbol(op) {
        Some(kind) => create_token(kind, op),
        None => panic!("Unknown operator: {op}"),
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    arith_lexer::tokenize(input)
}

pub fn num(lexeme: &str) -> Node {
    Node::number(lexeme)
}

pub fn var(name: &str) -> Node {
    Node::identifier(name)
}

pub fn bin(operator: BinaryOperator, left: Node, right: Node) -> Node {
    Node::binary(operator, left, right)
}
