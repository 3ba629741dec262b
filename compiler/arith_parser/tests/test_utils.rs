//! Test utilities for the parser tests

#![allow(dead_code)]

use arith_ast::{BinaryOperator, Node};
use arith_lexer::{Location, Token, TokenKind};

/// Creates a new location at the start of line 1
fn default_location() -> Location {
    Location {
        line: 1,
        column: 1,
        offset: 0,
    }
}

/// Creates a new token with the given kind and lexeme
pub fn create_token(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, default_location())
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

/// Initialize a quiet logger for integration tests
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}
