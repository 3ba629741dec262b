//! Shared helpers for the workspace-level tests.

use arith_ast::Node;
use arith_parser::{parse_expression, ParseError};

/// Parses `source` and returns its fully bracketed rendering.
pub fn render(source: &str) -> Result<String, ParseError> {
    parse_expression(source).map(|node| node.to_string())
}

/// Parses `source`, renders it, and parses the rendering again.
pub fn reparse(source: &str) -> Result<(Node, Node), ParseError> {
    let first = parse_expression(source)?;
    let second = parse_expression(&first.to_string())?;
    Ok((first, second))
}
