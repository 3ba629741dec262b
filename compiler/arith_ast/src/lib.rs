//! Abstract Syntax Tree (AST) for infix arithmetic expressions.
//!
//! This crate defines the tree produced by the reduction parser, along with
//! utilities for rendering, traversing and (de)serializing it.

pub mod ast;
pub mod conversions;
pub mod visit;

// Re-export commonly used types
pub use ast::{AstError, BinaryExpr, BinaryOperator, Node, Operand};

use std::error::Error;
use std::fmt::Write as _;

use visit::{VisitResult, Visitable, Visitor};

/// A result type for AST operations.
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Serializes an AST node to a JSON string.
///
/// # Example
///
/// ```
/// use arith_ast::{to_json, Node};
///
/// let json = to_json(&Node::number("42")).unwrap();
/// assert!(json.contains(r#""lexeme": "42""#));
/// ```
#[cfg(feature = "serde")]
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Deserializes an AST node from a JSON string.
///
/// Operands are validated on the way in, so JSON describing an operator
/// token as an operand is rejected.
#[cfg(feature = "serde")]
pub fn from_json<T: for<'de> serde::Deserialize<'de>>(json: &str) -> Result<T> {
    Ok(serde_json::from_str(json)?)
}

/// A utility for pretty-printing AST nodes as an indented tree.
///
/// ```text
/// (+)
///   3
///   (*)
///     6
///     7
/// ```
#[derive(Default)]
pub struct AstPrinter {
    indent: usize,
    output: String,
}

impl AstPrinter {
    /// Creates a new `AstPrinter`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints an AST node to a string.
    pub fn print(node: &Node) -> String {
        let mut printer = Self::new();
        // The printer itself never fails.
        let _ = node.accept(&mut printer);
        printer.into_inner()
    }

    /// Returns everything printed so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.output, "{:width$}{text}", "", width = self.indent * 2);
    }
}

impl Visitor for AstPrinter {
    type Output = ();

    fn visit_operand(&mut self, node: &Operand) -> VisitResult<Self::Output> {
        self.line(node.lexeme());
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> VisitResult<Self::Output> {
        self.line(&format!("({})", node.operator));
        self.indent += 1;
        let result = self.visit_children(node);
        self.indent -= 1;
        result
    }
}
