//! Visitor pattern implementation for traversing the AST.
//!
//! Implement [`Visitor`] to run an operation over a tree; every node type
//! implements [`Visitable`] so it can accept a visitor. The default visit
//! methods walk into children and do nothing else.

use crate::ast::{BinaryExpr, Node, Operand};

/// The result type for visitor operations.
pub type VisitResult<T = ()> = Result<T, VisitError>;

/// An error that can occur during AST traversal.
#[derive(Debug, thiserror::Error)]
pub enum VisitError {
    /// An error with a custom message.
    #[error("{0}")]
    Custom(String),

    /// An error raised while visiting a specific operand.
    #[error("{message} at operand {lexeme:?}")]
    AtOperand {
        /// The error message.
        message: String,
        /// The operand text.
        lexeme: String,
    },
}

impl VisitError {
    /// Creates a new custom error with the given message.
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        VisitError::Custom(msg.into())
    }

    /// Creates an error anchored at an operand.
    pub fn at_operand<T: Into<String>>(msg: T, operand: &Operand) -> Self {
        VisitError::AtOperand {
            message: msg.into(),
            lexeme: operand.lexeme().to_string(),
        }
    }
}

/// A trait for types that can be visited by a `Visitor`.
pub trait Visitable {
    /// Accepts a visitor and calls the appropriate visit method.
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output>;

    /// Visits the children of this node with the given visitor.
    ///
    /// The default implementation does nothing.
    fn visit_children<V: Visitor + ?Sized>(&self, _visitor: &mut V) -> VisitResult<V::Output> {
        Ok(Default::default())
    }
}

/// A visitor for traversing the AST.
///
/// The default implementations only descend into children and return
/// `Default::default()`.
pub trait Visitor {
    /// The output type of the visitor.
    type Output: Default;

    fn visit_operand(&mut self, node: &Operand) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> VisitResult<Self::Output> {
        self.visit_children(node)
    }

    /// Helper to visit children of a node
    fn visit_children<T: Visitable + ?Sized>(&mut self, node: &T) -> VisitResult<Self::Output> {
        node.visit_children(self)
    }
}

impl Visitable for Operand {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_operand(self)
    }
}

impl Visitable for BinaryExpr {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        visitor.visit_binary_expr(self)
    }

    /// Visits the left child, then the right one, returning the right's output.
    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        self.left.accept(visitor)?;
        self.right.accept(visitor)
    }
}

impl Visitable for Node {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            Node::Operand(operand) => operand.accept(visitor),
            Node::Binary(expr) => expr.accept(visitor),
        }
    }

    fn visit_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> VisitResult<V::Output> {
        match self {
            Node::Operand(operand) => operand.visit_children(visitor),
            Node::Binary(expr) => expr.visit_children(visitor),
        }
    }
}

/// A visitor that collects every operand in left-to-right order.
#[derive(Debug, Default)]
pub struct OperandCollector {
    /// The collected operands.
    pub operands: Vec<Operand>,
}

impl OperandCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected operands.
    pub fn into_inner(self) -> Vec<Operand> {
        self.operands
    }
}

impl Visitor for OperandCollector {
    type Output = ();

    fn visit_operand(&mut self, node: &Operand) -> VisitResult<Self::Output> {
        self.operands.push(node.clone());
        Ok(())
    }
}
