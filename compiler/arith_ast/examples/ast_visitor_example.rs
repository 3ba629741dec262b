//! Example of using the visitor pattern to traverse and process the AST.

use std::collections::BTreeSet;

use arith_ast::visit::*;
use arith_ast::{AstPrinter, BinaryExpr, BinaryOperator, Node, Operand};
use arith_lexer::TokenKind;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // (x + 2) * y ^ 2
    let ast = Node::binary(
        BinaryOperator::Multiply,
        Node::binary(BinaryOperator::Add, Node::identifier("x"), Node::number("2")),
        Node::binary(BinaryOperator::Power, Node::identifier("y"), Node::number("2")),
    );

    let mut counter = NodeCounter::default();
    ast.accept(&mut counter)?;

    println!("AST Node Counts:");
    println!("  Numbers: {}", counter.number_count);
    println!("  Identifiers: {}", counter.identifier_count);
    println!("  Binary Operations: {}", counter.binary_op_count);

    let mut collector = VariableCollector::default();
    ast.accept(&mut collector)?;

    println!("\nVariables used:");
    for var in &collector.variables {
        println!("  {var}");
    }

    println!("\nRendered: {ast}");
    println!("\nPretty-printed AST:");
    print!("{}", AstPrinter::print(&ast));

    Ok(())
}

/// A visitor that counts the number of nodes of each type in the AST.
#[derive(Default)]
pub struct NodeCounter {
    pub number_count: usize,
    pub identifier_count: usize,
    pub binary_op_count: usize,
}

impl Visitor for NodeCounter {
    type Output = ();

    fn visit_operand(&mut self, node: &Operand) -> VisitResult<Self::Output> {
        match node.kind() {
            TokenKind::Identifier => self.identifier_count += 1,
            _ => self.number_count += 1,
        }
        Ok(())
    }

    fn visit_binary_expr(&mut self, node: &BinaryExpr) -> VisitResult<Self::Output> {
        self.binary_op_count += 1;
        self.visit_children(node)
    }
}

/// A visitor that collects the distinct variable names in the AST.
#[derive(Default)]
pub struct VariableCollector {
    pub variables: BTreeSet<String>,
}

impl Visitor for VariableCollector {
    type Output = ();

    fn visit_operand(&mut self, node: &Operand) -> VisitResult<Self::Output> {
        if node.kind() == TokenKind::Identifier {
            self.variables.insert(node.lexeme().to_string());
        }
        Ok(())
    }
}
