//! Operator precedence configuration.
//!
//! An [`OperatorPrecedence`] lists operators from the one folded first to the
//! one folded last. Within one nesting level the parser folds every
//! occurrence of the first operator before it looks at the second, and so on.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use arith_ast::BinaryOperator;

/// Errors raised while building a precedence order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrecedenceError {
    #[error("precedence order must name at least one operator")]
    Empty,
    #[error("unknown operator {0:?}, expected one of + - * / ^ or add, sub, mul, div, pow")]
    UnknownOperator(String),
    #[error("operator '{0}' appears more than once in the precedence order")]
    Duplicate(BinaryOperator),
}

/// Ordered list of operators, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperatorPrecedence(Cow<'static, [BinaryOperator]>);

impl OperatorPrecedence {
    /// Power, Multiply, Divide, Add, Subtract.
    ///
    /// Multiply is folded before Divide and Add before Subtract, so
    /// `2 + 4 * 6 - 3` groups as `((2 + (4 * 6)) - 3)`.
    pub const BIDMAS: OperatorPrecedence = OperatorPrecedence(Cow::Borrowed(&[
        BinaryOperator::Power,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Add,
        BinaryOperator::Subtract,
    ]));

    /// Builds a custom order, rejecting empty lists and repeated operators.
    ///
    /// Operators left out of the order are never folded; an expression using
    /// one fails to parse.
    pub fn try_new(order: Vec<BinaryOperator>) -> Result<Self, PrecedenceError> {
        if order.is_empty() {
            return Err(PrecedenceError::Empty);
        }
        for (index, op) in order.iter().enumerate() {
            if order[..index].contains(op) {
                return Err(PrecedenceError::Duplicate(*op));
            }
        }
        Ok(Self(Cow::Owned(order)))
    }

    pub fn as_slice(&self) -> &[BinaryOperator] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<BinaryOperator> {
        self.0.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, op: BinaryOperator) -> bool {
        self.0.contains(&op)
    }

    pub fn iter(&self) -> impl Iterator<Item = BinaryOperator> + '_ {
        self.0.iter().copied()
    }
}

impl Default for OperatorPrecedence {
    fn default() -> Self {
        Self::BIDMAS
    }
}

fn parse_operator(name: &str) -> Result<BinaryOperator, PrecedenceError> {
    let op = match name.to_ascii_lowercase().as_str() {
        "+" | "add" | "plus" => BinaryOperator::Add,
        "-" | "sub" | "subtract" | "minus" => BinaryOperator::Subtract,
        "*" | "mul" | "multiply" | "times" => BinaryOperator::Multiply,
        "/" | "div" | "divide" => BinaryOperator::Divide,
        "^" | "pow" | "power" => BinaryOperator::Power,
        _ => return Err(PrecedenceError::UnknownOperator(name.to_string())),
    };
    Ok(op)
}

/// Parses a comma-separated list such as `^,*,/,+,-` or `pow,mul,div,add,sub`.
impl FromStr for OperatorPrecedence {
    type Err = PrecedenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let order = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(parse_operator)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_new(order)
    }
}

impl fmt::Display for OperatorPrecedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(BinaryOperator::name).collect();
        f.write_str(&names.join(","))
    }
}
