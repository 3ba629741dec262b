use std::fmt;
use std::ops::RangeInclusive;

use arith_ast::{Node, Operand};
use arith_lexer::{Token, TokenCategory, TokenKind};

/// One slot of the sequence being reduced: a raw token or a finished subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Token(Token),
    Node(Node),
}

impl Element {
    /// True when this element can stand as an operand of a binary expression.
    pub fn is_reducible(&self) -> bool {
        match self {
            Element::Token(token) => token.is_value(),
            Element::Node(_) => true,
        }
    }

    /// Converts the element into a tree, promoting raw values to operands.
    pub fn into_node(self) -> Option<Node> {
        match self {
            Element::Token(token) => Operand::new(token).ok().map(Node::Operand),
            Element::Node(node) => Some(node),
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Element::Token(token) => Some(token),
            Element::Node(_) => None,
        }
    }

    pub fn is_token(&self, kind: TokenKind) -> bool {
        matches!(self, Element::Token(token) if token.is(kind))
    }

    pub fn is_operator_token(&self) -> bool {
        matches!(self, Element::Token(token) if token.category() == TokenCategory::Operator)
    }
}

impl From<Token> for Element {
    fn from(token: Token) -> Self {
        Element::Token(token)
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(node)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Token(token) => f.write_str(&token.lexeme),
            Element::Node(node) => write!(f, "{node}"),
        }
    }
}

/// The mutable sequence a parser instance reduces, pass by pass, to one tree.
#[derive(Debug, Clone, Default)]
pub struct WorkingSequence {
    elements: Vec<Element>,
}

impl WorkingSequence {
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            elements: tokens.into_iter().map(Element::Token).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Index of the first raw token of `kind`.
    pub fn position_of(&self, kind: TokenKind) -> Option<usize> {
        self.elements.iter().position(|element| element.is_token(kind))
    }

    /// Clones the raw tokens strictly between `open` and `close`.
    ///
    /// Returns `None` if any element in that range is already a tree.
    pub fn tokens_between(&self, open: usize, close: usize) -> Option<Vec<Token>> {
        self.elements[open + 1..close]
            .iter()
            .map(|element| element.as_token().cloned())
            .collect()
    }

    /// Replaces `range` with a single element.
    pub fn replace(&mut self, range: RangeInclusive<usize>, element: Element) {
        let start = *range.start();
        self.elements.drain(range);
        self.elements.insert(start, element);
    }

    /// Removes `range` and returns the removed elements in order.
    pub fn take(&mut self, range: RangeInclusive<usize>) -> Vec<Element> {
        self.elements.drain(range).collect()
    }

    pub fn insert(&mut self, index: usize, element: Element) {
        self.elements.insert(index, element);
    }

    pub fn pop(&mut self) -> Option<Element> {
        self.elements.pop()
    }
}

impl fmt::Display for WorkingSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{element}")?;
        }
        Ok(())
    }
}
