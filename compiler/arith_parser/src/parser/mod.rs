//! The multi-pass reduction parser.
//!
//! A [`ReductionParser`] owns a working sequence of tokens and subtrees and
//! shrinks it, one pass at a time, until a single tree remains. Each pass
//! first resolves the leftmost parenthesized group with a nested parser. Once
//! no groups are left, each pass folds the first occurrence of the highest
//! remaining operator in the precedence order.

pub mod diagnostics;
pub mod working_sequence;

#[cfg(test)]
pub(crate) mod test_utils;

use arith_ast::{BinaryOperator, Node, Operand};
use arith_lexer::{Location, Token, TokenCategory, TokenKind};

use crate::error::ParseError;
use crate::precedence::OperatorPrecedence;
pub use working_sequence::{Element, WorkingSequence};

/// Default limit on how deeply groups may nest.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Settings shared by a parser and every nested parser it spawns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub precedence: OperatorPrecedence,
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            precedence: OperatorPrecedence::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precedence(mut self, precedence: OperatorPrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// What a single pass achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Progressed,
    Stalled,
}

/// Reduces one token sequence to a single [`Node`].
///
/// A parser is consumed by [`ReductionParser::parse`]; groups are handled by
/// fresh parsers that share the configuration but nothing else.
#[derive(Debug)]
pub struct ReductionParser<'a> {
    sequence: WorkingSequence,
    config: &'a ParserConfig,
    /// Index into the precedence order of the next operator to fold.
    cursor: usize,
    groups_resolved: bool,
    depth: usize,
}

impl<'a> ReductionParser<'a> {
    pub fn new(tokens: Vec<Token>, config: &'a ParserConfig) -> Self {
        Self::nested(tokens, config, 0)
    }

    fn nested(tokens: Vec<Token>, config: &'a ParserConfig, depth: usize) -> Self {
        Self {
            sequence: WorkingSequence::from_tokens(tokens),
            config,
            cursor: 0,
            groups_resolved: false,
            depth,
        }
    }

    /// Runs passes until one tree is left or an error stops the reduction.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        if self.sequence.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        if let Some(illegal) = self
            .sequence
            .iter()
            .filter_map(Element::as_token)
            .find(|token| token.is(TokenKind::Illegal))
        {
            return Err(ParseError::InvalidExpression {
                lexeme: illegal.lexeme.clone(),
                location: illegal.location,
            });
        }

        log::debug!("parsing at depth {}: {}", self.depth, self.sequence);
        let mut pass = 0usize;
        while self.sequence.len() > 1 {
            pass += 1;
            if self.run_pass()? == Step::Stalled {
                log::debug!("pass {pass} made no progress on: {}", self.sequence);
                return Err(ParseError::CouldNotParseExpression);
            }
            log::trace!("after pass {pass}: {}", self.sequence);
        }
        self.finish()
    }

    fn run_pass(&mut self) -> Result<Step, ParseError> {
        let grouped = self.resolve_group()?;
        let folded = if self.groups_resolved {
            self.fold_next_operator()?
        } else {
            Step::Stalled
        };
        if grouped == Step::Progressed || folded == Step::Progressed {
            Ok(Step::Progressed)
        } else {
            Ok(Step::Stalled)
        }
    }

    /// Replaces the leftmost parenthesized group with its parsed tree.
    fn resolve_group(&mut self) -> Result<Step, ParseError> {
        let open = self.sequence.position_of(TokenKind::LeftParen);
        // Any `)` left of the first `(` can never be matched.
        if let Some(stray) = self.sequence.position_of(TokenKind::RightParen) {
            if open.map_or(true, |open| stray < open) {
                return Err(self.unmatched_bracket(stray, ')'));
            }
        }
        let Some(open) = open else {
            self.groups_resolved = true;
            return Ok(Step::Stalled);
        };

        let close = self.matching_close(open)?;
        let inner = self
            .sequence
            .tokens_between(open, close)
            .ok_or(ParseError::CouldNotParseExpression)?;

        let nested_depth = self.depth + 1;
        if nested_depth > self.config.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth,
            });
        }
        log::trace!("resolving group at elements {open}..={close}");
        let node = ReductionParser::nested(inner, self.config, nested_depth).parse()?;

        let open_location = self.location_at(open);
        let close_location = self.location_at(close);
        self.sequence.replace(open..=close, Element::Node(node));

        let mut group_index = open;
        if group_index > 0 && self.implies_multiplication(group_index - 1) {
            log::debug!("implicit multiplication before group at {open_location}");
            self.sequence.insert(
                group_index,
                Token::synthetic(TokenKind::Multiply, open_location).into(),
            );
            group_index += 1;
        }
        if self.implies_multiplication(group_index + 1) {
            log::debug!("implicit multiplication after group at {close_location}");
            self.sequence.insert(
                group_index + 1,
                Token::synthetic(TokenKind::Multiply, close_location).into(),
            );
        }
        Ok(Step::Progressed)
    }

    /// Finds the `)` that balances the `(` at `open`.
    fn matching_close(&self, open: usize) -> Result<usize, ParseError> {
        let mut balance = 0usize;
        for index in open..self.sequence.len() {
            match self.sequence.get(index) {
                Some(element) if element.is_token(TokenKind::LeftParen) => balance += 1,
                Some(element) if element.is_token(TokenKind::RightParen) => {
                    balance -= 1;
                    if balance == 0 {
                        return Ok(index);
                    }
                }
                _ => {}
            }
        }
        Err(self.unmatched_bracket(open, '('))
    }

    fn implies_multiplication(&self, index: usize) -> bool {
        match self.sequence.get(index) {
            Some(element) => !element.is_operator_token(),
            None => false,
        }
    }

    /// Folds the first occurrence of the highest operator still present.
    ///
    /// Operators with no remaining occurrence are dropped from this parser's
    /// order for good.
    fn fold_next_operator(&mut self) -> Result<Step, ParseError> {
        while let Some(operator) = self.config.precedence.get(self.cursor) {
            match self.sequence.position_of(operator.token_kind()) {
                Some(index) => {
                    self.fold_at(index, operator)?;
                    return Ok(Step::Progressed);
                }
                None => {
                    log::trace!("no '{operator}' left, moving down the precedence order");
                    self.cursor += 1;
                }
            }
        }
        Ok(Step::Stalled)
    }

    fn fold_at(&mut self, index: usize, operator: BinaryOperator) -> Result<(), ParseError> {
        let has_operands = self.sequence.len() >= 3
            && index > 0
            && index + 1 < self.sequence.len()
            && self
                .sequence
                .get(index - 1)
                .is_some_and(Element::is_reducible)
            && self
                .sequence
                .get(index + 1)
                .is_some_and(Element::is_reducible);
        let location = self.location_at(index);
        let invalid = || ParseError::InvalidInfixExpression {
            operator: operator.symbol().to_string(),
            location,
        };
        if !has_operands {
            return Err(invalid());
        }

        let triple: [Element; 3] = self
            .sequence
            .take(index - 1..=index + 1)
            .try_into()
            .map_err(|_| invalid())?;
        let [left, _, right] = triple;
        let (Some(left), Some(right)) = (left.into_node(), right.into_node()) else {
            return Err(invalid());
        };

        let node = Node::binary(operator, left, right);
        log::debug!("folded {node}");
        self.sequence.insert(index - 1, Element::Node(node));
        Ok(())
    }

    /// Turns the last remaining element into the result.
    fn finish(mut self) -> Result<Node, ParseError> {
        let Some(element) = self.sequence.pop() else {
            return Err(ParseError::CouldNotParseExpression);
        };
        match element {
            Element::Node(node) => Ok(node),
            Element::Token(token) => match token.category() {
                TokenCategory::Value => Operand::new(token)
                    .map(Node::Operand)
                    .map_err(|_| ParseError::CouldNotParseExpression),
                TokenCategory::Operator => Err(ParseError::InvalidInfixExpression {
                    operator: token.lexeme,
                    location: token.location,
                }),
                TokenCategory::Paren => Err(ParseError::NoMatchingBracket {
                    bracket: if token.is(TokenKind::LeftParen) { '(' } else { ')' },
                    location: token.location,
                }),
                TokenCategory::Illegal => Err(ParseError::InvalidExpression {
                    lexeme: token.lexeme,
                    location: token.location,
                }),
            },
        }
    }

    fn location_at(&self, index: usize) -> Location {
        self.sequence
            .get(index)
            .and_then(Element::as_token)
            .map(|token| token.location)
            .unwrap_or_default()
    }

    fn unmatched_bracket(&self, index: usize, bracket: char) -> ParseError {
        ParseError::NoMatchingBracket {
            bracket,
            location: self.location_at(index),
        }
    }
}

/// Parses an already tokenized expression with a custom precedence order.
pub fn parse_tokens(
    tokens: Vec<Token>,
    precedence: &OperatorPrecedence,
) -> Result<Node, ParseError> {
    let config = ParserConfig::default().with_precedence(precedence.clone());
    ReductionParser::new(tokens, &config).parse()
}

/// Tokenizes and parses `source` with a custom precedence order.
pub fn parse_str(source: &str, precedence: &OperatorPrecedence) -> Result<Node, ParseError> {
    parse_tokens(arith_lexer::tokenize(source), precedence)
}

/// Tokenizes and parses `source` with the BIDMAS order.
pub fn parse_expression(source: &str) -> Result<Node, ParseError> {
    parse_str(source, &OperatorPrecedence::BIDMAS)
}
