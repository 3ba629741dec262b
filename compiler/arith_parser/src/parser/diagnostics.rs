use std::fmt::Write as _;

use arith_lexer::{Location, Token};

use crate::error::ParseError;

/// A region of source text. Offsets are bytes, line and column are 1-based.
///
/// A span with `line == 0` is not tied to any position in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn at(location: Location, width: usize) -> Self {
        Self {
            start: location.offset,
            end: location.offset + width,
            line: location.line,
            column: location.column,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0
    }
}

/// A human-readable description of a problem in an expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    pub span: Span,
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a diagnostic at a specific token with a custom message
    pub fn at_token<S: Into<String>>(token: &Token, message: S) -> Self {
        Self::at_span(span_from_token(token), message)
    }

    /// Create a diagnostic with an explicit span
    pub fn at_span<S: Into<String>>(span: Span, message: S) -> Self {
        Self {
            message: message.into(),
            span,
            help: None,
        }
    }

    pub fn with_help<S: Into<String>>(mut self, help: S) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(err: &ParseError) -> Self {
        let span = err
            .location()
            .map(|location| Span::at(location, err.byte_width()))
            .unwrap_or_default();
        let diagnostic = Diagnostic::at_span(span, err.to_string());
        match help_for_error(err) {
            Some(help) => diagnostic.with_help(help),
            None => diagnostic,
        }
    }
}

fn help_for_error(err: &ParseError) -> Option<&'static str> {
    let help = match err {
        ParseError::InvalidExpression { .. } => {
            "only numbers, letters, brackets and + - * / ^ are allowed"
        }
        ParseError::NoMatchingBracket { bracket: '(', .. } => {
            "did you forget a closing ')' later?"
        }
        ParseError::NoMatchingBracket { .. } => "did you forget a matching '(' earlier?",
        ParseError::InvalidInfixExpression { .. } => {
            "operators need a value on both sides, e.g. '2 * 3'"
        }
        ParseError::CouldNotParseExpression => {
            "check for two values in a row or an operator missing from the precedence order"
        }
        ParseError::EmptyExpression => return None,
        ParseError::NestingTooDeep { .. } => "flatten some of the nested brackets",
    };
    Some(help)
}

/// Build a Span that covers an entire token
fn span_from_token(token: &Token) -> Span {
    Span::at(token.location, token.lexeme.len())
}

/// Renders a diagnostic against the source it was produced from.
///
/// ```text
/// error: no matching bracket for '(' at 1:1
///  --> 1:1
///   |
/// 1 | ( 3 + 2
///   | ^
///   = help: did you forget a closing ')' later?
/// ```
pub fn render_snippet(diagnostic: &Diagnostic, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "error: {}", diagnostic.message);

    let span = diagnostic.span;
    let line_text = source.lines().nth(span.line.saturating_sub(1));
    if let (false, Some(line_text)) = (span.is_unknown(), line_text) {
        let number = span.line.to_string();
        let gutter = " ".repeat(number.len());
        let width = source
            .get(span.start..span.end)
            .map(|text| text.chars().count())
            .unwrap_or(1)
            .max(1);
        let _ = writeln!(out, "{gutter}--> {}:{}", span.line, span.column);
        let _ = writeln!(out, "{gutter} |");
        let _ = writeln!(out, "{number} | {line_text}");
        let _ = writeln!(
            out,
            "{gutter} | {}{}",
            " ".repeat(span.column.saturating_sub(1)),
            "^".repeat(width)
        );
    }
    if let Some(help) = &diagnostic.help {
        let _ = writeln!(out, "  = help: {help}");
    }
    out
}
