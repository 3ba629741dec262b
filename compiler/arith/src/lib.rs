use arith_ast::{AstPrinter, Node};
use arith_lexer::{Token, TokenCategory};
use arith_parser::{
    parse_tokens, render_snippet, Diagnostic, OperatorPrecedence, ParseError,
};
use serde::Serialize;

/// How a parsed tree is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fully bracketed infix, e.g. `(3 + (6 * 7))`
    #[default]
    Text,
    /// The tree serialized as JSON
    Json,
    /// One node per line, children indented
    Tree,
}

#[derive(Debug, Serialize)]
pub struct TokenRow {
    pub kind: String,
    pub lexeme: String,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind.to_string(),
            lexeme: token.lexeme.clone(),
            line: token.location.line,
            column: token.location.column,
        }
    }
}

/// Everything known about one expression, ready for JSON output.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub tokens: Vec<TokenRow>,
    pub ast: Option<Node>,
    pub rendered: Option<String>,
    pub depth: Option<usize>,
    pub errors: Vec<String>,
}

/// Tokenize and parse a source string, collecting the tree or the error.
pub fn analyze_source(source: &str, precedence: &OperatorPrecedence) -> AnalysisReport {
    let tokens = arith_lexer::tokenize(source);
    let rows = tokens.iter().map(TokenRow::from).collect();

    match parse_tokens(tokens, precedence) {
        Ok(node) => AnalysisReport {
            tokens: rows,
            rendered: Some(node.to_string()),
            depth: Some(node.depth()),
            ast: Some(node),
            errors: Vec::new(),
        },
        Err(err) => AnalysisReport {
            tokens: rows,
            ast: None,
            rendered: None,
            depth: None,
            errors: vec![err.to_string()],
        },
    }
}

/// Renders a tree in the requested format.
pub fn format_node(node: &Node, format: OutputFormat) -> Result<String, serde_json::Error> {
    let text = match format {
        OutputFormat::Text => node.to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(node)?,
        OutputFormat::Tree => AstPrinter::print(node).trim_end().to_string(),
    };
    Ok(text)
}

/// One token per line: `KIND "lexeme" @line:column`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| format!("{} {:?} @{}", token.kind, token.lexeme, token.location))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns the diagnostic for the first illegal token, if there is one.
pub fn illegal_token_diagnostic(tokens: &[Token], source: &str) -> Option<String> {
    let token = tokens
        .iter()
        .find(|token| token.category() == TokenCategory::Illegal)?;
    let err = ParseError::InvalidExpression {
        lexeme: token.lexeme.clone(),
        location: token.location,
    };
    Some(render_error(&err, source))
}

pub fn render_error(err: &ParseError, source: &str) -> String {
    render_snippet(&Diagnostic::from(err), source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_analyze_success() {
        let report = analyze_source("3 ( 2 + 4 )", &OperatorPrecedence::BIDMAS);
        assert_eq!(report.rendered.as_deref(), Some("(3 * (2 + 4))"));
        assert_eq!(report.depth, Some(3));
        assert_eq!(report.tokens.len(), 6);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_analyze_failure_keeps_tokens() {
        let report = analyze_source("3 + @", &OperatorPrecedence::BIDMAS);
        assert!(report.ast.is_none());
        assert_eq!(report.tokens.last().map(|t| t.kind.as_str()), Some("ILLEGAL"));
        assert_eq!(report.errors.len(), 1);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"ast\":null"));
    }

    #[test]
    fn test_formats() {
        let node = arith_parser::parse_expression("1 + 2").unwrap();
        assert_eq!(format_node(&node, OutputFormat::Text).unwrap(), "(1 + 2)");
        assert_eq!(format_node(&node, OutputFormat::Tree).unwrap(), "(+)\n  1\n  2");
        assert!(format_node(&node, OutputFormat::Json)
            .unwrap()
            .contains("\"Add\""));
    }

    #[test]
    fn test_format_tokens() {
        let tokens = arith_lexer::tokenize("x ^ 2");
        assert_eq!(
            format_tokens(&tokens),
            "ALPHA \"x\" @1:1\nPOW \"^\" @1:3\nNUM \"2\" @1:5"
        );
    }

    #[test]
    fn test_illegal_token_diagnostic() {
        let tokens = arith_lexer::tokenize("2 # 3");
        let rendered = illegal_token_diagnostic(&tokens, "2 # 3").unwrap();
        assert!(rendered.starts_with("error: invalid expression"));
        assert!(illegal_token_diagnostic(&arith_lexer::tokenize("2"), "2").is_none());
    }
}
