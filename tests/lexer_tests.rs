// Workspace tests for the arith lexer (logos-based)
use arith_lexer::{tokenize, LogosToken, TokenKind};
use logos::Logos;

#[test]
fn test_raw_logos_split() {
    let input = "3*(x + 12.5)^2";
    let tokens: Vec<_> = LogosToken::lexer(input)
        .map(|r| r.expect("every input character is matched"))
        .collect();
    assert_eq!(
        tokens,
        vec![
            LogosToken::Word,
            LogosToken::LeftParen,
            LogosToken::Word,
            LogosToken::Plus,
            LogosToken::Word,
            LogosToken::RightParen,
            LogosToken::Word,
        ]
    );
}

#[test]
fn test_classified_kinds() {
    let input = "a + 1.5e3 - ( b / 2 ) ^ c * 7";
    let kinds: Vec<_> = tokenize(input).into_iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Add,
            TokenKind::Number,
            TokenKind::Subtract,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Divide,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::Power,
            TokenKind::Identifier,
            TokenKind::Multiply,
            TokenKind::Number,
        ]
    );
}

#[test]
fn test_operator_glued_to_value_is_one_word() {
    // `3*` is neither a number nor a name, so tokenizing stops there.
    let tokens = tokenize("3* 4");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Illegal);
    assert_eq!(tokens[0].lexeme, "3*");
}

#[test]
fn test_multiline_locations() {
    let tokens = tokenize("1 +\n  x");
    let positions: Vec<_> = tokens
        .iter()
        .map(|t| (t.location.line, t.location.column))
        .collect();
    assert_eq!(positions, vec![(1, 1), (1, 3), (2, 3)]);
}
