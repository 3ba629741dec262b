//! Multi-pass reduction parser for infix arithmetic.
//!
//! ```
//! let node = arith_parser::parse_expression("3 ( 2 + 4 )").unwrap();
//! assert_eq!(node.to_string(), "(3 * (2 + 4))");
//! ```

pub mod error;
pub mod parser;
pub mod precedence;

pub use error::{ErrorKind, ParseError};
pub use parser::diagnostics::{render_snippet, Diagnostic, Span};
pub use parser::{
    parse_expression, parse_str, parse_tokens, ParserConfig, ReductionParser, DEFAULT_MAX_DEPTH,
};
pub use precedence::{OperatorPrecedence, PrecedenceError};


// Integration tests are in the tests/ directory
