//! Pile Parse - turns source text into the syntax tree consumed by the
//! evaluator.
//!
//! ```text
//! source ──► lexer::lex ──► Vec<Token> ──► Parser ──► Vec<Expr>
//! ```

mod error;
pub mod lexer;
mod parser;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{Parser, MAX_NESTING};

use pile_ir::Expr;

/// Parse a complete program.
pub fn parse(source: &str) -> Result<Vec<Expr>, ParseError> {
    Parser::new(source).parse_program()
}
