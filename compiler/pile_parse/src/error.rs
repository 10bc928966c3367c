//! Parse errors.

use pile_ir::Position;
use thiserror::Error;

/// What went wrong while parsing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Unterminated string literal.")]
    UnterminatedString,
    #[error("Unrecognized escape sequence.")]
    InvalidEscape,
    #[error("Unexpected '{0}'.")]
    UnexpectedToken(&'static str),
    #[error("Unexpected end of input; Missing '{0}'.")]
    UnexpectedEof(&'static str),
    #[error("Missing name for word definition.")]
    MissingWordName,
    #[error("Missing ':' after object key.")]
    MissingColon,
    #[error("Unexpected '{0}'; Object keys must be strings.")]
    InvalidObjectKey(&'static str),
    #[error("Maximum nesting depth of {0} exceeded.")]
    NestingTooDeep(usize),
}

/// A syntax error with its location.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Byte offset of the offending input.
    pub offset: usize,
    pub position: Position,
}

impl ParseError {
    /// Human-readable message without location.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
