//! Evaluation errors and their constructors.
//!
//! Script-visible errors travel as [`EvalError::Raised`] and can be caught by
//! `try`. Faults of the host (a blown recursion limit) are separate variants
//! that scripts never observe.
//!
//! All error messages produced by the engine and the built-in words are built
//! here so their wording stays consistent.

use pile_parse::ParseError;
use pile_stack::DepthExceeded;
use thiserror::Error;

use crate::import::ImportError;
use crate::value::{ErrorCode, ErrorValue, Symbol, ValueKind};

/// Result of evaluation.
pub type EvalResult<T = ()> = Result<T, EvalError>;

#[derive(Clone, Debug, Error)]
pub enum EvalError {
    /// An error value raised by the engine or thrown by a script.
    #[error("{0}")]
    Raised(ErrorValue),
    /// The call depth limit of the context was exceeded.
    #[error("maximum call depth exceeded (limit: {limit})")]
    DepthExceeded { limit: usize },
}

impl EvalError {
    /// The error value, when this error is catchable by scripts.
    pub fn as_raised(&self) -> Option<&ErrorValue> {
        match self {
            EvalError::Raised(error) => Some(error),
            EvalError::DepthExceeded { .. } => None,
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.as_raised().map(|error| error.code)
    }
}

impl From<ErrorValue> for EvalError {
    fn from(error: ErrorValue) -> Self {
        EvalError::Raised(error)
    }
}

impl From<DepthExceeded> for EvalError {
    fn from(exceeded: DepthExceeded) -> Self {
        EvalError::DepthExceeded {
            limit: exceeded.limit,
        }
    }
}

#[cold]
pub fn raise(code: ErrorCode, message: impl Into<String>) -> EvalError {
    EvalError::Raised(ErrorValue::new(code, message))
}

// Engine

#[cold]
pub fn stack_underflow() -> EvalError {
    raise(ErrorCode::Range, "Stack underflow.")
}

#[cold]
pub fn type_mismatch(expected: ValueKind, actual: ValueKind) -> EvalError {
    raise(
        ErrorCode::Type,
        format!("Expected {expected}, got {actual} instead."),
    )
}

#[cold]
pub fn unrecognized_word(symbol: &Symbol) -> EvalError {
    ErrorValue::new(
        ErrorCode::Reference,
        format!("Unrecognized word: '{}'", symbol.id()),
    )
    .at(symbol.position())
    .into()
}

#[cold]
pub fn missing_value(id: &str) -> EvalError {
    raise(ErrorCode::Syntax, format!("Unexpected '{id}': Missing value."))
}

#[cold]
pub fn unexpected_word_declaration() -> EvalError {
    raise(
        ErrorCode::Syntax,
        "Unexpected word declaration: Missing value.",
    )
}

#[cold]
pub fn syntax_error(error: &ParseError) -> EvalError {
    ErrorValue::new(ErrorCode::Syntax, error.message())
        .at(Some(error.position))
        .into()
}

#[cold]
pub fn modules_unavailable() -> EvalError {
    raise(ErrorCode::Import, "Modules are not available on this platform.")
}

#[cold]
pub fn import_failed(error: &ImportError) -> EvalError {
    raise(ErrorCode::Import, error.to_string())
}

// Arrays and strings

#[cold]
pub fn array_empty() -> EvalError {
    raise(ErrorCode::Range, "Array is empty.")
}

#[cold]
pub fn reduce_empty() -> EvalError {
    raise(ErrorCode::Range, "Cannot reduce empty array.")
}

#[cold]
pub fn invalid_repeat_count() -> EvalError {
    raise(ErrorCode::Range, "Invalid repeat count.")
}

#[cold]
pub fn array_index_out_of_bounds() -> EvalError {
    raise(ErrorCode::Range, "Array index out of bounds.")
}

#[cold]
pub fn string_index_out_of_bounds() -> EvalError {
    raise(ErrorCode::Range, "String index out of bounds.")
}

#[cold]
pub fn negative_array_size() -> EvalError {
    raise(ErrorCode::Range, "Negative array size.")
}

#[cold]
pub fn not_a_number() -> EvalError {
    raise(ErrorCode::Value, "Could not convert string to number.")
}

#[cold]
pub fn invalid_code_point(n: f64) -> EvalError {
    raise(
        ErrorCode::Range,
        format!("Invalid code point: {}", crate::value::format_number(n)),
    )
}

// Objects

#[cold]
pub fn no_such_property(key: &str) -> EvalError {
    raise(ErrorCode::Range, format!("No such property: '{key}'"))
}

#[cold]
pub fn missing_prototype() -> EvalError {
    raise(ErrorCode::Type, "Object has no prototype.")
}
