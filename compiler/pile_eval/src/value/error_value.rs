use std::fmt;

use pile_ir::Position;

/// Category of an error value. The numeric codes are visible to scripts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Syntax,
    Reference,
    Type,
    Value,
    Range,
    Import,
    Unknown,
}

impl ErrorCode {
    pub const fn code(self) -> u32 {
        match self {
            ErrorCode::Syntax => 1,
            ErrorCode::Reference => 2,
            ErrorCode::Type => 3,
            ErrorCode::Value => 4,
            ErrorCode::Range => 5,
            ErrorCode::Import => 6,
            ErrorCode::Unknown => 100,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::Syntax => "Syntax error",
            ErrorCode::Reference => "Reference error",
            ErrorCode::Type => "Type error",
            ErrorCode::Value => "Value error",
            ErrorCode::Range => "Range error",
            ErrorCode::Import => "Import error",
            ErrorCode::Unknown => "Unknown error",
        }
    }
}

/// An error as a first-class value.
///
/// Equality compares code and message; the position is diagnostic only.
#[derive(Clone, Debug)]
pub struct ErrorValue {
    pub code: ErrorCode,
    pub message: Option<String>,
    pub position: Option<Position>,
}

impl ErrorValue {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ErrorValue {
            code,
            message: Some(message.into()),
            position: None,
        }
    }

    pub fn bare(code: ErrorCode) -> Self {
        ErrorValue {
            code,
            message: None,
            position: None,
        }
    }

    #[must_use]
    pub fn at(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }
}

impl PartialEq for ErrorValue {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.message == other.message
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {message}", self.code.description()),
            None => f.write_str(self.code.description()),
        }
    }
}
