//! Runtime values.
//!
//! `Value` is a closed tagged union. Heap payloads are shared through
//! [`Heap`] and never mutated in place, so cloning a value is always cheap and
//! words that "modify" arrays or objects allocate a new payload.
//!
//! Construct heap-backed values through the factory methods (`Value::string`,
//! `Value::array`, ...) rather than through `Heap::new` directly.

mod error_value;
mod format;
mod heap;
mod number;
mod quote;
mod symbol;

pub use error_value::{ErrorCode, ErrorValue};
pub use format::quote_string;
pub use heap::Heap;
pub use number::{format_number, parse_number_literal, to_int32};
pub use quote::{NativeFn, Node, Quote, QuoteBody, Word};
pub use symbol::Symbol;

use std::fmt;

use indexmap::IndexMap;

/// Properties of an object, in insertion order.
pub type Properties = IndexMap<String, Value>;

/// Classification of a value. Also the key of the prototype registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Symbol,
    Array,
    Object,
    Quote,
    Word,
    Error,
}

impl ValueKind {
    /// Name used by `typeof` and in type errors.
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Symbol => "symbol",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Quote => "quote",
            ValueKind::Word => "word",
            ValueKind::Error => "error",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(Heap<String>),
    Symbol(Symbol),
    Array(Heap<Vec<Value>>),
    Object(Heap<Properties>),
    Quote(Quote),
    Word(Word),
    Error(ErrorValue),
}

// Factory methods

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(elements: Vec<Value>) -> Self {
        Value::Array(Heap::new(elements))
    }

    #[inline]
    pub fn object(properties: Properties) -> Self {
        Value::Object(Heap::new(properties))
    }

    #[inline]
    pub fn symbol(id: impl Into<String>) -> Self {
        Value::Symbol(Symbol::new(id))
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Symbol(_) => ValueKind::Symbol,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Quote(_) => ValueKind::Quote,
            Value::Word(_) => ValueKind::Word,
            Value::Error(_) => ValueKind::Error,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&Heap<String>> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Heap<Vec<Value>>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Heap<Properties>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_quote(&self) -> Option<&Quote> {
        match self {
            Value::Quote(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Value::Word(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            // IndexMap equality ignores insertion order.
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Quote(a), Value::Quote(b)) => a.ptr_eq(b),
            (Value::Word(a), Value::Word(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::array(elements)
    }
}

impl From<Quote> for Value {
    fn from(q: Quote) -> Self {
        Value::Quote(q)
    }
}

impl From<Word> for Value {
    fn from(w: Word) -> Self {
        Value::Word(w)
    }
}

impl From<ErrorValue> for Value {
    fn from(e: ErrorValue) -> Self {
        Value::Error(e)
    }
}
