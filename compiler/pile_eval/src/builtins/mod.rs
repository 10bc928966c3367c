//! Built-in word tables.
//!
//! Each table pairs a word name with a plain function over the context.
//! Tables named after a kind become the properties of that kind's prototype;
//! [`globals::WORDS`] seeds the global dictionary.
//!
//! Stack effects in the docs are written `( before -- after )` with the top of
//! the stack on the right. Words dispatched through a prototype find their
//! receiver on top of the stack.

use indexmap::indexmap;
use pile_ir::Position;

use crate::context::Context;
use crate::errors::EvalResult;
use crate::value::Value;

pub mod array;
pub mod boolean;
pub mod error;
pub mod globals;
pub mod number;
pub mod object;
pub mod quote;
pub mod string;
pub mod symbol;
pub mod word;

/// A built-in word.
pub type Builtin = fn(&mut Context) -> EvalResult;

/// Name and implementation of each word in a table.
pub type WordTable = &'static [(&'static str, Builtin)];

/// Normalize an index that may count from the end, checking it against `len`.
pub(crate) fn resolve_index(index: f64, len: usize) -> Option<usize> {
    let len = len as f64;
    let index = index.trunc();
    let index = if index < 0.0 { index + len } else { index };
    if index >= 0.0 && index < len {
        Some(index as usize)
    } else {
        None
    }
}

/// `{"line": l, "column": c}`, or null when the position is unknown.
pub(crate) fn position_value(position: Option<Position>) -> Value {
    match position {
        Some(position) => Value::object(indexmap! {
            "line".to_string() => Value::Number(f64::from(position.line)),
            "column".to_string() => Value::Number(f64::from(position.column)),
        }),
        None => Value::Null,
    }
}

/// Upper bound on the length of a string or array built by repetition.
pub(crate) const MAX_REPEATED_LEN: usize = 1 << 24;

/// Repeat count for the `*` words, repeating a unit of `unit_len` elements.
///
/// Fails when the result would exceed [`MAX_REPEATED_LEN`].
pub(crate) fn repeat_count(n: f64, unit_len: usize) -> Option<usize> {
    if !n.is_finite() || n < 0.0 {
        return None;
    }
    let count = n.trunc() as usize;
    if unit_len == 0 {
        return Some(0);
    }
    count
        .checked_mul(unit_len)
        .filter(|&len| len <= MAX_REPEATED_LEN)
        .map(|_| count)
}
