//! Syntax tree produced by the parser.
//!
//! Numbers, booleans and `null` are not distinguished here: the language
//! treats them as symbols and the evaluator decides what they mean, either
//! through word lookup or through its literal grammar.

use crate::Position;

/// A single parsed element of a program.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// String literal with escapes already resolved.
    String(String),
    /// Any identifier-like token.
    Symbol { id: String, position: Position },
    /// `[ a, b, ... ]`
    Array(Vec<Expr>),
    /// `{ "key": value, ... }`, in source order. Duplicate keys are kept;
    /// the last one wins when the object is built.
    Object(Vec<(String, Expr)>),
    /// `( ... )`
    Quote(Vec<Expr>),
    /// `: name body ;`
    Word {
        name: String,
        position: Position,
        body: Vec<Expr>,
    },
}

impl Expr {
    /// Convenience constructor used by tests and tools.
    pub fn symbol(id: impl Into<String>, position: Position) -> Self {
        Expr::Symbol {
            id: id.into(),
            position,
        }
    }
}
