//! Pile IR - source positions and the syntax tree shared by the parser and
//! the evaluator.
//!
//! The parser produces a flat sequence of [`Expr`] nodes. The evaluator lowers
//! them into its own executable node type; nothing in this crate knows about
//! runtime values.

pub mod ast;
mod position;

pub use ast::Expr;
pub use position::{LineIndex, Position};
