//! Pile Eval - evaluation core of the Pile language.
//!
//! # Architecture
//!
//! - `Value`: immutable tagged values with `Arc`-shared payloads
//! - `Runtime`: global dictionary, prototype registry and host configuration,
//!   built once and shared by all contexts
//! - `Context`: a data stack and a local dictionary; runs quotes
//! - `builtins`: word tables installed on the prototypes and in the global
//!   dictionary
//!
//! ```text
//! source ──► pile_parse ──► Vec<Expr> ──► compile ──► Quote ──► Context::call
//! ```
//!
//! Errors raised by scripts and by built-in words are `EvalError::Raised` and
//! can be caught with `try`. A blown call depth limit is
//! `EvalError::DepthExceeded` and always reaches the host.

pub mod builtins;
mod compile;
mod context;
mod dictionary;
pub mod errors;
mod exec;
pub mod import;
mod print_handler;
mod prototypes;
mod runtime;
pub mod value;

pub use context::Context;
pub use dictionary::Dictionary;
pub use errors::{EvalError, EvalResult};
pub use import::{FileImporter, ImportError, Importer};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandler, SharedPrintHandler,
};
pub use prototypes::{instance_of, lookup_property, Prototypes};
pub use runtime::{Runtime, RuntimeBuilder, DEFAULT_MAX_DEPTH};
pub use value::{ErrorCode, ErrorValue, Node, Properties, Quote, Symbol, Value, ValueKind, Word};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
