//! End-to-end tests: source text in, stack or error out.

use std::sync::Arc;

use crate::value::{ErrorValue, Value};
use crate::{buffer_handler, EvalError, Runtime};

mod builtins;

fn runtime() -> Arc<Runtime> {
    Runtime::builder().print_handler(buffer_handler()).build()
}

/// Stack left by evaluating `source` in a fresh context.
fn eval(source: &str) -> Vec<Value> {
    match runtime().eval(source) {
        Ok(ctx) => ctx.stack().to_vec(),
        Err(error) => panic!("`{source}` failed: {error}"),
    }
}

/// The error raised by evaluating `source`.
fn eval_err(source: &str) -> ErrorValue {
    match runtime().new_context().eval(source) {
        Err(EvalError::Raised(error)) => error,
        Err(fault) => panic!("`{source}` faulted: {fault}"),
        Ok(()) => panic!("`{source}` succeeded"),
    }
}

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn text(s: &str) -> Value {
    Value::string(s)
}

fn arr<const N: usize>(elements: [Value; N]) -> Value {
    Value::array(elements.into())
}
