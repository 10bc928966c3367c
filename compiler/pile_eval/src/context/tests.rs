use super::*;
use crate::{Runtime, ValueKind};
use pretty_assertions::assert_eq;

fn context() -> Context {
    Runtime::builder().build().new_context()
}

#[test]
fn pop_on_empty_stack_is_range_error() {
    let mut ctx = context();
    assert_eq!(ctx.pop().unwrap_err().code(), Some(ErrorCode::Range));
    assert_eq!(ctx.peek().unwrap_err().code(), Some(ErrorCode::Range));
    assert_eq!(ctx.pop().unwrap_err().to_string(), "Range error: Stack underflow.");
}

#[test]
fn pop_kind_mismatch_is_type_error() {
    let mut ctx = context();
    ctx.push_number(1.0);
    let err = ctx.pop_kind(ValueKind::Boolean).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::Type));
    assert_eq!(
        err.to_string(),
        "Type error: Expected boolean, got number instead."
    );
    // Failed pops leave the stack alone.
    assert_eq!(ctx.stack(), &[Value::Number(1.0)]);
}

#[test]
fn typed_pops_unwrap_values() {
    let mut ctx = context();
    ctx.push_string("hi");
    ctx.push_boolean(true);
    ctx.push_number(2.5);
    assert_eq!(ctx.pop_number().unwrap(), 2.5);
    assert!(ctx.pop_boolean().unwrap());
    assert_eq!(ctx.pop_string().unwrap().as_str(), "hi");
    assert!(ctx.stack().is_empty());
}

#[test]
fn typed_peeks_do_not_pop() {
    let mut ctx = context();
    ctx.push_array(vec![Value::Null]);
    assert_eq!(ctx.peek_array().unwrap().len(), 1);
    assert_eq!(ctx.stack().len(), 1);
    assert!(ctx.peek_object().is_err());
}

#[test]
fn error_constructs_without_raising() {
    let mut ctx = context();
    let error = ctx.error(ErrorCode::Value, Some("bad"));
    assert_eq!(error.to_string(), "Value error: bad");
    assert_eq!(ctx.error(ErrorCode::Unknown, None).to_string(), "Unknown error");
    ctx.push_error(ErrorCode::Import, None);
    assert_eq!(ctx.pop_error().unwrap().code, ErrorCode::Import);
}

#[test]
fn push_word_and_define() {
    let mut ctx = context();
    ctx.push_word(Symbol::new("answer"), Quote::from_values([Value::Number(42.0)]));
    let word = ctx.pop_word().unwrap();
    ctx.define(word);
    ctx.eval("answer").unwrap();
    assert_eq!(ctx.stack(), &[Value::Number(42.0)]);
}
