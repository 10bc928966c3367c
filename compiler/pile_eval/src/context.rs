//! Execution context: a data stack plus a local dictionary.
//!
//! A context is the unit of evaluation. It holds an `Arc` of the runtime it was
//! created from and is not shared between threads; run several contexts to
//! evaluate in parallel.
//!
//! This module holds the stack API used by built-in words. The evaluation
//! loop lives in [`crate::exec`].

use std::sync::Arc;

use pile_stack::RecursionBudget;

use crate::dictionary::Dictionary;
use crate::errors::{stack_underflow, type_mismatch, EvalResult};
use crate::runtime::Runtime;
use crate::value::{
    ErrorCode, ErrorValue, Heap, Properties, Quote, Symbol, Value, ValueKind, Word,
};

pub struct Context {
    pub(crate) runtime: Arc<Runtime>,
    pub(crate) stack: Vec<Value>,
    pub(crate) dictionary: Dictionary,
    pub(crate) budget: RecursionBudget,
}

impl Context {
    pub(crate) fn new(runtime: Arc<Runtime>) -> Self {
        let budget = RecursionBudget::new(runtime.max_depth());
        Context {
            runtime,
            stack: Vec::new(),
            dictionary: Dictionary::new(),
            budget,
        }
    }

    #[inline]
    pub fn runtime(&self) -> &Arc<Runtime> {
        &self.runtime
    }

    /// Stack contents, bottom first.
    #[inline]
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    #[inline]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Define a word in the local dictionary.
    pub fn define(&mut self, word: Word) {
        self.dictionary.insert(word);
    }

    /// Construct (but do not raise) an error value.
    pub fn error(&self, code: ErrorCode, message: Option<&str>) -> ErrorValue {
        match message {
            Some(message) => ErrorValue::new(code, message),
            None => ErrorValue::bare(code),
        }
    }
}

// Pushing

impl Context {
    #[inline]
    pub fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    pub fn push_null(&mut self) {
        self.push(Value::Null);
    }

    pub fn push_boolean(&mut self, b: bool) {
        self.push(Value::Boolean(b));
    }

    pub fn push_number(&mut self, n: f64) {
        self.push(Value::Number(n));
    }

    pub fn push_string(&mut self, s: impl Into<String>) {
        self.push(Value::string(s));
    }

    pub fn push_array(&mut self, elements: Vec<Value>) {
        self.push(Value::array(elements));
    }

    pub fn push_object(&mut self, properties: Properties) {
        self.push(Value::object(properties));
    }

    pub fn push_quote(&mut self, quote: Quote) {
        self.push(Value::Quote(quote));
    }

    pub fn push_symbol(&mut self, id: impl Into<String>) {
        self.push(Value::symbol(id));
    }

    pub fn push_word(&mut self, symbol: Symbol, quote: Quote) {
        self.push(Value::Word(Word::new(symbol, quote)));
    }

    pub fn push_error(&mut self, code: ErrorCode, message: Option<&str>) {
        let error = self.error(code, message);
        self.push(Value::Error(error));
    }
}

// Peeking and popping

impl Context {
    pub fn peek(&self) -> EvalResult<&Value> {
        self.stack.last().ok_or_else(stack_underflow)
    }

    pub fn pop(&mut self) -> EvalResult<Value> {
        self.stack.pop().ok_or_else(stack_underflow)
    }

    pub fn peek_kind(&self, kind: ValueKind) -> EvalResult<&Value> {
        let value = self.peek()?;
        if value.kind() == kind {
            Ok(value)
        } else {
            Err(type_mismatch(kind, value.kind()))
        }
    }

    pub fn pop_kind(&mut self, kind: ValueKind) -> EvalResult<Value> {
        self.peek_kind(kind)?;
        self.pop()
    }

    /// Extract from the top value without removing it.
    fn peek_as<'a, T>(
        &'a self,
        kind: ValueKind,
        extract: impl FnOnce(&'a Value) -> Option<T>,
    ) -> EvalResult<T> {
        let value = self.peek()?;
        extract(value).ok_or_else(|| type_mismatch(kind, value.kind()))
    }

    /// Extract from the top value, then remove it. The stack is untouched
    /// when the kind does not match.
    fn pop_as<T>(
        &mut self,
        kind: ValueKind,
        extract: impl FnOnce(&Value) -> Option<T>,
    ) -> EvalResult<T> {
        let result = self.peek_as(kind, extract)?;
        self.stack.pop();
        Ok(result)
    }

    pub fn peek_boolean(&self) -> EvalResult<bool> {
        self.peek_as(ValueKind::Boolean, Value::as_boolean)
    }

    pub fn peek_number(&self) -> EvalResult<f64> {
        self.peek_as(ValueKind::Number, Value::as_number)
    }

    pub fn peek_string(&self) -> EvalResult<&str> {
        self.peek_as(ValueKind::String, Value::as_str)
    }

    pub fn peek_array(&self) -> EvalResult<&Heap<Vec<Value>>> {
        self.peek_as(ValueKind::Array, Value::as_array)
    }

    pub fn peek_object(&self) -> EvalResult<&Heap<Properties>> {
        self.peek_as(ValueKind::Object, Value::as_object)
    }

    pub fn peek_quote(&self) -> EvalResult<&Quote> {
        self.peek_as(ValueKind::Quote, Value::as_quote)
    }

    pub fn peek_symbol(&self) -> EvalResult<&Symbol> {
        self.peek_as(ValueKind::Symbol, Value::as_symbol)
    }

    pub fn peek_word(&self) -> EvalResult<&Word> {
        self.peek_as(ValueKind::Word, Value::as_word)
    }

    pub fn peek_error(&self) -> EvalResult<&ErrorValue> {
        self.peek_as(ValueKind::Error, Value::as_error)
    }

    pub fn pop_boolean(&mut self) -> EvalResult<bool> {
        self.pop_as(ValueKind::Boolean, Value::as_boolean)
    }

    pub fn pop_number(&mut self) -> EvalResult<f64> {
        self.pop_as(ValueKind::Number, Value::as_number)
    }

    pub fn pop_string(&mut self) -> EvalResult<Heap<String>> {
        self.pop_as(ValueKind::String, |v| v.as_string().cloned())
    }

    pub fn pop_array(&mut self) -> EvalResult<Heap<Vec<Value>>> {
        self.pop_as(ValueKind::Array, |v| v.as_array().cloned())
    }

    pub fn pop_object(&mut self) -> EvalResult<Heap<Properties>> {
        self.pop_as(ValueKind::Object, |v| v.as_object().cloned())
    }

    pub fn pop_quote(&mut self) -> EvalResult<Quote> {
        self.pop_as(ValueKind::Quote, |v| v.as_quote().cloned())
    }

    pub fn pop_symbol(&mut self) -> EvalResult<Symbol> {
        self.pop_as(ValueKind::Symbol, |v| v.as_symbol().cloned())
    }

    pub fn pop_word(&mut self) -> EvalResult<Word> {
        self.pop_as(ValueKind::Word, |v| v.as_word().cloned())
    }

    pub fn pop_error(&mut self) -> EvalResult<ErrorValue> {
        self.pop_as(ValueKind::Error, |v| v.as_error().cloned())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
