//! Quotes, words and the executable nodes they are made of.

use std::fmt;

use super::{Heap, Symbol, Value};
use crate::context::Context;
use crate::errors::EvalResult;

/// Host callback behind a native quote.
pub type NativeFn = dyn Fn(&mut Context) -> EvalResult + Send + Sync;

/// What a quote runs when called. Fixed at construction.
pub enum QuoteBody {
    Native(Box<NativeFn>),
    Compiled(Vec<Node>),
}

/// An executable block of code.
///
/// Quotes compare by identity: two quotes with the same body are still
/// different values.
#[derive(Clone)]
pub struct Quote(Heap<QuoteBody>);

impl Quote {
    pub fn native(callback: impl Fn(&mut Context) -> EvalResult + Send + Sync + 'static) -> Self {
        Quote(Heap::new(QuoteBody::Native(Box::new(callback))))
    }

    pub fn compiled(nodes: Vec<Node>) -> Self {
        Quote(Heap::new(QuoteBody::Compiled(nodes)))
    }

    /// Quote that pushes (or executes, for symbols and words) each value.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        Quote::compiled(values.into_iter().map(Node::from).collect())
    }

    #[inline]
    pub fn body(&self) -> &QuoteBody {
        &self.0
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Quote) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl fmt::Debug for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body() {
            QuoteBody::Native(_) => f.write_str("Quote(<native>)"),
            QuoteBody::Compiled(nodes) => f.debug_tuple("Quote").field(nodes).finish(),
        }
    }
}

/// A named quote, as stored in dictionaries.
#[derive(Clone, Debug)]
pub struct Word {
    symbol: Symbol,
    quote: Quote,
}

impl Word {
    pub fn new(symbol: Symbol, quote: Quote) -> Self {
        Word { symbol, quote }
    }

    #[inline]
    pub fn id(&self) -> &str {
        self.symbol.id()
    }

    #[inline]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[inline]
    pub fn quote(&self) -> &Quote {
        &self.quote
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.quote.ptr_eq(&other.quote)
    }
}

/// Unit of execution inside a compiled quote.
#[derive(Clone, Debug)]
pub enum Node {
    /// Fully formed value, pushed as is.
    Value(Value),
    /// Resolved when executed; a literal only inside arrays and objects.
    Symbol(Symbol),
    /// Definition; executing it defines the word locally.
    Word(Word),
    Array(Vec<Node>),
    Object(Vec<(String, Node)>),
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Symbol(symbol) => Node::Symbol(symbol),
            Value::Word(word) => Node::Word(word),
            other => Node::Value(other),
        }
    }
}
