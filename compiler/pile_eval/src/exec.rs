//! The evaluation loop: calling quotes, executing nodes and resolving
//! symbols.
//!
//! Symbol resolution order:
//!
//! 1. a property of the prototype of the value on top of the stack,
//! 2. the context's local dictionary,
//! 3. the runtime's global dictionary,
//! 4. a number literal,
//!
//! and otherwise a reference error.

use std::sync::Arc;

use pile_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::compile::lower_program;
use crate::context::Context;
use crate::errors::{
    import_failed, missing_value, modules_unavailable, syntax_error, unexpected_word_declaration,
    unrecognized_word, EvalError, EvalResult,
};
use crate::import::ImportError;
use crate::value::{parse_number_literal, Node, Properties, Quote, QuoteBody, Symbol, Value};

impl Context {
    /// Compile and run `source` in this context.
    pub fn eval(&mut self, source: &str) -> EvalResult {
        let quote = self.compile(source)?;
        self.call(&quote)
    }

    /// Parse `source` into a quote without running it.
    pub fn compile(&self, source: &str) -> EvalResult<Quote> {
        let program = pile_parse::parse(source).map_err(|error| syntax_error(&error))?;
        Ok(lower_program(program))
    }

    /// Run a quote.
    pub fn call(&mut self, quote: &Quote) -> EvalResult {
        self.nested(|ctx| match quote.body() {
            QuoteBody::Native(callback) => callback(ctx),
            QuoteBody::Compiled(nodes) => nodes.iter().try_for_each(|node| ctx.exec(node)),
        })
    }

    /// Execute a single node.
    pub fn exec(&mut self, node: &Node) -> EvalResult {
        match node {
            Node::Symbol(symbol) => self.resolve_symbol(symbol),
            Node::Word(word) => {
                self.dictionary.insert(word.clone());
                Ok(())
            }
            literal => {
                let value = self.eval_literal(literal)?;
                self.push(value);
                Ok(())
            }
        }
    }

    /// Evaluate a node in value position.
    ///
    /// Inside array and object literals only `null`, `true`, `false` and
    /// number literals are accepted as symbols.
    pub fn eval_literal(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Value(value) => Ok(value.clone()),
            Node::Symbol(symbol) => literal_symbol(symbol),
            Node::Word(_) => Err(unexpected_word_declaration()),
            Node::Array(elements) => self.nested(|ctx| {
                elements
                    .iter()
                    .map(|element| ctx.eval_literal(element))
                    .collect::<EvalResult<Vec<_>>>()
                    .map(Value::array)
            }),
            Node::Object(properties) => self.nested(|ctx| {
                properties
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), ctx.eval_literal(value)?)))
                    .collect::<EvalResult<Properties>>()
                    .map(Value::object)
            }),
        }
    }

    /// Resolve and run the word named by `symbol`.
    #[tracing::instrument(level = "trace", skip_all, fields(id = symbol.id()))]
    pub fn resolve_symbol(&mut self, symbol: &Symbol) -> EvalResult {
        let id = symbol.id();

        let dispatched = self
            .stack
            .last()
            .and_then(|receiver| self.runtime.prototype_of(receiver).get(id).cloned());
        if let Some(property) = dispatched {
            trace!("dispatched through prototype");
            return match property {
                Value::Quote(quote) => self.call(&quote),
                value => {
                    self.push(value);
                    Ok(())
                }
            };
        }

        if let Some(quote) = self.dictionary.get(id).map(|word| word.quote().clone()) {
            return self.call(&quote);
        }

        if let Some(quote) = self.runtime.dictionary().get(id).map(|word| word.quote().clone()) {
            return self.call(&quote);
        }

        if let Some(n) = parse_number_literal(id) {
            self.push_number(n);
            return Ok(());
        }

        Err(unrecognized_word(symbol))
    }

    /// Import a module and define its words locally.
    pub fn import(&mut self, name: &str) -> EvalResult {
        let Some(importer) = self.runtime.importer().cloned() else {
            return Err(modules_unavailable());
        };
        debug!(module = name, "importing");
        let runtime = Arc::clone(&self.runtime);
        match importer.import(&runtime, name) {
            Ok(words) => {
                self.dictionary.extend(words);
                Ok(())
            }
            Err(ImportError::Evaluation {
                error: fault @ EvalError::DepthExceeded { .. },
                ..
            }) => Err(fault),
            Err(error) => Err(import_failed(&error)),
        }
    }

    /// Run `f` one level deeper, counted against the runtime's depth limit.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> EvalResult<T>) -> EvalResult<T> {
        self.budget.enter()?;
        let result = ensure_sufficient_stack(|| f(self));
        self.budget.exit();
        result
    }
}

fn literal_symbol(symbol: &Symbol) -> EvalResult<Value> {
    match symbol.id() {
        "null" => Ok(Value::Null),
        "true" => Ok(Value::Boolean(true)),
        "false" => Ok(Value::Boolean(false)),
        "inf" => Ok(Value::Number(f64::INFINITY)),
        "-inf" => Ok(Value::Number(f64::NEG_INFINITY)),
        "nan" => Ok(Value::Number(f64::NAN)),
        id => parse_number_literal(id)
            .map(Value::Number)
            .ok_or_else(|| missing_value(id)),
    }
}
