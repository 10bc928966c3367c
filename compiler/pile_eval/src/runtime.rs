//! The runtime: global dictionary, prototypes and host configuration.
//!
//! A runtime is built once through [`RuntimeBuilder`] and is immutable
//! afterwards. It is shared as `Arc<Runtime>` by every context created from
//! it, on any thread.

mod builder;

pub use builder::{RuntimeBuilder, DEFAULT_MAX_DEPTH};

use std::sync::Arc;

use tracing::debug;

use crate::context::Context;
use crate::dictionary::Dictionary;
use crate::errors::EvalResult;
use crate::import::Importer;
use crate::print_handler::SharedPrintHandler;
use crate::prototypes::Prototypes;
use crate::value::{Heap, Properties, Value};

pub struct Runtime {
    dictionary: Dictionary,
    prototypes: Prototypes,
    args: Vec<String>,
    print_handler: SharedPrintHandler,
    importer: Option<Arc<dyn Importer>>,
    max_depth: Option<usize>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Fresh context with an empty stack and local dictionary.
    pub fn new_context(self: &Arc<Self>) -> Context {
        debug!("creating context");
        Context::new(Arc::clone(self))
    }

    /// Evaluate `source` in a fresh context and return that context.
    pub fn eval(self: &Arc<Self>, source: &str) -> EvalResult<Context> {
        let mut context = self.new_context();
        context.eval(source)?;
        Ok(context)
    }

    #[inline]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[inline]
    pub fn prototypes(&self) -> &Prototypes {
        &self.prototypes
    }

    #[inline]
    pub fn prototype_of<'a>(&'a self, value: &'a Value) -> &'a Heap<Properties> {
        self.prototypes.prototype_of(value)
    }

    /// Command line arguments visible to scripts through `args`.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn importer(&self) -> Option<&Arc<dyn Importer>> {
        self.importer.as_ref()
    }

    /// Call depth limit of each context, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}
