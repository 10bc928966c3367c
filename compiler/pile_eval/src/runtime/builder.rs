//! `RuntimeBuilder` for creating runtimes with various configurations.

use std::sync::Arc;

use indexmap::indexmap;
use tracing::debug;

use super::Runtime;
use crate::builtins::{self, WordTable};
use crate::context::Context;
use crate::dictionary::Dictionary;
use crate::errors::EvalResult;
use crate::import::Importer;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::prototypes::{Prototypes, PROTOTYPE_KEY, PROTO_KEY};
use crate::value::{Node, Quote, Symbol, Value, ValueKind, Word};

/// Call depth limit used unless the builder is told otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Builder for [`Runtime`].
///
/// Defaults: no arguments, output to stdout, no importer (so `import` fails
/// with an import error) and a call depth limit of [`DEFAULT_MAX_DEPTH`].
pub struct RuntimeBuilder {
    args: Vec<String>,
    print_handler: Option<SharedPrintHandler>,
    importer: Option<Arc<dyn Importer>>,
    max_depth: Option<usize>,
    globals: Vec<Word>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        RuntimeBuilder {
            args: Vec::new(),
            print_handler: None,
            importer: None,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            globals: Vec::new(),
        }
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    #[must_use]
    pub fn importer(mut self, importer: Arc<dyn Importer>) -> Self {
        self.importer = Some(importer);
        self
    }

    /// Call depth limit per context. `None` removes the limit.
    #[must_use]
    pub fn max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Define a host word in the global dictionary. Host words replace
    /// built-in words of the same name.
    #[must_use]
    pub fn global(
        mut self,
        name: &str,
        callback: impl Fn(&mut Context) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        self.globals
            .push(Word::new(Symbol::new(name), Quote::native(callback)));
        self
    }

    pub fn build(self) -> Arc<Runtime> {
        let prototypes = Prototypes::new();
        let mut dictionary = Dictionary::new();
        dictionary.extend(table_words(builtins::globals::WORDS));
        dictionary.extend(type_words(&prototypes));
        dictionary.extend(self.globals);

        debug!(
            globals = dictionary.len(),
            max_depth = ?self.max_depth,
            imports = self.importer.is_some(),
            "runtime built"
        );

        Arc::new(Runtime {
            dictionary,
            prototypes,
            args: self.args,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            importer: self.importer,
            max_depth: self.max_depth,
        })
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn table_words(table: WordTable) -> impl Iterator<Item = Word> {
    table
        .iter()
        .map(|&(name, callback)| Word::new(Symbol::new(name), Quote::native(callback)))
}

/// One word per kind, pushing `{ "__proto__": <object prototype>,
/// "prototype": <kind prototype> }` for use with `instance-of?` and `new`.
fn type_words(prototypes: &Prototypes) -> Vec<Word> {
    let object = prototypes.for_kind(ValueKind::Object);
    prototypes
        .type_words()
        .map(|(name, prototype)| {
            let class = Value::object(indexmap! {
                PROTO_KEY.to_string() => Value::Object(object.clone()),
                PROTOTYPE_KEY.to_string() => Value::Object(prototype.clone()),
            });
            Word::new(Symbol::new(name), Quote::compiled(vec![Node::Value(class)]))
        })
        .collect()
}
