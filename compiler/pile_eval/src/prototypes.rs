//! Prototype registry and property lookup.
//!
//! Every value has a prototype object whose own properties are the words
//! that can be dispatched on it. Objects may name their own prototype through
//! a `__proto__` property; everything else uses the prototype registered for
//! its kind.

use crate::builtins::{self, WordTable};
use crate::value::{Heap, Properties, Quote, Value, ValueKind};

pub const PROTO_KEY: &str = "__proto__";
pub const PROTOTYPE_KEY: &str = "prototype";

/// The built-in prototype objects, one per kind.
///
/// Null and objects without a `__proto__` use the object prototype.
pub struct Prototypes {
    array: Heap<Properties>,
    boolean: Heap<Properties>,
    error: Heap<Properties>,
    number: Heap<Properties>,
    object: Heap<Properties>,
    quote: Heap<Properties>,
    string: Heap<Properties>,
    symbol: Heap<Properties>,
    word: Heap<Properties>,
}

impl Prototypes {
    pub(crate) fn new() -> Self {
        let object = Heap::new(table_properties(builtins::object::WORDS));
        // Kind prototypes inherit from the object prototype.
        let derived = |table: WordTable| {
            let mut properties = Properties::with_capacity(table.len() + 1);
            properties.insert(PROTO_KEY.to_string(), Value::Object(object.clone()));
            properties.extend(table_properties(table));
            Heap::new(properties)
        };
        Prototypes {
            array: derived(builtins::array::WORDS),
            boolean: derived(builtins::boolean::WORDS),
            error: derived(builtins::error::WORDS),
            number: derived(builtins::number::WORDS),
            quote: derived(builtins::quote::WORDS),
            string: derived(builtins::string::WORDS),
            symbol: derived(builtins::symbol::WORDS),
            word: derived(builtins::word::WORDS),
            object,
        }
    }

    /// Registered prototype of a kind.
    pub fn for_kind(&self, kind: ValueKind) -> &Heap<Properties> {
        match kind {
            ValueKind::Null | ValueKind::Object => &self.object,
            ValueKind::Boolean => &self.boolean,
            ValueKind::Number => &self.number,
            ValueKind::String => &self.string,
            ValueKind::Symbol => &self.symbol,
            ValueKind::Array => &self.array,
            ValueKind::Quote => &self.quote,
            ValueKind::Word => &self.word,
            ValueKind::Error => &self.error,
        }
    }

    /// Prototype used to dispatch words on `value`.
    pub fn prototype_of<'a>(&'a self, value: &'a Value) -> &'a Heap<Properties> {
        if let Value::Object(properties) = value {
            if let Some(Value::Object(proto)) = properties.get(PROTO_KEY) {
                return proto;
            }
        }
        self.for_kind(value.kind())
    }

    /// Kinds that get a type word in the global dictionary, with its name.
    pub(crate) fn type_words(&self) -> impl Iterator<Item = (&'static str, &Heap<Properties>)> {
        [
            ValueKind::Array,
            ValueKind::Boolean,
            ValueKind::Error,
            ValueKind::Number,
            ValueKind::Object,
            ValueKind::Quote,
            ValueKind::String,
            ValueKind::Symbol,
            ValueKind::Word,
        ]
        .into_iter()
        .map(|kind| (kind.name(), self.for_kind(kind)))
    }
}

fn table_properties(table: WordTable) -> Properties {
    table
        .iter()
        .map(|&(name, callback)| (name.to_string(), Value::Quote(Quote::native(callback))))
        .collect()
}

/// Look `key` up on `object`, then along its `__proto__` chain.
pub fn lookup_property(object: &Heap<Properties>, key: &str) -> Option<Value> {
    let mut current = object.clone();
    loop {
        if let Some(value) = current.get(key) {
            return Some(value.clone());
        }
        let next = match current.get(PROTO_KEY) {
            Some(Value::Object(next)) => next.clone(),
            _ => return None,
        };
        current = next;
    }
}

/// Whether `proto` appears on the chain starting at the `prototype` property
/// of `class`, compared by identity.
pub fn instance_of(proto: &Heap<Properties>, class: &Heap<Properties>) -> bool {
    let Some(Value::Object(mut current)) = lookup_property(class, PROTOTYPE_KEY) else {
        return false;
    };
    loop {
        if current.ptr_eq(proto) {
            return true;
        }
        let next = match current.get(PROTO_KEY) {
            Some(Value::Object(next)) => next.clone(),
            _ => return false,
        };
        current = next;
    }
}
