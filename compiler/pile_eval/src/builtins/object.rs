//! Words of the object prototype.
//!
//! `@`, `has?` and `new` see inherited properties; `has-own?` and `delete`
//! only the object's own.

use super::WordTable;
use crate::context::Context;
use crate::errors::{missing_prototype, no_such_property, type_mismatch, EvalResult};
use crate::prototypes::{lookup_property, PROTOTYPE_KEY, PROTO_KEY};
use crate::value::{Properties, Value, ValueKind};

pub const WORDS: WordTable = &[
    ("keys", |ctx| {
        let keys = ctx
            .peek_object()?
            .keys()
            .map(|key| Value::string(key.as_str()))
            .collect();
        ctx.push_array(keys);
        Ok(())
    }),
    ("values", |ctx| {
        let values = ctx.peek_object()?.values().cloned().collect();
        ctx.push_array(values);
        Ok(())
    }),
    // ( key object -- object boolean )
    ("has?", |ctx| {
        let object = ctx.pop_object()?;
        let key = ctx.pop_string()?;
        let found = lookup_property(&object, &key).is_some();
        ctx.push(Value::Object(object));
        ctx.push_boolean(found);
        Ok(())
    }),
    ("has-own?", |ctx| {
        let object = ctx.pop_object()?;
        let key = ctx.pop_string()?;
        let found = object.contains_key(key.as_str());
        ctx.push(Value::Object(object));
        ctx.push_boolean(found);
        Ok(())
    }),
    ("new", new),
    // ( key object -- value )
    ("@", |ctx| {
        let object = ctx.pop_object()?;
        let key = ctx.pop_string()?;
        let value = lookup_property(&object, &key).ok_or_else(|| no_such_property(&key))?;
        ctx.push(value);
        Ok(())
    }),
    // ( value key object -- object )
    ("!", |ctx| {
        let object = ctx.pop_object()?;
        let key = ctx.pop_string()?;
        let value = ctx.pop()?;
        let mut properties = object.into_inner();
        properties.insert(key.to_owned_inner(), value);
        ctx.push_object(properties);
        Ok(())
    }),
    // ( key object -- object )
    ("delete", |ctx| {
        let object = ctx.pop_object()?;
        let key = ctx.pop_string()?;
        let mut properties = object.into_inner();
        if properties.shift_remove(key.as_str()).is_none() {
            return Err(no_such_property(&key));
        }
        ctx.push_object(properties);
        Ok(())
    }),
    // ( object object -- object ): properties of the top object win.
    ("+", |ctx| {
        let a = ctx.pop_object()?;
        let b = ctx.pop_object()?;
        let mut properties = b.into_inner();
        properties.extend(a.iter().map(|(key, value)| (key.clone(), value.clone())));
        ctx.push_object(properties);
        Ok(())
    }),
];

/// `( class -- instance )`
///
/// The instance inherits from the class's `prototype` property. When the
/// prototype has a `constructor` quote, it runs with the instance on top of
/// the stack.
fn new(ctx: &mut Context) -> EvalResult {
    let class = ctx.pop_object()?;
    let prototype = match lookup_property(&class, PROTOTYPE_KEY) {
        Some(Value::Object(prototype)) => prototype,
        Some(other) => return Err(type_mismatch(ValueKind::Object, other.kind())),
        None => return Err(missing_prototype()),
    };

    let mut properties = Properties::new();
    properties.insert(PROTO_KEY.to_string(), Value::Object(prototype.clone()));
    ctx.push_object(properties);

    match lookup_property(&prototype, "constructor") {
        Some(Value::Quote(constructor)) => ctx.call(&constructor),
        _ => Ok(()),
    }
}
