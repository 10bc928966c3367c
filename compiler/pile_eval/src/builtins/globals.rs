//! Words of the global dictionary.

use std::time::{SystemTime, UNIX_EPOCH};

use super::WordTable;
use crate::context::Context;
use crate::errors::{
    invalid_code_point, negative_array_size, stack_underflow, EvalError, EvalResult,
};
use crate::prototypes::instance_of;
use crate::value::{ErrorCode, Node, Quote, Symbol, Value, ValueKind, Word};

pub const WORDS: WordTable = &[
    // Constants
    ("null", |ctx| {
        ctx.push_null();
        Ok(())
    }),
    ("true", |ctx| {
        ctx.push_boolean(true);
        Ok(())
    }),
    ("false", |ctx| {
        ctx.push_boolean(false);
        Ok(())
    }),
    ("e", |ctx| {
        ctx.push_number(std::f64::consts::E);
        Ok(())
    }),
    ("pi", |ctx| {
        ctx.push_number(std::f64::consts::PI);
        Ok(())
    }),
    ("inf", |ctx| {
        ctx.push_number(f64::INFINITY);
        Ok(())
    }),
    ("-inf", |ctx| {
        ctx.push_number(f64::NEG_INFINITY);
        Ok(())
    }),
    ("nan", |ctx| {
        ctx.push_number(f64::NAN);
        Ok(())
    }),
    // Stack manipulation
    ("nop", |_| Ok(())),
    ("clear", |ctx| {
        ctx.clear();
        Ok(())
    }),
    ("depth", |ctx| {
        ctx.push_number(ctx.stack().len() as f64);
        Ok(())
    }),
    ("drop", |ctx| ctx.pop().map(drop)),
    ("2drop", |ctx| {
        ctx.pop()?;
        ctx.pop()?;
        Ok(())
    }),
    ("dup", |ctx| {
        let a = ctx.peek()?.clone();
        ctx.push(a);
        Ok(())
    }),
    ("2dup", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        push_all(ctx, [b.clone(), a.clone(), b, a]);
        Ok(())
    }),
    ("nip", |ctx| {
        let a = ctx.pop()?;
        ctx.pop()?;
        ctx.push(a);
        Ok(())
    }),
    ("over", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        push_all(ctx, [b.clone(), a, b]);
        Ok(())
    }),
    ("rot", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        let c = ctx.pop()?;
        push_all(ctx, [b, a, c]);
        Ok(())
    }),
    ("swap", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        push_all(ctx, [a, b]);
        Ok(())
    }),
    ("tuck", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        push_all(ctx, [a.clone(), b, a]);
        Ok(())
    }),
    // Type tests
    ("array?", |ctx| is_kind(ctx, ValueKind::Array)),
    ("boolean?", |ctx| is_kind(ctx, ValueKind::Boolean)),
    ("error?", |ctx| is_kind(ctx, ValueKind::Error)),
    ("number?", |ctx| is_kind(ctx, ValueKind::Number)),
    ("null?", |ctx| is_kind(ctx, ValueKind::Null)),
    ("object?", |ctx| is_kind(ctx, ValueKind::Object)),
    ("quote?", |ctx| is_kind(ctx, ValueKind::Quote)),
    ("string?", |ctx| is_kind(ctx, ValueKind::String)),
    ("symbol?", |ctx| is_kind(ctx, ValueKind::Symbol)),
    ("word?", |ctx| is_kind(ctx, ValueKind::Word)),
    ("typeof", |ctx| {
        let kind = ctx.peek()?.kind();
        ctx.push_string(kind.name());
        Ok(())
    }),
    ("instance-of?", instance_of_word),
    ("proto", |ctx| {
        let proto = ctx.runtime().prototype_of(ctx.peek()?).clone();
        ctx.push(Value::Object(proto));
        Ok(())
    }),
    // Conversions
    (">boolean", |ctx| {
        let b = match ctx.pop()? {
            Value::Null => false,
            Value::Boolean(b) => b,
            _ => true,
        };
        ctx.push_boolean(b);
        Ok(())
    }),
    (">string", |ctx| {
        let text = ctx.pop()?.to_display_string();
        ctx.push_string(text);
        Ok(())
    }),
    (">source", |ctx| {
        let text = ctx.pop()?.to_source();
        ctx.push_string(text);
        Ok(())
    }),
    ("1array", |ctx| {
        let a = ctx.pop()?;
        ctx.push_array(vec![a]);
        Ok(())
    }),
    ("2array", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        ctx.push_array(vec![b, a]);
        Ok(())
    }),
    ("narray", |ctx| {
        let n = ctx.pop_number()?;
        if n < 0.0 {
            return Err(negative_array_size());
        }
        let n = n as usize;
        if n > ctx.stack().len() {
            return Err(stack_underflow());
        }
        let elements = ctx.stack.split_off(ctx.stack.len() - n);
        ctx.push_array(elements);
        Ok(())
    }),
    // Control flow
    ("if", |ctx| {
        let quote = ctx.pop_quote()?;
        if ctx.pop_boolean()? {
            ctx.call(&quote)?;
        }
        Ok(())
    }),
    ("if-else", |ctx| {
        let otherwise = ctx.pop_quote()?;
        let then = ctx.pop_quote()?;
        if ctx.pop_boolean()? {
            ctx.call(&then)
        } else {
            ctx.call(&otherwise)
        }
    }),
    ("while", |ctx| {
        let body = ctx.pop_quote()?;
        let test = ctx.pop_quote()?;
        loop {
            ctx.call(&test)?;
            if !ctx.pop_boolean()? {
                return Ok(());
            }
            ctx.call(&body)?;
        }
    }),
    ("try", |ctx| {
        let catch = ctx.pop_quote()?;
        let body = ctx.pop_quote()?;
        match ctx.call(&body) {
            Err(EvalError::Raised(error)) => {
                ctx.push(Value::Error(error));
                ctx.call(&catch)
            }
            other => other,
        }
    }),
    ("try-else", |ctx| {
        let otherwise = ctx.pop_quote()?;
        let catch = ctx.pop_quote()?;
        let body = ctx.pop_quote()?;
        match ctx.call(&body) {
            Ok(()) => ctx.call(&otherwise),
            Err(EvalError::Raised(error)) => {
                ctx.push(Value::Error(error));
                ctx.call(&catch)
            }
            Err(fault) => Err(fault),
        }
    }),
    ("compile", |ctx| {
        let source = ctx.pop_string()?;
        let quote = ctx.compile(&source)?;
        ctx.push_quote(quote);
        Ok(())
    }),
    // Dictionaries and modules
    ("globals", |ctx| {
        let properties = ctx.runtime().dictionary().to_properties();
        ctx.push_object(properties);
        Ok(())
    }),
    ("locals", |ctx| {
        let properties = ctx.dictionary().to_properties();
        ctx.push_object(properties);
        Ok(())
    }),
    ("const", |ctx| {
        let id = ctx.pop_string()?;
        let value = ctx.pop()?;
        let quote = Quote::compiled(vec![Node::Value(value)]);
        ctx.define(Word::new(Symbol::new(id.as_str()), quote));
        Ok(())
    }),
    ("import", |ctx| {
        let name = ctx.pop_string()?;
        ctx.import(&name)
    }),
    ("args", |ctx| {
        let args = ctx
            .runtime()
            .args()
            .iter()
            .map(|arg| Value::string(arg.as_str()))
            .collect();
        ctx.push_array(args);
        Ok(())
    }),
    ("version", |ctx| {
        let version = ctx.runtime().version();
        ctx.push_string(version);
        Ok(())
    }),
    // Error constructors
    ("syntax-error", |ctx| new_error(ctx, ErrorCode::Syntax)),
    ("reference-error", |ctx| new_error(ctx, ErrorCode::Reference)),
    ("type-error", |ctx| new_error(ctx, ErrorCode::Type)),
    ("value-error", |ctx| new_error(ctx, ErrorCode::Value)),
    ("range-error", |ctx| new_error(ctx, ErrorCode::Range)),
    ("import-error", |ctx| new_error(ctx, ErrorCode::Import)),
    ("unknown-error", |ctx| new_error(ctx, ErrorCode::Unknown)),
    // Output
    ("print", |ctx| {
        let text = ctx.pop()?.to_display_string();
        ctx.runtime().print_handler().print(&text);
        Ok(())
    }),
    ("println", |ctx| {
        let text = ctx.pop()?.to_display_string();
        ctx.runtime().print_handler().println(&text);
        Ok(())
    }),
    ("emit", |ctx| {
        let n = ctx.pop_number()?;
        let c = (n.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&n))
            .then(|| char::from_u32(n as u32))
            .flatten()
            .ok_or_else(|| invalid_code_point(n))?;
        ctx.runtime().print_handler().print(c.encode_utf8(&mut [0; 4]));
        Ok(())
    }),
    ("now", |ctx| {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64() * 1000.0);
        ctx.push_number(millis.floor());
        Ok(())
    }),
    // Equality
    ("=", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        ctx.push_boolean(b == a);
        Ok(())
    }),
    ("!=", |ctx| {
        let a = ctx.pop()?;
        let b = ctx.pop()?;
        ctx.push_boolean(b != a);
        Ok(())
    }),
];

fn push_all<const N: usize>(ctx: &mut Context, values: [Value; N]) {
    for value in values {
        ctx.push(value);
    }
}

/// `( value -- value boolean )`
fn is_kind(ctx: &mut Context, kind: ValueKind) -> EvalResult {
    let matches = ctx.peek()?.kind() == kind;
    ctx.push_boolean(matches);
    Ok(())
}

/// `( value class -- value boolean )`
fn instance_of_word(ctx: &mut Context) -> EvalResult {
    let class = ctx.pop_object()?;
    let proto = ctx.runtime().prototype_of(ctx.peek()?).clone();
    ctx.push_boolean(instance_of(&proto, &class));
    Ok(())
}

/// `( message -- error )`, where the message may be null.
fn new_error(ctx: &mut Context, code: ErrorCode) -> EvalResult {
    let error = if ctx.peek()?.is_null() {
        ctx.pop()?;
        ctx.error(code, None)
    } else {
        let message = ctx.pop_string()?;
        ctx.error(code, Some(message.as_str()))
    };
    ctx.push(Value::Error(error));
    Ok(())
}
