//! Words of the array prototype.
//!
//! Queries (`length`, `includes?`, `find`, ...) leave the array on the stack
//! and push their answer above it. Everything else consumes the array.

use super::{repeat_count, resolve_index, WordTable};
use crate::context::Context;
use crate::errors::{
    array_empty, array_index_out_of_bounds, invalid_repeat_count, reduce_empty, EvalResult,
};
use crate::value::{Heap, Quote, Value};

pub const WORDS: WordTable = &[
    ("length", |ctx| {
        let len = ctx.peek_array()?.len();
        ctx.push_number(len as f64);
        Ok(())
    }),
    ("includes?", |ctx| {
        let array = ctx.pop_array()?;
        let value = ctx.pop()?;
        let found = array.contains(&value);
        ctx.push(Value::Array(array));
        ctx.push_boolean(found);
        Ok(())
    }),
    ("index-of", |ctx| {
        let array = ctx.pop_array()?;
        let value = ctx.pop()?;
        let index = array.iter().position(|element| *element == value);
        ctx.push(Value::Array(array));
        push_index(ctx, index);
        Ok(())
    }),
    ("find", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        ctx.push(Value::Array(array.clone()));
        let index = find_index(ctx, &array, &quote)?;
        ctx.push(index.map_or(Value::Null, |i| array[i].clone()));
        Ok(())
    }),
    ("find-index", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        ctx.push(Value::Array(array.clone()));
        let index = find_index(ctx, &array, &quote)?;
        push_index(ctx, index);
        Ok(())
    }),
    ("every?", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        ctx.push(Value::Array(array.clone()));
        let mut every = true;
        for element in array.iter() {
            if !test(ctx, &quote, element)? {
                every = false;
                break;
            }
        }
        ctx.push_boolean(every);
        Ok(())
    }),
    ("some?", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        ctx.push(Value::Array(array.clone()));
        let some = find_index(ctx, &array, &quote)?.is_some();
        ctx.push_boolean(some);
        Ok(())
    }),
    ("reverse", |ctx| {
        let mut elements = ctx.pop_array()?.into_inner();
        elements.reverse();
        ctx.push_array(elements);
        Ok(())
    }),
    ("uniq", |ctx| {
        let array = ctx.pop_array()?;
        ctx.push_array(union([array.as_slice()]));
        Ok(())
    }),
    ("extract", |ctx| {
        let array = ctx.pop_array()?;
        for element in array.iter().rev() {
            ctx.push(element.clone());
        }
        Ok(())
    }),
    ("join", |ctx| {
        let array = ctx.pop_array()?;
        let separator = ctx.pop_string()?;
        let joined = array
            .iter()
            .map(Value::to_display_string)
            .collect::<Vec<_>>()
            .join(separator.as_str());
        ctx.push_string(joined);
        Ok(())
    }),
    (">quote", |ctx| {
        let array = ctx.pop_array()?;
        ctx.push_quote(Quote::from_values(array.into_inner()));
        Ok(())
    }),
    ("for-each", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        for element in array.iter() {
            ctx.push(element.clone());
            ctx.call(&quote)?;
        }
        Ok(())
    }),
    ("2for-each", |ctx| {
        let b = ctx.pop_array()?;
        let a = ctx.pop_array()?;
        let quote = ctx.pop_quote()?;
        for (x, y) in a.iter().zip(b.iter()) {
            ctx.push(x.clone());
            ctx.push(y.clone());
            ctx.call(&quote)?;
        }
        Ok(())
    }),
    ("map", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        let mut result = Vec::with_capacity(array.len());
        for element in array.iter() {
            ctx.push(element.clone());
            ctx.call(&quote)?;
            result.push(ctx.pop()?);
        }
        ctx.push_array(result);
        Ok(())
    }),
    ("2map", |ctx| {
        let b = ctx.pop_array()?;
        let a = ctx.pop_array()?;
        let quote = ctx.pop_quote()?;
        let mut result = Vec::with_capacity(a.len().min(b.len()));
        for (x, y) in a.iter().zip(b.iter()) {
            ctx.push(x.clone());
            ctx.push(y.clone());
            ctx.call(&quote)?;
            result.push(ctx.pop()?);
        }
        ctx.push_array(result);
        Ok(())
    }),
    ("filter", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        let mut result = Vec::new();
        for element in array.iter() {
            if test(ctx, &quote, element)? {
                result.push(element.clone());
            }
        }
        ctx.push_array(result);
        Ok(())
    }),
    ("reduce", |ctx| {
        let (array, quote) = receiver_and_quote(ctx)?;
        let Some((first, rest)) = array.split_first() else {
            return Err(reduce_empty());
        };
        ctx.push(first.clone());
        for element in rest {
            ctx.push(element.clone());
            ctx.call(&quote)?;
        }
        Ok(())
    }),
    ("push", |ctx| {
        let array = ctx.pop_array()?;
        let value = ctx.pop()?;
        let mut elements = array.into_inner();
        elements.push(value);
        ctx.push_array(elements);
        Ok(())
    }),
    ("pop", |ctx| {
        let mut elements = ctx.pop_array()?.into_inner();
        let last = elements.pop().ok_or_else(array_empty)?;
        ctx.push_array(elements);
        ctx.push(last);
        Ok(())
    }),
    ("+", |ctx| {
        let a = ctx.pop_array()?;
        let b = ctx.pop_array()?;
        let mut elements = b.into_inner();
        elements.extend(a.iter().cloned());
        ctx.push_array(elements);
        Ok(())
    }),
    ("*", |ctx| {
        let array = ctx.pop_array()?;
        let count = repeat_count(ctx.pop_number()?, array.len()).ok_or_else(invalid_repeat_count)?;
        let elements = (0..count).flat_map(|_| array.iter().cloned()).collect();
        ctx.push_array(elements);
        Ok(())
    }),
    ("&", |ctx| {
        let a = ctx.pop_array()?;
        let b = ctx.pop_array()?;
        let elements = b.iter().filter(|value| a.contains(value)).cloned().collect();
        ctx.push_array(elements);
        Ok(())
    }),
    ("|", |ctx| {
        let a = ctx.pop_array()?;
        let b = ctx.pop_array()?;
        ctx.push_array(union([b.as_slice(), a.as_slice()]));
        Ok(())
    }),
    ("@", |ctx| {
        let array = ctx.pop_array()?;
        let index = ctx.pop_number()?;
        let index = resolve_index(index, array.len()).ok_or_else(array_index_out_of_bounds)?;
        ctx.push(array[index].clone());
        Ok(())
    }),
    ("!", |ctx| {
        let array = ctx.pop_array()?;
        let index = ctx.pop_number()?;
        let index = resolve_index(index, array.len()).ok_or_else(array_index_out_of_bounds)?;
        let value = ctx.pop()?;
        let mut elements = array.into_inner();
        elements[index] = value;
        ctx.push_array(elements);
        Ok(())
    }),
];

/// Pops `( quote array -- )`, the shape shared by the higher-order words.
fn receiver_and_quote(ctx: &mut Context) -> EvalResult<(Heap<Vec<Value>>, Quote)> {
    let array = ctx.pop_array()?;
    let quote = ctx.pop_quote()?;
    Ok((array, quote))
}

/// Run a predicate quote on `value` and pop its boolean answer.
fn test(ctx: &mut Context, quote: &Quote, value: &Value) -> EvalResult<bool> {
    ctx.push(value.clone());
    ctx.call(quote)?;
    ctx.pop_boolean()
}

fn find_index(ctx: &mut Context, array: &[Value], quote: &Quote) -> EvalResult<Option<usize>> {
    for (index, element) in array.iter().enumerate() {
        if test(ctx, quote, element)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

fn push_index(ctx: &mut Context, index: Option<usize>) {
    match index {
        Some(index) => ctx.push_number(index as f64),
        None => ctx.push_null(),
    }
}

/// Elements of `arrays` in order, without duplicates.
fn union<const N: usize>(arrays: [&[Value]; N]) -> Vec<Value> {
    let mut result: Vec<Value> = Vec::new();
    for element in arrays.into_iter().flatten() {
        if !result.contains(element) {
            result.push(element.clone());
        }
    }
    result
}
