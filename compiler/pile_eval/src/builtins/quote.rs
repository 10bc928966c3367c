//! Words of the quote prototype.
//!
//! The combinators build native quotes that close over their inputs.

use super::WordTable;
use crate::value::Quote;

pub const WORDS: WordTable = &[
    ("call", |ctx| {
        let quote = ctx.pop_quote()?;
        ctx.call(&quote)
    }),
    // ( first second -- quote ): runs `first`, then `second`.
    ("compose", |ctx| {
        let second = ctx.pop_quote()?;
        let first = ctx.pop_quote()?;
        ctx.push_quote(Quote::native(move |ctx| {
            ctx.call(&first)?;
            ctx.call(&second)
        }));
        Ok(())
    }),
    // ( value quote -- quote ): pushes `value`, then runs `quote`.
    ("curry", |ctx| {
        let quote = ctx.pop_quote()?;
        let value = ctx.pop()?;
        ctx.push_quote(Quote::native(move |ctx| {
            ctx.push(value.clone());
            ctx.call(&quote)
        }));
        Ok(())
    }),
    // ( quote -- quote ): the predicate with its answer inverted.
    ("negate", |ctx| {
        let quote = ctx.pop_quote()?;
        ctx.push_quote(Quote::native(move |ctx| {
            ctx.call(&quote)?;
            let answer = ctx.pop_boolean()?;
            ctx.push_boolean(!answer);
            Ok(())
        }));
        Ok(())
    }),
    // ( value quote -- value ): runs `quote` with `value` set aside.
    ("dip", |ctx| {
        let quote = ctx.pop_quote()?;
        let value = ctx.pop()?;
        ctx.call(&quote)?;
        ctx.push(value);
        Ok(())
    }),
    ("2dip", |ctx| {
        let quote = ctx.pop_quote()?;
        let second = ctx.pop()?;
        let first = ctx.pop()?;
        ctx.call(&quote)?;
        ctx.push(first);
        ctx.push(second);
        Ok(())
    }),
    // ( symbol quote -- word )
    (">word", |ctx| {
        let quote = ctx.pop_quote()?;
        let symbol = ctx.pop_symbol()?;
        ctx.push_word(symbol, quote);
        Ok(())
    }),
];
