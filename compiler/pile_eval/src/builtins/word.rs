//! Words of the word prototype.

use super::WordTable;
use crate::value::Value;

pub const WORDS: WordTable = &[
    ("symbol", |ctx| {
        let symbol = ctx.peek_word()?.symbol().clone();
        ctx.push(Value::Symbol(symbol));
        Ok(())
    }),
    ("quote", |ctx| {
        let quote = ctx.peek_word()?.quote().clone();
        ctx.push_quote(quote);
        Ok(())
    }),
    ("call", |ctx| {
        let word = ctx.pop_word()?;
        ctx.call(word.quote())
    }),
    ("define", |ctx| {
        let word = ctx.pop_word()?;
        ctx.define(word);
        Ok(())
    }),
];
