//! Words of the symbol prototype.

use super::{position_value, WordTable};

pub const WORDS: WordTable = &[
    ("position", |ctx| {
        let position = ctx.peek_symbol()?.position();
        ctx.push(position_value(position));
        Ok(())
    }),
    ("call", |ctx| {
        let symbol = ctx.pop_symbol()?;
        ctx.resolve_symbol(&symbol)
    }),
];
