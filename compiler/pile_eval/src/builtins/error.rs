//! Words of the error prototype.

use super::{position_value, WordTable};

pub const WORDS: WordTable = &[
    ("code", |ctx| {
        let code = ctx.peek_error()?.code.code();
        ctx.push_number(f64::from(code));
        Ok(())
    }),
    ("message", |ctx| {
        let message = ctx.peek_error()?.message.clone();
        match message {
            Some(message) => ctx.push_string(message),
            None => ctx.push_null(),
        }
        Ok(())
    }),
    ("position", |ctx| {
        let position = ctx.peek_error()?.position;
        ctx.push(position_value(position));
        Ok(())
    }),
    ("throw", |ctx| Err(ctx.pop_error()?.into())),
];
