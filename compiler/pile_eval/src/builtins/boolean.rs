//! Words of the boolean prototype.

use super::WordTable;
use crate::context::Context;
use crate::errors::EvalResult;

pub const WORDS: WordTable = &[
    ("and", |ctx| binary(ctx, |b, a| b && a)),
    ("or", |ctx| binary(ctx, |b, a| b || a)),
    ("xor", |ctx| binary(ctx, |b, a| b != a)),
    ("not", |ctx| {
        let a = ctx.pop_boolean()?;
        ctx.push_boolean(!a);
        Ok(())
    }),
    // ( when-true when-false condition -- value )
    ("?", |ctx| {
        let condition = ctx.pop_boolean()?;
        let when_false = ctx.pop()?;
        let when_true = ctx.pop()?;
        ctx.push(if condition { when_true } else { when_false });
        Ok(())
    }),
];

fn binary(ctx: &mut Context, op: impl FnOnce(bool, bool) -> bool) -> EvalResult {
    let a = ctx.pop_boolean()?;
    let b = ctx.pop_boolean()?;
    ctx.push_boolean(op(b, a));
    Ok(())
}
