//! Words of the number prototype.
//!
//! Binary words take their left operand from below the right one, so
//! `10 3 -` is `7`. Bitwise words work on 32-bit two's-complement integers.

use super::WordTable;
use crate::context::Context;
use crate::errors::EvalResult;
use crate::value::to_int32;

pub const WORDS: WordTable = &[
    ("nan?", |ctx| test(ctx, f64::is_nan)),
    ("finite?", |ctx| test(ctx, f64::is_finite)),
    // ( quote count -- )
    ("times", |ctx| {
        let count = ctx.pop_number()?.abs();
        let quote = ctx.pop_quote()?;
        let mut remaining = count;
        while remaining >= 1.0 {
            remaining -= 1.0;
            ctx.call(&quote)?;
        }
        Ok(())
    }),
    ("abs", |ctx| unary(ctx, f64::abs)),
    ("round", |ctx| unary(ctx, f64::round)),
    ("floor", |ctx| unary(ctx, f64::floor)),
    ("ceil", |ctx| unary(ctx, f64::ceil)),
    ("max", |ctx| arithmetic(ctx, f64::max)),
    ("min", |ctx| arithmetic(ctx, f64::min)),
    // ( number min max -- number )
    ("clamp", |ctx| {
        let max = ctx.pop_number()?;
        let min = ctx.pop_number()?;
        let n = ctx.pop_number()?;
        ctx.push_number(n.max(min).min(max));
        Ok(())
    }),
    // ( number min max -- boolean )
    ("in-range?", |ctx| {
        let max = ctx.pop_number()?;
        let min = ctx.pop_number()?;
        let n = ctx.pop_number()?;
        ctx.push_boolean(n >= min && n <= max);
        Ok(())
    }),
    ("+", |ctx| arithmetic(ctx, |b, a| b + a)),
    ("-", |ctx| arithmetic(ctx, |b, a| b - a)),
    ("*", |ctx| arithmetic(ctx, |b, a| b * a)),
    ("/", |ctx| arithmetic(ctx, |b, a| b / a)),
    ("%", |ctx| arithmetic(ctx, |b, a| b % a)),
    ("&", |ctx| bitwise(ctx, |b, a| b & a)),
    ("|", |ctx| bitwise(ctx, |b, a| b | a)),
    ("^", |ctx| bitwise(ctx, |b, a| b ^ a)),
    ("<<", |ctx| bitwise(ctx, |b, a| b.wrapping_shl(a as u32))),
    (">>", |ctx| bitwise(ctx, |b, a| b.wrapping_shr(a as u32))),
    ("~", |ctx| {
        let a = to_int32(ctx.pop_number()?);
        ctx.push_number(f64::from(!a));
        Ok(())
    }),
    ("<", |ctx| compare(ctx, |b, a| b < a)),
    (">", |ctx| compare(ctx, |b, a| b > a)),
    ("<=", |ctx| compare(ctx, |b, a| b <= a)),
    (">=", |ctx| compare(ctx, |b, a| b >= a)),
];

/// `( number -- number boolean )`
fn test(ctx: &mut Context, predicate: fn(f64) -> bool) -> EvalResult {
    let n = ctx.peek_number()?;
    ctx.push_boolean(predicate(n));
    Ok(())
}

fn unary(ctx: &mut Context, op: fn(f64) -> f64) -> EvalResult {
    let a = ctx.pop_number()?;
    ctx.push_number(op(a));
    Ok(())
}

fn arithmetic(ctx: &mut Context, op: impl FnOnce(f64, f64) -> f64) -> EvalResult {
    let a = ctx.pop_number()?;
    let b = ctx.pop_number()?;
    ctx.push_number(op(b, a));
    Ok(())
}

fn bitwise(ctx: &mut Context, op: impl FnOnce(i32, i32) -> i32) -> EvalResult {
    let a = to_int32(ctx.pop_number()?);
    let b = to_int32(ctx.pop_number()?);
    ctx.push_number(f64::from(op(b, a)));
    Ok(())
}

fn compare(ctx: &mut Context, op: impl FnOnce(f64, f64) -> bool) -> EvalResult {
    let a = ctx.pop_number()?;
    let b = ctx.pop_number()?;
    ctx.push_boolean(op(b, a));
    Ok(())
}
