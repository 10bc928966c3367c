//! Words of the string prototype.
//!
//! Lengths and indices count characters. Queries leave the string on the
//! stack; transformations replace it.

use super::{repeat_count, resolve_index, WordTable, MAX_REPEATED_LEN};
use crate::context::Context;
use crate::errors::{invalid_repeat_count, not_a_number, string_index_out_of_bounds, EvalResult};
use crate::value::Value;

pub const WORDS: WordTable = &[
    ("length", |ctx| {
        let len = ctx.peek_string()?.chars().count();
        ctx.push_number(len as f64);
        Ok(())
    }),
    ("chars", |ctx| {
        let chars = ctx
            .peek_string()?
            .chars()
            .map(|c| Value::string(c.to_string()))
            .collect();
        ctx.push_array(chars);
        Ok(())
    }),
    ("runes", |ctx| {
        let runes = ctx
            .peek_string()?
            .chars()
            .map(|c| Value::Number(f64::from(u32::from(c))))
            .collect();
        ctx.push_array(runes);
        Ok(())
    }),
    ("words", |ctx| {
        let words = ctx
            .peek_string()?
            .split_whitespace()
            .map(Value::from)
            .collect();
        ctx.push_array(words);
        Ok(())
    }),
    ("lines", |ctx| {
        let lines = ctx.peek_string()?.lines().map(Value::from).collect();
        ctx.push_array(lines);
        Ok(())
    }),
    ("includes?", |ctx| {
        search(ctx, |s, needle| Value::Boolean(s.contains(needle)))
    }),
    ("index-of", |ctx| {
        search(ctx, |s, needle| match s.find(needle) {
            Some(byte) => Value::Number(s[..byte].chars().count() as f64),
            None => Value::Null,
        })
    }),
    ("starts-with?", |ctx| {
        search(ctx, |s, prefix| Value::Boolean(s.starts_with(prefix)))
    }),
    ("ends-with?", |ctx| {
        search(ctx, |s, suffix| Value::Boolean(s.ends_with(suffix)))
    }),
    ("space?", |ctx| all_chars(ctx, char::is_whitespace)),
    ("lower-case?", |ctx| all_chars(ctx, char::is_lowercase)),
    ("upper-case?", |ctx| all_chars(ctx, char::is_uppercase)),
    ("reverse", |ctx| transform(ctx, |s| s.chars().rev().collect())),
    ("upper-case", |ctx| transform(ctx, str::to_uppercase)),
    ("lower-case", |ctx| transform(ctx, str::to_lowercase)),
    ("swap-case", |ctx| {
        transform(ctx, |s| {
            s.chars()
                .flat_map(|c| -> Box<dyn Iterator<Item = char>> {
                    if c.is_uppercase() {
                        Box::new(c.to_lowercase())
                    } else {
                        Box::new(c.to_uppercase())
                    }
                })
                .collect()
        })
    }),
    ("capitalize", |ctx| {
        transform(ctx, |s| {
            let mut chars = s.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
    }),
    ("trim", |ctx| transform(ctx, |s| s.trim().to_string())),
    ("trim-left", |ctx| transform(ctx, |s| s.trim_start().to_string())),
    ("trim-right", |ctx| transform(ctx, |s| s.trim_end().to_string())),
    ("pad-left", |ctx| pad(ctx, Side::Left)),
    ("pad-right", |ctx| pad(ctx, Side::Right)),
    // ( start end string -- string ), end exclusive
    ("substring", |ctx| {
        let s = ctx.pop_string()?;
        let end = ctx.pop_number()?;
        let start = ctx.pop_number()?;
        let chars: Vec<char> = s.chars().collect();
        let bound = |n: f64| {
            let n = n.trunc();
            let n = if n < 0.0 { n + chars.len() as f64 } else { n };
            (0.0..=chars.len() as f64).contains(&n).then_some(n as usize)
        };
        match (bound(start), bound(end)) {
            (Some(start), Some(end)) if start <= end => {
                ctx.push_string(chars[start..end].iter().collect::<String>());
                Ok(())
            }
            _ => Err(string_index_out_of_bounds()),
        }
    }),
    // ( separator string -- array )
    ("split", |ctx| {
        let s = ctx.pop_string()?;
        let separator = ctx.pop_string()?;
        let parts = if separator.is_empty() {
            s.chars().map(|c| Value::string(c.to_string())).collect()
        } else {
            s.split(separator.as_str()).map(Value::from).collect()
        };
        ctx.push_array(parts);
        Ok(())
    }),
    // ( old new string -- string )
    ("replace", |ctx| {
        let s = ctx.pop_string()?;
        let replacement = ctx.pop_string()?;
        let pattern = ctx.pop_string()?;
        let replaced = if pattern.is_empty() {
            s.to_owned_inner()
        } else {
            s.replace(pattern.as_str(), &replacement)
        };
        ctx.push_string(replaced);
        Ok(())
    }),
    (">number", |ctx| {
        let s = ctx.pop_string()?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(not_a_number());
        }
        let n = trimmed.parse::<f64>().map_err(|_| not_a_number())?;
        ctx.push_number(n);
        Ok(())
    }),
    ("+", |ctx| {
        let a = ctx.pop_string()?;
        let b = ctx.pop_string()?;
        ctx.push_string(format!("{}{}", b.as_str(), a.as_str()));
        Ok(())
    }),
    // ( count string -- string )
    ("*", |ctx| {
        let s = ctx.pop_string()?;
        let count = repeat_count(ctx.pop_number()?, s.len()).ok_or_else(invalid_repeat_count)?;
        ctx.push_string(s.repeat(count));
        Ok(())
    }),
    // ( index string -- string )
    ("@", |ctx| {
        let s = ctx.pop_string()?;
        let index = ctx.pop_number()?;
        let len = s.chars().count();
        let c = resolve_index(index, len)
            .and_then(|index| s.chars().nth(index))
            .ok_or_else(string_index_out_of_bounds)?;
        ctx.push_string(c.to_string());
        Ok(())
    }),
    (">symbol", |ctx| {
        let s = ctx.pop_string()?;
        ctx.push_symbol(s.as_str());
        Ok(())
    }),
];

/// `( needle string -- string answer )`
fn search(ctx: &mut Context, answer: impl FnOnce(&str, &str) -> Value) -> EvalResult {
    let s = ctx.pop_string()?;
    let needle = ctx.pop_string()?;
    let result = answer(&s, &needle);
    ctx.push(Value::String(s));
    ctx.push(result);
    Ok(())
}

/// `( string -- string boolean )`, false for the empty string.
fn all_chars(ctx: &mut Context, predicate: fn(char) -> bool) -> EvalResult {
    let s = ctx.peek_string()?;
    let answer = !s.is_empty() && s.chars().all(predicate);
    ctx.push_boolean(answer);
    Ok(())
}

fn transform(ctx: &mut Context, op: impl FnOnce(&str) -> String) -> EvalResult {
    let s = ctx.pop_string()?;
    ctx.push_string(op(&s));
    Ok(())
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

/// `( padding width string -- string )`
///
/// Repeats `padding` on one side until the string is `width` characters
/// long. Longer strings and empty padding leave the string as it is.
fn pad(ctx: &mut Context, side: Side) -> EvalResult {
    let s = ctx.pop_string()?;
    let width = ctx.pop_number()?;
    let padding = ctx.pop_string()?;
    if width > MAX_REPEATED_LEN as f64 {
        return Err(invalid_repeat_count());
    }
    let len = s.chars().count();
    let width = if width.is_finite() && width > 0.0 { width as usize } else { 0 };
    if padding.is_empty() || width <= len {
        ctx.push(Value::String(s));
        return Ok(());
    }
    let fill: String = padding.chars().cycle().take(width - len).collect();
    let padded = match side {
        Side::Left => format!("{fill}{}", s.as_str()),
        Side::Right => format!("{}{fill}", s.as_str()),
    };
    ctx.push_string(padded);
    Ok(())
}
