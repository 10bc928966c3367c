//! Text forms of values.
//!
//! Every value has two renderings: the display form used by `print` and
//! `>string`, and the source form used by `>source`, which parses back to an
//! equal value for literals.

use std::fmt::{self, Write};

use super::{format_number, Node, Quote, QuoteBody, Value, Word};

impl Value {
    /// Human-readable rendering.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.as_str().to_string(),
            Value::Symbol(s) => s.id().to_string(),
            Value::Array(elements) => join(elements.iter().map(Value::to_display_string), ", "),
            Value::Object(properties) => join(
                properties
                    .iter()
                    .map(|(key, value)| format!("{key}={}", value.to_display_string())),
                ", ",
            ),
            Value::Quote(quote) => quote_text(quote),
            Value::Word(word) => word_text(word),
            Value::Error(error) => error.to_string(),
        }
    }

    /// Rendering that parses back to an equal value for literals.
    pub fn to_source(&self) -> String {
        match self {
            Value::String(s) => quote_string(s),
            Value::Array(elements) => {
                format!("[{}]", join(elements.iter().map(Value::to_source), ", "))
            }
            Value::Object(properties) => format!(
                "{{{}}}",
                join(
                    properties
                        .iter()
                        .map(|(key, value)| format!("{}: {}", quote_string(key), value.to_source())),
                    ", ",
                )
            ),
            Value::Quote(quote) => format!("({})", quote_text(quote)),
            Value::Error(error) => format!("<{error}>"),
            other => other.to_display_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl Node {
    pub fn to_source(&self) -> String {
        match self {
            Node::Value(value) => value.to_source(),
            Node::Symbol(symbol) => symbol.id().to_string(),
            Node::Word(word) => word_text(word),
            Node::Array(elements) => {
                format!("[{}]", join(elements.iter().map(Node::to_source), ", "))
            }
            Node::Object(properties) => format!(
                "{{{}}}",
                join(
                    properties
                        .iter()
                        .map(|(key, node)| format!("{}: {}", quote_string(key), node.to_source())),
                    ", ",
                )
            ),
        }
    }
}

fn quote_text(quote: &Quote) -> String {
    match quote.body() {
        QuoteBody::Native(_) => "\"native quote\"".to_string(),
        QuoteBody::Compiled(nodes) => join(nodes.iter().map(Node::to_source), " "),
    }
}

fn word_text(word: &Word) -> String {
    format!(": {} {} ;", word.id(), quote_text(word.quote()))
}

fn join(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}

/// JSON string literal for `s`.
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
