//! Lowering of the parser's syntax tree into executable nodes.

use pile_ir::Expr;

use crate::value::{Node, Quote, Symbol, Value, Word};

/// Lower a parsed program into the body of a quote.
pub fn lower_program(program: Vec<Expr>) -> Quote {
    Quote::compiled(lower_sequence(program))
}

fn lower_sequence(exprs: Vec<Expr>) -> Vec<Node> {
    exprs.into_iter().map(lower).collect()
}

/// Lower a single expression.
///
/// Quote literals become quote values right away; only symbols, word
/// definitions and the contents of arrays and objects remain for the engine.
pub fn lower(expr: Expr) -> Node {
    match expr {
        Expr::String(s) => Node::Value(Value::string(s)),
        Expr::Symbol { id, position } => Node::Symbol(Symbol::with_position(id, position)),
        Expr::Array(elements) => Node::Array(lower_sequence(elements)),
        Expr::Object(properties) => Node::Object(
            properties
                .into_iter()
                .map(|(key, value)| (key, lower(value)))
                .collect(),
        ),
        Expr::Quote(body) => Node::Value(Value::Quote(lower_program(body))),
        Expr::Word {
            name,
            position,
            body,
        } => Node::Word(Word::new(
            Symbol::with_position(name, position),
            lower_program(body),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::QuoteBody;
    use pile_ir::Position;

    #[test]
    fn quote_literals_become_values() {
        let node = lower(Expr::Quote(vec![Expr::symbol("dup", Position::new(1, 3))]));
        let Node::Value(Value::Quote(quote)) = node else {
            panic!("expected quote value");
        };
        let QuoteBody::Compiled(body) = quote.body() else {
            panic!("expected compiled quote");
        };
        assert!(matches!(&body[0], Node::Symbol(s) if s.id() == "dup"));
    }

    #[test]
    fn symbols_keep_positions() {
        let node = lower(Expr::symbol("x", Position::new(2, 5)));
        let Node::Symbol(symbol) = node else {
            panic!("expected symbol");
        };
        assert_eq!(symbol.position(), Some(Position::new(2, 5)));
    }

    #[test]
    fn word_definitions_lower_to_words() {
        let node = lower(Expr::Word {
            name: "inc".to_string(),
            position: Position::new(1, 3),
            body: vec![Expr::symbol("1", Position::new(1, 7))],
        });
        assert!(matches!(node, Node::Word(w) if w.id() == "inc"));
    }
}
