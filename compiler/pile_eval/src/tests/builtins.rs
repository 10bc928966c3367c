use pretty_assertions::assert_eq;

use super::{arr, eval, eval_err, num, runtime, text};
use crate::value::{ErrorCode, Value};

fn check(cases: &[(&str, Vec<Value>)]) {
    for (source, expected) in cases {
        assert_eq!(&eval(source), expected, "{source}");
    }
}

fn check_errors(cases: &[(&str, ErrorCode)]) {
    for (source, code) in cases {
        assert_eq!(eval_err(source).code, *code, "{source}");
    }
}

fn boolean(b: bool) -> Value {
    Value::Boolean(b)
}

#[test]
fn stack_words() {
    check(&[
        ("1 2 swap", vec![num(2.0), num(1.0)]),
        ("1 2 over", vec![num(1.0), num(2.0), num(1.0)]),
        ("1 2 3 rot", vec![num(2.0), num(3.0), num(1.0)]),
        ("1 2 tuck", vec![num(2.0), num(1.0), num(2.0)]),
        ("1 2 nip", vec![num(2.0)]),
        ("1 2 2dup", vec![num(1.0), num(2.0), num(1.0), num(2.0)]),
        ("1 2 2drop", vec![]),
        ("1 2 3 depth", vec![num(1.0), num(2.0), num(3.0), num(3.0)]),
        ("1 2 3 clear", vec![]),
        ("nop", vec![]),
    ]);
    check_errors(&[("1 swap", ErrorCode::Range), ("1 2drop", ErrorCode::Range)]);
}

#[test]
fn constants() {
    check(&[
        ("null true false", vec![Value::Null, boolean(true), boolean(false)]),
        ("pi", vec![num(std::f64::consts::PI)]),
        ("inf -inf", vec![num(f64::INFINITY), num(f64::NEG_INFINITY)]),
        ("nan nan? nip", vec![boolean(true)]),
    ]);
}

#[test]
fn type_tests() {
    check(&[
        ("1 number?", vec![num(1.0), boolean(true)]),
        (r#""s" number?"#, vec![text("s"), boolean(false)]),
        ("null null?", vec![Value::Null, boolean(true)]),
        ("1 typeof", vec![num(1.0), text("number")]),
        ("( ) typeof nip", vec![text("quote")]),
        ("1 number instance-of?", vec![num(1.0), boolean(true)]),
        (r#""s" number instance-of?"#, vec![text("s"), boolean(false)]),
        (r#""s" string instance-of? nip"#, vec![boolean(true)]),
    ]);
}

#[test]
fn conversions() {
    check(&[
        ("null >boolean", vec![boolean(false)]),
        ("0 >boolean", vec![boolean(true)]),
        ("1.5 >string", vec![text("1.5")]),
        (r#"[ 1 "a" ] >string"#, vec![text("1, a")]),
        (r#"[ 1 "a" ] >source"#, vec![text(r#"[1, "a"]"#)]),
        ("1 2 2array", vec![arr([num(1.0), num(2.0)])]),
        ("1 1array", vec![arr([num(1.0)])]),
        ("1 2 3 3 narray", vec![arr([num(1.0), num(2.0), num(3.0)])]),
        ("1 0 narray", vec![num(1.0), arr([])]),
    ]);
    check_errors(&[("1 5 narray", ErrorCode::Range), ("-1 narray", ErrorCode::Range)]);
}

#[test]
fn control_flow() {
    check(&[
        ("true ( 1 ) if", vec![num(1.0)]),
        ("false ( 1 ) if", vec![]),
        ("false ( 1 ) ( 2 ) if-else", vec![num(2.0)]),
        ("0 ( dup 3 < ) ( 1 + ) while", vec![num(3.0)]),
        (r#""1 2 +" compile call"#, vec![num(3.0)]),
    ]);
    check_errors(&[("1 ( 1 ) if", ErrorCode::Type), (r#""(" compile"#, ErrorCode::Syntax)]);
}

#[test]
fn dictionaries() {
    check(&[
        (r#"42 "answer" const answer"#, vec![num(42.0)]),
        (": one 1 ; locals keys nip", vec![arr([text("one")])]),
        (r#"globals "dup" swap has-own? nip"#, vec![boolean(true)]),
    ]);
}

#[test]
fn equality() {
    check(&[
        ("[ 1 2 ] [ 1 2 ] =", vec![boolean(true)]),
        (r#"1 "1" ="#, vec![boolean(false)]),
        ("1 1 !=", vec![boolean(false)]),
        ("( 1 ) dup =", vec![boolean(true)]),
        ("( 1 ) ( 1 ) =", vec![boolean(false)]),
        ("nan nan =", vec![boolean(false)]),
        ("nan 1array dup =", vec![boolean(false)]),
        ("nan 1array nan 1array =", vec![boolean(false)]),
        ("null null =", vec![boolean(true)]),
    ]);
}

#[test]
fn output_words() {
    let runtime = runtime();
    runtime
        .new_context()
        .eval(r#""hi" println 1 print 65 emit [ 1 2 ] println"#)
        .unwrap();
    assert_eq!(runtime.print_handler().output(), "hi\n1A1, 2\n");
    check_errors(&[("-1 emit", ErrorCode::Range), ("1.5 emit", ErrorCode::Range)]);
}

#[test]
fn error_words() {
    check(&[
        (r#""bad" range-error code nip"#, vec![num(5.0)]),
        (r#""bad" type-error message nip"#, vec![text("bad")]),
        ("null unknown-error message nip", vec![Value::Null]),
        (r#""bad" type-error >string"#, vec![text("Type error: bad")]),
        (r#""bad" type-error >source"#, vec![text("<Type error: bad>")]),
        (r#""x" syntax-error position nip"#, vec![Value::Null]),
        (r#""x" import-error error? nip"#, vec![boolean(true)]),
    ]);
    check_errors(&[
        (r#""x" reference-error throw"#, ErrorCode::Reference),
        (r#""x" import-error throw"#, ErrorCode::Import),
    ]);
}

#[test]
fn number_words() {
    check(&[
        ("10 3 -", vec![num(7.0)]),
        ("7 2 %", vec![num(1.0)]),
        ("1 0 /", vec![num(f64::INFINITY)]),
        ("2 10 max", vec![num(10.0)]),
        ("2 10 min", vec![num(2.0)]),
        ("5 1 3 clamp", vec![num(3.0)]),
        ("5 1 10 in-range?", vec![boolean(true)]),
        ("-3 abs", vec![num(3.0)]),
        ("2.5 round -2.5 round", vec![num(3.0), num(-3.0)]),
        ("2.7 floor 2.2 ceil", vec![num(2.0), num(3.0)]),
        ("6 3 &", vec![num(2.0)]),
        ("6 3 |", vec![num(7.0)]),
        ("6 3 ^", vec![num(5.0)]),
        ("1 4 <<", vec![num(16.0)]),
        ("-8 1 >>", vec![num(-4.0)]),
        ("0 ~", vec![num(-1.0)]),
        ("1 2 <", vec![boolean(true)]),
        ("2 2 <=", vec![boolean(true)]),
        ("1 2 >=", vec![boolean(false)]),
        ("1 finite? nip", vec![boolean(true)]),
        ("( 1 ) 3 times", vec![num(1.0), num(1.0), num(1.0)]),
    ]);
}

#[test]
fn boolean_words() {
    check(&[
        ("true false and", vec![boolean(false)]),
        ("true false or", vec![boolean(true)]),
        ("true true xor", vec![boolean(false)]),
        ("true not", vec![boolean(false)]),
        (r#""yes" "no" false ?"#, vec![text("no")]),
        ("1 2 true ?", vec![num(1.0)]),
    ]);
}

#[test]
fn string_queries_keep_the_string() {
    check(&[
        (r#""hello" length"#, vec![text("hello"), num(5.0)]),
        (r#""ll" "hello" includes?"#, vec![text("hello"), boolean(true)]),
        (r#""l" "hello" index-of"#, vec![text("hello"), num(2.0)]),
        (r#""z" "hello" index-of"#, vec![text("hello"), Value::Null]),
        (r#""he" "hello" starts-with? nip"#, vec![boolean(true)]),
        (r#""lo" "hello" ends-with? nip"#, vec![boolean(true)]),
        (r#""abc" lower-case? nip"#, vec![boolean(true)]),
        (r#""" space? nip"#, vec![boolean(false)]),
        (
            r#""abc" chars nip"#,
            vec![arr([text("a"), text("b"), text("c")])],
        ),
        (r#""AB" runes nip"#, vec![arr([num(65.0), num(66.0)])]),
        (r#""a  b" words nip"#, vec![arr([text("a"), text("b")])]),
        ("\"a\\nb\" lines nip", vec![arr([text("a"), text("b")])]),
    ]);
}

#[test]
fn string_transformations() {
    check(&[
        (r#""abc" reverse"#, vec![text("cba")]),
        (r#""hello" upper-case"#, vec![text("HELLO")]),
        (r#""HeLLo" lower-case"#, vec![text("hello")]),
        (r#""hEllo" swap-case"#, vec![text("HeLLO")]),
        (r#""hELLO" capitalize"#, vec![text("Hello")]),
        (r#""  x  " trim"#, vec![text("x")]),
        (r#""  x  " trim-left"#, vec![text("x  ")]),
        (r#""  x  " trim-right"#, vec![text("  x")]),
        (r#""*" 5 "ab" pad-left"#, vec![text("***ab")]),
        (r#""-" 4 "ab" pad-right"#, vec![text("ab--")]),
        (r#""*" 1 "ab" pad-left"#, vec![text("ab")]),
        (r#"1 3 "hello" substring"#, vec![text("el")]),
        (r#"-3 -1 "hello" substring"#, vec![text("ll")]),
        (
            r#""," "a,b,c" split"#,
            vec![arr([text("a"), text("b"), text("c")])],
        ),
        (r#""" "ab" split"#, vec![arr([text("a"), text("b")])]),
        (r#""l" "L" "hello" replace"#, vec![text("heLLo")]),
        (r#"" 42 " >number"#, vec![num(42.0)]),
        (r#""-1.5e2" >number"#, vec![num(-150.0)]),
        (r#""foo" "bar" +"#, vec![text("foobar")]),
        (r#"3 "ab" *"#, vec![text("ababab")]),
        (r#"1 "abc" @"#, vec![text("b")]),
        (r#"-1 "abc" @"#, vec![text("c")]),
        (r#""foo" >symbol"#, vec![Value::symbol("foo")]),
    ]);
    check_errors(&[
        (r#""abc" >number"#, ErrorCode::Value),
        (r#""" >number"#, ErrorCode::Value),
        (r#"-1 "ab" *"#, ErrorCode::Range),
        (r#"5 "abc" @"#, ErrorCode::Range),
        (r#"3 1 "hello" substring"#, ErrorCode::Range),
    ]);
}

#[test]
fn array_queries_keep_the_array() {
    let xs = || arr([num(1.0), num(2.0), num(3.0)]);
    check(&[
        ("[ 1 2 3 ] length", vec![xs(), num(3.0)]),
        ("2 [ 1 2 3 ] includes?", vec![xs(), boolean(true)]),
        ("3 [ 1 2 3 ] index-of", vec![xs(), num(2.0)]),
        ("9 [ 1 2 3 ] index-of", vec![xs(), Value::Null]),
        ("( 1 > ) [ 1 2 3 ] find", vec![xs(), num(2.0)]),
        ("( 5 > ) [ 1 2 3 ] find", vec![xs(), Value::Null]),
        ("( 1 > ) [ 1 2 3 ] find-index", vec![xs(), num(1.0)]),
        ("( 0 > ) [ 1 2 3 ] every?", vec![xs(), boolean(true)]),
        ("( 2 > ) [ 1 2 3 ] some?", vec![xs(), boolean(true)]),
        ("( 5 > ) [ 1 2 3 ] some?", vec![xs(), boolean(false)]),
    ]);
}

#[test]
fn array_transformations() {
    check(&[
        ("[ 1 2 3 ] reverse", vec![arr([num(3.0), num(2.0), num(1.0)])]),
        ("[ 1 2 1 3 2 ] uniq", vec![arr([num(1.0), num(2.0), num(3.0)])]),
        ("[ 1 2 3 ] extract", vec![num(3.0), num(2.0), num(1.0)]),
        (r#"", " [ 1 "a" ] join"#, vec![text("1, a")]),
        ("[ 1 2 ] >quote call", vec![num(1.0), num(2.0)]),
        (
            "( 2 % 1 = ) [ 1 2 3 4 ] filter",
            vec![arr([num(1.0), num(3.0)])],
        ),
        ("( + ) [ 1 2 3 ] reduce", vec![num(6.0)]),
        ("0 ( + ) [ 1 2 3 ] for-each", vec![num(6.0)]),
        (
            "( + ) [ 1 2 ] [ 10 20 ] 2map",
            vec![arr([num(11.0), num(22.0)])],
        ),
        ("( - ) [ 5 ] [ 2 ] 2for-each", vec![num(3.0)]),
        ("4 [ 1 ] push", vec![arr([num(1.0), num(4.0)])]),
        ("[ 1 2 ] pop", vec![arr([num(1.0)]), num(2.0)]),
        ("[ 1 ] [ 2 ] +", vec![arr([num(1.0), num(2.0)])]),
        ("2 [ 1 2 ] *", vec![arr([num(1.0), num(2.0), num(1.0), num(2.0)])]),
        ("[ 1 2 3 ] [ 3 2 4 ] &", vec![arr([num(2.0), num(3.0)])]),
        ("[ 1 2 ] [ 2 3 ] |", vec![arr([num(1.0), num(2.0), num(3.0)])]),
        ("1 [ 10 20 ] @", vec![num(20.0)]),
        ("-2 [ 10 20 ] @", vec![num(10.0)]),
        (r#""x" 0 [ 1 2 ] !"#, vec![arr([text("x"), num(2.0)])]),
    ]);
    check_errors(&[
        ("( + ) [ ] reduce", ErrorCode::Range),
        ("5 [ 10 20 ] @", ErrorCode::Range),
        ("-1 [ 1 ] *", ErrorCode::Range),
        ("( 1 ) [ 1 ] filter", ErrorCode::Type),
    ]);
}

#[test]
fn oversized_repetition_is_a_range_error() {
    for source in [
        r#"10000000000000000000 "ab" *"#,
        "10000000000000000000 [ 1 ] *",
        r#""*" 10000000000000000000 "ab" pad-left"#,
        r#""*" inf "ab" pad-right"#,
    ] {
        let error = eval_err(source);
        assert_eq!(error.code, ErrorCode::Range, "{source}");
        assert_eq!(error.message.as_deref(), Some("Invalid repeat count."), "{source}");
    }
    check(&[
        (r#"10000000000000000000 "" *"#, vec![text("")]),
        ("10000000000000000000 [ ] *", vec![arr([])]),
    ]);
}

#[test]
fn object_words() {
    let stack = eval(r#"{ "a": 1, "b": 2 } keys"#);
    assert_eq!(stack[1], arr([text("a"), text("b")]));
    let stack = eval(r#"{ "a": 1, "b": 2 } values"#);
    assert_eq!(stack[1], arr([num(1.0), num(2.0)]));

    check(&[
        (r#""a" { "a": 1 } @"#, vec![num(1.0)]),
        (r#"2 "b" { "a": 1 } ! >source"#, vec![text(r#"{"a": 1, "b": 2}"#)]),
        (r#""a" { "a": 1, "b": 2 } delete >source"#, vec![text(r#"{"b": 2}"#)]),
        (r#""a" { "a": 1 } has? nip"#, vec![boolean(true)]),
        (
            r#"{ "a": 1 } { "a": 2, "b": 3 } + >source"#,
            vec![text(r#"{"a": 2, "b": 3}"#)],
        ),
    ]);
    check_errors(&[
        (r#""b" { "a": 1 } @"#, ErrorCode::Range),
        (r#""b" { "a": 1 } delete"#, ErrorCode::Range),
        ("{ } new", ErrorCode::Type),
    ]);
}

/// An object whose prototype is a copy of the object prototype with an
/// extra `x` property.
const INSTANCE: &str = r#"1 "x" { } proto nip ! "__proto__" { } !"#;

#[test]
fn inherited_properties() {
    check(&[
        (&format!(r#"{INSTANCE} "x" swap has? nip"#), vec![boolean(true)]),
        (&format!(r#"{INSTANCE} "x" swap has-own? nip"#), vec![boolean(false)]),
        (&format!(r#"{INSTANCE} "x" swap @"#), vec![num(1.0)]),
    ]);
}

#[test]
fn custom_prototypes_replace_object_words() {
    let error = eval_err(r#""x" { "__proto__": { "x": 1 } } has?"#);
    assert_eq!(error.code, ErrorCode::Reference);
}

#[test]
fn new_instances_dispatch_through_their_class() {
    let stack = eval(r#"{ "prototype": { "greet": "hi" } } new greet"#);
    assert_eq!(stack[1], text("hi"));

    let stack = eval(r#"{ "prototype": { "constructor": ( "made" swap ) } } new drop"#);
    assert_eq!(stack, vec![text("made")]);

    let stack = eval(r#"{ "prototype": { } } dup new swap instance-of? nip"#);
    assert_eq!(stack, vec![boolean(true)]);
}

#[test]
fn proto_word() {
    let stack = eval(r#"{ "__proto__": { "k": 1 } } proto nip"#);
    assert_eq!(stack[0].to_source(), r#"{"k": 1}"#);
}

#[test]
fn quote_words() {
    check(&[
        ("1 ( 2 + ) call", vec![num(3.0)]),
        ("( 1 ) ( 2 ) compose call", vec![num(1.0), num(2.0)]),
        ("5 ( 1 + ) curry call", vec![num(6.0)]),
        ("( 1 > ) negate [ 0 1 2 ] filter", vec![arr([num(0.0), num(1.0)])]),
        ("1 2 ( 10 + ) dip", vec![num(11.0), num(2.0)]),
        ("1 2 3 ( 10 + ) 2dip", vec![num(11.0), num(2.0), num(3.0)]),
        (r#""sq" >symbol ( dup * ) >word define 3 sq"#, vec![num(9.0)]),
    ]);
}

#[test]
fn word_and_symbol_words() {
    check(&[
        (r#""w" >symbol ( 1 ) >word symbol nip"#, vec![Value::symbol("w")]),
        (r#""w" >symbol ( 1 ) >word call"#, vec![num(1.0)]),
        (r#"1 "dup" >symbol call"#, vec![num(1.0), num(1.0)]),
        (r#""dup" >symbol position nip"#, vec![Value::Null]),
    ]);
    let stack = eval(r#""w" >symbol ( 1 ) >word quote nip call"#);
    assert_eq!(stack, vec![num(1.0)]);
}
