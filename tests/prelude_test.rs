// ABOUTME: Tests loading the standard prelude and exercising its definitions

use std::rc::Rc;
use z_lisp::builtins::register_builtins;
use z_lisp::env::Environment;
use z_lisp::eval::eval;
use z_lisp::parser::parse;
use z_lisp::value::Value;

/// Environment with builtins and the prelude loaded from the crate root
fn setup() -> Rc<Environment> {
    let env = Environment::new();
    register_builtins(&env);

    let result = run(&env, r#"(load "std.zsp")"#);
    assert_eq!(result, Value::empty_expr(), "prelude failed to load");
    env
}

fn run(env: &Rc<Environment>, source: &str) -> Value {
    let top = parse(source).expect("parse failed");
    let mut result = Value::empty_expr();
    if let Value::Expr(forms) = top {
        for form in forms {
            result = eval(env, form);
        }
    }
    result
}

#[test]
fn test_boolean_atoms() {
    let env = setup();
    assert_eq!(run(&env, "true"), Value::Int(1));
    assert_eq!(run(&env, "false"), Value::Int(0));
    assert_eq!(run(&env, "nil"), Value::List(vec![]));
}

#[test]
fn test_logic_helpers() {
    let env = setup();
    assert_eq!(run(&env, "(not 1)"), Value::Int(0));
    assert_eq!(run(&env, "(not 0)"), Value::Int(1));
    assert_eq!(run(&env, "(and 1 1)"), Value::Int(1));
    assert_eq!(run(&env, "(and 1 0)"), Value::Int(0));
    assert_eq!(run(&env, "(or 0 1)"), Value::Int(1));
    assert_eq!(run(&env, "(or 0 0)"), Value::Int(0));
}

#[test]
fn test_defn_shorthand() {
    let env = setup();
    run(&env, "(defn {triple x} {* x 3})");
    assert_eq!(run(&env, "(triple 7)"), Value::Int(21));
}

#[test]
fn test_element_accessors() {
    let env = setup();
    assert_eq!(run(&env, "(fst {10 20 30})"), Value::Int(10));
    assert_eq!(run(&env, "(snd {10 20 30})"), Value::Int(20));
    assert_eq!(run(&env, "(last {10 20 30})"), Value::Int(30));
}

#[test]
fn test_map() {
    let env = setup();
    run(&env, "(defn {inc x} {+ x 1})");
    assert_eq!(run(&env, "(map inc {1 2 3})").to_string(), "{2 3 4}");
    assert_eq!(run(&env, "(map inc {})").to_string(), "{}");
    // Partial application builds the mapped function in place
    run(&env, "(defn {add a b} {+ a b})");
    assert_eq!(run(&env, "(map (add 10) {1 2})").to_string(), "{11 12}");
}

#[test]
fn test_filter() {
    let env = setup();
    run(&env, "(defn {big x} {> x 2})");
    assert_eq!(
        run(&env, "(filter big {1 2 3 4 1 5})").to_string(),
        "{3 4 5}"
    );
    assert_eq!(run(&env, "(filter big {})").to_string(), "{}");
}

#[test]
fn test_reverse_and_sum() {
    let env = setup();
    assert_eq!(run(&env, "(reverse {1 2 3})").to_string(), "{3 2 1}");
    assert_eq!(run(&env, "(reverse {})").to_string(), "{}");
    assert_eq!(run(&env, "(sum {1 2 3 4})"), Value::Int(10));
    assert_eq!(run(&env, "(sum {})"), Value::Int(0));
}

#[test]
fn test_range() {
    let env = setup();
    assert_eq!(run(&env, "(range 0 5)").to_string(), "{0 1 2 3 4}");
    assert_eq!(run(&env, "(range 3 3)").to_string(), "{}");
    assert_eq!(run(&env, "(sum (range 1 101))"), Value::Int(5050));
}

#[test]
fn test_composed_prelude_pipeline() {
    let env = setup();
    run(&env, "(defn {square x} {* x x})");
    run(&env, "(defn {big x} {> x 2})");
    assert_eq!(
        run(&env, "(sum (map square (filter big (range 0 6))))"),
        Value::Int(9 + 16 + 25)
    );
}
