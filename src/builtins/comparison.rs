//! Comparison operations: <, >, ==, !=
//!
//! `<` and `>` are numeric and reduce left to right, yielding the Integer
//! 0/1 of the last pairwise comparison. `==` and `!=` take exactly two
//! values of any type and use structural equality.

use super::arithmetic::{numeric_operands, Operands};
use super::{check_len, check_min_len, define_builtin};
use crate::env::Environment;
use crate::error::ZError;
use crate::value::Value;
use std::rc::Rc;

/// Compare adjacent operands, keeping the outcome of the last pair
fn last_pairwise(
    name: &'static str,
    args: Vec<Value>,
    int_cmp: fn(i64, i64) -> bool,
    float_cmp: fn(f64, f64) -> bool,
) -> Result<Value, ZError> {
    check_min_len(name, &args, 2)?;

    let result = match numeric_operands(name, args)? {
        Operands::Ints(xs) => {
            let mut r = false;
            for pair in xs.windows(2) {
                r = int_cmp(pair[0], pair[1]);
            }
            r
        }
        Operands::Floats(xs) => {
            let mut r = false;
            for pair in xs.windows(2) {
                r = float_cmp(pair[0], pair[1]);
            }
            r
        }
    };

    Ok(Value::Int(result as i64))
}

pub fn builtin_lt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    last_pairwise("<", args, |a, b| a < b, |a, b| a < b)
}

pub fn builtin_gt(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    last_pairwise(">", args, |a, b| a > b, |a, b| a > b)
}

pub fn builtin_eq(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    check_len("==", &args, 2)?;
    Ok(Value::Int((args[0] == args[1]) as i64))
}

pub fn builtin_neq(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    check_len("!=", &args, 2)?;
    Ok(Value::Int((args[0] != args[1]) as i64))
}

/// Register all comparison builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "<", "lt", builtin_lt);
    define_builtin(env, ">", "gt", builtin_gt);
    define_builtin(env, "==", "eq", builtin_eq);
    define_builtin(env, "!=", "neq", builtin_neq);
}

#[cfg(test)]
mod tests {
    use super::super::eval_str;
    use crate::value::Value;

    #[test]
    fn test_ordering() {
        assert_eq!(eval_str("(< 1 2)"), Value::Int(1));
        assert_eq!(eval_str("(< 2 1)"), Value::Int(0));
        assert_eq!(eval_str("(> 3 2)"), Value::Int(1));
        assert_eq!(eval_str("(> 2.5 2)"), Value::Int(1));
    }

    #[test]
    fn test_ordering_keeps_last_pairwise_result() {
        // Only the final adjacent pair decides
        assert_eq!(eval_str("(< 5 1 2)"), Value::Int(1));
        assert_eq!(eval_str("(< 1 2 0)"), Value::Int(0));
    }

    #[test]
    fn test_ordering_type_error() {
        assert_eq!(
            eval_str("(< 1 {})"),
            Value::Error(
                "Function '<' passed incorrect type for argument 1. Got List, Expected Number."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(eval_str("(== 1 1)"), Value::Int(1));
        assert_eq!(eval_str("(== 1 2)"), Value::Int(0));
        assert_eq!(eval_str("(== {1 {2}} {1 {2}})"), Value::Int(1));
        assert_eq!(eval_str(r#"(== "a" "a")"#), Value::Int(1));
        // No widening outside numeric operations
        assert_eq!(eval_str("(== 1 1.0)"), Value::Int(0));
        assert_eq!(eval_str("(!= 1 2)"), Value::Int(1));
        assert_eq!(eval_str("(!= {} {})"), Value::Int(0));
    }

    #[test]
    fn test_equality_of_functions() {
        assert_eq!(eval_str("(== + +)"), Value::Int(1));
        assert_eq!(eval_str("(== + -)"), Value::Int(0));
        // User functions compare by header and body
        assert_eq!(
            eval_str("(== (fun {x} {x}) (fun {x} {x}))"),
            Value::Int(1)
        );
        assert_eq!(
            eval_str("(== (fun {x} {x}) (fun {y} {y}))"),
            Value::Int(0)
        );
    }

    #[test]
    fn test_equality_arity() {
        assert_eq!(
            eval_str("(== 1 2 3)"),
            Value::Error(
                "Function '==' passed incorrect number of arguments. Got 3, Expected 2."
                    .to_string()
            )
        );
    }
}
