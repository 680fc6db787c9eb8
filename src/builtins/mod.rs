//! # Built-in Functions Module
//!
//! The native operator library, organized by category:
//!
//! - **[lists]**: list, head, tail, join, len, get, remove, eval
//! - **[arithmetic]**: +, -, *, /, %, ^, min, max
//! - **[comparison]**: <, >, ==, !=
//! - **[control]**: if, error
//! - **[definitions]**: def, =, fun
//! - **[process]**: env, exit
//! - **[types]**: typeof, string, int, float
//! - **[io]**: print, load
//!
//! Every builtin owns its evaluated arguments and returns a fresh value.
//! Failures are `ZError`s carrying the builtin's surface name; the evaluator
//! renders them into `Error` values, so inside the language they behave like
//! any other value.

use crate::env::Environment;
use crate::error::ZError;
use crate::value::{Builtin, BuiltinFn, Value};
use std::rc::Rc;

pub mod arithmetic;
pub mod comparison;
pub mod control;
pub mod definitions;
pub mod io;
pub mod lists;
pub mod process;
pub mod types;

/// Register one builtin under its surface symbol. `name` is the internal
/// identity used for display (`<builtin_NAME>`) and equality.
fn define_builtin(env: &Rc<Environment>, symbol: &str, name: &'static str, func: BuiltinFn) {
    env.define(symbol.to_string(), Value::Builtin(Builtin { name, func }));
}

/// Register all builtin functions in the environment
pub fn register_builtins(env: &Rc<Environment>) {
    lists::register(env);
    arithmetic::register(env);
    comparison::register(env);
    control::register(env);
    definitions::register(env);
    process::register(env);
    types::register(env);
    io::register(env);
}

/// Surface names that `def` and `=` refuse to rebind
pub const RESERVED: &[&str] = &[
    "list", "head", "tail", "join", "len", "get", "remove", "eval", "+", "-", "*", "/", "%", "^",
    "min", "max", "<", ">", "==", "!=", "if", "error", "def", "=", "fun", "env", "exit", "typeof",
    "string", "int", "float", "print", "load",
];

pub fn is_reserved(symbol: &str) -> bool {
    RESERVED.contains(&symbol)
}

// ---------------------------------------------------------------------------
// Argument checks shared by the builtin modules
// ---------------------------------------------------------------------------

pub(crate) fn check_len(name: &'static str, args: &[Value], expected: usize) -> Result<(), ZError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ZError::ArgCount {
            name,
            got: args.len(),
            expected,
        })
    }
}

pub(crate) fn check_min_len(
    name: &'static str,
    args: &[Value],
    expected: usize,
) -> Result<(), ZError> {
    if args.len() >= expected {
        Ok(())
    } else {
        Err(ZError::ArgCountMin {
            name,
            got: args.len(),
            expected,
        })
    }
}

/// Move the List at `index` out of the arguments. Call after a length check.
pub(crate) fn take_list(
    name: &'static str,
    args: &mut [Value],
    index: usize,
) -> Result<Vec<Value>, ZError> {
    match std::mem::replace(&mut args[index], Value::empty_expr()) {
        Value::List(items) => Ok(items),
        other => Err(ZError::arg_type(name, index, &other, "List")),
    }
}

pub(crate) fn take_string(
    name: &'static str,
    args: &mut [Value],
    index: usize,
) -> Result<String, ZError> {
    match std::mem::replace(&mut args[index], Value::empty_expr()) {
        Value::Str(s) => Ok(s),
        other => Err(ZError::arg_type(name, index, &other, "String")),
    }
}

pub(crate) fn take_int(
    name: &'static str,
    args: &mut [Value],
    index: usize,
) -> Result<i64, ZError> {
    match &args[index] {
        Value::Int(n) => Ok(*n),
        other => Err(ZError::arg_type(name, index, other, "Integer")),
    }
}

/// Shared test helper: evaluate each top-level form of `source` against a
/// fresh environment with all builtins registered, returning the last result.
#[cfg(test)]
pub(crate) fn eval_str(source: &str) -> Value {
    let env = Environment::new();
    register_builtins(&env);
    let top = crate::parser::parse(source).expect("parse failed");
    let mut result = Value::empty_expr();
    if let Value::Expr(forms) = top {
        for form in forms {
            result = crate::eval::eval(&env, form);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_reserved_name_is_bound() {
        let env = Environment::new();
        register_builtins(&env);
        for name in RESERVED {
            match env.get(name) {
                Some(Value::Builtin(_)) => {}
                other => panic!("{} should be a builtin, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("+"));
        assert!(is_reserved("def"));
        assert!(is_reserved("head"));
        assert!(!is_reserved("x"));
        assert!(!is_reserved("&"));
    }
}
