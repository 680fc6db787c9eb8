//! Definition operations: def, =, fun
//!
//! `def` binds in the global (topmost) environment, `=` in the current one.
//! Both take a List of Symbols followed by exactly as many values. `fun`
//! builds a user function from a header List of Symbols and a body List.

use super::{check_len, check_min_len, define_builtin, is_reserved, take_list};
use crate::env::Environment;
use crate::error::ZError;
use crate::value::{Lambda, Value};
use std::rc::Rc;

/// Scope targeted by a definition builtin
enum Scope {
    Global,
    Local,
}

fn define_symbols(
    env: &Rc<Environment>,
    mut args: Vec<Value>,
    name: &'static str,
    scope: Scope,
) -> Result<Value, ZError> {
    check_min_len(name, &args, 1)?;
    let keys = take_list(name, &mut args, 0)?;

    let mut symbols = Vec::with_capacity(keys.len());
    for (element, key) in keys.into_iter().enumerate() {
        match key {
            Value::Symbol(s) => {
                if is_reserved(&s) {
                    return Err(ZError::ReservedSymbol { name, symbol: s });
                }
                symbols.push(s);
            }
            other => {
                return Err(ZError::ElementType {
                    name,
                    index: 0,
                    element,
                    got: other.type_name(),
                    expected: "Symbol",
                })
            }
        }
    }

    let values = args.split_off(1);
    if symbols.len() != values.len() {
        return Err(ZError::DefCountMismatch {
            name,
            symbols: symbols.len(),
            values: values.len(),
        });
    }

    for (symbol, value) in symbols.into_iter().zip(values) {
        match scope {
            Scope::Global => env.define_global(symbol, value),
            Scope::Local => env.define(symbol, value),
        }
    }

    Ok(Value::empty_expr())
}

/// (def {names...} values...): bind in the global environment
pub fn builtin_def(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    define_symbols(env, args, "def", Scope::Global)
}

/// (= {names...} values...): bind in the current environment
pub fn builtin_put(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    define_symbols(env, args, "=", Scope::Local)
}

/// (fun {params...} {body...}): build a user function
pub fn builtin_fun(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("fun", &args, 2)?;
    let header = take_list("fun", &mut args, 0)?;
    let body = take_list("fun", &mut args, 1)?;

    let mut params = Vec::with_capacity(header.len());
    for (element, value) in header.into_iter().enumerate() {
        match value {
            Value::Symbol(s) => params.push(s),
            other => {
                return Err(ZError::ElementType {
                    name: "fun",
                    index: 0,
                    element,
                    got: other.type_name(),
                    expected: "Symbol",
                })
            }
        }
    }

    Ok(Value::Lambda(Box::new(Lambda::new(params, body))))
}

/// Register all definition builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "def", "def", builtin_def);
    define_builtin(env, "=", "put", builtin_put);
    define_builtin(env, "fun", "fun", builtin_fun);
}
