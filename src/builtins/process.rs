//! Environment and process operations: env, exit
//!
//! Both take one empty List, the conventional "no argument" placeholder.

use super::{check_len, define_builtin, take_list};
use crate::env::Environment;
use crate::error::ZError;
use crate::value::Value;
use std::rc::Rc;

fn check_placeholder(
    name: &'static str,
    args: &mut Vec<Value>,
) -> Result<(), ZError> {
    check_len(name, args, 1)?;
    let items = take_list(name, args, 0)?;
    if items.is_empty() {
        Ok(())
    } else {
        Err(ZError::NonEmptyArg { name, index: 0 })
    }
}

/// (env {}): the current frame's bindings as {symbol value} pairs
pub fn builtin_env(env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_placeholder("env", &mut args)?;

    let pairs = env
        .bindings()
        .into_iter()
        .map(|(symbol, value)| Value::List(vec![Value::Symbol(symbol), value]))
        .collect();

    Ok(Value::List(pairs))
}

/// (exit {}): terminate the process successfully
pub fn builtin_exit(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_placeholder("exit", &mut args)?;
    std::process::exit(0);
}

/// Register environment and process builtins
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "env", "env", builtin_env);
    define_builtin(env, "exit", "exit", builtin_exit);
}
