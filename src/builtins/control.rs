//! Control operations: if, error
//!
//! `if` is an ordinary builtin, so both branches arrive as Lists (already
//! evaluated as literals); the chosen branch is wrapped back into an
//! Expression and reduced. `error` turns a String into an Error value.

use super::{check_len, define_builtin, take_int, take_list, take_string};
use crate::env::Environment;
use crate::error::ZError;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// (if condition {then} {else}): evaluates one branch, picked by the
/// Integer condition (zero is false)
pub fn builtin_if(env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("if", &args, 3)?;
    let condition = take_int("if", &mut args, 0)?;
    let then_branch = take_list("if", &mut args, 1)?;
    let else_branch = take_list("if", &mut args, 2)?;

    let chosen = if condition != 0 { then_branch } else { else_branch };
    Ok(eval(env, Value::Expr(chosen)))
}

/// (error "message"): builds an Error value carrying the message
pub fn builtin_error(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("error", &args, 1)?;
    let message = take_string("error", &mut args, 0)?;
    Ok(Value::Error(message))
}

/// Register all control builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "if", "if", builtin_if);
    define_builtin(env, "error", "error", builtin_error);
}
