//! List operations: list, head, tail, join, len, get, remove, eval
//!
//! Lists are the `{…}` literal form: ordered, self-evaluating containers.
//! `eval` closes the loop by turning a List back into an Expression and
//! reducing it, which is how quoted code is run.

use super::{check_len, check_min_len, define_builtin, take_int, take_list};
use crate::env::Environment;
use crate::error::ZError;
use crate::eval::eval;
use crate::value::Value;
use std::rc::Rc;

/// Tags the argument sequence as a List: (list 1 2 3) is {1 2 3}
pub fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    Ok(Value::List(args))
}

/// Returns the List holding only the first element: (head {1 2 3}) is {1}
pub fn builtin_head(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("head", &args, 1)?;
    let mut items = take_list("head", &mut args, 0)?;
    if items.is_empty() {
        return Err(ZError::EmptyArg {
            name: "head",
            index: 0,
        });
    }

    items.truncate(1);
    Ok(Value::List(items))
}

/// Returns the List without its first element: (tail {1 2 3}) is {2 3}
pub fn builtin_tail(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("tail", &args, 1)?;
    let mut items = take_list("tail", &mut args, 0)?;
    if items.is_empty() {
        return Err(ZError::EmptyArg {
            name: "tail",
            index: 0,
        });
    }

    items.remove(0);
    Ok(Value::List(items))
}

/// Concatenates onto the first List. List arguments are joined element-wise,
/// anything else is appended as a single element.
pub fn builtin_join(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_min_len("join", &args, 1)?;
    let mut joined = take_list("join", &mut args, 0)?;

    for arg in args.into_iter().skip(1) {
        match arg {
            Value::List(items) => joined.extend(items),
            other => joined.push(other),
        }
    }

    Ok(Value::List(joined))
}

/// Returns the element count of a List
pub fn builtin_len(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("len", &args, 1)?;
    let items = take_list("len", &mut args, 0)?;
    Ok(Value::Int(items.len() as i64))
}

/// Returns element i of a List
pub fn builtin_get(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("get", &args, 2)?;
    let mut items = take_list("get", &mut args, 0)?;
    let index = take_int("get", &mut args, 1)?;

    if index < 0 || index as usize >= items.len() {
        return Err(ZError::IndexOutOfBounds {
            name: "get",
            index,
            len: items.len(),
        });
    }

    Ok(items.swap_remove(index as usize))
}

/// Returns the List without element i
pub fn builtin_remove(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("remove", &args, 2)?;
    let mut items = take_list("remove", &mut args, 0)?;
    let index = take_int("remove", &mut args, 1)?;

    if index < 0 || index as usize >= items.len() {
        return Err(ZError::IndexOutOfBounds {
            name: "remove",
            index,
            len: items.len(),
        });
    }

    items.remove(index as usize);
    Ok(Value::List(items))
}

/// Evaluates a List as an Expression under the current environment
pub fn builtin_eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("eval", &args, 1)?;
    let items = take_list("eval", &mut args, 0)?;
    Ok(eval(env, Value::Expr(items)))
}

/// Register all list builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "list", "list", builtin_list);
    define_builtin(env, "head", "head", builtin_head);
    define_builtin(env, "tail", "tail", builtin_tail);
    define_builtin(env, "join", "join", builtin_join);
    define_builtin(env, "len", "len", builtin_len);
    define_builtin(env, "get", "get", builtin_get);
    define_builtin(env, "remove", "remove", builtin_remove);
    define_builtin(env, "eval", "eval", builtin_eval);
}
