//! Type utilities: typeof, string, int, float
//!
//! `string` produces the display form of any value. `int` and `float`
//! convert between the numeric types and parse Strings, reporting malformed
//! text as Error values.

use super::{check_len, define_builtin};
use crate::env::Environment;
use crate::error::ZError;
use crate::parser::{float_literal, integer_literal};
use crate::value::Value;
use std::rc::Rc;

/// (typeof v): the type name as a String
pub fn builtin_typeof(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    check_len("typeof", &args, 1)?;
    Ok(Value::Str(args[0].type_name().to_string()))
}

/// (string v): the display form as a String
pub fn builtin_string(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    check_len("string", &args, 1)?;
    Ok(Value::Str(args[0].to_string()))
}

/// (int v): Integer from Integer, truncated Float, or parsed String
pub fn builtin_int(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("int", &args, 1)?;

    match args.remove(0) {
        v @ Value::Int(_) => Ok(v),
        Value::Float(f) => Ok(Value::Int(f as i64)),
        Value::Str(s) => Ok(integer_literal(&s)),
        other => Err(ZError::arg_type("int", 0, &other, "Number or String")),
    }
}

/// (float v): Float from Float, widened Integer, or parsed String
pub fn builtin_float(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("float", &args, 1)?;

    match args.remove(0) {
        Value::Int(n) => Ok(Value::Float(n as f64)),
        v @ Value::Float(_) => Ok(v),
        Value::Str(s) => Ok(float_literal(&s)),
        other => Err(ZError::arg_type("float", 0, &other, "Number or String")),
    }
}

/// Register all type utility builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "typeof", "typeof", builtin_typeof);
    define_builtin(env, "string", "string", builtin_string);
    define_builtin(env, "int", "int", builtin_int);
    define_builtin(env, "float", "float", builtin_float);
}
