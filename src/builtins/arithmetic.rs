//! Arithmetic operations: +, -, *, /, %, ^, min, max
//!
//! All take two or more operands, except `-` which negates a single operand.
//! Operands must be Integers or Floats; one Float widens the whole operation
//! to Float. Integer arithmetic wraps on overflow.
//!
//! `+` is overloaded on its first operand: a String concatenates (converting
//! other operands to their display form), a List joins.

use super::{check_min_len, define_builtin, lists};
use crate::env::Environment;
use crate::error::ZError;
use crate::value::Value;
use std::rc::Rc;

/// Numeric operands after the mixed-mode widening rule: either all Integer
/// or, if any Float was present, all Float.
pub(super) enum Operands {
    Ints(Vec<i64>),
    Floats(Vec<f64>),
}

pub(super) fn numeric_operands(
    name: &'static str,
    args: Vec<Value>,
) -> Result<Operands, ZError> {
    let mut ints = Vec::with_capacity(args.len());
    let mut floats = Vec::with_capacity(args.len());
    let mut widened = false;

    for (index, arg) in args.into_iter().enumerate() {
        match arg {
            Value::Int(n) => {
                ints.push(n);
                floats.push(n as f64);
            }
            Value::Float(f) => {
                widened = true;
                floats.push(f);
            }
            other => return Err(ZError::arg_type(name, index, &other, "Number")),
        }
    }

    if widened {
        Ok(Operands::Floats(floats))
    } else {
        Ok(Operands::Ints(ints))
    }
}

/// Left-fold the operands with the per-mode operator
fn reduce(
    name: &'static str,
    args: Vec<Value>,
    int_op: fn(i64, i64) -> Result<i64, ZError>,
    float_op: fn(f64, f64) -> Result<f64, ZError>,
) -> Result<Value, ZError> {
    check_min_len(name, &args, 2)?;

    match numeric_operands(name, args)? {
        Operands::Ints(mut xs) => {
            let mut acc = xs.remove(0);
            for y in xs {
                acc = int_op(acc, y)?;
            }
            Ok(Value::Int(acc))
        }
        Operands::Floats(mut xs) => {
            let mut acc = xs.remove(0);
            for y in xs {
                acc = float_op(acc, y)?;
            }
            Ok(Value::Float(acc))
        }
    }
}

/// String overload of `+`: concatenate, converting non-String operands to
/// their display form
fn concat_strings(mut args: Vec<Value>) -> Result<Value, ZError> {
    let mut out = match args.remove(0) {
        Value::Str(s) => s,
        // The caller dispatched here on a String first operand
        other => other.to_string(),
    };

    for arg in args {
        match arg {
            Value::Str(s) => out.push_str(&s),
            other => out.push_str(&other.to_string()),
        }
    }

    Ok(Value::Str(out))
}

pub fn builtin_add(env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    check_min_len("+", &args, 2)?;

    match args.first() {
        Some(Value::Str(_)) => concat_strings(args),
        Some(Value::List(_)) => lists::builtin_join(env, args),
        _ => reduce(
            "+",
            args,
            |a, b| Ok(a.wrapping_add(b)),
            |a, b| Ok(a + b),
        ),
    }
}

pub fn builtin_sub(_env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    // Unary minus negates
    if args.len() == 1 {
        return match args.remove(0) {
            Value::Int(n) => Ok(Value::Int(n.wrapping_neg())),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Err(ZError::arg_type("-", 0, &other, "Number")),
        };
    }

    reduce(
        "-",
        args,
        |a, b| Ok(a.wrapping_sub(b)),
        |a, b| Ok(a - b),
    )
}

pub fn builtin_mul(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    reduce(
        "*",
        args,
        |a, b| Ok(a.wrapping_mul(b)),
        |a, b| Ok(a * b),
    )
}

pub fn builtin_div(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    reduce(
        "/",
        args,
        |a, b| {
            if b == 0 {
                Err(ZError::DivisionByZero)
            } else {
                Ok(a.wrapping_div(b))
            }
        },
        |a, b| {
            if b == 0.0 {
                Err(ZError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        },
    )
}

pub fn builtin_mod(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    reduce(
        "%",
        args,
        |a, b| {
            if b == 0 {
                Err(ZError::DivisionByZero)
            } else {
                Ok(a.wrapping_rem(b))
            }
        },
        |a, b| {
            if b == 0.0 {
                Err(ZError::DivisionByZero)
            } else {
                Ok(a % b)
            }
        },
    )
}

pub fn builtin_pow(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    reduce(
        "^",
        args,
        // Integer exponentiation goes through f64 and truncates
        |a, b| Ok((a as f64).powf(b as f64) as i64),
        |a, b| Ok(a.powf(b)),
    )
}

pub fn builtin_min(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    reduce(
        "min",
        args,
        |a, b| Ok(a.min(b)),
        |a, b| Ok(if a < b { a } else { b }),
    )
}

pub fn builtin_max(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    reduce(
        "max",
        args,
        |a, b| Ok(a.max(b)),
        |a, b| Ok(if a > b { a } else { b }),
    )
}

/// Register all arithmetic builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "+", "add", builtin_add);
    define_builtin(env, "-", "sub", builtin_sub);
    define_builtin(env, "*", "mul", builtin_mul);
    define_builtin(env, "/", "div", builtin_div);
    define_builtin(env, "%", "mod", builtin_mod);
    define_builtin(env, "^", "pow", builtin_pow);
    define_builtin(env, "min", "min", builtin_min);
    define_builtin(env, "max", "max", builtin_max);
}
