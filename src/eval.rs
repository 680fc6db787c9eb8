// ABOUTME: Evaluator module reducing expression values and applying functions

use crate::env::Environment;
use crate::error::ZError;
use crate::value::{Lambda, Value};
use std::rc::Rc;

/// Evaluate a value. Symbols resolve through the environment, Expressions
/// reduce, every other variant is already a result.
pub fn eval(env: &Rc<Environment>, value: Value) -> Value {
    match value {
        Value::Symbol(name) => match env.get(&name) {
            Some(found) => found,
            None => ZError::UnknownSymbol(name).into(),
        },
        Value::Expr(children) => eval_expr(env, children),
        other => other,
    }
}

/// Reduce a call form: evaluate the children in order, short-circuit to the
/// first Error, apply the empty/single-child rules, then invoke the head.
fn eval_expr(env: &Rc<Environment>, children: Vec<Value>) -> Value {
    let mut children: Vec<Value> = children.into_iter().map(|child| eval(env, child)).collect();

    if let Some(i) = children.iter().position(|c| c.is_error()) {
        return children.swap_remove(i);
    }

    // () evaluates to itself
    if children.is_empty() {
        return Value::Expr(children);
    }

    // Parenthesis-elision: (x) is x. A lone user function is instead invoked
    // with zero arguments, so variadic and zero-parameter functions can be
    // called as (f).
    if children.len() == 1 {
        return match children.remove(0) {
            Value::Lambda(lambda) => apply(env, *lambda, Vec::new()),
            only => only,
        };
    }

    let first = children.remove(0);
    match first {
        Value::Builtin(builtin) => (builtin.func)(env, children).unwrap_or_else(Value::from),
        Value::Lambda(lambda) => apply(env, *lambda, children),
        other => ZError::NotAFunction(other.type_name()).into(),
    }
}

/// Bind arguments to parameters, then either evaluate the body (header
/// exhausted) or return the partially-applied function.
///
/// The parameter `&` collects all remaining arguments into a List bound to
/// the single symbol that must follow it; with no arguments left it binds
/// the empty List.
pub fn apply(env: &Rc<Environment>, mut lambda: Lambda, mut args: Vec<Value>) -> Value {
    let given = args.len();
    let total = lambda.params.len();

    while !args.is_empty() {
        if lambda.params.is_empty() {
            return ZError::TooManyArguments { given, total }.into();
        }

        let param = lambda.params.remove(0);

        if param == "&" {
            if lambda.params.len() != 1 {
                return ZError::MalformedVariadic.into();
            }
            let rest = lambda.params.remove(0);
            let remaining = std::mem::take(&mut args);
            lambda.locals.insert(rest, Value::List(remaining));
            break;
        }

        lambda.locals.insert(param, args.remove(0));
    }

    if lambda.params.first().is_some_and(|p| p == "&") {
        if lambda.params.len() != 2 {
            return ZError::MalformedVariadic.into();
        }
        lambda.params.remove(0);
        let rest = lambda.params.remove(0);
        lambda.locals.insert(rest, Value::List(Vec::new()));
    }

    if lambda.params.is_empty() {
        // Parent is rebound to the caller's environment at invocation
        let frame = Environment::with_parent(env.clone());
        for (name, value) in lambda.locals {
            frame.define(name, value);
        }
        eval(&frame, Value::Expr(lambda.body))
    } else {
        Value::Lambda(Box::new(lambda))
    }
}
