//! I/O operations: print, load
//!
//! `print` writes display forms to stdout. `load` reads a source file,
//! evaluates its top-level forms in order, and prints any Error results,
//! which is also how the driver runs script files and the prelude.

use super::{check_len, define_builtin, take_string};
use crate::env::Environment;
use crate::error::ZError;
use crate::eval::eval;
use crate::parser::parse;
use crate::value::Value;
use std::fs;
use std::rc::Rc;

/// (print a b ...): each argument in display form followed by a space,
/// then a newline. Returns ().
pub fn builtin_print(_env: &Rc<Environment>, args: Vec<Value>) -> Result<Value, ZError> {
    for arg in &args {
        print!("{} ", arg);
    }
    println!();
    Ok(Value::empty_expr())
}

/// (load "file.zsp"): parse and run a source file under the current
/// environment. Error results are printed; the return value is ().
pub fn builtin_load(env: &Rc<Environment>, mut args: Vec<Value>) -> Result<Value, ZError> {
    check_len("load", &args, 1)?;
    let path = take_string("load", &mut args, 0)?;

    let source = fs::read_to_string(&path)
        .map_err(|_| ZError::Load(format!("Unable to open file '{}'.", path)))?;
    let top = parse(&source).map_err(|e| ZError::Load(e.to_string()))?;

    if let Value::Expr(forms) = top {
        for form in forms {
            let result = eval(env, form);
            if result.is_error() {
                println!("{}", result);
            }
        }
    }

    Ok(Value::empty_expr())
}

/// Register all I/O builtins in the environment
pub fn register(env: &Rc<Environment>) {
    define_builtin(env, "print", "print", builtin_print);
    define_builtin(env, "load", "load", builtin_load);
}

#[cfg(test)]
mod tests {
    use super::super::{eval_str, register_builtins};
    use crate::env::Environment;
    use crate::eval::eval;
    use crate::parser::parse;
    use crate::value::Value;

    #[test]
    fn test_print_returns_empty_expression() {
        assert_eq!(eval_str(r#"(print "x" 1 {2})"#), Value::empty_expr());
    }

    #[test]
    fn test_load_missing_file() {
        assert_eq!(
            eval_str(r#"(load "no-such-file.zsp")"#),
            Value::Error("Failed to load library: Unable to open file 'no-such-file.zsp'.".to_string())
        );
    }

    #[test]
    fn test_load_requires_a_string() {
        assert_eq!(
            eval_str("(load 5)"),
            Value::Error(
                "Function 'load' passed incorrect type for argument 0. Got Integer, Expected String."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_load_runs_definitions() {
        // Demo scripts live in the crate root, which is the test working dir
        let env = Environment::new();
        register_builtins(&env);

        let top = parse(r#"(load "demos/doubler.zsp")"#).expect("parse failed");
        let mut result = Value::empty_expr();
        if let Value::Expr(forms) = top {
            for form in forms {
                result = eval(&env, form);
            }
        }
        assert_eq!(result, Value::empty_expr());

        let top = parse("(double 21)").expect("parse failed");
        if let Value::Expr(forms) = top {
            for form in forms {
                assert_eq!(eval(&env, form), Value::Int(42));
            }
        }
    }

    #[test]
    fn test_load_parse_failure() {
        let result = eval_str(r#"(load "demos/README.md")"#);
        match result {
            Value::Error(msg) => {
                assert!(msg.starts_with("Failed to load library:"), "{}", msg)
            }
            other => panic!("expected load error, got {:?}", other),
        }
    }
}
