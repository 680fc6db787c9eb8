// ABOUTME: Value types representing Z-Lisp data: numbers, symbols, strings, expressions, lists, functions

use crate::env::Environment;
use crate::error::ZError;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Native function: receives the caller's environment and owns its evaluated
/// arguments. An `Err` is rendered into an `Error` value at the call site.
pub type BuiltinFn = fn(&Rc<Environment>, Vec<Value>) -> Result<Value, ZError>;

/// A builtin function together with its registry name.
///
/// The name doubles as the builtin's identity: every builtin is registered
/// under a unique internal name, so name equality is function equality.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// A user function created by `fun`.
///
/// `params` is the remaining (unfilled) parameter header; `locals` is the
/// function's owned environment, accumulating bindings across curried calls.
/// At full application the locals become a fresh frame whose parent is the
/// caller's environment.
#[derive(Debug, Clone)]
pub struct Lambda {
    pub params: Vec<String>,
    pub body: Vec<Value>,
    pub locals: HashMap<String, Value>,
}

impl Lambda {
    pub fn new(params: Vec<String>, body: Vec<Value>) -> Self {
        Lambda {
            params,
            body,
            locals: HashMap::new(),
        }
    }
}

/// A runtime value. `Expr` is the call form `(…)`, reduced by the evaluator;
/// `List` is the literal form `{…}` and self-evaluating.
///
/// Values own their children outright (no sharing), so `Clone` produces a
/// fully disjoint deep copy and moving a child out of a container transfers
/// its ownership.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Error(String),
    Symbol(String),
    Str(String),
    Expr(Vec<Value>),
    List(Vec<Value>),
    Builtin(Builtin),
    Lambda(Box<Lambda>),
}

impl Value {
    /// The empty expression `()`, returned by side-effecting builtins.
    pub fn empty_expr() -> Value {
        Value::Expr(Vec::new())
    }

    /// Surface type name, as used by `typeof` and in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Error(_) => "Error",
            Value::Symbol(_) => "Symbol",
            Value::Str(_) => "String",
            Value::Expr(_) => "Expression",
            Value::List(_) => "List",
            Value::Builtin(_) | Value::Lambda(_) => "Function",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

/// Structural equality. Numeric comparison never crosses the Int/Float
/// boundary; builtins compare by identity; user functions compare by header
/// and body, ignoring their local environments.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Expr(a), Value::Expr(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Lambda(a), Value::Lambda(b)) => a.params == b.params && a.body == b.body,
            _ => false,
        }
    }
}

fn fmt_children(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn fmt_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "\"")?;
    for c in s.chars() {
        match c {
            '"' => write!(f, "\\\"")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            _ => write!(f, "{}", c)?,
        }
    }
    write!(f, "\"")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                // Whole floats keep a decimal point so they re-parse as Float
                if n.is_finite() && n.fract() == 0.0 {
                    write!(f, "{:.1}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Str(s) => fmt_string(f, s),
            Value::Expr(items) => {
                write!(f, "(")?;
                fmt_children(f, items)?;
                write!(f, ")")
            }
            Value::List(items) => {
                write!(f, "{{")?;
                fmt_children(f, items)?;
                write!(f, "}}")
            }
            Value::Builtin(b) => write!(f, "<builtin_{}>", b.name),
            Value::Lambda(l) => {
                write!(f, "(fun {{")?;
                for (i, p) in l.params.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", p)?;
                }
                write!(f, "}} {{")?;
                fmt_children(f, &l.body)?;
                write!(f, "}})")
            }
        }
    }
}
