// ABOUTME: Error taxonomy for the interpreter; every variant renders to an Error value

use crate::value::Value;
use thiserror::Error;

/// Everything that can go wrong during parsing or evaluation.
///
/// Errors never escape the language: each variant's message becomes the text
/// of an `Error` value, which propagates through expression reduction like
/// any other value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ZError {
    #[error("Unknown symbol '{0}'.")]
    UnknownSymbol(String),

    #[error("Expression must start with a Function. Received '{0}'.")]
    NotAFunction(&'static str),

    #[error("Function received too many arguments. Received {given}. Expected {total}.")]
    TooManyArguments { given: usize, total: usize },

    #[error("Invalid function format. Symbol '&' should be followed by exactly one Symbol.")]
    MalformedVariadic,

    /// Wrong variant for an argument, e.g. a String where a List was needed.
    #[error("Function '{name}' passed incorrect type for argument {index}. Got {got}, Expected {expected}.")]
    ArgType {
        name: &'static str,
        index: usize,
        got: &'static str,
        expected: &'static str,
    },

    /// Wrong variant for an element inside a List argument.
    #[error("Function '{name}' passed incorrect type for element {element} of argument {index}. Got {got}, Expected {expected}.")]
    ElementType {
        name: &'static str,
        index: usize,
        element: usize,
        got: &'static str,
        expected: &'static str,
    },

    #[error("Function '{name}' passed incorrect number of arguments. Got {got}, Expected {expected}.")]
    ArgCount {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("Function '{name}' passed incorrect number of arguments. Got {got}, Expected at least {expected}.")]
    ArgCountMin {
        name: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("Function '{name}' passed {{}} for argument {index}.")]
    EmptyArg { name: &'static str, index: usize },

    #[error("Function '{name}' passed non-empty for argument {index}. Expected {{}}.")]
    NonEmptyArg { name: &'static str, index: usize },

    #[error("Function '{name}' received forbidden Symbol '{symbol}'. This is a builtin Symbol.")]
    ReservedSymbol { name: &'static str, symbol: String },

    #[error("Function '{name}' received unmatching number of Symbols ({symbols}) and values ({values}).")]
    DefCountMismatch {
        name: &'static str,
        symbols: usize,
        values: usize,
    },

    #[error("Function '{name}' index out of bounds (index: {index}, list length: {len}).")]
    IndexOutOfBounds {
        name: &'static str,
        index: i64,
        len: usize,
    },

    #[error("Division By Zero.")]
    DivisionByZero,

    #[error("Invalid Integer '{text}'. {reason}")]
    InvalidInteger { text: String, reason: &'static str },

    #[error("Invalid Float '{text}'. {reason}")]
    InvalidFloat { text: String, reason: &'static str },

    #[error("Parser Error: {0}")]
    Parse(String),

    #[error("Failed to load library: {0}")]
    Load(String),
}

impl ZError {
    /// Type mismatch for argument `index` of builtin `name`.
    pub fn arg_type(name: &'static str, index: usize, got: &Value, expected: &'static str) -> Self {
        ZError::ArgType {
            name,
            index,
            got: got.type_name(),
            expected,
        }
    }
}

impl From<ZError> for Value {
    fn from(err: ZError) -> Self {
        Value::Error(err.to_string())
    }
}
