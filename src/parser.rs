// ABOUTME: Parser module turning Z-Lisp source text into the value tree using nom combinators

use nom::{
    branch::alt,
    bytes::complete::{escaped, take_while, take_while1},
    character::complete::{anychar, char, digit1, multispace1, none_of},
    combinator::{opt, recognize, value},
    multi::many0,
    IResult, Parser,
};

use crate::error::ZError;
use crate::value::Value;
use std::num::IntErrorKind;

/// Characters allowed in a symbol. Digits are included; numbers win because
/// they are tried first.
pub(crate) fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "^%_+-*/\\=<>!&".contains(c)
}

/// Skip whitespace and `;`-to-end-of-line comments
fn ws_and_comments(input: &str) -> IResult<&str, ()> {
    many0(alt((
        value((), multispace1),
        value((), (char(';'), take_while(|c| c != '\n'))),
    )))
    .map(|_| ())
    .parse(input)
}

/// Convert integer literal text, reporting range problems as Error values
/// in the manner of `strtol` diagnostics. Also backs the `int` builtin.
pub fn integer_literal(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Int(n),
        Err(e) => {
            let reason = match e.kind() {
                IntErrorKind::PosOverflow => "Overflow.",
                IntErrorKind::NegOverflow => "Underflow.",
                _ if leading_digits(text) => "Additional characters found.",
                _ => "No digits found.",
            };
            ZError::InvalidInteger {
                text: text.to_string(),
                reason,
            }
            .into()
        }
    }
}

/// Convert float literal text; non-finite results count as out of range.
/// Also backs the `float` builtin.
pub fn float_literal(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Float(n),
        Ok(_) => ZError::InvalidFloat {
            text: text.to_string(),
            reason: "Overflow.",
        }
        .into(),
        Err(_) => {
            let reason = if leading_digits(text) {
                "Additional characters found."
            } else {
                "No digits found."
            };
            ZError::InvalidFloat {
                text: text.to_string(),
                reason,
            }
            .into()
        }
    }
}

/// True when the text starts with an (optionally signed) digit
fn leading_digits(text: &str) -> bool {
    text.strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text)
        .starts_with(|c: char| c.is_ascii_digit())
}

/// Parse a number: `-? digit+ ( '.' digit* )?`
/// A dot in the token makes it a Float, otherwise an Integer.
fn parse_number(input: &str) -> IResult<&str, Value> {
    recognize((
        opt(char('-')),
        digit1,
        opt((char('.'), take_while(|c: char| c.is_ascii_digit()))),
    ))
        .map(|text: &str| {
            if text.contains('.') {
                float_literal(text)
            } else {
                integer_literal(text)
            }
        })
        .parse(input)
}

/// Parse a string literal with escape sequences: \" \\ \n \t
/// Unknown escapes keep their backslash.
fn parse_string(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('"')(input)?;

    // Handle empty strings
    if let Ok((input, _)) = char::<_, nom::error::Error<_>>('"')(input) {
        return Ok((input, Value::Str(String::new())));
    }

    let (input, content) = escaped(none_of("\"\\"), '\\', anychar)(input)?;
    let (input, _) = char('"')(input)?;

    let mut result = String::new();
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('t') => result.push('\t'),
                Some('\\') => result.push('\\'),
                Some('"') => result.push('"'),
                Some(other) => {
                    result.push('\\');
                    result.push(other);
                }
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }

    Ok((input, Value::Str(result)))
}

fn parse_symbol(input: &str) -> IResult<&str, Value> {
    take_while1(is_symbol_char)
        .map(|s: &str| Value::Symbol(s.to_string()))
        .parse(input)
}

/// Parse the components of a bracketed sequence up to `close`
fn parse_children(input: &str, close: char) -> IResult<&str, Vec<Value>> {
    let (input, _) = ws_and_comments(input)?;

    let mut items = Vec::new();
    let mut remaining = input;

    loop {
        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>(close)(remaining) {
            return Ok((rest, items));
        }

        let (rest, component) = parse_component(remaining)?;
        items.push(component);

        let (rest, _) = ws_and_comments(rest)?;
        remaining = rest;
    }
}

/// Parse a call form: `(component*)`
fn parse_expression(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('(')(input)?;
    let (input, items) = parse_children(input, ')')?;
    Ok((input, Value::Expr(items)))
}

/// Parse a list literal: `{component*}`
fn parse_list(input: &str) -> IResult<&str, Value> {
    let (input, _) = char('{')(input)?;
    let (input, items) = parse_children(input, '}')?;
    Ok((input, Value::List(items)))
}

fn parse_component(input: &str) -> IResult<&str, Value> {
    alt((
        parse_number,
        parse_string,
        parse_symbol,
        parse_expression,
        parse_list,
    ))
    .parse(input)
}

/// Public entry point: parse a whole source text into the top-level
/// Expression holding its components in order.
///
/// Out-of-range numeric literals become Error VALUES inside the tree;
/// a syntactic failure is the only Err case.
pub fn parse(input: &str) -> Result<Value, ZError> {
    let mut components = Vec::new();
    let mut remaining = input;

    loop {
        let (rest, _) = ws_and_comments(remaining).unwrap_or((remaining, ()));
        if rest.is_empty() {
            return Ok(Value::Expr(components));
        }

        match parse_component(rest) {
            Ok((rest, component)) => {
                components.push(component);
                remaining = rest;
            }
            Err(_) => return Err(ZError::Parse(diagnostic(rest))),
        }
    }
}

/// Point at the offending input, trimmed to a short snippet
fn diagnostic(rest: &str) -> String {
    let line = rest.lines().next().unwrap_or("");
    let snippet: String = line.chars().take(24).collect();
    if snippet.is_empty() {
        "unexpected end of input".to_string()
    } else {
        format!("unexpected input near '{}'", snippet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Parse a source holding exactly one component and unwrap it
    fn parse_one(input: &str) -> Value {
        match parse(input) {
            Ok(Value::Expr(mut items)) => {
                assert_eq!(items.len(), 1, "expected one component in {:?}", input);
                items.remove(0)
            }
            other => panic!("expected top-level expression, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_one("42"), Value::Int(42));
        assert_eq!(parse_one("-42"), Value::Int(-42));
        assert_eq!(parse_one("0"), Value::Int(0));
    }

    #[test]
    fn test_parse_floats() {
        assert_eq!(parse_one("2.5"), Value::Float(2.5));
        assert_eq!(parse_one("-2.5"), Value::Float(-2.5));
        // Trailing dot is a Float
        assert_eq!(parse_one("42."), Value::Float(42.0));
    }

    #[test]
    fn test_parse_integer_overflow_is_error_value() {
        let v = parse_one("99999999999999999999");
        assert_eq!(
            v,
            Value::Error("Invalid Integer '99999999999999999999'. Overflow.".to_string())
        );

        let v = parse_one("-99999999999999999999");
        assert_eq!(
            v,
            Value::Error("Invalid Integer '-99999999999999999999'. Underflow.".to_string())
        );
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(parse_one("x"), Value::Symbol("x".to_string()));
        assert_eq!(parse_one("foo_bar"), Value::Symbol("foo_bar".to_string()));
        for op in ["+", "-", "*", "/", "%", "^", "<", ">", "==", "!=", "&", "\\"] {
            assert_eq!(parse_one(op), Value::Symbol(op.to_string()));
        }
    }

    #[test]
    fn test_parse_strings() {
        assert_eq!(parse_one(r#""hello""#), Value::Str("hello".to_string()));
        assert_eq!(parse_one(r#""""#), Value::Str(String::new()));
        assert_eq!(
            parse_one(r#""a\nb\tc""#),
            Value::Str("a\nb\tc".to_string())
        );
        assert_eq!(
            parse_one(r#""say \"hi\"""#),
            Value::Str("say \"hi\"".to_string())
        );
        assert_eq!(parse_one(r#""back\\slash""#), Value::Str("back\\slash".to_string()));
    }

    #[test]
    fn test_parse_expression() {
        assert_eq!(
            parse_one("(+ 1 2)"),
            Value::Expr(vec![
                Value::Symbol("+".to_string()),
                Value::Int(1),
                Value::Int(2),
            ])
        );
        assert_eq!(parse_one("()"), Value::Expr(vec![]));
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_one("{1 2 3}"),
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
        assert_eq!(parse_one("{}"), Value::List(vec![]));
    }

    #[test]
    fn test_parse_nested() {
        assert_eq!(
            parse_one("(head {1 (2 3) {4}})"),
            Value::Expr(vec![
                Value::Symbol("head".to_string()),
                Value::List(vec![
                    Value::Int(1),
                    Value::Expr(vec![Value::Int(2), Value::Int(3)]),
                    Value::List(vec![Value::Int(4)]),
                ]),
            ])
        );
    }

    #[test]
    fn test_parse_comments() {
        assert_eq!(parse_one("; leading comment\n42"), Value::Int(42));
        assert_eq!(parse_one("(1 2 ; inline\n 3)").to_string(), "(1 2 3)");

        // Comment-only input is an empty top level
        assert_eq!(parse("; nothing here"), Ok(Value::Expr(vec![])));
    }

    #[test]
    fn test_parse_multiple_top_level_components() {
        let top = parse("(def {x} 1) x").unwrap();
        match top {
            Value::Expr(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[1], Value::Symbol("x".to_string()));
            }
            other => panic!("expected expression, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse("(1 2").is_err());
        assert!(parse(")").is_err());
        assert!(parse("{1 2").is_err());
        assert!(parse("\"unterminated").is_err());

        match parse("(1 .)") {
            Err(ZError::Parse(msg)) => assert!(msg.contains("unexpected"), "{}", msg),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_round_trip() {
        let values = [
            Value::Int(-17),
            Value::Float(3.0),
            Value::Float(2.5),
            Value::Str("a\"b\\c\nd".to_string()),
            Value::Symbol("max".to_string()),
            Value::List(vec![
                Value::Int(1),
                Value::Str("two".to_string()),
                Value::Expr(vec![Value::Symbol("+".to_string()), Value::Int(3)]),
            ]),
            Value::Expr(vec![]),
        ];

        for v in values {
            let text = v.to_string();
            assert_eq!(parse_one(&text), v, "round trip failed for {}", text);
        }
    }

    #[test]
    fn test_number_conversions_for_builtins() {
        assert_eq!(integer_literal("42"), Value::Int(42));
        assert_eq!(
            integer_literal("abc"),
            Value::Error("Invalid Integer 'abc'. No digits found.".to_string())
        );
        assert_eq!(
            integer_literal("12abc"),
            Value::Error("Invalid Integer '12abc'. Additional characters found.".to_string())
        );
        assert_eq!(float_literal("2.5"), Value::Float(2.5));
        assert_eq!(
            float_literal("x"),
            Value::Error("Invalid Float 'x'. No digits found.".to_string())
        );
    }
}
