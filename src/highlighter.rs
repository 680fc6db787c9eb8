// ABOUTME: Syntax highlighter for the REPL, coloring Z-Lisp tokens with ANSI codes

use crate::builtins::is_reserved;
use crate::parser::is_symbol_char;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use std::borrow::Cow;

// 4-bit colors for maximum terminal compatibility
const COLOR_RESET: &str = "\x1b[0m";
const COLOR_BRACKETS: &str = "\x1b[1;34m"; // Bold blue
const COLOR_BUILTIN: &str = "\x1b[36m"; // Cyan
const COLOR_NUMBER: &str = "\x1b[33m"; // Yellow
const COLOR_STRING: &str = "\x1b[32m"; // Green
const COLOR_COMMENT: &str = "\x1b[90m"; // Bright black (gray)

/// rustyline helper coloring the line being edited
#[derive(Completer, Helper, Hinter, Validator)]
pub struct ZLispHelper;

impl Highlighter for ZLispHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let highlighted = highlight_line(line);
        if highlighted == line {
            Cow::Borrowed(line)
        } else {
            Cow::Owned(highlighted)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

fn push_colored(result: &mut String, color: &str, text: &str) {
    result.push_str(color);
    result.push_str(text);
    result.push_str(COLOR_RESET);
}

/// Walk the line and colorize its tokens
fn highlight_line(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut result = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            // Comment runs to the end of the line
            ';' => {
                let rest: String = chars[i..].iter().collect();
                push_colored(&mut result, COLOR_COMMENT, &rest);
                break;
            }

            // String literal, keeping escaped quotes inside it
            '"' => {
                let start = i;
                i += 1;
                while i < chars.len() {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        i += 2;
                    } else if chars[i] == '"' {
                        i += 1;
                        break;
                    } else {
                        i += 1;
                    }
                }
                let text: String = chars[start..i].iter().collect();
                push_colored(&mut result, COLOR_STRING, &text);
            }

            '(' | ')' | '{' | '}' => {
                let mut text = String::new();
                text.push(chars[i]);
                push_colored(&mut result, COLOR_BRACKETS, &text);
                i += 1;
            }

            // Number: -? digit+ ( '.' digit* )?
            c if c.is_ascii_digit()
                || (c == '-' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit()) =>
            {
                let start = i;
                if chars[i] == '-' {
                    i += 1;
                }
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
                if i < chars.len() && chars[i] == '.' {
                    i += 1;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                let text: String = chars[start..i].iter().collect();
                push_colored(&mut result, COLOR_NUMBER, &text);
            }

            c if is_symbol_char(c) => {
                let start = i;
                while i < chars.len() && is_symbol_char(chars[i]) {
                    i += 1;
                }
                let symbol: String = chars[start..i].iter().collect();
                if is_reserved(&symbol) {
                    push_colored(&mut result, COLOR_BUILTIN, &symbol);
                } else {
                    result.push_str(&symbol);
                }
            }

            other => {
                result.push(other);
                i += 1;
            }
        }
    }

    result
}
