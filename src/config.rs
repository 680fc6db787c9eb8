// ABOUTME: Configuration and constants for the interpreter

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WELCOME_MESSAGE: &str = concat!("Z-Lisp, v: ", env!("CARGO_PKG_VERSION"));
pub const WELCOME_FOOTER: &str = "Press Ctrl-C to Exit\n";

pub const PROMPT: &str = "z-lisp> ";

/// Prelude loaded from the working directory before any user input
pub const PRELUDE_FILE: &str = "std.zsp";
pub const HISTORY_FILE: &str = ".zlisp_history";
