// ABOUTME: Command-line driver: prelude loading, script mode, and the REPL

use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::{Config, Editor};
use std::path::PathBuf;
use std::rc::Rc;
use z_lisp::builtins::io::builtin_load;
use z_lisp::builtins::register_builtins;
use z_lisp::config::{HISTORY_FILE, PRELUDE_FILE, PROMPT, VERSION, WELCOME_FOOTER, WELCOME_MESSAGE};
use z_lisp::env::Environment;
use z_lisp::eval::eval;
use z_lisp::highlighter::ZLispHelper;
use z_lisp::parser::parse;
use z_lisp::value::Value;

/// Z-Lisp interpreter
#[derive(Parser, Debug)]
#[command(name = "z-lisp")]
#[command(version = VERSION)]
#[command(about = "A small dynamically-typed Lisp interpreter")]
struct CliArgs {
    /// Script files to run in order (omit to start the REPL)
    #[arg(value_name = "FILE")]
    scripts: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let env = Environment::new();
    register_builtins(&env);

    // The prelude is optional; a missing or broken one is an ordinary Error
    let prelude = load_file(&env, PRELUDE_FILE);
    if prelude.is_error() {
        println!("{}", prelude);
    }

    if args.scripts.is_empty() {
        repl(&env)
    } else {
        for script in &args.scripts {
            let result = load_file(&env, &script.to_string_lossy());
            if result.is_error() {
                println!("{}", result);
            }
        }
        Ok(())
    }
}

/// Run a source file through the `load` builtin
fn load_file(env: &Rc<Environment>, path: &str) -> Value {
    builtin_load(env, vec![Value::Str(path.to_string())]).unwrap_or_else(Value::from)
}

/// Interactive loop: each submitted line is parsed as a top-level Expression
/// and its result printed, Errors included
fn repl(env: &Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::builder().auto_add_history(true).build();
    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(ZLispHelper));

    let _ = rl.load_history(HISTORY_FILE);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_FOOTER);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                match parse(&line) {
                    Ok(expr) => println!("{}", eval(env, expr)),
                    Err(e) => println!("{}", Value::from(e)),
                }
            }
            // Ctrl-C and Ctrl-D both leave the REPL
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    Ok(())
}
