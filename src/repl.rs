//! Interactive read-eval-print loop.
//!
//! The REPL reads one line at a time behind a `>> ` prompt, parses it,
//! prints each parse error on its own line, and otherwise evaluates and
//! prints the result. The sentinel `salir` (or end of input) terminates
//! the loop.
//!
//! A single environment lives for the whole session, so `variable`
//! bindings and function definitions persist across lines.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use crate::evaluator::evaluate;
use crate::lexer::Lexer;
use crate::object::{Environment, Object};
use crate::parser::Parser;

/// The prompt printed before every line.
const PROMPT: &str = ">> ";

/// The input that terminates the session.
const QUIT: &str = "salir";

/// Runs the REPL over stdin/stdout until `salir` or end of input.
pub fn start() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Rc::new(RefCell::new(Environment::new()));

    loop {
        stdout.write_all(PROMPT.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let source = line.trim();
        if source == QUIT {
            return Ok(());
        }
        if source.is_empty() {
            continue;
        }

        let mut parser = Parser::new(Lexer::new(source));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for error in parser.errors() {
                writeln!(stdout, "{}", error.message)?;
            }
            continue;
        }

        let result = evaluate(&program, &env);
        if !matches!(result, Object::Null) {
            writeln!(stdout, "{}", result.inspect())?;
        }
    }
}
