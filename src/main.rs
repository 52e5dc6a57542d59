//! The LPP interpreter CLI.
//!
//! This is the main entry point for the `lpp` binary. Without a
//! subcommand it starts the interactive REPL; `lpp run <file>` executes
//! a script from disk.
//!
//! # Usage
//!
//! ```text
//! lpp              # interactive session, terminated with `salir`
//! lpp run hola.lpp # run a script
//! ```
//!
//! # Error Reporting
//!
//! Script parse errors are rendered with [ariadne](https://docs.rs/ariadne)
//! so the offending span is highlighted in the source. The REPL prints
//! the bare message per line instead, since the line is still on screen.

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand};
use lpp::evaluator::evaluate;
use lpp::lexer::Lexer;
use lpp::object::{Environment, Object};
use lpp::parser::{ParseError, Parser as LppParser};
use lpp::repl;
use std::cell::RefCell;
use std::process::ExitCode;
use std::rc::Rc;

/// Command-line interface for the LPP interpreter.
#[derive(Parser)]
#[command(name = "lpp")]
#[command(about = "El lenguaje de programación LPP", long_about = None)]
struct Cli {
    /// The subcommand to execute. Defaults to the REPL.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Start the interactive session.
    Repl,
    /// Run an LPP script.
    Run {
        /// The source file to execute (e.g., `hola.lpp`).
        file: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Repl) => match repl::start() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("Error: {error}");
                ExitCode::FAILURE
            }
        },
        Some(Commands::Run { file }) => run(&file),
    }
}

/// Reports a parse error with source location highlighting.
fn report_parse_error(filename: &str, source: &str, error: &ParseError) {
    Report::build(ReportKind::Error, (filename, error.span.start..error.span.end))
        .with_message(&error.message)
        .with_label(
            Label::new((filename, error.span.start..error.span.end))
                .with_message(&error.message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
        .ok();
}

/// Runs an LPP source file.
///
/// The pipeline is read → parse → evaluate. Parse errors are reported
/// with their spans and stop the script before evaluation. A runtime
/// error becomes a nonzero exit; any other non-null result is printed
/// in its `inspect()` form.
fn run(file: &str) -> ExitCode {
    let source = match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: no se pudo leer {file}: {error}");
            return ExitCode::FAILURE;
        }
    };

    let mut parser = LppParser::new(Lexer::new(&source));
    let program = parser.parse_program();

    if !parser.errors().is_empty() {
        for error in parser.errors() {
            report_parse_error(file, &source, error);
        }
        return ExitCode::FAILURE;
    }

    let env = Rc::new(RefCell::new(Environment::new()));
    let result = evaluate(&program, &env);

    match result {
        Object::Error(_) => {
            eprintln!("{}", result.inspect());
            ExitCode::FAILURE
        }
        Object::Null => ExitCode::SUCCESS,
        other => {
            println!("{}", other.inspect());
            ExitCode::SUCCESS
        }
    }
}
