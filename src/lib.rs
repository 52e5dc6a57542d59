//! The LPP interpreter library.
//!
//! LPP is a small, dynamically typed language with Spanish keywords:
//! `variable` binds names, `procedimiento` builds first-class functions
//! with closures, `si`/`sino` branch on truthiness, and `regresa`
//! returns early.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`lexer`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Pratt parser with accumulated errors
//! - [`object`] - Runtime values and environments
//! - [`evaluator`] - The tree-walking evaluator
//! - [`repl`] - The interactive `>> ` loop
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use lpp::evaluator::evaluate;
//! use lpp::lexer::Lexer;
//! use lpp::object::Environment;
//! use lpp::parser::Parser;
//!
//! let source = "
//!     variable suma = procedimiento(x, y) { regresa x + y; };
//!     suma(5, suma(2, 1));";
//!
//! let mut parser = Parser::new(Lexer::new(source));
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//!
//! let env = Rc::new(RefCell::new(Environment::new()));
//! assert_eq!(evaluate(&program, &env).inspect(), "8");
//! ```

pub mod ast;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod token;
