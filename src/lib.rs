//! # gysp
//!
//! gysp is a small Lisp written in Rust. Source text is tokenized, parsed into
//! a tree of nodes, and evaluated by a tree-walking interpreter with lexical
//! scope, closures, special forms and a standard library of primitives.
//!
//! ```
//! use gysp::{interpreter::value::core::Object, run};
//!
//! let value = run("(fn square [x] (* x x)) (square 12)").unwrap();
//! assert_eq!(value, Object::Int(144));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::{eval_program, standard_environment},
        lexer::tokenize,
        parser::core::parse,
        value::core::Object,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum that represents source code as a
/// tree. The tree is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines one node kind per bracket family, plus symbols, literals and
///   already-evaluated objects.
/// - Renders nodes back into source-like text.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. Each
/// phase has its own enum, and `Error` wraps all three so that `?` composes
/// across phases.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers where the source position is known.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, environments and
/// value representations to provide a complete runtime for source code.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for each phase.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a program in a fresh standard environment and returns the value of
/// its last top-level form.
///
/// # Errors
/// The first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use gysp::{interpreter::value::core::Object, run};
///
/// assert_eq!(run("(+ 1 2 3)").unwrap(), Object::Int(6));
/// assert!(run("(+ 1 1.0)").is_err());
/// ```
pub fn run(source: &str) -> Result<Object, Error> {
    run_in(source, &standard_environment())
}

/// Runs a program in an existing environment.
///
/// Top-level definitions stay in `env`, so successive calls can build on each
/// other the way lines typed into a REPL do.
///
/// # Errors
/// The first lexical, syntax or runtime error. Forms before the failing one
/// have already run.
///
/// # Examples
/// ```
/// use gysp::{interpreter::evaluator::standard_environment, run_in};
///
/// let env = standard_environment();
/// run_in("(def greeting \"hello\")", &env).unwrap();
///
/// assert_eq!(run_in("(+ greeting \", world\")", &env).unwrap().to_string(),
///            "hello, world");
/// ```
pub fn run_in(source: &str, env: &Environment) -> Result<Object, Error> {
    let tokens = tokenize(source)?;
    let root = parse(&tokens)?;
    Ok(eval_program(&root, env)?)
}

/// Runs a program and optionally prints its final value.
///
/// With `auto_print` set, the value of the last top-level form is printed
/// unless it is `nil`.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use gysp::get_result;
///
/// // Simple expression: the result will be calculated and no error should occur.
/// let res = get_result("(def result (+ 2 2))", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("(def y (+ x 1))", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = run(source)?;

    if auto_print && !result.is_nil() {
        println!("{result}");
    }

    Ok(())
}
