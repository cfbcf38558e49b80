//! # rill
//!
//! rill is a small imperative scripting language implemented as a
//! tree-walking interpreter. It supports numeric and text values, variables,
//! `print`, conditionals, `while` and `for` loops, and `break`.

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

use std::io::Write;

use crate::interpreter::{
    evaluator::core::Context,
    lexer::tokenize,
    parser::statement::parse_program,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Provides a deterministic textual rendering for debugging.
pub mod ast;
/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or executing code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for script execution. It exposes the public
/// API for interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities and helpers.
///
/// This module provides reusable helpers and conversion routines used
/// throughout the interpreter, such as the numeric conversion backing text
/// repetition.
///
/// # Responsibilities
/// - Convert floating-point values into repetition counts without panics.
/// - Provide general utility functions used in multiple modules.
pub mod util;

/// Executes a script against standard output.
///
/// This function tokenizes, parses and executes all statements in the
/// provided source string using a fresh evaluation context. If execution
/// succeeds, it returns `Ok(())`; otherwise, it returns an error with
/// details about the failure.
///
/// # Errors
/// Returns an error if tokenization, parsing or execution fails.
///
/// # Examples
/// ```
/// use rill::run;
///
/// // A well-formed script executes without errors.
/// assert!(run("x = 1 + 2").is_ok());
///
/// // A `break` outside of a loop is a runtime error.
/// assert!(run("break").is_err());
/// ```
pub fn run(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();
    run_with_context(source, &mut context)
}

/// Executes a script against an existing evaluation context.
///
/// Variables already bound in the context remain visible to the script, and
/// bindings the script creates stay in the context afterwards. `print`
/// output goes to the context's sink, which is how tests capture it.
///
/// # Errors
/// Returns an error if tokenization, parsing or execution fails.
///
/// # Examples
/// ```
/// use rill::{interpreter::evaluator::core::Context, run_with_context};
///
/// let mut context = Context::with_output(Vec::new());
/// run_with_context("total = 2 + 2 print total", &mut context).unwrap();
///
/// assert_eq!(context.into_output(), b"4");
/// ```
pub fn run_with_context<W: Write>(source: &str,
                                  context: &mut Context<W>)
                                  -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;

    let mut iter = tokens.iter().peekable();
    let program = parse_program(&mut iter)?;

    context.run(&program)?;

    Ok(())
}
