/// The named constants available to scripts.
///
/// Declares the constant table (`PI`, `E`) used to seed the evaluation
/// context's environment.
///
/// # Responsibilities
/// - Defines the table of named constants.
pub mod constants;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, executes statements and evaluates
/// expressions, manages the variable environment, and writes `print` output
/// to a caller-supplied sink. It is the core execution engine of the
/// interpreter.
///
/// # Responsibilities
/// - Executes statements, including control flow and loops.
/// - Evaluates expressions; expression evaluation is total and cannot fail.
/// - Reports runtime errors such as `break` outside of a loop.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, text literals, identifiers, operators, and keywords. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and text literals, identifiers, and operators.
/// - Reports lexical errors for malformed literals and comments.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of statements and
/// expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
/// - Supports assignments, control flow, and the full expression grammar.
pub mod parser;
/// The value module defines the runtime data type for evaluation.
///
/// This module declares the `Value` enum used during execution and its total
/// coercions between the numeric and textual views.
///
/// # Responsibilities
/// - Defines the `Value` enum with its number and text variants.
/// - Implements the total `as_number`/`as_text` coercions and truthiness.
pub mod value;
