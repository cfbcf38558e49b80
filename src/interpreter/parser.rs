/// Binary expression parsing.
///
/// Implements one parsing function per precedence level, from logical OR
/// down to multiplication, plus the token-to-operator mappings.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited sequences of statements.
pub mod block;

/// Core parsing entry points.
///
/// Declares the `ParseResult` alias and the expression entry point.
pub mod core;

/// Statement parsing.
///
/// Implements parsing for programs, statements, assignments, and the
/// control-flow constructs.
pub mod statement;

/// Unary and primary expression parsing.
///
/// Handles prefix negation and the atomic expression forms.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides the required-token helper and separator skipping used across the
/// statement parsers.
pub mod utils;
