use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_token,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). The operand must be
/// a primary expression, so a doubled minus such as `--5` is rejected as an
/// unknown expression.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" primary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();

        let expr = parse_primary(tokens, line)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_primary(tokens, line)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - text literals
/// - variable references
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | TEXT
///              | WORD
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line })?;

    match peeked {
        (Token::Number(number), line) => {
            let expr = Expr::Literal { value: LiteralValue::Number(*number),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Text(text), line) => {
            let expr = Expr::Literal { value: LiteralValue::Text(text.clone()),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::Word(name), line) => {
            let expr = Expr::Variable { name: name.clone(),
                                        line: *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, line) => {
            let line = *line;
            tokens.next();

            let expr = parse_expression(tokens, line)?;
            expect_token(tokens, &Token::RParen, line)?;
            Ok(expr)
        },
        (token, line) => Err(ParseError::UnknownExpression { token: format!("{token:?}"),
                                                             line:  *line, }),
    }
}
