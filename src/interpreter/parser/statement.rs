use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_token, skip_separators},
        },
    },
};

/// Parses a whole program.
///
/// A program is a sequence of statements running to the end of input.
/// Semicolons between statements are skipped as separators.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// All parsed top-level statements, in order.
///
/// # Example
/// ```
/// use rill::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let tokens = tokenize("x = 1 print x").unwrap();
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);
        let line = match tokens.peek() {
            Some((_, line)) => *line,
            None => break,
        };
        statements.push(parse_statement(tokens, line)?);
    }

    Ok(statements)
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `print` statement.
/// - an `if` statement with an optional `else` branch.
/// - a `while` loop.
/// - a `for` loop.
/// - a `break`.
/// - an assignment.
///
/// The leading keyword decides the construct; anything else must be an
/// assignment.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `line`: Line of the enclosing construct, used when the input ends
///   where a statement was required.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Print, line)) => {
            let line = *line;
            tokens.next();

            let expr = parse_expression(tokens, line)?;
            Ok(Statement::Print { expr, line })
        },
        Some((Token::If, line)) => {
            let line = *line;
            tokens.next();
            parse_if(tokens, line)
        },
        Some((Token::While, line)) => {
            let line = *line;
            tokens.next();
            parse_while(tokens, line)
        },
        Some((Token::For, line)) => {
            let line = *line;
            tokens.next();
            parse_for(tokens, line)
        },
        Some((Token::Break, line)) => {
            let line = *line;
            tokens.next();
            Ok(Statement::Break { line })
        },
        _ => parse_assignment(tokens, line),
    }
}

/// Parses an assignment statement: `<word> = <expression>`.
///
/// Assignment is the fallback statement form, so a leading token that is not
/// a word reports an unknown statement rather than a missing `=`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the variable name.
/// - `line`: Line of the enclosing construct, used when the input ends
///   instead.
///
/// # Returns
/// A `Statement::Assignment` node.
///
/// # Errors
/// - `UnknownStatement` when the leading token is not a word.
/// - `UnexpectedToken` when the word is not followed by `=`.
/// - Propagates errors from the assigned expression.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Word(name), line)) => {
            let name = name.clone();
            let line = *line;
            tokens.next();

            expect_token(tokens, &Token::Equals, line)?;

            let value = parse_expression(tokens, line)?;
            Ok(Statement::Assignment { name, value, line })
        },
        Some((token, line)) => {
            Err(ParseError::UnknownStatement { token: format!("{token:?}"),
                                               line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses the body position of a control-flow construct.
///
/// Grammar: `statement_or_block := block | statement`
fn parse_statement_or_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LBrace, _)) = tokens.peek() {
        parse_block(tokens)
    } else {
        parse_statement(tokens, line)
    }
}

/// Parses an `if` statement after its keyword.
///
/// Grammar: `if := "if" expression statement_or_block ("else"
/// statement_or_block)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens, line)?;
    let then_branch = parse_statement_or_block(tokens, line)?;

    let else_branch = if let Some((Token::Else, _)) = tokens.peek() {
        tokens.next();
        Some(Box::new(parse_statement_or_block(tokens, line)?))
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses a `while` loop after its keyword.
///
/// Grammar: `while := "while" expression statement_or_block`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `while` keyword.
/// - `line`: Line number of the `while` token.
fn parse_while<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_expression(tokens, line)?;
    let body = parse_statement_or_block(tokens, line)?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          line })
}

/// Parses a `for` loop after its keyword.
///
/// The header consists of two assignments around a condition, separated by
/// required semicolons.
///
/// Grammar: `for := "for" assignment ";" expression ";" assignment
/// statement_or_block`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `for` keyword.
/// - `line`: Line number of the `for` token.
fn parse_for<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let initializer = parse_assignment(tokens, line)?;
    expect_token(tokens, &Token::Semicolon, line)?;

    let condition = parse_expression(tokens, line)?;
    expect_token(tokens, &Token::Semicolon, line)?;

    let increment = parse_assignment(tokens, line)?;
    let body = parse_statement_or_block(tokens, line)?;

    Ok(Statement::For { initializer: Box::new(initializer),
                        condition,
                        increment: Box::new(increment),
                        body: Box::new(body),
                        line })
}
