use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. Both operands of the resulting
/// node are evaluated unconditionally; there is no short-circuiting.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// A comparison expression tree using `ComparisonOperator::Or`.
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_logical_and(tokens, line)?;

    loop {
        if let Some((Token::DoublePipe, line)) = tokens.peek() {
            let line = *line;
            tokens.next();

            let right = parse_logical_and(tokens, line)?;

            left = Expr::ComparisonOp { left: Box::new(left),
                                        op: ComparisonOperator::Or,
                                        right: Box::new(right),
                                        line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Precedence is higher than OR and
/// lower than equality.
///
/// Grammar: `logical_and := equality ("&&" equality)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// A comparison expression tree using `ComparisonOperator::And`.
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_equality(tokens, line)?;

    loop {
        if let Some((Token::DoubleAmpersand, line)) = tokens.peek() {
            let line = *line;
            tokens.next();

            let right = parse_equality(tokens, line)?;

            left = Expr::ComparisonOp { left: Box::new(left),
                                        op: ComparisonOperator::And,
                                        right: Box::new(right),
                                        line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses equality expressions.
///
/// Equality applies at most once: `a == b == c` parses the first comparison
/// and leaves the second `==` for the caller, which rejects it. This keeps
/// chained equality from silently comparing a boolean against a value.
///
/// Grammar: `equality := relational (("==" | "!=") relational)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// The relational expression, possibly wrapped in one equality node.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let left = parse_relational(tokens, line)?;

    if let Some((token, line)) = tokens.peek()
       && let Some(op) = token_to_comparison_operator(token)
       && matches!(op,
                   ComparisonOperator::Equal | ComparisonOperator::NotEqual)
    {
        let line = *line;
        tokens.next();

        let right = parse_relational(tokens, line)?;

        return Ok(Expr::ComparisonOp { left: Box::new(left),
                                       op,
                                       right: Box::new(right),
                                       line });
    }

    Ok(left)
}

/// Parses relational expressions.
///
/// This parser handles the ordering operators `<`, `>`, `<=` and `>=` with
/// left associativity.
///
/// Grammar: `relational := additive (("<" | ">" | "<=" | ">=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream (token + line number) wrapped in a `Peekable`.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// A possibly nested `Expr::ComparisonOp` tree.
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_additive(tokens, line)?;

    while let Some((token, line)) = tokens.peek() {
        let op = match token_to_comparison_operator(token) {
            Some(op) if is_relational_op(op) => op,
            _ => break,
        };

        let line = *line;
        tokens.next();

        let right = parse_additive(tokens, line)?;

        left = Expr::ComparisonOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens, line)?;

    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let line = *line;
            tokens.next();

            let right = parse_multiplicative(tokens, line)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*` and `/`.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
/// - `line`: Line used when the input ends instead.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens, line)?;

    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let line = *line;
            tokens.next();

            let right = parse_unary(tokens, line)?;

            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Maps a token to its corresponding arithmetic binary operator.
///
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to an arithmetic
/// operator, otherwise `None`.
///
/// # Example
/// ```
/// use rill::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its corresponding comparison or logical operator.
///
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(ComparisonOperator)` if the token corresponds to a comparison or
/// logical operator, otherwise `None`.
///
/// # Example
/// ```
/// use rill::{
///     ast::ComparisonOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_comparison_operator},
/// };
///
/// assert_eq!(token_to_comparison_operator(&Token::LessEqual),
///            Some(ComparisonOperator::LessEqual));
/// ```
#[must_use]
pub const fn token_to_comparison_operator(token: &Token) -> Option<ComparisonOperator> {
    match token {
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::DoubleAmpersand => Some(ComparisonOperator::And),
        Token::DoublePipe => Some(ComparisonOperator::Or),
        _ => None,
    }
}

/// Determines whether an operator belongs to the ordering class.
///
/// # Example
/// ```
/// use rill::{ast::ComparisonOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(ComparisonOperator::Less));
/// assert!(!is_relational_op(ComparisonOperator::Equal));
/// ```
#[must_use]
pub const fn is_relational_op(op: ComparisonOperator) -> bool {
    matches!(op,
             ComparisonOperator::Less
             | ComparisonOperator::Greater
             | ComparisonOperator::LessEqual
             | ComparisonOperator::GreaterEqual)
}
