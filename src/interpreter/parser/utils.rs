use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Consumes the next token, requiring it to match `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `expected`: The token that must come next.
/// - `line`: Line used when the input ends instead.
///
/// # Errors
/// - `UnexpectedToken` naming both the found and the expected token.
/// - `UnexpectedEndOfInput` when no token remains.
pub fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                           expected: &Token,
                           line: usize)
                           -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((token, _)) if token == expected => Ok(()),
        Some((token, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {token:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Skips semicolons between statements.
///
/// Semicolons never separate anything inside an expression; between
/// statements they are permitted and ignored, so `print 1; break;` inside a
/// block parses as two statements.
pub fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }
}
