use logos::{FilterResult, Logos};

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `5.`.
    /// A second decimal point inside a numeric run is a lex error.
    #[regex(r"[0-9]+\.?[0-9]*", parse_number)]
    #[regex(r"[0-9]+\.[0-9]*\.[0-9.]*", reject_second_dot)]
    Number(f64),
    /// Text literal tokens, such as `"hello"`. The callback scans up to the
    /// closing quote and resolves escape sequences.
    #[token("\"", lex_text)]
    Text(String),
    /// `print`
    #[token("print")]
    Print,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `for`
    #[token("for")]
    For,
    /// `do`
    #[token("do")]
    Do,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// Identifier tokens; variable names such as `x` or `total$count`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `/* Block comments, possibly spanning lines. */`
    #[token("/*", lex_block_comment)]
    BlockComment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `!`
    #[token("!")]
    Bang,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `|`
    #[token("|")]
    Pipe,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Newlines advance the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Errors produced while scanning a token.
///
/// `UnexpectedCharacter` is the catch-all for input no pattern recognizes;
/// the driver skips those characters silently. The remaining variants are
/// fatal and surface as a [`ParseError`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LexError {
    /// A character no token pattern recognizes.
    #[default]
    UnexpectedCharacter,
    /// A numeric literal with more than one decimal point.
    InvalidFloatLiteral,
    /// A text literal opened but never closed.
    UnterminatedString,
    /// A block comment opened but never closed.
    UnterminatedBlockComment,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError::InvalidFloatLiteral)`: If the slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice().parse().map_err(|_| LexError::InvalidFloatLiteral)
}

/// Rejects numeric runs containing a second decimal point, such as `1.2.3`.
fn reject_second_dot(_lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    Err(LexError::InvalidFloatLiteral)
}

/// Scans a text literal after its opening quote.
///
/// Escape sequences `\"`, `\n` and `\t` resolve to the quote, newline and tab
/// characters. Any other character after a backslash keeps the backslash and
/// is then processed normally. Newlines inside the literal advance the line
/// counter. Reaching the end of input before a closing quote is an error.
fn lex_text(lex: &mut logos::Lexer<Token>) -> FilterResult<String, LexError> {
    let remainder = lex.remainder();
    let mut chars = remainder.chars();
    let mut buffer = String::new();
    let mut consumed = 0;

    loop {
        let Some(c) = chars.next() else {
            return FilterResult::Error(LexError::UnterminatedString);
        };
        consumed += c.len_utf8();

        match c {
            '"' => {
                lex.bump(consumed);
                return FilterResult::Emit(buffer);
            },
            '\\' => match chars.clone().next() {
                Some('"') => {
                    buffer.push('"');
                    chars.next();
                    consumed += 1;
                },
                Some('n') => {
                    buffer.push('\n');
                    chars.next();
                    consumed += 1;
                },
                Some('t') => {
                    buffer.push('\t');
                    chars.next();
                    consumed += 1;
                },
                // The backslash stays; the next character is reprocessed.
                _ => buffer.push('\\'),
            },
            '\n' => {
                lex.extras.line += 1;
                buffer.push(c);
            },
            _ => buffer.push(c),
        }
    }
}

/// Scans a block comment after its opening `/*`, skipping its contents.
///
/// Newlines inside the comment advance the line counter. A comment that
/// never closes is an error.
fn lex_block_comment(lex: &mut logos::Lexer<Token>) -> FilterResult<(), LexError> {
    match lex.remainder().find("*/") {
        Some(end) => {
            let newlines = lex.remainder()[..end].chars().filter(|&c| c == '\n').count();
            lex.extras.line += newlines;
            lex.bump(end + 2);
            FilterResult::Skip
        },
        None => FilterResult::Error(LexError::UnterminatedBlockComment),
    }
}

/// Tokenizes a complete source string.
///
/// Each produced token is paired with the line it starts on. Characters
/// the language does not recognize are skipped silently; malformed literals
/// and unterminated comments abort tokenization.
///
/// # Errors
/// Returns a [`ParseError`] for invalid float literals, unterminated text
/// literals and unterminated block comments.
///
/// # Example
/// ```
/// use rill::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("x = 1").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Word("x".to_string()), 1),
///                 (Token::Equals, 1),
///                 (Token::Number(1.0), 1)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => {
                // A literal spanning newlines is recorded at its starting
                // line, not the line it closed on.
                let line = lexer.extras.line - lexer.slice().matches('\n').count();
                tokens.push((tok, line));
            },
            Err(LexError::UnexpectedCharacter) => {},
            Err(LexError::InvalidFloatLiteral) => {
                return Err(ParseError::InvalidFloatLiteral { line: lexer.extras.line });
            },
            Err(LexError::UnterminatedString) => {
                return Err(ParseError::UnterminatedString { line: lexer.extras.line });
            },
            Err(LexError::UnterminatedBlockComment) => {
                return Err(ParseError::UnterminatedBlockComment { line: lexer.extras.line });
            },
        }
    }

    Ok(tokens)
}
