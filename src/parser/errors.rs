use std::fmt;
use std::error::Error;
use crate::lexer::TokenKind;


pub type ErrorKind = ParserErrorKind;

// Specifies the actual error that occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErrorKind {
    UnexpectedToken {     // the next token was not the one the grammar requires
        expected: TokenKind,
        found: TokenKind,
    },
    NoPrefixParseFn(TokenKind),   // the token cannot start an expression
    InvalidInteger(String),       // digits that do not fit in an integer
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserError {
    kind: ErrorKind,
}

impl ParserError {
    pub fn unexpected_token(expected: TokenKind, found: TokenKind) -> Self {
        ErrorKind::UnexpectedToken { expected, found }.into()
    }

    pub fn no_prefix_parse_fn(kind: TokenKind) -> Self {
        ErrorKind::NoPrefixParseFn(kind).into()
    }

    pub fn invalid_integer(literal: impl Into<String>) -> Self {
        ErrorKind::InvalidInteger(literal.into()).into()
    }

    pub fn kind(&self) -> &ErrorKind { &self.kind }
}

impl From<ParserErrorKind> for ParserError {
    fn from(kind: ParserErrorKind) -> Self {
        ParserError { kind }
    }
}

impl Error for ParserError { }

impl fmt::Display for ParserError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind() {
            ErrorKind::UnexpectedToken { expected, found }
                => write!(fmt, "expected next token to be {}, got {} instead", expected, found),

            ErrorKind::NoPrefixParseFn(kind)
                => write!(fmt, "no prefix parse function for {} found", kind),

            ErrorKind::InvalidInteger(literal)
                => write!(fmt, "could not parse \"{}\" as integer", literal),
        }
    }
}
