use core::fmt;

// Token Types

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    EOF,

    // Identifiers and literals
    Identifier,
    IntegerLiteral,
    StringLiteral,

    // Operator Symbols
    OpAssign,
    OpAdd, OpSub, OpMul, OpDiv,
    OpNot,
    OpLT, OpGT, OpEQ, OpNE,

    // Delimiters, Separators, punctuation
    Comma,
    Semicolon,
    Colon,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenSquare,
    CloseSquare,

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Illegal        => "ILLEGAL",
            TokenKind::EOF            => "EOF",
            TokenKind::Identifier     => "IDENT",
            TokenKind::IntegerLiteral => "INT",
            TokenKind::StringLiteral  => "STRING",
            TokenKind::OpAssign       => "=",
            TokenKind::OpAdd          => "+",
            TokenKind::OpSub          => "-",
            TokenKind::OpMul          => "*",
            TokenKind::OpDiv          => "/",
            TokenKind::OpNot          => "!",
            TokenKind::OpLT           => "<",
            TokenKind::OpGT           => ">",
            TokenKind::OpEQ           => "==",
            TokenKind::OpNE           => "!=",
            TokenKind::Comma          => ",",
            TokenKind::Semicolon      => ";",
            TokenKind::Colon          => ":",
            TokenKind::OpenParen      => "(",
            TokenKind::CloseParen     => ")",
            TokenKind::OpenBrace      => "{",
            TokenKind::CloseBrace     => "}",
            TokenKind::OpenSquare     => "[",
            TokenKind::CloseSquare    => "]",
            TokenKind::Function       => "FUNCTION",
            TokenKind::Let            => "LET",
            TokenKind::True           => "TRUE",
            TokenKind::False          => "FALSE",
            TokenKind::If             => "IF",
            TokenKind::Else           => "ELSE",
            TokenKind::Return         => "RETURN",
        };
        fmt.write_str(name)
    }
}


/// Token Output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token { kind, literal: literal.into() }
    }

    pub fn eof() -> Self {
        Token { kind: TokenKind::EOF, literal: String::new() }
    }

    pub fn is(&self, kind: TokenKind) -> bool { self.kind == kind }
}
