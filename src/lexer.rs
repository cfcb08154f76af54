mod token;

pub use token::*;

use crate::language;


// Lexer

pub struct Lexer<'s> {
    source: &'s str,

    current: usize, // byte index of the current char
    next: usize,    // one ahead of current char
    ch: u8,         // 0 at end of input
}

impl<'s> Iterator for Lexer<'s> {
    type Item = Token;

    // never runs out, keeps producing EOF at the end of input
    fn next(&mut self) -> Option<Self::Item> { Some(self.next_token()) }
}

impl<'s> Lexer<'s> {

    pub fn new(source: &'s str) -> Self {
        let mut lexer = Lexer {
            source,
            current: 0,
            next: 0,
            ch: 0,
        };
        lexer.advance();
        lexer
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) {
        self.ch = self.source.as_bytes().get(self.next).copied().unwrap_or(0);
        self.current = self.next;
        self.next += 1;
    }

    fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.next).copied().unwrap_or(0)
    }

    fn skip_whitespace(&mut self) {
        while language::is_whitespace(self.ch) {
            self.advance();
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return Token::eof();
        }

        let kind = match self.ch {
            b'=' => if self.peek() == b'=' {
                self.advance();
                TokenKind::OpEQ
            } else {
                TokenKind::OpAssign
            },

            b'!' => if self.peek() == b'=' {
                self.advance();
                TokenKind::OpNE
            } else {
                TokenKind::OpNot
            },

            b'+' => TokenKind::OpAdd,
            b'-' => TokenKind::OpSub,
            b'*' => TokenKind::OpMul,
            b'/' => TokenKind::OpDiv,
            b'<' => TokenKind::OpLT,
            b'>' => TokenKind::OpGT,

            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'(' => TokenKind::OpenParen,
            b')' => TokenKind::CloseParen,
            b'{' => TokenKind::OpenBrace,
            b'}' => TokenKind::CloseBrace,
            b'[' => TokenKind::OpenSquare,
            b']' => TokenKind::CloseSquare,

            b'"' => return self.scan_string(),

            ch if language::is_identifier_char(ch) => return self.scan_identifier(),
            ch if language::is_digit(ch) => return self.scan_integer(),

            _ => return self.scan_illegal(),
        };

        // all remaining tokens end on the current char
        let start = self.current + 1 - token_width(kind);
        let token = Token::new(kind, &self.source[start..self.next]);
        self.advance();
        token
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.current;
        while language::is_identifier_char(self.ch) {
            self.advance();
        }

        let ident = &self.source[start..self.current];
        let kind = language::lookup_keyword(ident).unwrap_or(TokenKind::Identifier);
        Token::new(kind, ident)
    }

    fn scan_integer(&mut self) -> Token {
        let start = self.current;
        while language::is_digit(self.ch) {
            self.advance();
        }

        Token::new(TokenKind::IntegerLiteral, &self.source[start..self.current])
    }

    // no escape sequences, the literal ends at the next '"' or at the end of input
    fn scan_string(&mut self) -> Token {
        self.advance(); // consume the opening '"'

        let start = self.current;
        while self.ch != b'"' && !self.at_eof() {
            self.advance();
        }

        let token = Token::new(TokenKind::StringLiteral, &self.source[start..self.current]);
        self.advance(); // consume the closing '"'
        token
    }

    // consumes a whole char so that the literal is always valid UTF-8
    fn scan_illegal(&mut self) -> Token {
        let start = self.current;
        let width = self.source[start..].chars().next()
            .map_or(1, char::len_utf8);

        for _ in 0..width {
            self.advance();
        }

        Token::new(TokenKind::Illegal, &self.source[start..start + width])
    }
}

fn token_width(kind: TokenKind) -> usize {
    match kind {
        TokenKind::OpEQ | TokenKind::OpNE => 2,
        _ => 1,
    }
}
