use crate::lexer::TokenKind;


pub type IntType = i64;    // internal representation for integers

/// Maximum number of nested function calls before evaluation fails with a runtime error
pub const MAX_CALL_DEPTH: usize = 256;


pub fn lookup_keyword(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "fn"     => TokenKind::Function,
        "let"    => TokenKind::Let,
        "true"   => TokenKind::True,
        "false"  => TokenKind::False,
        "if"     => TokenKind::If,
        "else"   => TokenKind::Else,
        "return" => TokenKind::Return,

        _ => return None,
    };

    Some(kind)
}

pub fn is_identifier_char(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn is_whitespace(ch: u8) -> bool {
    matches!(ch, b' ' | b'\t' | b'\n' | b'\r')
}
