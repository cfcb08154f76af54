use core::fmt;
use crate::lexer::TokenKind;

// Unary Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOp {
    Not, Neg,
}

impl PrefixOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::OpNot => PrefixOp::Not,
            TokenKind::OpSub => PrefixOp::Neg,

            _ => return None,
        };

        Some(op)
    }
}

impl fmt::Display for PrefixOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            PrefixOp::Not => "!",
            PrefixOp::Neg => "-",
        };
        fmt.write_str(symbol)
    }
}

// Binary Operators

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    // precedence Product
    Mul, Div,

    // precedence Sum
    Add, Sub,

    // precedence LessGreater
    LT, GT,

    // precedence Equals
    EQ, NE,
}

impl InfixOp {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::OpMul => InfixOp::Mul,
            TokenKind::OpDiv => InfixOp::Div,
            TokenKind::OpAdd => InfixOp::Add,
            TokenKind::OpSub => InfixOp::Sub,
            TokenKind::OpLT  => InfixOp::LT,
            TokenKind::OpGT  => InfixOp::GT,
            TokenKind::OpEQ  => InfixOp::EQ,
            TokenKind::OpNE  => InfixOp::NE,

            _ => return None,
        };

        Some(op)
    }
}

impl fmt::Display for InfixOp {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            InfixOp::Mul => "*",
            InfixOp::Div => "/",
            InfixOp::Add => "+",
            InfixOp::Sub => "-",
            InfixOp::LT  => "<",
            InfixOp::GT  => ">",
            InfixOp::EQ  => "==",
            InfixOp::NE  => "!=",
        };
        fmt.write_str(symbol)
    }
}


/// Binding power, from weakest to tightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,       // ==
    LessGreater,  // > or <
    Sum,          // +
    Product,      // *
    Prefix,       // -x or !x
    Call,         // f(x)
    Index,        // list[x]
}

impl Precedence {
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::OpEQ | TokenKind::OpNE => Precedence::Equals,
            TokenKind::OpLT | TokenKind::OpGT => Precedence::LessGreater,
            TokenKind::OpAdd | TokenKind::OpSub => Precedence::Sum,
            TokenKind::OpMul | TokenKind::OpDiv => Precedence::Product,
            TokenKind::OpenParen => Precedence::Call,
            TokenKind::OpenSquare => Precedence::Index,

            _ => Precedence::Lowest,
        }
    }
}
