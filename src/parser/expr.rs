use core::fmt;
use std::rc::Rc;
use crate::utils;
use crate::language::IntType;
use crate::lexer::Token;
use crate::parser::Node;
use crate::parser::operator::{PrefixOp, InfixOp};
use crate::parser::stmt::BlockStatement;


#[derive(Debug, Clone)]
pub enum Expression {

    Identifier(Identifier),

    IntegerLiteral(IntegerLiteral),

    BooleanLiteral(BooleanLiteral),

    StringLiteral(StringLiteral),

    Prefix(Box<PrefixExpression>),

    Infix(Box<InfixExpression>),

    If(Box<IfExpression>),

    Function(FunctionLiteral),

    Call(Box<CallExpression>),

    List(ListLiteral),

    Map(MapLiteral),

    Index(Box<IndexExpression>),

}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Self::Identifier(expr) => expr.token_literal(),
            Self::IntegerLiteral(expr) => expr.token_literal(),
            Self::BooleanLiteral(expr) => expr.token_literal(),
            Self::StringLiteral(expr) => expr.token_literal(),
            Self::Prefix(expr) => expr.token_literal(),
            Self::Infix(expr) => expr.token_literal(),
            Self::If(expr) => expr.token_literal(),
            Self::Function(expr) => expr.token_literal(),
            Self::Call(expr) => expr.token_literal(),
            Self::List(expr) => expr.token_literal(),
            Self::Map(expr) => expr.token_literal(),
            Self::Index(expr) => expr.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Identifier(expr) => expr.fmt(fmt),
            Self::IntegerLiteral(expr) => expr.fmt(fmt),
            Self::BooleanLiteral(expr) => expr.fmt(fmt),
            Self::StringLiteral(expr) => expr.fmt(fmt),
            Self::Prefix(expr) => expr.fmt(fmt),
            Self::Infix(expr) => expr.fmt(fmt),
            Self::If(expr) => expr.fmt(fmt),
            Self::Function(expr) => expr.fmt(fmt),
            Self::Call(expr) => expr.fmt(fmt),
            Self::List(expr) => expr.fmt(fmt),
            Self::Map(expr) => expr.fmt(fmt),
            Self::Index(expr) => expr.fmt(fmt),
        }
    }
}

// implements Node by returning the literal of the token that started the expression
macro_rules! impl_token_literal {
    ( $( $node:ty ),+ ) => {
        $(
            impl Node for $node {
                fn token_literal(&self) -> &str { &self.token.literal }
            }
        )+
    };
}

impl_token_literal!(
    Identifier, IntegerLiteral, BooleanLiteral, StringLiteral,
    PrefixExpression, InfixExpression, IfExpression, FunctionLiteral,
    CallExpression, ListLiteral, MapLiteral, IndexExpression
);


// Literals

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub token: Token,
}

impl Identifier {
    pub fn new(token: Token) -> Self { Identifier { token } }

    pub fn name(&self) -> &str { &self.token.literal }
}

impl fmt::Display for Identifier {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}


#[derive(Debug, Clone)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: IntType,
}

impl fmt::Display for IntegerLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.token.literal)
    }
}


#[derive(Debug, Clone)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.token.literal)
    }
}


#[derive(Debug, Clone)]
pub struct StringLiteral {
    pub token: Token,
}

impl StringLiteral {
    pub fn value(&self) -> &str { &self.token.literal }
}

impl fmt::Display for StringLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "\"{}\"", self.value())
    }
}


// Operator Expressions

#[derive(Debug, Clone)]
pub struct PrefixExpression {
    pub token: Token,
    pub op: PrefixOp,
    pub right: Expression,
}

impl fmt::Display for PrefixExpression {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}{})", self.op, self.right)
    }
}


#[derive(Debug, Clone)]
pub struct InfixExpression {
    pub token: Token,
    pub left: Expression,
    pub op: InfixOp,
    pub right: Expression,
}

impl fmt::Display for InfixExpression {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({} {} {})", self.left, self.op, self.right)
    }
}


// Compound Expressions

#[derive(Debug, Clone)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Expression,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl fmt::Display for IfExpression {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "if ({}) {}", self.condition, self.consequence)?;
        if let Some(alternative) = self.alternative.as_ref() {
            write!(fmt, " else {}", alternative)?;
        }
        Ok(())
    }
}


/// Parameters and body are shared with every function object created from this literal
#[derive(Debug, Clone)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Rc<[Identifier]>,
    pub body: Rc<BlockStatement>,
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "fn({}) {}", utils::fmt_join(", ", &*self.parameters), self.body)
    }
}


#[derive(Debug, Clone)]
pub struct CallExpression {
    pub token: Token,
    pub function: Expression,
    pub arguments: Vec<Expression>,
}

impl fmt::Display for CallExpression {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}({})", self.function, utils::fmt_join(", ", &self.arguments))
    }
}


#[derive(Debug, Clone)]
pub struct ListLiteral {
    pub token: Token,
    pub elements: Vec<Expression>,
}

impl fmt::Display for ListLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "[{}]", utils::fmt_join(", ", &self.elements))
    }
}


#[derive(Debug, Clone)]
pub struct MapLiteral {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl fmt::Display for MapLiteral {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("{")?;
        for (idx, (key, value)) in self.pairs.iter().enumerate() {
            if idx > 0 {
                fmt.write_str(", ")?;
            }
            write!(fmt, "{}: {}", key, value)?;
        }
        fmt.write_str("}")
    }
}


#[derive(Debug, Clone)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Expression,
    pub index: Expression,
}

impl fmt::Display for IndexExpression {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "({}[{}])", self.left, self.index)
    }
}
