use core::fmt;
use crate::lexer::Token;
use crate::parser::Node;
use crate::parser::expr::{Expression, Identifier};


/// The root of every syntax tree
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn is_empty(&self) -> bool { self.statements.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item=&Statement> {
        self.statements.iter()
    }
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements.first()
            .map_or("", |stmt| stmt.token_literal())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        for stmt in self.statements.iter() {
            write!(fmt, "{}", stmt)?;
        }
        Ok(())
    }
}


#[derive(Debug, Clone)]
pub enum Statement {

    Let(LetStatement),

    Return(ReturnStatement),

    Expression(ExpressionStatement),

}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Self::Let(stmt) => &stmt.token.literal,
            Self::Return(stmt) => &stmt.token.literal,
            Self::Expression(stmt) => &stmt.token.literal,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Let(stmt) => write!(fmt, "let {} = {};", stmt.name, stmt.value),
            Self::Return(stmt) => write!(fmt, "return {};", stmt.value),
            Self::Expression(stmt) => write!(fmt, "{}", stmt.expression),
        }
    }
}


#[derive(Debug, Clone)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    pub value: Expression,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Expression,
}

#[derive(Debug, Clone)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}


// Statement blocks, the bodies of `if` and `fn`
#[derive(Debug, Clone)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn iter(&self) -> impl Iterator<Item=&Statement> {
        self.statements.iter()
    }
}

impl Node for BlockStatement {
    fn token_literal(&self) -> &str { &self.token.literal }
}

// expression statements get a ';' so the block re-parses into the same statements
impl fmt::Display for BlockStatement {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("{ ")?;
        for stmt in self.statements.iter() {
            match stmt {
                Statement::Expression(..) => write!(fmt, "{}; ", stmt)?,
                _ => write!(fmt, "{} ", stmt)?,
            }
        }
        fmt.write_str("}")
    }
}
