mod errors;
mod tests;

pub mod expr;
pub mod stmt;
pub mod operator;

pub use errors::{ParserError, ParserErrorKind};

use core::fmt;
use std::rc::Rc;
use crate::lexer::{Lexer, Token, TokenKind};

use expr::*;
use stmt::*;
use operator::{PrefixOp, InfixOp, Precedence};


/// Common interface of every syntax tree node.
/// The `Display` impl of a node is its canonical, fully parenthesized source form.
pub trait Node: fmt::Display {
    fn token_literal(&self) -> &str;
}


type PrefixParseFn<'s> = fn(&mut Parser<'s>) -> Option<Expression>;
type InfixParseFn<'s> = fn(&mut Parser<'s>, Expression) -> Option<Expression>;

fn prefix_parse_fn<'s>(kind: TokenKind) -> Option<PrefixParseFn<'s>> {
    let parse_fn: PrefixParseFn<'s> = match kind {
        TokenKind::Identifier => Parser::parse_identifier,
        TokenKind::IntegerLiteral => Parser::parse_integer_literal,
        TokenKind::StringLiteral => Parser::parse_string_literal,
        TokenKind::True | TokenKind::False => Parser::parse_boolean_literal,
        TokenKind::OpNot | TokenKind::OpSub => Parser::parse_prefix_expression,
        TokenKind::OpenParen => Parser::parse_grouped_expression,
        TokenKind::If => Parser::parse_if_expression,
        TokenKind::Function => Parser::parse_function_literal,
        TokenKind::OpenSquare => Parser::parse_list_literal,
        TokenKind::OpenBrace => Parser::parse_map_literal,

        _ => return None,
    };
    Some(parse_fn)
}

fn infix_parse_fn<'s>(kind: TokenKind) -> Option<InfixParseFn<'s>> {
    let parse_fn: InfixParseFn<'s> = match kind {
        TokenKind::OpAdd | TokenKind::OpSub
        | TokenKind::OpMul | TokenKind::OpDiv
        | TokenKind::OpLT | TokenKind::OpGT
        | TokenKind::OpEQ | TokenKind::OpNE
            => Parser::parse_infix_expression,

        TokenKind::OpenParen => Parser::parse_call_expression,
        TokenKind::OpenSquare => Parser::parse_index_expression,

        _ => return None,
    };
    Some(parse_fn)
}


// Pratt parser

pub struct Parser<'s> {
    lexer: Lexer<'s>,
    cursor: Token,
    peek: Token,
    errors: Vec<ParserError>,
}

impl<'s> Parser<'s> {

    pub fn new(mut lexer: Lexer<'s>) -> Self {
        let cursor = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer, cursor, peek,
            errors: Vec::new(),
        }
    }

    /// Errors recorded so far, in the order they were found
    pub fn errors(&self) -> &[ParserError] { &self.errors }

    pub fn into_errors(self) -> Vec<ParserError> { self.errors }

    fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.cursor = std::mem::replace(&mut self.peek, next);
    }

    fn cursor_is(&self, kind: TokenKind) -> bool { self.cursor.is(kind) }

    fn peek_is(&self, kind: TokenKind) -> bool { self.peek.is(kind) }

    // advances only if the next token has the expected kind, otherwise records an error
    fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.errors.push(ParserError::unexpected_token(kind, self.peek.kind));
            None
        }
    }

    fn skip_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Parses until the end of input. Malformed statements are dropped and
    /// parsing resumes at the following token.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.cursor_is(TokenKind::EOF) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        log::debug!("parsed {} statement(s) with {} error(s)", program.statements.len(), self.errors.len());
        program
    }

    /*** Statement Parsing ***/

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cursor.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expression),
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cursor.clone();

        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier::new(self.cursor.clone());

        self.expect_peek(TokenKind::OpAssign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(LetStatement { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.cursor.clone();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(ReturnStatement { token, value })
    }

    fn parse_expression_statement(&mut self) -> Option<ExpressionStatement> {
        let token = self.cursor.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_semicolon();

        Some(ExpressionStatement { token, expression })
    }

    // the cursor is on the opening '{'
    fn parse_block_statement(&mut self) -> BlockStatement {
        let token = self.cursor.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.cursor_is(TokenKind::CloseBrace) && !self.cursor_is(TokenKind::EOF) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        if self.cursor_is(TokenKind::EOF) {
            self.errors.push(ParserError::unexpected_token(TokenKind::CloseBrace, TokenKind::EOF));
        }

        BlockStatement { token, statements }
    }

    /*** Expression Parsing ***/

    fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = match prefix_parse_fn(self.cursor.kind) {
            Some(parse_fn) => parse_fn,
            None => {
                self.errors.push(ParserError::no_prefix_parse_fn(self.cursor.kind));
                return None;
            }
        };

        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < Precedence::of(self.peek.kind) {
            let infix = match infix_parse_fn(self.peek.kind) {
                Some(parse_fn) => parse_fn,
                None => return Some(left),
            };

            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(self.cursor.clone())))
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.cursor.clone();
        match token.literal.parse() {
            Ok(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            Err(..) => {
                self.errors.push(ParserError::invalid_integer(token.literal));
                None
            }
        }
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        let value = self.cursor_is(TokenKind::True);
        Some(Expression::BooleanLiteral(BooleanLiteral { token: self.cursor.clone(), value }))
    }

    fn parse_string_literal(&mut self) -> Option<Expression> {
        Some(Expression::StringLiteral(StringLiteral { token: self.cursor.clone() }))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.cursor.clone();
        let op = PrefixOp::from_token(token.kind)?;

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(Box::new(PrefixExpression { token, op, right })))
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cursor.clone();
        let op = InfixOp::from_token(token.kind)?;

        // re-entering with the operator's own precedence makes it left-associative
        let precedence = Precedence::of(token.kind);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(Box::new(InfixExpression { token, left, op, right })))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::CloseParen)?;

        Some(expr)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.cursor.clone();

        self.expect_peek(TokenKind::OpenParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::CloseParen)?;

        self.expect_peek(TokenKind::OpenBrace)?;
        let consequence = self.parse_block_statement();

        let mut alternative = None;
        if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::OpenBrace)?;
            alternative = Some(self.parse_block_statement());
        }

        let if_expr = IfExpression { token, condition, consequence, alternative };
        Some(Expression::If(Box::new(if_expr)))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.cursor.clone();

        self.expect_peek(TokenKind::OpenParen)?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek(TokenKind::OpenBrace)?;
        let body = self.parse_block_statement();

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters: parameters.into(),
            body: Rc::new(body),
        }))
    }

    // the cursor is on the opening '('
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::CloseParen) {
            self.next_token();
            return Some(parameters);
        }

        self.expect_peek(TokenKind::Identifier)?;
        parameters.push(Identifier::new(self.cursor.clone()));

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.expect_peek(TokenKind::Identifier)?;
            parameters.push(Identifier::new(self.cursor.clone()));
        }

        self.expect_peek(TokenKind::CloseParen)?;
        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.cursor.clone();
        let arguments = self.parse_expression_list(TokenKind::CloseParen)?;

        Some(Expression::Call(Box::new(CallExpression { token, function, arguments })))
    }

    fn parse_index_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.cursor.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::CloseSquare)?;

        Some(Expression::Index(Box::new(IndexExpression { token, left, index })))
    }

    fn parse_list_literal(&mut self) -> Option<Expression> {
        let token = self.cursor.clone();
        let elements = self.parse_expression_list(TokenKind::CloseSquare)?;

        Some(Expression::List(ListLiteral { token, elements }))
    }

    // comma separated expressions closed by `end`, the cursor is on the opening token
    fn parse_expression_list(&mut self, end: TokenKind) -> Option<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek_is(end) {
            self.next_token();
            return Some(items);
        }

        self.next_token();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }

        self.expect_peek(end)?;
        Some(items)
    }

    fn parse_map_literal(&mut self) -> Option<Expression> {
        let token = self.cursor.clone();
        let mut pairs = Vec::new();

        while !self.peek_is(TokenKind::CloseBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            self.expect_peek(TokenKind::Colon)?;
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_is(TokenKind::CloseBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::CloseBrace)?;
        Some(Expression::Map(MapLiteral { token, pairs }))
    }
}
