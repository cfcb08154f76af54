use core::fmt;
use std::rc::Rc;
use crate::utils;
use crate::parser::expr::{FunctionLiteral, Identifier};
use crate::parser::stmt::BlockStatement;
use crate::runtime::environment::Env;


/// A closure: the parameters and body of a function literal, plus the
/// environment that was current when the literal was evaluated.
pub struct Function {
    parameters: Rc<[Identifier]>,
    body: Rc<BlockStatement>,
    env: Env,
}

impl Function {
    pub fn new(literal: &FunctionLiteral, env: Env) -> Self {
        Function {
            parameters: Rc::clone(&literal.parameters),
            body: Rc::clone(&literal.body),
            env,
        }
    }

    pub fn parameters(&self) -> &[Identifier] { &self.parameters }

    pub fn body(&self) -> &BlockStatement { &self.body }

    pub fn env(&self) -> &Env { &self.env }

    pub fn arity(&self) -> usize { self.parameters.len() }
}

impl fmt::Display for Function {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "fn({}) {}", utils::fmt_join(", ", &*self.parameters), self.body)
    }
}

// skips the captured environment, which may contain this function
impl fmt::Debug for Function {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("body", &self.body.to_string())
            .finish()
    }
}
