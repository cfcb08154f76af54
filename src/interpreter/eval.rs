use std::rc::Rc;
use std::io::Write;
use crate::language::{IntType, MAX_CALL_DEPTH};
use crate::builtins;
use crate::parser::expr::*;
use crate::parser::stmt::{Program, Statement, BlockStatement};
use crate::parser::operator::{PrefixOp, InfixOp};
use crate::runtime::{Object, MapStore, HashPair, Function, Environment, Env};
use crate::runtime::errors::{ExecResult, RuntimeError};


/// Anything that can be evaluated against an environment.
/// `None` means the node produced no value, e.g. a `let` statement.
pub trait Evaluate {
    fn eval_in(&self, ctx: &mut EvalContext, env: &Env) -> ExecResult<Option<Object>>;
}

impl Evaluate for Program {
    fn eval_in(&self, ctx: &mut EvalContext, env: &Env) -> ExecResult<Option<Object>> {
        ctx.eval_program(self, env)
    }
}

impl Evaluate for Statement {
    fn eval_in(&self, ctx: &mut EvalContext, env: &Env) -> ExecResult<Option<Object>> {
        ctx.eval_statement(self, env)
    }
}

impl Evaluate for BlockStatement {
    fn eval_in(&self, ctx: &mut EvalContext, env: &Env) -> ExecResult<Option<Object>> {
        ctx.eval_block(self, env).map(Some)
    }
}

impl Evaluate for Expression {
    fn eval_in(&self, ctx: &mut EvalContext, env: &Env) -> ExecResult<Option<Object>> {
        ctx.eval_expression(self, env).map(Some)
    }
}


// tracks the output sink for builtins and the function call depth
pub struct EvalContext<'o> {
    out: &'o mut dyn Write,
    depth: usize,
    max_depth: usize,
}

impl<'o> EvalContext<'o> {
    pub fn new(out: &'o mut dyn Write) -> Self {
        EvalContext {
            out,
            depth: 0,
            max_depth: MAX_CALL_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth; self
    }

    pub fn depth(&self) -> usize { self.depth }

    pub fn max_depth(&self) -> usize { self.max_depth }

    /// Evaluates a node. A runtime error becomes the resulting `ERROR` object.
    pub fn evaluate<N>(&mut self, node: &N, env: &Env) -> Option<Object> where N: Evaluate + ?Sized {
        match node.eval_in(self, env) {
            Ok(value) => value,
            Err(error) => {
                log::debug!("evaluation failed: {}", error);
                Some(Object::from(error))
            }
        }
    }

    /*** Statements ***/

    fn eval_program(&mut self, program: &Program, env: &Env) -> ExecResult<Option<Object>> {
        let mut result = None;

        for stmt in program.iter() {
            match self.eval_statement(stmt, env)? {
                Some(Object::ReturnValue(value)) => return Ok(Some(*value)),
                value => result = value,
            }
        }

        Ok(result)
    }

    // a `return` stops the block, but is only unwrapped by the caller
    fn eval_block(&mut self, block: &BlockStatement, env: &Env) -> ExecResult<Object> {
        let mut result = Object::Null;

        for stmt in block.iter() {
            match self.eval_statement(stmt, env)? {
                Some(value @ Object::ReturnValue(..)) => return Ok(value),
                Some(value) => result = value,
                None => result = Object::Null,
            }
        }

        Ok(result)
    }

    fn eval_statement(&mut self, stmt: &Statement, env: &Env) -> ExecResult<Option<Object>> {
        log::trace!("eval: {}", stmt);

        match stmt {
            Statement::Let(stmt) => {
                let value = self.eval_expression(&stmt.value, env)?;
                if let Object::ReturnValue(..) = value {
                    return Ok(Some(value));
                }

                env.set(stmt.name.name(), value);
                Ok(None)
            }

            Statement::Return(stmt) => {
                let value = self.eval_expression(&stmt.value, env)?;
                match value {
                    Object::ReturnValue(..) => Ok(Some(value)),
                    value => Ok(Some(Object::ReturnValue(Box::new(value)))),
                }
            }

            Statement::Expression(stmt) => {
                let value = self.eval_expression(&stmt.expression, env)?;
                Ok(Some(value))
            }
        }
    }

    /*** Expressions ***/

    fn eval_expression(&mut self, expr: &Expression, env: &Env) -> ExecResult<Object> {
        match expr {
            Expression::Identifier(ident) => eval_identifier(ident.name(), env),

            Expression::IntegerLiteral(literal) => Ok(Object::Integer(literal.value)),
            Expression::BooleanLiteral(literal) => Ok(Object::Boolean(literal.value)),
            Expression::StringLiteral(literal) => Ok(Object::from(literal.value())),

            Expression::Prefix(expr) => {
                let right = operand!(self.eval_expression(&expr.right, env));
                eval_prefix_op(expr.op, right)
            }

            Expression::Infix(expr) => {
                let left = operand!(self.eval_expression(&expr.left, env));
                let right = operand!(self.eval_expression(&expr.right, env));
                eval_infix_op(expr.op, left, right)
            }

            Expression::If(expr) => self.eval_if(expr, env),

            Expression::Function(literal) => {
                let function = Function::new(literal, Rc::clone(env));
                Ok(Object::Function(Rc::new(function)))
            }

            Expression::Call(call) => self.eval_call(call, env),
            Expression::List(list) => self.eval_list(list, env),
            Expression::Map(map) => self.eval_map(map, env),
            Expression::Index(expr) => self.eval_index(expr, env),
        }
    }

    fn eval_if(&mut self, expr: &IfExpression, env: &Env) -> ExecResult<Object> {
        let condition = operand!(self.eval_expression(&expr.condition, env));

        if condition.is_truthy() {
            self.eval_block(&expr.consequence, env)
        } else if let Some(alternative) = expr.alternative.as_ref() {
            self.eval_block(alternative, env)
        } else {
            Ok(Object::Null)
        }
    }

    fn eval_call(&mut self, call: &CallExpression, env: &Env) -> ExecResult<Object> {
        let function = operand!(self.eval_expression(&call.function, env));

        let mut args = Vec::with_capacity(call.arguments.len());
        for arg in call.arguments.iter() {
            args.push(operand!(self.eval_expression(arg, env)));
        }

        self.apply_function(&function, &args)
    }

    /// Calls a function or builtin object with already evaluated arguments
    pub fn apply_function(&mut self, callee: &Object, args: &[Object]) -> ExecResult<Object> {
        match callee {
            Object::Function(function) => self.call_function(function, args),
            Object::Builtin(builtin) => builtin.invoke(args, &mut *self.out),
            _ => Err(RuntimeError::not_callable(callee)),
        }
    }

    fn call_function(&mut self, function: &Function, args: &[Object]) -> ExecResult<Object> {
        if args.len() != function.arity() {
            return Err(RuntimeError::wrong_arg_count(args.len(), function.arity()));
        }
        if self.depth >= self.max_depth {
            return Err(RuntimeError::call_depth_exceeded(self.max_depth));
        }

        let call_env = Environment::new_enclosed(function.env());
        for (param, arg) in function.parameters().iter().zip(args.iter()) {
            call_env.set(param.name(), arg.clone());
        }

        log::trace!("call {} at depth {}", function, self.depth);

        self.depth += 1;
        let result = self.eval_block(function.body(), &call_env);
        self.depth -= 1;

        match result? {
            Object::ReturnValue(value) => Ok(*value),
            value => Ok(value),
        }
    }

    fn eval_list(&mut self, list: &ListLiteral, env: &Env) -> ExecResult<Object> {
        let mut items = Vec::with_capacity(list.elements.len());
        for element in list.elements.iter() {
            items.push(operand!(self.eval_expression(element, env)));
        }
        Ok(Object::from(items))
    }

    // duplicate keys overwrite the earlier entry
    fn eval_map(&mut self, map: &MapLiteral, env: &Env) -> ExecResult<Object> {
        let mut store = MapStore::default();

        for (key_expr, value_expr) in map.pairs.iter() {
            let key = operand!(self.eval_expression(key_expr, env));
            let hash_key = key.hash_key()
                .ok_or_else(|| RuntimeError::unhashable_key(&key))?;

            let value = operand!(self.eval_expression(value_expr, env));
            store.insert(hash_key, HashPair { key, value });
        }

        Ok(Object::Map(Rc::new(store)))
    }

    fn eval_index(&mut self, expr: &IndexExpression, env: &Env) -> ExecResult<Object> {
        let left = operand!(self.eval_expression(&expr.left, env));
        let index = operand!(self.eval_expression(&expr.index, env));

        match (&left, &index) {
            (Object::List(items), Object::Integer(index)) => {
                let item = usize::try_from(*index).ok()
                    .and_then(|index| items.get(index));
                Ok(item.cloned().unwrap_or(Object::Null))
            }

            (Object::Map(store), _) => {
                let hash_key = index.hash_key()
                    .ok_or_else(|| RuntimeError::unhashable_key(&index))?;
                let value = store.get(&hash_key)
                    .map(|pair| pair.value.clone());
                Ok(value.unwrap_or(Object::Null))
            }

            _ => Err(RuntimeError::index_not_supported(&left)),
        }
    }
}


// environment first, then builtins
fn eval_identifier(name: &str, env: &Env) -> ExecResult<Object> {
    if let Some(value) = env.get(name) {
        return Ok(value);
    }

    builtins::lookup(name)
        .map(Object::Builtin)
        .ok_or_else(|| RuntimeError::name_not_defined(name))
}

fn eval_prefix_op(op: PrefixOp, operand: Object) -> ExecResult<Object> {
    match op {
        PrefixOp::Not => Ok(Object::Boolean(!operand.is_truthy())),
        PrefixOp::Neg => match operand {
            Object::Integer(value) => Ok(Object::Integer(value.wrapping_neg())),
            _ => Err(RuntimeError::unknown_prefix_operator(op, &operand)),
        },
    }
}

fn eval_infix_op(op: InfixOp, lhs: Object, rhs: Object) -> ExecResult<Object> {
    match (&lhs, &rhs) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_op(op, *a, *b),

        (Object::String(a), Object::String(b)) => match op {
            InfixOp::Add => {
                let mut concat = String::with_capacity(a.len() + b.len());
                concat.push_str(a);
                concat.push_str(b);
                Ok(Object::from(concat))
            }
            _ => Err(RuntimeError::unknown_infix_operator(op, &lhs, &rhs)),
        },

        _ if lhs.type_tag() != rhs.type_tag() => Err(RuntimeError::type_mismatch(op, &lhs, &rhs)),

        _ => match op {
            InfixOp::EQ => Ok(Object::Boolean(lhs.is_identical(&rhs))),
            InfixOp::NE => Ok(Object::Boolean(!lhs.is_identical(&rhs))),
            _ => Err(RuntimeError::unknown_infix_operator(op, &lhs, &rhs)),
        },
    }
}

// arithmetic wraps around on overflow
fn eval_integer_op(op: InfixOp, lhs: IntType, rhs: IntType) -> ExecResult<Object> {
    let value = match op {
        InfixOp::Add => Object::Integer(lhs.wrapping_add(rhs)),
        InfixOp::Sub => Object::Integer(lhs.wrapping_sub(rhs)),
        InfixOp::Mul => Object::Integer(lhs.wrapping_mul(rhs)),
        InfixOp::Div => {
            if rhs == 0 {
                return Err(RuntimeError::divide_by_zero());
            }
            Object::Integer(lhs.wrapping_div(rhs))
        }

        InfixOp::LT => Object::Boolean(lhs < rhs),
        InfixOp::GT => Object::Boolean(lhs > rhs),
        InfixOp::EQ => Object::Boolean(lhs == rhs),
        InfixOp::NE => Object::Boolean(lhs != rhs),
    };
    Ok(value)
}
