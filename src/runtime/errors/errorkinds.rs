//! Error constructor functions

use std::io;
use crate::runtime::Object;
use crate::runtime::errors::{RuntimeError, ErrorKind};
use crate::parser::operator::{PrefixOp, InfixOp};


impl RuntimeError {
    pub fn unknown_prefix_operator(op: PrefixOp, operand: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::UnknownOperator,
            format!("unsupported operator: {}{}", op, operand.type_tag()),
        )
    }

    pub fn unknown_infix_operator(op: InfixOp, lhs: &Object, rhs: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::UnknownOperator,
            format!("unsupported operator: {} {} {}", lhs.type_tag(), op, rhs.type_tag()),
        )
    }

    pub fn type_mismatch(op: InfixOp, lhs: &Object, rhs: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::TypeMismatch,
            format!("type mismatch: {} {} {}", lhs.type_tag(), op, rhs.type_tag()),
        )
    }

    pub fn name_not_defined(name: &str) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::NameNotDefined,
            format!("identifier not found: {}", name),
        )
    }

    pub fn not_callable(callee: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::NotCallable,
            format!("not a function: {}", callee.type_tag()),
        )
    }

    pub fn wrong_arg_count(got: usize, want: usize) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::WrongArgumentCount,
            format!("wrong number of arguments: got {}, want {}", got, want),
        )
    }

    pub fn unhashable_key(key: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::UnhashableKey,
            format!("unusable as hash key: {}", key.type_tag()),
        )
    }

    pub fn index_not_supported(collection: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::IndexNotSupported,
            format!("index operator not supported: {}", collection.type_tag()),
        )
    }

    pub fn argument_not_supported(builtin: &str, arg: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::InvalidArgument,
            format!("argument to `{}` not supported, got {}", builtin, arg.type_tag()),
        )
    }

    pub fn expected_list_argument(builtin: &str, arg: &Object) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::InvalidArgument,
            format!("argument to `{}` must be LIST, got {}", builtin, arg.type_tag()),
        )
    }

    pub fn divide_by_zero() -> Box<RuntimeError> {
        RuntimeError::new(ErrorKind::DivideByZero, "division by zero")
    }

    pub fn call_depth_exceeded(limit: usize) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::CallDepthExceeded,
            format!("maximum call depth exceeded ({})", limit),
        )
    }

    pub fn io_error(error: io::Error) -> Box<RuntimeError> {
        RuntimeError::new(
            ErrorKind::Io,
            format!("could not write output: {}", error),
        )
    }
}

impl From<io::Error> for Box<RuntimeError> {
    fn from(error: io::Error) -> Self {
        RuntimeError::io_error(error)
    }
}
