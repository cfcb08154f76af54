use std::fmt;
use std::error::Error;

mod errorkinds;


pub type ExecResult<T> = Result<T, Box<RuntimeError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownOperator,     // "unsupported operator: -BOOLEAN"
    TypeMismatch,        // "type mismatch: INTEGER + BOOLEAN"
    NameNotDefined,
    NotCallable,
    WrongArgumentCount,
    UnhashableKey,
    IndexNotSupported,
    InvalidArgument,     // bad argument to a builtin
    DivideByZero,
    CallDepthExceeded,
    Io,
}

/// An evaluation failure. Shows up in the language as an `ERROR` object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    kind: ErrorKind,
    message: String,
}

impl RuntimeError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Box<Self> {
        Box::new(RuntimeError {
            kind, message: message.into(),
        })
    }

    pub fn kind(&self) -> ErrorKind { self.kind }

    pub fn message(&self) -> &str { &self.message }
}

impl Error for RuntimeError { }

impl fmt::Display for RuntimeError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(&self.message)
    }
}
