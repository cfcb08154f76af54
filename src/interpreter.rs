use std::io;
use crate::runtime::{Object, Env};

pub mod eval;

pub use eval::{EvalContext, Evaluate};


/// Evaluates a node, with builtins printing to stdout.
/// Runtime errors are returned as an `ERROR` object.
pub fn evaluate<N>(node: &N, env: &Env) -> Option<Object> where N: Evaluate + ?Sized {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    EvalContext::new(&mut out).evaluate(node, env)
}
