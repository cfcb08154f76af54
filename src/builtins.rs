//! Native functions that are visible from every scope.
//! Identifier lookup falls back to this table when a name isn't bound.

use core::fmt;
use std::io::Write;
use std::collections::HashMap;
use once_cell::sync::Lazy;
use crate::runtime::{Object, DefaultBuildHasher, RuntimeError, ExecResult};

mod list;
mod misc;


pub type NativeFn = fn(args: &[Object], out: &mut dyn Write) -> ExecResult<Object>;

type BuiltinTable = HashMap<&'static str, Builtin, DefaultBuildHasher>;

static BUILTINS: Lazy<BuiltinTable> = Lazy::new(|| {
    let mut builtins = BuiltinTable::default();
    list::register_list_builtins(&mut builtins);
    misc::register_misc_builtins(&mut builtins);
    builtins
});


pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name)
}

pub fn names() -> impl Iterator<Item=&'static str> {
    BUILTINS.keys().copied()
}


pub struct Builtin {
    name: &'static str,
    func: NativeFn,
}

impl Builtin {
    pub fn new(name: &'static str, func: NativeFn) -> Self {
        Builtin { name, func }
    }

    pub fn name(&self) -> &'static str { self.name }

    /// `out` receives anything the builtin prints
    pub fn invoke(&self, args: &[Object], out: &mut dyn Write) -> ExecResult<Object> {
        log::trace!("call builtin {} with {} arg(s)", self.name, args.len());
        (self.func)(args, out)
    }
}

impl fmt::Debug for Builtin {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "<builtin {}>", self.name)
    }
}

fn insert_all(builtins: &mut BuiltinTable, items: impl IntoIterator<Item=Builtin>) {
    for builtin in items {
        builtins.insert(builtin.name(), builtin);
    }
}

// checks the argument count of a builtin with fixed arity
fn expect_args<const N: usize>(args: &[Object]) -> ExecResult<&[Object; N]> {
    args.try_into()
        .map_err(|_| RuntimeError::wrong_arg_count(args.len(), N))
}
