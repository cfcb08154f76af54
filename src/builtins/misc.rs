use std::io::Write;
use crate::runtime::{Object, RuntimeError, ExecResult};
use crate::language::IntType;
use super::{Builtin, BuiltinTable, insert_all, expect_args};


pub(super) fn register_misc_builtins(builtins: &mut BuiltinTable) {
    insert_all(builtins, [
        Builtin::new("len", len),
        Builtin::new("puts", puts),
    ]);
}

// strings are measured in bytes
fn len(args: &[Object], _out: &mut dyn Write) -> ExecResult<Object> {
    let [arg] = expect_args::<1>(args)?;

    let length = match arg {
        Object::String(string) => string.len(),
        Object::List(items) => items.len(),
        _ => return Err(RuntimeError::argument_not_supported("len", arg)),
    };

    Ok(Object::Integer(length as IntType))
}

fn puts(args: &[Object], out: &mut dyn Write) -> ExecResult<Object> {
    for arg in args.iter() {
        writeln!(out, "{}", arg)?;
    }
    Ok(Object::Null)
}
