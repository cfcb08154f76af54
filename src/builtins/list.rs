use std::io::Write;
use crate::runtime::{Object, RuntimeError, ExecResult};
use super::{Builtin, BuiltinTable, insert_all, expect_args};


pub(super) fn register_list_builtins(builtins: &mut BuiltinTable) {
    insert_all(builtins, [
        Builtin::new("first", first),
        Builtin::new("last", last),
        Builtin::new("tail", tail),
        Builtin::new("push", push),
    ]);
}

fn expect_list<'a>(name: &str, arg: &'a Object) -> ExecResult<&'a [Object]> {
    arg.as_list()
        .ok_or_else(|| RuntimeError::expected_list_argument(name, arg))
}

fn first(args: &[Object], _out: &mut dyn Write) -> ExecResult<Object> {
    let [list] = expect_args::<1>(args)?;
    let items = expect_list("first", list)?;
    Ok(items.first().cloned().unwrap_or(Object::Null))
}

fn last(args: &[Object], _out: &mut dyn Write) -> ExecResult<Object> {
    let [list] = expect_args::<1>(args)?;
    let items = expect_list("last", list)?;
    Ok(items.last().cloned().unwrap_or(Object::Null))
}

// a copy without the first element, or null for an empty list
fn tail(args: &[Object], _out: &mut dyn Write) -> ExecResult<Object> {
    let [list] = expect_args::<1>(args)?;
    let items = expect_list("tail", list)?;

    match items.split_first() {
        Some((_, rest)) => Ok(Object::from(rest.to_vec())),
        None => Ok(Object::Null),
    }
}

// the original list is left unchanged
fn push(args: &[Object], _out: &mut dyn Write) -> ExecResult<Object> {
    let [list, value] = expect_args::<2>(args)?;
    let items = expect_list("push", list)?;

    let mut copy = Vec::with_capacity(items.len() + 1);
    copy.extend_from_slice(items);
    copy.push(value.clone());
    Ok(Object::from(copy))
}
