/// Evaluates an operand inside the evaluator, propagating errors with `?`.
/// A `return` that was reached while evaluating the operand unwinds out of
/// the enclosing expression instead of being used as a value.
macro_rules! operand {
    ( $eval:expr ) => {
        match $eval? {
            value @ $crate::runtime::Object::ReturnValue(..) => return Ok(value),
            value => value,
        }
    };
}
