//! The pull-based iteration protocol

use crate::{
    Arity, CallShape, Frame, Function, Result, Value, call_with,
    core_lib::iterator::generators::TableIter,
};

/// Pulls one result row from an iterator
///
/// An iterator is any zero-argument function: each call produces the next
/// row of values, and a row with nothing in its first position signals that
/// the sequence has ended. The produced values are left in `frame` in the
/// requested shape, and the return value says whether anything was
/// produced. On exhaustion the frame is left cleared.
pub fn step(iter: &Function, frame: &mut Frame, request: Arity) -> Result<bool> {
    match request {
        // A discarding step still has to look at the first slot
        Arity::Count(0) => {
            call_with(iter, frame, CallShape::new(Arity::Count(0), Arity::Count(1)))?;
            Ok(!frame.take(0).is_null())
        }
        Arity::Count(_) => {
            call_with(iter, frame, CallShape::new(Arity::Count(0), request))?;
            if frame.get(0).is_null() {
                frame.clear();
                Ok(false)
            } else {
                Ok(true)
            }
        }
        Arity::Row => {
            call_with(iter, frame, CallShape::new(Arity::Count(0), Arity::Row))?;
            let exhausted = match frame.get(0) {
                Value::Table(row) => row.get_index(0).is_null(),
                _ => true,
            };
            if exhausted {
                frame.clear();
                Ok(false)
            } else {
                Ok(true)
            }
        }
    }
}

/// Coerces a value into an iterator function
///
/// Functions pass through unchanged, a table becomes an iterator over its
/// values in insertion order. Anything else isn't iterable.
pub fn to_iterator(value: Value) -> Result<Function> {
    match value {
        Value::Function(f) => Ok(f),
        Value::Table(table) => Ok(Function::stateful(Arity::Count(0), TableIter::new(table))),
        unexpected => crate::unexpected_type("an iterable value", &unexpected),
    }
}
