//! The two call paths and frame shape conformance

use crate::{Arity, CallShape, Frame, Function, Result, Table, types::FunctionKind};

/// Reshapes the values in `frame` from the `have` shape to the `want` shape
///
/// - Count to a larger count pads with `Null`, to a smaller count drops the
///   surplus slots.
/// - Count to row packs the slots into a table keyed by position, skipping
///   empty slots so an absent index stays absent.
/// - Row to count spreads the table's positional entries back into slots,
///   padding missing positions with `Null`.
pub(crate) fn conform(frame: &mut Frame, have: Arity, want: Arity) -> Result<()> {
    use Arity::*;

    match (have, want) {
        (Count(have), Count(want)) => {
            if have != want {
                frame.clear_from(want.min(have) as usize);
            }
        }
        (Count(have), Row) => {
            let row = Table::with_capacity(have as usize);
            for index in 0..have as usize {
                row.insert(index.into(), frame.take(index));
            }
            frame.clear_from(1);
            frame.set_row(row);
        }
        (Row, Count(want)) => {
            let row = frame.take_row()?;
            for index in 0..want as usize {
                frame.set(index, row.get_index(index));
            }
            frame.clear_from(want as usize);
        }
        (Row, Row) => {}
    }

    Ok(())
}

/// Calls `f`, consuming the caller's reference to it
///
/// Arguments are read from `frame` in the `supplied` shape and conformed to
/// the function's declared shape before dispatch. The reference to `f` is
/// released before the body runs, so a caller that hands over its last
/// reference lets the function's captures drop as soon as the body does.
///
/// Returns the shape of the results the function left in the frame,
/// unconformed, which lets pass-through callers forward the callee's
/// results without reshaping them twice.
pub fn call(f: Function, frame: &mut Frame, supplied: Arity) -> Result<Arity> {
    conform(frame, supplied, f.args())?;
    let kind = f.kind().clone();
    drop(f);

    match kind {
        FunctionKind::Native(native) => native(frame),
        FunctionKind::Stateful(state) => state.borrow_mut().step(frame),
        FunctionKind::Compiled { code, captures } => {
            let scope = Table::overlay(code.scope().clone(), &captures);
            code.exec(scope, frame)
        }
    }
}

/// Calls `f` through a borrowed reference
///
/// The borrowing path for callers that keep their function alive across the
/// call: a clone of `f` is consumed in its place, and the results are
/// conformed to the shape the caller asked for.
pub fn call_with(f: &Function, frame: &mut Frame, shape: CallShape) -> Result<()> {
    let produced = call(f.clone(), frame, shape.args)?;
    conform(frame, produced, shape.rets)
}
