//! The `iterator` core library module

pub mod adaptors;
pub mod generators;

use self::{
    adaptors::{Chain, DropCount, DropWhile, Filter, Map, Take, TakeWhile, Zip},
    generators::{Range, Repeat, Reversed, Sorted},
};
use super::value_sort;
use crate::{
    Arity, CallShape, ErrorKind, Frame, Function, Number, Result, Table, Value, runtime_error,
    step, to_iterator,
};

/// Makes an iterator that applies `f` to each row pulled from `source`
///
/// `f` receives each full row and its full result row is yielded in its
/// place. Rows for which `f` produces nothing are skipped rather than ending
/// the sequence.
pub fn map(f: Function, source: Value) -> Result<Function> {
    let source = to_iterator(source)?;
    Ok(Function::stateful(Arity::Count(0), Map::new(f, source)))
}

/// Makes an iterator yielding the rows of `source` that pass a predicate
///
/// The predicate receives each full row and returns one boolean-like value;
/// rows testing falsy are skipped.
pub fn filter(predicate: Function, source: Value) -> Result<Function> {
    let source = to_iterator(source)?;
    Ok(Function::stateful(
        Arity::Count(0),
        Filter::new(predicate, source),
    ))
}

/// Folds `source` into a single result row
///
/// When `acc` is missing or empty the first row pulled from the source
/// seeds the accumulator, so an empty source folds to an empty row rather
/// than an error. Each following row is appended to the accumulator and the
/// combined values passed to `f`, whose result row becomes the new
/// accumulator.
pub fn reduce(f: Function, source: Value, acc: Option<Table>) -> Result<Table> {
    let source = to_iterator(source)?;
    let frame = &mut Frame::new();

    let mut acc = match acc {
        Some(acc) if !acc.is_empty() => acc,
        _ => {
            if !step(&source, frame, Arity::Row)? {
                return Ok(Table::new());
            }
            frame.take_row()?
        }
    };

    while step(&source, frame, Arity::Row)? {
        let row = frame.take_row()?;
        let combined = Table::with_capacity(acc.len() + row.len());
        combined.concat(&acc);
        combined.concat(&row);
        frame.set_row(combined);
        call_pass_through(&f, frame)?;
        acc = frame.take_row()?;
    }

    Ok(acc)
}

/// Returns true if any row of `source` passes the predicate
///
/// Stops at the first truthy test without pulling further; an exhausted
/// source without a match is false.
pub fn any(predicate: Function, source: Value) -> Result<bool> {
    let source = to_iterator(source)?;
    let frame = &mut Frame::new();

    while step(&source, frame, Arity::Row)? {
        if test_row(&predicate, frame)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Returns true if every row of `source` passes the predicate
///
/// Stops at the first falsy test without pulling further; an exhausted
/// source without a failure is true.
pub fn all(predicate: Function, source: Value) -> Result<bool> {
    let source = to_iterator(source)?;
    let frame = &mut Frame::new();

    while step(&source, frame, Arity::Row)? {
        if !test_row(&predicate, frame)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Makes an iterator counting from `start` towards `stop` by `step`
///
/// Defaults: `start` 0, `stop` unbounded, and a `step` of 1 or -1 depending
/// on the direction of travel. An ascending range halts once the current
/// value reaches or passes `stop`, a descending range once it reaches or
/// falls below it. A zero step is rejected.
pub fn range(start: Option<Number>, stop: Option<Number>, step: Option<Number>) -> Result<Function> {
    let start = start.unwrap_or(Number::ZERO);
    let stop = stop.unwrap_or(Number::INFINITY);
    let step = step.unwrap_or(if start < stop { Number::ONE } else { -Number::ONE });

    if step == Number::ZERO {
        return runtime_error!("range: the step can't be zero");
    }

    Ok(Function::stateful(
        Arity::Count(0),
        Range::new(start, stop, step),
    ))
}

/// Makes an iterator yielding `value` up to `times` times
///
/// `times` defaults to unbounded.
pub fn repeat(value: Value, times: Option<Number>) -> Function {
    let times = times.unwrap_or(Number::INFINITY);
    Function::stateful(Arity::Count(0), Repeat::new(value, times))
}

/// Makes an iterator yielding one value from each of several sources per step
///
/// `sources` is an iterable of iterables. It's drained on the first step;
/// after that each step pulls one value from every source in order and
/// yields them together as one row, stopping as soon as any source is
/// exhausted.
pub fn zip(sources: Value) -> Result<Function> {
    let sources = to_iterator(sources)?;
    Ok(Function::stateful(Arity::Count(0), Zip::new(sources)))
}

/// Makes an iterator yielding each of several sources in sequence
///
/// `sources` is an iterable of iterables; each is exhausted before the next
/// is pulled, and the sequence ends when `sources` itself is exhausted.
pub fn chain(sources: Value) -> Result<Function> {
    let sources = to_iterator(sources)?;
    Ok(Function::stateful(Arity::Count(0), Chain::new(sources)))
}

/// Makes an iterator yielding a leading portion of `source`
///
/// A number `condition` yields that many values and then halts; a function
/// yields values while the predicate holds, excluding the first failing
/// candidate.
pub fn take(condition: Value, source: Value) -> Result<Function> {
    let source = to_iterator(source)?;
    let state = match condition {
        Value::Number(n) => Function::stateful(Arity::Count(0), Take::new(n, source)),
        Value::Function(predicate) => {
            Function::stateful(Arity::Count(0), TakeWhile::new(predicate, source))
        }
        unexpected => return crate::unexpected_type("a count or a predicate", &unexpected),
    };
    Ok(state)
}

/// Makes an iterator skipping a leading portion of `source`
///
/// A number `condition` discards that many values on the first step; a
/// function discards values while the predicate holds. Either way the rest
/// of the source passes through unfiltered.
pub fn drop(condition: Value, source: Value) -> Result<Function> {
    let source = to_iterator(source)?;
    let state = match condition {
        Value::Number(n) => Function::stateful(Arity::Count(0), DropCount::new(n, source)),
        Value::Function(predicate) => {
            Function::stateful(Arity::Count(0), DropWhile::new(predicate, source))
        }
        unexpected => return crate::unexpected_type("a count or a predicate", &unexpected),
    };
    Ok(state)
}

/// Returns the row of `source` with the smallest primary value
///
/// Ties keep the earliest row; an empty source is an error.
pub fn min(source: Value) -> Result<Table> {
    best_row(source, std::cmp::Ordering::Less, "min")
}

/// Returns the row of `source` with the largest primary value
///
/// Ties keep the earliest row; an empty source is an error.
pub fn max(source: Value) -> Result<Table> {
    best_row(source, std::cmp::Ordering::Greater, "max")
}

/// Makes an iterator replaying `source`'s rows in reverse order
///
/// The source is drained eagerly at construction.
pub fn reverse(source: Value) -> Result<Function> {
    let rows = drain_rows(source)?;
    Ok(Function::stateful(Arity::Count(0), Reversed::new(rows)))
}

/// Makes an iterator replaying `source`'s rows sorted by primary value
///
/// The source is drained eagerly at construction and sorted stably, so rows
/// with equal primary values keep their original relative order.
pub fn sort(source: Value) -> Result<Function> {
    let rows = drain_rows(source)?;
    let mut keyed: Vec<(Value, Table)> = rows
        .into_iter()
        .map(|row| (row.get_index(0), row))
        .collect();
    value_sort::merge_sort(&mut keyed)?;
    Ok(Function::stateful(Arity::Count(0), Sorted::new(keyed)))
}

/// Calls `f` with the row in slot 0 as its arguments, full pass-through
fn call_pass_through(f: &Function, frame: &mut Frame) -> Result<()> {
    crate::call_with(f, frame, CallShape::PASS_THROUGH)
}

/// Tests the row in slot 0 against a predicate, consuming the row
fn test_row(predicate: &Function, frame: &mut Frame) -> Result<bool> {
    crate::call_with(
        predicate,
        frame,
        CallShape::new(Arity::Row, Arity::Count(1)),
    )?;
    Ok(frame.take(0).is_truthy())
}

/// Pulls every remaining row out of an iterable
fn drain_rows(source: Value) -> Result<Vec<Table>> {
    let source = to_iterator(source)?;
    let frame = &mut Frame::new();
    let mut rows = Vec::new();
    while step(&source, frame, Arity::Row)? {
        rows.push(frame.take_row()?);
    }
    Ok(rows)
}

fn best_row(source: Value, keep: std::cmp::Ordering, op: &'static str) -> Result<Table> {
    let source = to_iterator(source)?;
    let frame = &mut Frame::new();
    let mut best: Option<Table> = None;

    while step(&source, frame, Arity::Row)? {
        let row = frame.take_row()?;
        best = match best {
            None => Some(row),
            Some(best_so_far) => {
                if row.get_index(0).compare(&best_so_far.get_index(0))? == keep {
                    Some(row)
                } else {
                    Some(best_so_far)
                }
            }
        };
    }

    match best {
        Some(row) => Ok(row),
        None => runtime_error!(ErrorKind::EmptySequence { op }),
    }
}
