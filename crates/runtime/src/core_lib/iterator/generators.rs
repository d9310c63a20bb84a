//! Generators used by the `iterator` core library module

use crate::{Arity, Frame, Number, Result, Stateful, Table, Value};
use std::collections::VecDeque;

fn exhausted(frame: &mut Frame) -> Result<Arity> {
    frame.clear();
    Ok(Arity::Count(0))
}

/// An iterator counting from a start value towards a stop value
pub struct Range {
    current: Number,
    stop: Number,
    step: Number,
}

impl Range {
    /// Creates a [Range] generator
    ///
    /// The step must be non-zero; the constructor in the `iterator` module
    /// validates it.
    pub fn new(start: Number, stop: Number, step: Number) -> Self {
        Self {
            current: start,
            stop,
            step,
        }
    }
}

impl Stateful for Range {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let halted = if self.step > Number::ZERO {
            self.current >= self.stop
        } else {
            self.current <= self.stop
        };
        if halted {
            return exhausted(frame);
        }

        frame.set(0, self.current.into());
        self.current = self.current + self.step;
        Ok(Arity::Count(1))
    }
}

/// An iterator repeatedly yielding the same value
pub struct Repeat {
    value: Option<Value>,
    remaining: Number,
}

impl Repeat {
    /// Creates a [Repeat] generator
    pub fn new(value: Value, remaining: Number) -> Self {
        Self {
            value: Some(value),
            remaining,
        }
    }
}

impl Stateful for Repeat {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let Some(value) = &self.value else {
            return exhausted(frame);
        };

        if self.remaining <= Number::ZERO {
            self.value = None;
            return exhausted(frame);
        }
        self.remaining = self.remaining - Number::ONE;

        frame.set(0, value.clone());
        Ok(Arity::Count(1))
    }
}

/// An iterator over a table's values in insertion order
pub struct TableIter {
    table: Table,
    position: usize,
}

impl TableIter {
    /// Creates a [TableIter] generator
    pub fn new(table: Table) -> Self {
        Self { table, position: 0 }
    }
}

impl Stateful for TableIter {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        match self.table.entry_at(self.position) {
            Some((_key, value)) => {
                self.position += 1;
                frame.set(0, value);
                Ok(Arity::Count(1))
            }
            None => exhausted(frame),
        }
    }
}

/// An iterator replaying drained rows in reverse order
pub struct Reversed {
    rows: Vec<Table>,
}

impl Reversed {
    /// Creates a [Reversed] generator from rows in source order
    pub fn new(rows: Vec<Table>) -> Self {
        Self { rows }
    }
}

impl Stateful for Reversed {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        match self.rows.pop() {
            Some(row) => {
                frame.set_row(row);
                Ok(Arity::Row)
            }
            None => exhausted(frame),
        }
    }
}

/// An iterator replaying sorted rows in ascending order
pub struct Sorted {
    rows: VecDeque<Table>,
}

impl Sorted {
    /// Creates a [Sorted] generator from keyed rows in sorted order
    pub fn new(keyed: Vec<(Value, Table)>) -> Self {
        Self {
            rows: keyed.into_iter().map(|(_key, row)| row).collect(),
        }
    }
}

impl Stateful for Sorted {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        match self.rows.pop_front() {
            Some(row) => {
                frame.set_row(row);
                Ok(Arity::Row)
            }
            None => exhausted(frame),
        }
    }
}
