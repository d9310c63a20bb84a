//! Adaptors used by the `iterator` core library module
//!
//! Each adaptor is a [Stateful] whose captures live in `Option` fields: when
//! the sequence ends the captures are taken and dropped before exhaustion is
//! reported, and every later step short-circuits. Exhaustion itself is
//! reported by producing nothing (a cleared frame and a zero-count shape),
//! which the step protocol reads back as an absent first value.

use crate::{
    Arity, CallShape, Frame, Function, Number, Result, Stateful, Table, Value, call, call_with,
    step, to_iterator,
};
use smallvec::SmallVec;

fn exhausted(frame: &mut Frame) -> Result<Arity> {
    frame.clear();
    Ok(Arity::Count(0))
}

/// An iterator that applies a function to each row of its source
pub struct Map {
    captures: Option<(Function, Function)>,
}

impl Map {
    /// Creates a [Map] adaptor from a function and a source
    pub fn new(f: Function, source: Function) -> Self {
        Self {
            captures: Some((f, source)),
        }
    }
}

impl Stateful for Map {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let Some((f, source)) = &self.captures else {
            return exhausted(frame);
        };
        let (f, source) = (f.clone(), source.clone());

        loop {
            if !step(&source, frame, Arity::Row)? {
                self.captures = None;
                return exhausted(frame);
            }
            call_with(&f, frame, CallShape::PASS_THROUGH)?;

            // Rows the function maps to nothing are skipped
            match frame.get(0) {
                Value::Table(row) if !row.get_index(0).is_null() => return Ok(Arity::Row),
                _ => frame.clear(),
            }
        }
    }
}

/// An iterator that yields the rows of its source that pass a predicate
pub struct Filter {
    captures: Option<(Function, Function)>,
}

impl Filter {
    /// Creates a [Filter] adaptor from a predicate and a source
    pub fn new(predicate: Function, source: Function) -> Self {
        Self {
            captures: Some((predicate, source)),
        }
    }
}

impl Stateful for Filter {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let Some((predicate, source)) = &self.captures else {
            return exhausted(frame);
        };
        let (predicate, source) = (predicate.clone(), source.clone());

        loop {
            if !step(&source, frame, Arity::Row)? {
                self.captures = None;
                return exhausted(frame);
            }

            // The test consumes the frame, so the row is kept aside
            let row = frame.take_row()?;
            frame.set_row(row.clone());
            call_with(
                &predicate,
                frame,
                CallShape::new(Arity::Row, Arity::Count(1)),
            )?;
            if frame.take(0).is_truthy() {
                frame.set_row(row);
                return Ok(Arity::Row);
            }
        }
    }
}

/// An iterator that yields one value from each of several sources per step
pub struct Zip {
    pending: Option<Function>,
    sources: Option<SmallVec<[Function; 4]>>,
}

impl Zip {
    /// Creates a [Zip] adaptor from an iterable of iterables
    pub fn new(sources: Function) -> Self {
        Self {
            pending: Some(sources),
            sources: None,
        }
    }
}

impl Stateful for Zip {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        // The sub-iterators are collected once, on the first step
        if let Some(pending) = self.pending.take() {
            let mut sources = SmallVec::new();
            while step(&pending, frame, Arity::Count(1))? {
                sources.push(to_iterator(frame.take(0))?);
            }
            self.sources = Some(sources);
        }

        let Some(sources) = &self.sources else {
            return exhausted(frame);
        };
        let sources = sources.clone();

        let row = Table::with_capacity(sources.len());
        for source in sources.iter() {
            if !step(source, frame, Arity::Count(1))? {
                self.sources = None;
                return exhausted(frame);
            }
            row.push(frame.take(0));
        }

        if row.is_empty() {
            self.sources = None;
            return exhausted(frame);
        }

        frame.set_row(row);
        Ok(Arity::Row)
    }
}

/// An iterator that yields each of several sources in sequence
pub struct Chain {
    sources: Option<Function>,
    current: Option<Function>,
}

impl Chain {
    /// Creates a [Chain] adaptor from an iterable of iterables
    pub fn new(sources: Function) -> Self {
        Self {
            sources: Some(sources),
            current: None,
        }
    }
}

impl Stateful for Chain {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        // An empty sub-iterator must never surface as an empty step, so
        // advancing is a loop rather than a recursive call.
        loop {
            if let Some(current) = self.current.clone() {
                if step(&current, frame, Arity::Row)? {
                    return Ok(Arity::Row);
                }
                self.current = None;
            }

            let Some(sources) = self.sources.clone() else {
                return exhausted(frame);
            };
            if step(&sources, frame, Arity::Count(1))? {
                self.current = Some(to_iterator(frame.take(0))?);
            } else {
                self.sources = None;
                return exhausted(frame);
            }
        }
    }
}

/// An iterator that yields the first `n` values of its source
pub struct Take {
    remaining: Number,
    source: Option<Function>,
}

impl Take {
    /// Creates a [Take] adaptor with a fixed count
    pub fn new(remaining: Number, source: Function) -> Self {
        Self {
            remaining,
            source: Some(source),
        }
    }
}

impl Stateful for Take {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let Some(source) = &self.source else {
            return exhausted(frame);
        };

        if self.remaining <= Number::ZERO {
            self.source = None;
            return exhausted(frame);
        }
        self.remaining = self.remaining - Number::ONE;

        // Pass the source's results through unreshaped
        call(source.clone(), frame, Arity::Count(0))
    }
}

/// An iterator that yields values while a predicate holds
pub struct TakeWhile {
    captures: Option<(Function, Function)>,
}

impl TakeWhile {
    /// Creates a [TakeWhile] adaptor from a predicate and a source
    pub fn new(predicate: Function, source: Function) -> Self {
        Self {
            captures: Some((predicate, source)),
        }
    }
}

impl Stateful for TakeWhile {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let Some((predicate, source)) = &self.captures else {
            return exhausted(frame);
        };
        let (predicate, source) = (predicate.clone(), source.clone());

        if !step(&source, frame, Arity::Row)? {
            self.captures = None;
            return exhausted(frame);
        }

        let row = frame.take_row()?;
        frame.set_row(row.clone());
        call_with(
            &predicate,
            frame,
            CallShape::new(Arity::Row, Arity::Count(1)),
        )?;
        if frame.take(0).is_truthy() {
            frame.set_row(row);
            Ok(Arity::Row)
        } else {
            // The failing candidate is excluded, and the sequence ends
            self.captures = None;
            exhausted(frame)
        }
    }
}

/// An iterator that skips the first `n` values of its source
pub struct DropCount {
    skip: Option<Number>,
    source: Option<Function>,
}

impl DropCount {
    /// Creates a [DropCount] adaptor with a fixed count
    pub fn new(skip: Number, source: Function) -> Self {
        Self {
            skip: Some(skip),
            source: Some(source),
        }
    }
}

impl Stateful for DropCount {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let Some(source) = &self.source else {
            return exhausted(frame);
        };
        let source = source.clone();

        // The leading values are discarded once, on the first step
        if let Some(skip) = self.skip.take() {
            for _ in 0..skip.as_index() {
                if !step(&source, frame, Arity::Count(0))? {
                    self.source = None;
                    return exhausted(frame);
                }
            }
        }

        call(source, frame, Arity::Count(0))
    }
}

/// An iterator that skips leading values while a predicate holds
pub struct DropWhile {
    predicate: Option<Function>,
    source: Option<Function>,
}

impl DropWhile {
    /// Creates a [DropWhile] adaptor from a predicate and a source
    pub fn new(predicate: Function, source: Function) -> Self {
        Self {
            predicate: Some(predicate),
            source: Some(source),
        }
    }
}

impl Stateful for DropWhile {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let Some(source) = &self.source else {
            return exhausted(frame);
        };
        let source = source.clone();

        // Once a value fails the predicate, filtering is over for good
        if let Some(predicate) = self.predicate.take() {
            loop {
                if !step(&source, frame, Arity::Row)? {
                    self.source = None;
                    return exhausted(frame);
                }
                let row = frame.take_row()?;
                frame.set_row(row.clone());
                call_with(
                    &predicate,
                    frame,
                    CallShape::new(Arity::Row, Arity::Count(1)),
                )?;
                if !frame.take(0).is_truthy() {
                    frame.set_row(row);
                    return Ok(Arity::Row);
                }
            }
        }

        call(source, frame, Arity::Count(0))
    }
}
