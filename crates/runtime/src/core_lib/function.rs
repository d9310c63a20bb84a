//! The `function` core library module

use crate::{Arity, Frame, Function, Result, Stateful, Table, call};

/// Returns the identity function
///
/// Whatever arguments it receives come straight back as its results.
pub fn identity() -> Function {
    Function::native(Arity::Row, |_frame| Ok(Arity::Row))
}

/// Binds leading arguments to a function
///
/// The result forwards any call to `f` with `args` concatenated in front of
/// the call's own arguments, passing results through unchanged.
pub fn bind(f: Function, args: Table) -> Function {
    Function::stateful(Arity::Row, Bound { f, args })
}

/// Composes a row of functions, applied from last to first
///
/// `comp([f, g, h])` called with `x` produces `f(g(h(x)))`. Each stage's
/// full result row feeds the next stage's input. An empty row composes to
/// the identity function.
pub fn comp(fs: Table) -> Result<Function> {
    let mut stages = Vec::with_capacity(fs.len());
    for stage in fs.values() {
        stages.push(stage.into_function()?);
    }
    Ok(Function::stateful(Arity::Row, Composed { stages }))
}

struct Bound {
    f: Function,
    args: Table,
}

impl Stateful for Bound {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let call_args = frame.take_row()?;
        let combined = Table::with_capacity(self.args.len() + call_args.len());
        combined.concat(&self.args);
        combined.concat(&call_args);
        frame.set_row(combined);
        call(self.f.clone(), frame, Arity::Row)
    }
}

struct Composed {
    stages: Vec<Function>,
}

impl Stateful for Composed {
    fn step(&mut self, frame: &mut Frame) -> Result<Arity> {
        let mut produced = Arity::Row;
        for stage in self.stages.iter().rev() {
            produced = call(stage.clone(), frame, produced)?;
        }
        Ok(produced)
    }
}
