use crate::{Arity, Code, Frame, Ptr, PtrMut, Result, Table, make_ptr_mut};
use std::fmt;

/// The signature of a stateless native function
///
/// Arguments arrive in the frame already conformed to the function's
/// declared shape, and the returned [Arity] describes the results left
/// behind.
pub type NativeFn = fn(&mut Frame) -> Result<Arity>;

/// A callable that owns mutable state between calls
///
/// Iterators and bound functions are stateful: each call can observe and
/// update the state captured at construction. Exhaustible implementations
/// hold their captures in an `Option` and `take` them on the final step, so
/// upstream resources are released as soon as the sequence ends.
pub trait Stateful {
    /// Performs one call, reading arguments from and writing results to `frame`
    fn step(&mut self, frame: &mut Frame) -> Result<Arity>;
}

#[derive(Clone)]
pub(crate) enum FunctionKind {
    Native(NativeFn),
    Stateful(PtrMut<dyn Stateful>),
    Compiled { code: Ptr<Code>, captures: Table },
}

/// A callable function object
///
/// Three kinds of callable share this type: stateless natives, stateful
/// closures like iterators, and compiled bodies paired with their captured
/// scope. Cloning a function is cheap and shares any underlying state, so
/// two clones of an iterator advance the same sequence.
#[derive(Clone)]
pub struct Function {
    args: Arity,
    kind: FunctionKind,
}

impl Function {
    /// Makes a stateless native function with the given argument shape
    ///
    /// Panics if the shape's literal count exceeds
    /// [Arity::MAX_COUNT](crate::Arity).
    pub fn native(args: Arity, f: NativeFn) -> Self {
        Self {
            args: args.validate(),
            kind: FunctionKind::Native(f),
        }
    }

    /// Makes a stateful function from its initial state
    ///
    /// Panics if the shape's literal count exceeds
    /// [Arity::MAX_COUNT](crate::Arity).
    pub fn stateful(args: Arity, state: impl Stateful + 'static) -> Self {
        Self {
            args: args.validate(),
            kind: FunctionKind::Stateful(make_ptr_mut!(state)),
        }
    }

    /// Makes a closure over a compiled body and its captured scope
    pub fn compiled(code: Ptr<Code>, captures: Table) -> Self {
        Self {
            args: code.shape().args,
            kind: FunctionKind::Compiled { code, captures },
        }
    }

    /// The shape the function expects its arguments in
    pub fn args(&self) -> Arity {
        self.args
    }

    pub(crate) fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    /// The number of live references to the function's shared state
    ///
    /// Stateless natives have no shared state and return `None`.
    pub fn ref_count(&self) -> Option<usize> {
        match &self.kind {
            FunctionKind::Native(_) => None,
            FunctionKind::Stateful(state) => Some(Ptr::ref_count(state)),
            FunctionKind::Compiled { code, .. } => Some(Ptr::ref_count(code)),
        }
    }

    /// Returns true if `self` and `other` share the same state or body
    pub fn ptr_eq(&self, other: &Function) -> bool {
        match (&self.kind, &other.kind) {
            (FunctionKind::Native(a), FunctionKind::Native(b)) => std::ptr::fn_addr_eq(*a, *b),
            (FunctionKind::Stateful(a), FunctionKind::Stateful(b)) => Ptr::ptr_eq(a, b),
            (FunctionKind::Compiled { code: a, .. }, FunctionKind::Compiled { code: b, .. }) => {
                Ptr::ptr_eq(a, b)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            FunctionKind::Native(_) => "native",
            FunctionKind::Stateful(_) => "stateful",
            FunctionKind::Compiled { .. } => "compiled",
        };
        write!(f, "Function({kind}, args: {:?})", self.args)
    }
}
