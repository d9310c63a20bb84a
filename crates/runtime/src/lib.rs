//! The core runtime for the Lark language
//!
//! This crate contains the function/closure object model, the calling
//! convention shared by every caller and callee in the language, the
//! iterator protocol built on top of that convention, and the built-in
//! lazy-sequence combinator library.
//!
//! The bytecode interpreter, the compiler front-end, and the wider value
//! library are external collaborators; they interact with this crate only
//! through the boundary types re-exported from the crate root
//! (in particular [Code]'s [ExecFn] entry point).

#![warn(missing_docs)]

mod call;
mod error;
mod step;
mod types;

pub mod core_lib;
pub mod prelude;

pub use crate::{
    call::{call, call_with},
    error::{Error, ErrorKind, Result, unexpected_type},
    step::{step, to_iterator},
    types::{
        Arity, CallShape, Code, ExecFn, FRAME_SLOTS, Frame, Function, LarkHasher, NativeFn,
        Number, Stateful, Table, Value, ValueKey,
    },
};
pub use lark_memory::{Borrow, BorrowMut, LarkCell, Ptr, PtrMut, make_ptr_mut};
