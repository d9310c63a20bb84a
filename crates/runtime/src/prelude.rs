//! A collection of useful items to make it easier to work with `lark_runtime`

#[doc(inline)]
pub use crate::{
    Arity, CallShape, Code, Error, ExecFn, Frame, Function, NativeFn, Number, Ptr, PtrMut, Result,
    Stateful, Table, Value, ValueKey, call, call_with, make_ptr_mut, runtime_error, step,
    to_iterator, unexpected_type,
};
