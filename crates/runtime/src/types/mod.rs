//! The core types used in the Lark runtime

mod arity;
mod code;
mod frame;
mod function;
mod number;
mod table;
mod value;
mod value_key;

pub use arity::{Arity, CallShape};
pub use code::{Code, ExecFn};
pub use frame::{FRAME_SLOTS, Frame};
pub use function::{Function, NativeFn, Stateful};
pub(crate) use function::FunctionKind;
pub use number::Number;
pub use table::{LarkHasher, Table};
pub use value_key::ValueKey;
pub use value::Value;
