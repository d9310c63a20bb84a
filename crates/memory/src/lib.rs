//! Memory management utilities for Lark
//!
//! The runtime is single-threaded and cooperative, so plain reference
//! counting without cycle detection is the only strategy implemented here.
//! `Ptr` wraps `Rc`, and `PtrMut` adds run-time checked interior mutability
//! on top of it.

#![warn(missing_docs)]

mod ptr;
mod ptr_mut;

pub use ptr::Ptr;
pub use ptr_mut::{Borrow, BorrowMut, LarkCell, PtrMut};
