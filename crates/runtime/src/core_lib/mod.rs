//! The core combinator library for the Lark runtime

pub mod function;
pub mod iterator;
mod value_sort;
