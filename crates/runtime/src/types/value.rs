//! The core value type used in the Lark runtime

use crate::{ErrorKind, Function, Number, Ptr, Result, Table, runtime_error};
use std::{cmp::Ordering, fmt};

/// The core Value type for Lark
///
/// Cloning a value duplicates a reference to its reference-counted
/// contents; passing a value by move transfers that reference. `Null` is
/// the absence marker used throughout the calling convention: a frame slot
/// holding `Null` carries no value, and an iterator produces `Null` in its
/// first result slot to signal exhaustion.
#[derive(Clone, Default)]
pub enum Value {
    /// The default type representing the absence of a value
    #[default]
    Null,

    /// A boolean, can be either true or false
    Bool(bool),

    /// A number, represented as either a signed 64 bit integer or float
    Number(Number),

    /// An immutable, shared string
    Str(Ptr<str>),

    /// The ordered associative container type used in Lark
    Table(Table),

    /// A callable function object
    Function(Function),
}

impl Value {
    /// Returns true if the value is the absence marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if the value is truthy
    ///
    /// Everything is truthy except `Null` and `false`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Bool(false))
    }

    /// Returns true if the value is callable
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Function(_))
    }

    /// Consumes the value, expecting a function
    pub fn into_function(self) -> Result<Function> {
        match self {
            Value::Function(f) => Ok(f),
            other => crate::unexpected_type("a callable function", &other),
        }
    }

    /// Consumes the value, expecting a table
    pub fn into_table(self) -> Result<Table> {
        match self {
            Value::Table(t) => Ok(t),
            other => crate::unexpected_type("a table", &other),
        }
    }

    /// Performs a three-way comparison between two values
    ///
    /// Numbers compare numerically, strings lexically. Any other pairing
    /// (including comparisons involving NaN) is a contract error.
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        use Value::*;

        let result = match (self, other) {
            (Number(a), Number(b)) => a.partial_cmp(b),
            (Str(a), Str(b)) => Some(a.cmp(b)),
            (Bool(a), Bool(b)) => Some(a.cmp(b)),
            (Null, Null) => Some(Ordering::Equal),
            _ => None,
        };

        match result {
            Some(ordering) => Ok(ordering),
            None => runtime_error!(ErrorKind::InvalidComparison {
                lhs: self.clone(),
                rhs: other.clone(),
            }),
        }
    }

    /// Returns the value's type as a string
    pub fn type_as_string(&self) -> &'static str {
        use Value::*;
        match self {
            Null => "Null",
            Bool(_) => "Bool",
            Number(crate::Number::F64(_)) => "Float",
            Number(crate::Number::I64(_)) => "Int",
            Str(_) => "String",
            Table(_) => "Table",
            Function(_) => "Function",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Value::*;
        match self {
            Null => f.write_str("null"),
            Bool(b) => write!(f, "{b}"),
            Number(n) => write!(f, "{n}"),
            Str(s) => f.write_str(s),
            Table(t) => write!(f, "Table({} entries)", t.len()),
            Function(_) => f.write_str("||"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.type_as_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value.into())
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Self::Table(value)
    }
}

impl From<Function> for Value {
    fn from(value: Function) -> Self {
        Self::Function(value)
    }
}
