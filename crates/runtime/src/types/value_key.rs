use crate::{Error, Number, Value};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// The key type used by [Table](crate::Table)
///
/// Only hashable values can be used as keys: `Null`, booleans, numbers and
/// strings. The combinator library only ever uses integer index keys, but
/// scope tables key captured bindings by name.
#[derive(Clone)]
pub struct ValueKey(Value);

impl ValueKey {
    /// Returns a reference to the key's value
    pub fn value(&self) -> &Value {
        &self.0
    }
}

impl TryFrom<Value> for ValueKey {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Str(_) => Ok(Self(value)),
            unexpected => crate::unexpected_type("a hashable value", &unexpected),
        }
    }
}

impl PartialEq for ValueKey {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;

        match (&self.0, &other.0) {
            (Number(a), Number(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Null, Null) => true,
            _ => false,
        }
    }
}
impl Eq for ValueKey {}

impl Hash for ValueKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use Value::*;

        match &self.0 {
            Null => {}
            Bool(b) => b.hash(state),
            // Integral floats hash like the equal integer so that mixed
            // representations of the same index find the same entry
            Number(n) => match n {
                crate::Number::F64(f) if *f == f.trunc() => state.write_i64(*f as i64),
                crate::Number::F64(f) => state.write_u64(f.to_bits()),
                crate::Number::I64(i) => state.write_i64(*i),
            },
            Str(s) => s.hash(state),
            _ => {}
        }
    }
}

impl fmt::Display for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for ValueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<usize> for ValueKey {
    fn from(index: usize) -> Self {
        Self(Value::Number(Number::from(index)))
    }
}

impl From<Number> for ValueKey {
    fn from(number: Number) -> Self {
        Self(Value::Number(number))
    }
}

impl From<&str> for ValueKey {
    fn from(name: &str) -> Self {
        Self(Value::Str(name.into()))
    }
}
