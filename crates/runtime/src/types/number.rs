use std::{cmp::Ordering, fmt, ops};

use saturating_cast::SaturatingCast;

/// The Number type used by the Lark runtime
///
/// The number can be either an `f64` or an `i64` depending on usage.
/// `F64(f64::INFINITY)` doubles as the unbounded default for generator
/// limits like `range`'s stop value and `repeat`'s count.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug)]
pub enum Number {
    F64(f64),
    I64(i64),
}

impl Number {
    /// Zero as an integer
    pub const ZERO: Self = Self::I64(0);
    /// One as an integer
    pub const ONE: Self = Self::I64(1);
    /// Positive infinity, the unbounded generator limit
    pub const INFINITY: Self = Self::F64(f64::INFINITY);

    /// Returns true if the number is represented by an `f64`
    pub fn is_f64(self) -> bool {
        matches!(self, Self::F64(_))
    }

    /// Returns true if the number is represented by an `i64`
    pub fn is_i64(self) -> bool {
        matches!(self, Self::I64(_))
    }

    /// Returns the number as an `i64`, flooring `f64` values
    pub fn as_i64(self) -> i64 {
        match self {
            Self::F64(n) => n.floor() as i64,
            Self::I64(n) => n,
        }
    }

    /// Returns the number as a buffer index
    ///
    /// Negative values saturate to zero, fractional values are floored.
    pub fn as_index(self) -> usize {
        match self {
            // Casting from a float saturates at the usize boundaries
            Self::F64(n) => n as usize,
            Self::I64(n) => n.saturating_cast(),
        }
    }

    /// Returns the value transmuted to a `u64`, used for hashing
    pub fn to_bits(self) -> u64 {
        match self {
            Self::F64(n) => n.to_bits(),
            Self::I64(n) => n as u64,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::F64(n) => write!(f, "{n}"),
            Self::I64(n) => write!(f, "{n}"),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        use Number::*;

        match (self, other) {
            (F64(a), F64(b)) => a == b,
            (F64(a), I64(b)) => *a == *b as f64,
            (I64(a), F64(b)) => *a as f64 == *b,
            (I64(a), I64(b)) => a == b,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Number::*;

        match (self, other) {
            (F64(a), F64(b)) => a.partial_cmp(b),
            (F64(a), I64(b)) => a.partial_cmp(&(*b as f64)),
            (I64(a), F64(b)) => (*a as f64).partial_cmp(b),
            (I64(a), I64(b)) => a.partial_cmp(b),
        }
    }
}

impl ops::Add for Number {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        use Number::*;

        match (self, other) {
            (F64(a), F64(b)) => F64(a + b),
            (F64(a), I64(b)) => F64(a + b as f64),
            (I64(a), F64(b)) => F64(a as f64 + b),
            (I64(a), I64(b)) => I64(a.wrapping_add(b)),
        }
    }
}

impl ops::Sub for Number {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        use Number::*;

        match (self, other) {
            (F64(a), F64(b)) => F64(a - b),
            (F64(a), I64(b)) => F64(a - b as f64),
            (I64(a), F64(b)) => F64(a as f64 - b),
            (I64(a), I64(b)) => I64(a.wrapping_sub(b)),
        }
    }
}

impl ops::Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::F64(n) => Self::F64(-n),
            Self::I64(n) => Self::I64(-n),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::I64(n)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Self::I64(n as i64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::F64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Self::I64(n as i64)
    }
}
