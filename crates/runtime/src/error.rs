use crate::Value;
use std::{error, fmt};
use thiserror::Error;

/// The different error types that can be thrown by the Lark runtime
#[derive(Error, Clone)]
#[allow(missing_docs)]
pub enum ErrorKind {
    #[error("{0}")]
    StringError(String),
    #[error("expected {expected}, found {}", unexpected.type_as_string())]
    UnexpectedType {
        expected: String,
        unexpected: Value,
    },
    #[error("unable to compare {} with {}", lhs.type_as_string(), rhs.type_as_string())]
    InvalidComparison { lhs: Value, rhs: Value },
    #[error("{op}: no elements in the sequence")]
    EmptySequence { op: &'static str },
}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An error thrown by the Lark runtime
#[derive(Clone, Debug)]
pub struct Error {
    pub(crate) error: ErrorKind,
}

impl Error {
    pub(crate) fn new(error: ErrorKind) -> Self {
        Self { error }
    }

    /// Modifies string errors to include the given prefix
    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        use ErrorKind::StringError;

        self.error = match self.error {
            StringError(message) => StringError(format!("{prefix}: {message}")),
            other => other,
        };

        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl error::Error for Error {}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Self::new(ErrorKind::StringError(error))
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        Self::new(ErrorKind::StringError(error.into()))
    }
}

impl From<ErrorKind> for Error {
    fn from(error: ErrorKind) -> Self {
        Self::new(error)
    }
}

/// The Result type used by the Lark runtime
pub type Result<T> = std::result::Result<T, Error>;

/// Creates an [Error] from a message (with format-like behaviour), wrapped in `Err`
///
/// Wrapping the result in `Err` is a convenience for functions that need to
/// return immediately when an error has occurred.
#[macro_export]
macro_rules! runtime_error {
    ($error:literal) => {
        Err($crate::Error::from(format!($error)))
    };
    ($error:expr) => {
        Err($crate::Error::from($error))
    };
    ($error:literal, $($y:expr),+ $(,)?) => {
        Err($crate::Error::from(format!($error, $($y),+)))
    };
}

/// Creates an error that describes a type mismatch
pub fn unexpected_type<T>(expected: &str, unexpected: &Value) -> Result<T> {
    runtime_error!(ErrorKind::UnexpectedType {
        expected: expected.into(),
        unexpected: unexpected.clone(),
    })
}
