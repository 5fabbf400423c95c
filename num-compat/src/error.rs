use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::ErrorKind;

/// This crate's error type.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Constructs a new [`Error`] with kind [`ErrorKind::InvalidArgument`].
    ///
    /// [`Error`]: struct.Error.html
    /// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
    pub fn invalid_argument() -> Error {
        Error {
            kind: ErrorKind::InvalidArgument,
        }
    }

    /// Constructs a new [`Error`] with kind [`ErrorKind::Capacity`].
    ///
    /// [`Error`]: struct.Error.html
    /// [`ErrorKind::Capacity`]: enum.ErrorKind.html#variant.Capacity
    pub fn capacity(len: usize, cap: usize) -> Error {
        Error {
            kind: ErrorKind::Capacity { len, cap },
        }
    }

    /// Constructs a new [`Error`] with kind [`ErrorKind::NotRepresentable`].
    ///
    /// [`Error`]: struct.Error.html
    /// [`ErrorKind::NotRepresentable`]: enum.ErrorKind.html#variant.NotRepresentable
    pub fn not_representable() -> Error {
        Error {
            kind: ErrorKind::NotRepresentable,
        }
    }

    /// Returns the [`ErrorKind`].
    ///
    /// [`ErrorKind`]: enum.ErrorKind.html
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

#[cfg(feature = "std")]
mod standard {
    use super::Error;

    impl std::error::Error for Error {}
}
