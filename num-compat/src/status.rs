use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Result codes returned by the [`compat`] routines, following the runtime's system-wide
/// error number convention: zero for success, negative for failure.
///
/// [`compat`]: compat/index.html
#[must_use]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[repr(i32)]
pub enum Status {
    /// The call succeeded.
    Ok = 0,
    /// The call was rejected; nothing was written.
    InvalidArgument = -1001,
}

impl Status {
    /// Returns the raw integer code.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Returns `true` for [`Status::Ok`].
    ///
    /// [`Status::Ok`]: enum.Status.html#variant.Ok
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl<T> From<&Result<T, Error>> for Status {
    fn from(result: &Result<T, Error>) -> Status {
        match result {
            Ok(_) => Status::Ok,
            Err(_) => Status::InvalidArgument,
        }
    }
}

impl From<Status> for i32 {
    fn from(status: Status) -> i32 {
        status.code()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK ({})", self.code()),
            Status::InvalidArgument => write!(f, "invalid argument ({})", self.code()),
        }
    }
}
