use core::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// No output buffer was supplied.
    InvalidArgument,

    /// The output buffer cannot hold the rendering plus its NUL terminator.
    Capacity {
        /// Number of bytes the rendering needs, terminator included.
        len: usize,
        /// Number of bytes the output buffer has.
        cap: usize,
    },

    /// The value has no rendering: it is not finite, or the magnitude of its integer part exceeds
    /// 2<sup>31</sup>.
    NotRepresentable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            InvalidArgument => write!(f, "No output buffer was supplied."),
            Capacity { len, cap } => write!(
                f,
                "Attempted to write a rendering of {} bytes (terminator included) into a buffer \
                 of {} bytes.",
                len, cap
            ),
            NotRepresentable => write!(
                f,
                "Value cannot be rendered; it is either not finite or its integer part exceeds \
                 32 bits."
            ),
        }
    }
}
