//! Status-code routines for the device runtime.
//!
//! These mirror the runtime's `string_reverse`, `itoa`, `ultoa` and `dtoa` calls. Each one
//! delegates to the Result-based routine of the same purpose and collapses the outcome into a
//! [`Status`]: [`Status::Ok`] on success, [`Status::InvalidArgument`] for every error. Nothing is
//! written to the buffer when the status is not [`Status::Ok`].
//!
//! [`Status`]: enum.Status.html
//! [`Status::Ok`]: enum.Status.html#variant.Ok
//! [`Status::InvalidArgument`]: enum.Status.html#variant.InvalidArgument

use core::ffi::{c_double, c_int, c_ulong};

use log::debug;

pub use crate::Status;
use crate::{format_decimal, format_integer, reverse_in_place, Error};

/// Reverses a NUL-terminated string in place. See [`reverse_in_place`].
///
/// [`reverse_in_place`]: ../fn.reverse_in_place.html
pub fn string_reverse(s: Option<&mut [u8]>) -> Status {
    status("string_reverse", &reverse_in_place(s))
}

/// Writes the decimal rendering of `n` into `s`. See [`format_signed_integer`].
///
/// [`format_signed_integer`]: ../fn.format_signed_integer.html
pub fn itoa(n: c_int, s: Option<&mut [u8]>) -> Status {
    status("itoa", &format_integer(n, s))
}

/// Writes the decimal rendering of `n` into `s`. See [`format_unsigned_long`].
///
/// [`format_unsigned_long`]: ../fn.format_unsigned_long.html
pub fn ultoa(n: c_ulong, s: Option<&mut [u8]>) -> Status {
    status("ultoa", &format_integer(n, s))
}

/// Writes the truncated one-fractional-digit rendering of `n` into `s`. See
/// [`format_decimal`].
///
/// [`format_decimal`]: ../fn.format_decimal.html
pub fn dtoa(n: c_double, s: Option<&mut [u8]>) -> Status {
    status("dtoa", &format_decimal(n, s))
}

fn status<T>(routine: &str, result: &Result<T, Error>) -> Status {
    if let Err(e) = result {
        debug!("{} rejected: {}", routine, e);
    }
    Status::from(result)
}
