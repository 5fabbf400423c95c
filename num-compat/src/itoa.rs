mod integers;

use arrayvec::ArrayVec;

use crate::buffer::commit;
use crate::constants::Scratch;
use crate::{Error, MAX_BUF_LEN};

/// An integer that can be written into caller-supplied storage.
///
/// This trait is sealed and cannot be implemented for types outside of num-compat.
pub trait Integer: crate::private::Sealed + Copy {
    /// Longest rendering of this type in bytes, not counting the NUL terminator.
    const MAX_LEN: usize;

    #[doc(hidden)]
    fn write_reversed(self, out: &mut ArrayVec<u8, MAX_BUF_LEN>);
}

/// Writes the decimal rendering of any [`Integer`] into `buf`, followed by a NUL terminator.
///
/// Returns the rendering (terminator excluded) borrowed from `buf`.
///
/// # Errors
///
/// * [`ErrorKind::InvalidArgument`] if `buf` is `None`.
/// * [`ErrorKind::Capacity`] if `buf` is shorter than the rendering plus its terminator.
///
/// In both cases `buf` is left untouched.
///
/// # Example
///
/// ```
/// use num_compat::format_integer;
///
/// let mut buf = [0u8; 5];
/// assert_eq!(format_integer(-128i8, Some(&mut buf)).unwrap(), "-128");
/// assert_eq!(&buf, b"-128\0");
/// ```
///
/// [`Integer`]: trait.Integer.html
/// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
/// [`ErrorKind::Capacity`]: enum.ErrorKind.html#variant.Capacity
pub fn format_integer<'a, N>(n: N, buf: Option<&'a mut [u8]>) -> Result<&'a str, Error>
where
    N: Integer,
{
    let buf = buf.ok_or_else(Error::invalid_argument)?;
    let mut scratch = Scratch::new();
    n.write_reversed(&mut scratch);
    commit(&scratch, buf)
}

/// Writes the decimal rendering of a signed integer into `buf`, followed by a NUL terminator.
///
/// See [`format_integer`] for the error conditions.
///
/// # Example
///
/// ```
/// use num_compat::format_signed_integer;
///
/// let mut buf = [0u8; 12];
/// assert_eq!(format_signed_integer(i32::MIN, Some(&mut buf)).unwrap(), "-2147483648");
/// ```
///
/// [`format_integer`]: fn.format_integer.html
#[inline]
pub fn format_signed_integer(n: i32, buf: Option<&mut [u8]>) -> Result<&str, Error> {
    format_integer(n, buf)
}

/// Writes the decimal rendering of an unsigned long into `buf`, followed by a NUL terminator.
///
/// See [`format_integer`] for the error conditions.
///
/// [`format_integer`]: fn.format_integer.html
#[inline]
pub fn format_unsigned_long(n: u64, buf: Option<&mut [u8]>) -> Result<&str, Error> {
    format_integer(n, buf)
}
