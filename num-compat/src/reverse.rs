use crate::Error;

/// Reverses, in place, the bytes of a NUL-terminated string.
///
/// Only the bytes before the first NUL are reversed; the terminator and anything after it are
/// left untouched. A slice without a NUL byte is reversed in full.
///
/// Returns an error of kind [`ErrorKind::InvalidArgument`] if `buf` is `None`.
///
/// # Example
///
/// ```
/// use num_compat::reverse_in_place;
///
/// let mut buf = *b"abc\0xy";
/// reverse_in_place(Some(&mut buf)).unwrap();
/// assert_eq!(&buf, b"cba\0xy");
///
/// assert!(reverse_in_place(None).is_err());
/// ```
///
/// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
pub fn reverse_in_place(buf: Option<&mut [u8]>) -> Result<(), Error> {
    let buf = buf.ok_or_else(Error::invalid_argument)?;
    let len = nul_position(buf);
    swap_ends(&mut buf[..len]);
    Ok(())
}

/// Length of the string in `buf`, i.e. the index of the first NUL byte.
#[inline]
pub(crate) fn nul_position(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

// Walk both ends toward the center until they meet or cross.
#[inline]
fn swap_ends(s: &mut [u8]) {
    if s.is_empty() {
        return;
    }
    let mut i = 0;
    let mut j = s.len() - 1;
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}
