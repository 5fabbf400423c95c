use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Deref;
use core::str;

use crate::constants::{Scratch, MAX_BUF_LEN};
use crate::dtoa::{self, Float};
use crate::{reverse_in_place, Error, Integer};

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer you can use to get a
/// NUL-terminated rendering of any number this crate supports.
///
/// `Buffer` is the owned alternative to handing the formatting routines a slice: it is always
/// large enough, so integer writes cannot fail.
///
/// # Example
///
/// ```
/// use num_compat::Buffer;
///
/// // Create a stack-allocated buffer...
/// let mut buf = Buffer::new();
///
/// // Write a number into it...
/// buf.write_integer(-1_000_000i32);
///
/// // Get a view into the buffer as a &str...
/// assert_eq!(buf.as_str(), "-1000000");
///
/// // Or as bytes, with the terminator...
/// assert_eq!(buf.as_bytes_with_nul(), b"-1000000\0");
/// ```
#[derive(Copy, Clone)]
pub struct Buffer {
    inner: [u8; MAX_BUF_LEN + 1],
    len: usize,
}

impl Buffer {
    /// Constructs a new, empty, stack-allocated buffer.
    #[inline(always)]
    pub const fn new() -> Buffer {
        Buffer {
            inner: [0; MAX_BUF_LEN + 1],
            len: 0,
        }
    }

    /// Returns a `&[u8]` view into the rendering, terminator excluded.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner[..self.len]
    }

    /// Returns a `&[u8]` view into the rendering, terminator included.
    #[inline(always)]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.inner[..=self.len]
    }

    /// Returns a `&str` view into the rendering.
    #[inline(always)]
    pub fn as_str(&self) -> &str {
        // only ASCII digits, '-' and '.' are ever stored
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns the length (in bytes) of the rendering, terminator excluded.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been written into the buffer yet.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the longest rendering the buffer can hold, terminator excluded.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        MAX_BUF_LEN
    }

    /// Writes the decimal rendering of `n` into the buffer, replacing its previous contents,
    /// and returns a `&str` view into it.
    pub fn write_integer<N>(&mut self, n: N) -> &str
    where
        N: Integer,
    {
        let mut scratch = Scratch::new();
        n.write_reversed(&mut scratch);
        self.store(&scratch)
    }

    /// Writes the truncated one-fractional-digit rendering of `f` into the buffer, replacing
    /// its previous contents, and returns a `&str` view into it.
    ///
    /// On error the previous contents are kept. See [`format_decimal`] for the rules.
    ///
    /// [`format_decimal`]: fn.format_decimal.html
    pub fn write_decimal<F>(&mut self, f: F) -> Result<&str, Error>
    where
        F: Float,
    {
        let mut scratch = Scratch::new();
        dtoa::write_reversed(f.to_f64(), &mut scratch)?;
        Ok(self.store(&scratch))
    }

    fn store(&mut self, reversed: &[u8]) -> &str {
        let len = reversed.len();
        self.inner[..len].copy_from_slice(reversed);
        self.inner[len] = 0;
        self.inner[..len].reverse();
        self.len = len;
        self.as_str()
    }
}

/// Copies digits collected least-significant first into `dst`, terminates them and flips them
/// into reading order. Nothing is written if `dst` is too small.
pub(crate) fn commit<'a>(reversed: &[u8], dst: &'a mut [u8]) -> Result<&'a str, Error> {
    let len = reversed.len();
    if dst.len() <= len {
        return Err(Error::capacity(len + 1, dst.len()));
    }

    dst[..len].copy_from_slice(reversed);
    dst[len] = 0;
    reverse_in_place(Some(&mut *dst))?;

    let dst: &'a [u8] = dst;
    // only ASCII digits, '-' and '.' are ever written
    Ok(unsafe { str::from_utf8_unchecked(&dst[..len]) })
}

impl AsRef<str> for Buffer {
    #[inline(always)]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Default for Buffer {
    /// Same as the [`new`] method.
    ///
    /// [`new`]: struct.Buffer.html#method.new
    #[inline(always)]
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl Deref for Buffer {
    type Target = str;

    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Buffer").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Buffer) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Buffer {}

impl Hash for Buffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state)
    }
}

#[cfg(feature = "with-serde")]
mod serialization {
    use serde::{Serialize, Serializer};

    use super::Buffer;

    impl Serialize for Buffer {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }
}
