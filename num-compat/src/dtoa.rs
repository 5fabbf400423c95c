use crate::buffer::commit;
use crate::constants::{Scratch, DECIMAL_MAX_LEN};
use crate::Error;

// Working values at or below this truncate outside of i32.
const LOWEST: f64 = -2_147_483_649.0;

/// A floating point number, f32 or f64, that can be written into caller-supplied storage.
///
/// This trait is sealed and cannot be implemented for types outside of num-compat.
pub trait Float: crate::private::Sealed + Copy {
    #[doc(hidden)]
    fn to_f64(self) -> f64;
}

impl crate::private::Sealed for f32 {}

impl Float for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl crate::private::Sealed for f64 {}

impl Float for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Writes a decimal rendering of `f` into `buf`, followed by a NUL terminator.
///
/// The rendering has the integer part and at most one fractional digit, truncated rather than
/// rounded. A fractional digit of zero is dropped together with its decimal point, so `3.0`
/// and `3.05` both render as `"3"`.
///
/// # Errors
///
/// * [`ErrorKind::InvalidArgument`] if `buf` is `None`.
/// * [`ErrorKind::NotRepresentable`] if `f` is NaN or infinite, or if the magnitude of its
///   integer part exceeds 2<sup>31</sup>.
/// * [`ErrorKind::Capacity`] if `buf` is shorter than the rendering plus its terminator.
///
/// In every case `buf` is left untouched.
///
/// # Example
///
/// ```
/// use num_compat::format_decimal;
///
/// let mut buf = [0u8; 16];
/// assert_eq!(format_decimal(3.5, Some(&mut buf)).unwrap(), "3.5");
/// assert_eq!(format_decimal(-3.5, Some(&mut buf)).unwrap(), "-3.5");
/// assert_eq!(format_decimal(3.0, Some(&mut buf)).unwrap(), "3");
/// assert!(format_decimal(f64::NAN, Some(&mut buf)).is_err());
/// ```
///
/// [`ErrorKind::InvalidArgument`]: enum.ErrorKind.html#variant.InvalidArgument
/// [`ErrorKind::NotRepresentable`]: enum.ErrorKind.html#variant.NotRepresentable
/// [`ErrorKind::Capacity`]: enum.ErrorKind.html#variant.Capacity
pub fn format_decimal<'a, F>(f: F, buf: Option<&'a mut [u8]>) -> Result<&'a str, Error>
where
    F: Float,
{
    let buf = buf.ok_or_else(Error::invalid_argument)?;
    let mut scratch = Scratch::new();
    write_reversed(f.to_f64(), &mut scratch)?;
    commit(&scratch, buf)
}

/// Pushes the rendering of `value` into `out`, last byte first.
pub(crate) fn write_reversed(value: f64, out: &mut Scratch) -> Result<(), Error> {
    if !value.is_finite() {
        return Err(Error::not_representable());
    }

    // -0.0 counts as non-negative
    let is_nonnegative = value >= 0.0;
    let n = if is_nonnegative { -value } else { value };
    if n <= LOWEST {
        return Err(Error::not_representable());
    }

    let int_part = n as i32;
    // the scaled fraction is kept in single precision
    let scaled = ((n - f64::from(int_part)) * 100.0) as f32;
    let fraction = (scaled / 10.0) as i32;

    if fraction != 0 {
        push_digits(fraction, out);
        out.push(b'.');
    }

    push_digits(int_part, out);

    if !is_nonnegative {
        out.push(b'-');
    }

    debug_assert!(out.len() <= DECIMAL_MAX_LEN);
    Ok(())
}

// `n` is never positive here.
#[inline]
fn push_digits(mut n: i32, out: &mut Scratch) {
    loop {
        out.push(b'0' + (n % 10).unsigned_abs() as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
}
