use arrayvec::ArrayVec;

use crate::constants::*;
use crate::MAX_BUF_LEN;

// Digits are pushed least-significant first; the caller reverses them into place.
macro_rules! impl_signed {
    ($($max_len:expr => $t:ident),*) => {$(
        impl crate::private::Sealed for $t {}

        impl super::Integer for $t {
            const MAX_LEN: usize = $max_len;

            #[inline]
            fn write_reversed(self, out: &mut ArrayVec<u8, MAX_BUF_LEN>) {
                let is_nonnegative = self >= 0;

                // keep the working value non-positive so MIN is never negated
                let mut n = if is_nonnegative { -self } else { self };

                loop {
                    out.push(b'0' + (n % 10).unsigned_abs() as u8);
                    n /= 10;
                    if n == 0 {
                        break;
                    }
                }

                if !is_nonnegative {
                    out.push(b'-');
                }

                debug_assert!(out.len() <= Self::MAX_LEN);
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($max_len:expr => $t:ident),*) => {$(
        impl crate::private::Sealed for $t {}

        impl super::Integer for $t {
            const MAX_LEN: usize = $max_len;

            #[inline]
            fn write_reversed(self, out: &mut ArrayVec<u8, MAX_BUF_LEN>) {
                let mut n = self;

                loop {
                    out.push(b'0' + (n % 10) as u8);
                    n /= 10;
                    if n == 0 {
                        break;
                    }
                }

                debug_assert!(out.len() <= Self::MAX_LEN);
            }
        }
    )*};
}

impl_signed!(
    I8_MAX_LEN => i8,
    I16_MAX_LEN => i16,
    I32_MAX_LEN => i32,
    I64_MAX_LEN => i64,
    ISIZE_MAX_LEN => isize
);

impl_unsigned!(
    U8_MAX_LEN => u8,
    U16_MAX_LEN => u16,
    U32_MAX_LEN => u32,
    U64_MAX_LEN => u64,
    USIZE_MAX_LEN => usize
);

#[cfg(test)]
mod tests {
    use super::super::Integer;
    use crate::constants::Scratch;

    fn reversed<N: Integer>(n: N) -> Scratch {
        let mut out = Scratch::new();
        n.write_reversed(&mut out);
        out
    }

    #[test]
    fn test_digits_are_least_significant_first() {
        assert_eq!(&reversed(0i32)[..], b"0");
        assert_eq!(&reversed(120i32)[..], b"021");
        assert_eq!(&reversed(-42i32)[..], b"24-");
        assert_eq!(&reversed(i8::MIN)[..], b"821-");
        assert_eq!(&reversed(u8::MAX)[..], b"552");
    }

    #[test]
    fn test_max_len_is_reached() {
        assert_eq!(reversed(i8::MIN).len(), i8::MAX_LEN);
        assert_eq!(reversed(i16::MIN).len(), i16::MAX_LEN);
        assert_eq!(reversed(i32::MIN).len(), i32::MAX_LEN);
        assert_eq!(reversed(u32::MAX).len(), u32::MAX_LEN);
        assert_eq!(reversed(u64::MAX).len(), u64::MAX_LEN);
        // i64::MIN is 19 digits plus a sign
        assert_eq!(reversed(i64::MIN).len(), i64::MAX_LEN);
    }
}
