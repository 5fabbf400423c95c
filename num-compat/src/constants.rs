// Want this to be as large as the largest possible rendering of any type that implements
// Integer or Float, which is currently u64::MAX (20 digits) or i64::MIN (19 digits + minus sign).
// The longest decimal rendering is 14 bytes: minus sign + 10 digits + point + 2 digits, the
// second fractional digit only appearing when the scaled fraction rounds up to 100.
/// The largest number of bytes any rendering can take, not counting the NUL terminator.
pub const MAX_BUF_LEN: usize = 20;

pub(crate) const U8_MAX_LEN: usize = 3;
pub(crate) const U16_MAX_LEN: usize = 5;
pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const U64_MAX_LEN: usize = 20;

pub(crate) const I8_MAX_LEN: usize = 4;
pub(crate) const I16_MAX_LEN: usize = 6;
pub(crate) const I32_MAX_LEN: usize = 11;
pub(crate) const I64_MAX_LEN: usize = 20;

pub(crate) const DECIMAL_MAX_LEN: usize = I32_MAX_LEN + 3;

#[cfg(target_pointer_width = "16")]
pub(crate) const USIZE_MAX_LEN: usize = U16_MAX_LEN;
#[cfg(target_pointer_width = "16")]
pub(crate) const ISIZE_MAX_LEN: usize = I16_MAX_LEN;

#[cfg(target_pointer_width = "32")]
pub(crate) const USIZE_MAX_LEN: usize = U32_MAX_LEN;
#[cfg(target_pointer_width = "32")]
pub(crate) const ISIZE_MAX_LEN: usize = I32_MAX_LEN;

#[cfg(target_pointer_width = "64")]
pub(crate) const USIZE_MAX_LEN: usize = U64_MAX_LEN;
#[cfg(target_pointer_width = "64")]
pub(crate) const ISIZE_MAX_LEN: usize = I64_MAX_LEN;

/// Scratch space that digits are collected into, least-significant first.
pub(crate) type Scratch = arrayvec::ArrayVec<u8, MAX_BUF_LEN>;
