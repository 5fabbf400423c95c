#![allow(dead_code)]

use std::str;

/// Bytes before the first NUL, as a &str.
pub fn rendered(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == 0).expect("missing terminator");
    str::from_utf8(&buf[..end]).unwrap()
}

/// Fill byte for storage, so untouched bytes are easy to spot.
pub const POISON: u8 = 0xA5;

pub fn poisoned<const N: usize>() -> [u8; N] {
    [POISON; N]
}

pub const SIGNED_CASES: &[(&str, i32)] = &[
    ("0", 0),
    ("1", 1),
    ("-1", -1),
    ("9", 9),
    ("10", 10),
    ("-42", -42),
    ("100", 100),
    ("12345", 12345),
    ("-987654321", -987_654_321),
    ("2147483647", i32::MAX),
    ("-2147483648", i32::MIN),
];

pub const UNSIGNED_CASES: &[(&str, u64)] = &[
    ("0", 0),
    ("7", 7),
    ("10", 10),
    ("65535", 65535),
    ("4294967295", 4_294_967_295),
    ("4294967296", 4_294_967_296),
    ("18446744073709551615", u64::MAX),
];

pub const DECIMAL_CASES: &[(&str, f64)] = &[
    ("0", 0.0),
    ("0", -0.0),
    ("3", 3.0),
    ("3", 3.05),
    ("3.5", 3.5),
    ("-3.5", -3.5),
    ("3.2", 3.25),
    ("3.1", 3.15),
    ("1.9", 1.99),
    ("0.1", 0.1),
    ("-0.5", -0.5),
    ("-12", -12.0),
    ("100.7", 100.75),
    ("2147483647", 2_147_483_647.0),
    ("-2147483648.5", -2_147_483_648.5),
];
