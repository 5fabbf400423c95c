mod common;

use num_compat::compat::{dtoa, itoa, string_reverse, ultoa, Status};

use crate::common::{poisoned, rendered, POISON};

#[test]
fn test_status_codes() {
    assert_eq!(Status::Ok.code(), 0);
    assert_eq!(Status::InvalidArgument.code(), -1001);
    assert_eq!(i32::from(Status::InvalidArgument), -1001);
    assert!(Status::Ok.is_ok());
    assert!(!Status::InvalidArgument.is_ok());
    assert_eq!(Status::Ok.to_string(), "OK (0)");
    assert_eq!(Status::InvalidArgument.to_string(), "invalid argument (-1001)");
}

#[test]
fn test_string_reverse() {
    let mut buf = *b"hello\0";
    assert_eq!(string_reverse(Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "olleh");
    assert_eq!(string_reverse(None), Status::InvalidArgument);
}

#[test]
fn test_itoa() {
    let mut buf = poisoned::<12>();
    assert_eq!(itoa(0, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "0");
    assert_eq!(itoa(-42, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "-42");
    assert_eq!(itoa(12345, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "12345");
    assert_eq!(itoa(12345, None), Status::InvalidArgument);
}

#[test]
fn test_ultoa() {
    let mut buf = poisoned::<21>();
    assert_eq!(ultoa(0, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "0");
    assert_eq!(ultoa(4_294_967_295, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "4294967295");
    assert_eq!(ultoa(1, None), Status::InvalidArgument);
}

#[test]
fn test_dtoa() {
    let mut buf = poisoned::<16>();
    assert_eq!(dtoa(3.5, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "3.5");
    assert_eq!(dtoa(-3.5, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "-3.5");
    assert_eq!(dtoa(3.0, Some(&mut buf)), Status::Ok);
    assert_eq!(rendered(&buf), "3");
    assert_eq!(dtoa(3.5, None), Status::InvalidArgument);
}

#[test]
fn test_errors_collapse_to_invalid_argument() {
    let mut small = poisoned::<2>();
    assert_eq!(itoa(-42, Some(&mut small)), Status::InvalidArgument);
    assert_eq!(small, [POISON; 2]);

    let mut buf = poisoned::<16>();
    assert_eq!(dtoa(f64::INFINITY, Some(&mut buf)), Status::InvalidArgument);
    assert_eq!(buf, [POISON; 16]);
}
