mod common;

use num_compat::{reverse_in_place, ErrorKind};
use rand::Rng;

use crate::common::rendered;

#[test]
fn test_reverse() {
    let test_cases: &[(&[u8], &[u8])] = &[
        (b"\0", b"\0"),
        (b"a\0", b"a\0"),
        (b"ab\0", b"ba\0"),
        (b"abc\0", b"cba\0"),
        (b"12345\0", b"54321\0"),
        (b"-42\0", b"24-\0"),
    ];

    for (input, expected) in test_cases {
        let mut buf = input.to_vec();
        reverse_in_place(Some(&mut buf)).unwrap();
        assert_eq!(&buf[..], *expected);
    }
}

#[test]
fn test_reverse_stops_at_terminator() {
    let mut buf = *b"abc\0xyz";
    reverse_in_place(Some(&mut buf)).unwrap();
    assert_eq!(&buf, b"cba\0xyz");
}

#[test]
fn test_reverse_without_terminator() {
    let mut buf = *b"abcd";
    reverse_in_place(Some(&mut buf)).unwrap();
    assert_eq!(&buf, b"dcba");

    let mut empty: [u8; 0] = [];
    reverse_in_place(Some(&mut empty)).unwrap();
}

#[test]
fn test_reverse_absent_buffer() {
    let err = reverse_in_place(None).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidArgument);
}

#[test]
fn test_reverse_is_involution() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let len = rng.gen_range(0..32);
        let mut buf: Vec<u8> = (0..len).map(|_| rng.gen_range(b' '..=b'~')).collect();
        buf.push(0);
        let original = buf.clone();

        reverse_in_place(Some(&mut buf)).unwrap();
        let once = rendered(&buf).to_string();
        assert_eq!(once.chars().rev().collect::<String>(), rendered(&original));

        reverse_in_place(Some(&mut buf)).unwrap();
        assert_eq!(buf, original);
    }
}
