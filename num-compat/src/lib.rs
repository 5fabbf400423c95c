/*!
[![Crates.io](https://img.shields.io/crates/v/num-compat.svg)](https://crates.io/crates/num-compat)
[![Documentation](https://docs.rs/num-compat/badge.svg)](https://docs.rs/num-compat/)
![License](https://img.shields.io/crates/l/num_compat.svg)

A Rust crate for writing string representations of numbers into fixed, caller-owned storage,
the way a small embedded device runtime expects them.

# Introduction

Device runtimes often hand a formatting routine a raw character buffer and expect back a
NUL-terminated decimal rendering plus a status code. This crate provides those routines
without the unchecked writes: every output is bounds-checked against the storage it is
given, and nothing is written when a call fails.

There are three layers:

* Result-based routines that write into `Option<&mut [u8]>` storage:
  [`reverse_in_place`], [`format_signed_integer`], [`format_unsigned_long`],
  [`format_integer`] and [`format_decimal`].
* An owned, stack-allocated [`Buffer`] that always holds a NUL-terminated rendering.
* The [`compat`] module, which exposes the same routines under their runtime names
  (`string_reverse`, `itoa`, `ultoa`, `dtoa`) and returns a [`Status`] code.

# Examples

Writing into caller storage:

```rust
use num_compat::{format_decimal, format_signed_integer, ErrorKind};

fn main() {
    let mut storage = [0u8; 12];

    let s = format_signed_integer(-42, Some(&mut storage)).unwrap();
    assert_eq!(s, "-42");
    assert_eq!(&storage[..4], b"-42\0");

    // one fractional digit, truncated
    let s = format_decimal(3.58, Some(&mut storage)).unwrap();
    assert_eq!(s, "3.5");

    // too small for "12345" plus its terminator
    let mut small = [0u8; 5];
    let err = format_signed_integer(12345, Some(&mut small)).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Capacity { len: 6, cap: 5 });
    assert_eq!(small, [0u8; 5]);
}
```

Using the owned [`Buffer`]:

```rust
use num_compat::Buffer;

fn main() {
    let mut buf = Buffer::new();
    assert_eq!(buf.write_integer(u64::MAX), "18446744073709551615");
    assert_eq!(buf.as_bytes_with_nul().last(), Some(&0));

    assert_eq!(buf.write_decimal(-3.5).unwrap(), "-3.5");
}
```

Using the status-code shims:

```rust
use num_compat::compat::{itoa, Status};

fn main() {
    let mut storage = [0u8; 12];
    assert_eq!(itoa(12345, Some(&mut storage)), Status::Ok);
    assert_eq!(itoa(12345, None).code(), -1001);
}
```

# Extra features

| Available features | What to put in your `Cargo.toml`                               |
| :----------------- | :------------------------------------------------------------- |
| `no_std`           | `num-compat = { version = "0.1", default-features = false }`   |
| `with-serde`       | `num-compat = { version = "0.1", features = ["with-serde"] }`  |

# License

**num-compat** is licensed under either of:

- [The Apache License, Version 2.0], or
- [The MIT license]

at your option.

[The Apache License, Version 2.0]: http://www.apache.org/licenses/LICENSE-2.0
[The MIT license]: http://opensource.org/licenses/MIT
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    dead_code,
    deprecated,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts
)]
#![doc(html_root_url = "https://docs.rs/num-compat/0.1.0")]

mod buffer;
pub mod compat;
mod constants;
mod dtoa;
mod error;
mod error_kind;
mod itoa;
mod reverse;
mod status;

pub use self::buffer::Buffer;
pub use self::constants::MAX_BUF_LEN;
pub use self::dtoa::{format_decimal, Float};
pub use self::error::Error;
pub use self::error_kind::ErrorKind;
pub use self::itoa::{format_integer, format_signed_integer, format_unsigned_long, Integer};
pub use self::reverse::reverse_in_place;
pub use self::status::Status;

mod private {
    pub trait Sealed {}
}
