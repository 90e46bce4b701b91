//! A lightweight library to generate universally unique identifiers in
//! versions 0, 1, and 4
//!
//! ```rust
//! use uuid014::{uuid0, uuid1, uuid4};
//!
//! let uuid = uuid1();
//! println!("{}", uuid); // e.g., "d9428fa3-b3c4-11f2-a9f3-28d244aadb75"
//! println!("{}", uuid.base62()); // e.g., "7NLkoZzvDUMYpOcWJyp2wM"
//!
//! let copy = uuid014::rebuild(&uuid.base62()).unwrap();
//! assert_eq!(copy, uuid);
//! ```
//!
//! Three construction algorithms are available:
//!
//! - [`uuid1`] packs a 60-bit count of 100-nanosecond intervals since the
//!   Gregorian reform epoch, a tick-derived 14-bit clock sequence, and the
//!   host's 48-bit link-layer address (RFC 4122 version 1).
//! - [`uuid0`] packs the same fields but counts ticks from the Unix epoch,
//!   which wraps centuries later, and carries the low 16 bits of the process
//!   ID in place of the clock sequence (a non-standard version 0).
//! - [`uuid4`] fills all 122 non-version, non-variant bits with random data
//!   (RFC 4122 version 4).
//!
//! # Field and bit layout
//!
//! Versions 0 and 1 produce identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |        time_hi        |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|    clock_seq_or_pid       |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 32-bit `time_low`, 16-bit `time_mid`, and 12-bit `time_hi` fields
//!   split the tick count, lowest bits first.
//! - The 4-bit `ver` field is set at `0001` (or `0000` for version 0).
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq_or_pid` field carries the low bits of the tick
//!   (version 1) or of the process ID (version 0).
//! - The 48-bit `node` field carries the first link-layer address found on
//!   the host, or 0 when none is available.
//!
//! Ticks are filtered through a process-wide monotonic clock that falls back
//! to the last tick handed out whenever the wall clock fails to advance, so
//! rapid bursts repeat ticks rather than run backwards; uniqueness within a
//! burst then rests on the other fields. Version 4 identifiers carry no
//! temporal or spatial meaning.
//!
//! # Textual encodings
//!
//! Identifiers serialize to the canonical 8-4-4-4-12 lowercase hex form and
//! to a fixed-width 22-digit Base62 form, and [`rebuild`] reconstructs the
//! value losslessly from either:
//!
//! ```rust
//! let x = uuid014::rebuild("F81D4FAE-7DEC-11D0-A765-00A0C91E6BF6").unwrap();
//! assert_eq!(x.to_string(), "f81d4fae-7dec-11d0-a765-00a0c91e6bf6");
//! assert_eq!(&x.base62() as &str, "7YBUWgZR1mKSqGyj9tVViw");
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` integrates the library with the wall clock and the host's network
//!   interfaces and enables the `String` conversions. Without `std`, the
//!   crate provides the value type, the codecs, and the `_core` generator
//!   primitives that take explicit readings.
//! - `global_gen` (implies `std`) enables the process-wide generator and the
//!   [`uuid0`], [`uuid1`], and [`uuid4`] entry points.
//!
//! Optional features:
//!
//! - `serde` enables the serialization and deserialization of [`Uuid`]
//!   objects.
//! - `uuid` enables the conversions to and from the `uuid` crate's type.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{rebuild, ParseError, Uuid};

pub mod clock;
pub mod generator;
pub mod node;
#[doc(inline)]
pub use generator::UuidGenerator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::{uuid0, uuid1, uuid4};
