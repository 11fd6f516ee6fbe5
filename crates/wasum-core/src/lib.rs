//! wasum checksum core.
//!
//! A `no_std` implementation of the crack-me checksum: a rolling
//! square-and-add recurrence over a zero-terminated byte buffer, seeded with
//! `0x1505` and computed with 32-bit wraparound. With the `alloc` feature the
//! crate can also run the recurrence backwards to recover inputs that produce
//! a given checksum.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod checksum;
#[cfg(feature = "alloc")]
pub mod crack;
pub mod error;
#[cfg(feature = "alloc")]
pub mod sqrt;

pub use checksum::{Checksum, SEED, checksum, checksum_cstr, checksum_input, step};
pub use error::{ByteOffset, ChecksumError, ErrorKind};
