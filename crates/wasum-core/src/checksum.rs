//! The square-and-add rolling checksum.
//!
//! Starting from [`SEED`], every input byte `c` updates the accumulator as
//! `v = v * v + c` in 32-bit two's-complement arithmetic. Bytes are signed:
//! `0xFF` contributes `-1`. Input ends at the first zero byte.
//!
//! Three entry points differ only in how the terminator is guaranteed:
//!
//! - [`checksum`] takes a bounded buffer and fails with
//!   [`ErrorKind::InvalidInput`] if no terminator lies within it.
//! - [`checksum_cstr`] takes a [`CStr`], whose terminator is guaranteed.
//! - [`checksum_input`] treats the slice as the encoded input with the
//!   terminator written immediately after it.

use core::ffi::CStr;

use crate::error::{ChecksumError, ErrorKind};

/// Initial accumulator value.
pub const SEED: i32 = 0x1505;

/// Advance the accumulator by one input byte.
#[inline]
pub fn step(v: i32, byte: u8) -> i32 {
    v.wrapping_mul(v).wrapping_add(i32::from(byte as i8))
}

/// Checksum a bounded buffer that must contain a zero terminator.
///
/// Bytes after the first zero are not read. A buffer with no zero byte is a
/// caller error and yields [`ErrorKind::InvalidInput`], with the offset set to
/// the number of bytes scanned.
pub fn checksum(buf: &[u8]) -> Result<i32, ChecksumError> {
    let end = buf
        .iter()
        .position(|&b| b == 0)
        .ok_or_else(|| ChecksumError::new(buf.len(), ErrorKind::InvalidInput))?;
    Ok(fold(&buf[..end]))
}

/// Checksum a zero-terminated string.
pub fn checksum_cstr(s: &CStr) -> i32 {
    fold(s.to_bytes())
}

/// Checksum `input` as if it were written to memory followed by a zero byte.
///
/// An interior zero byte ends the input there, as it would in memory.
pub fn checksum_input(input: &[u8]) -> i32 {
    let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
    fold(&input[..end])
}

fn fold(bytes: &[u8]) -> i32 {
    bytes.iter().fold(SEED, |v, &b| step(v, b))
}

/// Streaming form of the checksum.
///
/// Feeds every byte it is given into the recurrence, zero bytes included;
/// callers stop at their own terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum {
    value: i32,
}

impl Checksum {
    pub const fn new() -> Self {
        Self { value: SEED }
    }

    /// Resume from a previously observed accumulator value.
    pub const fn from_value(value: i32) -> Self {
        Self { value }
    }

    pub fn update(&mut self, byte: u8) {
        self.value = step(self.value, byte);
    }

    pub fn extend_from(&mut self, bytes: &[u8]) {
        self.value = bytes.iter().fold(self.value, |v, &b| step(v, b));
    }

    /// Current accumulator value.
    pub const fn value(&self) -> i32 {
        self.value
    }
}

impl Default for Checksum {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<u8> for Checksum {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.update(byte);
        }
    }
}

impl<'a> Extend<&'a u8> for Checksum {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
