//! Error types for checksum input and charset handling.
//!
//! Errors carry a byte offset into the caller's input and a structured kind,
//! so the CLI can point at the offending position.

use core::fmt;

/// The byte offset into the caller's input where an error was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteOffset(pub usize);

/// Errors produced at the boundary of the checksum and the preimage search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumError {
    /// For [`ErrorKind::InvalidInput`], the number of bytes scanned without
    /// finding a terminator. For charset errors, the byte position in the charset string.
    pub offset: ByteOffset,
    /// The specific error kind.
    pub kind: ErrorKind,
}

/// Specific categories of errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A bounded buffer contained no zero terminator.
    InvalidInput,
    /// A charset spec produced no bytes.
    EmptyCharset,
    /// A charset range whose start is above its end, e.g. `z-a`.
    InvalidCharsetRange { start: u8, end: u8 },
    /// A charset contained the terminator byte.
    ZeroByteInCharset,
    /// A charset contained a non-ASCII character.
    NonAsciiCharset { ch: char },
}

impl ChecksumError {
    pub(crate) fn new(offset: usize, kind: ErrorKind) -> Self {
        Self {
            offset: ByteOffset(offset),
            kind,
        }
    }
}

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::InvalidInput => {
                write!(f, "invalid input: {} within {} bytes", self.kind, self.offset.0)
            }
            _ => write!(f, "invalid charset at byte {}: {}", self.offset.0, self.kind),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "no zero terminator"),
            ErrorKind::EmptyCharset => write!(f, "charset is empty"),
            ErrorKind::InvalidCharsetRange { start, end } => {
                write!(f, "range {start:#04x}-{end:#04x} is reversed")
            }
            ErrorKind::ZeroByteInCharset => write!(f, "charset contains the zero terminator"),
            ErrorKind::NonAsciiCharset { ch } => {
                write!(f, "character {ch:?} is not ASCII")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChecksumError {}

#[cfg(not(feature = "std"))]
impl core::error::Error for ChecksumError {}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn invalid_input_message_names_scanned_length() {
        let err = ChecksumError::new(4, ErrorKind::InvalidInput);
        assert_eq!(
            err.to_string(),
            "invalid input: no zero terminator within 4 bytes"
        );
    }

    #[test]
    fn charset_message_names_position() {
        let err = ChecksumError::new(2, ErrorKind::InvalidCharsetRange {
            start: b'z',
            end: b'a',
        });
        assert_eq!(
            err.to_string(),
            "invalid charset at byte 2: range 0x7a-0x61 is reversed"
        );
    }
}
