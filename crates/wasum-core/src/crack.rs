//! Preimage search: find inputs of a fixed length whose checksum is a target.
//!
//! The search meets in the middle. All prefixes of length `len / 2` are run
//! forward from [`SEED`] into a table keyed by accumulator. The remaining
//! characters are peeled off the target backwards with
//! [`predecessors`](crate::sqrt::predecessors), and every state reached after
//! the last backward step is joined against the table.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::vec::Vec;
use core::str::FromStr;

use crate::checksum::{SEED, step};
use crate::error::{ChecksumError, ErrorKind};
use crate::sqrt::predecessors;

/// A non-empty, sorted set of ASCII bytes a candidate input may contain.
///
/// The zero byte is excluded: it would terminate the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Charset {
    bytes: Vec<u8>,
}

impl Charset {
    /// `a-z`, the crack-me password alphabet.
    pub fn lowercase() -> Self {
        Self {
            bytes: (b'a'..=b'z').collect(),
        }
    }

    /// Parse literal characters and inclusive ranges such as `a-zA-Z0-9_`.
    ///
    /// A `-` that cannot form a range (first or last position) is literal.
    pub fn parse(spec: &str) -> Result<Self, ChecksumError> {
        let chars: Vec<(usize, char)> = spec.char_indices().collect();
        let mut set = BTreeSet::new();
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];
            let start = charset_byte(pos, ch)?;
            if i + 2 < chars.len() && chars[i + 1].1 == '-' {
                let (end_pos, end_ch) = chars[i + 2];
                let end = charset_byte(end_pos, end_ch)?;
                if start > end {
                    return Err(ChecksumError::new(
                        pos,
                        ErrorKind::InvalidCharsetRange { start, end },
                    ));
                }
                set.extend(start..=end);
                i += 3;
            } else {
                set.insert(start);
                i += 1;
            }
        }

        if set.is_empty() {
            return Err(ChecksumError::new(0, ErrorKind::EmptyCharset));
        }
        Ok(Self {
            bytes: set.into_iter().collect(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept alongside [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for Charset {
    fn default() -> Self {
        Self::lowercase()
    }
}

impl FromStr for Charset {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn charset_byte(pos: usize, ch: char) -> Result<u8, ChecksumError> {
    if ch == '\0' {
        return Err(ChecksumError::new(pos, ErrorKind::ZeroByteInCharset));
    }
    if !ch.is_ascii() {
        return Err(ChecksumError::new(pos, ErrorKind::NonAsciiCharset { ch }));
    }
    Ok(ch as u8)
}

/// Searches for inputs of exactly `len` charset bytes with a given checksum.
#[derive(Debug, Clone)]
pub struct Cracker {
    charset: Charset,
    len: usize,
    limit: Option<usize>,
}

type ForwardTable = BTreeMap<i32, Vec<Vec<u8>>>;

impl Cracker {
    pub fn new(charset: Charset, len: usize) -> Self {
        Self {
            charset,
            len,
            limit: None,
        }
    }

    /// Stop after collecting `limit` solutions.
    ///
    /// The solutions returned are still sorted, but are not necessarily the
    /// smallest `limit` of all solutions.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    /// Length of every solution.
    pub fn input_len(&self) -> usize {
        self.len
    }

    /// Number of prefixes the forward half enumerates.
    pub fn forward_states(&self) -> usize {
        self.charset.len().saturating_pow(self.forward_len() as u32)
    }

    fn forward_len(&self) -> usize {
        self.len / 2
    }

    /// All solutions for `target`, sorted ascending.
    pub fn crack(&self, target: i32) -> Vec<Vec<u8>> {
        let table = self.forward_table();
        let mut solutions = Vec::new();
        let mut suffix = Vec::with_capacity(self.len - self.forward_len());
        self.walk_back(
            target,
            self.len - self.forward_len(),
            &table,
            &mut suffix,
            &mut solutions,
        );
        solutions.sort_unstable();
        solutions.dedup();
        solutions
    }

    /// The smallest solution for `target`, ignoring any limit.
    pub fn first(&self, target: i32) -> Option<Vec<u8>> {
        let unlimited = Self {
            limit: None,
            ..self.clone()
        };
        unlimited.crack(target).into_iter().next()
    }

    fn forward_table(&self) -> ForwardTable {
        let charset = self.charset.as_bytes();
        let mut frontier: Vec<(i32, Vec<u8>)> = Vec::from([(SEED, Vec::new())]);
        for _ in 0..self.forward_len() {
            frontier = frontier
                .into_iter()
                .flat_map(move |(v, prefix)| {
                    charset.iter().map(move |&c| {
                        let mut next = prefix.clone();
                        next.push(c);
                        (step(v, c), next)
                    })
                })
                .collect();
        }

        let mut table = ForwardTable::new();
        for (v, prefix) in frontier {
            table.entry(v).or_default().push(prefix);
        }
        table
    }

    /// `suffix` holds the characters peeled so far, last character first.
    fn walk_back(
        &self,
        state: i32,
        remaining: usize,
        table: &ForwardTable,
        suffix: &mut Vec<u8>,
        out: &mut Vec<Vec<u8>>,
    ) {
        if self.limit.is_some_and(|limit| out.len() >= limit) {
            return;
        }

        if remaining == 0 {
            let Some(prefixes) = table.get(&state) else {
                return;
            };
            for prefix in prefixes {
                if self.limit.is_some_and(|limit| out.len() >= limit) {
                    return;
                }
                let mut solution = prefix.clone();
                solution.extend(suffix.iter().rev());
                out.push(solution);
            }
            return;
        }

        for &c in self.charset.as_bytes() {
            for u in predecessors(state, c) {
                suffix.push(c);
                self.walk_back(u, remaining - 1, table, suffix, out);
                suffix.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::checksum_input;

    #[test]
    fn recovers_hello() {
        let cracker = Cracker::new(Charset::lowercase(), 5);
        assert_eq!(cracker.crack(2_495_677_951u32 as i32), vec![b"hello".to_vec()]);
    }

    #[test]
    fn harness_constant_needs_six_characters() {
        let target = -485_194_241;
        for len in 1..=5 {
            let cracker = Cracker::new(Charset::lowercase(), len);
            assert!(cracker.crack(target).is_empty(), "length {len}");
        }
        let cracker = Cracker::new(Charset::lowercase(), 6);
        assert_eq!(
            cracker.crack(target),
            vec![b"culfko".to_vec(), b"uigzpo".to_vec()]
        );
        assert_eq!(cracker.first(target), Some(b"culfko".to_vec()));
    }

    #[test]
    fn every_solution_checks_out() {
        let cracker = Cracker::new(Charset::lowercase(), 6);
        for solution in cracker.crack(-485_194_241) {
            assert_eq!(solution.len(), 6);
            assert_eq!(checksum_input(&solution), -485_194_241);
        }
    }

    #[test]
    fn finds_known_inputs() {
        let charset = Charset::parse("a-f0-3").unwrap();
        for word in [&b"c0de"[..], b"fa11", b"bad", b"3", b"0ff1ce"] {
            let cracker = Cracker::new(charset.clone(), word.len());
            let solutions = cracker.crack(checksum_input(word));
            assert!(
                solutions.iter().any(|s| s == word),
                "{:?} not recovered",
                core::str::from_utf8(word)
            );
        }
    }

    #[test]
    fn zero_length() {
        let cracker = Cracker::new(Charset::lowercase(), 0);
        assert_eq!(cracker.crack(SEED), vec![Vec::<u8>::new()]);
        assert!(cracker.crack(SEED + 1).is_empty());
    }

    #[test]
    fn limit_caps_results() {
        let cracker = Cracker::new(Charset::lowercase(), 6).with_limit(1);
        assert_eq!(cracker.crack(-485_194_241).len(), 1);
        assert_eq!(cracker.first(-485_194_241), Some(b"culfko".to_vec()));
    }

    #[test]
    fn forward_states() {
        assert_eq!(Cracker::new(Charset::lowercase(), 5).forward_states(), 676);
        assert_eq!(Cracker::new(Charset::lowercase(), 0).forward_states(), 1);
    }

    #[test]
    fn charset_ranges_and_literals() {
        let charset = Charset::parse("a-cx_").unwrap();
        assert_eq!(charset.as_bytes(), b"_abcx");
        assert_eq!(charset.len(), 5);

        let charset: Charset = "-a-c-".parse().unwrap();
        assert_eq!(charset.as_bytes(), b"-abc");

        let charset = Charset::parse("aaa-a").unwrap();
        assert_eq!(charset.as_bytes(), b"a");
    }

    #[test]
    fn charset_errors() {
        assert_eq!(Charset::parse("").unwrap_err().kind, ErrorKind::EmptyCharset);

        let err = Charset::parse("abz-a").unwrap_err();
        assert_eq!(err.offset.0, 2);
        assert_eq!(
            err.kind,
            ErrorKind::InvalidCharsetRange {
                start: b'z',
                end: b'a'
            }
        );

        let err = Charset::parse("a\0").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ZeroByteInCharset);
        assert_eq!(err.offset.0, 1);

        let err = Charset::parse("aé").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NonAsciiCharset { ch: 'é' });
    }
}
