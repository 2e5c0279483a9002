//! Trace reading.
//!
//! This module turns a textual memory trace into [`MemoryAccess`] values. It performs:
//! 1. **Opening:** Wraps a trace file (or any `BufRead`) for lazy, line-at-a-time reading.
//! 2. **Parsing:** Splits each `OP ADDRESS[,SIZE]` record into kind, address, and size.
//! 3. **Diagnostics:** Reports the 1-based line number and content of any malformed record.
//!
//! Blank lines are skipped. The first token `L` is a load; every other
//! operation code is a store.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::common::{AccessType, MemoryAccess, TraceError};

/// Maximum number of hexadecimal digits in a 64-bit address.
const MAX_ADDRESS_DIGITS: usize = 16;

/// Lazily yields accesses from a trace source.
///
/// Iteration stops after the first error; a malformed line is fatal.
#[derive(Debug)]
pub struct TraceReader<R> {
    reader: R,
    line_no: usize,
    buf: String,
    failed: bool,
}

impl TraceReader<BufReader<File>> {
    /// Opens the trace file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TraceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "opened trace");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps any buffered reader.
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            buf: String::new(),
            failed: false,
        }
    }

    /// Number of lines consumed so far, blank lines included.
    pub const fn line_no(&self) -> usize {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<MemoryAccess, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            self.buf.clear();
            match self.reader.read_line(&mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line_no += 1,
                Err(source) => {
                    self.failed = true;
                    return Some(Err(TraceError::Read {
                        line: self.line_no + 1,
                        source,
                    }));
                }
            }
            if self.buf.trim().is_empty() {
                continue;
            }
            let parsed = parse_line(&self.buf, self.line_no);
            self.failed = parsed.is_err();
            return Some(parsed);
        }
    }
}

/// Parses one `OP ADDRESS[,SIZE]` record.
///
/// `line_no` is only used for diagnostics.
///
/// # Errors
///
/// Returns [`TraceError::Malformed`] when the address is missing, is not
/// hexadecimal, is wider than 64 bits, or when the size is not a decimal
/// integer.
///
/// # Examples
///
/// ```
/// use csim_core::common::{AccessType, MemoryAccess};
/// use csim_core::sim::trace::parse_line;
///
/// let access = parse_line(" S 7ff000388,8", 1).unwrap();
/// assert_eq!(access, MemoryAccess::store(0x7ff000388, 8));
/// assert_eq!(parse_line("L 10", 2).unwrap().kind, AccessType::Load);
/// assert!(parse_line("L", 3).is_err());
/// ```
pub fn parse_line(line: &str, line_no: usize) -> Result<MemoryAccess, TraceError> {
    let content = line.trim();
    let malformed = |reason| TraceError::Malformed {
        line: line_no,
        content: content.to_owned(),
        reason,
    };

    let (op, operand) = content
        .split_once(char::is_whitespace)
        .ok_or_else(|| malformed("missing address"))?;
    let (addr_str, size_str) = match operand.trim().split_once(',') {
        Some((addr, size)) => (addr.trim(), Some(size.trim())),
        None => (operand.trim(), None),
    };

    if addr_str.is_empty() {
        return Err(malformed("missing address"));
    }
    if addr_str.len() > MAX_ADDRESS_DIGITS {
        return Err(malformed("address wider than 64 bits"));
    }
    if !addr_str.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(malformed("address is not hexadecimal"));
    }
    let address =
        u64::from_str_radix(addr_str, 16).map_err(|_| malformed("address is not hexadecimal"))?;

    let size = match size_str {
        None | Some("") => 0,
        Some(s) => s.parse().map_err(|_| malformed("size is not a decimal integer"))?,
    };

    Ok(MemoryAccess {
        kind: AccessType::from_op(op),
        address,
        size,
    })
}
