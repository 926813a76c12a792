// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-capacity line buffer a log call renders into.
//!
//! A [LogLine] lives on the stack of the logging call.  Every write is bounded
//! by the capacity: anything that does not fit is dropped, never written past
//! the end.  One byte is always held back for the trailing NUL so that the
//! finished line can be handed to C-style sinks unchanged.
//!
//! # Usage Pattern
//!
//! 1. Create an empty [LogLine].
//! 2. Push the prefix fields, then write the message through [std::fmt::Write].
//! 3. Call [LogLine::finish] to append terminators and the NUL.
//! 4. Hand [LogLine::line] to a sink.
//!
//! ```
//! use linelog::LogLine;
//! use std::fmt::Write;
//!
//! let mut line: LogLine<16> = LogLine::new();
//! line.push_str("tag:");
//! write!(line, "value {}", 12345678).unwrap();
//! assert!(line.is_truncated());
//! let len = line.finish(false, true);
//! assert_eq!(line.line().as_bytes(), b"tag:value 1234\n");
//! assert_eq!(len, 15);
//! ```

use crate::numeric;
use std::ffi::CStr;
use std::fmt::{self, Debug, Write};

/// Capacity of a line, including the trailing NUL.
pub const DEFAULT_LINE_CAPACITY: usize = 1024;

/// Smallest usable capacity: CR, LF and the NUL must always fit.
const MIN_CAPACITY: usize = 4;

/**
A bounded, NUL-terminated line buffer of `N` bytes.

The content never exceeds `N - 1` bytes.
*/
pub struct LogLine<const N: usize = DEFAULT_LINE_CAPACITY> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> LogLine<N> {
    const CAPACITY_CHECK: () = assert!(N >= MIN_CAPACITY, "LogLine capacity is too small");

    /// The most content bytes a line can hold.
    pub const MAX_LEN: usize = N - 1;

    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Content bytes that can still be written.
    pub const fn remaining(&self) -> usize {
        Self::MAX_LEN - self.len
    }

    /// Whether any write so far was cut short.
    pub const fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Appends as much of `bytes` as fits; returns the count written.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> usize {
        let count = bytes.len().min(self.remaining());
        self.buf[self.len..self.len + count].copy_from_slice(&bytes[..count]);
        self.len += count;
        if count < bytes.len() {
            self.truncated = true;
        }
        count
    }

    pub fn push_str(&mut self, s: &str) -> usize {
        self.push_bytes(s.as_bytes())
    }

    pub fn push_byte(&mut self, byte: u8) -> bool {
        self.push_bytes(&[byte]) == 1
    }

    /// Appends `value` in decimal, left-padded with `pad` to `min_digits`.
    pub fn push_decimal(&mut self, value: u64, min_digits: usize, pad: u8) -> usize {
        let end = Self::MAX_LEN;
        let written = numeric::encode_padded(value, min_digits, pad, &mut self.buf[self.len..end]);
        self.len += written;
        if written < numeric::width(value, min_digits) {
            self.truncated = true;
        }
        written
    }

    /// Drops content past `len`.  Has no effect if `len` is not shorter.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
        }
    }

    /**
    Appends the terminators and the trailing NUL, returning the final length.

    `\r` (if `cr`) then `\n` (if `newline`) follow the content when there is
    room.  When there is not, the line is extended to its maximum length and
    the terminators overwrite its last bytes, sacrificing content rather than
    dropping the terminators.
    */
    pub fn finish(&mut self, cr: bool, newline: bool) -> usize {
        let terminators = usize::from(cr) + usize::from(newline);
        if self.len + terminators <= Self::MAX_LEN {
            if cr {
                self.buf[self.len] = b'\r';
                self.len += 1;
            }
            if newline {
                self.buf[self.len] = b'\n';
                self.len += 1;
            }
        } else {
            self.truncated = true;
            self.len = Self::MAX_LEN;
            let mut at = Self::MAX_LEN - terminators;
            if cr {
                self.buf[at] = b'\r';
                at += 1;
            }
            if newline {
                self.buf[at] = b'\n';
            }
        }
        self.buf[self.len] = 0;
        self.len
    }

    /// The content written so far, without the NUL.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// A view of the finished line for a sink.
    pub fn line(&mut self) -> Line<'_> {
        self.buf[self.len] = 0;
        Line {
            bytes: &self.buf[..=self.len],
        }
    }
}

impl<const N: usize> Default for LogLine<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Write for LogLine<N> {
    /// Never fails: overflow is recorded with [LogLine::is_truncated] so that
    /// an `Err` from formatting always means a failing `Display` impl.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> Debug for LogLine<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogLine")
            .field("capacity", &N)
            .field("text", &String::from_utf8_lossy(self.as_bytes()))
            .field("truncated", &self.truncated)
            .finish()
    }
}

/*
Boilerplate notes for LogLine:

- Clone/Copy: not implemented; a line is a per-call scratch buffer and copying
  a kilobyte by accident is the kind of thing that shows up in profiles.
- PartialEq/Eq/Hash: not implemented; compare `as_bytes()` instead.
- Default: empty line.
- Debug: manual, showing text rather than the raw array.
- Display: not implemented, the content is not guaranteed UTF-8.
*/

/**
A finished line as seen by a sink.

The bytes are always followed by a NUL, which [Line::as_bytes_with_nul] and
[Line::as_c_str] expose for sinks that hand the line to C.  The borrow ends
with the sink call; sinks that need the text later must copy it.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line<'a> {
    bytes: &'a [u8],
}

impl<'a> Line<'a> {
    /// The line without its NUL.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    pub fn as_bytes_with_nul(&self) -> &'a [u8] {
        self.bytes
    }

    /// Length in bytes, including any CR/LF, excluding the NUL.
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The line up to its first NUL.  A message containing NUL bytes is cut
    /// there.
    pub fn as_c_str(&self) -> &'a CStr {
        // the last byte is always NUL, so this cannot fail
        CStr::from_bytes_until_nul(self.bytes).unwrap_or_default()
    }

    /// The line as text, replacing invalid UTF-8 (possible after a cut
    /// mid-character).
    pub fn to_string_lossy(&self) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.as_bytes())
    }
}
