//! Receive buffer for newline-delimited serial input.
//!
//! Bytes arrive in arbitrary chunks; lines come out whole. The buffer is
//! append-only with no cap: a host that streams bytes without ever sending
//! a newline grows it without limit.

use alloc::vec::Vec;

/// Byte accumulator holding partial input until a newline arrives.
pub struct LineBuffer {
    buf: Vec<u8>,
}

impl LineBuffer {
    /// Create empty buffer.
    pub const fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append received bytes.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Split off the first complete line, without its newline terminator.
    ///
    /// Returns `None` when no newline is buffered; partial input stays put
    /// for the next pass.
    pub fn take_line(&mut self) -> Option<Vec<u8>> {
        let idx = self.buf.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.buf.drain(..=idx).collect();
        line.pop();
        Some(line)
    }

    /// Bytes currently buffered.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_line() {
        let mut rx = LineBuffer::new();
        rx.push_bytes(b"ON\n");

        assert_eq!(rx.take_line().as_deref(), Some(&b"ON"[..]));
        assert!(rx.take_line().is_none());
        assert!(rx.is_empty());
    }

    #[test]
    fn test_partial_line_retained() {
        let mut rx = LineBuffer::new();
        rx.push_bytes(b"OF");

        assert!(rx.take_line().is_none());
        assert_eq!(rx.as_bytes(), b"OF");

        rx.push_bytes(b"F\n");
        assert_eq!(rx.take_line().as_deref(), Some(&b"OFF"[..]));
    }

    #[test]
    fn test_multiple_lines_in_one_push() {
        let mut rx = LineBuffer::new();
        rx.push_bytes(b"ON\nOFF\ntrail");

        assert_eq!(rx.take_line().as_deref(), Some(&b"ON"[..]));
        assert_eq!(rx.take_line().as_deref(), Some(&b"OFF"[..]));
        assert!(rx.take_line().is_none());
        assert_eq!(rx.as_bytes(), b"trail");
    }

    #[test]
    fn test_empty_line() {
        let mut rx = LineBuffer::new();
        rx.push_bytes(b"\n");

        assert_eq!(rx.take_line().as_deref(), Some(&b""[..]));
        assert!(rx.is_empty());
    }

    #[test]
    fn test_no_newline_left_after_drain() {
        let mut rx = LineBuffer::new();
        rx.push_bytes(b"a\nb\nc\npartial");

        while rx.take_line().is_some() {}
        assert!(!rx.as_bytes().contains(&b'\n'));
        assert_eq!(rx.as_bytes(), b"partial");
    }
}
