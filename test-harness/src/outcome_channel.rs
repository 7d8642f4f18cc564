// Copyright (c) The test-harness Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The one-shot wire transport that carries a test's diagnostic text back
//! from an isolated child process to the supervisor.
//!
//! Wire format: a 4-byte little-endian signed length prefix `L` (`L == 0`
//! means "no diagnostic"), followed by exactly `L` bytes of UTF-8 text. The
//! outcome tag itself travels out-of-band, via the child's exit status —
//! this channel only ever carries the diagnostic buffer.

use std::io::{self, Read, Write};

/// Writer half, held by the child after `fork`.
pub struct DiagnosticWriter<W> {
    inner: W,
}

impl<W: Write> DiagnosticWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Writes the framed diagnostic. A `None`/empty diagnostic still writes
    /// the zero length prefix, so the reader never has to distinguish "no
    /// write happened" from "an empty diagnostic was sent" — it only needs
    /// to handle the reader-side truncation case separately (see
    /// [`read_diagnostic`]).
    pub fn write_diagnostic(mut self, diagnostic: Option<&str>) -> io::Result<()> {
        let bytes = diagnostic.unwrap_or("").as_bytes();
        let len: i32 = bytes.len().try_into().unwrap_or(i32::MAX);
        self.inner.write_all(&len.to_le_bytes())?;
        self.inner.write_all(&bytes[..len as usize])?;
        Ok(())
    }
}

/// Reads the framed diagnostic from the parent side.
///
/// Per the wire contract: a read that returns fewer bytes than `L` is a
/// truncated diagnostic (display what arrived); zero bytes with `L > 0`
/// means the child died before flushing (the child's exit status, read
/// separately, carries the real outcome) — both cases return whatever
/// valid-UTF-8 prefix was recovered, never an error.
pub fn read_diagnostic(mut reader: impl Read) -> Option<String> {
    let mut len_buf = [0u8; 4];
    if reader.read_exact(&mut len_buf).is_err() {
        return None;
    }
    let len = i32::from_le_bytes(len_buf);
    if len <= 0 {
        return None;
    }

    let mut buf = vec![0u8; len as usize];
    let mut filled = 0;
    loop {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => break,
        }
        if filled == buf.len() {
            break;
        }
    }
    buf.truncate(filled);
    if buf.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_diagnostic() {
        let mut buf = Vec::new();
        DiagnosticWriter::new(&mut buf)
            .write_diagnostic(Some("boom at line 4"))
            .unwrap();
        assert_eq!(read_diagnostic(&buf[..]).as_deref(), Some("boom at line 4"));
    }

    #[test]
    fn empty_diagnostic_reads_as_none() {
        let mut buf = Vec::new();
        DiagnosticWriter::new(&mut buf).write_diagnostic(None).unwrap();
        assert_eq!(read_diagnostic(&buf[..]), None);
    }

    #[test]
    fn truncated_stream_recovers_partial_text() {
        let mut buf = Vec::new();
        DiagnosticWriter::new(&mut buf)
            .write_diagnostic(Some("hello world"))
            .unwrap();
        buf.truncate(4 + 5); // keep the length prefix plus "hello"
        assert_eq!(read_diagnostic(&buf[..]).as_deref(), Some("hello"));
    }

    #[test]
    fn zero_bytes_with_positive_length_is_empty() {
        let len: i32 = 10;
        let buf = len.to_le_bytes().to_vec(); // no payload bytes follow
        assert_eq!(read_diagnostic(&buf[..]), None);
    }

    proptest::proptest! {
        #[test]
        fn arbitrary_utf8_round_trips(s in "\\PC*") {
            let mut buf = Vec::new();
            DiagnosticWriter::new(&mut buf).write_diagnostic(Some(&s)).unwrap();
            let expected = if s.is_empty() { None } else { Some(s) };
            proptest::prop_assert_eq!(read_diagnostic(&buf[..]), expected);
        }
    }
}
