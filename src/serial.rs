//! Serial backend for the telemetry link
//!
//! This module provides the low-level interface to the device: opening the
//! port and reading newline-terminated telemetry lines without blocking the
//! UI loop for longer than the configured read timeout.
//!
//! # Design
//!
//! The device is reached through the [`LineSource`] trait so that the session
//! logic and the tests can run without real hardware. [`SerialLineSource`] is
//! the production implementation on top of the `serialport` crate;
//! [`LineFramer`] does the chunk-to-line reassembly and is testable on its
//! own.
//!
//! Lines are returned as raw bytes. UTF-8 validation is deliberately left to
//! the parser, where a bad byte sequence is a recoverable format error rather
//! than a read failure.

use crate::error::Result;
use std::io::Read;
use std::time::Duration;

/// A source of newline-terminated telemetry lines
///
/// `Ok(None)` means "no complete line available within the timeout", which
/// is the normal idle outcome, not an error. Dropping the source releases
/// the underlying connection.
pub trait LineSource {
    /// Try to read one complete line, without its terminator.
    ///
    /// Performs at most one bounded read on the underlying stream, so a slow
    /// or silent device costs one timeout per call, never a stall.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>>;
}

/// Reassembles newline-terminated lines from arbitrary read chunks
///
/// Serial reads return whatever bytes happen to be buffered, so a line can
/// arrive split across several reads or several lines can arrive in one.
/// Bytes after the last terminator stay pending until the rest of the line
/// shows up.
#[derive(Debug, Default)]
pub struct LineFramer {
    pending: Vec<u8>,
}

impl LineFramer {
    /// Create an empty framer
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed raw bytes from the stream into the framer
    pub fn push(&mut self, bytes: &[u8]) {
        self.pending.extend_from_slice(bytes);
    }

    /// Pop the next complete line, stripping the trailing `\n` (and a `\r`
    /// before it, for devices that send CRLF). Returns `None` while no
    /// terminator is buffered.
    pub fn next_line(&mut self) -> Option<Vec<u8>> {
        let newline = self.pending.iter().position(|&b| b == b'\n')?;
        let mut line: Vec<u8> = self.pending.drain(..=newline).collect();
        line.pop(); // the '\n'
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        Some(line)
    }

    /// Number of bytes waiting for a terminator
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// Production [`LineSource`] over a serial port
pub struct SerialLineSource {
    port: Box<dyn serialport::SerialPort>,
    framer: LineFramer,
    read_buf: [u8; 256],
}

impl SerialLineSource {
    /// Open the given port at the given baud rate.
    ///
    /// A failure here is fatal to the program: there is no retry and no
    /// fallback port scan. The timeout bounds every subsequent read call.
    pub fn connect(port_name: &str, baud_rate: u32, read_timeout: Duration) -> Result<Self> {
        let port = serialport::new(port_name, baud_rate)
            .timeout(read_timeout)
            .open()?;

        Ok(Self {
            port,
            framer: LineFramer::new(),
            read_buf: [0u8; 256],
        })
    }

    /// Name of the connected port, if the backend reports one
    pub fn port_name(&self) -> Option<String> {
        self.port.name()
    }
}

impl LineSource for SerialLineSource {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        // A previous read may have buffered more than one line.
        if let Some(line) = self.framer.next_line() {
            return Ok(Some(line));
        }

        match self.port.read(&mut self.read_buf) {
            Ok(0) => Ok(None),
            Ok(n) => {
                self.framer.push(&self.read_buf[..n]);
                Ok(self.framer.next_line())
            }
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::TimedOut
                        | std::io::ErrorKind::WouldBlock
                        | std::io::ErrorKind::Interrupted
                ) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_framer_single_line() {
        let mut framer = LineFramer::new();
        framer.push(b"1000,45.0,12.5\n");
        assert_eq!(framer.next_line().as_deref(), Some(&b"1000,45.0,12.5"[..]));
        assert_eq!(framer.next_line(), None);
    }

    #[test]
    fn test_framer_line_split_across_chunks() {
        let mut framer = LineFramer::new();
        framer.push(b"1000,4");
        assert_eq!(framer.next_line(), None);
        assert_eq!(framer.pending_len(), 6);
        framer.push(b"5.0,12.5\n");
        assert_eq!(framer.next_line().as_deref(), Some(&b"1000,45.0,12.5"[..]));
    }

    #[test]
    fn test_framer_multiple_lines_in_one_chunk() {
        let mut framer = LineFramer::new();
        framer.push(b"1,2,3\n4,5,6\n7,8");
        assert_eq!(framer.next_line().as_deref(), Some(&b"1,2,3"[..]));
        assert_eq!(framer.next_line().as_deref(), Some(&b"4,5,6"[..]));
        assert_eq!(framer.next_line(), None);
        assert_eq!(framer.pending_len(), 3);
    }

    #[test]
    fn test_framer_strips_crlf() {
        let mut framer = LineFramer::new();
        framer.push(b"1000,45.0,12.5\r\n");
        assert_eq!(framer.next_line().as_deref(), Some(&b"1000,45.0,12.5"[..]));
    }

    #[test]
    fn test_framer_empty_line_is_a_line() {
        let mut framer = LineFramer::new();
        framer.push(b"\n1,2,3\n");
        assert_eq!(framer.next_line().as_deref(), Some(&b""[..]));
        assert_eq!(framer.next_line().as_deref(), Some(&b"1,2,3"[..]));
    }
}
