//! Error handling for the pendulum monitor
//!
//! This module defines the error taxonomy and a Result alias for use
//! throughout the application.
//!
//! Three failure classes exist, with different policies:
//!
//! - [`MonitorError::Connection`] — cannot open the device link. Fatal at
//!   startup; the process reports the cause and terminates.
//! - [`MonitorError::Format`] — a malformed or undecodable telemetry line.
//!   Recoverable; the line is discarded and the loop continues.
//! - [`MonitorError::Export`] / [`MonitorError::Io`] — the final CSV write
//!   failed. Reported, and the process still terminates normally afterward.
//!
//! Nothing is retried anywhere.

use thiserror::Error;

/// Main error type for pendulum monitor operations
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Errors opening the serial connection
    #[error("Serial connection error: {0}")]
    Connection(#[from] serialport::Error),

    /// A telemetry line that could not be decoded into a sample
    #[error("Format error: {reason}")]
    Format { reason: String },

    /// Errors writing the CSV export
    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    /// IO errors (serial reads, file flushes)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MonitorError {
    /// Create a format error with the given reason
    pub fn format(reason: impl Into<String>) -> Self {
        MonitorError::Format {
            reason: reason.into(),
        }
    }
}

/// Result type alias for pendulum monitor operations
pub type Result<T> = std::result::Result<T, MonitorError>;
