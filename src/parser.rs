//! Telemetry line parser
//!
//! Decodes one raw serial line into a [`Sample`]. The wire format is three
//! comma-separated real numbers: `<timestamp_ms>,<angle_degrees>,<pid_output>`.
//! The timestamp arrives in milliseconds and is stored in seconds.
//!
//! A blank line (after trimming) is the device idling, not a fault, and
//! yields `Ok(None)`. Everything else that fails to decode is a
//! [`MonitorError::Format`], which the caller logs and discards; the stream
//! continues on the next tick.

use crate::error::{MonitorError, Result};
use crate::types::Sample;

/// Parse one raw telemetry line.
///
/// Returns `Ok(None)` for a line that is empty after trimming whitespace.
/// Fails when the bytes are not UTF-8, the field count is not exactly three,
/// or any field is not a valid real-number literal.
pub fn parse_line(raw: &[u8]) -> Result<Option<Sample>> {
    let text = std::str::from_utf8(raw)
        .map_err(|_| MonitorError::format("line is not valid UTF-8"))?;

    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != 3 {
        return Err(MonitorError::format(format!(
            "expected 3 comma-separated fields, got {}",
            fields.len()
        )));
    }

    let time_ms = parse_field(fields[0])?;
    let angle_deg = parse_field(fields[1])?;
    let pid_output = parse_field(fields[2])?;

    Ok(Some(Sample::new(time_ms / 1000.0, angle_deg, pid_output)))
}

fn parse_field(field: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| MonitorError::format(format!("invalid number {:?}", field)))
}
