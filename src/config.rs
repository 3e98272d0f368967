//! Fixed configuration for the monitor
//!
//! Everything here is a compile-time constant: the program takes no
//! command-line flags, environment variables, or configuration file.
//! Changing the port, baud rate, or output filename requires a source edit.

use std::time::Duration;

/// Serial port the microcontroller is attached to.
///
/// Windows: `COM3`, `COM4`, ... — Linux/macOS: `/dev/ttyUSB0`,
/// `/dev/tty.usbmodem1411`, ... (check your board's IDE for the exact name).
pub const SERIAL_PORT: &str = "COM3";

/// Baud rate of the device link.
pub const BAUD_RATE: u32 = 115_200;

/// Per-read timeout on the serial port. A read that produces no complete
/// line within this bound is "no data this tick", not an error.
pub const READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Interval between ticks of the read-parse-append-redraw cycle.
/// Best-effort wall time, not hard-real-time.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Output file for the collected samples, written once at shutdown.
/// Relative to the working directory; an existing file is overwritten.
pub const OUTPUT_FILENAME: &str = "hasil_eksperimen.csv";

/// Initial x-axis range in seconds, before the sliding window engages.
pub const INITIAL_X_RANGE: (f64, f64) = (0.0, 10.0);

/// Initial y-axis range, used until the first sample arrives.
pub const INITIAL_Y_RANGE: (f64, f64) = (-180.0, 180.0);

/// Trailing history kept visible once the x-axis starts sliding, in seconds.
pub const X_WINDOW_SECS: f64 = 10.0;

/// Lookahead margin ahead of the newest sample when the x-axis slides.
pub const X_LOOKAHEAD_SECS: f64 = 2.0;
