//! # Pendulum Monitor: Live Serial Telemetry Viewer
//!
//! A real-time monitor for a rotary pendulum control loop. The microcontroller
//! streams one line of telemetry per control cycle over a serial port
//! (`<timestamp_ms>,<angle_degrees>,<pid_output>`); this application plots the
//! angle and the controller output as they arrive and writes every collected
//! sample to a CSV file when the window is closed.
//!
//! ## Architecture
//!
//! - **Serial**: Non-blocking line framing over a `serialport` connection
//! - **Session**: One read-parse-append cycle per UI tick, single-threaded
//! - **Frontend**: Renders the UI using eframe/egui with egui_plot for graphs
//! - **Exporter**: CSV serialization of the accumulated samples at shutdown
//!
//! ## Configuration
//!
//! Port, baud rate, and output filename are fixed constants in [`config`];
//! changing them requires a source edit. There are no command-line flags.
//!
//! ## Example
//!
//! ```ignore
//! use pendulum_monitor::{
//!     config::{BAUD_RATE, OUTPUT_FILENAME, READ_TIMEOUT, SERIAL_PORT},
//!     frontend::MonitorApp,
//!     serial::SerialLineSource,
//!     session::MonitorSession,
//! };
//!
//! fn main() -> eframe::Result<()> {
//!     let source = SerialLineSource::connect(SERIAL_PORT, BAUD_RATE, READ_TIMEOUT)
//!         .expect("serial port");
//!     let session = MonitorSession::new(source, OUTPUT_FILENAME);
//!
//!     eframe::run_native(
//!         "Rotary Pendulum Monitor",
//!         eframe::NativeOptions::default(),
//!         Box::new(|cc| Ok(Box::new(MonitorApp::new(cc, session)))),
//!     )
//! }
//! ```

pub mod config;
pub mod error;
pub mod exporter;
pub mod frontend;
pub mod parser;
pub mod serial;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use error::{MonitorError, Result};
pub use frontend::MonitorApp;
pub use serial::{LineSource, SerialLineSource};
pub use session::{MonitorSession, SessionState, TickOutcome};
pub use types::{Sample, SampleStore};
