//! Monitoring session: tick cycle and lifecycle
//!
//! A [`MonitorSession`] owns everything the run needs — the serial line
//! source, the sample store, and the export path — so there is no free-
//! floating module state. The UI calls [`MonitorSession::tick`] once per
//! repaint to perform one read-parse-append cycle, and
//! [`MonitorSession::close`] once when the window is dismissed.
//!
//! # Lifecycle
//!
//! `Idle` → `Running` on [`start`](MonitorSession::start), `Running` →
//! `Closed` on [`close`](MonitorSession::close). `Closed` is terminal:
//! closing exports the store exactly once and then drops the line source,
//! which releases the device connection. Further `tick` or `close` calls are
//! no-ops.

use crate::error::Result;
use crate::exporter::export_csv;
use crate::parser::parse_line;
use crate::serial::LineSource;
use crate::types::{Sample, SampleStore};
use std::path::PathBuf;

/// Lifecycle state of a monitoring session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, not yet ticking
    Idle,
    /// Ticking and collecting samples
    Running,
    /// Window dismissed; exported and released. Terminal.
    Closed,
}

/// Outcome of one tick of the read-parse-append cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// No complete line arrived within the timeout
    NoData,
    /// A sample was parsed and appended to the store
    Appended(Sample),
    /// The line was malformed and discarded; the store is unchanged
    Skipped,
}

/// State for one monitoring run, from connect to export
pub struct MonitorSession<S: LineSource> {
    source: Option<S>,
    store: SampleStore,
    export_path: PathBuf,
    state: SessionState,
}

impl<S: LineSource> MonitorSession<S> {
    /// Create an idle session around an open line source
    pub fn new(source: S, export_path: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source),
            store: SampleStore::new(),
            export_path: export_path.into(),
            state: SessionState::Idle,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The samples collected so far
    pub fn store(&self) -> &SampleStore {
        &self.store
    }

    /// Path the store will be exported to on close
    pub fn export_path(&self) -> &std::path::Path {
        &self.export_path
    }

    /// Begin ticking. Only meaningful from `Idle`.
    pub fn start(&mut self) {
        if self.state == SessionState::Idle {
            self.state = SessionState::Running;
        }
    }

    /// Perform one read-parse-append cycle.
    ///
    /// Outside `Running` this is a no-op. A malformed line is logged and
    /// discarded; a serial fault is logged and treated as no data. Neither
    /// stops the session.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != SessionState::Running {
            return TickOutcome::NoData;
        }
        let Some(source) = self.source.as_mut() else {
            return TickOutcome::NoData;
        };

        let raw = match source.read_line() {
            Ok(Some(raw)) => raw,
            Ok(None) => return TickOutcome::NoData,
            Err(e) => {
                tracing::warn!("Serial read failed: {}", e);
                return TickOutcome::NoData;
            }
        };

        match parse_line(&raw) {
            Ok(Some(sample)) => {
                tracing::debug!(
                    "Waktu: {:.2} s, Sudut: {:.2}°, PID: {:.2}",
                    sample.time_s,
                    sample.angle_deg,
                    sample.pid_output
                );
                self.store.append(sample);
                TickOutcome::Appended(sample)
            }
            Ok(None) => TickOutcome::NoData,
            Err(e) => {
                tracing::warn!(
                    "Discarding line {:?}: {}",
                    String::from_utf8_lossy(&raw),
                    e
                );
                TickOutcome::Skipped
            }
        }
    }

    /// Export the store and release the connection. Idempotent.
    ///
    /// The export result is reported and returned, but the connection is
    /// dropped regardless of it, exactly once, on the first call.
    pub fn close(&mut self) -> Result<usize> {
        if self.state == SessionState::Closed {
            return Ok(self.store.len());
        }
        self.state = SessionState::Closed;

        tracing::info!("Plot closed. Saving {} samples...", self.store.len());
        let result = export_csv(self.store.samples(), &self.export_path);
        match &result {
            Ok(rows) => {
                tracing::info!("Saved {} rows to {:?}", rows, self.export_path);
            }
            Err(e) => {
                tracing::error!("Failed to save {:?}: {}", self.export_path, e);
            }
        }

        if self.source.take().is_some() {
            tracing::info!("Serial connection closed");
        }

        result
    }
}

impl<S: LineSource> Drop for MonitorSession<S> {
    fn drop(&mut self) {
        // Window close normally runs this already; the guard in close()
        // keeps an abnormal teardown from exporting twice.
        if self.state != SessionState::Closed {
            let _ = self.close();
        }
    }
}
