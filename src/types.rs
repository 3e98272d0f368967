//! Core data types for the pendulum monitor
//!
//! # Main Types
//!
//! - [`Sample`] - One parsed telemetry triple (time, angle, PID output)
//! - [`SampleStore`] - Append-only time-series storage for the run
//!
//! # Memory Management
//!
//! The store grows without bound for the lifetime of the run; nothing is
//! evicted. A long session therefore accumulates memory proportional to the
//! device's sample rate. The entire sequence is written out once at shutdown
//! and discarded with the process.

/// A single parsed telemetry sample
///
/// Immutable once appended to the store. `time_s` comes from the device-side
/// clock (streamed in milliseconds, stored in seconds) and is monotonically
/// non-decreasing by construction; the monitor does not verify this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Timestamp in seconds since the device started streaming
    pub time_s: f64,
    /// Pendulum angle in degrees
    pub angle_deg: f64,
    /// Controller (PID) output
    pub pid_output: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(time_s: f64, angle_deg: f64, pid_output: f64) -> Self {
        Self {
            time_s,
            angle_deg,
            pid_output,
        }
    }
}

/// Append-only storage for the samples collected during a run
///
/// Insertion order is arrival order is chart x-axis order. Written only by
/// the tick cycle; read by the plot for redraw and by the exporter at
/// shutdown. No removal operation, no capacity bound.
#[derive(Debug, Default)]
pub struct SampleStore {
    samples: Vec<Sample>,
}

impl SampleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample. O(1) amortized, never fails.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// All samples collected so far, in arrival order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Number of samples collected so far
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True if no sample has arrived yet
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The most recently appended sample, if any
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Angle series as `[time, value]` plot points
    pub fn angle_points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.time_s, s.angle_deg])
            .collect()
    }

    /// PID output series as `[time, value]` plot points
    pub fn pid_points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.time_s, s.pid_output])
            .collect()
    }
}
