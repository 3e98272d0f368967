//! Scripted line source for driving sessions without hardware

use pendulum_monitor::{LineSource, Result};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One scripted read outcome
#[derive(Debug, Clone)]
pub enum ScriptedRead {
    /// A complete line arrived (terminator already stripped)
    Line(&'static str),
    /// The timeout elapsed with no complete line
    Timeout,
}

/// A [`LineSource`] that replays a fixed script of reads, then times out
/// forever. Counts how many times it is dropped so tests can verify the
/// connection is released exactly once.
pub struct ScriptedLineSource {
    reads: VecDeque<ScriptedRead>,
    release_count: Arc<AtomicUsize>,
}

impl ScriptedLineSource {
    /// Build a source from a script. The returned counter increments once
    /// when the source is dropped.
    pub fn new(reads: &[ScriptedRead]) -> (Self, Arc<AtomicUsize>) {
        let release_count = Arc::new(AtomicUsize::new(0));
        (
            Self {
                reads: reads.iter().cloned().collect(),
                release_count: release_count.clone(),
            },
            release_count,
        )
    }

    /// Convenience: a script of plain lines with no timeouts
    pub fn from_lines(lines: &[&'static str]) -> (Self, Arc<AtomicUsize>) {
        let reads: Vec<ScriptedRead> =
            lines.iter().copied().map(ScriptedRead::Line).collect();
        Self::new(&reads)
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        match self.reads.pop_front() {
            Some(ScriptedRead::Line(line)) => Ok(Some(line.as_bytes().to_vec())),
            Some(ScriptedRead::Timeout) | None => Ok(None),
        }
    }
}

impl Drop for ScriptedLineSource {
    fn drop(&mut self) {
        self.release_count.fetch_add(1, Ordering::SeqCst);
    }
}
