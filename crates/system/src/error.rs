use std::io;

use thiserror::Error;

/// Reasons a sampling cycle produced no utilization value.
///
/// None of these are fatal: the caller skips the cycle and retries on the
/// next tick, leaving the chart stale at worst.
#[derive(Debug, Error)]
pub enum SampleError {
    /// `/proc/stat` could not be opened or read.
    #[error("procfs error: {0}")]
    Read(#[source] io::Error),

    /// The aggregate cpu line was missing or held fewer than four counters.
    #[error("malformed stat line: {0}")]
    Parse(String),

    /// First successful read ever — counters are stored as the baseline and
    /// no sample is emitted (a delta against zero would report cumulative
    /// ticks since boot as one interval's utilization).
    #[error("no baseline reading yet")]
    NoBaseline,

    /// A counter went backwards (kernel counter reset or wrap).
    #[error("cpu counter went backwards")]
    CounterWrap,
}
