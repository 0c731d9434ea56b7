pub mod error;
pub mod proc;
pub mod sampler;

pub use error::SampleError;
pub use proc::{CpuCounters, CpuDelta};
pub use sampler::CpuSampler;

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, warn};

/// Spawn a background Tokio task that samples CPU utilization every
/// `interval_ms` milliseconds and forwards values through the returned
/// channel.
///
/// Failed cycles (unreadable procfs, counter wrap, the initial baseline
/// read) are logged and skipped — the task never stops on error. It stops
/// automatically when the receiver is dropped.
pub fn spawn_sampler(interval_ms: u64) -> mpsc::Receiver<f32> {
    let (tx, rx) = mpsc::channel(4);
    let interval = Duration::from_millis(interval_ms);

    tokio::spawn(async move {
        let mut sampler = CpuSampler::new();
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            match sampler.sample() {
                Ok(sample) => {
                    if tx.send(sample).await.is_err() {
                        break; // receiver dropped
                    }
                }
                Err(SampleError::NoBaseline) => {
                    debug!("baseline counters stored; first sample suppressed");
                }
                Err(e) => warn!("sampling cycle skipped: {e}"),
            }
        }
    });

    rx
}
