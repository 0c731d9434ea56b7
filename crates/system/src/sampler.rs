use crate::error::SampleError;
use crate::proc::CpuCounters;

/// Produces one utilization sample per call by differencing consecutive
/// `/proc/stat` readings.
///
/// Holds the previously observed counters between calls. The previous value
/// is overwritten as soon as a reading is obtained, so a rejected delta
/// (counter wrap) never leaves a stale baseline for the next cycle.
#[derive(Debug, Default)]
pub struct CpuSampler {
    previous: Option<CpuCounters>,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the counters and return the utilization fraction for the
    /// interval since the previous call.
    ///
    /// The very first successful read stores the baseline and returns
    /// [`SampleError::NoBaseline`]; no sample is emitted for it.
    pub fn sample(&mut self) -> Result<f32, SampleError> {
        let current = CpuCounters::read()?;
        self.sample_from(current)
    }

    fn sample_from(&mut self, current: CpuCounters) -> Result<f32, SampleError> {
        let Some(previous) = self.previous.replace(current) else {
            return Err(SampleError::NoBaseline);
        };
        let delta = current
            .delta_since(&previous)
            .ok_or(SampleError::CounterWrap)?;
        Ok(delta.utilization())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(user: u64, nice: u64, system: u64, idle: u64) -> CpuCounters {
        CpuCounters { user, nice, system, idle }
    }

    #[test]
    fn first_read_stores_baseline_without_sample() {
        let mut sampler = CpuSampler::new();
        let result = sampler.sample_from(counters(1000, 10, 100, 9000));
        assert!(matches!(result, Err(SampleError::NoBaseline)));

        // The baseline is in place: the next reading yields a sample.
        let sample = sampler.sample_from(counters(1010, 10, 100, 9090)).unwrap();
        assert!((sample - 0.10).abs() < 1e-6);
    }

    #[test]
    fn consecutive_reads_difference_against_latest() {
        let mut sampler = CpuSampler::new();
        let _ = sampler.sample_from(counters(10, 0, 0, 90));
        let sample = sampler.sample_from(counters(20, 0, 0, 180)).unwrap();
        assert!((sample - 0.10).abs() < 1e-6);

        // Fully busy interval on top of the previous reading.
        let sample = sampler.sample_from(counters(120, 0, 0, 180)).unwrap();
        assert!((sample - 1.0).abs() < 1e-6);
    }

    #[test]
    fn idle_interval_is_zero() {
        let mut sampler = CpuSampler::new();
        let _ = sampler.sample_from(counters(10, 0, 0, 90));
        let sample = sampler.sample_from(counters(10, 0, 0, 90)).unwrap();
        assert_eq!(sample, 0.0);
    }

    #[test]
    fn counter_wrap_skips_cycle_but_advances_baseline() {
        let mut sampler = CpuSampler::new();
        let _ = sampler.sample_from(counters(100, 0, 0, 900));

        // Counters reset (e.g. kernel counter wrap): cycle is skipped.
        let result = sampler.sample_from(counters(5, 0, 0, 45));
        assert!(matches!(result, Err(SampleError::CounterWrap)));

        // The new reading became the baseline, so the next cycle recovers.
        let sample = sampler.sample_from(counters(15, 0, 0, 135)).unwrap();
        assert!((sample - 0.10).abs() < 1e-6);
    }
}
