use crate::error::SampleError;

/// Kernel CPU accounting exposition.
pub const PROC_STAT: &str = "/proc/stat";

/// Cumulative CPU tick counters since boot, from the aggregate `cpu` line
/// of `/proc/stat`. Monotonically non-decreasing under normal operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CpuCounters {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
}

/// Component-wise difference between two consecutive counter readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuDelta {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
}

impl CpuCounters {
    /// Read the current counters from `/proc/stat`.
    ///
    /// All-or-nothing: either four counters parse out of the first line or
    /// the whole read fails and the cycle is skipped.
    pub fn read() -> Result<Self, SampleError> {
        let raw = std::fs::read_to_string(PROC_STAT).map_err(SampleError::Read)?;
        Self::parse(&raw)
    }

    /// Parse the aggregate line out of a full `/proc/stat` dump.
    pub fn parse(raw: &str) -> Result<Self, SampleError> {
        let line = raw
            .lines()
            .next()
            .ok_or_else(|| SampleError::Parse("empty stat file".into()))?;
        Self::parse_line(line)
    }

    /// Parse a single `cpu  user nice system idle ...` line.
    /// Trailing fields (iowait, irq, ...) are ignored.
    fn parse_line(line: &str) -> Result<Self, SampleError> {
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("cpu") => {}
            _ => return Err(SampleError::Parse(format!("not an aggregate cpu line: '{line}'"))),
        }

        let mut next = || -> Result<u64, SampleError> {
            fields
                .next()
                .ok_or_else(|| SampleError::Parse(format!("fewer than 4 fields: '{line}'")))?
                .parse::<u64>()
                .map_err(|e| SampleError::Parse(format!("bad counter in '{line}': {e}")))
        };

        Ok(Self {
            user: next()?,
            nice: next()?,
            system: next()?,
            idle: next()?,
        })
    }

    /// Ticks elapsed since `previous`, or `None` if any counter went
    /// backwards (reset/wrap) — never a negative delta.
    pub fn delta_since(&self, previous: &CpuCounters) -> Option<CpuDelta> {
        Some(CpuDelta {
            user: self.user.checked_sub(previous.user)?,
            nice: self.nice.checked_sub(previous.nice)?,
            system: self.system.checked_sub(previous.system)?,
            idle: self.idle.checked_sub(previous.idle)?,
        })
    }
}

impl CpuDelta {
    /// Busy fraction of the interval: `(user+nice+system) / total`.
    ///
    /// Exactly `0.0` when no ticks elapsed at all — never NaN.
    pub fn utilization(&self) -> f32 {
        let busy = (self.user + self.nice + self.system) as f64;
        let total = busy + self.idle as f64;
        if total == 0.0 {
            0.0
        } else {
            (busy / total) as f32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_aggregate_line() {
        let stat = "cpu  361700 1985 118621 3416529 35681 0 5093 0 0 0\n\
                    cpu0 45342 249 14863 427205 4477 0 2578 0 0 0\n";
        let counters = CpuCounters::parse(stat).unwrap();
        assert_eq!(
            counters,
            CpuCounters { user: 361700, nice: 1985, system: 118621, idle: 3416529 }
        );
    }

    #[test]
    fn parse_ignores_trailing_fields() {
        let counters = CpuCounters::parse("cpu 1 2 3 4 5 6 7 8 9 10").unwrap();
        assert_eq!(counters, CpuCounters { user: 1, nice: 2, system: 3, idle: 4 });
    }

    #[test]
    fn parse_exactly_four_fields() {
        let counters = CpuCounters::parse("cpu 10 0 0 90").unwrap();
        assert_eq!(counters.idle, 90);
    }

    #[test]
    fn parse_rejects_short_line() {
        assert!(matches!(
            CpuCounters::parse("cpu 361700 1985 118621"),
            Err(SampleError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_non_cpu_line() {
        assert!(matches!(
            CpuCounters::parse("intr 12345 0 0"),
            Err(SampleError::Parse(_))
        ));
        // Per-core lines are not the aggregate.
        assert!(matches!(
            CpuCounters::parse("cpu0 1 2 3 4"),
            Err(SampleError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage_counter() {
        assert!(matches!(
            CpuCounters::parse("cpu 1 2 three 4"),
            Err(SampleError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(CpuCounters::parse(""), Err(SampleError::Parse(_))));
    }

    #[test]
    fn delta_between_readings() {
        let a = CpuCounters { user: 10, nice: 0, system: 0, idle: 90 };
        let b = CpuCounters { user: 20, nice: 0, system: 0, idle: 180 };
        let delta = b.delta_since(&a).unwrap();
        assert_eq!(delta, CpuDelta { user: 10, nice: 0, system: 0, idle: 90 });
    }

    #[test]
    fn delta_rejects_backwards_counter() {
        let a = CpuCounters { user: 10, nice: 5, system: 3, idle: 90 };
        let b = CpuCounters { user: 12, nice: 4, system: 3, idle: 95 };
        assert!(b.delta_since(&a).is_none());
    }

    #[test]
    fn utilization_ten_percent_interval() {
        // (10,0,0,90) → (20,0,0,180): 10 busy ticks of 100 total.
        let delta = CpuDelta { user: 10, nice: 0, system: 0, idle: 90 };
        assert!((delta.utilization() - 0.10).abs() < 1e-6);
    }

    #[test]
    fn utilization_bounds() {
        let idle_only = CpuDelta { user: 0, nice: 0, system: 0, idle: 100 };
        assert_eq!(idle_only.utilization(), 0.0);

        let busy_only = CpuDelta { user: 50, nice: 25, system: 25, idle: 0 };
        assert_eq!(busy_only.utilization(), 1.0);

        let mixed = CpuDelta { user: 1, nice: 2, system: 3, idle: 4 };
        let sample = mixed.utilization();
        assert!((0.0..=1.0).contains(&sample));
    }

    #[test]
    fn utilization_zero_denominator_is_zero() {
        let delta = CpuDelta { user: 0, nice: 0, system: 0, idle: 0 };
        let sample = delta.utilization();
        assert_eq!(sample, 0.0);
        assert!(sample.is_finite());
    }
}
