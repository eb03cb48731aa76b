/// One point-in-time reading of cumulative CPU tick counters, aggregated
/// across all logical cores (sum of per-core user/system/idle).
///
/// Both counters are monotonically non-decreasing on a live host; a value
/// that goes backwards means the kernel reset or wrapped them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickSnapshot {
    /// All ticks consumed since boot, in every category.
    pub total_ticks: u64,
    /// Idle ticks since boot.
    pub idle_ticks: u64,
}

/// Derives instantaneous CPU utilization from successive tick snapshots.
///
/// Holds the previous snapshot as its only state. The polling task owns the
/// sampler exclusively; there is no internal synchronization.
#[derive(Debug, Default)]
pub struct CpuSampler {
    previous: Option<TickSnapshot>,
}

impl CpuSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percent CPU busy over the interval since the last call, in
    /// `[0.0, 100.0]`.
    ///
    /// Returns `None` on the first call (the reading only seeds the baseline)
    /// and whenever the counters stalled or went backwards (clock stall,
    /// reset, overflow wrap). The baseline is replaced on every call, so a
    /// bad interval never wedges the sampler — the next tick starts clean.
    pub fn sample(&mut self, current: TickSnapshot) -> Option<f64> {
        let previous = self.previous.replace(current)?;

        let total_delta = current.total_ticks.checked_sub(previous.total_ticks)?;
        if total_delta == 0 {
            return None;
        }

        // Idle can lag total on some kernels; saturate rather than wrap.
        let idle_delta = current.idle_ticks.saturating_sub(previous.idle_ticks);

        let usage = 100.0 * (1.0 - idle_delta as f64 / total_delta as f64);
        Some(usage.clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(total: u64, idle: u64) -> TickSnapshot {
        TickSnapshot {
            total_ticks: total,
            idle_ticks: idle,
        }
    }

    #[test]
    fn first_call_seeds_baseline_only() {
        let mut sampler = CpuSampler::new();
        assert_eq!(sampler.sample(ticks(1000, 800)), None);
    }

    #[test]
    fn documented_interval_yields_75_percent() {
        let mut sampler = CpuSampler::new();
        sampler.sample(ticks(1000, 800));
        assert_eq!(sampler.sample(ticks(1200, 850)), Some(75.0));
    }

    #[test]
    fn identical_snapshots_yield_none() {
        let mut sampler = CpuSampler::new();
        sampler.sample(ticks(1000, 800));
        assert_eq!(sampler.sample(ticks(1000, 800)), None);
    }

    #[test]
    fn counter_reset_skips_one_interval_then_recovers() {
        let mut sampler = CpuSampler::new();
        sampler.sample(ticks(5000, 4000));
        // Counters went backwards — reboot or wraparound.
        assert_eq!(sampler.sample(ticks(100, 80)), None);
        // The reset reading became the new baseline.
        assert_eq!(sampler.sample(ticks(300, 130)), Some(75.0));
    }

    #[test]
    fn monotone_sequences_stay_in_range() {
        let mut sampler = CpuSampler::new();
        let mut total = 0u64;
        let mut idle = 0u64;
        for step in 1..100u64 {
            total += step * 7 + 1;
            idle += step * 3;
            if let Some(usage) = sampler.sample(ticks(total, idle)) {
                assert!((0.0..=100.0).contains(&usage), "out of range: {usage}");
            }
        }
    }

    #[test]
    fn idle_exceeding_total_clamps_to_zero() {
        let mut sampler = CpuSampler::new();
        sampler.sample(ticks(1000, 100));
        assert_eq!(sampler.sample(ticks(1100, 300)), Some(0.0));
    }

    #[test]
    fn fully_idle_interval_is_zero_busy() {
        let mut sampler = CpuSampler::new();
        sampler.sample(ticks(1000, 500));
        assert_eq!(sampler.sample(ticks(1200, 700)), Some(0.0));
    }

    #[test]
    fn fully_busy_interval_is_hundred_percent() {
        let mut sampler = CpuSampler::new();
        sampler.sample(ticks(1000, 500));
        assert_eq!(sampler.sample(ticks(1500, 500)), Some(100.0));
    }
}
