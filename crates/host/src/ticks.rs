use sysmon_core::{MonitorError, Result};
use sysmon_metrics::TickSnapshot;

const PROC_STAT: &str = "/proc/stat";

/// Read the aggregate CPU tick counters from `/proc/stat`.
///
/// Failures (missing file, malformed line) are recoverable: the sampler
/// simply skips the tick.
pub fn read_aggregate_ticks() -> Result<TickSnapshot> {
    let raw = std::fs::read_to_string(PROC_STAT)?;
    parse_stat(&raw).ok_or_else(|| MonitorError::Host(format!("malformed {PROC_STAT}")))
}

/// Parse the aggregate `cpu ` line of a `/proc/stat` dump.
///
/// Column layout: user nice system idle iowait irq softirq steal guest
/// guest_nice. Total sums the first eight columns; idle counts idle plus
/// iowait. The guest columns are already folded into user/nice by the
/// kernel, so summing them would double count.
fn parse_stat(raw: &str) -> Option<TickSnapshot> {
    let line = raw.lines().find(|l| l.starts_with("cpu "))?;
    let fields = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    if fields.len() < 5 {
        return None;
    }

    Some(TickSnapshot {
        total_ticks: fields.iter().take(8).sum(),
        idle_ticks: fields[3] + fields[4],
    })
}
