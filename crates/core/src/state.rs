use serde::{Deserialize, Serialize};

/// A point-in-time snapshot of host resource usage, published once per poll
/// tick by the background monitor task.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SystemSnapshot {
    /// Most recent CPU utilization sample (0.0 – 100.0), `None` when the tick
    /// produced no new data (first poll, counter reset, read failure).
    pub cpu_latest: Option<f64>,
    /// Rolling window of recent utilization samples, oldest first.
    pub cpu_window: Vec<f64>,
    /// Mean of the rolling window; 0.0 while the window is empty.
    pub cpu_average: f64,
    /// Free physical memory in bytes.
    pub mem_free: u64,
    /// Total physical memory in bytes.
    pub mem_total: u64,
    /// Root filesystem: total bytes.
    pub disk_total: u64,
    /// Root filesystem: free bytes.
    pub disk_free: u64,
    /// Root filesystem: used bytes (`total - free`).
    pub disk_used: u64,
    /// Seconds since boot.
    pub uptime_secs: u64,
    /// Filtered and sorted process list, truncated to the configured maximum.
    pub processes: Vec<ProcessInfo>,
}

impl SystemSnapshot {
    /// Memory usage as a fraction in `[0, 1]`.
    #[must_use]
    pub fn mem_fraction(&self) -> f64 {
        if self.mem_total == 0 {
            return 0.0;
        }
        (self.mem_total - self.mem_free.min(self.mem_total)) as f64 / self.mem_total as f64
    }

    /// Disk usage as a fraction in `[0, 1]`.
    #[must_use]
    pub fn disk_fraction(&self) -> f64 {
        if self.disk_total == 0 {
            return 0.0;
        }
        self.disk_used as f64 / self.disk_total as f64
    }
}

/// One entry of the active-process list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub name: String,
    pub pid: u32,
}

/// Static facts about the host, read once at startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostFacts {
    /// Number of logical CPU cores.
    pub cores: usize,
    /// CPU architecture, e.g. `"x86_64"`.
    pub arch: String,
    /// OS name and version string.
    pub os: String,
    /// Host name / machine model.
    pub model: String,
    /// Formatted boot timestamp, e.g. `"2026-08-30 07:12:44"`.
    pub boot_time: String,
}
