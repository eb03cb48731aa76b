//! Pure conversion helpers turning raw host counters into display units.

/// Bytes → whole gigabytes for the memory summary, rounding up.
///
/// Mirrors the display rule for physical memory: the byte count is first
/// scaled to mebibytes, then divided by 1024 and ceiled, so any partial
/// gigabyte counts as a full one (2 GiB → 2, 2 GiB + 1 byte → 3).
pub fn bytes_to_whole_gb(bytes: u64) -> u64 {
    const MIB: f64 = (1u64 << 20) as f64;
    let mib = bytes as f64 / MIB;
    (mib / 1024.0).ceil() as u64
}

/// Volume capacity figures in fractional gibibytes (1024-based).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiskGb {
    pub total: f64,
    pub free: f64,
    pub used: f64,
}

/// Convert byte-granularity volume capacity to GiB, with `used = total - free`.
/// `free` is capped at `total` so `used` never goes negative on inconsistent
/// readings.
pub fn disk_gb(total_bytes: u64, free_bytes: u64) -> DiskGb {
    const GIB: f64 = (1u64 << 30) as f64;
    let free_bytes = free_bytes.min(total_bytes);
    let total = total_bytes as f64 / GIB;
    let free = free_bytes as f64 / GIB;
    DiskGb {
        total,
        free,
        used: total - free,
    }
}

/// Uptime split into whole hours and leftover minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Uptime {
    pub hours: u64,
    pub minutes: u64,
}

pub fn split_uptime(secs: u64) -> Uptime {
    Uptime {
        hours: secs / 3600,
        minutes: (secs % 3600) / 60,
    }
}

/// Uptime as a compact `"3h 27m"` string.
pub fn format_uptime(secs: u64) -> String {
    let up = split_uptime(secs);
    format!("{}h {}m", up.hours, up.minutes)
}

/// Format a byte count as a human-readable string (e.g. `"7.3 GiB"`).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [(u64, &str); 3] = [(1 << 30, "GiB"), (1 << 20, "MiB"), (1 << 10, "KiB")];

    for (scale, suffix) in UNITS {
        if bytes >= scale {
            return format!("{:.1} {suffix}", bytes as f64 / scale as f64);
        }
    }
    format!("{bytes} B")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_gib_displays_as_two_gb() {
        assert_eq!(bytes_to_whole_gb(2_147_483_648), 2);
    }

    #[test]
    fn partial_gigabyte_rounds_up() {
        assert_eq!(bytes_to_whole_gb(2_147_483_649), 3);
        assert_eq!(bytes_to_whole_gb(1), 1);
    }

    #[test]
    fn zero_bytes_is_zero_gb() {
        assert_eq!(bytes_to_whole_gb(0), 0);
    }

    #[test]
    fn disk_used_is_total_minus_free() {
        let disk = disk_gb(500 * (1 << 30), 120 * (1 << 30));
        assert_eq!(disk.total, 500.0);
        assert_eq!(disk.free, 120.0);
        assert_eq!(disk.used, 380.0);
    }

    #[test]
    fn disk_free_capped_at_total() {
        let disk = disk_gb(1 << 30, 2 << 30);
        assert_eq!(disk.used, 0.0);
        assert_eq!(disk.free, 1.0);
    }

    #[test]
    fn uptime_split() {
        assert_eq!(
            split_uptime(3661),
            Uptime {
                hours: 1,
                minutes: 1
            }
        );
        assert_eq!(format_uptime(7320), "2h 2m");
        assert_eq!(format_uptime(59), "0h 0m");
    }

    #[test]
    fn format_bytes_gib() {
        assert_eq!(format_bytes(8 * 1024 * 1024 * 1024), "8.0 GiB");
    }

    #[test]
    fn format_bytes_mib() {
        assert_eq!(format_bytes(512 * 1024 * 1024), "512.0 MiB");
    }

    #[test]
    fn format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }
}
