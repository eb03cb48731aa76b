use chrono::{Local, TimeZone};
use sysinfo::System;
use sysmon_core::HostFacts;

/// Gather static host facts. Read once at startup; none of these change
/// while the process runs.
pub fn read_host_facts() -> HostFacts {
    let sys = System::new_all();
    HostFacts {
        cores: sys.cpus().len(),
        arch: System::cpu_arch(),
        os: System::long_os_version().unwrap_or_else(|| "unknown".to_string()),
        model: System::host_name().unwrap_or_else(|| "unknown".to_string()),
        boot_time: format_boot_time(System::boot_time()),
    }
}

fn format_boot_time(epoch_secs: u64) -> String {
    Local
        .timestamp_opt(epoch_secs as i64, 0)
        .single()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
