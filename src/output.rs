use sysmon_config::OutputFormat;
use sysmon_core::SystemSnapshot;
use sysmon_metrics::units::{bytes_to_whole_gb, disk_gb, format_bytes, format_uptime};
use tracing::{debug, info, warn};

/// Emit one snapshot to the configured sink: a human-readable log line, or
/// a JSON object on stdout for downstream consumers.
pub fn emit(snapshot: &SystemSnapshot, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            info!("{}", text_line(snapshot));
            debug!(
                "mem {} free of {}",
                format_bytes(snapshot.mem_free),
                format_bytes(snapshot.mem_total)
            );
            if !snapshot.processes.is_empty() {
                let listing: Vec<String> = snapshot
                    .processes
                    .iter()
                    .map(|p| format!("{} ({})", p.name, p.pid))
                    .collect();
                debug!("processes: {}", listing.join(", "));
            }
        }
        OutputFormat::Json => match serde_json::to_string(snapshot) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("cannot encode snapshot: {e}"),
        },
    }
}

/// The one-line text summary for a snapshot.
fn text_line(snapshot: &SystemSnapshot) -> String {
    let cpu = match snapshot.cpu_latest {
        Some(usage) => format!("{usage:.0}%"),
        None => "--".to_string(),
    };
    let disk = disk_gb(snapshot.disk_total, snapshot.disk_free);

    format!(
        "cpu {cpu} (avg {:.0}%) | mem free {} GB of {} GB | disk used {:.2} GiB of {:.2} GiB | up {}",
        snapshot.cpu_average,
        bytes_to_whole_gb(snapshot.mem_free),
        bytes_to_whole_gb(snapshot.mem_total),
        disk.used,
        disk.total,
        format_uptime(snapshot.uptime_secs),
    )
}
