pub mod facts;
pub mod processes;
pub mod ticks;

pub use facts::read_host_facts;
pub use processes::ProcessView;

use sysinfo::{Disks, System};
use sysmon_config::{IntervalPreset, MonitorConfig};
use sysmon_core::SystemSnapshot;
use sysmon_metrics::{CpuSampler, RollingWindow};
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, info};

/// Runtime reconfiguration accepted by the monitor task.
///
/// The config-reload path pushes settings through this channel instead of
/// sharing state with the task — the sampler and window stay exclusively
/// owned by the polling loop.
#[derive(Debug, Clone)]
pub enum MonitorCommand {
    /// Change the poll cadence; takes effect from the next tick.
    SetInterval(IntervalPreset),
    /// Resize the rolling CPU window; shrinking truncates oldest-first.
    SetWindowCapacity(usize),
    /// Replace the process list filter/sort/limit.
    SetProcessView(ProcessView),
}

/// Spawn the background polling task.
///
/// Once per interval the task reads host counters, feeds the CPU sampler,
/// appends to the rolling window, and forwards a [`SystemSnapshot`] through
/// the returned channel. The task stops when all snapshot receivers are
/// dropped — that is the only cancellation primitive; each tick's work is
/// synchronous and bounded.
pub fn spawn_monitor(
    config: &MonitorConfig,
) -> (mpsc::Sender<MonitorCommand>, mpsc::Receiver<SystemSnapshot>) {
    let (cmd_tx, mut cmd_rx) = mpsc::channel(8);
    let (snap_tx, snap_rx) = mpsc::channel(4);

    let mut interval = config.interval;
    let mut view = ProcessView::new(
        config.process_sort,
        config.process_filter.clone(),
        config.max_processes,
    );
    let capacity = config.window_capacity;

    tokio::spawn(async move {
        let mut sys = System::new_all();
        let mut sampler = CpuSampler::new();
        let mut window = RollingWindow::new(capacity);
        let mut ticker = time::interval(interval.duration());
        let mut commands_open = true;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    sys.refresh_all();
                    let snapshot = poll_once(&sys, &mut sampler, &mut window, &view);

                    if snap_tx.send(snapshot).await.is_err() {
                        break; // all receivers dropped
                    }
                }
                cmd = cmd_rx.recv(), if commands_open => match cmd {
                    Some(MonitorCommand::SetInterval(preset)) => {
                        if preset != interval {
                            info!("poll interval set to {}s", preset.seconds());
                            interval = preset;
                            ticker = time::interval(interval.duration());
                            // interval() fires immediately; skip the catch-up tick.
                            ticker.tick().await;
                        }
                    }
                    Some(MonitorCommand::SetWindowCapacity(capacity)) => {
                        info!("window capacity set to {}", capacity.max(1));
                        window.set_capacity(capacity);
                    }
                    Some(MonitorCommand::SetProcessView(new_view)) => {
                        view = new_view;
                    }
                    None => commands_open = false,
                },
            }
        }

        debug!("monitor task stopped");
    });

    (cmd_tx, snap_rx)
}

/// One read → sample → append cycle, producing the published snapshot.
fn poll_once(
    sys: &System,
    sampler: &mut CpuSampler,
    window: &mut RollingWindow,
    view: &ProcessView,
) -> SystemSnapshot {
    // A failed or inconsistent tick read means no new sample this interval,
    // never a crash: the loop keeps polling.
    let cpu_latest = match ticks::read_aggregate_ticks() {
        Ok(current) => sampler.sample(current),
        Err(e) => {
            debug!("CPU tick read failed: {e}");
            None
        }
    };
    if let Some(usage) = cpu_latest {
        window.push(usage);
    }

    let disks = Disks::new_with_refreshed_list();
    let (disk_total, disk_free) = disks
        .iter()
        .find(|d| d.mount_point() == std::path::Path::new("/"))
        .map(|d| (d.total_space(), d.available_space()))
        .unwrap_or((0, 0));

    SystemSnapshot {
        cpu_latest,
        cpu_window: window.values(),
        cpu_average: window.average(),
        mem_free: sys.available_memory(),
        mem_total: sys.total_memory(),
        disk_total,
        disk_free,
        disk_used: disk_total.saturating_sub(disk_free),
        uptime_secs: System::uptime(),
        processes: processes::collect(sys, view),
    }
}
