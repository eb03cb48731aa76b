//! sysmon — a headless host-metrics monitor.
//!
//! Polls CPU/memory/disk/process counters on a timer, keeps a rolling window
//! of CPU utilization, and emits one snapshot per tick as a log line or a
//! JSON object.
//!
//! Run with:  `RUST_LOG=info sysmon`

mod output;

use std::path::Path;

use anyhow::Result;
use sysmon_config::MonitorConfig;
use sysmon_core::Message;
use sysmon_host::{MonitorCommand, ProcessView};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("sysmon v{} starting", env!("CARGO_PKG_VERSION"));

    let facts = sysmon_host::read_host_facts();
    tracing::info!(
        "host: {} on {} ({} cores, {}), booted {}",
        facts.os,
        facts.model,
        facts.cores,
        facts.arch,
        facts.boot_time
    );

    let config_path = sysmon_config::default_path();
    let mut config = load_or_default(&config_path);

    let (commands, mut snapshots) = sysmon_host::spawn_monitor(&config);
    let mut reloads = sysmon_config::watcher::spawn(&config_path);

    loop {
        let message = tokio::select! {
            Some(snapshot) = snapshots.recv() => Message::Snapshot(snapshot),
            Some(()) = reloads.recv() => Message::ConfigReloaded,
            _ = tokio::signal::ctrl_c() => Message::Shutdown,
            else => Message::Shutdown,
        };

        match message {
            Message::Snapshot(snapshot) => output::emit(&snapshot, config.output),
            Message::ConfigReloaded => {
                let fresh = load_or_default(&config_path);
                if fresh != config {
                    apply_config(&commands, &config, &fresh).await;
                    config = fresh;
                    tracing::info!("config reloaded");
                }
            }
            Message::Shutdown => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Load the config file; a broken file warns and keeps defaults rather than
/// stopping the monitor.
fn load_or_default(path: &Path) -> MonitorConfig {
    match sysmon_config::load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}; using defaults");
            MonitorConfig::default()
        }
    }
}

/// Push the settings that changed into the monitor task.
async fn apply_config(
    commands: &mpsc::Sender<MonitorCommand>,
    old: &MonitorConfig,
    new: &MonitorConfig,
) {
    if new.interval != old.interval {
        let _ = commands
            .send(MonitorCommand::SetInterval(new.interval))
            .await;
    }
    if new.window_capacity != old.window_capacity {
        let _ = commands
            .send(MonitorCommand::SetWindowCapacity(new.window_capacity))
            .await;
    }
    if new.process_sort != old.process_sort
        || new.process_filter != old.process_filter
        || new.max_processes != old.max_processes
    {
        let view = ProcessView::new(
            new.process_sort,
            new.process_filter.clone(),
            new.max_processes,
        );
        let _ = commands.send(MonitorCommand::SetProcessView(view)).await;
    }
}
