use sysinfo::System;
use sysmon_config::ProcessSort;
use sysmon_core::ProcessInfo;

/// Filter, ordering, and size limit applied to the published process list.
#[derive(Debug, Clone)]
pub struct ProcessView {
    pub sort: ProcessSort,
    /// Case-insensitive substring match on the name; empty = keep everything.
    pub filter: String,
    pub max: usize,
}

impl ProcessView {
    pub fn new(sort: ProcessSort, filter: impl Into<String>, max: usize) -> Self {
        Self {
            sort,
            filter: filter.into(),
            max,
        }
    }
}

/// Collect the current process list from sysinfo and shape it per `view`.
pub fn collect(sys: &System, view: &ProcessView) -> Vec<ProcessInfo> {
    let all = sys
        .processes()
        .values()
        .map(|p| ProcessInfo {
            name: p.name().to_string_lossy().into_owned(),
            pid: p.pid().as_u32(),
        })
        .collect();
    shape(all, view)
}

/// Apply filter, sort, and truncation. Pure — split out from [`collect`] so
/// it is testable without a live host.
pub fn shape(processes: Vec<ProcessInfo>, view: &ProcessView) -> Vec<ProcessInfo> {
    let needle = view.filter.to_lowercase();
    let mut shaped: Vec<ProcessInfo> = processes
        .into_iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .collect();

    match view.sort {
        ProcessSort::Name => {
            shaped.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        ProcessSort::Pid => shaped.sort_by_key(|p| p.pid),
    }

    shaped.truncate(view.max);
    shaped
}
