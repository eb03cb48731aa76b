use crate::state::SystemSnapshot;

/// All messages (events) that flow through the application event loop.
///
/// Sources:
/// - Monitor task         → `Snapshot`
/// - Config watcher task  → `ConfigReloaded`
/// - Signal handler       → `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    /// Fresh resource snapshot from the background monitor task.
    Snapshot(SystemSnapshot),
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
    /// Graceful shutdown requested (ctrl-c).
    Shutdown,
}
