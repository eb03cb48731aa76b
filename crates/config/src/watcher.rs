use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Spawn a filesystem watcher on the config file.
///
/// The returned receiver fires once for every detected write, letting the
/// main loop re-read the file and push the new settings into the monitor
/// task. The watcher task ends when the receiver is dropped.
pub fn spawn(path: impl AsRef<Path>) -> mpsc::Receiver<()> {
    let (tx, rx) = mpsc::channel(1);
    tokio::spawn(watch_loop(path.as_ref().to_path_buf(), tx));
    rx
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<()>) {
    use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    // notify delivers on its own thread; bridge into tokio with blocking_send.
    let (bridge_tx, mut bridge_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", path.display());
        return;
    }

    info!("Watching config file: {}", path.display());

    while let Some(event) = bridge_rx.recv().await {
        match event {
            Ok(e) => {
                if matches!(e.kind, EventKind::Modify(_) | EventKind::Create(_))
                    && tx.send(()).await.is_err()
                {
                    break; // receiver dropped
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
