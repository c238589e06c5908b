use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, DebouncedEventKind, Debouncer};
use tracing::{debug, warn};

use crate::config::DEBOUNCE_MS;
use crate::event::AppEvent;

/// Watches the directory of the file currently on screen.
pub struct FileWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    watched_dir: Option<PathBuf>,
}

/// Start the watcher, sending FileChanged events to the given sender.
/// Nothing is watched until [`FileWatcher::follow`] is called.
pub fn start_watcher(tx: mpsc::Sender<AppEvent>) -> Result<FileWatcher> {
    let debouncer = new_debouncer(
        Duration::from_millis(DEBOUNCE_MS),
        move |res: Result<Vec<DebouncedEvent>, notify::Error>| {
            let events = match res {
                Ok(events) => events,
                Err(_) => return,
            };

            for event in events {
                if event.kind != DebouncedEventKind::Any {
                    continue;
                }
                let _ = tx.send(AppEvent::FileChanged(event.path));
            }
        },
    )?;

    Ok(FileWatcher {
        debouncer,
        watched_dir: None,
    })
}

impl FileWatcher {
    /// Point the watcher at the parent directory of `file`, dropping the
    /// previous one. `None` stops watching.
    pub fn follow(&mut self, file: Option<&Path>) {
        let dir = file
            .and_then(|f| f.parent())
            .filter(|d| !d.as_os_str().is_empty())
            .map(Path::to_path_buf);
        if dir == self.watched_dir {
            return;
        }

        if let Some(old) = self.watched_dir.take() {
            let _ = self.debouncer.watcher().unwatch(&old);
        }

        let dir = match dir {
            Some(d) if d.exists() => d,
            _ => return,
        };
        match self.debouncer.watcher().watch(&dir, RecursiveMode::NonRecursive) {
            Ok(()) => {
                debug!(dir = %dir.display(), "watching");
                self.watched_dir = Some(dir);
            }
            Err(e) => warn!(dir = %dir.display(), error = %e, "watch failed"),
        }
    }

    #[cfg(test)]
    pub fn watched_dir(&self) -> Option<&Path> {
        self.watched_dir.as_deref()
    }
}

/// Whether a path reported by the watcher names `file`. Falls back to
/// canonical paths since events may not use the same spelling.
pub fn is_same_file(changed: &Path, file: &Path) -> bool {
    if changed == file {
        return true;
    }
    match (std::fs::canonicalize(changed), std::fs::canonicalize(file)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
