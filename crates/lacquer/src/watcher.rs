//! Source watching for rebuild-on-change.
//!
//! Watch mode needs exactly one signal: a module somewhere under the UI or
//! site roots changed, so the site should be rebuilt. Notify events are
//! filtered down to lacquer's module files and coalesced per burst — an
//! editor saving several files triggers one rebuild, not one per file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tokio::time::timeout;

/// How long a burst of events may go quiet before it counts as over.
const QUIET_PERIOD: Duration = Duration::from_millis(200);

/// Watches source roots and yields one changed path per burst.
pub struct SourceWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<PathBuf>,
}

impl SourceWatcher {
    /// Watch the given roots for module edits.
    pub fn new(roots: &[PathBuf]) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel(64);

        // The callback runs on notify's own thread, so a blocking send into
        // the async channel is fine.
        let mut watcher =
            notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
                let Ok(event) = res else { return };
                if !matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    return;
                }
                for path in event.paths {
                    if is_module(&path) {
                        let _ = tx.blocking_send(path);
                    }
                }
            })?;

        for root in roots {
            if root.exists() {
                watcher.watch(root, RecursiveMode::Recursive)?;
            }
        }

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Wait for the next module change, then drain the burst behind it.
    ///
    /// Returns `None` once the watcher is gone and the channel is drained.
    pub async fn next_change(&mut self) -> Option<PathBuf> {
        let first = self.rx.recv().await?;
        while let Ok(Some(_)) = timeout(QUIET_PERIOD, self.rx.recv()).await {}
        Some(first)
    }
}

/// Example, page, and manifest modules are YAML; docs modules are Markdown.
/// Everything else (editor swap files, build output) is noise.
fn is_module(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml" | "md")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn only_module_files_count() {
        assert!(is_module(Path::new("ui/buttons/index.example.yaml")));
        assert!(is_module(Path::new("ui/buttons/index.docs.md")));
        assert!(!is_module(Path::new("ui/buttons/.index.example.yaml.swp")));
        assert!(!is_module(Path::new("www/buttons/index.html")));
    }

    #[tokio::test]
    async fn reports_module_edits() {
        let temp = tempdir().unwrap();
        let mut watcher = SourceWatcher::new(&[temp.path().to_path_buf()]).unwrap();

        // Give inotify time to set up
        tokio::time::sleep(Duration::from_millis(100)).await;

        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::write(
            temp.path().join("index.example.yaml"),
            "default:\n  tag: button\n",
        )
        .unwrap();

        let change = tokio::time::timeout(Duration::from_secs(3), watcher.next_change())
            .await
            .expect("timeout waiting for module change")
            .expect("watcher channel closed");

        assert_eq!(change.extension().and_then(|e| e.to_str()), Some("yaml"));
    }
}
