//! Filesystem watcher that rebuilds target indexes on category changes.
//!
//! A single `notify` watcher feeds events into a bounded channel drained by
//! one consumer loop, so every rebuild runs to completion before the next
//! event is handled and rebuilds never overlap. There is no debouncing:
//! each qualifying event triggers an independent full update pass.

mod error;

pub use error::WatchError;

use std::path::{Path, PathBuf};

use crossbeam_channel::{Receiver, bounded};
use notify::{Event, EventKind, RecursiveMode, Watcher};

use crate::config::Settings;
use crate::index::{CATEGORIES, update_all};

/// Watches the category directories and re-runs the full update pass.
pub struct IndexWatcher {
    settings: Settings,
    /// Channel receiver for file events.
    event_rx: Receiver<notify::Result<Event>>,
    /// The actual file watcher (kept alive for the life of the loop).
    watcher: notify::RecommendedWatcher,
    /// Canonical paths of the categories that embed heading content;
    /// only these rebuild on pure content changes.
    heading_dirs: Vec<PathBuf>,
}

/// Event classification: the log word for a qualifying event, or None.
///
/// Adds and removals anywhere in a watched directory qualify; modifications
/// qualify only inside a heading-bearing category, since content changes
/// elsewhere cannot alter the generated index.
fn classify(kind: &EventKind, in_heading_dir: bool) -> Option<&'static str> {
    match kind {
        EventKind::Create(_) => Some("added"),
        EventKind::Remove(_) => Some("removed"),
        EventKind::Modify(_) if in_heading_dir => Some("changed"),
        _ => None,
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}

impl IndexWatcher {
    /// Create a new watcher for the configured workspace.
    pub fn new(settings: Settings) -> Result<Self, WatchError> {
        // The notify callback only enqueues; all handling happens on the
        // single consumer loop in watch().
        let (tx, rx) = bounded(100);
        let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;

        Ok(Self {
            settings,
            event_rx: rx,
            watcher,
            heading_dirs: Vec::new(),
        })
    }

    /// Start watching the category directories. Runs until terminated.
    pub fn watch(mut self) -> Result<(), WatchError> {
        let meta = self.settings.meta_path();

        for category in CATEGORIES {
            let dir = meta.join(category.dir);
            match self.watcher.watch(&dir, RecursiveMode::NonRecursive) {
                Ok(()) => {
                    tracing::debug!(target: "watcher", "watching {}", dir.display());
                    if category.headings {
                        if let Ok(canonical) = dir.canonicalize() {
                            self.heading_dirs.push(canonical);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(target: "watcher", "cannot watch {}: {e}", dir.display());
                }
            }
        }

        println!("Watch mode active. Press Ctrl+C to stop.");

        loop {
            match self.event_rx.recv() {
                Ok(Ok(event)) => self.handle_event(&event),
                Ok(Err(e)) => tracing::error!(target: "watcher", "file watch error: {e}"),
                Err(_) => return Err(WatchError::ChannelClosed),
            }
        }
    }

    /// Handle one file event, rebuilding once per qualifying path.
    fn handle_event(&self, event: &Event) {
        for path in &event.paths {
            if is_hidden(path) {
                continue;
            }

            if let Some(action) = classify(&event.kind, self.in_heading_dir(path)) {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                println!("File {action}: {name}");
                update_all(&self.settings).log();
            }
        }
    }

    fn in_heading_dir(&self, path: &Path) -> bool {
        let Some(parent) = path.parent() else {
            return false;
        };
        // Event paths may already be gone; canonicalize the parent, which
        // survives file deletion.
        let parent = parent
            .canonicalize()
            .unwrap_or_else(|_| parent.to_path_buf());
        self.heading_dirs.contains(&parent)
    }
}
