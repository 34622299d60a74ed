//! Target document rewriting.
//!
//! Each target document keeps its hand-written content above the last
//! separator line; everything after it is regenerated on every pass.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Settings;

use super::category::CATEGORIES;

/// A separator line consists solely of three dashes.
const SEPARATOR: &str = "---";

/// Errors from rewriting a single target document.
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("target does not exist: {path}")]
    Missing { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Byte offset just past the last separator line, including its newline.
///
/// A final `---` without a trailing newline also counts.
fn end_of_last_separator(content: &str) -> Option<usize> {
    let mut end = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        if line.strip_suffix('\n').unwrap_or(line) == SEPARATOR {
            end = Some(offset + line.len());
        }
        offset += line.len();
    }

    end
}

/// Rewrite the generated index region of one target document.
///
/// Content above the last separator is preserved untouched. With no
/// separator, the whole file is preserved and the index is appended. The
/// result carries exactly one trailing newline. The write is a direct
/// overwrite, not an atomic rename.
pub fn update_target(path: &Path, root: &Path, meta_dir: &str) -> Result<(), UpdateError> {
    if !path.exists() {
        return Err(UpdateError::Missing {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| UpdateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let kept = match end_of_last_separator(&content) {
        Some(end) => &content[..end],
        None => content.as_str(),
    };

    let mut updated = String::with_capacity(kept.len() + 1024);
    updated.push_str(kept);
    updated.push('\n');

    for category in CATEGORIES {
        let section = category.render(root, meta_dir);
        if !section.is_empty() {
            updated.push_str(&section);
            updated.push('\n');
        }
    }

    let final_content = format!("{}\n", updated.trim_end());
    std::fs::write(path, final_content).map_err(|source| UpdateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Outcome of one full update pass over all configured targets.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Targets whose index region was rewritten.
    pub updated: Vec<String>,
    /// Targets skipped because they are missing or failed to read/write.
    pub skipped: Vec<String>,
}

impl RunSummary {
    /// Print the timestamped per-run summary.
    pub fn log(&self) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        if !self.updated.is_empty() {
            println!("[{timestamp}] updated: {}", self.updated.join(", "));
        }
        if !self.skipped.is_empty() {
            println!("[{timestamp}] skipped (missing): {}", self.skipped.join(", "));
        }
    }
}

/// Run the updater over every configured target document.
///
/// Failures are recorded as skipped, never propagated; a partial index
/// beats no index.
pub fn update_all(settings: &Settings) -> RunSummary {
    let root = settings.root();
    let mut summary = RunSummary::default();

    for target in &settings.targets {
        let path = root.join(target);
        match update_target(&path, &root, &settings.meta_dir) {
            Ok(()) => summary.updated.push(target.clone()),
            Err(e) => {
                tracing::debug!(target: "update", "skipping {target}: {e}");
                summary.skipped.push(target.clone());
            }
        }
    }

    summary
}
