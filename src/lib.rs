//! metadex keeps table-of-contents index sections in documentation
//! entry-point files in sync with the markdown sources they index.
//!
//! Five category directories under a meta directory (specs, stages,
//! decisions, troubleshooting, explainers) are scanned for markdown files;
//! each target document's region below its last `---` separator line is
//! rewritten with the generated index sections. Watch mode re-runs the
//! pass whenever a category directory changes.

pub mod cli;
pub mod config;
pub mod index;
pub mod logging;
pub mod watcher;

pub use config::{LoggingConfig, Settings};
pub use index::{
    CATEGORIES, Category, Heading, RunSummary, UpdateError, extract_headings, markdown_files,
    update_all, update_target,
};
pub use watcher::{IndexWatcher, WatchError};
