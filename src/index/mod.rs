//! Index generation pipeline.
//!
//! This module provides:
//! - Heading extraction from markdown files (levels 1-3)
//! - Category directory listing with template exclusion
//! - Section rendering driven by the category descriptor table
//! - Target document rewriting below the separator line

pub mod category;
pub mod headings;
pub mod listing;
pub mod target;

pub use category::{CATEGORIES, Category};
pub use headings::{Heading, extract_headings, scan_headings};
pub use listing::{TEMPLATE_PREFIX, markdown_files};
pub use target::{RunSummary, UpdateError, update_all, update_target};
