//! Category directory listing.

use std::path::Path;

/// Filename prefix marking template files excluded from indexing.
pub const TEMPLATE_PREFIX: &str = "__";

/// List eligible markdown files in a category directory, sorted by name.
///
/// Eligible means the name ends in `.md` and does not carry the template
/// prefix. A missing or unreadable directory yields an empty list.
pub fn markdown_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".md") && !name.starts_with(TEMPLATE_PREFIX))
        .collect();

    files.sort();
    files
}
