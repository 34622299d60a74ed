//! Markdown heading extraction.
//!
//! Flat line matching only: a heading is a line beginning with `# `, `## `
//! or `### `. Deeper levels and setext underlines are ignored, and a `#`
//! inside a fenced code block is still matched.

use std::path::Path;

/// A heading scanned from a markdown file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Level 1-3 (H1-H3).
    pub level: u8,
    /// Trimmed heading text.
    pub text: String,
}

/// Extract headings from a file, in file order, up to `max_level`.
///
/// Any read failure (missing file, permission error) yields an empty list
/// so callers can still build a partial index.
pub fn extract_headings(path: &Path, max_level: u8) -> Vec<Heading> {
    match std::fs::read_to_string(path) {
        Ok(content) => scan_headings(&content, max_level),
        Err(_) => Vec::new(),
    }
}

/// Scan content line by line for heading prefixes.
///
/// Level-1 headings are always recorded; levels 2 and 3 only when within
/// `max_level`. At most one heading per line.
pub fn scan_headings(content: &str, max_level: u8) -> Vec<Heading> {
    let mut headings = Vec::new();

    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("# ") {
            if !rest.is_empty() {
                headings.push(Heading {
                    level: 1,
                    text: rest.trim().to_string(),
                });
            }
        } else if let Some(rest) = line.strip_prefix("## ") {
            if max_level >= 2 && !rest.is_empty() {
                headings.push(Heading {
                    level: 2,
                    text: rest.trim().to_string(),
                });
            }
        } else if let Some(rest) = line.strip_prefix("### ") {
            if max_level >= 3 && !rest.is_empty() {
                headings.push(Heading {
                    level: 3,
                    text: rest.trim().to_string(),
                });
            }
        }
    }

    headings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u8, text: &str) -> Heading {
        Heading {
            level,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_first_three_levels_only() {
        let content = "# A\n## B\n### C\n#### D\n";
        let headings = scan_headings(content, 3);
        assert_eq!(
            headings,
            vec![heading(1, "A"), heading(2, "B"), heading(3, "C")]
        );
    }

    #[test]
    fn test_max_level_one_keeps_h1_only() {
        let content = "# A\n## B\n### C\n#### D\n";
        let headings = scan_headings(content, 1);
        assert_eq!(headings, vec![heading(1, "A")]);
    }

    #[test]
    fn test_max_level_two() {
        let content = "# A\n### C\n## B\n";
        let headings = scan_headings(content, 2);
        assert_eq!(headings, vec![heading(1, "A"), heading(2, "B")]);
    }

    #[test]
    fn test_text_is_trimmed() {
        let headings = scan_headings("#  spaced out  \n", 3);
        assert_eq!(headings, vec![heading(1, "spaced out")]);
    }

    #[test]
    fn test_requires_space_after_hashes() {
        let headings = scan_headings("#no space\n##neither\n", 3);
        assert!(headings.is_empty());
    }

    #[test]
    fn test_indented_hash_is_not_a_heading() {
        let headings = scan_headings("  # indented\n", 3);
        assert!(headings.is_empty());
    }

    #[test]
    fn test_code_fence_hash_still_matches() {
        // Known simplification: no fence tracking.
        let content = "```\n# inside fence\n```\n";
        let headings = scan_headings(content, 3);
        assert_eq!(headings, vec![heading(1, "inside fence")]);
    }

    #[test]
    fn test_missing_file_yields_empty() {
        let headings = extract_headings(Path::new("/nonexistent/no-such.md"), 3);
        assert!(headings.is_empty());
    }

    #[test]
    fn test_reads_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        std::fs::write(&path, "# Intro\n\nbody\n\n## Details\n").unwrap();

        let headings = extract_headings(&path, 3);
        assert_eq!(headings, vec![heading(1, "Intro"), heading(2, "Details")]);
    }
}
