//! Category descriptors and index section rendering.
//!
//! The five documentation categories share one rendering path driven by a
//! static descriptor table: directory name, section label, and whether the
//! section nests extracted headings under each file link.

use std::path::Path;

use super::headings::extract_headings;
use super::listing::markdown_files;

/// One indexed documentation category.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Subdirectory under the meta directory.
    pub dir: &'static str,
    /// Section heading in the generated index.
    pub label: &'static str,
    /// Nest extracted headings (levels 1-3) under each file link.
    pub headings: bool,
}

/// The categories, in the order their sections appear in target documents.
pub const CATEGORIES: &[Category] = &[
    Category {
        dir: "specs",
        label: "Specs Index",
        headings: true,
    },
    Category {
        dir: "stages",
        label: "Stages Index",
        headings: true,
    },
    Category {
        dir: "decisions",
        label: "Decisions Index",
        headings: false,
    },
    Category {
        dir: "troubleshooting",
        label: "Troubleshooting Index",
        headings: false,
    },
    Category {
        dir: "explainers",
        label: "Explainers Index",
        headings: false,
    },
];

impl Category {
    /// Render this category's index section.
    ///
    /// Links are written relative to the workspace root, where the target
    /// documents live. Returns an empty string when the directory holds no
    /// eligible files, which suppresses the section entirely.
    pub fn render(&self, root: &Path, meta_dir: &str) -> String {
        let dir_path = root.join(meta_dir).join(self.dir);
        let files = markdown_files(&dir_path);
        if files.is_empty() {
            return String::new();
        }

        let mut section = format!("## {}\n\n", self.label);
        for file in files {
            let name = file.strip_suffix(".md").unwrap_or(&file);
            section.push_str(&format!("- [{name}](./{meta_dir}/{}/{file})\n", self.dir));

            if self.headings {
                for h in extract_headings(&dir_path.join(&file), 3) {
                    let indent = match h.level {
                        1 => "  ",
                        2 => "    ",
                        _ => "      ",
                    };
                    section.push_str(&format!("{indent}- {}\n", h.text));
                }
            }
        }
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn category(dir: &'static str) -> &'static Category {
        CATEGORIES.iter().find(|c| c.dir == dir).unwrap()
    }

    fn write_meta_file(root: &Path, dir: &str, name: &str, content: &str) {
        let dir_path = root.join("_meta").join(dir);
        std::fs::create_dir_all(&dir_path).unwrap();
        std::fs::write(dir_path.join(name), content).unwrap();
    }

    #[test]
    fn test_empty_category_renders_nothing() {
        let root = TempDir::new().unwrap();
        let section = category("specs").render(root.path(), "_meta");
        assert_eq!(section, "");
    }

    #[test]
    fn test_specs_section_nests_headings() {
        let root = TempDir::new().unwrap();
        write_meta_file(root.path(), "specs", "b.md", "no headings here\n");
        write_meta_file(root.path(), "specs", "a.md", "# Intro\n\n## Scope\n");

        let section = category("specs").render(root.path(), "_meta");
        assert_eq!(
            section,
            "## Specs Index\n\n\
             - [a](./_meta/specs/a.md)\n\
             \x20 - Intro\n\
             \x20   - Scope\n\
             - [b](./_meta/specs/b.md)\n"
        );
    }

    #[test]
    fn test_flat_category_lists_names_only() {
        let root = TempDir::new().unwrap();
        write_meta_file(
            root.path(),
            "decisions",
            "001-rust.md",
            "# Why Rust\n\n## Context\n",
        );

        let section = category("decisions").render(root.path(), "_meta");
        assert_eq!(
            section,
            "## Decisions Index\n\n- [001-rust](./_meta/decisions/001-rust.md)\n"
        );
    }

    #[test]
    fn test_template_files_are_skipped() {
        let root = TempDir::new().unwrap();
        write_meta_file(root.path(), "stages", "__template__.md", "# T\n");
        write_meta_file(root.path(), "stages", "01-setup.md", "# Setup\n");

        let section = category("stages").render(root.path(), "_meta");
        assert!(section.contains("01-setup"));
        assert!(!section.contains("__template__"));
    }

    #[test]
    fn test_heading_indent_per_level() {
        let root = TempDir::new().unwrap();
        write_meta_file(root.path(), "specs", "s.md", "# One\n## Two\n### Three\n");

        let section = category("specs").render(root.path(), "_meta");
        assert!(section.contains("\n  - One\n"));
        assert!(section.contains("\n    - Two\n"));
        assert!(section.contains("\n      - Three\n"));
    }
}
