/*!
 * Core types and data structures for the mdtree application
 */

use std::fmt;
use std::path::PathBuf;

use crate::error::EntryError;

/// Indentation unit for one level of depth
pub const INDENT: &str = "    ";

/// One rendered filesystem entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedEntry {
    /// Directory heading, `- **name/**`
    Directory { name: String, depth: usize },
    /// Plain file reference
    File { name: String, depth: usize },
    /// Media file, listed by name and never inlined
    Media { name: String, depth: usize },
    /// File reference followed by a fenced block with its content
    Code {
        name: String,
        depth: usize,
        /// Fence language tag
        language: String,
        /// Path relative to the project root
        path: PathBuf,
        content: String,
    },
}

impl RenderedEntry {
    /// Depth below the project root
    pub fn depth(&self) -> usize {
        match self {
            Self::Directory { depth, .. }
            | Self::File { depth, .. }
            | Self::Media { depth, .. }
            | Self::Code { depth, .. } => *depth,
        }
    }
}

impl fmt::Display for RenderedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = INDENT.repeat(self.depth());
        match self {
            Self::Directory { name, .. } => write!(f, "{}- **{}/**", indent, name),
            Self::File { name, .. } | Self::Media { name, .. } => {
                write!(f, "{}- {}", indent, name)
            }
            Self::Code {
                name,
                language,
                path,
                content,
                ..
            } => {
                writeln!(f, "{}- {}", indent, name)?;
                writeln!(f, "{}{}```{}", indent, INDENT, language)?;
                writeln!(f, "{}{}/* {} */", indent, INDENT, path.display())?;
                writeln!(f, "{}", content)?;
                write!(f, "{}{}```", indent, INDENT)
            }
        }
    }
}

/// Counters collected during a traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Directories rendered
    pub directories: usize,
    /// Files rendered, including media and inlined files
    pub files: usize,
    /// Media files rendered by name only
    pub media_files: usize,
    /// Files whose content was inlined
    pub inlined_files: usize,
}

impl RenderStats {
    /// Count one rendered entry
    pub fn record(&mut self, entry: &RenderedEntry) {
        match entry {
            RenderedEntry::Directory { .. } => self.directories += 1,
            RenderedEntry::File { .. } => self.files += 1,
            RenderedEntry::Media { .. } => {
                self.files += 1;
                self.media_files += 1;
            }
            RenderedEntry::Code { .. } => {
                self.files += 1;
                self.inlined_files += 1;
            }
        }
    }
}

/// Entries and errors produced by walking one directory and its subtree
#[derive(Debug, Default)]
pub struct Traversal {
    /// Rendered entries in pre-order
    pub entries: Vec<RenderedEntry>,
    /// Errors in the order they were encountered
    pub errors: Vec<EntryError>,
}

impl Traversal {
    /// Append a child traversal after the entries already collected
    pub fn append(&mut self, mut other: Traversal) {
        self.entries.append(&mut other.entries);
        self.errors.append(&mut other.errors);
    }
}

/// Result of a complete render run
#[derive(Debug)]
pub struct RenderOutput {
    /// Markdown body: every entry joined by newlines, without a title
    pub body: String,
    /// Recoverable errors in the order they were encountered
    pub errors: Vec<EntryError>,
    /// Entry counters
    pub stats: RenderStats,
}

impl RenderOutput {
    /// Build the output from a finished traversal
    pub fn from_traversal(traversal: Traversal) -> Self {
        let mut stats = RenderStats::default();
        let lines: Vec<String> = traversal
            .entries
            .iter()
            .map(|entry| {
                stats.record(entry);
                entry.to_string()
            })
            .collect();

        Self {
            body: lines.join("\n"),
            errors: traversal.errors,
            stats,
        }
    }

    /// Human-readable error strings
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_and_file_lines() {
        let dir = RenderedEntry::Directory {
            name: "src".to_string(),
            depth: 1,
        };
        assert_eq!(dir.to_string(), "    - **src/**");

        let media = RenderedEntry::Media {
            name: "logo.png".to_string(),
            depth: 0,
        };
        assert_eq!(media.to_string(), "- logo.png");
    }

    #[test]
    fn test_code_block_layout() {
        let code = RenderedEntry::Code {
            name: "main.py".to_string(),
            depth: 1,
            language: "py".to_string(),
            path: PathBuf::from("app/main.py"),
            content: "print('hi')".to_string(),
        };
        assert_eq!(
            code.to_string(),
            "    - main.py\n        ```py\n        /* app/main.py */\nprint('hi')\n        ```"
        );
    }

    #[test]
    fn test_output_counts_entries() {
        let traversal = Traversal {
            entries: vec![
                RenderedEntry::Directory {
                    name: "sub".to_string(),
                    depth: 0,
                },
                RenderedEntry::Media {
                    name: "a.png".to_string(),
                    depth: 1,
                },
                RenderedEntry::File {
                    name: "LICENSE".to_string(),
                    depth: 1,
                },
            ],
            errors: vec![],
        };
        let output = RenderOutput::from_traversal(traversal);
        assert_eq!(output.body, "- **sub/**\n    - a.png\n    - LICENSE");
        assert_eq!(
            output.stats,
            RenderStats {
                directories: 1,
                files: 2,
                media_files: 1,
                inlined_files: 0,
            }
        );
    }
}
