/*!
 * Utility functions and default lists for mdtree
 */

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use once_cell::sync::Lazy;

/// Files whose content is inlined, matched by extension or exact file name
pub static DEFAULT_INLINE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".txt",
        ".html",
        ".py",
        ".yml",
        ".yaml",
        "Dockerfile",
        "nginx.conf",
        ".js",
        ".css",
        ".json",
        ".ts",
        ".jsx",
        ".tsx",
        ".java",
        ".c",
        ".cpp",
        ".md",
        ".xml",
        ".ini",
    ]
});

/// Files listed by name only, matched by extension or exact file name
pub static DEFAULT_MEDIA: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        ".mp3", ".wav", ".mp4", ".jpg", ".jpeg", ".png", ".svg", ".gif", ".bmp", ".tiff", ".ico",
        ".mkv", ".flv", ".avi", ".mov", ".webm",
    ]
});

/// Folder names under the project root that are never rendered
pub static DEFAULT_EXCLUDED: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Version Control
        ".git",
        // Python
        "venv",
        "__pycache__",
        ".env",
        // Build & Dist
        "build",
        "dist",
        // IDEs & Editors
        ".idea",
        ".vscode",
        // Platform special folders
        "My Music",
        "My Pictures",
        "My Videos",
    ]
});

/// File names rendered with the generic configuration language tag
pub const CONF_LANGUAGE_NAMES: &[&str] = &["Dockerfile", "nginx.conf"];

/// Title line that opens every generated document
pub const DOCUMENT_TITLE: &str = "# Project Tree Structure";

/// Heading under which per-entry errors are listed
pub const ERRORS_HEADING: &str = "### Errors Encountered:";

/// Convert a static list into owned strings for a `Config`
pub fn to_owned_list(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Strip every character that is not safe in an output file name
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || " -_.%()".contains(*c))
        .collect()
}

/// Build `{sanitized-root-name}_{YYYYMMDD-HHMMSS}.md` for a project root
pub fn output_file_name(root: &Path, timestamp: DateTime<Local>) -> String {
    let base_name = root
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    format!(
        "{}_{}.md",
        sanitize_file_name(&base_name),
        timestamp.format("%Y%m%d-%H%M%S")
    )
}

/// Default location for generated documents
///
/// The user's Documents folder when it exists, otherwise the home directory,
/// otherwise the current directory.
pub fn default_output_dir() -> PathBuf {
    dirs::document_dir()
        .filter(|dir| dir.is_dir())
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
