/*!
 * Markdown document writer for mdtree
 */

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::Config;
use crate::error::{MdTreeError, Result};
use crate::types::RenderOutput;
use crate::utils::{output_file_name, DOCUMENT_TITLE, ERRORS_HEADING};

/// Writer for the generated document
pub struct MarkdownWriter {
    /// Writer configuration
    config: Config,
}

impl MarkdownWriter {
    /// Create a new markdown writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Path of the document for the configured root, stamped with the current time
    pub fn output_path(&self) -> PathBuf {
        let root = self
            .config
            .target_dir
            .canonicalize()
            .unwrap_or_else(|_| self.config.target_dir.clone());
        self.config
            .output_dir
            .join(output_file_name(&root, Local::now()))
    }

    /// Title, blank line, body and, if configured, the errors section
    pub fn compose(&self, output: &RenderOutput) -> String {
        let mut document = format!("{}\n\n{}", DOCUMENT_TITLE, output.body);
        if self.config.append_errors && !output.errors.is_empty() {
            document.push_str("\n\n");
            document.push_str(&errors_section(&output.error_messages()));
        }
        document
    }

    /// Write the document and return the path it was written to
    pub fn write(&self, output: &RenderOutput) -> Result<(PathBuf, String)> {
        let path = self.output_path();
        let document = self.compose(output);
        write_document(&path, &document)?;
        log::info!("Wrote {} bytes to {}", document.len(), path.display());
        Ok((path, document))
    }
}

/// The "Errors Encountered" section, one bullet per error
pub fn errors_section(errors: &[String]) -> String {
    let mut section = format!("{}\n", ERRORS_HEADING);
    for error in errors {
        section.push_str(&format!("- {}\n", error));
    }
    section
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    let write_err = |source| MdTreeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(document.as_bytes()).map_err(write_err)?;
    writer.flush().map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EntryError;
    use crate::types::RenderStats;
    use std::fs;
    use tempfile::tempdir;

    fn output_with_error() -> RenderOutput {
        RenderOutput {
            body: "- a.py".to_string(),
            errors: vec![EntryError::Undecodable {
                path: PathBuf::from("/p/a.py"),
            }],
            stats: RenderStats::default(),
        }
    }

    #[test]
    fn test_compose_without_errors_section() {
        let writer = MarkdownWriter::new(Config::new("."));
        assert_eq!(
            writer.compose(&output_with_error()),
            "# Project Tree Structure\n\n- a.py"
        );
    }

    #[test]
    fn test_compose_with_errors_section() {
        let mut config = Config::new(".");
        config.append_errors = true;
        let writer = MarkdownWriter::new(config);
        assert_eq!(
            writer.compose(&output_with_error()),
            "# Project Tree Structure\n\n- a.py\n\n### Errors Encountered:\n- Binary or undecodable file skipped: /p/a.py\n"
        );
    }

    #[test]
    fn test_write_names_file_after_root() {
        let parent = tempdir().unwrap();
        let root = parent.path().join("demo app");
        fs::create_dir(&root).unwrap();
        let out = tempdir().unwrap();

        let mut config = Config::new(&root);
        config.output_dir = out.path().to_path_buf();
        let (path, document) = MarkdownWriter::new(config).write(&output_with_error()).unwrap();

        let file_name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(file_name.starts_with("demo app_"));
        assert!(file_name.ends_with(".md"));
        assert_eq!(file_name.len(), "demo app_".len() + "YYYYMMDD-HHMMSS".len() + 3);
        assert_eq!(fs::read_to_string(&path).unwrap(), document);
    }

    #[test]
    fn test_write_failure_is_fatal() {
        let root = tempdir().unwrap();
        let mut config = Config::new(root.path());
        config.output_dir = root.path().join("does-not-exist");

        let err = MarkdownWriter::new(config)
            .write(&output_with_error())
            .unwrap_err();
        assert!(matches!(err, MdTreeError::Write { .. }));
    }
}
