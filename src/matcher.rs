/*!
 * Ignore matching: gitignore patterns plus the static excluded-folder list
 */

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::error::EntryError;

/// Name of the pattern file read from the project root
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Predicate deciding which paths are left out of the tree
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    /// Absolute project root
    base: PathBuf,
    /// Compiled `.gitignore` patterns, if the project has any
    gitignore: Option<Gitignore>,
    /// `base/name` for every excluded folder name
    excluded: Vec<PathBuf>,
}

impl IgnoreMatcher {
    /// Create a matcher for `base` from an optional pattern set and folder names
    pub fn new<S: AsRef<str>>(base: &Path, gitignore: Option<Gitignore>, excluded: &[S]) -> Self {
        Self {
            base: base.to_path_buf(),
            gitignore,
            excluded: excluded
                .iter()
                .map(|name| base.join(name.as_ref()))
                .collect(),
        }
    }

    /// Create a matcher reading `base/.gitignore`
    ///
    /// A malformed ignore file is returned as an error alongside a matcher
    /// that behaves as if no ignore file existed.
    pub fn load<S: AsRef<str>>(base: &Path, excluded: &[S]) -> (Self, Option<EntryError>) {
        match load_ignore_spec(base) {
            Ok(gitignore) => (Self::new(base, gitignore, excluded), None),
            Err(e) => {
                log::warn!("{}", e);
                (Self::new(base, None, excluded), Some(e))
            }
        }
    }

    /// Whether a pattern set was loaded
    pub fn has_patterns(&self) -> bool {
        self.gitignore.is_some()
    }

    /// Check if `path` (and anything beneath it) should be skipped
    pub fn should_ignore(&self, path: &Path, is_dir: bool) -> bool {
        self.matches_patterns(path, is_dir) || self.is_excluded(path)
    }

    /// Test against the gitignore patterns using the path relative to the base
    fn matches_patterns(&self, path: &Path, is_dir: bool) -> bool {
        let Some(gitignore) = &self.gitignore else {
            return false;
        };

        match path.strip_prefix(&self.base) {
            Ok(relative) if !relative.as_os_str().is_empty() => {
                gitignore.matched(relative, is_dir).is_ignore()
            }
            _ => false,
        }
    }

    /// Equal to or nested under an excluded folder
    fn is_excluded(&self, path: &Path) -> bool {
        self.excluded.iter().any(|folder| path.starts_with(folder))
    }
}

/// Compile `base/.gitignore`, or `None` if the project has no ignore file
pub fn load_ignore_spec(base: &Path) -> Result<Option<Gitignore>, EntryError> {
    let path = base.join(IGNORE_FILE_NAME);
    if !path.is_file() {
        return Ok(None);
    }

    let mut builder = GitignoreBuilder::new(base);
    if let Some(e) = builder.add(&path) {
        return Err(EntryError::IgnoreFile {
            path,
            message: e.to_string(),
        });
    }

    let gitignore = builder.build().map_err(|e| EntryError::IgnoreFile {
        path: path.clone(),
        message: e.to_string(),
    })?;

    log::debug!(
        "Loaded {} ignore patterns from {}",
        gitignore.num_ignores() + gitignore.num_whitelists(),
        path.display()
    );
    Ok(Some(gitignore))
}
