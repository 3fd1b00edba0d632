/*!
 * Depth-bounded tree walking and markdown rendering
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{EntryError, MdTreeError, Result};
use crate::matcher::IgnoreMatcher;
use crate::types::{RenderOutput, RenderedEntry, Traversal};
use crate::utils::CONF_LANGUAGE_NAMES;

/// How a file is rendered, decided from its name and extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Listed by name only, never inlined
    Media,
    /// Listed and followed by its content
    Inline,
    /// Listed by name only
    Plain,
}

/// Renderer for a project tree
pub struct TreeRenderer {
    /// Renderer configuration
    config: Config,
    /// Progress bar
    progress: Arc<ProgressBar>,
}

/// State shared by every level of a single run
struct Walk<'a> {
    base: &'a Path,
    matcher: &'a IgnoreMatcher,
}

impl TreeRenderer {
    /// Create a new renderer
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Render the configured project root
    ///
    /// Fails only when the root itself cannot be resolved. Every problem
    /// below the root ends up in `RenderOutput::errors`.
    pub fn render(&self) -> Result<RenderOutput> {
        let base = fs::canonicalize(&self.config.target_dir).map_err(|e| {
            MdTreeError::InvalidArgument(format!(
                "cannot resolve project root {}: {}",
                self.config.target_dir.display(),
                e
            ))
        })?;
        crate::ensure!(
            base.is_dir(),
            InvalidArgument,
            "project root is not a directory: {}",
            base.display()
        );

        let mut traversal = Traversal::default();
        let matcher = if self.config.respect_gitignore {
            let (matcher, error) = IgnoreMatcher::load(&base, &self.config.excluded_folders);
            traversal.errors.extend(error);
            matcher
        } else {
            IgnoreMatcher::new(&base, None, &self.config.excluded_folders)
        };

        log::debug!(
            "Rendering {} (max depth {}, gitignore patterns: {})",
            base.display(),
            self.config.max_depth,
            matcher.has_patterns()
        );

        let walk = Walk {
            base: &base,
            matcher: &matcher,
        };
        traversal.append(self.walk(&walk, &base, 0));

        Ok(RenderOutput::from_traversal(traversal))
    }

    /// Walk one directory level and everything beneath it
    fn walk(&self, walk: &Walk<'_>, dir: &Path, depth: usize) -> Traversal {
        let mut traversal = Traversal::default();
        if depth > self.config.max_depth {
            return traversal;
        }

        let entries = match list_directory(dir) {
            Ok(entries) => entries,
            Err(source) => {
                traversal.errors.push(record(EntryError::Listing {
                    path: dir.to_path_buf(),
                    source,
                }));
                return traversal;
            }
        };

        for (name, path) in entries {
            let is_dir = path.is_dir();
            if walk.matcher.should_ignore(&path, is_dir) {
                log::trace!("Ignoring {}", path.display());
                continue;
            }

            self.progress.inc(1);
            self.progress.set_message(format!("Current entry: {}", name));

            if is_dir {
                traversal
                    .entries
                    .push(RenderedEntry::Directory { name, depth });
                traversal.append(self.walk(walk, &path, depth + 1));
            } else {
                self.render_file(walk, name, &path, depth, &mut traversal);
            }
        }

        traversal
    }

    /// Render a single file, inlining its content when it qualifies
    fn render_file(
        &self,
        walk: &Walk<'_>,
        name: String,
        path: &Path,
        depth: usize,
        traversal: &mut Traversal,
    ) {
        let extension = extension_of(path);
        match self.classify(&name, &extension) {
            FileClass::Media => traversal.entries.push(RenderedEntry::Media { name, depth }),
            FileClass::Plain => traversal.entries.push(RenderedEntry::File { name, depth }),
            FileClass::Inline => match read_text(path) {
                Ok(content) => {
                    let relative = path.strip_prefix(walk.base).unwrap_or(path).to_path_buf();
                    let language = language_tag(&name, &extension);
                    traversal.entries.push(RenderedEntry::Code {
                        name,
                        depth,
                        language,
                        path: relative,
                        content,
                    });
                }
                Err(error) => {
                    traversal.entries.push(RenderedEntry::File { name, depth });
                    traversal.errors.push(record(error));
                }
            },
        }
    }

    /// Decide how a file is rendered
    ///
    /// Media wins over inlining. Media names are compared case-folded,
    /// inline names exactly; extensions are always lower-cased.
    pub fn classify(&self, name: &str, extension: &str) -> FileClass {
        let dotted = format!(".{}", extension);
        let has_extension = !extension.is_empty();

        let lower_name = name.to_lowercase();
        let is_media = self
            .config
            .media_extensions
            .iter()
            .any(|m| (has_extension && *m == dotted) || *m == lower_name);
        if is_media {
            return FileClass::Media;
        }

        let is_inline = self
            .config
            .inline_extensions
            .iter()
            .any(|i| (has_extension && *i == dotted) || i == name);
        if is_inline {
            FileClass::Inline
        } else {
            FileClass::Plain
        }
    }
}

/// List a directory sorted by file name
fn list_directory(dir: &Path) -> io::Result<Vec<(String, PathBuf)>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| {
            let entry = entry.map_err(io::Error::from)?;
            let name = entry.file_name().to_string_lossy().to_string();
            Ok((name, entry.into_path()))
        })
        .collect()
}

/// Lower-cased extension without the dot, empty when there is none
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Fence language for a file
///
/// Special names such as `Dockerfile` take the `conf` tag even when they
/// have no extension to derive one from.
pub fn language_tag(name: &str, extension: &str) -> String {
    if CONF_LANGUAGE_NAMES.contains(&name) {
        "conf".to_string()
    } else {
        extension.to_string()
    }
}

/// Read a whole file as UTF-8 text; the handle is closed before returning
fn read_text(path: &Path) -> std::result::Result<String, EntryError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => EntryError::Undecodable {
            path: path.to_path_buf(),
        },
        _ => EntryError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Log a recoverable error before it is collected
fn record(error: EntryError) -> EntryError {
    log::warn!("{}", error);
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TreeRenderer {
        TreeRenderer::new(Config::new("."), Arc::new(ProgressBar::hidden()))
    }

    #[test]
    fn test_classify_by_extension() {
        let renderer = renderer();
        assert_eq!(renderer.classify("main.py", "py"), FileClass::Inline);
        assert_eq!(renderer.classify("LOGO.PNG", "png"), FileClass::Media);
        assert_eq!(renderer.classify("lib.rs", "rs"), FileClass::Plain);
        assert_eq!(renderer.classify("Makefile", ""), FileClass::Plain);
    }

    #[test]
    fn test_classify_by_exact_name() {
        let renderer = renderer();
        assert_eq!(renderer.classify("Dockerfile", ""), FileClass::Inline);
        assert_eq!(renderer.classify("dockerfile", ""), FileClass::Plain);
        assert_eq!(renderer.classify("nginx.conf", "conf"), FileClass::Inline);
        assert_eq!(renderer.classify("site.conf", "conf"), FileClass::Plain);
    }

    #[test]
    fn test_media_wins_over_inline() {
        let mut config = Config::new(".");
        config.inline_extensions.push(".svg".to_string());
        let renderer = TreeRenderer::new(config, Arc::new(ProgressBar::hidden()));
        assert_eq!(renderer.classify("icon.svg", "svg"), FileClass::Media);
    }

    #[test]
    fn test_language_tag() {
        assert_eq!(language_tag("app.tsx", "tsx"), "tsx");
        assert_eq!(language_tag("Dockerfile", ""), "conf");
        assert_eq!(language_tag("nginx.conf", "conf"), "conf");
    }

    #[test]
    fn test_extension_is_lower_cased() {
        assert_eq!(extension_of(Path::new("README.MD")), "md");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
        assert_eq!(extension_of(Path::new("archive.tar.gz")), "gz");
    }
}
