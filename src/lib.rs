/*!
 * mdtree - Generate a markdown snapshot of a project tree for LLM context
 *
 * This library walks a directory tree and renders it as a markdown list,
 * inlining the contents of recognized source files as fenced code blocks.
 */

pub mod config;
pub mod error;
pub mod matcher;
pub mod renderer;
pub mod report;
pub mod types;
pub mod utils;
pub mod writer;


use std::sync::Arc;

use indicatif::ProgressBar;

// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{EntryError, MdTreeError, Result};
pub use matcher::{load_ignore_spec, IgnoreMatcher};
pub use renderer::{FileClass, TreeRenderer};
pub use report::{ReportFormat, Reporter, RunReport};
pub use types::{RenderOutput, RenderStats, RenderedEntry};
pub use utils::{output_file_name, sanitize_file_name};
pub use writer::MarkdownWriter;

/// Render the configured project root without touching the output directory
pub fn render_tree(config: &Config) -> Result<RenderOutput> {
    TreeRenderer::new(config.clone(), Arc::new(ProgressBar::hidden())).render()
}
