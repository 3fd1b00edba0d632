/*!
 * Configuration handling for mdtree
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::{MdTreeError, Result};
use crate::utils::{
    default_output_dir, to_owned_list, DEFAULT_EXCLUDED, DEFAULT_INLINE, DEFAULT_MEDIA,
};

/// Default recursion depth
pub const DEFAULT_DEPTH: usize = 3;

/// File created and removed to check that the output directory is writable
const WRITE_PROBE_FILE: &str = "temp_permission_test.txt";

/// Command-line arguments for mdtree
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "mdtree",
    version = env!("CARGO_PKG_VERSION"),
    about = "Generate a markdown snapshot of a project tree for LLM context",
    long_about = "Walks a project directory and writes a markdown document describing its structure, inlining the contents of recognized source files as fenced code blocks."
)]
pub struct Args {
    /// Project directory to render
    #[clap(default_value = ".")]
    pub directory_path: String,

    /// Maximum depth below the project root
    #[clap(short, long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Directory the markdown document is written to (defaults to ~/Documents)
    #[clap(short, long)]
    pub output_dir: Option<String>,

    /// Do not read the project's .gitignore file
    #[clap(long)]
    pub no_gitignore: bool,

    /// Append the list of errors encountered to the written document
    #[clap(long)]
    pub append_errors: bool,

    /// Print the written document to stdout
    #[clap(long)]
    pub print: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Project root to render
    pub target_dir: PathBuf,

    /// Directory the document is written to
    pub output_dir: PathBuf,

    /// Maximum depth; the root's direct children are at depth 0
    pub max_depth: usize,

    /// Extensions (with leading dot) or exact file names whose content is inlined
    pub inline_extensions: Vec<String>,

    /// Extensions (with leading dot) or file names listed without content
    pub media_extensions: Vec<String>,

    /// Folder names under the root that are never rendered
    pub excluded_folders: Vec<String>,

    /// Whether to read `.gitignore` from the project root
    pub respect_gitignore: bool,

    /// Append the errors section to the written document
    pub append_errors: bool,

    /// Echo the written document to stdout
    pub print: bool,
}

impl Config {
    /// Configuration with the default lists for a project root
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            output_dir: default_output_dir(),
            max_depth: DEFAULT_DEPTH,
            inline_extensions: to_owned_list(&DEFAULT_INLINE),
            media_extensions: to_owned_list(&DEFAULT_MEDIA),
            excluded_folders: to_owned_list(&DEFAULT_EXCLUDED),
            respect_gitignore: true,
            append_errors: false,
            print: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let mut config = Self::new(args.directory_path);
        if let Some(dir) = args.output_dir {
            config.output_dir = PathBuf::from(dir);
        }
        config.max_depth = args.depth;
        config.respect_gitignore = !args.no_gitignore;
        config.append_errors = args.append_errors;
        config.print = args.print;
        config
    }

    /// Validate the configuration before any traversal happens
    pub fn validate(&self) -> Result<()> {
        if !self.target_dir.is_dir() {
            return Err(MdTreeError::PathNotFound(format!(
                "Project directory not found: {}",
                self.target_dir.display()
            )));
        }

        if !self.output_dir.is_dir() {
            return Err(MdTreeError::PathNotFound(format!(
                "Output directory not found: {}",
                self.output_dir.display()
            )));
        }

        crate::ensure!(
            can_write_to_directory(&self.output_dir),
            InvalidArgument,
            "Cannot write to the output directory: {}",
            self.output_dir.display()
        );

        Ok(())
    }
}

/// Check writability by creating and removing a probe file
fn can_write_to_directory(dir: &Path) -> bool {
    let probe = dir.join(WRITE_PROBE_FILE);
    fs::write(&probe, "test").and_then(|_| fs::remove_file(&probe)).is_ok()
}
