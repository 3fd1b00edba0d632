//! Global error handling for mdtree
//!
//! Two kinds of failure exist: fatal errors that stop a run before or after
//! traversal (`MdTreeError`), and per-entry problems that are collected while
//! walking and reported alongside the output (`EntryError`).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error type for mdtree operations
#[derive(Error, Debug)]
pub enum MdTreeError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The output document could not be written
    #[error("Error writing to output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Path not found
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Specialized Result type for mdtree operations
pub type Result<T> = std::result::Result<T, MdTreeError>;

/// Recoverable problem encountered while walking the tree.
///
/// The `Display` form is the human-readable line shown under
/// "Errors Encountered".
#[derive(Error, Debug)]
pub enum EntryError {
    /// A directory could not be listed; its subtree is treated as empty
    #[error("Error accessing {}: {source}", .path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file selected for inlining is not valid UTF-8
    #[error("Binary or undecodable file skipped: {}", .path.display())]
    Undecodable { path: PathBuf },

    /// Any other failure while reading a file selected for inlining
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The project's ignore file could not be parsed
    #[error("Error reading .gitignore: {message}")]
    IgnoreFile { path: PathBuf, message: String },
}

/// Creates an MdTreeError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::MdTreeError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// main returns io::Result, so fatal errors convert back at the boundary
impl From<MdTreeError> for io::Error {
    fn from(err: MdTreeError) -> Self {
        let kind = match &err {
            MdTreeError::Io(e) => e.kind(),
            MdTreeError::Write { source, .. } => source.kind(),
            MdTreeError::PathNotFound(_) => io::ErrorKind::NotFound,
            MdTreeError::InvalidArgument(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_positive(n: i32) -> Result<i32> {
        crate::ensure!(n >= 0, InvalidArgument, "depth must be non-negative, got {}", n);
        Ok(n)
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(check_positive(3).unwrap(), 3);
        let err = check_positive(-1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: depth must be non-negative, got -1"
        );
    }

    #[test]
    fn test_entry_error_messages() {
        let err = EntryError::Undecodable {
            path: PathBuf::from("/p/logo.txt"),
        };
        assert_eq!(err.to_string(), "Binary or undecodable file skipped: /p/logo.txt");

        let err = EntryError::Listing {
            path: PathBuf::from("/p/locked"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error accessing /p/locked: denied");
    }

    #[test]
    fn test_into_io_error_keeps_kind() {
        let err: io::Error = crate::error!(PathNotFound, "missing").into();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("missing"));

        let err: io::Error = crate::error!(InvalidArgument, "bad root").into();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
