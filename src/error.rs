//! Error types for titlefix.

use std::path::PathBuf;
use thiserror::Error;

/// Per-file errors. These never abort a run.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FileError {
    /// Path of the file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::Read { path, .. } | FileError::Write { path, .. } => path,
        }
    }

    /// Underlying I/O error, without the path prefix.
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            FileError::Read { source, .. } | FileError::Write { source, .. } => source,
        }
    }
}

/// Run-level errors
#[derive(Debug, Error)]
pub enum FixError {
    #[error("Root directory not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("Failed to walk directory: {0}")]
    Walk(String),

    #[error("Failed to walk {path:?}: {message}")]
    WalkEntry { path: PathBuf, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<config::ConfigError> for FixError {
    fn from(err: config::ConfigError) -> Self {
        FixError::Config(err.to_string())
    }
}

impl From<walkdir::Error> for FixError {
    fn from(err: walkdir::Error) -> Self {
        match err.path() {
            Some(path) => FixError::WalkEntry {
                path: path.to_path_buf(),
                message: err
                    .io_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string()),
            },
            None => FixError::Walk(err.to_string()),
        }
    }
}
